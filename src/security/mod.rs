//! Request guards applied to every route.

pub mod rate_limit;
pub mod timeout;
