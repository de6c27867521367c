//! Page-view sessions.
//!
//! Every interactive page render gets its own [`Session`] holding the state
//! a browser would otherwise keep in memory: chat history, symptom
//! selection and contact form. Sessions are identified by UUID and live
//! until the page is closed or they sit idle past the configured timeout.
//!
//! # Architecture
//!
//! - [`Session`]: state of one rendered page
//! - [`SessionStore`]: thread-safe store for all active sessions
//! - [`DeferredQueue`]: per-session delayed jobs, cancelled with the session
//!
//! # Example
//!
//! ```rust
//! use healthconsult::assistant::Message;
//! use healthconsult::session::SessionStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = SessionStore::new();
//! let session = store.create();
//! session.push_message(Message::user("Hello!"));
//!
//! // The greeting is always first.
//! assert_eq!(session.messages().len(), 2);
//! # }
//! ```

pub mod deferred;
mod thread;

pub use deferred::DeferredQueue;
pub use thread::{ChatState, Session, SessionStore};
