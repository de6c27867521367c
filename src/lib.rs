//! HealthConsult
//!
//! Server-rendered demo site for a telehealth service. Pages are plain HTML
//! enhanced with HTMX; the interactive widgets (symptom selector, chat
//! assistant, contact form) keep their state in a per-page-view session on
//! the server and receive delayed results over SSE.
//!
//! # Architecture
//!
//! - **Server**: Axum router with rate limiting, timeouts and request tracing
//! - **Sessions**: one in-memory session per rendered page, with a
//!   cancellable queue of delayed jobs
//! - **Assistant**: keyword-matched canned advice behind a `Responder` trait
//! - **UI**: HTML assembled server-side, swapped in by HTMX
//!
//! # Modules
//!
//! - [`api`]: HTTP handlers
//! - [`assistant`]: chat messages, keyword matcher, label translator
//! - [`symptoms`]: symptom catalog and selection state
//! - [`contact`]: contact form validation and delivery
//! - [`session`]: page-view sessions and deferred jobs
//! - [`events`]: events pushed to the browser
//! - [`ui`]: HTML rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod api;
pub mod assistant;
pub mod config;
pub mod contact;
pub mod error;
pub mod events;
pub mod security;
pub mod server;
pub mod session;
pub mod symptoms;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::assistant::ChatAssistant;
use crate::config::AppConfig;
use crate::security::rate_limit::SimpleRateLimiter;
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page-view sessions.
    pub sessions: SessionStore,
    /// Canned chat assistant.
    pub assistant: ChatAssistant,
    /// Global Rate Limiter
    pub rate_limiter: Arc<SimpleRateLimiter>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let rate_limiter = Arc::new(SimpleRateLimiter::new(
            config.resilience.requests_per_second,
            config.resilience.burst_size,
        ));
        Self {
            sessions: SessionStore::new(),
            assistant: ChatAssistant::new(config.simulation.chat_delay()),
            rate_limiter,
            config,
        }
    }
}
