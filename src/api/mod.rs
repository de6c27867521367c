//! HTTP handlers.
//!
//! Page routes render full documents; everything under `/api/sessions/{id}`
//! acts on one page-view session and answers with an HTML fragment for HTMX
//! to swap in (or JSON where noted).

pub mod chat;
pub mod contact;
pub mod pages;
pub mod sessions;
pub mod symptoms;

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use serde::Serialize;

use crate::AppState;
use crate::error::AppError;
use crate::session::Session;

/// Look up the session a fragment request belongs to.
pub(crate) fn session(state: &AppState, id: &str) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
}

/// All application routes. Middleware is layered on in [`crate::server`].
pub fn router() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/consultation", get(pages::consultation))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/dashboard", get(pages::dashboard))
        .route("/login", get(pages::login))
        .route("/fragments/nav", get(pages::nav_fragment))
        // Chat
        .route("/api/sessions/{id}/chat", post(chat::send_message))
        .route("/api/sessions/{id}/language", post(chat::set_language))
        .route("/api/sessions/{id}/messages", get(chat::list_messages))
        .route("/api/languages", get(chat::list_languages))
        // Symptoms
        .route(
            "/api/sessions/{id}/symptoms/{category}/toggle",
            post(symptoms::toggle),
        )
        .route(
            "/api/sessions/{id}/symptoms/{category}/info",
            get(symptoms::show_info),
        )
        .route(
            "/api/sessions/{id}/symptoms/info",
            delete(symptoms::dismiss_info),
        )
        .route("/api/sessions/{id}/symptoms/submit", post(symptoms::submit))
        .route("/api/symptoms", get(symptoms::catalog))
        // Contact
        .route("/api/sessions/{id}/contact", post(contact::submit))
        // Session lifetime
        .route("/api/sessions/{id}/events", get(sessions::events))
        .route("/api/sessions/{id}/close", post(sessions::close))
        .route("/health", get(health))
        .fallback(pages::not_found)
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    sessions: usize,
}

/// GET /health - Liveness probe.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        sessions: state.sessions.len(),
    })
}
