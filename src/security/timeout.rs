use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::AppState;

/// Effective timeout when timeouts are switched off. Keeps the layer stack
/// the same type either way.
const DISABLED_TIMEOUT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

pub fn request_timeout(state: &AppState) -> Duration {
    let resilience = &state.config.resilience;
    if resilience.timeout_disabled {
        DISABLED_TIMEOUT
    } else {
        Duration::from_secs(resilience.request_timeout_secs)
    }
}

/// Answer 408 when a handler has not produced a response in time.
///
/// Only the response head is timed; streaming bodies are unaffected.
pub async fn timeout_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let duration = request_timeout(&state);
    match tokio::time::timeout(duration, next.run(req)).await {
        Ok(res) => res,
        Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
    }
}
