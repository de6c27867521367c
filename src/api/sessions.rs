//! Event stream and session teardown.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use serde::Deserialize;
use tokio_stream::wrappers::{BroadcastStream, errors::BroadcastStreamRecvError};

use super::session;
use crate::AppState;
use crate::error::AppError;
use crate::events::sse_event;
use crate::ui::sse::html_sse_event;

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);
const KEEP_ALIVE_FRAME: &str = ": keep-alive\n\n";

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// `json` for serialized events instead of HTML fragments.
    format: Option<String>,
}

/// GET /api/sessions/{id}/events - SSE stream of the session's events.
pub async fn events(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<EventsQuery>,
) -> Result<Response, AppError> {
    let session = session(&state, &id)?;
    let mut events = BroadcastStream::new(session.subscribe());
    let json = query.format.as_deref() == Some("json");
    // The stream must not keep the session alive.
    drop(session);

    tracing::debug!(session_id = %id, json, "Event stream opened");

    let sse_stream = async_stream::stream! {
        let mut keep_alive = tokio::time::interval(KEEP_ALIVE_INTERVAL);
        keep_alive.tick().await;

        loop {
            let frame = tokio::select! {
                received = events.next() => match received {
                    Some(Ok(evt)) if json => Some(sse_event(&evt)),
                    Some(Ok(evt)) => Some(html_sse_event(&id, &evt)),
                    Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                        tracing::warn!(session_id = %id, skipped, "Event stream lagged");
                        None
                    }
                    None => break,
                },
                _ = keep_alive.tick() => Some(KEEP_ALIVE_FRAME.to_string()),
            };

            if let Some(frame) = frame {
                yield Ok::<String, Infallible>(frame);
            }
        }

        tracing::debug!(session_id = %id, "Event stream closed");
    };

    Ok(build_sse_response(Body::from_stream(sse_stream)))
}

/// POST /api/sessions/{id}/close - the page went away.
///
/// Sent with `navigator.sendBeacon`; unknown ids are not an error.
pub async fn close(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if let Some(session) = state.sessions.remove(&id) {
        tracing::debug!(
            name: "session.closed",
            session_id = %id,
            age_secs = session.age().as_secs(),
            "Session closed by page"
        );
    }
    StatusCode::NO_CONTENT
}

fn build_sse_response(body: Body) -> Response {
    let mut resp = body.into_response();
    let h = resp.headers_mut();
    h.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/event-stream"));
    h.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert("x-accel-buffering", HeaderValue::from_static("no"));
    resp
}
