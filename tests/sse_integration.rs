use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use futures::StreamExt;
use healthconsult::AppState;
use healthconsult::config::AppConfig;
use healthconsult::contact::ContactForm;
use healthconsult::server::build_app;
use tower::ServiceExt;

fn test_state() -> AppState {
    let mut config = AppConfig::default();
    config.resilience.rate_limit_enabled = false;
    AppState::new(Arc::new(config))
}

/// Read SSE frames until one carries `event: {last}`.
async fn read_until(body: Body, last: &str) -> anyhow::Result<String> {
    let mut stream = body.into_data_stream();
    let mut seen = String::new();
    let marker = format!("event: {last}\n");

    while let Some(chunk) = stream.next().await {
        seen.push_str(std::str::from_utf8(&chunk?)?);
        if seen.contains(&marker) {
            return Ok(seen);
        }
    }
    anyhow::bail!("stream ended before {last}: {seen}")
}

async fn open_stream(state: &AppState, uri: &str) -> anyhow::Result<axum::response::Response> {
    let app = build_app(state.clone());
    let request = Request::builder().uri(uri).body(Body::empty())?;
    Ok(app.oneshot(request).await?)
}

#[tokio::test(start_paused = true)]
async fn test_chat_reply_streams_as_json() -> anyhow::Result<()> {
    let state = test_state();
    let session = state.sessions.create();

    let response = open_stream(
        &state,
        &format!("/api/sessions/{}/events?format=json", session.id()),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );

    state.assistant.submit(&session, "I can't sleep")?;

    let frames = read_until(response.into_body(), "chat-idle").await?;
    let pending = frames.find("event: chat-pending").expect("pending frame");
    let message = frames.find("event: chat-message").expect("message frame");
    let idle = frames.find("event: chat-idle").expect("idle frame");
    assert!(pending < message && message < idle);
    assert!(frames.contains(r#""type":"chat.message""#));
    assert!(frames.contains(r#""sender":"assistant""#));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_contact_delivery_streams_html() -> anyhow::Result<()> {
    let state = test_state();
    let session = state.sessions.create();

    let response = open_stream(&state, &format!("/api/sessions/{}/events", session.id())).await?;

    let form = ContactForm {
        name: "Ann".into(),
        email: "a@b.com".into(),
        phone: String::new(),
        subject: "General Inquiry".into(),
        message: "Hi".into(),
    };
    healthconsult::contact::submit(&session, form, Duration::from_millis(1500))?;

    let frames = read_until(response.into_body(), "notice").await?;
    assert!(frames.contains("event: contact-sent\n"));
    assert!(frames.contains(r#"id="contact-form""#));
    assert!(frames.contains("Message sent"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_session_stream_is_404() -> anyhow::Result<()> {
    let state = test_state();
    let response = open_stream(&state, "/api/sessions/missing/events").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stream_ends_when_session_closes() -> anyhow::Result<()> {
    let state = test_state();
    let session = state.sessions.create();
    let id = session.id().to_string();

    let response = open_stream(&state, &format!("/api/sessions/{id}/events")).await?;
    state.sessions.remove(&id);
    drop(session);

    let mut stream = response.into_body().into_data_stream();
    while let Some(chunk) = stream.next().await {
        assert_eq!(&chunk?[..], b": keep-alive\n\n");
    }
    Ok(())
}
