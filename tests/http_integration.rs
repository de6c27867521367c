use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use healthconsult::AppState;
use healthconsult::assistant::matcher::HEADACHE_ADVICE;
use healthconsult::config::AppConfig;
use healthconsult::server::build_app;
use serde_json::Value;

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.resilience.rate_limit_enabled = false;
    config
}

fn setup() -> (TestServer, AppState) {
    let state = AppState::new(Arc::new(test_config()));
    let server = TestServer::new(build_app(state.clone())).expect("test server");
    (server, state)
}

/// Pull the page-view session id out of a rendered page.
fn session_id_from(html: &str) -> String {
    let marker = r#"data-session-id=""#;
    let start = html.find(marker).expect("page has a session") + marker.len();
    let end = start + html[start..].find('"').expect("closing quote");
    html[start..end].to_string()
}

#[tokio::test]
async fn test_static_pages_render() {
    let (server, _) = setup();

    for (path, needle) in [
        ("/", "Your Health Journey"),
        ("/about", "Our Mission"),
        ("/about?tab=values", "Our Core Values"),
        ("/about?tab=nonsense", "Founded in 2020"),
        ("/login", "Sign In"),
        ("/dashboard?tab=records", "Medical Records Coming Soon"),
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{path}");
        assert!(response.text().contains(needle), "{path} should contain {needle}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let (server, _) = setup();

    let response = server.get("/no/such/page").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Oops! Page not found"));
}

#[tokio::test]
async fn test_interactive_pages_open_sessions() {
    let (server, state) = setup();
    assert!(state.sessions.is_empty());

    for path in ["/consultation", "/contact", "/dashboard"] {
        let html = server.get(path).await.text();
        let id = session_id_from(&html);
        assert!(state.sessions.get(&id).is_some(), "{path} session");
    }
    assert_eq!(state.sessions.len(), 3);

    // Non-assistant dashboard tabs need no session.
    let html = server.get("/dashboard?tab=health").await.text();
    assert!(!html.contains("data-session-id"));
    assert_eq!(state.sessions.len(), 3);
}

#[tokio::test]
async fn test_nav_fragment_toggles_menu() {
    let (server, _) = setup();

    let open = server.get("/fragments/nav?open=true&active=/contact").await;
    assert_eq!(open.status_code(), StatusCode::OK);
    let html = open.text();
    assert!(html.starts_with(r#"<nav id="site-nav""#));
    assert!(html.contains(r#"aria-expanded="true""#));

    let closed = server.get("/fragments/nav").await.text();
    assert!(closed.contains(r#"aria-expanded="false""#));
}

#[tokio::test]
async fn test_blank_chat_message_is_rejected() {
    let (server, state) = setup();
    let session = state.sessions.create();

    let response = server
        .post(&format!("/api/sessions/{}/chat", session.id()))
        .form(&[("message", "   ")])
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Please enter a message"));
    assert_eq!(session.message_count(), 1);
    assert!(!session.is_reply_pending());
}

#[tokio::test]
async fn test_chat_message_returns_user_bubble() {
    let (server, state) = setup();
    let session = state.sessions.create();

    let response = server
        .post(&format!("/api/sessions/{}/chat", session.id()))
        .form(&[("message", "I have a <b>headache</b>")])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains(r#"data-sender="user""#));
    assert!(html.contains("I have a &lt;b&gt;headache&lt;/b&gt;"));
    assert!(session.is_reply_pending());
}

#[tokio::test(start_paused = true)]
async fn test_translated_reply_arrives_after_delay() {
    let (server, state) = setup();
    let session = state.sessions.create();
    let id = session.id().to_string();

    let picker = server
        .post(&format!("/api/sessions/{id}/language"))
        .form(&[("code", "de")])
        .await;
    assert_eq!(picker.status_code(), StatusCode::OK);
    assert!(picker.text().contains(r#"<option value="de" selected>German</option>"#));

    server
        .post(&format!("/api/sessions/{id}/chat"))
        .form(&[("message", "I have a headache")])
        .await;

    tokio::time::sleep(Duration::from_millis(1600)).await;

    let messages: Value = server
        .get(&format!("/api/sessions/{id}/messages"))
        .await
        .json();
    let messages = messages.as_array().expect("array");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2]["sender"], "assistant");
    assert_eq!(
        messages[2]["content"],
        format!("{HEADACHE_ADVICE} [Translated to German]")
    );
}

#[tokio::test]
async fn test_unknown_language_is_rejected() {
    let (server, state) = setup();
    let session = state.sessions.create();

    let response = server
        .post(&format!("/api/sessions/{}/language", session.id()))
        .form(&[("code", "xx")])
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(session.language().is_default());
}

#[tokio::test]
async fn test_symptom_toggle_and_info() {
    let (server, state) = setup();
    let session = state.sessions.create();
    let id = session.id().to_string();

    let grid = server
        .post(&format!("/api/sessions/{id}/symptoms/heart/toggle"))
        .await;
    assert_eq!(grid.status_code(), StatusCode::OK);
    assert!(grid.text().contains("1 category selected"));
    assert!(session.symptoms().is_selected("heart"));

    server
        .post(&format!("/api/sessions/{id}/symptoms/heart/toggle"))
        .await;
    assert_eq!(session.symptoms().selected_count(), 0);

    let info = server
        .get(&format!("/api/sessions/{id}/symptoms/brain/info"))
        .await
        .text();
    assert!(info.contains(r#"data-category="brain""#));
    assert_eq!(session.symptoms().showing().map(|c| c.id), Some("brain"));

    let cleared = server
        .delete(&format!("/api/sessions/{id}/symptoms/info"))
        .await
        .text();
    assert_eq!(cleared, r#"<div id="symptom-info"></div>"#);
    assert!(session.symptoms().showing().is_none());

    let unknown = server
        .post(&format!("/api/sessions/{id}/symptoms/lungs/toggle"))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_symptom_submit_validation() {
    let (server, state) = setup();
    let session = state.sessions.create();
    let path = format!("/api/sessions/{}/symptoms/submit", session.id());

    let rejected = server.post(&path).form(&[("description", "")]).await;
    assert_eq!(rejected.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(rejected.text().contains("Please describe your symptoms"));

    let accepted = server
        .post(&path)
        .form(&[("description", "Dizzy since yesterday")])
        .await;
    assert_eq!(accepted.status_code(), StatusCode::OK);
    assert!(accepted.text().contains("Consultation request sent"));
}

#[tokio::test(start_paused = true)]
async fn test_contact_submission_resets_after_delay() {
    let (server, state) = setup();
    let session = state.sessions.create();
    let path = format!("/api/sessions/{}/contact", session.id());

    let form = [
        ("name", "Ann"),
        ("email", "a@b.com"),
        ("phone", ""),
        ("subject", "General Inquiry"),
        ("message", "Hi"),
    ];
    let sending = server.post(&path).form(&form).await;
    assert_eq!(sending.status_code(), StatusCode::OK);
    assert!(sending.text().contains("Sending..."));

    tokio::time::sleep(Duration::from_millis(1600)).await;

    let contact = session.contact();
    assert!(!contact.is_submitting());
    assert!(contact.form().is_empty());
}

#[tokio::test]
async fn test_contact_missing_fields() {
    let (server, state) = setup();
    let session = state.sessions.create();

    let response = server
        .post(&format!("/api/sessions/{}/contact", session.id()))
        .form(&[("name", "Ann"), ("subject", "General Inquiry")])
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Please fill in: email, message"));
    assert!(!session.contact().is_submitting());
}

#[tokio::test]
async fn test_expired_session_is_404() {
    let (server, state) = setup();
    let session = state.sessions.create();
    let id = session.id().to_string();

    let closed = server.post(&format!("/api/sessions/{id}/close")).await;
    assert_eq!(closed.status_code(), StatusCode::NO_CONTENT);
    assert!(session.is_closed());

    let response = server
        .post(&format!("/api/sessions/{id}/chat"))
        .form(&[("message", "hello")])
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("This page has expired"));
}

#[tokio::test]
async fn test_json_catalogs() {
    let (server, _) = setup();

    let symptoms: Value = server.get("/api/symptoms").await.json();
    let ids: Vec<_> = symptoms
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, ["heart", "brain", "digestive", "bone", "fever"]);

    let languages: Value = server.get("/api/languages").await.json();
    assert_eq!(languages[0]["code"], "en");
    assert_eq!(languages.as_array().map(Vec::len), Some(5));

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn test_rate_limit_rejects_when_exhausted() {
    let mut config = AppConfig::default();
    config.resilience.requests_per_second = 0.001;
    config.resilience.burst_size = 2.0;
    let server = TestServer::new(build_app(AppState::new(Arc::new(config)))).expect("server");

    assert_eq!(server.get("/health").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/health").await.status_code(), StatusCode::OK);
    assert_eq!(
        server.get("/health").await.status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );
}
