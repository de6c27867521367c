//! Full-page handlers.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Html,
};
use serde::Deserialize;

use crate::AppState;
use crate::session::ChatState;
use crate::ui::layout::{html_shell, navbar};
use crate::ui::pages::{self, AboutTab, DashboardTab};

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    tab: Option<String>,
}

/// GET /
pub async fn home() -> Html<String> {
    Html(html_shell("Home", "/", None, &pages::landing()))
}

/// GET /consultation - opens a session for the symptom selector.
pub async fn consultation(State(state): State<AppState>) -> Html<String> {
    let session = state.sessions.create();
    tracing::debug!(session_id = %session.id(), page = "consultation", "Session opened");
    let body = pages::consultation(session.id(), &session.symptoms());
    Html(html_shell(
        "Consultation",
        "/consultation",
        Some(session.id()),
        &body,
    ))
}

/// GET /about?tab=mission|team|values
pub async fn about(Query(query): Query<TabQuery>) -> Html<String> {
    let tab = AboutTab::parse(query.tab.as_deref());
    Html(html_shell("About Us", "/about", None, &pages::about(tab)))
}

/// GET /contact - opens a session for the contact form.
pub async fn contact(State(state): State<AppState>) -> Html<String> {
    let session = state.sessions.create();
    tracing::debug!(session_id = %session.id(), page = "contact", "Session opened");
    let body = pages::contact(session.id(), &session.contact());
    Html(html_shell("Contact", "/contact", Some(session.id()), &body))
}

/// GET /dashboard?tab=assistant|health|appointments|records
///
/// Only the assistant tab needs a session.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<TabQuery>,
) -> Html<String> {
    let tab = DashboardTab::parse(query.tab.as_deref());
    if tab != DashboardTab::Assistant {
        let body = pages::dashboard(tab, "", &ChatState::default());
        return Html(html_shell("Dashboard", "/dashboard", None, &body));
    }

    let session = state.sessions.create();
    tracing::debug!(session_id = %session.id(), page = "dashboard", "Session opened");
    let body = pages::dashboard(tab, session.id(), &session.chat());
    Html(html_shell(
        "Dashboard",
        "/dashboard",
        Some(session.id()),
        &body,
    ))
}

/// GET /login
pub async fn login() -> Html<String> {
    Html(html_shell("Login", "/login", None, &pages::login()))
}

#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    #[serde(default)]
    open: bool,
    #[serde(default)]
    active: String,
}

/// GET /fragments/nav?open=<bool>&active=<route> - mobile menu toggle.
pub async fn nav_fragment(Query(query): Query<NavQuery>) -> Html<String> {
    Html(navbar(&query.active, query.open))
}

/// Fallback for every unknown path.
pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = %uri.path(), "Page not found");
    (
        StatusCode::NOT_FOUND,
        Html(html_shell(
            "Page Not Found",
            "",
            None,
            &pages::not_found(uri.path()),
        )),
    )
}
