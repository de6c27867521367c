//! Symptom selector endpoints.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Html,
};
use serde::Deserialize;

use super::session;
use crate::AppState;
use crate::error::AppError;
use crate::symptoms::{CATALOG, SymptomCategory};
use crate::ui::components::notice_fragment;
use crate::ui::symptoms::{info_panel, symptom_grid};

/// POST /api/sessions/{id}/symptoms/{category}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path((id, category)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let session = session(&state, &id)?;
    let (selected, selection) = session.with_symptoms(|selection| {
        selection
            .toggle(&category)
            .map(|selected| (selected, selection.clone()))
    })?;
    tracing::debug!(session_id = %id, %category, selected, "Symptom toggled");
    Ok(Html(symptom_grid(&id, &selection)))
}

/// GET /api/sessions/{id}/symptoms/{category}/info - pointer entered a tile.
pub async fn show_info(
    State(state): State<AppState>,
    Path((id, category)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let session = session(&state, &id)?;
    let shown = session.with_symptoms(|selection| selection.show(&category))?;
    Ok(Html(info_panel(&id, Some(shown))))
}

/// DELETE /api/sessions/{id}/symptoms/info - close button on the panel.
pub async fn dismiss_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    session(&state, &id)?.with_symptoms(|selection| selection.dismiss());
    Ok(Html(info_panel(&id, None)))
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    description: String,
}

/// POST /api/sessions/{id}/symptoms/submit - validate the request.
///
/// Nothing is sent anywhere; the response is the confirmation notice.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SubmitForm>,
) -> Result<Html<String>, AppError> {
    let session = session(&state, &id)?;
    let notice = session.with_symptoms(|selection| selection.submit(&form.description))?;
    tracing::info!(
        name: "consultation.requested",
        session_id = %id,
        categories = session.symptoms().selected_count(),
        "Consultation request accepted"
    );
    Ok(Html(notice_fragment(&notice)))
}

/// GET /api/symptoms - the fixed category catalog.
pub async fn catalog() -> Json<&'static [SymptomCategory]> {
    Json(&CATALOG)
}
