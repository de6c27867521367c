//! Contact form endpoint.

use axum::{
    Form,
    extract::{Path, State},
    response::Html,
};

use super::session;
use crate::AppState;
use crate::contact::{self, ContactForm, SubmitOutcome};
use crate::error::AppError;
use crate::ui::contact::contact_form;

/// POST /api/sessions/{id}/contact
///
/// Responds with the form in its "Sending..." state. The cleared form and
/// the confirmation notice follow over the event stream.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, AppError> {
    let session = session(&state, &id)?;
    let outcome = contact::submit(&session, form, state.config.simulation.contact_delay())?;
    if outcome == SubmitOutcome::Accepted {
        tracing::info!(name: "contact.submitted", session_id = %id, "Contact form submitted");
    }
    Ok(Html(contact_form(&id, &session.contact())))
}
