//! Chat widget endpoints.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Html,
};
use serde::Deserialize;

use super::session;
use crate::AppState;
use crate::assistant::{LANGUAGES, Language, Message};
use crate::error::{AppError, ValidationError};
use crate::ui::chat::{language_picker, message_bubble};

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    message: String,
}

/// POST /api/sessions/{id}/chat - append the user's message.
///
/// Responds with the user's bubble; the reply arrives later over the
/// event stream.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>, AppError> {
    let session = session(&state, &id)?;
    let message = state.assistant.submit(&session, &form.message)?;
    tracing::info!(
        name: "chat.message.received",
        session_id = %id,
        message_id = %message.id,
        content_length = message.content.len(),
        "Chat message received"
    );
    Ok(Html(message_bubble(&message)))
}

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    #[serde(default)]
    code: String,
}

/// POST /api/sessions/{id}/language - change the reply language.
pub async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<LanguageForm>,
) -> Result<Html<String>, AppError> {
    let session = session(&state, &id)?;
    let language = Language::from_code(&form.code)
        .ok_or_else(|| ValidationError::UnknownLanguage(form.code.clone()))?;
    session.set_language(language);
    tracing::debug!(session_id = %id, language = language.code, "Language changed");
    Ok(Html(language_picker(&id, language)))
}

/// GET /api/sessions/{id}/messages - full history as JSON.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(session(&state, &id)?.messages()))
}

/// GET /api/languages
pub async fn list_languages() -> Json<&'static [Language]> {
    Json(&LANGUAGES)
}
