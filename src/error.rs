//! Error types surfaced by the HTTP layer.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::events::Notice;
use crate::ui::components::notice_fragment;

/// User-correctable input problems. Shown inline, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a message")]
    EmptyMessage,

    #[error("Please describe your symptoms")]
    EmptySymptoms,

    #[error("Please fill in: {}", .0.join(", "))]
    MissingContactFields(Vec<&'static str>),

    #[error("Please select a subject")]
    UnknownSubject,

    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),
}

impl ValidationError {
    /// Notice shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            Self::EmptySymptoms => Notice::destructive(
                "Please describe your symptoms",
                "We need this information to help you better.",
            ),
            other => Notice::destructive(other.to_string(), ""),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Unknown symptom category: {0}")]
    UnknownCategory(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SessionNotFound(_) | Self::UnknownCategory(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let notice = match &self {
            Self::Validation(err) => {
                tracing::debug!(error = %err, "Rejected input");
                err.notice()
            }
            Self::SessionNotFound(id) => {
                tracing::info!(session_id = %id, "Session not found");
                Notice::destructive(
                    "This page has expired",
                    "Reload the page to start again.",
                )
            }
            Self::UnknownCategory(id) => {
                tracing::info!(category = %id, "Unknown symptom category");
                Notice::destructive(self.to_string(), "")
            }
        };

        (self.status(), Html(notice_fragment(&notice))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ValidationError::MissingContactFields(vec!["name", "email"]);
        assert_eq!(err.to_string(), "Please fill in: name, email");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(ValidationError::EmptyMessage).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::SessionNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
