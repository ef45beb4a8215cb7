//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medinfo_llm::LlmError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the completion routes.
#[derive(Error, Debug)]
pub enum AppError {
    /// The submitted text was empty after trimming.
    #[error("Le texte est vide.")]
    EmptyText,

    /// The remote completion call failed, whatever the origin.
    #[error("Erreur Groq : {0}")]
    Completion(#[from] LlmError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Completion(ref source) = self {
            tracing::error!("completion call failed: {}", source);
        }

        // Failures are reported with HTTP 200 and an `error` field; the
        // frontend inspects the body, not the status code.
        (
            StatusCode::OK,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use medinfo_llm::LlmError;

    #[test]
    fn empty_text_message_is_fixed() {
        assert_eq!(AppError::EmptyText.to_string(), "Le texte est vide.");
    }

    #[test]
    fn completion_errors_share_one_prefix() {
        let err = AppError::from(LlmError::MissingContent);
        assert!(err.to_string().starts_with("Erreur Groq : "));
    }
}
