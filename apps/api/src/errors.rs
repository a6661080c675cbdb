use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more mandatory form fields were blank. No letter is generated.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredField(Vec<&'static str>),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The text-generation service failed or returned nothing usable. Not retried.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// A prompt template was bound without one of its declared variables,
    /// or declares variables that do not match its placeholders.
    #[error("Template '{template}' has unbound or undeclared variable '{variable}'")]
    MalformedTemplate {
        template: &'static str,
        variable: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingRequiredField(fields) => (
                StatusCode::BAD_REQUEST,
                "MISSING_REQUIRED_FIELD",
                format!(
                    "Please complete all required fields. Missing: {}",
                    fields.join(", ")
                ),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "The letter could not be generated. Please try again.".to_string(),
                )
            }
            AppError::MalformedTemplate { template, variable } => {
                tracing::error!("Template '{template}' has bad variable '{variable}'");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    "An internal prompt error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
