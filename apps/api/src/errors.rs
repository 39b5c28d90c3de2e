use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::DocumentError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::Document(e) => document_error_parts(e),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                let message = match e {
                    LlmError::Blocked { reason } => {
                        format!("The model declined to answer ({reason})")
                    }
                    _ => "An AI processing error occurred".to_string(),
                };
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", message)
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

fn document_error_parts(e: &DocumentError) -> (StatusCode, &'static str, String) {
    match e {
        DocumentError::Empty | DocumentError::NotPdf | DocumentError::NoPages => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_DOCUMENT",
            e.to_string(),
        ),
        DocumentError::Encrypted => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "ENCRYPTED_DOCUMENT",
            e.to_string(),
        ),
        DocumentError::Rendering { .. } | DocumentError::Encoding(_) => {
            tracing::warn!("Document rendering failed: {e}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_DOCUMENT",
                "The resume could not be rendered as a PDF page".to_string(),
            )
        }
        DocumentError::Library(msg) => {
            tracing::error!("PDF library error: {msg}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "RENDERER_UNAVAILABLE",
                "The document renderer is unavailable".to_string(),
            )
        }
    }
}
