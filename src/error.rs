//! Application error type and HTTP response mapping.
//!
//! Exactly two kinds of failure reach the caller: not-found (unknown platform
//! or missing document) and a generic 500 for read or render failures. Every
//! error response is a JSON object with a single `error` field; 500 detail is
//! logged, never surfaced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Platform not found")]
    PlatformNotFound(String),

    #[error("Workflow documentation not found")]
    WorkflowNotFound(String),

    #[error("Microservice documentation not found")]
    MicroserviceNotFound(String),

    #[error("Failed to read schema file")]
    SchemaRead(#[source] io::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::PlatformNotFound(id) => {
                tracing::debug!(platform = %id, "unknown platform");
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::WorkflowNotFound(name) | AppError::MicroserviceNotFound(name) => {
                tracing::debug!(document = %name, "document not found");
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::SchemaRead(_) => {
                tracing::error!(error = ?self, "schema read failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Template(_) => {
                tracing::error!(error = ?self, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
