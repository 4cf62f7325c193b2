use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::documents::pdf::PdfError;
use crate::llm_client::LlmError;
use crate::schema::relations::{self, ForeignKey, UniqueKey};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Causes are logged; response bodies carry only a code and a generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the configured size limit")]
    PayloadTooLarge,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::Pdf(_) | AppError::Llm(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge => ("PAYLOAD_TOO_LARGE", self.to_string()),
            AppError::Database(e) => {
                log_database_error(e);
                ("DATABASE_ERROR", "A database error occurred".to_string())
            }
            AppError::Pdf(e) => {
                tracing::error!("PDF error: {e}");
                ("PDF_ERROR", "The document could not be processed".to_string())
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
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

/// Schema rule named by a failed statement's constraint, if the driver reported one.
#[derive(Debug, PartialEq)]
enum Violated {
    Edge(&'static ForeignKey),
    Unique(&'static UniqueKey),
}

fn violated_rule(err: &sqlx::Error) -> Option<Violated> {
    let constraint = err.as_database_error()?.constraint()?;
    relations::by_constraint(constraint)
        .map(Violated::Edge)
        .or_else(|| relations::unique_by_constraint(constraint).map(Violated::Unique))
}

fn log_database_error(err: &sqlx::Error) {
    match violated_rule(err) {
        Some(Violated::Edge(fk)) => tracing::error!(
            constraint = %fk.constraint_name(),
            child = fk.child,
            parent = fk.parent,
            on_delete = %fk.on_delete,
            "Database error: {err}"
        ),
        Some(Violated::Unique(key)) => tracing::error!(
            constraint = key.name,
            table = key.table,
            columns = ?key.columns,
            "Database error: {err}"
        ),
        None => tracing::error!("Database error: {err}"),
    }
}
