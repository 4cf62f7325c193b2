use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::documents::pdf::extract_text_blocking;
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

/// Multipart field carrying the uploaded PDF.
pub const UPLOAD_FIELD: &str = "file";

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ChatMessage>, AppError> {
    let (filename, pdf) = read_upload(&mut multipart).await?;
    info!(
        filename = filename.as_deref().unwrap_or("<unnamed>"),
        bytes = pdf.len(),
        "PDF upload received"
    );

    let text = extract_text_blocking(pdf).await?;
    let message = state.formatter.format_profile(&text).await?;

    Ok(Json(message))
}

async fn read_upload(multipart: &mut Multipart) -> Result<(Option<String>, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().map(String::from);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok((filename, bytes));
    }
    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}
