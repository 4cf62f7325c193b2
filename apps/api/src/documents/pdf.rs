use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Uploaded document is empty")]
    Empty,

    #[error("Failed to parse PDF: {0}")]
    Parse(String),
}

/// Extracts the concatenated text layer of every page.
/// Malformed input fails as a whole; no partial text is returned.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, PdfError> {
    if pdf_bytes.is_empty() {
        return Err(PdfError::Empty);
    }

    let text =
        pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    debug!(
        input_bytes = pdf_bytes.len(),
        text_chars = text.chars().count(),
        "PDF text extracted"
    );
    Ok(text)
}

/// Runs `extract_text` on the blocking pool. A panic inside the PDF library
/// is reported as a parse failure.
pub async fn extract_text_blocking(pdf_bytes: Bytes) -> Result<String, PdfError> {
    tokio::task::spawn_blocking(move || extract_text(&pdf_bytes))
        .await
        .map_err(|e| PdfError::Parse(format!("PDF extraction task failed: {e}")))?
}
