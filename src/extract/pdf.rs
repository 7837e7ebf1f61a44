use crate::errors::{AppError, AppResult};

/// Decode a digital PDF's embedded text layer.
pub fn decode(bytes: &[u8]) -> AppResult<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::ExtractionFailed(format!("PDF parse failed: {}", e)))
}
