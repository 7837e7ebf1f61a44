mod docx;
mod pdf;
mod plain;

use crate::errors::{AppError, AppResult};

/// Decoder selection for an uploaded document, keyed off the file extension.
/// A closed set: every format the library accepts maps to exactly one decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Plain,
}

impl DocumentFormat {
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if lower.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Plain
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> AppResult<String> {
        match self {
            DocumentFormat::Pdf => pdf::decode(bytes),
            DocumentFormat::Docx => docx::decode(bytes),
            DocumentFormat::Plain => plain::decode(bytes),
        }
    }
}

/// Extract a single text blob from a downloaded file.
pub fn extract_text(bytes: &[u8], path: &str) -> AppResult<String> {
    DocumentFormat::from_path(path).decode(bytes)
}

/// Post-extraction bounds: a floor below which the document is useless for
/// prompting, and a ceiling past which the text is head-truncated to bound
/// model latency and cost.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionLimits {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl ExtractionLimits {
    pub fn apply(&self, text: &str) -> AppResult<String> {
        let trimmed = text.trim();
        if trimmed.chars().count() < self.min_chars {
            return Err(AppError::InsufficientContent(format!(
                "extracted text is shorter than {} characters",
                self.min_chars
            )));
        }
        Ok(truncate_chars(trimmed, self.max_chars))
    }
}

// Head-truncation on a char boundary; byte indexing would panic mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
