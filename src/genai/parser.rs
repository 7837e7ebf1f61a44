use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::ArtifactKind;

// The prompts forbid markdown, but models wrap output in fences often enough
// that stripping one outer fence pair is part of the parsing contract.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A```[a-zA-Z]*\s*(.*?)\s*```\z").expect("FENCE_RE is a valid regex pattern")
});

/// Strip one surrounding markdown code fence, if present.
/// Idempotent: unfenced input comes back trimmed and otherwise untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match FENCE_RE.captures(trimmed) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(trimmed),
        None => trimmed,
    }
}

/// Parse and shape-check a model completion into the artifact payload.
///
/// The payload must be a non-empty JSON array whose elements each carry the
/// kind's required keys. Anything else is the model breaking the prompt
/// contract, reported as a retryable invalid-output error.
pub fn parse_generated_payload(kind: ArtifactKind, raw: &str) -> AppResult<Value> {
    let cleaned = strip_code_fence(raw);

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| AppError::InvalidModelOutput(format!("output is not valid JSON: {}", e)))?;

    let items = value.as_array().ok_or_else(|| {
        AppError::InvalidModelOutput("output is not a JSON array".to_string())
    })?;

    if items.is_empty() {
        return Err(AppError::InvalidModelOutput(
            "output array is empty".to_string(),
        ));
    }

    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| {
            AppError::InvalidModelOutput(format!("element {} is not an object", index))
        })?;

        for key in kind.required_keys() {
            if !object.contains_key(*key) {
                return Err(AppError::InvalidModelOutput(format!(
                    "element {} is missing '{}'",
                    index, key
                )));
            }
        }
    }

    Ok(value)
}
