use crate::errors::{AppError, AppResult};

/// Decode a buffer as UTF-8 plaintext.
///
/// A NUL byte anywhere in the buffer is taken as a signal of binary content
/// that reached us under a text extension, and rejects the whole file.
pub fn decode(bytes: &[u8]) -> AppResult<String> {
    if bytes.contains(&0) {
        return Err(AppError::UnsupportedFormat(
            "file content looks binary, not text".to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(bytes).into_owned())
}
