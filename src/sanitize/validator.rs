//! Length validation for raw case descriptions

use crate::error::ValidationError;

/// Minimum trimmed length, in characters
pub const MIN_CASE_CHARS: usize = 10;

/// Maximum trimmed length, in characters
pub const MAX_CASE_CHARS: usize = 5000;

/// Trim `raw` and check it against the length bounds.
///
/// Returns the trimmed slice unchanged on success. Length is counted in
/// characters, not bytes.
pub fn validate(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(ValidationError::Empty);
    }
    if length < MIN_CASE_CHARS {
        return Err(ValidationError::TooShort { length });
    }
    if length > MAX_CASE_CHARS {
        return Err(ValidationError::TooLong { length });
    }

    Ok(trimmed)
}
