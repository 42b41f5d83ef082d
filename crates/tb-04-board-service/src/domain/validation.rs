//! Request field validation.

use shared_types::BoardError;

pub const MAX_NAME_LEN: usize = 255;

/// Trimmed, non-empty, bounded text field.
pub fn required_text(field: &str, value: &str) -> Result<String, BoardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardError::InvalidArgument(format!("{} must not be empty", field)));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(BoardError::InvalidArgument(format!(
            "{} exceeds {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}
