//! Input validation shared by the application services

use crate::error::DomainError;

/// Maximum length of any name or instructor field, in characters
pub const MAX_FIELD_LEN: usize = 100;

/// Trim a required text field and check it is non-empty and not too long.
///
/// Returns the trimmed value to store.
pub fn required_text(field: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_FIELD_LEN
        )));
    }
    Ok(value.to_string())
}

/// Same as [`required_text`] for fields that may be omitted from an update
pub fn optional_text(field: &str, value: Option<&str>) -> Result<Option<String>, DomainError> {
    value.map(|v| required_text(field, v)).transpose()
}
