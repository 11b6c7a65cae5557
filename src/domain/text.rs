use crate::domain::errors::{DomainError, DomainResult};

/// Column width of every name column in the schema.
pub const MAX_NAME_LENGTH: usize = 255;

/// Trim surrounding whitespace and reject blank or over-long names.
pub(crate) fn required_name(field: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
