use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} cannot be blank")]
    Blank { field: &'static str },
}

/// Rejects empty and whitespace-only values. The value itself is kept as is.
pub(crate) fn require_non_blank(
    field: &'static str,
    value: String,
) -> Result<String, InvalidInputError> {
    if value.trim().is_empty() {
        return Err(InvalidInputError::Blank { field });
    }
    Ok(value)
}

/// Same as [`require_non_blank`], for values that may be absent on the wire.
pub(crate) fn require_present(
    field: &'static str,
    value: Option<String>,
) -> Result<String, InvalidInputError> {
    let value = value.ok_or(InvalidInputError::Missing { field })?;
    require_non_blank(field, value)
}
