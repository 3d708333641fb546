//! Domain models with validation at construction
//!
//! All form input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod board;
pub mod item;
pub mod upload;
pub mod validation;

pub use board::{BoardName, NewBoard};
pub use item::{ItemTitle, NewItem};
pub use validation::ValidationError;

/// Treat blank optional text as absent.
pub(crate) fn optional_text(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(Some(trimmed.to_owned()))
}

/// Required single-line text: trimmed, non-empty, bounded.
pub(crate) fn required_text(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}
