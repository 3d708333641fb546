//! Board input validation

use super::{optional_text, required_text, ValidationError};

/// Maximum length for board names
pub const MAX_BOARD_NAME_LEN: usize = 100;

/// Maximum length for board descriptions
pub const MAX_BOARD_DESCRIPTION_LEN: usize = 500;

/// Validated board name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardName(String);

impl BoardName {
    /// Create a new board name.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty after trimming
    /// - Max 100 characters
    ///
    /// # Example
    /// ```
    /// use papan_server::models::BoardName;
    ///
    /// assert!(BoardName::new("Travel").is_ok());
    /// assert!(BoardName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text(s, "name", MAX_BOARD_NAME_LEN).map(Self)
    }

    /// Get the board name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A board ready to be inserted
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub name: BoardName,
    pub description: Option<String>,
}

impl NewBoard {
    /// Build from the submitted creation form.
    pub fn from_form(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Missing { field: "name" })?;

        Ok(Self {
            name: BoardName::new(&name)?,
            description: optional_text(description, "description", MAX_BOARD_DESCRIPTION_LEN)?,
        })
    }
}
