//! Item input validation

use super::{optional_text, required_text, ValidationError};

/// Maximum length for item titles
pub const MAX_ITEM_TITLE_LEN: usize = 100;

/// Maximum length for item content
pub const MAX_ITEM_CONTENT_LEN: usize = 500;

/// Validated item title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text(s, "title", MAX_ITEM_TITLE_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An item ready to be inserted. The image reference is resolved
/// separately, after the upload has been checked and saved.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: ItemTitle,
    pub content: Option<String>,
}

impl NewItem {
    /// Build from the submitted item form.
    pub fn from_form(title: Option<String>, content: Option<String>) -> Result<Self, ValidationError> {
        let title = title.ok_or(ValidationError::Missing { field: "title" })?;

        Ok(Self {
            title: ItemTitle::new(&title)?,
            content: optional_text(content, "content", MAX_ITEM_CONTENT_LEN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_content() {
        let item = NewItem::from_form(Some("Sunset".into()), Some("over the bay".into())).unwrap();
        assert_eq!(item.title.as_str(), "Sunset");
        assert_eq!(item.content.as_deref(), Some("over the bay"));
    }

    #[test]
    fn missing_title_rejected() {
        let err = NewItem::from_form(None, Some("text".into())).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "title" });
    }

    #[test]
    fn whitespace_title_rejected() {
        let err = NewItem::from_form(Some(" \t".into()), None).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn long_content_rejected() {
        let err = NewItem::from_form(Some("Sunset".into()), Some("x".repeat(501))).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "content", .. }));
    }
}
