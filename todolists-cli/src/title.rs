//! Title validation for lists and todos

use std::fmt;

/// Maximum length for list and todo titles
const MAX_TITLE_LEN: usize = 100;

/// Validated title: trimmed, 1 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    Empty,
    TooLong { max: usize },
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "title cannot be empty"),
            Self::TooLong { max } => write!(f, "title must be between 1 and {} characters", max),
        }
    }
}

impl std::error::Error for TitleError {}

impl Title {
    pub fn new(s: &str) -> Result<Self, TitleError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }

        // Count characters, not bytes
        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(TitleError::TooLong { max: MAX_TITLE_LEN });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// clap value parser
pub fn parse_title(s: &str) -> Result<Title, TitleError> {
    Title::new(s)
}
