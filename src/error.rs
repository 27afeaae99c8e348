//! Error types for tally

use thiserror::Error;

/// Main error type for tally
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("No such line found: {0}")]
    NoSuchLineFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Cannot move tag: {0}")]
    CannotMoveTag(String),

    #[error("Invalid line: {0}")]
    InvalidLine(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TallyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TallyError::NoSuchLineFound(_) => 2,
            TallyError::TagNotFound(_) => 3,
            TallyError::CannotMoveTag(_) => 4,
            TallyError::InvalidLine(_) | TallyError::InvalidTag(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TallyError::NoSuchLineFound(text) => {
                format!(
                    "No such line found: '{}'\n\n\
                    Suggestions:\n\
                    • Lines are matched exactly, without the [tag] suffix\n\
                    • Use 'tally lines' to see the lines in the log",
                    text
                )
            }
            TallyError::TagNotFound(tag) => {
                format!(
                    "Tag not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'tally list' to see which lines carry tags\n\
                    • Attach the tag first: tally tag <line> {}",
                    tag, tag
                )
            }
            TallyError::CannotMoveTag(msg) => {
                format!(
                    "Cannot move tag: {}\n\n\
                    The tag is already on the first or last line of the log.",
                    msg
                )
            }
            TallyError::InvalidLine(_) => {
                format!(
                    "{}\n\n\
                    Lines must not contain a newline or the sequence ' ['",
                    self
                )
            }
            TallyError::InvalidTag(_) => {
                format!(
                    "{}\n\n\
                    Tags must be non-empty and must not contain '[', ']' or a newline",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;
