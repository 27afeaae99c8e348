//! A single line of the tally log

use crate::error::{Result, TallyError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Regex for a tagged line: `<text> [<tag>]`
fn tagged_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(.*) \[([^\[\]]+)\]$").unwrap())
}

/// One line of the log: its text plus an optional tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub tag: Option<String>,
}

impl Entry {
    /// Create an untagged entry, rejecting text that would not survive a reload
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Entry { text, tag: None })
    }

    /// Parse one persisted line
    pub fn parse(line: &str) -> Self {
        match tagged_line_regex().captures(line) {
            Some(cap) => Entry {
                text: cap[1].to_string(),
                tag: Some(cap[2].to_string()),
            },
            None => Entry {
                text: line.to_string(),
                tag: None,
            },
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{} [{}]", self.text, tag),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Entry text must not contain a newline or the tag delimiter ` [`
pub fn validate_text(text: &str) -> Result<()> {
    if text.contains('\n') || text.contains('\r') || text.contains(" [") {
        return Err(TallyError::InvalidLine(text.to_string()));
    }
    Ok(())
}

/// Tag names must be non-empty and free of brackets and newlines
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.is_empty()
        || tag
            .chars()
            .any(|ch| ch == '[' || ch == ']' || ch == '\n' || ch == '\r')
    {
        return Err(TallyError::InvalidTag(tag.to_string()));
    }
    Ok(())
}
