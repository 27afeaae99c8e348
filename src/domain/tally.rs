//! In-memory tally log and the operations on it

use crate::domain::entry::{validate_tag, Entry};
use crate::error::{Result, TallyError};
use tracing::warn;

/// Direction for positional tag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Ordered sequence of entries, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<Entry>,
}

impl Tally {
    /// Parse file content. Accepts `\n` and `\r\n`, with or without a final newline.
    pub fn parse(content: &str) -> Self {
        Tally {
            entries: content.lines().map(Entry::parse).collect(),
        }
    }

    /// Serialize back to file content, one line per entry
    pub fn render(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            output.push_str(&entry.to_string());
            output.push('\n');
        }
        output
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry texts with tag annotations stripped
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    pub fn add(&mut self, text: &str) -> Result<()> {
        self.entries.push(Entry::new(text)?);
        Ok(())
    }

    /// Attach `tag` to the line `text`, taking it away from any other holder
    pub fn tag(&mut self, text: &str, tag: &str) -> Result<()> {
        validate_tag(tag)?;
        let index = self.position_of_line(text)?;

        for (i, entry) in self.entries.iter_mut().enumerate() {
            if i != index && entry.has_tag(tag) {
                entry.tag = None;
            }
        }
        self.entries[index].tag = Some(tag.to_string());
        Ok(())
    }

    /// Clear `tag` wherever it appears; absent tags are ignored
    pub fn remove_tag(&mut self, tag: &str) {
        for entry in self.entries.iter_mut().filter(|e| e.has_tag(tag)) {
            entry.tag = None;
        }
    }

    /// Move whatever tag `from` carries onto `to`
    pub fn move_tag(&mut self, from: &str, to: &str) -> Result<()> {
        let from_index = self.position_of_line(from)?;
        let to_index = self.position_of_line(to)?;

        let tag = self.entries[from_index]
            .tag
            .take()
            .ok_or_else(|| TallyError::TagNotFound(format!("no tag on line '{}'", from)))?;
        self.entries[to_index].tag = Some(tag);
        Ok(())
    }

    /// Shift every holder of `tag` one line up or down.
    ///
    /// Fails without touching anything if any holder sits on the boundary.
    pub fn shift_tag(&mut self, tag: &str, direction: Direction) -> Result<()> {
        let holders = self.holders(tag);
        if holders.is_empty() {
            return Err(TallyError::TagNotFound(tag.to_string()));
        }
        if holders.len() > 1 {
            warn!(tag, count = holders.len(), "tag is held by several lines, moving all of them");
        }

        let last = self.entries.len() - 1;
        let targets = holders
            .iter()
            .map(|&i| match direction {
                Direction::Up if i == 0 => Err(TallyError::CannotMoveTag(format!(
                    "'{}' is on the first line",
                    tag
                ))),
                Direction::Down if i == last => Err(TallyError::CannotMoveTag(format!(
                    "'{}' is on the last line",
                    tag
                ))),
                Direction::Up => Ok(i - 1),
                Direction::Down => Ok(i + 1),
            })
            .collect::<Result<Vec<_>>>()?;

        for &i in &holders {
            self.entries[i].tag = None;
        }
        for i in targets {
            self.entries[i].tag = Some(tag.to_string());
        }
        Ok(())
    }

    /// Drop the oldest entry; an empty log stays empty
    pub fn remove_first(&mut self) -> Option<Entry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Text of the first line holding `tag`
    pub fn line(&self, tag: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|e| e.has_tag(tag))
            .map(|e| e.text.as_str())
            .ok_or_else(|| TallyError::TagNotFound(tag.to_string()))
    }

    /// Tag of the line `text`, if it has one
    pub fn line_tag(&self, text: &str) -> Result<Option<&str>> {
        let index = self.position_of_line(text)?;
        Ok(self.entries[index].tag.as_deref())
    }

    fn position_of_line(&self, text: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.text == text)
            .ok_or_else(|| TallyError::NoSuchLineFound(text.to_string()))
    }

    fn holders(&self, tag: &str) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_tag(tag))
            .map(|(i, _)| i)
            .collect()
    }
}
