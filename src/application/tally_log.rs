//! File-backed tally log
//!
//! Every call reads the log from its repository, applies one operation to
//! that fresh copy and writes it back. Nothing is cached between calls, so
//! several `TallyLog` handles on the same file always see each other's
//! changes (as long as calls do not run concurrently).

use crate::domain::{Direction, Entry, Tally};
use crate::error::Result;
use crate::infrastructure::{FileTallyRepository, TallyRepository};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered, tagged log of lines bound to one backing store
#[derive(Debug, Clone)]
pub struct TallyLog<R = FileTallyRepository> {
    repository: R,
}

impl TallyLog<FileTallyRepository> {
    /// Bind to a log file. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TallyLog {
            repository: FileTallyRepository::new(path.into()),
        }
    }
}

impl<R: TallyRepository> TallyLog<R> {
    pub fn with_repository(repository: R) -> Self {
        TallyLog { repository }
    }

    pub fn path(&self) -> &Path {
        self.repository.path()
    }

    /// Line texts in order, without tag annotations
    pub fn lines(&self) -> Result<Vec<String>> {
        Ok(self.repository.load()?.lines())
    }

    /// All entries in order, including their tags
    pub fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.repository.load()?.entries().to_vec())
    }

    pub fn add(&self, text: &str) -> Result<()> {
        debug!(text, "add");
        self.update(|tally| tally.add(text))
    }

    pub fn tag(&self, text: &str, tag: &str) -> Result<()> {
        debug!(text, tag, "tag");
        self.update(|tally| tally.tag(text, tag))
    }

    pub fn remove_tag(&self, tag: &str) -> Result<()> {
        debug!(tag, "remove_tag");
        self.update(|tally| {
            tally.remove_tag(tag);
            Ok(())
        })
    }

    pub fn move_tag(&self, from: &str, to: &str) -> Result<()> {
        debug!(from, to, "move_tag");
        self.update(|tally| tally.move_tag(from, to))
    }

    pub fn move_tag_up(&self, tag: &str) -> Result<()> {
        debug!(tag, "move_tag_up");
        self.update(|tally| tally.shift_tag(tag, Direction::Up))
    }

    pub fn move_tag_down(&self, tag: &str) -> Result<()> {
        debug!(tag, "move_tag_down");
        self.update(|tally| tally.shift_tag(tag, Direction::Down))
    }

    /// Drop the first line with its tag. Does nothing on an empty log.
    pub fn remove_first(&self) -> Result<()> {
        self.update(|tally| {
            let removed = tally.remove_first();
            debug!(?removed, "remove_first");
            Ok(())
        })
    }

    /// Text of the line holding `tag`
    pub fn line(&self, tag: &str) -> Result<String> {
        let tally = self.repository.load()?;
        tally.line(tag).map(str::to_string)
    }

    /// Tag of the line `text`, `None` when it is untagged
    pub fn line_tag(&self, text: &str) -> Result<Option<String>> {
        let tally = self.repository.load()?;
        Ok(tally.line_tag(text)?.map(str::to_string))
    }

    /// Load, apply `op`, and save only if the log actually changed.
    /// A failing `op` never reaches the repository.
    fn update<T>(&self, op: impl FnOnce(&mut Tally) -> Result<T>) -> Result<T> {
        let mut tally = self.repository.load()?;
        let before = tally.clone();

        let output = op(&mut tally)?;

        if tally != before {
            self.repository.save(&tally)?;
        }
        Ok(output)
    }
}
