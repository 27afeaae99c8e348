//! File system repository for tally logs

use crate::domain::Tally;
use crate::error::{Result, TallyError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract storage for a tally log
pub trait TallyRepository {
    /// Location of the backing log
    fn path(&self) -> &Path;

    /// Read the whole log. A missing log is an empty one.
    fn load(&self) -> Result<Tally>;

    /// Replace the whole log
    fn save(&self, tally: &Tally) -> Result<()>;
}

/// File system implementation of TallyRepository
#[derive(Debug, Clone)]
pub struct FileTallyRepository {
    pub path: PathBuf,
}

impl FileTallyRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        FileTallyRepository { path }
    }

    /// Truncate and rewrite the log file in place, following symlinks
    fn write_in_place(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl TallyRepository for FileTallyRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Tally> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "log file missing, treating as empty");
                return Ok(Tally::default());
            }
            Err(e) => return Err(TallyError::Io(e)),
        };

        let tally = Tally::parse(&content);
        debug!(path = %self.path.display(), entries = tally.len(), "loaded log");
        Ok(tally)
    }

    fn save(&self, tally: &Tally) -> Result<()> {
        self.write_in_place(&tally.render())?;
        debug!(path = %self.path.display(), entries = tally.len(), "saved log");
        Ok(())
    }
}
