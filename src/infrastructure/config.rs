//! Configuration management

use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log file used when nothing else is configured
pub const DEFAULT_LOG_FILE: &str = "release.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: default_file(),
        }
    }
}

impl Config {
    /// Load config from .tally/config.toml in the given directory.
    /// A directory without one gets the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tally").join("config.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(TallyError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .tally/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tally_dir = path.join(".tally");
        let config_path = tally_dir.join("config.toml");

        if !tally_dir.exists() {
            fs::create_dir_all(&tally_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Log path, with relative paths resolved against `dir`
    pub fn log_path(&self, dir: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            dir.join(&self.file)
        }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "file" => Ok(self.file.display().to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single config value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file" => {
                if value.is_empty() {
                    return Err(TallyError::Config("'file' must not be empty".to_string()));
                }
                self.file = PathBuf::from(value);
                Ok(())
            }
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> TallyError {
    TallyError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: file",
        key
    ))
}
