//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Tagged, line-based release log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file (default: from .tally/config.toml, else release.txt)
    #[arg(short, long, global = true, env = "TALLY_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a line
    Add { text: String },

    /// Print the lines without tags
    Lines,

    /// Print the log as stored, with tags
    List,

    /// Attach a tag to a line, taking it from any other line
    Tag { text: String, tag: String },

    /// Remove a tag from the log
    Untag { tag: String },

    /// Move the tag of one line onto another
    Move { from: String, to: String },

    /// Move a tag to the previous line
    Up { tag: String },

    /// Move a tag to the next line
    Down { tag: String },

    /// Remove the first line
    RemoveFirst,

    /// Print the line holding a tag
    Line { tag: String },

    /// Print the tag of a line (nothing if untagged)
    LineTag { text: String },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
