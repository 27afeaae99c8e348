//! tally - Tagged, line-based release log
//!
//! Keeps an ordered log of lines in a plain text file where a line can carry
//! one `[tag]` marking it, e.g. the `current` release.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::TallyLog;
pub use domain::Entry;
pub use error::TallyError;
