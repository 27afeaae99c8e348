//! Domain layer - Tally log model and its operations

pub mod entry;
pub mod tally;

pub use entry::Entry;
pub use tally::{Direction, Tally};
