//! Application layer - Use cases and orchestration

pub mod tally_log;

pub use tally_log::TallyLog;
