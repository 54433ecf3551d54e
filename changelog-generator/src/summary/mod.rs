//! Run summary types and helpers.

mod outcome;
mod run_summary;

pub use outcome::ChangelogOutcome;
pub use run_summary::RunSummary;
