//! Run summary types.

use super::outcome::ChangelogOutcome;
use crate::changelog::Changelog;
use crate::writer::WriteOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of repositories queried.
    pub repositories_queried: usize,

    /// Pull requests left after label filtering, across repositories.
    pub pull_requests_fetched: usize,

    /// Number of non-empty sections rendered.
    pub sections_rendered: usize,

    /// Number of entry lines rendered across sections.
    pub entries_rendered: usize,

    /// What happened to the changelog file.
    pub outcome: ChangelogOutcome,

    /// The assembled markdown (empty when there was nothing to publish).
    pub document: String,
}

impl RunSummary {
    /// Creates a summary for a run that has fetched but not yet assembled.
    #[must_use]
    pub fn new(repositories_queried: usize, pull_requests_fetched: usize) -> Self {
        Self {
            repositories_queried,
            pull_requests_fetched,
            sections_rendered: 0,
            entries_rendered: 0,
            outcome: ChangelogOutcome::NoChanges,
            document: String::new(),
        }
    }

    /// Records the assembled changelog.
    pub fn record_changelog(&mut self, changelog: &Changelog, document: String) {
        self.sections_rendered = changelog.sections.len();
        self.entries_rendered = changelog.entry_count();
        self.document = document;
    }

    /// Records the result of writing the changelog file.
    pub fn record_write(&mut self, outcome: WriteOutcome) {
        self.outcome = match outcome {
            WriteOutcome::Created { path } => ChangelogOutcome::Created { path },
            WriteOutcome::Prepended { path } => ChangelogOutcome::Prepended { path },
        };
    }

    /// Returns true if there is something to publish.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.document.is_empty()
    }
}
