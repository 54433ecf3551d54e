//! Changelog outcome types.

use serde::Serialize;
use std::path::PathBuf;

/// What happened to the changelog file during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChangelogOutcome {
    /// No pull request landed in any section; nothing was written.
    NoChanges,

    /// The changelog file was created.
    Created {
        /// Path of the new file.
        path: PathBuf,
    },

    /// The entry was prepended to an existing changelog.
    Prepended {
        /// Path of the updated file.
        path: PathBuf,
    },

    /// Dry run: the entry was assembled but not written.
    DryRun,
}

impl ChangelogOutcome {
    /// Returns the outcome as a short string for display.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoChanges => "no changes",
            Self::Created { .. } => "created",
            Self::Prepended { .. } => "prepended",
            Self::DryRun => "dry run",
        }
    }

    /// Returns the written path, if anything was written.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Created { path } | Self::Prepended { path } => Some(path),
            Self::NoChanges | Self::DryRun => None,
        }
    }
}
