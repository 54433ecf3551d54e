//! Orchestrates a changelog generation run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::changelog::Changelog;
use crate::config::ChangelogConfig;
use crate::fetch::{fetch_all, GitHubApi, PullRequestApi};
use crate::summary::{ChangelogOutcome, RunSummary};
use crate::writer::write_changelog;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Runs the fetch, assemble and write pipeline once.
pub struct Runner<A = GitHubApi> {
    config: RunnerConfig,
    changelog: ChangelogConfig,
    api: A,
}

impl Runner<GitHubApi> {
    /// Builds a runner talking to GitHub with the configured token.
    pub fn new(config: RunnerConfig, changelog: ChangelogConfig) -> Result<Self, RunnerError> {
        let api = GitHubApi::new(config.token())?;
        Ok(Self::with_api(config, changelog, api))
    }
}

impl<A: PullRequestApi> Runner<A> {
    /// Builds a runner on top of any pull request source.
    pub fn with_api(config: RunnerConfig, changelog: ChangelogConfig, api: A) -> Self {
        Self {
            config,
            changelog,
            api,
        }
    }

    /// Executes the full flow, dating the entry today.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Executes the full flow with an explicit release date.
    pub async fn run_on(&self, date: NaiveDate) -> Result<RunSummary, RunnerError> {
        self.changelog.validate()?;

        let pull_requests = fetch_all(&self.api, &self.changelog.repos).await?;
        let mut summary = RunSummary::new(self.changelog.repos.len(), pull_requests.len());

        let changelog = Changelog::build(&self.changelog, &pull_requests, date);
        let document = changelog.to_markdown();
        summary.record_changelog(&changelog, document);

        if !summary.has_changes() {
            info!("No changes found");
            return Ok(summary);
        }

        info!(
            sections = summary.sections_rendered,
            entries = summary.entries_rendered,
            "Assembled changelog"
        );

        if self.config.dry_run() {
            summary.outcome = ChangelogOutcome::DryRun;
            return Ok(summary);
        }

        let path = self.changelog.changelog_path();
        let outcome = write_changelog(&path, &summary.document)?;
        summary.record_write(outcome);

        Ok(summary)
    }
}
