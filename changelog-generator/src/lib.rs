#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod changelog;
pub mod config;
pub mod fetch;
pub mod runner;
pub mod summary;
pub mod writer;

pub use changelog::{
    assemble, assemble_on, extract_tracker_ids, render_entry, Changelog, RenderedSection,
};
pub use config::{
    create_config_template, load_config, ChangelogConfig, ChangelogSection, ConfigError,
    RepoQuery, CONFIG_FILE_NAME, DEFAULT_CHANGELOG_PATH,
};
pub use fetch::{
    fetch_all, fetch_repository, FetchError, GitHubApi, MergedPullRequest, PullRequest,
    PullRequestApi, PullRequestPage,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ChangelogOutcome, RunSummary};
pub use writer::{write_changelog, WriteError, WriteOutcome};
