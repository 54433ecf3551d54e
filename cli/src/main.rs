//! CLI for the changelog generator.
//!
//! Collects merged, labeled pull requests from the configured repositories
//! and prepends a changelog entry for the release to the changelog file.

mod prompt;

use changelog_generator::{
    create_config_template, load_config, ChangelogConfig, ConfigError, RunSummary, Runner,
    RunnerConfig, RunnerError, CONFIG_FILE_NAME,
};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use prompt::{complete_config, Overrides};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Changelog generator - Build a changelog entry from merged GitHub pull requests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the changelog config file.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// GitHub Personal Access Token. Falls back to github-access-token in the
    /// config file, then GITHUB_ACCESS_TOKEN, then GITHUB_TOKEN.
    #[arg(long)]
    token: Option<String>,

    /// Heading of the changelog entry, e.g. "v1.4.0".
    #[arg(long)]
    version_title: Option<String>,

    /// Version label for every repository that does not configure one.
    #[arg(long)]
    version_label: Option<String>,

    /// Changelog file to create or prepend to.
    #[arg(long)]
    changelog_path: Option<PathBuf>,

    /// Print the entry instead of writing the changelog file.
    #[arg(long)]
    dry_run: bool,

    /// Never prompt; missing values are reported as config errors.
    #[arg(long)]
    no_prompt: bool,
}

/// Failures surfaced by the CLI.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Errors from the generation pipeline.
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// No token in flags, config or environment.
    #[error("No GitHub token found; pass --token, set github-access-token or GITHUB_ACCESS_TOKEN")]
    MissingToken,
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Runner(RunnerError::Config(e))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Select the process-wide TLS provider before any client is built
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(Some(summary)) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Ok(None) => ExitCode::from(0),
        Err(e @ (CliError::Runner(RunnerError::Config(_)) | CliError::MissingToken)) => {
            error!(error = %e, "Configuration problem");
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
///
/// Returns `None` when a fresh config template was created instead of running.
async fn run(args: Args) -> Result<Option<RunSummary>, CliError> {
    let Some(mut config) = load_or_create_config(&args.config)? else {
        return Ok(None);
    };

    let interactive = !args.no_prompt && std::io::stdin().is_terminal();
    complete_config(
        &mut config,
        Overrides {
            version_title: args.version_title,
            version_label: args.version_label,
            changelog_path: args.changelog_path,
        },
        interactive,
    )?;

    let token = resolve_token(args.token, &config).ok_or(CliError::MissingToken)?;

    let runner = Runner::new(RunnerConfig::new(token, args.dry_run), config)?;

    let spinner = fetch_spinner();
    let result = runner.run().await;
    spinner.finish_and_clear();

    Ok(Some(result?))
}

/// Picks the `--token` flag if given, otherwise the config file or environment.
fn resolve_token(flag: Option<String>, config: &ChangelogConfig) -> Option<String> {
    flag.filter(|t| !t.trim().is_empty())
        .or_else(|| config.access_token())
}

/// Loads the config, or writes a template and returns `None` if there is none yet.
fn load_or_create_config(path: &Path) -> Result<Option<ChangelogConfig>, CliError> {
    if path.exists() {
        return Ok(Some(load_config(path)?));
    }

    create_config_template(path)?;
    println!("Created config file {}.", path.display());
    println!("Please update the config file and run the command again.");
    Ok(None)
}

fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching pull requests");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    if !summary.has_changes() {
        println!("No changes found");
        return;
    }

    if let Some(path) = summary.outcome.path() {
        println!("Changelog {}: {}", summary.outcome.as_str(), path.display());
    } else {
        println!("{}", summary.document);
    }

    println!("\nSummary:");
    println!("  Repositories queried: {}", summary.repositories_queried);
    println!("  Pull requests fetched: {}", summary.pull_requests_fetched);
    println!("  Sections rendered: {}", summary.sections_rendered);
    println!("  Entries rendered: {}", summary.entries_rendered);
}
