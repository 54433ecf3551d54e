//! Interactive completion of the changelog configuration.

use changelog_generator::{ChangelogConfig, DEFAULT_CHANGELOG_PATH};
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// Values given on the command line, which take precedence over prompting.
#[derive(Debug, Default)]
pub struct Overrides {
    pub version_title: Option<String>,
    pub version_label: Option<String>,
    pub changelog_path: Option<PathBuf>,
}

/// Applies `overrides`, then asks for whatever the run still needs.
///
/// Without `interactive`, only the overrides are applied and missing values
/// are left for config validation to report.
pub fn complete_config(
    config: &mut ChangelogConfig,
    overrides: Overrides,
    interactive: bool,
) -> Result<(), dialoguer::Error> {
    let theme = ColorfulTheme::default();

    match overrides.version_title {
        Some(title) => config.version_title = title,
        None if interactive => {
            config.version_title =
                ask(&theme, "Changelog title for version", &config.version_title)?;
        }
        None => {}
    }

    match overrides.version_label {
        Some(label) => {
            for repo in config.repos.iter_mut().filter(|r| r.version_label.is_empty()) {
                repo.version_label = label.clone();
            }
        }
        None if interactive => {
            // An empty label defaults to the one given for the previous repository.
            let mut previous = String::new();
            for repo in &mut config.repos {
                let default = if repo.version_label.is_empty() {
                    previous.clone()
                } else {
                    repo.version_label.clone()
                };
                let prompt = format!("Version label for {}", repo.full_name());
                repo.version_label = ask(&theme, &prompt, &default)?;
                previous = repo.version_label.clone();
            }
        }
        None => {}
    }

    match overrides.changelog_path {
        Some(path) => config.changelog_path = Some(path),
        None if interactive && config.changelog_path.is_none() => {
            let path = ask(&theme, "Path to changelog file", DEFAULT_CHANGELOG_PATH)?;
            config.changelog_path = Some(PathBuf::from(path));
        }
        None => {}
    }

    Ok(())
}

/// Asks for a required value, offering `default` when it is non-empty.
fn ask(theme: &ColorfulTheme, prompt: &str, default: &str) -> Result<String, dialoguer::Error> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if !default.trim().is_empty() {
        input = input.default(default.to_string());
    }

    let value = input
        .validate_with(|value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() {
                Err("A value is required.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(value.trim().to_string())
}
