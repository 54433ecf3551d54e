//! Changelog assembly.
//!
//! Pull requests are sorted into the configured sections and rendered as a
//! markdown entry headed by the version title and the release date. An
//! entry without any section content renders as the empty string, which
//! callers treat as "nothing to publish".

mod entry;
mod section;

pub use entry::{extract_tracker_ids, render_entry};
pub use section::{claimed_labels, section_entries};

use crate::config::ChangelogConfig;
use crate::fetch::PullRequest;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

/// A section with at least one rendered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    /// Heading text.
    pub title: String,
    /// Rendered markdown lines, newest first.
    pub entries: Vec<String>,
}

/// A changelog entry for one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changelog {
    pub version_title: String,
    pub date: NaiveDate,
    /// Non-empty sections in configured order.
    pub sections: Vec<RenderedSection>,
}

impl Changelog {
    /// Classifies and renders `pull_requests` per the configured sections.
    pub fn build(config: &ChangelogConfig, pull_requests: &[PullRequest], date: NaiveDate) -> Self {
        let jira_url = config.jira_url.as_deref();

        let sections = config
            .changelog_sections
            .iter()
            .enumerate()
            .filter_map(|(index, section)| {
                let entries: Vec<String> =
                    section_entries(&config.changelog_sections, index, pull_requests)
                        .into_iter()
                        .map(|pr| render_entry(pr, jira_url))
                        .collect();

                debug!(section = %section.title, count = entries.len(), "Classified section");

                (!entries.is_empty()).then(|| RenderedSection {
                    title: section.title.clone(),
                    entries,
                })
            })
            .collect();

        Self {
            version_title: config.version_title.clone(),
            date,
            sections,
        }
    }

    /// Returns true if no section has any entry.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of rendered lines across sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Serializes the entry as markdown, or the empty string if there is nothing to publish.
    pub fn to_markdown(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut out = format!(
            "# {} ({})\n",
            self.version_title,
            self.date.format("%Y-%m-%d")
        );

        for section in &self.sections {
            // Writing into a String cannot fail.
            let _ = write!(out, "\n## {}\n", section.title);
            for entry in &section.entries {
                out.push_str(entry);
                out.push('\n');
            }
        }

        out.push('\n');
        out
    }
}

/// Assembles the changelog entry dated today.
///
/// Returns the empty string when no section has entries.
pub fn assemble(config: &ChangelogConfig, pull_requests: &[PullRequest]) -> String {
    assemble_on(config, pull_requests, Local::now().date_naive())
}

/// Assembles the changelog entry for an explicit release date.
pub fn assemble_on(
    config: &ChangelogConfig,
    pull_requests: &[PullRequest],
    date: NaiveDate,
) -> String {
    Changelog::build(config, pull_requests, date).to_markdown()
}
