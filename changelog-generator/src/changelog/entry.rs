//! Rendering of a single changelog line.

use crate::fetch::PullRequest;
use regex::Regex;
use std::sync::LazyLock;

/// Bracketed tracker ids such as `[DEV-1234]`.
static TRACKER_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Z][A-Z0-9]*-[0-9]{3,5})\]").expect("tracker id pattern is valid")
});

/// Returns the tracker ids in `title`, without brackets, in order of appearance.
pub fn extract_tracker_ids(title: &str) -> Vec<&str> {
    TRACKER_ID
        .captures_iter(title)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Renders `pr` as a markdown list item.
///
/// With a `jira_url`, tracker ids are moved out of the title and appended
/// as links; without one the ids stay in the title. Whitespace in the
/// title is collapsed either way, and a title left empty is omitted.
pub fn render_entry(pr: &PullRequest, jira_url: Option<&str>) -> String {
    let ids = match jira_url {
        Some(_) => extract_tracker_ids(&pr.title),
        None => Vec::new(),
    };

    let title = if ids.is_empty() {
        collapse_whitespace(&pr.title)
    } else {
        collapse_whitespace(&TRACKER_ID.replace_all(&pr.title, ""))
    };

    let mut line = String::from("-");
    if !title.is_empty() {
        line.push(' ');
        line.push_str(&title);
    }
    line.push_str(&format!(" ([#{}]({}))", pr.number, pr.url));

    if let Some(base) = jira_url.filter(|_| !ids.is_empty()) {
        let base = base.trim_end_matches('/');
        for id in &ids {
            line.push_str(&format!(" [{id}]({base}/{id})"));
        }
    }

    escape_markdown(&line)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escapes every `<` so titles cannot inject HTML.
fn escape_markdown(line: &str) -> String {
    line.replace('<', "\\<")
}
