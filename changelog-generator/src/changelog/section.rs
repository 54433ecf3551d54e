//! Classification of pull requests into changelog sections.

use crate::config::ChangelogSection;
use crate::fetch::PullRequest;
use std::collections::HashSet;

/// Labels claimed by every section other than the one at `index`.
pub fn claimed_labels(sections: &[ChangelogSection], index: usize) -> HashSet<&str> {
    sections
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .flat_map(|(_, section)| section.labels.iter().map(String::as_str))
        .collect()
}

/// Pull requests belonging to the section at `index`, in input order.
///
/// A labeled section takes every pull request carrying at least one of its
/// labels, so one pull request can land in several sections. The leftovers
/// section takes every pull request carrying none of the labels claimed by
/// the other sections.
pub fn section_entries<'a>(
    sections: &[ChangelogSection],
    index: usize,
    pull_requests: &'a [PullRequest],
) -> Vec<&'a PullRequest> {
    let Some(section) = sections.get(index) else {
        return Vec::new();
    };

    if section.leftovers {
        let claimed = claimed_labels(sections, index);
        pull_requests
            .iter()
            .filter(|pr| !pr.labels.iter().any(|l| claimed.contains(l.as_str())))
            .collect()
    } else {
        pull_requests
            .iter()
            .filter(|pr| section.labels.iter().any(|l| pr.has_label(l)))
            .collect()
    }
}
