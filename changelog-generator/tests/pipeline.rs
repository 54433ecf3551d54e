mod common;

use changelog_generator::{
    fetch_all, load_config, ChangelogConfig, ChangelogOutcome, ConfigError, FetchError, Runner,
    RunnerConfig, RunnerError,
};
use chrono::NaiveDate;
use common::{merged, MockApi};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EXPECTED: &str = "# v2.0.0 (2024-03-01)

## New
- Public gadget feature ([#5](https://github.com/acme/gadgets/pull/5))
- Add widget API ([#11](https://github.com/acme/widgets/pull/11))

## Fixed
- Fix \\<iframe> crash ([#12](https://github.com/acme/widgets/pull/12)) [DEV-4321](https://acme.atlassian.net/browse/DEV-4321)

## Other
- Gadget docs ([#3](https://github.com/acme/gadgets/pull/3))
- Refactor internals ([#15](https://github.com/acme/widgets/pull/15))

";

fn fixture_config() -> ChangelogConfig {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/changelog-config.toml");
    load_config(&path).unwrap()
}

fn release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn mock_api() -> MockApi {
    MockApi::new(2)
        .with_repo(
            "acme/widgets",
            vec![
                merged(
                    "acme/widgets",
                    11,
                    "Add widget API",
                    &["2.0.0", "new"],
                    "2024-02-10T09:00:00Z",
                ),
                merged(
                    "acme/widgets",
                    12,
                    "[DEV-4321] Fix <iframe> crash",
                    &["2.0.0", "bug"],
                    "2024-02-12T09:00:00Z",
                ),
                merged(
                    "acme/widgets",
                    13,
                    "Experimental flag",
                    &["2.0.0", "new", "experimental"],
                    "2024-02-13T09:00:00Z",
                ),
                merged("acme/widgets", 14, "Old work", &["1.9.0", "new"], "2024-01-02T09:00:00Z"),
                merged(
                    "acme/widgets",
                    15,
                    "Refactor internals",
                    &["2.0.0"],
                    "2024-02-01T09:00:00Z",
                ),
            ],
        )
        .with_repo(
            "acme/gadgets",
            vec![
                merged(
                    "acme/gadgets",
                    3,
                    "Gadget docs",
                    &["2.0.0", "public", "docs"],
                    "2024-02-11T09:00:00Z",
                ),
                merged(
                    "acme/gadgets",
                    4,
                    "Internal gadget fix",
                    &["2.0.0", "fixed"],
                    "2024-02-14T09:00:00Z",
                ),
                merged(
                    "acme/gadgets",
                    5,
                    "Public gadget feature",
                    &["2.0.0", "public", "new"],
                    "2024-02-15T09:00:00Z",
                ),
            ],
        )
}

fn runner(config: ChangelogConfig, api: MockApi, dry_run: bool) -> Runner<MockApi> {
    Runner::with_api(RunnerConfig::new("token".to_string(), dry_run), config, api)
}

#[tokio::test]
async fn fetch_pages_filters_and_orders_across_repositories() {
    let config = fixture_config();
    let api = mock_api();

    let pull_requests = fetch_all(&api, &config.repos).await.unwrap();

    let numbers: Vec<u64> = pull_requests.iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, vec![5, 12, 3, 11, 15]);

    let widget_cursors: Vec<_> = api
        .calls_for("acme/widgets")
        .into_iter()
        .map(|c| c.cursor)
        .collect();
    assert_eq!(widget_cursors, vec![None, Some("2".to_string())]);
    assert_eq!(api.calls_for("acme/gadgets").len(), 2);
    assert!(api.calls().iter().all(|c| c.version_label == "2.0.0"));
}

#[tokio::test]
async fn creates_changelog_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("CHANGELOG.md");
    let mut config = fixture_config();
    config.changelog_path = Some(path.clone());

    let summary = runner(config, mock_api(), false)
        .run_on(release_date())
        .await
        .unwrap();

    assert_eq!(summary.outcome, ChangelogOutcome::Created { path: path.clone() });
    assert_eq!(summary.repositories_queried, 2);
    assert_eq!(summary.pull_requests_fetched, 5);
    assert_eq!(summary.sections_rendered, 3);
    assert_eq!(summary.entries_rendered, 5);
    assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
}

#[tokio::test]
async fn prepends_to_existing_changelog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("CHANGELOG.md");
    fs::write(&path, "# v1.0.0 (2023-12-01)\n\n## New\n- First release\n").unwrap();
    let mut config = fixture_config();
    config.changelog_path = Some(path.clone());

    let summary = runner(config, mock_api(), false)
        .run_on(release_date())
        .await
        .unwrap();

    assert!(matches!(summary.outcome, ChangelogOutcome::Prepended { .. }));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{EXPECTED}# v1.0.0 (2023-12-01)\n\n## New\n- First release\n")
    );
}

#[tokio::test]
async fn dry_run_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("CHANGELOG.md");
    let mut config = fixture_config();
    config.changelog_path = Some(path.clone());

    let summary = runner(config, mock_api(), true)
        .run_on(release_date())
        .await
        .unwrap();

    assert_eq!(summary.outcome, ChangelogOutcome::DryRun);
    assert_eq!(summary.document, EXPECTED);
    assert!(!path.exists());
}

#[tokio::test]
async fn no_matching_pull_requests_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("CHANGELOG.md");
    let mut config = fixture_config();
    config.changelog_path = Some(path.clone());
    config.changelog_sections.retain(|s| !s.leftovers);
    let api = MockApi::new(10)
        .with_repo(
            "acme/widgets",
            vec![merged(
                "acme/widgets",
                1,
                "Chore",
                &["2.0.0", "chore"],
                "2024-02-01T00:00:00Z",
            )],
        )
        .with_repo("acme/gadgets", Vec::new());

    let summary = runner(config, api, false)
        .run_on(release_date())
        .await
        .unwrap();

    assert_eq!(summary.outcome, ChangelogOutcome::NoChanges);
    assert!(!summary.has_changes());
    assert_eq!(summary.pull_requests_fetched, 1);
    assert!(!path.exists());
}

#[tokio::test]
async fn unknown_repository_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    let mut config = fixture_config();
    config.changelog_path = Some(temp.path().join("CHANGELOG.md"));
    let api = MockApi::new(10).with_repo("acme/widgets", Vec::new());

    let result = runner(config, api, false).run_on(release_date()).await;

    assert!(matches!(
        result,
        Err(RunnerError::Fetch(FetchError::RepositoryNotFound { .. }))
    ));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn invalid_config_fails_before_fetching() {
    let mut config = fixture_config();
    config.repos[1].version_label.clear();
    let api = mock_api();
    let pipeline = runner(config, api, true);

    let result = pipeline.run_on(release_date()).await;

    assert!(matches!(
        result,
        Err(RunnerError::Config(ConfigError::ValidationError { .. }))
    ));
}
