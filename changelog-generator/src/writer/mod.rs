//! Writing the assembled entry to the changelog file.

mod error;

pub use error::WriteError;

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// What [`write_changelog`] did to the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The file did not exist and was created.
    Created { path: PathBuf },
    /// The entry was placed before the existing content.
    Prepended { path: PathBuf },
}

/// Creates `path` with `content`, or prepends `content` to the existing file.
///
/// Existing content is preserved byte for byte after the new entry. The
/// combined file is written to a temporary file next to `path` and then
/// moved into place.
///
/// # Errors
///
/// Returns [`WriteError::EmptyContent`] for an empty entry, and
/// [`WriteError::IoError`] if any file operation fails.
pub fn write_changelog(path: &Path, content: &str) -> Result<WriteOutcome, WriteError> {
    if content.is_empty() {
        return Err(WriteError::EmptyContent {
            path: path.display().to_string(),
        });
    }

    let io_error = |source: std::io::Error| WriteError::IoError {
        path: path.display().to_string(),
        source,
    };

    if !path.exists() {
        std::fs::write(path, content).map_err(io_error)?;
        info!(path = %path.display(), "Created changelog");
        return Ok(WriteOutcome::Created {
            path: path.to_path_buf(),
        });
    }

    let existing = std::fs::read(path).map_err(io_error)?;
    let permissions = std::fs::metadata(path).map_err(io_error)?.permissions();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    // Temporary files are created private, keep the changelog's own mode.
    temp.as_file()
        .set_permissions(permissions)
        .map_err(io_error)?;
    temp.write_all(content.as_bytes()).map_err(io_error)?;
    temp.write_all(&existing).map_err(io_error)?;
    temp.flush().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;

    info!(path = %path.display(), "Prepended to changelog");
    Ok(WriteOutcome::Prepended {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        let outcome = write_changelog(&path, "# v1\n").unwrap();

        assert_eq!(outcome, WriteOutcome::Created { path: path.clone() });
        assert_eq!(fs::read_to_string(&path).unwrap(), "# v1\n");
    }

    #[test]
    fn prepends_to_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        fs::write(&path, "# v1\n\n- old entry\n").unwrap();

        let outcome = write_changelog(&path, "# v2\n\n- new entry\n\n").unwrap();

        assert!(matches!(outcome, WriteOutcome::Prepended { .. }));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# v2\n\n- new entry\n\n# v1\n\n- old entry\n"
        );
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        fs::write(&path, "old").unwrap();

        write_changelog(&path, "new ").unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new old");
    }

    #[test]
    fn refuses_empty_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        let result = write_changelog(&path, "");

        assert!(matches!(result, Err(WriteError::EmptyContent { .. })));
        assert!(!path.exists());
    }
}
