//! Sample discovery
//!
//! A directory is a sample when it directly contains at least one eligible
//! file, optionally restricted to a file extension.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;
use crate::file_set::is_eligible_name;

/// Find the sample directories to migrate.
///
/// Without `recursive` only `root` itself is considered. With it, `root` and
/// all of its descendants are visited depth-first with children sorted by
/// name. Symlinked directories are not descended into.
pub fn discover_samples(
    root: &Path,
    recursive: bool,
    extension: Option<&str>,
) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::io(
            root,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "sample directory not found",
            ),
        ));
    }

    let extension = extension.map(|ext| ext.trim_start_matches('.').to_ascii_lowercase());
    let max_depth = if recursive { usize::MAX } else { 0 };

    let mut samples = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        if qualifies(entry.path(), extension.as_deref())? {
            samples.push(entry.into_path());
        }
    }

    log::debug!(
        "Discovered {} sample(s) under {}",
        samples.len(),
        root.display()
    );

    Ok(samples)
}

/// Whether `dir` directly holds a candidate file.
fn qualifies(dir: &Path, extension: Option<&str>) -> Result<bool, Error> {
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let path = entry.path();
        if path.is_file() && is_candidate(path, extension) {
            return Ok(true);
        }
    }

    Ok(false)
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    Error::io(path, err.into())
}

fn is_candidate(path: &Path, extension: Option<&str>) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if !is_eligible_name(name) {
        return false;
    }

    match extension {
        None => true,
        Some(wanted) => path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_set::RECORD_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    /// root/
    ///   README.md
    ///   aws/            (no files)
    ///     vm/main.tf
    ///     network/TestRecord.md
    ///     storage/notes.txt
    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("README.md"), "readme").unwrap();
        fs::create_dir_all(root.join("aws/vm")).unwrap();
        fs::create_dir_all(root.join("aws/network")).unwrap();
        fs::create_dir_all(root.join("aws/storage")).unwrap();
        fs::write(root.join("aws/vm/main.tf"), "M").unwrap();
        fs::write(root.join("aws/network").join(RECORD_FILE_NAME), "R").unwrap();
        fs::write(root.join("aws/storage/notes.txt"), "N").unwrap();
        temp_dir
    }

    #[test]
    fn test_non_recursive_considers_only_root() {
        let temp_dir = fixture();

        let samples = discover_samples(temp_dir.path(), false, None).unwrap();

        assert_eq!(samples, vec![temp_dir.path().to_path_buf()]);
    }

    #[test]
    fn test_recursive_visits_descendants_in_order() {
        let temp_dir = fixture();
        let root = temp_dir.path();

        let samples = discover_samples(root, true, None).unwrap();

        assert_eq!(
            samples,
            vec![
                root.to_path_buf(),
                root.join("aws/storage"),
                root.join("aws/vm"),
            ]
        );
    }

    #[test]
    fn test_record_file_alone_does_not_qualify() {
        let temp_dir = fixture();

        let samples = discover_samples(temp_dir.path(), true, None).unwrap();

        assert!(!samples.contains(&temp_dir.path().join("aws/network")));
    }

    #[test]
    fn test_extension_filter() {
        let temp_dir = fixture();
        let root = temp_dir.path();

        let samples = discover_samples(root, true, Some(".TF")).unwrap();

        assert_eq!(samples, vec![root.join("aws/vm")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("aws/vm")).unwrap();
        fs::write(root.join("aws/vm/main.tf"), "M").unwrap();
        std::os::unix::fs::symlink(root.join("aws"), root.join("aws/vm/loop")).unwrap();

        let samples = discover_samples(root, true, None).unwrap();

        assert_eq!(samples, vec![root.join("aws/vm")]);
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        match discover_samples(&missing, true, None) {
            Err(Error::Io { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
