//! Source serializer
//!
//! Turns the files of a sample directory into the single string that becomes
//! one conversation turn.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::file_set::{is_eligible_name, FileSet};
use crate::marker;

/// Read the eligible files of `directory` into a [`FileSet`].
///
/// Only regular files directly inside `directory` are read (symlinks are
/// followed, subdirectories skipped). The record file and empty names are
/// excluded, as are names that are not valid UTF-8. Files are ordered by name
/// so that the same sample always yields the same prompt.
pub fn read_file_set(directory: &Path) -> Result<FileSet, Error> {
    let entries = fs::read_dir(directory).map_err(|e| Error::io(directory, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(directory, e))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("Skipping file with a non UTF-8 name: {}", path.display());
            continue;
        };
        if is_eligible_name(&name) {
            files.push((name, path));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut set = FileSet::new();
    for (name, path) in files {
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        set.insert(name, content);
    }

    log::debug!(
        "Read {} file(s) from {}",
        set.len(),
        directory.display()
    );

    Ok(set)
}

/// Render a [`FileSet`] as prompt text.
///
/// With `include_names` every file is wrapped in its markers. Without it the
/// contents are concatenated, each preceded by a newline.
pub fn render(files: &FileSet, include_names: bool) -> String {
    let mut output = String::new();

    for entry in files.iter() {
        if include_names {
            output.push_str(&marker::wrap(&entry.name, &entry.content));
        } else {
            output.push('\n');
            output.push_str(&entry.content);
        }
    }

    output
}

/// Serialize a sample directory into a single string.
pub fn serialize(directory: &Path, include_names: bool) -> Result<String, Error> {
    let files = read_file_set(directory)?;
    Ok(render(&files, include_names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_set::RECORD_FILE_NAME;
    use tempfile::TempDir;

    fn sample_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_record_file_is_excluded() {
        let dir = sample_dir(&[
            (RECORD_FILE_NAME, "# Tested on 2023-07-01"),
            ("main.tf", "resource \"x\" {}"),
        ]);

        let serialized = serialize(dir.path(), true).unwrap();

        assert_eq!(serialized, "###main.tf###\nresource \"x\" {}\nmain.tf:end\n");
        assert!(!serialized.contains(RECORD_FILE_NAME));
    }

    #[test]
    fn test_files_are_ordered_by_name() {
        let dir = sample_dir(&[("variables.tf", "V"), ("main.tf", "M"), ("outputs.tf", "O")]);

        let serialized = serialize(dir.path(), true).unwrap();

        let main = serialized.find("###main.tf###").unwrap();
        let outputs = serialized.find("###outputs.tf###").unwrap();
        let variables = serialized.find("###variables.tf###").unwrap();
        assert!(main < outputs && outputs < variables);
    }

    #[test]
    fn test_without_names_adds_no_markers() {
        let dir = sample_dir(&[("a.tf", "# ### heading"), ("b.tf", "B")]);

        let serialized = serialize(dir.path(), false).unwrap();

        assert_eq!(serialized, "\n# ### heading\nB");
        assert!(!serialized.contains("###a.tf###"));
        assert!(!serialized.contains(":end"));
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = sample_dir(&[("main.tf", "M")]);
        fs::create_dir(dir.path().join("modules")).unwrap();
        fs::write(dir.path().join("modules").join("inner.tf"), "I").unwrap();

        let files = read_file_set(dir.path()).unwrap();

        assert_eq!(files.names().collect::<Vec<_>>(), vec!["main.tf"]);
    }

    #[test]
    fn test_empty_directory_serializes_to_empty_string() {
        let dir = sample_dir(&[(RECORD_FILE_NAME, "only the record")]);

        assert_eq!(serialize(dir.path(), true).unwrap(), "");
        assert_eq!(serialize(dir.path(), false).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        match serialize(&missing, true) {
            Err(Error::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_content_is_an_io_error_naming_the_file() {
        let dir = sample_dir(&[]);
        let binary = dir.path().join("blob.bin");
        fs::write(&binary, b"\xff\xfe\xfd").unwrap();

        match serialize(dir.path(), true) {
            Err(Error::Io { path, .. }) => assert_eq!(path, binary),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = sample_dir(&[("main.tf", "M")]);
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.tf")), "B").unwrap();

        let files = read_file_set(dir.path()).unwrap();

        assert_eq!(files.names().collect::<Vec<_>>(), vec!["main.tf"]);
        assert!(!render(&files, true).contains('\u{FFFD}'));
    }

    #[test]
    fn test_render_with_names_concatenates_segments() {
        let files: FileSet = [("a.tf", "A"), ("b.tf", "B")].into_iter().collect();

        assert_eq!(
            render(&files, true),
            "###a.tf###\nA\na.tf:end\n###b.tf###\nB\nb.tf:end\n"
        );
    }
}
