//! Output writer

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::file_set::{is_safe_name, FileSet, RECORD_FILE_NAME};

/// Write every file of `files` flat into `target_dir`.
///
/// The directory and its missing ancestors are created first. Existing files
/// with the same name are overwritten. Names are validated before anything is
/// written; a failing write stops at that file and leaves the files written so
/// far in place. A record-file entry is dropped with a warning so the sample's
/// own record is never replaced.
///
/// Returns the paths written, in file-set order.
pub fn write_file_set(files: &FileSet, target_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    if let Some(name) = files.names().find(|name| !is_safe_name(name)) {
        return Err(Error::InvalidFileName(name.to_string()));
    }

    fs::create_dir_all(target_dir).map_err(|e| Error::io(target_dir, e))?;

    let mut written = Vec::with_capacity(files.len());
    for entry in files.iter() {
        if entry.name == RECORD_FILE_NAME {
            log::warn!("Ignoring {RECORD_FILE_NAME} segment in the model response");
            continue;
        }

        let path = target_dir.join(&entry.name);
        fs::write(&path, &entry.content).map_err(|e| Error::io(&path, e))?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Where the migrated version of `sample` goes.
///
/// The sample's path relative to `input_root` is mirrored under
/// `output_root`. A sample outside `input_root` lands directly under
/// `output_root` using its own directory name.
pub fn output_dir_for(sample: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    match sample.strip_prefix(input_root) {
        Ok(relative) => output_root.join(relative),
        Err(_) => match sample.file_name() {
            Some(name) => output_root.join(name),
            None => output_root.to_path_buf(),
        },
    }
}
