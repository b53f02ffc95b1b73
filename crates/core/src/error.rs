use std::path::{Path, PathBuf};

/// Error type for every core operation.
///
/// All variants except [`Error::UserCancelled`] abort only the sample being
/// processed; the batch moves on to the next one.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generation failed: {0}")]
    GenerationFailure(String),

    #[error("Model response was empty")]
    ResponseEmpty,

    #[error("No file markers found in the model response")]
    NoFileMarkersFound,

    #[error("Missing begin marker for file '{0}'")]
    MissingBeginMarker(String),

    #[error("Missing end marker for file '{0}' (truncated or malformed response?)")]
    MissingEndMarker(String),

    #[error("Refusing to write file with unsafe name '{0}'")]
    InvalidFileName(String),

    #[error("Invalid example-pair manifest: {0}")]
    Manifest(String),

    #[error("User cancelled the run")]
    UserCancelled,
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the error must stop the whole batch instead of just the current sample.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::UserCancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cancellation_is_fatal() {
        assert!(Error::UserCancelled.is_fatal());
        assert!(!Error::ResponseEmpty.is_fatal());
        assert!(!Error::NoFileMarkersFound.is_fatal());
        assert!(!Error::MissingEndMarker("a.tf".into()).is_fatal());
        assert!(!Error::GenerationFailure("timeout".into()).is_fatal());
        assert!(!Error::io("x", std::io::Error::other("boom")).is_fatal());
    }

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "/tmp/sample/main.tf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/sample/main.tf"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_marker_errors_name_the_file() {
        assert!(Error::MissingEndMarker("variables.tf".into())
            .to_string()
            .contains("variables.tf"));
        assert!(Error::MissingBeginMarker("outputs.tf".into())
            .to_string()
            .contains("outputs.tf"));
    }
}
