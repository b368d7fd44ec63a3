//! Error types for the cgvault library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vault operations.
///
/// Directory *absence* is not represented here: listing operations return
/// empty collections for missing directories and the caller decides how to
/// surface that. Errors split into blocking input problems (empty artist or
/// job name), naming collisions, and unexpected I/O, which callers are
/// expected to propagate rather than swallow.
#[derive(Error, Debug)]
pub enum Error {
    /// Job creation attempted with an empty title
    #[error("There is no job title")]
    EmptyJobName,

    /// Build or load attempted without an artist name
    #[error("Please enter your name in the artist field")]
    EmptyArtistName,

    /// Job directory already exists under the asset
    #[error("Job '{job}' already exists under asset '{asset}'")]
    JobExists { asset: String, job: String },

    /// Version folder label does not match the v<NNN> convention
    #[error("Invalid version label: {0}")]
    InvalidVersionLabel(String),

    /// A scene file expected on disk was not found
    #[error("Scene file not found: {0}")]
    SceneFileNotFound(PathBuf),

    /// Failure reported by the scene host application
    #[error("Scene host error: {0}")]
    Host(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a host error from a message.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// True for errors caused by missing user input.
    ///
    /// These are recoverable with a blocking warning and leave no state
    /// change behind; everything else aborts the in-progress action.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::EmptyJobName | Self::EmptyArtistName)
    }
}

/// Result type alias for vault operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::JobExists {
            asset: "Creature".into(),
            job: "modeling".into(),
        };
        assert!(e.to_string().contains("modeling"));
        assert!(e.to_string().contains("Creature"));

        let e = Error::InvalidVersionLabel("vers1".into());
        assert!(e.to_string().contains("vers1"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_input_predicate() {
        assert!(Error::EmptyArtistName.is_missing_input());
        assert!(Error::EmptyJobName.is_missing_input());
        assert!(!Error::host("boom").is_missing_input());
    }
}
