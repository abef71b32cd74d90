//! Error types for the launchpick analysis engine.
//!
//! Only a missing base directory is fatal to an analysis; every other
//! failure mode degrades to a lower-information but still valid result.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launchpick operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The base download directory does not exist.
    #[error("download directory not found: {0}")]
    PathNotFound(PathBuf),

    /// File I/O errors surfaced from the filesystem probe.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for launchpick operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::PathNotFound(PathBuf::from("/downloads/missing"));
        assert_eq!(
            err.to_string(),
            "download directory not found: /downloads/missing"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EngineError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
