//! Candidate executable descriptors produced by enumeration and scoring.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Product strings recovered best-effort from an executable's embedded
/// version information. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryMetadata {
    /// Product name field (e.g. the game's title as shipped).
    pub product_name: Option<String>,
    /// Free-text file description field.
    pub description: Option<String>,
    /// Company/publisher field.
    pub publisher: Option<String>,
}

impl BinaryMetadata {
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none() && self.description.is_none() && self.publisher.is_none()
    }
}

/// One executable found under a content root, with its confidence score
/// once the scorer has run.
///
/// Created by the enumerator with a zero score, populated incrementally by
/// the scorer, and owned by the caller afterward. Reason tags are appended
/// in factor order and never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableCandidate {
    /// Absolute path of the executable file.
    pub path: PathBuf,
    /// Bare file name, as stored on disk.
    pub file_name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Embedded product metadata, when readable.
    pub metadata: Option<BinaryMetadata>,
    /// Confidence score in [0, 100] after scoring.
    pub score: i32,
    /// Short labels describing which scoring factors fired.
    pub reasons: Vec<String>,
    /// Whether the file name marks this as a generic launcher shim.
    pub is_launcher: bool,
}

impl ExecutableCandidate {
    /// Build an unscored candidate from enumeration facts.
    pub fn new(path: PathBuf, file_name: String, size_bytes: u64) -> Self {
        let is_launcher = file_name.to_ascii_lowercase().contains("launcher");
        Self {
            path,
            file_name,
            size_bytes,
            metadata: None,
            score: 0,
            reasons: Vec::new(),
            is_launcher,
        }
    }

    /// File name without the trailing extension.
    pub fn stem(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(idx) if idx > 0 => &self.file_name[..idx],
            _ => &self.file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_candidate_flags_launchers() {
        let c = ExecutableCandidate::new("/g/Launcher.exe".into(), "Launcher.exe".into(), 42);
        assert!(c.is_launcher);
        assert_eq!(c.score, 0);
        assert!(c.reasons.is_empty());

        let c = ExecutableCandidate::new("/g/Game.exe".into(), "Game.exe".into(), 42);
        assert!(!c.is_launcher);
    }

    #[test]
    fn stem_strips_extension_only() {
        let c = ExecutableCandidate::new("/g/Game.v1.2.exe".into(), "Game.v1.2.exe".into(), 0);
        assert_eq!(c.stem(), "Game.v1.2");
        let c = ExecutableCandidate::new("/g/noext".into(), "noext".into(), 0);
        assert_eq!(c.stem(), "noext");
    }

    #[test]
    fn serde_round_trip() {
        let c = ExecutableCandidate::new("/g/Game.exe".into(), "Game.exe".into(), 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: ExecutableCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
