//! Content classification types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Coarse classification of a downloaded content root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// A distribution requiring a separate install step (installer
    /// executable, possibly split across archive volumes).
    Repack,
    /// A distribution already containing a directly runnable game tree.
    Portable,
    /// Nothing recognizable found.
    Unknown,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Repack => write!(f, "Repack"),
            ContentType::Portable => write!(f, "Portable"),
            ContentType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Boolean facts about a content root, computed once per classification
/// call and discarded afterward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionSignals {
    /// A root-level setup/install executable exists.
    pub has_install_marker: bool,
    /// Root-level archive-volume files exist (.bin/.rar/.r00).
    pub has_archive_volumes: bool,
    /// A root-level subfolder name matches a game-asset keyword.
    pub has_asset_folders: bool,
    /// A packed-game-data file extension exists anywhere under the root.
    pub has_packed_data: bool,
    /// Any executable exists anywhere under the root.
    pub has_any_executable: bool,
}

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub content_type: ContentType,
    /// The resolved content root the classification applies to.
    pub root: PathBuf,
}
