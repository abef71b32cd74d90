//! Candidate executable enumeration.

use super::patterns;
use crate::core::ExecutableCandidate;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively collect executable files under `root`, skipping names that
/// match the candidacy denylist (uninstallers, installers, config tools,
/// redistributables, crash reporters, updaters).
///
/// Enumeration order is deterministic (file-name sorted walk). Unreadable
/// subtrees are skipped with a warning; the worst case is an empty list,
/// never an error.
pub fn enumerate_candidates(root: &Path) -> Vec<ExecutableCandidate> {
    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_exe = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("exe"));
        if !is_exe {
            continue;
        }
        if patterns::is_denylisted(&name) {
            debug!(file = %entry.path().display(), "excluded by denylist");
            continue;
        }
        let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
        candidates.push(ExecutableCandidate::new(
            entry.into_path(),
            name,
            size_bytes,
        ));
    }
    debug!(root = %root.display(), count = candidates.len(), "enumerated candidates");
    candidates
}
