//! Download root resolution.
//!
//! A bulk download lands in a base directory; the content usually lives in
//! one subfolder named by the transfer. The remote file listing, when the
//! caller has one, names that folder; otherwise the base directory itself
//! is the best known root.

use crate::error::{EngineError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the actual content root under `base`.
///
/// `listing` is the transfer's relative file listing as fetched by the
/// caller, if available. If its first entry has a leading path segment and
/// `base/<segment>` exists on disk, that directory is the root; in every
/// other case the base directory is returned unchanged.
///
/// Fails only when `base` itself does not exist.
pub fn resolve_root(base: &Path, listing: Option<&[String]>) -> Result<PathBuf> {
    if !base.is_dir() {
        return Err(EngineError::PathNotFound(base.to_path_buf()));
    }

    let first = match listing.and_then(|l| l.first()) {
        Some(f) => f,
        None => return Ok(base.to_path_buf()),
    };

    let segment = match first.split(['/', '\\']).next() {
        // A flat listing (no separator) means files sit directly in base.
        Some(seg) if !seg.is_empty() && first.len() > seg.len() => seg,
        _ => return Ok(base.to_path_buf()),
    };

    let candidate = base.join(segment);
    if candidate.is_dir() {
        debug!(root = %candidate.display(), "resolved content root from listing");
        Ok(candidate)
    } else {
        debug!(base = %base.display(), "listing subfolder missing, using base");
        Ok(base.to_path_buf())
    }
}
