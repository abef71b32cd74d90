//! Decision policy over scored candidates and repack roots.

use super::config::DecisionConfig;
use super::patterns;
use crate::core::{Decision, ExecutableCandidate};
use std::cmp::Reverse;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Pick an outcome for portable content from scored candidates.
///
/// Candidates are stable-sorted by descending score (ties keep their
/// enumeration order) and anything below `min_score` is discarded
/// entirely. The top candidate wins outright at `auto_threshold`;
/// otherwise up to `prompt_limit` survivors are handed to the user.
pub fn decide_portable(
    mut scored: Vec<ExecutableCandidate>,
    config: &DecisionConfig,
) -> Decision {
    scored.sort_by_key(|c| Reverse(c.score));
    scored.retain(|c| c.score >= config.min_score);
    let top = match scored.first() {
        Some(top) => top,
        None => return Decision::NoCandidates,
    };
    if top.score >= config.auto_threshold {
        debug!(file = %top.path.display(), score = top.score, "auto-configuring");
        return Decision::AutoConfigure(top.clone());
    }
    scored.truncate(config.prompt_limit);
    Decision::PromptUser(scored)
}

/// Locate the installer for repack content.
///
/// Preference order: `setup.exe` exactly at the root, then any
/// `setup*.exe` variant at the root, then the shallowest `setup.exe`
/// found anywhere below it.
pub fn decide_install(root: &Path) -> Decision {
    // read_dir order is filesystem dependent; collect and pick the
    // lexicographically smallest so repeated runs agree.
    let mut exact = None;
    let mut variants = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.eq_ignore_ascii_case("setup.exe") {
                let path = entry.path();
                if exact.as_ref().map(|e| path < *e).unwrap_or(true) {
                    exact = Some(path);
                }
            } else if patterns::SETUP_NAME_RE.is_match(&name) {
                variants.push(entry.path());
            }
        }
    }
    if let Some(path) = exact {
        return Decision::ConfigureInstall(path);
    }
    variants.sort();
    if let Some(path) = variants.into_iter().next() {
        return Decision::ConfigureInstall(path);
    }

    // Deeper setup.exe, shallowest first; sorted walk keeps ties stable.
    let mut best: Option<(usize, std::path::PathBuf)> = None;
    for entry in WalkDir::new(root).min_depth(2).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case("setup.exe")
        {
            continue;
        }
        let depth = entry.depth();
        if best.as_ref().map(|(d, _)| depth < *d).unwrap_or(true) {
            best = Some((depth, entry.into_path()));
        }
    }
    match best {
        Some((_, path)) => Decision::ConfigureInstall(path),
        None => Decision::SetupNotFound,
    }
}
