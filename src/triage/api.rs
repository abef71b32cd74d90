//! End-to-end analysis pipeline.
//!
//! Resolve the content root, classify it, and (for portable content)
//! enumerate, score, and rank launch candidates. Pure computation over a
//! filesystem snapshot: the engine mutates nothing and keeps no state
//! between calls, so concurrent analyses of different roots need no
//! coordination.

use super::config::EngineConfig;
use super::decide::{decide_install, decide_portable};
use super::detect::classify;
use super::enumerate::enumerate_candidates;
use super::metadata::MetadataReader;
use super::resolve::resolve_root;
use super::score::ScoreEngine;
use crate::core::{ContentType, Decision, ExecutableCandidate};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one analysis produced. Plain data for the caller to apply
/// and persist however it wishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// The resolved content root the rest of the fields describe.
    pub root: PathBuf,
    pub content_type: ContentType,
    /// All scored candidates, best first (empty unless portable).
    pub candidates: Vec<ExecutableCandidate>,
    pub decision: Decision,
}

/// Run the full pipeline for one finished download.
///
/// `listing` is the transfer's remote file listing if the caller fetched
/// one; `target_name` is the title the download was matched against.
/// Fails only when `base` does not exist.
pub fn analyze(
    base: &Path,
    listing: Option<&[String]>,
    target_name: &str,
    config: &EngineConfig,
    reader: &dyn MetadataReader,
) -> Result<Analysis> {
    let root = resolve_root(base, listing)?;
    let classification = classify(&root);
    let content_type = classification.content_type;

    let (candidates, decision) = match content_type {
        ContentType::Repack => (Vec::new(), decide_install(&root)),
        ContentType::Portable => {
            let engine = ScoreEngine::new(config.scoring.clone());
            let found = enumerate_candidates(&root);
            let mut scored = engine.score_candidates(found, target_name, &root, reader);
            let decision = decide_portable(scored.clone(), &config.decision);
            scored.sort_by_key(|c| Reverse(c.score));
            (scored, decision)
        }
        // Nothing recognizable; the caller falls back to a manual choice.
        ContentType::Unknown => (Vec::new(), Decision::NoCandidates),
    };

    info!(
        root = %root.display(),
        %content_type,
        candidates = candidates.len(),
        decision = decision.label(),
        "analysis complete"
    );
    Ok(Analysis {
        root,
        content_type,
        candidates,
        decision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::metadata::NullMetadataReader;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_base_fails() {
        let err = analyze(
            Path::new("/no/such/base"),
            None,
            "Game",
            &EngineConfig::default(),
            &NullMetadataReader,
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::EngineError::PathNotFound(_)));
    }

    #[test]
    fn repack_flow_finds_setup() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("setup.exe")).unwrap();
        File::create(dir.path().join("disk1.bin")).unwrap();
        let analysis = analyze(
            dir.path(),
            None,
            "Game",
            &EngineConfig::default(),
            &NullMetadataReader,
        )
        .unwrap();
        assert_eq!(analysis.content_type, ContentType::Repack);
        assert!(analysis.candidates.is_empty());
        assert_eq!(
            analysis.decision,
            Decision::ConfigureInstall(dir.path().join("setup.exe"))
        );
    }

    #[test]
    fn portable_flow_orders_candidates_best_first() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Textures")).unwrap();
        let mut big = File::create(dir.path().join("Game.exe")).unwrap();
        big.write_all(&vec![0u8; 6 * 1024 * 1024]).unwrap();
        File::create(dir.path().join("tiny.exe")).unwrap();
        let analysis = analyze(
            dir.path(),
            None,
            "Game",
            &EngineConfig::default(),
            &NullMetadataReader,
        )
        .unwrap();
        assert_eq!(analysis.content_type, ContentType::Portable);
        assert_eq!(analysis.candidates.len(), 2);
        assert_eq!(analysis.candidates[0].file_name, "Game.exe");
        assert!(analysis.candidates[0].score > analysis.candidates[1].score);
    }

    #[test]
    fn unknown_flow_reports_no_candidates() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();
        let analysis = analyze(
            dir.path(),
            None,
            "Game",
            &EngineConfig::default(),
            &NullMetadataReader,
        )
        .unwrap();
        assert_eq!(analysis.content_type, ContentType::Unknown);
        assert_eq!(analysis.decision, Decision::NoCandidates);
    }
}
