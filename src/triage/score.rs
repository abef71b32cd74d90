//! Confidence scoring and reason tagging.
//!
//! Six independent additive factors are applied to each candidate; every
//! non-zero contribution appends a reason tag, and the final sum is
//! clamped to [0, 100]. The factor table lives in `ScoringConfig`.

use super::config::ScoringConfig;
use super::metadata::MetadataReader;
use super::patterns;
use crate::core::ExecutableCandidate;
use crate::strings::{normalize_name, similarity_percent};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Applies the scoring rule table to candidates.
pub struct ScoreEngine {
    config: ScoringConfig,
}

/// Read-only facts shared by every candidate of one scoring run.
struct ScoreContext<'a> {
    target_norm: String,
    root_has_installer_files: bool,
    reader: &'a dyn MetadataReader,
}

/// Accumulated contributions for one candidate.
#[derive(Default)]
struct ScoreState {
    total: i32,
    reasons: Vec<String>,
}

impl ScoreState {
    fn add(&mut self, delta: i32, tag: &str) {
        if delta == 0 {
            return;
        }
        self.total += delta;
        self.reasons.push(tag.to_string());
    }
}

/// Metadata facts the launcher factor re-checks.
#[derive(Default, Clone, Copy)]
struct MetaFacts {
    product_overlap: bool,
    known_publisher: bool,
}

/// Names in one directory, read once per candidate.
#[derive(Default)]
struct Siblings {
    files: Vec<String>,
    dirs: Vec<String>,
}

fn list_siblings(dir: &Path) -> Siblings {
    let mut siblings = Siblings::default();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return siblings,
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        match entry.file_type() {
            Ok(t) if t.is_dir() => siblings.dirs.push(name),
            Ok(t) if t.is_file() => siblings.files.push(name),
            _ => {}
        }
    }
    siblings
}

/// Whether root-level files look like installer volumes.
fn root_suggests_installer(root: &Path) -> bool {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return false,
    };
    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_ascii_lowercase();
        if patterns::has_archive_volume_ext(&name) || name.contains("setup") {
            return true;
        }
    }
    false
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score every candidate against `target` in parallel, preserving the
    /// input (enumeration) order. Results are unsorted.
    pub fn score_candidates(
        &self,
        candidates: Vec<ExecutableCandidate>,
        target: &str,
        root: &Path,
        reader: &dyn MetadataReader,
    ) -> Vec<ExecutableCandidate> {
        let ctx = ScoreContext {
            target_norm: normalize_name(target),
            root_has_installer_files: root_suggests_installer(root),
            reader,
        };
        let scored: Vec<ExecutableCandidate> = candidates
            .into_par_iter()
            .map(|mut candidate| {
                self.score_candidate(&mut candidate, &ctx);
                candidate
            })
            .collect();
        debug!(target, count = scored.len(), "scored candidates");
        scored
    }

    fn score_candidate(&self, candidate: &mut ExecutableCandidate, ctx: &ScoreContext<'_>) {
        let mut state = ScoreState::default();
        let stem_norm = normalize_name(candidate.stem());

        self.name_factor(&stem_norm, ctx, &mut state);
        // Launcher shims get their size credit from the launcher factor
        // instead; a mid-sized shim earns nothing from size alone.
        if !candidate.is_launcher {
            self.size_factor(candidate.size_bytes, &mut state);
        }
        let meta_facts = self.metadata_factor(candidate, ctx, &mut state);

        let dir = candidate.path.parent().unwrap_or(Path::new("."));
        let siblings = list_siblings(dir);
        self.sibling_factor(&siblings, &mut state);
        self.folder_factor(&siblings, ctx, &mut state);

        if candidate.is_launcher {
            self.launcher_factor(candidate.size_bytes, meta_facts, &mut state);
        }

        candidate.score = state.total.clamp(0, 100);
        candidate.reasons = state.reasons;
        trace!(
            file = %candidate.path.display(),
            score = candidate.score,
            reasons = ?candidate.reasons,
            "scored candidate"
        );
    }

    /// Factor 1: name similarity against the target.
    fn name_factor(&self, stem_norm: &str, ctx: &ScoreContext<'_>, state: &mut ScoreState) {
        let cfg = &self.config;
        let target = &ctx.target_norm;
        if target.is_empty() {
            return;
        }
        if stem_norm == target {
            state.add(cfg.name_exact, "name.exact");
        } else if !stem_norm.is_empty() && stem_norm.contains(target.as_str()) {
            state.add(cfg.name_contains_target, "name.contains-target");
        } else if !stem_norm.is_empty() && target.contains(stem_norm) {
            state.add(cfg.target_contains_name, "name.in-target");
        } else {
            let sim = similarity_percent(stem_norm, target);
            if sim >= cfg.fuzzy_threshold {
                let delta = (cfg.name_fuzzy_max as f64 * sim as f64 / 100.0).round() as i32;
                state.add(delta, "name.fuzzy");
            }
        }
    }

    /// Factor 2: file size bands.
    fn size_factor(&self, size_bytes: u64, state: &mut ScoreState) {
        let cfg = &self.config;
        if size_bytes > cfg.size_huge_bytes {
            state.add(cfg.size_huge, "size.huge");
        } else if size_bytes > cfg.size_large_bytes {
            state.add(cfg.size_large, "size.large");
        } else if size_bytes >= cfg.size_small_bytes {
            state.add(cfg.size_medium, "size.medium");
        } else {
            state.add(cfg.size_tiny_penalty, "size.tiny");
        }
    }

    /// Factor 3: embedded product metadata, best-effort.
    fn metadata_factor(
        &self,
        candidate: &mut ExecutableCandidate,
        ctx: &ScoreContext<'_>,
        state: &mut ScoreState,
    ) -> MetaFacts {
        let cfg = &self.config;
        let mut facts = MetaFacts::default();
        let meta = match ctx.reader.read(&candidate.path) {
            Some(meta) => meta,
            None => return facts,
        };
        if let Some(product) = &meta.product_name {
            let product_norm = normalize_name(product);
            if !product_norm.is_empty()
                && !ctx.target_norm.is_empty()
                && (product_norm.contains(ctx.target_norm.as_str())
                    || ctx.target_norm.contains(product_norm.as_str()))
            {
                facts.product_overlap = true;
                state.add(cfg.meta_product_match, "meta.product");
            }
        }
        if let Some(publisher) = &meta.publisher {
            if patterns::is_known_game_publisher(publisher) {
                facts.known_publisher = true;
                state.add(cfg.meta_known_publisher, "meta.publisher");
            } else if patterns::is_installer_tool(publisher) {
                state.add(cfg.meta_installer_tool, "meta.installer-tool");
            }
        }
        if let Some(description) = &meta.description {
            if patterns::description_mentions_installer(description) {
                state.add(cfg.meta_installer_description, "meta.installer-text");
            }
        }
        candidate.metadata = Some(meta);
        facts
    }

    /// Factor 4: runtime/engine libraries next to the candidate.
    fn sibling_factor(&self, siblings: &Siblings, state: &mut ScoreState) {
        let cfg = &self.config;
        if siblings.files.iter().any(|f| patterns::is_runtime_library(f)) {
            state.add(cfg.sibling_runtime, "sibling.runtime");
        }
        if siblings.files.iter().any(|f| patterns::is_gfx_library(f)) {
            state.add(cfg.sibling_gfx, "sibling.gfx");
        }
        // First match only, and never the runtime library already counted.
        if siblings
            .files
            .iter()
            .any(|f| !patterns::is_runtime_library(f) && patterns::is_engine_library(f))
        {
            state.add(cfg.sibling_engine, "sibling.engine");
        }
    }

    /// Factor 5: folder structure around the candidate and at the root.
    fn folder_factor(&self, siblings: &Siblings, ctx: &ScoreContext<'_>, state: &mut ScoreState) {
        let cfg = &self.config;
        if siblings.dirs.iter().any(|d| patterns::is_asset_folder(d)) {
            state.add(cfg.folder_assets, "folder.assets");
        }
        if siblings.files.iter().any(|f| {
            f.rsplit_once('.')
                .is_some_and(|(_, ext)| patterns::is_packed_data_ext(ext))
        }) {
            state.add(cfg.folder_packed_data, "folder.packed");
        }
        if ctx.root_has_installer_files {
            state.add(cfg.folder_installer_root, "folder.installer-root");
        }
    }

    /// Factor 6: extra checks for generic launcher shims.
    fn launcher_factor(&self, size_bytes: u64, facts: MetaFacts, state: &mut ScoreState) {
        let cfg = &self.config;
        if size_bytes > cfg.size_large_bytes {
            state.add(cfg.launcher_size, "launcher.size");
        }
        if facts.product_overlap {
            state.add(cfg.launcher_product, "launcher.product");
        }
        if facts.known_publisher {
            state.add(cfg.launcher_publisher, "launcher.publisher");
        }
    }
}
