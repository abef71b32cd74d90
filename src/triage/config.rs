//! Configuration for the analysis engine.
//!
//! Defaults pin the tuned weights and thresholds of the scoring table and
//! decision policy; callers may override any of them.

use serde::{Deserialize, Serialize};

const MIB: u64 = 1024 * 1024;

/// Master configuration for one analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scoring factor weights and thresholds.
    pub scoring: ScoringConfig,
    /// Decision policy thresholds.
    pub decision: DecisionConfig,
}

/// Weights of the six additive scoring factors. Intermediate sums may
/// leave [0, 100]; the final score is clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Exact normalized name match.
    pub name_exact: i32,
    /// Candidate file name contains the target name.
    pub name_contains_target: i32,
    /// Target name contains the candidate file name.
    pub target_contains_name: i32,
    /// Ceiling of the fuzzy-similarity contribution.
    pub name_fuzzy_max: i32,
    /// Minimum similarity percentage for the fuzzy factor to fire.
    pub fuzzy_threshold: u32,

    /// File larger than `size_huge_bytes`.
    pub size_huge: i32,
    /// File larger than `size_large_bytes`.
    pub size_large: i32,
    /// File between `size_small_bytes` and `size_large_bytes`.
    pub size_medium: i32,
    /// File smaller than `size_small_bytes` (likely a utility binary).
    pub size_tiny_penalty: i32,
    pub size_huge_bytes: u64,
    pub size_large_bytes: u64,
    pub size_small_bytes: u64,

    /// Product-name field overlaps the target name.
    pub meta_product_match: i32,
    /// Publisher field names a known game publisher.
    pub meta_known_publisher: i32,
    /// Publisher field names an installer-authoring tool.
    pub meta_installer_tool: i32,
    /// Description field mentions setup/install/uninstall.
    pub meta_installer_description: i32,

    /// A sibling file is a store/runtime API library.
    pub sibling_runtime: i32,
    /// A sibling file is a 3D graphics API library.
    pub sibling_gfx: i32,
    /// A sibling file matches the broader engine marker list.
    pub sibling_engine: i32,

    /// A sibling subfolder matches an asset-folder keyword.
    pub folder_assets: i32,
    /// A sibling file carries a packed game-data extension.
    pub folder_packed_data: i32,
    /// Root-level files suggest installer volumes.
    pub folder_installer_root: i32,

    /// Launcher bonus: size above `size_large_bytes`.
    pub launcher_size: i32,
    /// Launcher bonus: product-name overlap.
    pub launcher_product: i32,
    /// Launcher bonus: known game publisher.
    pub launcher_publisher: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            name_exact: 40,
            name_contains_target: 25,
            target_contains_name: 20,
            name_fuzzy_max: 25,
            fuzzy_threshold: 70,

            size_huge: 40,
            size_large: 30,
            size_medium: 10,
            size_tiny_penalty: -20,
            size_huge_bytes: 200 * MIB,
            size_large_bytes: 20 * MIB,
            size_small_bytes: 5 * MIB,

            meta_product_match: 40,
            meta_known_publisher: 20,
            meta_installer_tool: -40,
            meta_installer_description: -30,

            sibling_runtime: 25,
            sibling_gfx: 25,
            sibling_engine: 15,

            folder_assets: 20,
            folder_packed_data: 20,
            folder_installer_root: -15,

            launcher_size: 30,
            launcher_product: 20,
            launcher_publisher: 15,
        }
    }
}

/// Thresholds applied by the decision policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Candidates below this score are discarded entirely.
    pub min_score: i32,
    /// Top-candidate score at which configuration proceeds without asking.
    pub auto_threshold: i32,
    /// How many candidates to surface when prompting the user.
    pub prompt_limit: usize,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            min_score: 10,
            auto_threshold: 70,
            prompt_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_rule_table() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.name_exact, 40);
        assert_eq!(cfg.name_fuzzy_max, 25);
        assert_eq!(cfg.fuzzy_threshold, 70);
        assert_eq!(cfg.size_huge_bytes, 200 * MIB);
        assert_eq!(cfg.size_tiny_penalty, -20);
        assert_eq!(cfg.meta_installer_tool, -40);
    }

    #[test]
    fn default_decision_thresholds() {
        let cfg = DecisionConfig::default();
        assert_eq!(cfg.min_score, 10);
        assert_eq!(cfg.auto_threshold, 70);
        assert_eq!(cfg.prompt_limit, 5);
    }

    #[test]
    fn config_serde_round_trip() {
        let cfg = EngineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scoring.name_exact, cfg.scoring.name_exact);
        assert_eq!(back.decision.prompt_limit, cfg.decision.prompt_limit);
    }
}
