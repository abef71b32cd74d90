//! Analysis runtime: root resolution, classification, enumeration,
//! scoring, and the decision policy.

pub mod api;
pub mod config;
pub mod decide;
pub mod detect;
pub mod enumerate;
pub mod metadata;
pub mod patterns;
pub mod resolve;
pub mod score;

pub use api::{analyze, Analysis};
pub use config::{DecisionConfig, EngineConfig, ScoringConfig};
pub use decide::{decide_install, decide_portable};
pub use detect::classify;
pub use enumerate::enumerate_candidates;
pub use metadata::{MetadataReader, NullMetadataReader, PeMetadataReader};
pub use resolve::resolve_root;
pub use score::ScoreEngine;
