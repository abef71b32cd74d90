//! launchpick — download classification and launch-executable selection.
//!
//! After a bulk content download finishes, this crate decides whether the
//! payload is a self-contained ("portable") game tree or an installer
//! package ("repack"), and for portable content ranks candidate launch
//! executables with a 0-100 confidence score built from six additive
//! heuristic factors (name similarity, file size, embedded product
//! metadata, sibling runtime libraries, folder structure, and a launcher
//! special case). The engine is pure: it reads a filesystem snapshot and
//! returns plain data for the caller to act on.

/// Core data types module
pub mod core;
/// Error types
pub mod error;
/// Tracing initialization helpers
pub mod logging;
/// Name normalization and similarity
pub mod strings;
/// Analysis runtime
pub mod triage;

pub use crate::core::{
    BinaryMetadata, ClassificationResult, ContentType, Decision, DetectionSignals,
    ExecutableCandidate,
};
pub use crate::error::{EngineError, Result};
pub use crate::strings::{normalize_name, similarity_percent};
pub use crate::triage::{
    analyze, classify, decide_install, decide_portable, enumerate_candidates, resolve_root,
    Analysis, DecisionConfig, EngineConfig, MetadataReader, NullMetadataReader, PeMetadataReader,
    ScoreEngine, ScoringConfig,
};
