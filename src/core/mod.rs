//! Core data types for download classification and candidate selection.

pub mod candidate;
pub mod content;
pub mod decision;

// Re-exports for convenient access under crate::core::*
pub use candidate::{BinaryMetadata, ExecutableCandidate};
pub use content::{ClassificationResult, ContentType, DetectionSignals};
pub use decision::Decision;
