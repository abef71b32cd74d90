//! Name normalization and similarity used by the confidence scorer.

pub mod normalize;
pub mod similarity;

pub use normalize::normalize_name;
pub use similarity::similarity_percent;
