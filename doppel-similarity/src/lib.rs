//! # doppel-similarity
//!
//! The text path of the Doppel duplicate detector: canonicalize issue
//! text, score every pair with four weighted signals, and partition the
//! resulting matrix into disjoint groups across three confidence tiers.
//!
//! Everything here is synchronous and single-threaded; the matrix build
//! and the grouping pass are pure functions of their inputs.

pub mod algorithms;
pub mod engine;
pub mod grouping;
pub mod matrix;
pub mod normalize;
pub mod scorer;

pub use engine::DetectionEngine;
pub use grouping::TieredGroupingEngine;
pub use scorer::{ScorerWeights, SimilarityScorer};
