//! # doppel-embeddings
//!
//! The embedding path of the Doppel duplicate detector: turn each issue
//! into a dense vector — via the external provider when it cooperates,
//! via a deterministic fallback when it does not — then rank issue pairs
//! by cosine similarity into a flat candidate listing.
//!
//! Provider calls are the only suspend-capable work in the system: one
//! task per issue, a bounded number in flight, a timeout per call, and
//! results joined in input order so a run is reproducible regardless of
//! completion order.

pub mod engine;
pub mod matrix;
pub mod providers;

pub use engine::EmbeddingSimilarityEngine;
pub use providers::FallbackVectorizer;
