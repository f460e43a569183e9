//! # doppel-core
//!
//! Foundation crate for the Doppel near-duplicate detection system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DoppelConfig;
pub use errors::{DoppelError, DoppelResult};
pub use models::{IssueRecord, SimilarityGroup, SimilarityLevel, SimilarityMatrix};
