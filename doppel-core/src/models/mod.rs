//! Data model for a single analysis run.
//!
//! Everything here is created and consumed within one run; there is no
//! cross-run state anywhere in the workspace.

mod analysis_event;
mod duplicate_candidate;
mod embedding_outcome;
mod issue;
mod similarity_group;
mod similarity_matrix;

pub use analysis_event::{AnalysisEvent, AnalysisEventKind};
pub use duplicate_candidate::DuplicateCandidate;
pub use embedding_outcome::EmbeddingOutcome;
pub use issue::IssueRecord;
pub use similarity_group::{SimilarityGroup, SimilarityLevel};
pub use similarity_matrix::SimilarityMatrix;
