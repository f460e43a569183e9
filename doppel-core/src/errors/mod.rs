//! Error taxonomy. Nothing in the analysis core is fatal except
//! programmer-error-class inputs, which surface as `InvalidArgument`
//! or a subsystem mismatch variant.

mod embedding_error;
mod similarity_error;

pub use embedding_error::EmbeddingError;
pub use similarity_error::SimilarityError;

/// Top-level error for the Doppel workspace.
#[derive(Debug, thiserror::Error)]
pub enum DoppelError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result alias used across the workspace.
pub type DoppelResult<T> = Result<T, DoppelError>;
