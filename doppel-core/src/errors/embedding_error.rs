/// Embedding subsystem errors.
///
/// These never escape a batch run as fatal errors — the engine converts
/// them into fallback outcomes — but providers report them, and callers
/// embedding single texts may observe them directly.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("embedding call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
