use async_trait::async_trait;

use crate::errors::DoppelResult;

/// External embedding provider.
///
/// The call may suspend (network inference); the embedding engine bounds
/// how many are in flight and applies a per-call timeout. A provider error
/// never aborts a batch — it triggers the deterministic fallback vector
/// for that issue.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a dense vector of `dimensions()` floats.
    async fn embed(&self, text: &str) -> DoppelResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
