use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::DoppelResult;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Dimensionality of vectors returned by the external provider.
    pub provider_dimensions: usize,
    /// Dimensionality of the deterministic fallback vector.
    pub fallback_dimensions: usize,
    /// Score floor for the flat duplicate-candidate listing.
    pub candidate_threshold: f64,
    /// Maximum provider calls in flight at once.
    pub max_in_flight: usize,
    /// Per-call timeout; an expired call falls back, it does not abort the batch.
    pub timeout_ms: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider_dimensions: defaults::DEFAULT_PROVIDER_DIMENSIONS,
            fallback_dimensions: defaults::DEFAULT_FALLBACK_DIMENSIONS,
            candidate_threshold: defaults::DEFAULT_CANDIDATE_THRESHOLD,
            max_in_flight: defaults::DEFAULT_MAX_IN_FLIGHT,
            timeout_ms: defaults::DEFAULT_EMBED_TIMEOUT_MS,
        }
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> DoppelResult<()> {
        if self.provider_dimensions == 0 || self.fallback_dimensions == 0 {
            return Err(invalid("embedding dimensions must be non-zero"));
        }
        if self.max_in_flight == 0 {
            return Err(invalid("max_in_flight must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.candidate_threshold) {
            return Err(invalid("candidate_threshold must lie in [0, 1]"));
        }
        Ok(())
    }
}
