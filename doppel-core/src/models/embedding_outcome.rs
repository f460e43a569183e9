/// How an issue's vector was obtained.
///
/// Provider failure is data, not control flow: a failed or timed-out call
/// yields `Fallback` with the deterministic vector and a reason, so callers
/// can audit how many comparisons ran on degraded vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingOutcome {
    /// The external provider returned this vector.
    Success(Vec<f32>),
    /// The deterministic fallback vector was used instead.
    Fallback { vector: Vec<f32>, reason: String },
}

impl EmbeddingOutcome {
    pub fn vector(&self) -> &[f32] {
        match self {
            EmbeddingOutcome::Success(v) => v,
            EmbeddingOutcome::Fallback { vector, .. } => vector,
        }
    }

    pub fn into_vector(self) -> Vec<f32> {
        match self {
            EmbeddingOutcome::Success(v) => v,
            EmbeddingOutcome::Fallback { vector, .. } => vector,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, EmbeddingOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            EmbeddingOutcome::Success(_) => None,
            EmbeddingOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}
