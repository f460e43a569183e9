//! Default configuration values.

/// Lower bound of the High similarity tier.
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.8;

/// Lower bound of the Medium similarity tier.
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.5;

/// Lower bound of the Low similarity tier.
pub const DEFAULT_LOW_THRESHOLD: f64 = 0.3;

/// Dimensionality of provider embeddings (text-embedding-ada-002).
pub const DEFAULT_PROVIDER_DIMENSIONS: usize = 1536;

/// Dimensionality of the deterministic fallback vector.
pub const DEFAULT_FALLBACK_DIMENSIONS: usize = 100;

/// Score floor for the flat duplicate-candidate listing.
pub const DEFAULT_CANDIDATE_THRESHOLD: f64 = 0.8;

/// Maximum embedding calls in flight at once.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Per-call embedding timeout in milliseconds.
pub const DEFAULT_EMBED_TIMEOUT_MS: u64 = 30_000;
