/// Doppel system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of members for an emitted similarity group.
/// An anchor with no match stays unclaimed; singletons are never emitted.
pub const MIN_GROUP_SIZE: usize = 2;

/// Character window width for trigram overlap.
pub const NGRAM_WINDOW: usize = 3;

/// Number of positional token-frequency features in the fallback vector.
pub const FALLBACK_TOKEN_POSITIONS: usize = 50;
