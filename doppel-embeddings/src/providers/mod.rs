//! Vector sources that need no external service.

mod fallback;

pub use fallback::FallbackVectorizer;
