//! Deterministic fallback vectorizer.
//!
//! Encodes text into a fixed-length vector from surface features alone:
//! scaled length, scaled token count, per-position token frequencies for
//! the leading tokens, and one content-hash feature. Identical text
//! always yields a bit-identical vector, so runs stay reproducible when
//! the embedding provider is unavailable.

use std::collections::HashMap;

use doppel_core::constants::FALLBACK_TOKEN_POSITIONS;

/// Builds deterministic fixed-dimension vectors without any external
/// dependency.
#[derive(Debug, Clone)]
pub struct FallbackVectorizer {
    dimensions: usize,
}

impl FallbackVectorizer {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Encode `text` into exactly `dimensions` floats.
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let cleaned = clean(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let mut vector = Vec::with_capacity(self.dimensions);
        vector.push(cleaned.chars().count() as f32 / 1000.0);
        vector.push(words.len() as f32 / 100.0);

        // Frequencies counted within the leading window only.
        let window = &words[..words.len().min(FALLBACK_TOKEN_POSITIONS)];
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for word in window {
            *frequency.entry(word).or_insert(0) += 1;
        }
        for position in 0..FALLBACK_TOKEN_POSITIONS {
            match window.get(position) {
                Some(word) => {
                    let count = frequency.get(word).copied().unwrap_or(0);
                    vector.push(count as f32 / words.len() as f32);
                }
                None => vector.push(0.0),
            }
        }

        // One content-hash feature keeps distinct texts with identical
        // surface statistics apart.
        let digest = blake3::hash(cleaned.as_bytes());
        let mut word32 = [0u8; 4];
        word32.copy_from_slice(&digest.as_bytes()[..4]);
        let hashed = u32::from_be_bytes(word32);
        vector.push((hashed % 1000) as f32 / 1000.0);

        vector.resize(self.dimensions, 0.0);
        vector.truncate(self.dimensions);
        vector
    }
}

/// Lowercase and drop everything but word characters and whitespace.
fn clean(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}
