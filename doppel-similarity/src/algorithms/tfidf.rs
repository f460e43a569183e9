//! Pairwise tf-idf cosine.
//!
//! The vector space is built over exactly the two input texts (a
//! two-document corpus): term counts weighted by smoothed inverse
//! document frequency `ln((1 + n) / (1 + df)) + 1` with n = 2. Any
//! degenerate input — no vocabulary, zero magnitude — scores 0.0,
//! never an error.

use std::collections::HashMap;

const N_DOCS: f64 = 2.0;

/// Cosine similarity in [0, 1] between two texts in their shared
/// tf-idf space. Identical non-empty token streams score exactly 1.0.
pub fn pairwise_cosine(a: &str, b: &str) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    // Deterministic term order keeps float accumulation reproducible.
    let mut vocabulary: Vec<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for term in vocabulary {
        let tf_a = counts_a.get(term).copied().unwrap_or(0.0);
        let tf_b = counts_b.get(term).copied().unwrap_or(0.0);
        let df = (tf_a > 0.0) as u8 + (tf_b > 0.0) as u8;
        let idf = ((1.0 + N_DOCS) / (1.0 + df as f64)).ln() + 1.0;
        let (wa, wb) = (tf_a * idf, tf_b * idf);
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    let denom = (norm_a * norm_b).sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

fn term_counts(text: &str) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_default() += 1.0;
    }
    counts
}
