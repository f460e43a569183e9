//! Set-overlap signals: word-set Jaccard and character-trigram Jaccard.

use std::collections::HashSet;

use doppel_core::constants::NGRAM_WINDOW;

/// Jaccard overlap of whitespace token sets; 0.0 when both are empty.
pub fn word_jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<&str> = a.split_whitespace().collect();
    let set_b: HashSet<&str> = b.split_whitespace().collect();
    jaccard(&set_a, &set_b)
}

/// Jaccard overlap of sliding 3-character windows; 0.0 when both sets
/// are empty (strings shorter than the window produce no trigrams).
pub fn trigram_jaccard(a: &str, b: &str) -> f64 {
    jaccard(&trigrams(a), &trigrams(b))
}

fn jaccard<T: std::hash::Hash + Eq>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

fn trigrams(text: &str) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < NGRAM_WINDOW {
        return HashSet::new();
    }
    chars
        .windows(NGRAM_WINDOW)
        .map(|window| window.iter().collect())
        .collect()
}
