//! Four-signal pairwise similarity.
//!
//! Blends an order-sensitive sequence ratio with three vocabulary-level
//! signals so near-duplicates with reordered words still score highly.

use crate::algorithms::{overlap, sequence, tfidf};

/// Weights for the four scoring signals. They sum to 1.0 so the blend
/// stays in [0, 1].
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub sequence: f64,
    pub tfidf: f64,
    pub word_overlap: f64,
    pub trigram: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            sequence: 0.3,
            tfidf: 0.3,
            word_overlap: 0.2,
            trigram: 0.2,
        }
    }
}

/// Pairwise similarity scorer over normalized text.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    weights: ScorerWeights,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScorerWeights) -> Self {
        Self { weights }
    }

    /// Bounded similarity in [0, 1]. Empty or whitespace-only input on
    /// either side scores 0.0. Symmetric; identical non-empty inputs
    /// score exactly 1.0.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        if a.trim().is_empty() || b.trim().is_empty() {
            return 0.0;
        }
        // Sequence matching breaks ties by position; fix the orientation
        // so the blend is symmetric.
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let seq = sequence::ratio(first, second);
        let tfidf = tfidf::pairwise_cosine(a, b);
        let words = overlap::word_jaccard(a, b);
        let ngrams = overlap::trigram_jaccard(a, b);
        let blended = self.weights.sequence * seq
            + self.weights.tfidf * tfidf
            + self.weights.word_overlap * words
            + self.weights.trigram * ngrams;
        blended.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_nonempty_inputs_score_exactly_one() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.score("login page crash", "login page crash"), 1.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.score("login crash", ""), 0.0);
        assert_eq!(scorer.score("", "login crash"), 0.0);
        assert_eq!(scorer.score("   ", "login crash"), 0.0);
    }

    #[test]
    fn symmetric() {
        let scorer = SimilarityScorer::new();
        let pairs = [
            ("login page crash on load", "crash loading the login page"),
            ("navigation menu broken", "menu navigation is broken"),
            ("export report timeout", "import settings dialog"),
        ];
        for (a, b) in pairs {
            assert_eq!(scorer.score(a, b), scorer.score(b, a));
        }
    }

    #[test]
    fn reordered_words_still_score_highly() {
        let scorer = SimilarityScorer::new();
        let score = scorer.score("login page crash", "crash page login");
        // Vocabulary signals carry the pair even though the sequence differs.
        assert!(score > 0.5, "got {score}");
    }

    #[test]
    fn unrelated_texts_score_low() {
        let scorer = SimilarityScorer::new();
        let score = scorer.score("login page crash", "billing export format");
        assert!(score < 0.3, "got {score}");
    }

    #[test]
    fn custom_weights_change_the_blend() {
        let sequence_only = SimilarityScorer::with_weights(ScorerWeights {
            sequence: 1.0,
            tfidf: 0.0,
            word_overlap: 0.0,
            trigram: 0.0,
        });
        // Same vocabulary, different order: the pure sequence score drops
        // well below the default blend.
        let blended = SimilarityScorer::new().score("login page crash", "crash page login");
        let seq_only = sequence_only.score("login page crash", "crash page login");
        assert!(seq_only < blended);
    }
}
