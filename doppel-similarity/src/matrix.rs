//! Pairwise matrix construction.

use doppel_core::models::SimilarityMatrix;

use crate::scorer::SimilarityScorer;

/// Score every pair of texts into a symmetric matrix. Indices follow
/// the slice order; the diagonal is left untouched.
pub fn build_matrix(texts: &[String], scorer: &SimilarityScorer) -> SimilarityMatrix {
    let mut matrix = SimilarityMatrix::new(texts.len());
    for i in 0..texts.len() {
        for j in i + 1..texts.len() {
            matrix.set_symmetric(i, j, scorer.score(&texts[i], &texts[j]));
        }
    }
    matrix
}
