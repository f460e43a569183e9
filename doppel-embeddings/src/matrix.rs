//! Cosine similarity and candidate ranking over embedding vectors.

use doppel_core::models::{DuplicateCandidate, SimilarityMatrix};

/// Cosine similarity between two vectors.
/// Returns 0.0 for empty, mismatched-length, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = (mag_a * mag_b).sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Pairwise cosine matrix over one run's vectors.
///
/// Indices follow the slice order. Negative cosines are floored at 0.0
/// so every entry lies in [0, 1]; vectors of different lengths (a run
/// that mixed provider and fallback vectors) compare as 0.0 rather than
/// failing.
pub fn similarity_matrix(vectors: &[Vec<f32>]) -> SimilarityMatrix {
    let mut matrix = SimilarityMatrix::new(vectors.len());
    for i in 0..vectors.len() {
        for j in i + 1..vectors.len() {
            let score = cosine_similarity(&vectors[i], &vectors[j]).max(0.0);
            matrix.set_symmetric(i, j, score);
        }
    }
    matrix
}

/// All pairs scoring at or above `threshold`, sorted by descending
/// score; ties keep input-pair order.
pub fn rank_candidates(matrix: &SimilarityMatrix, threshold: f64) -> Vec<DuplicateCandidate> {
    let mut candidates = Vec::new();
    for i in 0..matrix.side() {
        for j in i + 1..matrix.side() {
            let score = matrix.get(i, j);
            if score >= threshold {
                candidates.push(DuplicateCandidate {
                    first: i,
                    second: j,
                    score,
                });
            }
        }
    }
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_return_zero() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn zero_magnitude_returns_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn matrix_floors_negative_cosines() {
        let vectors = vec![vec![1.0, 0.0], vec![-1.0, 0.0]];
        let matrix = similarity_matrix(&vectors);
        assert_eq!(matrix.get(0, 1), 0.0);
    }

    #[test]
    fn ranking_sorts_descending_with_stable_ties() {
        let vectors = vec![
            vec![1.0, 0.0],
            vec![1.0, 0.0],
            vec![0.6, 0.8],
            vec![1.0, 0.0],
        ];
        let matrix = similarity_matrix(&vectors);
        let candidates = rank_candidates(&matrix, 0.5);
        // Exact-match pairs (score 1.0) first, in input-pair order.
        let ones: Vec<(usize, usize)> = candidates
            .iter()
            .take_while(|c| (c.score - 1.0).abs() < 1e-9)
            .map(|c| (c.first, c.second))
            .collect();
        assert_eq!(ones, vec![(0, 1), (0, 3), (1, 3)]);
        // Remaining pairs involve the off-axis vector at cosine 0.6.
        assert_eq!(candidates.len(), 6);
        assert!(candidates[3..].iter().all(|c| c.score < 1.0));
    }

    #[test]
    fn threshold_filters_pairs() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]];
        let matrix = similarity_matrix(&vectors);
        let candidates = rank_candidates(&matrix, 0.8);
        assert_eq!(candidates.len(), 1);
        assert_eq!((candidates[0].first, candidates[0].second), (0, 2));
    }
}
