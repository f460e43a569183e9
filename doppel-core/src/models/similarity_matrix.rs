/// Dense symmetric N×N similarity matrix.
///
/// Built once per run and read-only thereafter. Values lie in [0, 1];
/// the diagonal is never written or read. Indices follow the canonical
/// input order of the issue collection.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    side: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// A zeroed matrix of the given side.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            values: vec![0.0; side * side],
        }
    }

    /// Number of rows (equal to the number of issues).
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Number of distinct off-diagonal pairs.
    pub fn comparisons(&self) -> usize {
        self.side * self.side.saturating_sub(1) / 2
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.side + j]
    }

    /// Write both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, score: f64) {
        self.values[i * self.side + j] = score;
        self.values[j * self.side + i] = score;
    }

    /// Mean of all pairwise scores among `members`; 0.0 for fewer than
    /// two members.
    pub fn mean_among(&self, members: &[usize]) -> f64 {
        let mut sum = 0.0;
        let mut pairs = 0usize;
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                sum += self.get(i, j);
                pairs += 1;
            }
        }
        if pairs == 0 {
            0.0
        } else {
            sum / pairs as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_writes_mirror() {
        let mut m = SimilarityMatrix::new(3);
        m.set_symmetric(0, 2, 0.7);
        assert_eq!(m.get(0, 2), 0.7);
        assert_eq!(m.get(2, 0), 0.7);
    }

    #[test]
    fn mean_among_averages_all_pairs() {
        let mut m = SimilarityMatrix::new(3);
        m.set_symmetric(0, 1, 0.85);
        m.set_symmetric(0, 2, 0.82);
        m.set_symmetric(1, 2, 0.40);
        let avg = m.mean_among(&[0, 1, 2]);
        assert!((avg - (0.85 + 0.82 + 0.40) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn mean_among_singleton_is_zero() {
        let m = SimilarityMatrix::new(2);
        assert_eq!(m.mean_among(&[0]), 0.0);
    }

    #[test]
    fn comparisons_counts_upper_triangle() {
        assert_eq!(SimilarityMatrix::new(0).comparisons(), 0);
        assert_eq!(SimilarityMatrix::new(4).comparisons(), 6);
    }
}
