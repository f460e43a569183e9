/// Similarity subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("matrix side {matrix} does not match issue count {issues}")]
    MatrixMismatch { issues: usize, matrix: usize },
}
