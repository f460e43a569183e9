use serde::{Deserialize, Serialize};

/// One pair from the flat embedding-based candidate listing.
///
/// `first` and `second` are indices into the input order, `first < second`.
/// Listings are sorted by descending score, ties in input-pair order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    pub first: usize,
    pub second: usize,
    pub score: f64,
}
