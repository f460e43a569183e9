use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence tier of a similarity group.
///
/// Tiers are processed in descending order; an issue claimed by a higher
/// tier is invisible to every later pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityLevel {
    High,
    Medium,
    Low,
}

impl SimilarityLevel {
    /// All tiers, highest first — the processing order.
    pub const DESCENDING: [SimilarityLevel; 3] = [
        SimilarityLevel::High,
        SimilarityLevel::Medium,
        SimilarityLevel::Low,
    ];

    /// Group-id prefix for this tier.
    pub fn prefix(&self) -> &'static str {
        match self {
            SimilarityLevel::High => "high",
            SimilarityLevel::Medium => "medium",
            SimilarityLevel::Low => "low",
        }
    }
}

impl fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityLevel::High => write!(f, "High"),
            SimilarityLevel::Medium => write!(f, "Medium"),
            SimilarityLevel::Low => write!(f, "Low"),
        }
    }
}

/// A disjoint set of near-duplicate issues found in one tier pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityGroup {
    /// `{tier}_similarity_group_{n}`; `n` counts from 1 across all tiers
    /// and is stable only within a single run.
    pub id: String,
    /// Member ids in input order, anchor first.
    pub member_issue_ids: Vec<String>,
    /// Mean of all pairwise matrix scores among members at formation time.
    pub avg_similarity: f64,
    /// The tier this group was formed in.
    pub level: SimilarityLevel,
    /// The tier's lower bound at formation time.
    pub threshold_used: f64,
}

impl SimilarityGroup {
    pub fn len(&self) -> usize {
        self.member_issue_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_issue_ids.is_empty()
    }
}
