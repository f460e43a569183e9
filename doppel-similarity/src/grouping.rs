//! Tiered grouping over a pairwise matrix.
//!
//! Three passes in descending confidence order. Each pass walks the
//! issues in input order; an unclaimed issue anchors a candidate set of
//! all later unclaimed issues whose score against the anchor falls in
//! the tier's range. Sets of two or more become a group and claim every
//! member; a matchless anchor stays unclaimed and remains eligible for
//! a lower tier. Clustering is anchor-based, not transitive: a group
//! never absorbs an issue retroactively.

use tracing::{debug, info};

use doppel_core::config::SimilarityConfig;
use doppel_core::constants::MIN_GROUP_SIZE;
use doppel_core::errors::{DoppelResult, SimilarityError};
use doppel_core::models::{IssueRecord, SimilarityGroup, SimilarityLevel, SimilarityMatrix};

/// Per-issue claim state. The transition fires at most once per run;
/// a claimed issue is invisible to every later anchor and tier.
#[derive(Debug, Clone)]
enum ClaimState {
    Unclaimed,
    ClaimedBy(usize),
}

impl ClaimState {
    fn is_unclaimed(&self) -> bool {
        matches!(self, ClaimState::Unclaimed)
    }
}

/// Partitions a similarity matrix into disjoint tiered groups.
pub struct TieredGroupingEngine {
    config: SimilarityConfig,
}

impl Default for TieredGroupingEngine {
    fn default() -> Self {
        Self::new(SimilarityConfig::default())
    }
}

impl TieredGroupingEngine {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    /// Lower bound of a tier.
    fn floor(&self, level: SimilarityLevel) -> f64 {
        match level {
            SimilarityLevel::High => self.config.high_threshold,
            SimilarityLevel::Medium => self.config.medium_threshold,
            SimilarityLevel::Low => self.config.low_threshold,
        }
    }

    /// Exclusive upper bound of a tier; the High tier has none.
    fn ceiling(&self, level: SimilarityLevel) -> Option<f64> {
        match level {
            SimilarityLevel::High => None,
            SimilarityLevel::Medium => Some(self.config.high_threshold),
            SimilarityLevel::Low => Some(self.config.medium_threshold),
        }
    }

    fn in_tier(&self, level: SimilarityLevel, score: f64) -> bool {
        score >= self.floor(level) && self.ceiling(level).map_or(true, |upper| score < upper)
    }

    /// Partition `issues` into disjoint similarity groups.
    ///
    /// The matrix side must equal the issue count; a mismatch is a
    /// programmer error and fails fast. Returns groups in formation
    /// order; an empty result means no duplicates were found.
    pub fn group(
        &self,
        issues: &[IssueRecord],
        matrix: &SimilarityMatrix,
    ) -> DoppelResult<Vec<SimilarityGroup>> {
        if matrix.side() != issues.len() {
            return Err(SimilarityError::MatrixMismatch {
                issues: issues.len(),
                matrix: matrix.side(),
            }
            .into());
        }

        let n = issues.len();
        let mut claims = vec![ClaimState::Unclaimed; n];
        let mut groups: Vec<SimilarityGroup> = Vec::new();

        for level in SimilarityLevel::DESCENDING {
            for anchor in 0..n {
                if let ClaimState::ClaimedBy(group) = claims[anchor] {
                    debug!(issue = %issues[anchor].id, group, tier = %level, "already claimed");
                    continue;
                }
                let mut members = vec![anchor];
                for candidate in anchor + 1..n {
                    if claims[candidate].is_unclaimed()
                        && self.in_tier(level, matrix.get(anchor, candidate))
                    {
                        members.push(candidate);
                    }
                }
                if members.len() < MIN_GROUP_SIZE {
                    debug!(anchor = %issues[anchor].id, tier = %level, "no match for anchor");
                    continue;
                }

                let ordinal = groups.len();
                for &member in &members {
                    claims[member] = ClaimState::ClaimedBy(ordinal);
                }
                let group = SimilarityGroup {
                    id: format!("{}_similarity_group_{}", level.prefix(), ordinal + 1),
                    member_issue_ids: members.iter().map(|&m| issues[m].id.clone()).collect(),
                    avg_similarity: matrix.mean_among(&members),
                    level,
                    threshold_used: self.floor(level),
                };
                info!(
                    group = %group.id,
                    members = group.len(),
                    avg_similarity = group.avg_similarity,
                    "similarity group formed"
                );
                groups.push(group);
            }
        }

        Ok(groups)
    }
}
