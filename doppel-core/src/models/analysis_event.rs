use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::similarity_group::{SimilarityGroup, SimilarityLevel};

/// A structured event emitted by an analysis engine.
///
/// Engines accumulate events during a run and expose them via
/// `drain_events()`; callers route them to a console, a file, or nowhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: AnalysisEventKind,
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalysisEventKind {
    /// The pairwise matrix for a run was fully populated.
    MatrixBuilt { issues: usize, comparisons: usize },
    /// A similarity group was materialized.
    GroupFormed {
        group_id: String,
        level: SimilarityLevel,
        members: usize,
        avg_similarity: f64,
    },
    /// An embedding call was replaced by the deterministic fallback.
    ProviderFallback {
        issue_id: String,
        provider: String,
        reason: String,
    },
}

impl AnalysisEvent {
    fn now(kind: AnalysisEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn matrix_built(issues: usize, comparisons: usize) -> Self {
        Self::now(AnalysisEventKind::MatrixBuilt {
            issues,
            comparisons,
        })
    }

    pub fn group_formed(group: &SimilarityGroup) -> Self {
        Self::now(AnalysisEventKind::GroupFormed {
            group_id: group.id.clone(),
            level: group.level,
            members: group.len(),
            avg_similarity: group.avg_similarity,
        })
    }

    pub fn provider_fallback(
        issue_id: impl Into<String>,
        provider: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::now(AnalysisEventKind::ProviderFallback {
            issue_id: issue_id.into(),
            provider: provider.into(),
            reason: reason.into(),
        })
    }
}
