//! DetectionEngine — one text-similarity analysis run end to end.

use tracing::{debug, info};

use doppel_core::config::SimilarityConfig;
use doppel_core::errors::DoppelResult;
use doppel_core::models::{AnalysisEvent, IssueRecord, SimilarityGroup, SimilarityMatrix};

use crate::grouping::TieredGroupingEngine;
use crate::matrix;
use crate::normalize::normalize;
use crate::scorer::SimilarityScorer;

/// Orchestrates normalization, matrix construction, and tiered grouping
/// for one run. Accumulates structured events; callers drain them and
/// route them to whatever sink they like.
pub struct DetectionEngine {
    scorer: SimilarityScorer,
    grouping: TieredGroupingEngine,
    events: Vec<AnalysisEvent>,
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new(SimilarityConfig::default())
    }
}

impl DetectionEngine {
    pub fn new(config: SimilarityConfig) -> Self {
        Self {
            scorer: SimilarityScorer::new(),
            grouping: TieredGroupingEngine::new(config),
            events: Vec::new(),
        }
    }

    /// Replace the default scorer, e.g. with custom signal weights.
    pub fn with_scorer(mut self, scorer: SimilarityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// The pairwise matrix over the normalized combined text of `issues`.
    pub fn pairwise_matrix(&self, issues: &[IssueRecord]) -> SimilarityMatrix {
        let texts: Vec<String> = issues
            .iter()
            .map(|issue| normalize(&issue.combined_text()))
            .collect();
        matrix::build_matrix(&texts, &self.scorer)
    }

    /// Find disjoint near-duplicate groups across the three tiers.
    ///
    /// Returns groups in formation order, each carrying its run-scoped
    /// id. An empty input or an input with no similar pairs yields an
    /// empty result, not an error.
    pub fn find_similar_issues(
        &mut self,
        issues: &[IssueRecord],
    ) -> DoppelResult<Vec<SimilarityGroup>> {
        if issues.is_empty() {
            debug!("no issues supplied, nothing to analyze");
            return Ok(Vec::new());
        }

        info!(issues = issues.len(), "analyzing issues for similarity");
        let matrix = self.pairwise_matrix(issues);
        self.events
            .push(AnalysisEvent::matrix_built(matrix.side(), matrix.comparisons()));

        let groups = self.grouping.group(issues, &matrix)?;
        for group in &groups {
            self.events.push(AnalysisEvent::group_formed(group));
        }
        info!(groups = groups.len(), "similarity analysis complete");
        Ok(groups)
    }

    /// Drain the events accumulated so far.
    pub fn drain_events(&mut self) -> Vec<AnalysisEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doppel_core::models::AnalysisEventKind;

    #[test]
    fn empty_corpus_yields_empty_mapping() {
        let mut engine = DetectionEngine::default();
        let groups = engine.find_similar_issues(&[]).unwrap();
        assert!(groups.is_empty());
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn identical_issues_group_high() {
        let mut engine = DetectionEngine::default();
        let issues = vec![
            IssueRecord::new("A", "Login page crash on submit"),
            IssueRecord::new("B", "Login page crash on submit"),
        ];
        let groups = engine.find_similar_issues(&issues).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "high_similarity_group_1");
        assert_eq!(groups[0].member_issue_ids, vec!["A", "B"]);
        assert_eq!(groups[0].avg_similarity, 1.0);
    }

    #[test]
    fn run_emits_matrix_and_group_events() {
        let mut engine = DetectionEngine::default();
        let issues = vec![
            IssueRecord::new("A", "Export report times out"),
            IssueRecord::new("B", "Export report times out"),
            IssueRecord::new("C", "Unrelated dashboard widget request"),
        ];
        engine.find_similar_issues(&issues).unwrap();
        let events = engine.drain_events();
        assert!(matches!(
            events[0].kind,
            AnalysisEventKind::MatrixBuilt { issues: 3, comparisons: 3 }
        ));
        assert!(events
            .iter()
            .any(|e| matches!(&e.kind, AnalysisEventKind::GroupFormed { members: 2, .. })));
        // Drained: a second drain is empty.
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn custom_scorer_weights_flow_through() {
        use crate::scorer::ScorerWeights;

        let sequence_only = SimilarityScorer::with_weights(ScorerWeights {
            sequence: 1.0,
            tfidf: 0.0,
            word_overlap: 0.0,
            trigram: 0.0,
        });
        let mut engine = DetectionEngine::default().with_scorer(sequence_only);
        let issues = vec![
            IssueRecord::new("A", "Retry loop never backs off"),
            IssueRecord::new("B", "Retry loop never backs off"),
        ];
        let groups = engine.find_similar_issues(&issues).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].avg_similarity, 1.0);
    }

    #[test]
    fn events_survive_across_runs_until_drained() {
        let mut engine = DetectionEngine::default();
        let issues = vec![
            IssueRecord::new("A", "Sync conflict in settings"),
            IssueRecord::new("B", "Sync conflict in settings"),
        ];
        engine.find_similar_issues(&issues).unwrap();
        engine.find_similar_issues(&issues).unwrap();
        let events = engine.drain_events();
        let matrix_events = events
            .iter()
            .filter(|e| matches!(e.kind, AnalysisEventKind::MatrixBuilt { .. }))
            .count();
        assert_eq!(matrix_events, 2);
    }
}
