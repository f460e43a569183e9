//! Property tests for normalization, scoring, and grouping invariants.

use proptest::prelude::*;

use doppel_core::models::{IssueRecord, SimilarityMatrix};
use doppel_similarity::grouping::TieredGroupingEngine;
use doppel_similarity::normalize::normalize;
use doppel_similarity::SimilarityScorer;

/// A few space-separated lowercase words, each long enough to carry
/// trigrams — the shape normalized issue text actually has.
fn word_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{3,10}( [a-z]{3,10}){0,5}").expect("valid regex")
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in ".*") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_output_is_single_spaced(raw in ".*") {
        let normalized = normalize(&raw);
        prop_assert!(!normalized.starts_with(' '));
        prop_assert!(!normalized.ends_with(' '));
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn score_is_bounded(a in ".*", b in ".*") {
        let score = SimilarityScorer::new().score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn score_is_symmetric(a in ".*", b in ".*") {
        let scorer = SimilarityScorer::new();
        prop_assert_eq!(scorer.score(&a, &b), scorer.score(&b, &a));
    }

    #[test]
    fn score_of_identical_text_is_one(text in word_text()) {
        prop_assert_eq!(SimilarityScorer::new().score(&text, &text), 1.0);
    }

    #[test]
    fn score_against_empty_is_zero(text in ".*") {
        prop_assert_eq!(SimilarityScorer::new().score(&text, ""), 0.0);
    }

    #[test]
    fn groups_partition_disjointly(
        scores in proptest::collection::vec(0.0f64..=1.0, 15),
    ) {
        // 6 issues, random upper triangle.
        let n = 6;
        let issues: Vec<IssueRecord> = (0..n)
            .map(|i| IssueRecord::new(format!("I{i}"), format!("summary {i}")))
            .collect();
        let mut matrix = SimilarityMatrix::new(n);
        let mut it = scores.into_iter();
        for i in 0..n {
            for j in i + 1..n {
                matrix.set_symmetric(i, j, it.next().unwrap());
            }
        }

        let groups = TieredGroupingEngine::default().group(&issues, &matrix).unwrap();
        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            // Never a singleton.
            prop_assert!(group.len() >= 2);
            // Disjoint across all tiers.
            for id in &group.member_issue_ids {
                prop_assert!(seen.insert(id.clone()));
            }
            // Tier floor matches the level.
            let expected_floor = match group.level {
                doppel_core::models::SimilarityLevel::High => 0.8,
                doppel_core::models::SimilarityLevel::Medium => 0.5,
                doppel_core::models::SimilarityLevel::Low => 0.3,
            };
            prop_assert_eq!(group.threshold_used, expected_floor);
            // Average stays in bounds.
            prop_assert!((0.0..=1.0).contains(&group.avg_similarity));
        }
    }
}
