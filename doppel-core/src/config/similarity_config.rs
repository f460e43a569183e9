use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::DoppelResult;

/// Tiered grouping configuration.
///
/// The three thresholds are the lower bounds of the High, Medium, and Low
/// confidence tiers. Each tier's upper bound is the next tier's floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Scores at or above this form High groups.
    pub high_threshold: f64,
    /// Scores in [medium, high) form Medium groups.
    pub medium_threshold: f64,
    /// Scores in [low, medium) form Low groups.
    pub low_threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            high_threshold: defaults::DEFAULT_HIGH_THRESHOLD,
            medium_threshold: defaults::DEFAULT_MEDIUM_THRESHOLD,
            low_threshold: defaults::DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl SimilarityConfig {
    /// Thresholds must be strictly ordered within [0, 1].
    pub fn validate(&self) -> DoppelResult<()> {
        if !(0.0..=1.0).contains(&self.low_threshold)
            || !(0.0..=1.0).contains(&self.high_threshold)
        {
            return Err(invalid("similarity thresholds must lie in [0, 1]"));
        }
        if self.low_threshold >= self.medium_threshold
            || self.medium_threshold >= self.high_threshold
        {
            return Err(invalid(
                "similarity thresholds must satisfy low < medium < high",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        assert!(SimilarityConfig::default().validate().is_ok());
    }

    #[test]
    fn unordered_thresholds_rejected() {
        let config = SimilarityConfig {
            high_threshold: 0.4,
            medium_threshold: 0.5,
            low_threshold: 0.3,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_thresholds_rejected() {
        let config = SimilarityConfig {
            high_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
