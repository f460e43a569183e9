//! EmbeddingSimilarityEngine — the embedding path entry point.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{info, warn};

use doppel_core::config::EmbeddingConfig;
use doppel_core::errors::{DoppelResult, EmbeddingError};
use doppel_core::models::{
    AnalysisEvent, DuplicateCandidate, EmbeddingOutcome, IssueRecord,
};
use doppel_core::traits::IEmbeddingProvider;

use crate::matrix;
use crate::providers::FallbackVectorizer;

/// Embeds issues and ranks duplicate candidates by cosine similarity.
///
/// The provider is an injected capability; an engine constructed without
/// one runs entirely on deterministic fallback vectors. Provider
/// failures, timeouts, and wrong-dimension vectors degrade the affected
/// issue to its fallback vector and emit a diagnostic event — they never
/// abort the batch.
pub struct EmbeddingSimilarityEngine {
    provider: Option<Arc<dyn IEmbeddingProvider>>,
    fallback: FallbackVectorizer,
    config: EmbeddingConfig,
    events: Vec<AnalysisEvent>,
}

impl EmbeddingSimilarityEngine {
    /// An engine with no external provider: every issue uses the
    /// deterministic fallback vector.
    pub fn new(config: EmbeddingConfig) -> Self {
        let fallback = FallbackVectorizer::new(config.fallback_dimensions);
        Self {
            provider: None,
            fallback,
            config,
            events: Vec::new(),
        }
    }

    pub fn with_provider(config: EmbeddingConfig, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        let mut engine = Self::new(config);
        engine.provider = Some(provider);
        engine
    }

    fn provider_name(&self) -> String {
        match &self.provider {
            Some(provider) => provider.name().to_string(),
            None => "none".to_string(),
        }
    }

    /// Embed every issue, bounded-concurrently, returning one outcome
    /// per issue in input order regardless of completion order.
    pub async fn embed_all(&mut self, issues: &[IssueRecord]) -> Vec<EmbeddingOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_in_flight));
        let call_timeout = Duration::from_millis(self.config.timeout_ms);
        let provider_name = self.provider_name();

        let mut handles = Vec::with_capacity(issues.len());
        for issue in issues {
            let text = issue.combined_text();
            let provider = self.provider.clone();
            let semaphore = Arc::clone(&semaphore);
            let fallback = self.fallback.clone();
            let expected = self.config.provider_dimensions;
            handles.push(tokio::spawn(async move {
                embed_one(text, provider, semaphore, fallback, expected, call_timeout).await
            }));
        }

        // Join in input order; matrix indices are fixed by input order,
        // never by completion order.
        let mut outcomes = Vec::with_capacity(issues.len());
        for (issue, handle) in issues.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => EmbeddingOutcome::Fallback {
                    vector: self.fallback.vectorize(&issue.combined_text()),
                    reason: format!("embedding task failed: {join_error}"),
                },
            };
            if let Some(reason) = outcome.fallback_reason() {
                warn!(issue = %issue.id, reason, "using deterministic fallback vector");
                self.events.push(AnalysisEvent::provider_fallback(
                    &issue.id,
                    &provider_name,
                    reason,
                ));
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Embed all issues and rank pairs at or above the configured
    /// candidate threshold, best first.
    ///
    /// Fails fast only on invalid configuration; an empty issue slice
    /// yields an empty listing.
    pub async fn find_candidates(
        &mut self,
        issues: &[IssueRecord],
    ) -> DoppelResult<Vec<DuplicateCandidate>> {
        self.config.validate()?;
        if issues.is_empty() {
            return Ok(Vec::new());
        }

        info!(
            issues = issues.len(),
            provider = %self.provider_name(),
            "embedding issues for candidate ranking"
        );
        let outcomes = self.embed_all(issues).await;
        let degraded = outcomes.iter().filter(|o| o.is_fallback()).count();
        let vectors: Vec<Vec<f32>> = outcomes
            .into_iter()
            .map(EmbeddingOutcome::into_vector)
            .collect();

        let matrix = matrix::similarity_matrix(&vectors);
        self.events
            .push(AnalysisEvent::matrix_built(matrix.side(), matrix.comparisons()));

        let candidates = matrix::rank_candidates(&matrix, self.config.candidate_threshold);
        info!(
            candidates = candidates.len(),
            degraded,
            "candidate ranking complete"
        );
        Ok(candidates)
    }

    /// The deterministic vector the engine would use for `text` when the
    /// provider is unavailable.
    pub fn fallback_vector(&self, text: &str) -> Vec<f32> {
        self.fallback.vectorize(text)
    }

    /// Drain the events accumulated so far.
    pub fn drain_events(&mut self) -> Vec<AnalysisEvent> {
        std::mem::take(&mut self.events)
    }
}

/// One issue's embedding as an independent unit of work.
async fn embed_one(
    text: String,
    provider: Option<Arc<dyn IEmbeddingProvider>>,
    semaphore: Arc<Semaphore>,
    fallback: FallbackVectorizer,
    expected_dimensions: usize,
    call_timeout: Duration,
) -> EmbeddingOutcome {
    // Closing never happens while tasks run; a closed semaphore just
    // means the bound is gone.
    let _permit = semaphore.acquire_owned().await.ok();

    let provider = match provider {
        Some(provider) if provider.is_available() => provider,
        Some(provider) => {
            let reason = EmbeddingError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .to_string();
            return degrade(&fallback, &text, reason);
        }
        None => return degrade(&fallback, &text, "no provider configured".to_string()),
    };

    match timeout(call_timeout, provider.embed(&text)).await {
        Ok(Ok(vector)) if vector.len() == expected_dimensions => EmbeddingOutcome::Success(vector),
        Ok(Ok(vector)) => {
            let reason = EmbeddingError::DimensionMismatch {
                expected: expected_dimensions,
                actual: vector.len(),
            }
            .to_string();
            degrade(&fallback, &text, reason)
        }
        Ok(Err(error)) => degrade(&fallback, &text, error.to_string()),
        Err(_) => {
            let reason = EmbeddingError::Timeout {
                elapsed_ms: call_timeout.as_millis() as u64,
            }
            .to_string();
            degrade(&fallback, &text, reason)
        }
    }
}

fn degrade(fallback: &FallbackVectorizer, text: &str, reason: String) -> EmbeddingOutcome {
    EmbeddingOutcome::Fallback {
        vector: fallback.vectorize(text),
        reason,
    }
}
