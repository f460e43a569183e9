//! Configuration for the analysis engines.
//!
//! All values are plain data passed into engines at construction; there is
//! no process-wide configuration state. Defaults live in [`defaults`] so
//! serde and `Default` impls agree on one source of truth.

pub mod defaults;

mod embedding_config;
mod similarity_config;

pub use embedding_config::EmbeddingConfig;
pub use similarity_config::SimilarityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{DoppelError, DoppelResult};

/// Bundled configuration for a full analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoppelConfig {
    pub similarity: SimilarityConfig,
    pub embedding: EmbeddingConfig,
}

impl DoppelConfig {
    /// Validate the configuration, failing fast on programmer-error values.
    pub fn validate(&self) -> DoppelResult<()> {
        self.similarity.validate()?;
        self.embedding.validate()
    }
}

pub(crate) fn invalid(msg: impl Into<String>) -> DoppelError {
    DoppelError::InvalidArgument(msg.into())
}
