use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_MARKUP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]+>").ok());

/// An issue as yielded by the external issue source.
///
/// Owned by the caller and never mutated by the core. Input order is the
/// canonical index order for every matrix and grouping pass in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Unique identifier (e.g. an issue key).
    pub id: String,
    /// Short title text.
    pub summary: String,
    /// Longer body text; may be empty, may contain markup.
    #[serde(default)]
    pub description: String,
    /// Arbitrary source fields carried through untouched.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl IssueRecord {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            description: String::new(),
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The comparable text for this issue: summary plus the
    /// markup-stripped description, joined with a single space.
    pub fn combined_text(&self) -> String {
        let description = match RE_MARKUP.as_ref() {
            Some(re) => re.replace_all(&self.description, "").into_owned(),
            None => self.description.clone(),
        };
        let description = description.trim();
        if description.is_empty() {
            self.summary.trim().to_string()
        } else {
            format!("{} {}", self.summary.trim(), description)
        }
    }
}
