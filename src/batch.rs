//! Batch ingestion: entry types and pre-validation

use crate::error::{DocVecError, Result};
use crate::record::DocumentMeta;
use serde::{Deserialize, Serialize};

/// One document to ingest: id, raw content to embed, optional metadata.
///
/// `content` exists only until it has been embedded; it is never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
}

impl BatchEntry {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub(crate) fn meta(&self) -> DocumentMeta {
        DocumentMeta::new(self.title.clone(), self.url.clone(), self.summary.clone())
    }
}

/// How a batch is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchMode {
    /// Embed and upsert one entry at a time, in input order.
    Sequential,
    /// Dispatch embedding to the store's bounded worker pool; each completed
    /// embedding is upserted as it finishes, with no ordering guarantee.
    Parallel,
}

/// Check every entry for the required fields before any embedding starts.
///
/// Returns a single `Validation` error enumerating every offending entry by
/// position and id. Because this runs before any work is dispatched,
/// validation is all-or-nothing even though insertion is not.
pub(crate) fn validate(entries: &[BatchEntry]) -> Result<()> {
    let mut issues = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        if entry.id.is_empty() {
            issues.push(format!("entry {position}: missing id"));
        }
        if entry.content.is_empty() {
            let id = if entry.id.is_empty() { "?" } else { entry.id.as_str() };
            issues.push(format!("entry {position} (id \"{id}\"): missing content"));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(DocVecError::Validation { issues })
    }
}
