//! Document records, metadata, and search results.
//!
//! The original document content never appears here: it is consumed by the
//! embedding step and discarded. Only the vector and small metadata fields
//! (title, url, summary) are retained.

use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Metadata stored alongside a document's vector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
}

impl DocumentMeta {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            summary: summary.into(),
        }
    }
}

/// Partial metadata update: only `Some` fields are applied, the rest are
/// left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

impl MetadataPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.summary.is_none()
    }
}

/// A stored document: its embedding vector plus metadata. Never the content.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub vector: Vector,
    pub meta: DocumentMeta,
}

/// An immutable search hit: document id, similarity score, and metadata.
///
/// Carries neither the vector nor the original content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f32,
    pub title: String,
    pub url: String,
    pub summary: String,
}

impl SearchResult {
    pub(crate) fn new(id: impl Into<String>, score: f32, meta: &DocumentMeta) -> Self {
        Self {
            id: id.into(),
            score,
            title: meta.title.clone(),
            url: meta.url.clone(),
            summary: meta.summary.clone(),
        }
    }

    /// Project the result as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "score": self.score,
            "title": self.title,
            "url": self.url,
            "summary": self.summary,
        })
    }
}
