//! # docvec
//!
//! An in-memory semantic document store.
//!
//! Documents are stored as dense vectors plus small metadata records (title,
//! url, summary) and retrieved by cosine similarity against a query vector.
//! The original content is consumed by the embedding step and discarded —
//! it is never persisted and never returned.
//!
//! This library provides:
//! - A concurrent id -> (vector, metadata) record table with upsert semantics
//! - Exact brute-force top-k ranking with deterministic tie-breaking
//! - Parallel bulk ingestion over a bounded worker pool
//! - Lazy streaming consumption of search results
//!
//! The text-to-vector model is injected through the [`Embedder`] trait; the
//! store never loads or runs a model itself.
//!
//! ## Example
//!
//! ```rust
//! use docvec::{BoxError, DocumentMeta, DocumentStore, Embedder};
//! use std::sync::Arc;
//!
//! // A toy embedder; real ones wrap an external model.
//! struct ByteEmbedder;
//!
//! impl Embedder for ByteEmbedder {
//!     fn dimension(&self) -> usize {
//!         4
//!     }
//!
//!     fn encode(&self, text: &str) -> Result<Vec<f32>, BoxError> {
//!         let mut v = vec![0.0; 4];
//!         for (i, b) in text.bytes().enumerate() {
//!             v[(b as usize + i) % 4] += 1.0;
//!         }
//!         Ok(v)
//!     }
//! }
//!
//! let store = DocumentStore::for_embedder(Arc::new(ByteEmbedder)).unwrap();
//!
//! // Content is embedded, then discarded; only vector + metadata are kept.
//! store
//!     .add("doc1", "the document body", DocumentMeta::new("Title", "", "Summary"))
//!     .unwrap();
//!
//! let results = store.search_text("the document body", 5).unwrap();
//! assert_eq!(results[0].id, "doc1");
//! ```

pub mod batch;
pub mod embedding;
pub mod error;
pub mod metrics;
pub mod ranker;
pub mod record;
pub mod similarity;
pub mod store;
pub mod streaming;
pub mod table;
pub mod vector;

pub use batch::{BatchEntry, BatchMode};
pub use embedding::Embedder;
pub use error::{BoxError, DocVecError, Result};
pub use metrics::MetricsSnapshot;
pub use record::{DocumentMeta, MetadataPatch, SearchResult};
pub use store::{DocumentStore, StoreConfig};
pub use streaming::SearchStream;
pub use table::RecordTable;
pub use vector::Vector;
