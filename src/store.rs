//! Document store: concurrent API over the record table.
//!
//! A single readers-writer lock guards the table. Reads (`get`, `contains`,
//! `count`, `search`, streaming search) run concurrently; writes (`add`,
//! `update`, `delete`, each per-entry insert of `add_batch`) are exclusive.
//! Every write is atomic with respect to the table, but a batch of N writes
//! is N independent operations — there is no multi-record transaction and no
//! rollback of entries that succeeded before a later one failed.

use crate::batch::{self, BatchEntry, BatchMode};
use crate::embedding::Embedder;
use crate::error::{DocVecError, Result};
use crate::metrics::{MetricsCollector, MetricsSnapshot};
use crate::ranker;
use crate::record::{DocumentMeta, MetadataPatch, SearchResult};
use crate::streaming::SearchStream;
use crate::table::RecordTable;
use crate::vector::Vector;
use rayon::prelude::*;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Vector dimension enforced on every record.
    pub dimension: usize,
    /// Worker threads for parallel batch ingestion. Fixed at construction,
    /// independent of batch size, so concurrent pressure on the embedding
    /// provider stays bounded.
    pub batch_workers: usize,
}

impl StoreConfig {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            batch_workers: 4,
        }
    }

    pub fn batch_workers(mut self, workers: usize) -> Self {
        self.batch_workers = workers;
        self
    }
}

/// An in-memory semantic document store.
///
/// Holds the id -> (vector, metadata) table behind a readers-writer lock, an
/// injected [`Embedder`] capability, and a bounded worker pool for parallel
/// ingestion. Document content is embedded and discarded — it is never
/// stored and never returned.
///
/// All methods take `&self`; share the store across threads with `Arc`.
pub struct DocumentStore {
    table: RwLock<RecordTable>,
    metrics: RwLock<MetricsCollector>,
    embedder: Arc<dyn Embedder>,
    pool: rayon::ThreadPool,
    dimension: usize,
}

impl DocumentStore {
    /// Create a store with the given configuration and embedding provider.
    ///
    /// Fails with `InvalidDimension` for a zero dimension, `DimensionMismatch`
    /// if the embedder reports a different dimension than configured, and
    /// `WorkerPool` if the ingestion pool cannot be built.
    pub fn new(config: StoreConfig, embedder: Arc<dyn Embedder>) -> Result<Self> {
        if config.dimension == 0 {
            return Err(DocVecError::InvalidDimension(0));
        }
        if embedder.dimension() != config.dimension {
            return Err(DocVecError::DimensionMismatch {
                expected: config.dimension,
                actual: embedder.dimension(),
            });
        }
        if config.batch_workers == 0 {
            return Err(DocVecError::WorkerPool(
                "batch_workers must be positive".to_string(),
            ));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.batch_workers)
            .thread_name(|i| format!("docvec-embed-{i}"))
            .build()
            .map_err(|e| DocVecError::WorkerPool(e.to_string()))?;

        Ok(Self {
            table: RwLock::new(RecordTable::new(config.dimension)),
            metrics: RwLock::new(MetricsCollector::new()),
            embedder,
            pool,
            dimension: config.dimension,
        })
    }

    /// Create a store whose dimension is taken from the embedder.
    pub fn for_embedder(embedder: Arc<dyn Embedder>) -> Result<Self> {
        let dimension = embedder.dimension();
        Self::new(StoreConfig::new(dimension), embedder)
    }

    /// The enforced vector dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    // A panic can only poison a lock between mutations of distinct fields,
    // never mid-way through a single HashMap entry, so the inner value is
    // safe to recover.
    fn table_read(&self) -> RwLockReadGuard<'_, RecordTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn table_write(&self) -> RwLockWriteGuard<'_, RecordTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn metrics_write(&self) -> RwLockWriteGuard<'_, MetricsCollector> {
        self.metrics.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Encode text through the injected provider and validate the result.
    ///
    /// Runs outside any lock: the table is only mutated once a complete,
    /// valid vector exists, so a failed or cancelled embedding call leaves
    /// no partial record behind.
    fn embed(&self, text: &str) -> Result<Vector> {
        let data = self.embedder.encode(text).map_err(DocVecError::embedding)?;
        if data.len() != self.dimension {
            return Err(DocVecError::DimensionMismatch {
                expected: self.dimension,
                actual: data.len(),
            });
        }
        Ok(Vector::new(data))
    }

    /// Add (or overwrite) a document by embedding its content.
    ///
    /// The content is consumed by the embedding step and discarded; only the
    /// vector and metadata are stored.
    pub fn add(&self, id: impl Into<String>, content: &str, meta: DocumentMeta) -> Result<()> {
        let vector = self.embed(content)?;
        self.add_vector(id, vector, meta)
    }

    /// Add (or overwrite) a document with a pre-computed vector.
    pub fn add_vector(
        &self,
        id: impl Into<String>,
        vector: impl Into<Vector>,
        meta: DocumentMeta,
    ) -> Result<()> {
        self.table_write().upsert(id, vector.into(), meta)?;
        self.metrics_write().record_insert();
        Ok(())
    }

    /// Ingest a batch of documents.
    ///
    /// Every entry is validated up front: any entry missing `id` or
    /// `content` fails the whole call with a `Validation` error enumerating
    /// the offenders, before any embedding work starts and with no table
    /// mutation. Past validation there is no all-or-nothing guarantee:
    /// entries upserted before a later embedding failure remain in the
    /// store, and the first error is returned once in-flight work finishes.
    ///
    /// `Parallel` mode overlaps embedding calls on the store's bounded
    /// worker pool and upserts each result as it completes, in no
    /// particular order. `Sequential` mode processes entries in input order.
    pub fn add_batch(&self, entries: Vec<BatchEntry>, mode: BatchMode) -> Result<()> {
        batch::validate(&entries)?;

        match mode {
            BatchMode::Sequential => {
                for entry in &entries {
                    self.ingest(entry)?;
                }
                Ok(())
            }
            BatchMode::Parallel => self
                .pool
                .install(|| entries.par_iter().try_for_each(|entry| self.ingest(entry))),
        }
    }

    fn ingest(&self, entry: &BatchEntry) -> Result<()> {
        let vector = self.embed(&entry.content)?;
        self.add_vector(entry.id.clone(), vector, entry.meta())
    }

    /// Get a copy of a document's metadata, or `None` if absent.
    pub fn get(&self, id: &str) -> Option<DocumentMeta> {
        self.table_read().get(id)
    }

    /// Merge the provided metadata fields into an existing document.
    ///
    /// Fails with `NotFound` if the id is absent; the vector and omitted
    /// fields are untouched.
    pub fn update(&self, id: &str, patch: MetadataPatch) -> Result<()> {
        self.table_write().update(id, patch)
    }

    /// Delete a document. Deleting an absent id is a no-op.
    pub fn delete(&self, id: &str) {
        self.table_write().remove(id);
        self.metrics_write().record_delete();
    }

    /// Delete several documents under one exclusive acquisition.
    pub fn delete_batch<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = self.table_write();
        let mut removed = 0u64;
        for id in ids {
            table.remove(id.as_ref());
            removed += 1;
        }
        drop(table);
        let mut metrics = self.metrics_write();
        for _ in 0..removed {
            metrics.record_delete();
        }
    }

    /// Search for the `k` documents most similar to a query vector.
    ///
    /// Results are ordered by descending cosine similarity, equal scores by
    /// ascending id; length is `min(k, count())`.
    pub fn search(&self, query: &Vector, k: usize) -> Result<Vec<SearchResult>> {
        if query.dimension() != self.dimension {
            return Err(DocVecError::DimensionMismatch {
                expected: self.dimension,
                actual: query.dimension(),
            });
        }

        let start = Instant::now();
        let results = ranker::top_k(query, &self.table_read(), k);
        self.metrics_write().record_query(start.elapsed());
        Ok(results)
    }

    /// Search with a text query, embedding it first.
    pub fn search_text(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let vector = self.embed(query)?;
        self.search(&vector, k)
    }

    /// Search, yielding results lazily as a [`SearchStream`].
    ///
    /// The full top-k selection is computed before the stream is returned,
    /// but at most `k` results are ever buffered and a partially consumed
    /// stream can simply be dropped.
    pub fn search_streaming(&self, query: &Vector, k: usize) -> Result<SearchStream> {
        Ok(SearchStream::new(self.search(query, k)?))
    }

    /// Streaming search with a text query.
    pub fn search_text_streaming(&self, query: &str, k: usize) -> Result<SearchStream> {
        let vector = self.embed(query)?;
        self.search_streaming(&vector, k)
    }

    /// The number of stored documents.
    pub fn count(&self) -> usize {
        self.table_read().len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.table_read().is_empty()
    }

    /// Whether a document exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.table_read().contains(id)
    }

    /// List all document ids.
    pub fn ids(&self) -> Vec<String> {
        self.table_read().ids()
    }

    /// A point-in-time copy of the store's operation metrics.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    /// Shut the store down, releasing the ingestion worker pool.
    ///
    /// Consuming the store makes the release deterministic rather than
    /// relying on whenever the last reference happens to drop.
    pub fn shutdown(self) {
        drop(self.pool);
    }
}
