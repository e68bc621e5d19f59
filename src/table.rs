//! In-memory record table: exact-key storage of document records

use crate::error::{DocVecError, Result};
use crate::record::{DocumentMeta, DocumentRecord, MetadataPatch};
use crate::vector::Vector;
use std::collections::HashMap;

/// The owned mapping from document id to its vector and metadata.
///
/// Enforces a fixed vector dimension set at construction: any insertion
/// whose vector length disagrees is rejected before the map is touched.
/// Concurrency is the caller's concern — [`crate::store::DocumentStore`]
/// wraps this table in a readers-writer lock.
#[derive(Debug)]
pub struct RecordTable {
    records: HashMap<String, DocumentRecord>,
    dimension: usize,
}

impl RecordTable {
    /// Create an empty table enforcing the given vector dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            records: HashMap::new(),
            dimension,
        }
    }

    /// The enforced vector dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Insert or overwrite the record for `id`.
    ///
    /// Upsert semantics: an existing record is replaced entirely, vector and
    /// metadata both. Fails with `DimensionMismatch` before any mutation.
    pub fn upsert(&mut self, id: impl Into<String>, vector: Vector, meta: DocumentMeta) -> Result<()> {
        if vector.dimension() != self.dimension {
            return Err(DocVecError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.dimension(),
            });
        }
        self.records.insert(id.into(), DocumentRecord { vector, meta });
        Ok(())
    }

    /// Merge the provided metadata fields into an existing record.
    ///
    /// The vector and any field the patch leaves as `None` are untouched.
    /// Fails with `NotFound` if `id` is absent.
    pub fn update(&mut self, id: &str, patch: MetadataPatch) -> Result<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| DocVecError::NotFound { id: id.to_string() })?;

        if let Some(title) = patch.title {
            record.meta.title = title;
        }
        if let Some(url) = patch.url {
            record.meta.url = url;
        }
        if let Some(summary) = patch.summary {
            record.meta.summary = summary;
        }
        Ok(())
    }

    /// Remove the record for `id`. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) {
        self.records.remove(id);
    }

    /// Get a copy of the metadata for `id` (the vector is never exposed).
    pub fn get(&self, id: &str) -> Option<DocumentMeta> {
        self.records.get(id).map(|r| r.meta.clone())
    }

    /// Check whether a record exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// The number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all (id, record) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DocumentRecord)> {
        self.records.iter()
    }

    /// List all document ids.
    pub fn ids(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }
}
