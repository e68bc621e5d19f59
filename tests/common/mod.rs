//! Shared test fixtures

#![allow(dead_code)]

use docvec::{BoxError, DocumentStore, Embedder, StoreConfig};
use std::sync::Arc;

/// Deterministic embedder for tests: hashes bytes into `dim` buckets.
/// Identical text always embeds identically.
pub struct HashEmbedder {
    pub dim: usize,
}

impl Embedder for HashEmbedder {
    fn dimension(&self) -> usize {
        self.dim
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, BoxError> {
        let mut v = vec![0.0f32; self.dim];
        for (i, b) in text.bytes().enumerate() {
            v[(b as usize + i) % self.dim] += 1.0;
        }
        Ok(v)
    }
}

pub fn new_store(dim: usize) -> DocumentStore {
    DocumentStore::new(StoreConfig::new(dim), Arc::new(HashEmbedder { dim })).unwrap()
}
