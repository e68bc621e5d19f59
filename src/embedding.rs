//! Embedding provider capability.
//!
//! The store never loads or runs a model itself. Text-to-vector conversion is
//! injected through this trait; the implementation is expected to be slow
//! (possibly hardware-accelerated) relative to table operations, which is why
//! batch ingestion overlaps calls to it on a worker pool.

use crate::error::BoxError;

/// An external text-embedding capability.
///
/// Implementations must be deterministic for a fixed model/version and safe
/// to call from multiple threads at once. Failures cross this boundary as
/// opaque boxed errors; the store wraps them as
/// [`DocVecError::Embedding`](crate::DocVecError::Embedding) rather than
/// leaking provider internals.
pub trait Embedder: Send + Sync {
    /// The length of every vector this provider produces.
    fn dimension(&self) -> usize;

    /// Encode text into a vector of length `dimension()`.
    fn encode(&self, text: &str) -> Result<Vec<f32>, BoxError>;
}
