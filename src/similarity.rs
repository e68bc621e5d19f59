//! Cosine similarity scoring for vector ranking

use crate::vector::Vector;

/// Compute dot product of two vectors
pub fn dot_product(v1: &Vector, v2: &Vector) -> f32 {
    v1.as_slice()
        .iter()
        .zip(v2.as_slice().iter())
        .map(|(a, b)| a * b)
        .sum()
}

/// Compute cosine similarity between two vectors.
///
/// Returns a score in `[-1, 1]`. A zero-norm vector on either side yields
/// `0.0` rather than dividing by zero — ranking degrades softly instead of
/// failing the whole search.
pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> f32 {
    let norm1 = v1.norm();
    let norm2 = v2.norm();

    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    let similarity = dot_product(v1, v2) / (norm1 * norm2);

    // Clamp to [-1, 1] to handle floating point errors
    similarity.clamp(-1.0, 1.0)
}
