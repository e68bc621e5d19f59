//! Top-k similarity ranking over the record table

use crate::record::{DocumentMeta, SearchResult};
use crate::similarity::cosine_similarity;
use crate::table::RecordTable;
use crate::vector::Vector;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A scored record under the ranking order: higher score first, equal scores
/// broken by ascending id so output is reproducible.
struct Candidate<'a> {
    score: f32,
    id: &'a str,
    meta: &'a DocumentMeta,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores are finite: zero-norm vectors are mapped to 0.0 upstream.
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.id.cmp(self.id))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

/// Rank every record in the table against `query` by cosine similarity and
/// return the `k` best, highest score first.
///
/// Brute-force scan with a bounded min-heap of size `k`, so the cost is
/// `O(N·D + N·log k)`. Equal scores order by ascending id. An empty table or
/// `k == 0` yields an empty Vec.
pub fn top_k(query: &Vector, table: &RecordTable, k: usize) -> Vec<SearchResult> {
    if k == 0 || table.is_empty() {
        return Vec::new();
    }

    // Min-heap keyed by the ranking order: the root is the worst candidate
    // retained so far and is evicted when a better one arrives.
    let mut heap: BinaryHeap<Reverse<Candidate>> =
        BinaryHeap::with_capacity(k.min(table.len()) + 1);

    for (id, record) in table.iter() {
        let candidate = Candidate {
            score: cosine_similarity(query, &record.vector),
            id,
            meta: &record.meta,
        };
        if heap.len() < k {
            heap.push(Reverse(candidate));
        } else if let Some(Reverse(worst)) = heap.peek() {
            if candidate > *worst {
                heap.pop();
                heap.push(Reverse(candidate));
            }
        }
    }

    // Ascending by Reverse is descending by ranking order: best first.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(c)| SearchResult::new(c.id, c.score, c.meta))
        .collect()
}
