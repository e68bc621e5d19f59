//! Lazy consumption of search results

use crate::record::SearchResult;
use std::iter::FusedIterator;

/// A finite, single-pass stream of ranked search results.
///
/// The top-k selection is computed up front (ranking is not incremental
/// across the scan), but consumption is lazy and the buffer never exceeds
/// `k` results — dropping the stream after the first few hits costs nothing
/// further. Exactly `min(k, N)` elements are yielded, best score first.
/// A stream is not resumable; a new search call re-runs the scan.
#[derive(Debug)]
pub struct SearchStream {
    inner: std::vec::IntoIter<SearchResult>,
}

impl SearchStream {
    pub(crate) fn new(results: Vec<SearchResult>) -> Self {
        Self {
            inner: results.into_iter(),
        }
    }

    /// Results not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl Iterator for SearchStream {
    type Item = SearchResult;

    fn next(&mut self) -> Option<SearchResult> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SearchStream {}
impl FusedIterator for SearchStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DocumentMeta;

    fn results(n: usize) -> Vec<SearchResult> {
        (0..n)
            .map(|i| SearchResult::new(format!("d{i}"), 1.0 - i as f32 * 0.1, &DocumentMeta::default()))
            .collect()
    }

    #[test]
    fn test_stream_yields_all_in_order() {
        let stream = SearchStream::new(results(3));
        let ids: Vec<String> = stream.map(|r| r.id).collect();
        assert_eq!(ids, vec!["d0", "d1", "d2"]);
    }

    #[test]
    fn test_stream_partial_consumption() {
        let mut stream = SearchStream::new(results(5));
        assert_eq!(stream.len(), 5);

        let first = stream.next().unwrap();
        assert_eq!(first.id, "d0");
        assert_eq!(stream.remaining(), 4);
        // Dropping here abandons the rest without error.
    }

    #[test]
    fn test_stream_is_fused() {
        let mut stream = SearchStream::new(results(1));
        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }
}
