//! Property tests for the ranking contract

mod common;

use common::new_store;
use docvec::{DocumentMeta, Vector};
use proptest::prelude::*;

const DIM: usize = 8;

fn vec_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIM)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(vec_strategy(), 0..40)
}

proptest! {
    #[test]
    fn search_output_is_bounded(corpus in corpus_strategy(), query in vec_strategy(), k in 0usize..50) {
        let store = new_store(DIM);
        for (i, v) in corpus.iter().enumerate() {
            store.add_vector(format!("doc{i:03}"), v.clone(), DocumentMeta::default()).unwrap();
        }

        let results = store.search(&Vector::new(query), k).unwrap();
        prop_assert_eq!(results.len(), k.min(store.count()));
    }

    #[test]
    fn scores_non_increasing_with_ascending_id_ties(
        corpus in corpus_strategy(),
        query in vec_strategy(),
        k in 0usize..50,
    ) {
        let store = new_store(DIM);
        for (i, v) in corpus.iter().enumerate() {
            store.add_vector(format!("doc{i:03}"), v.clone(), DocumentMeta::default()).unwrap();
        }

        let results = store.search(&Vector::new(query), k).unwrap();
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(corpus in corpus_strategy(), query in vec_strategy()) {
        let store = new_store(DIM);
        for (i, v) in corpus.iter().enumerate() {
            store.add_vector(format!("doc{i:03}"), v.clone(), DocumentMeta::default()).unwrap();
        }

        let q = Vector::new(query);
        let a = store.search(&q, 10).unwrap();
        let b = store.search(&q, 10).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn full_k_equals_sorted_scan(corpus in corpus_strategy(), query in vec_strategy(), k in 0usize..10) {
        // Taking k from a larger request must be a prefix of the full ranking.
        let store = new_store(DIM);
        for (i, v) in corpus.iter().enumerate() {
            store.add_vector(format!("doc{i:03}"), v.clone(), DocumentMeta::default()).unwrap();
        }

        let q = Vector::new(query);
        let full = store.search(&q, store.count()).unwrap();
        let partial = store.search(&q, k).unwrap();
        prop_assert_eq!(&full[..partial.len()], &partial[..]);
    }

    #[test]
    fn wrong_dimension_never_mutates(corpus in corpus_strategy(), extra in 1usize..4) {
        let store = new_store(DIM);
        for (i, v) in corpus.iter().enumerate() {
            store.add_vector(format!("doc{i:03}"), v.clone(), DocumentMeta::default()).unwrap();
        }
        let before = store.count();

        let bad = vec![0.5f32; DIM + extra];
        prop_assert!(store.add_vector("bad", bad, DocumentMeta::default()).is_err());
        prop_assert_eq!(store.count(), before);
        prop_assert!(!store.contains("bad"));
    }

    #[test]
    fn upsert_keeps_one_record(v1 in vec_strategy(), v2 in vec_strategy()) {
        let store = new_store(DIM);
        store.add_vector("d", v1, DocumentMeta::new("first", "", "")).unwrap();
        store.add_vector("d", v2, DocumentMeta::new("second", "", "")).unwrap();

        prop_assert_eq!(store.count(), 1);
        prop_assert_eq!(store.get("d").unwrap().title, "second");
    }
}
