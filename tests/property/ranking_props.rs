//! Deduplicated ranking properties.
//!
//! - Output is a subsequence of the input, sorted by score descending
//! - Each grouping key appears once, at its best score
//! - Equal scores keep input order

use crate::common::{assert_descending, assert_unique_keys, bm25f_list};
use fieldtune::{rank, Bm25f, ScoringModel};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: scores never increase down the list.
    #[test]
    fn prop_rank_is_descending(list in bm25f_list(12)) {
        let model = Bm25f::with_fields(1);
        let ranked = rank(&list, &model).unwrap();
        assert_descending(&ranked);
    }

    /// Property: one entry per key, and it carries that key's best score.
    #[test]
    fn prop_rank_keeps_one_best_per_key(list in bm25f_list(12)) {
        let model = Bm25f::with_fields(1);
        let ranked = rank(&list, &model).unwrap();
        assert_unique_keys(&ranked);

        let mut best: HashMap<&str, f64> = HashMap::new();
        for doc in &list.documents {
            let score = model.evaluate(doc).unwrap();
            let entry = best.entry(doc.key.as_str()).or_insert(score);
            if score > *entry {
                *entry = score;
            }
        }
        prop_assert_eq!(ranked.len(), best.len());
        for entry in &ranked.entries {
            prop_assert_eq!(entry.score, best[entry.document.key.as_str()]);
        }
    }

    /// Property: every ranked document is one of the input documents.
    #[test]
    fn prop_rank_is_subsequence_of_input(list in bm25f_list(12)) {
        let model = Bm25f::with_fields(1);
        let ranked = rank(&list, &model).unwrap();
        for entry in &ranked.entries {
            prop_assert!(list.documents.iter().any(|d| std::ptr::eq(d, entry.document)));
        }
    }

    /// Property: among equal scores, the earlier input position comes first.
    #[test]
    fn prop_ties_keep_input_order(list in bm25f_list(12)) {
        let model = Bm25f::with_fields(1);
        let ranked = rank(&list, &model).unwrap();
        let position = |doc| list.documents.iter().position(|d| std::ptr::eq(d, doc)).unwrap();
        for pair in ranked.entries.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(position(pair[0].document) < position(pair[1].document));
            }
        }
    }
}
