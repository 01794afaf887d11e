// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for duplicate-key ranking.
//!
//! Whatever scores the fuzzer produces (NaN, infinities, ties), a ranked list
//! keeps one entry per key, that entry carries the best score seen for the
//! key, and scores never increase down the list.

#![no_main]

use arbitrary::Arbitrary;
use fieldtune::testing::bm25f_doc;
use fieldtune::{rank, Bm25f, QueryList, ScoringModel};
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

#[derive(Debug, Arbitrary)]
struct Candidate {
    key: u8,
    weight: f64,
    tf: u8,
}

fuzz_target!(|candidates: Vec<Candidate>| {
    let docs = candidates
        .iter()
        .map(|c| bm25f_doc(&(c.key % 16).to_string(), 0.0, c.weight, 1.0, f64::from(c.tf)))
        .collect();
    let list = QueryList::new("fuzz", docs);
    let model = Bm25f::with_fields(1);

    let ranked = rank(&list, &model).expect("one-field documents always score");

    let mut best: HashMap<&str, f64> = HashMap::new();
    for doc in &list.documents {
        let score = model.evaluate(doc).expect("one-field documents always score");
        best.entry(doc.key.as_str())
            .and_modify(|s| {
                if *s < score {
                    *s = score
                }
            })
            .or_insert(score);
    }

    assert_eq!(ranked.len(), best.len(), "one entry per distinct key");
    for entry in &ranked.entries {
        let expected = best[entry.document.key.as_str()];
        assert!(
            entry.score.to_bits() == expected.to_bits()
                || (entry.score.is_nan() && expected.is_nan()),
            "key {} kept {} instead of {}",
            entry.document.key,
            entry.score,
            expected
        );
    }
    for pair in ranked.entries.windows(2) {
        let (a, b) = (pair[0].score, pair[1].score);
        assert!(a >= b || b.is_nan(), "{} ranked above {}", a, b);
    }
});
