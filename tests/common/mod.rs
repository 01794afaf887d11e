//! Shared test utilities for integration and property tests.
//!
//! Canonical document builders live in `fieldtune::testing`; this module adds
//! proptest strategies and assertion helpers on top.

#![allow(dead_code)]

use fieldtune::testing::{bm25f_features, span_features};
use fieldtune::{Document, QueryList, RankedList, Span};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// A well-formed BM25F vector with `k` keywords and `f` fields.
pub fn bm25f_vector(k: usize, f: usize) -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(0.0f64..5.0, k),
        prop::collection::vec(0.1f64..3.0, f),
        prop::collection::vec(prop::collection::vec(0.0f64..20.0, f), k),
    )
        .prop_map(|(weights, lps, tf)| bm25f_features(&weights, &lps, &tf))
}

/// A well-formed span vector with `k` keywords and `f` fields.
pub fn span_vector(k: usize, f: usize) -> impl Strategy<Value = Vec<f64>> {
    let span = (1u32..4, 1u32..30).prop_map(|(count, width)| Span {
        count: f64::from(count),
        width: f64::from(width),
    });
    let cell = prop::collection::vec(span, 0..3);
    (
        prop::collection::vec(0.0f64..5.0, k),
        prop::collection::vec(0.1f64..3.0, f),
        prop::collection::vec(prop::collection::vec(cell, f), k),
    )
        .prop_map(|(weights, lps, spans)| span_features(&weights, &lps, &spans))
}

/// A one-field BM25F query list with keys drawn from a small alphabet, so
/// duplicates are common.
pub fn bm25f_list(max_docs: usize) -> impl Strategy<Value = QueryList> {
    prop::collection::vec(
        (prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0u8..3, bm25f_vector(2, 1)),
        0..max_docs,
    )
    .prop_map(|docs| {
        QueryList::new(
            "q",
            docs.into_iter()
                .map(|(key, grade, features)| Document::new(features, f64::from(grade), key))
                .collect(),
        )
    })
}

/// A two-keyword, two-field span query list with distinct keys.
pub fn span_list(max_docs: usize) -> impl Strategy<Value = QueryList> {
    prop::collection::vec((0u8..3, span_vector(2, 2)), 0..max_docs).prop_map(|docs| {
        QueryList::new(
            "q",
            docs.into_iter()
                .enumerate()
                .map(|(i, (grade, features))| {
                    Document::new(features, f64::from(grade), i.to_string())
                })
                .collect(),
        )
    })
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn assert_descending(ranked: &RankedList<'_>) {
    for pair in ranked.entries.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

pub fn assert_unique_keys(ranked: &RankedList<'_>) {
    let mut seen = HashSet::new();
    for entry in &ranked.entries {
        assert!(seen.insert(&entry.document.key), "duplicate key {}", entry.document.key);
    }
}

/// Training data where the relevant document only wins once k1 drops below
/// about 1.02 or the single boost rises above about 1.18.
pub const SATURATION_LETOR: &str = "\
1 qid:0 1:2 2:1.0 3:1.0 4:1.0 5:1 6:1 #did=0
0 qid:0 1:2 2:1.0 3:1.0 4:1.0 5:0 6:100 #did=1
";
