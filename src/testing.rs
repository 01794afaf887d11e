//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical builders for feature vectors so tests don't spell
//! out slot layouts by hand.

#![doc(hidden)]

use crate::codec::Span;
use crate::types::{Document, QueryList};

/// Encode a BM25F vector.
///
/// `tf[i][j]` is the frequency of keyword `i` in field `j`. Every row must
/// have `length_penalties.len()` entries.
pub fn bm25f_features(weights: &[f64], length_penalties: &[f64], tf: &[Vec<f64>]) -> Vec<f64> {
    let k = weights.len();
    let mut features = Vec::with_capacity(1 + k + length_penalties.len() * (k + 1));
    features.push(k as f64);
    features.extend_from_slice(weights);
    for (j, &lp) in length_penalties.iter().enumerate() {
        features.push(lp);
        features.extend(tf.iter().map(|row| row[j]));
    }
    features
}

/// Encode a span vector.
///
/// `spans[j][i]` lists the spans of keyword `j` in field `i`.
pub fn span_features(
    weights: &[f64],
    length_penalties: &[f64],
    spans: &[Vec<Vec<Span>>],
) -> Vec<f64> {
    let mut features = vec![weights.len() as f64, length_penalties.len() as f64];
    features.extend_from_slice(weights);
    features.extend_from_slice(length_penalties);
    for per_field in spans {
        for cell in per_field {
            features.push(cell.len() as f64);
            for span in cell {
                features.push(span.count);
                features.push(span.width);
            }
        }
    }
    features
}

/// A one-keyword, one-field BM25F document.
pub fn bm25f_doc(key: &str, label: f64, weight: f64, length_penalty: f64, tf: f64) -> Document {
    Document::new(
        bm25f_features(&[weight], &[length_penalty], &[vec![tf]]),
        label,
        key,
    )
}

/// A one-keyword, one-field span document with a single span.
pub fn span_doc(key: &str, label: f64, count: f64, width: f64) -> Document {
    Document::new(
        span_features(&[1.0], &[1.0], &[vec![vec![Span { count, width }]]]),
        label,
        key,
    )
}

/// A query list of one-keyword, one-field BM25F documents, one per
/// `(label, tf)` pair, keyed by position.
pub fn make_list(id: &str, docs: &[(f64, f64)]) -> QueryList {
    QueryList::new(
        id,
        docs.iter()
            .enumerate()
            .map(|(i, &(label, tf))| bm25f_doc(&i.to_string(), label, 1.0, 1.0, tf))
            .collect(),
    )
}

/// A document carrying only per-intent labels, for metric tests.
pub fn labeled_doc(key: &str, labels: &[f64]) -> Document {
    Document::with_labels(vec![0.0], labels.to_vec(), key)
}
