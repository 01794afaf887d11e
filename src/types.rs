// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of training data and trained models.
//!
//! A `Document` is a flat feature vector plus relevance grades plus a grouping
//! key. A `QueryList` is the documents judged for one query. A
//! `ParameterVector` is what the optimizer moves around, and a `TrainedModel`
//! is what comes out the other end.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **QueryList**: every document shares one feature layout (same number of
//!   fields). The codec rejects a document that disagrees with the model.
//!
//! - **ParameterVector**: its length is fixed by the field count seen when the
//!   model was initialized. Handing a model a vector of another length is an
//!   error, not a truncation.
//!
//! - **Document**: immutable during training. Scores are recomputed per
//!   ranking pass and never written back.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

// =============================================================================
// TRAINING DATA
// =============================================================================

/// One candidate document for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Dense feature values. Feature `n` in the training file is `features[n - 1]`.
    pub features: Vec<f64>,
    /// Relevance grades. `labels[0]` is the primary grade, the rest are
    /// per-intent grades. Never empty.
    pub labels: Vec<f64>,
    /// Grouping key used to drop repeats of the same document within a ranked
    /// list. Not unique across lists.
    pub key: String,
}

impl Document {
    /// Create a document with a single relevance grade.
    pub fn new(features: Vec<f64>, label: f64, key: impl Into<String>) -> Self {
        Self {
            features,
            labels: vec![label],
            key: key.into(),
        }
    }

    /// Create a document with per-intent grades. An empty grade list becomes `[0.0]`.
    pub fn with_labels(features: Vec<f64>, labels: Vec<f64>, key: impl Into<String>) -> Self {
        let labels = if labels.is_empty() { vec![0.0] } else { labels };
        Self {
            features,
            labels,
            key: key.into(),
        }
    }

    /// Primary relevance grade.
    #[inline]
    pub fn label(&self) -> f64 {
        self.labels.first().copied().unwrap_or(0.0)
    }

    /// Grade for intent `intent`, or 0 when the document carries fewer intents.
    #[inline]
    pub fn intent_label(&self, intent: usize) -> f64 {
        self.labels.get(intent).copied().unwrap_or(0.0)
    }

    /// Feature by its 1-based number, as written in training files.
    #[inline]
    pub fn feature(&self, number: usize) -> Option<f64> {
        number
            .checked_sub(1)
            .and_then(|i| self.features.get(i))
            .copied()
    }
}

/// The documents judged for one query, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryList {
    pub id: String,
    pub documents: Vec<Document>,
}

impl QueryList {
    pub fn new(id: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            id: id.into(),
            documents,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// First document, used as the layout sample when initializing a model.
    #[inline]
    pub fn first(&self) -> Option<&Document> {
        self.documents.first()
    }
}

/// First document of the first non-empty list, the layout sample for a
/// training set. Empty lists carry no layout and are skipped.
pub fn layout_sample(lists: &[QueryList]) -> Option<&Document> {
    lists.iter().find_map(QueryList::first)
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Ordered model parameters. Derefs to `[f64]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterVector(Vec<f64>);

impl ParameterVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Copy of this vector with one slot replaced, `None` if `index` is out of range.
    pub fn with_value(&self, index: usize, value: f64) -> Option<Self> {
        let mut next = self.clone();
        *next.0.get_mut(index)? = value;
        Some(next)
    }
}

impl Deref for ParameterVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl DerefMut for ParameterVector {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl From<Vec<f64>> for ParameterVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// A parameter with its display name, for reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParameter {
    pub name: String,
    pub value: f64,
}

// =============================================================================
// TRAINED MODEL
// =============================================================================

/// The result of training: final parameters plus the layout they belong to.
///
/// Built once by the optimizer's final selection step. The crate has no loader
/// for it; `Serialize` exists so reports can be written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Model family, e.g. `"BM25F"`.
    pub model: String,
    /// Metric the parameters were tuned for, e.g. `"MAPIA"`.
    pub metric: String,
    /// Keyword count of the layout sample (0 when there was no sample).
    pub keywords: usize,
    /// Field count the parameter vector was sized for.
    pub fields: usize,
    pub parameters: ParameterVector,
    pub named_parameters: Vec<NamedParameter>,
    /// Unpenalized metric on the training lists with the final parameters.
    pub training_score: f64,
    /// Unpenalized metric on the validation lists, when any were supplied.
    pub validation_score: Option<f64>,
}
