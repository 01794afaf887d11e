// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring models: how a feature vector becomes a relevance score.
//!
//! Both families share one shape. Per keyword, gather evidence across fields
//! (term frequency for BM25F, proximity spans for the span model), normalize
//! each field by its length penalty, weight it by a per-field boost, then push
//! the total through the saturation `x / (x + k1)` and scale by the keyword's
//! global weight. What differs is the evidence and therefore the parameters.
//!
//! The optimizer only sees the `ScoringModel` trait: a parameter vector, a way
//! to score a document under *any* candidate vector, names, and bounds. It
//! never knows which family it is tuning.

pub mod bm25f;
pub mod span;

pub use bm25f::Bm25f;
pub use span::SpanModel;

use crate::error::{Error, FeatureError};
use crate::types::{Document, NamedParameter, ParameterVector};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// What a parameter slot controls, and therefore which values it may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `k1`, the saturation constant. Strictly positive.
    Saturation,
    /// `b(j)`, length normalization strength. Within `[0, 1]`.
    LengthNormalization,
    /// `boost(j)`, per-field weight. Unconstrained.
    Boost,
    /// `z(i)`, exponent on a span's co-occurrence count. Unconstrained.
    SpanCountExponent,
    /// `x(i)`, exponent on a span's width. Unconstrained.
    SpanWidthExponent,
}

impl ParamKind {
    /// Whether `value` is inside this kind's domain.
    #[inline]
    pub fn admits(self, value: f64) -> bool {
        match self {
            ParamKind::Saturation => value > 0.0,
            ParamKind::LengthNormalization => (0.0..=1.0).contains(&value),
            ParamKind::Boost | ParamKind::SpanCountExponent | ParamKind::SpanWidthExponent => {
                !value.is_nan()
            }
        }
    }
}

/// A parametric ranking formula the optimizer can tune.
///
/// Implementations own their current parameters but must also be able to
/// score with a vector handed to them, so the line search can try a candidate
/// without mutating the model.
pub trait ScoringModel: Send + Sync {
    /// Family name, e.g. `"BM25F"`.
    fn name(&self) -> &'static str;

    /// Size the parameter vector from a sample document and reset it to the
    /// defaults. `None` means no training data: zero fields, only `k1`.
    fn initialize(&mut self, sample: Option<&Document>) -> Result<(), FeatureError>;

    /// Field count the parameters are sized for.
    fn field_count(&self) -> usize;

    /// Keyword count of the sample seen by `initialize` (0 without one).
    fn keyword_count(&self) -> usize;

    /// Fresh vector of default values for the current field count.
    fn default_parameters(&self) -> ParameterVector;

    fn parameters(&self) -> &ParameterVector;

    /// Replace the parameters. The length must match.
    fn set_parameters(&mut self, params: ParameterVector) -> Result<(), Error>;

    fn parameter_kind(&self, index: usize) -> ParamKind;

    fn parameter_name(&self, index: usize) -> String;

    /// Slots holding per-field boosts, the sub-range regularization looks at.
    fn boost_range(&self) -> Range<usize>;

    /// Score a document under `params` instead of the model's own parameters.
    fn score_with(&self, params: &[f64], doc: &Document) -> Result<f64, FeatureError>;

    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    fn is_valid(&self, index: usize, value: f64) -> bool {
        self.parameter_kind(index).admits(value)
    }

    /// Score a document under the model's current parameters.
    fn evaluate(&self, doc: &Document) -> Result<f64, FeatureError> {
        self.score_with(self.parameters(), doc)
    }

    fn named_parameters(&self) -> Vec<NamedParameter> {
        self.parameters()
            .iter()
            .enumerate()
            .map(|(index, &value)| NamedParameter {
                name: self.parameter_name(index),
                value,
            })
            .collect()
    }
}

/// `params[index]`, or `default` when the vector was sized for fewer fields.
#[inline]
pub(crate) fn param_or(params: &[f64], index: usize, default: f64) -> f64 {
    params.get(index).copied().unwrap_or(default)
}

/// Which model family to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    Bm25f,
    Span,
}

impl ModelKind {
    pub fn build(self) -> Box<dyn ScoringModel> {
        match self {
            ModelKind::Bm25f => Box::new(Bm25f::new()),
            ModelKind::Span => Box::new(SpanModel::new()),
        }
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bm25f" => Ok(ModelKind::Bm25f),
            "span" | "spanf" => Ok(ModelKind::Span),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Bm25f => write!(f, "bm25f"),
            ModelKind::Span => write!(f, "span"),
        }
    }
}
