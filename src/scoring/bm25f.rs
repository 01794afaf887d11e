// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25F: per-keyword saturation over boost-weighted, length-normalized term
//! frequencies summed across fields.
//!
//! ```text
//! w(i)  = Σ_j boost(j) · tf(i, j) / (1 − b(j) + b(j) · lp(j))
//! score = Σ_i w(i) / (w(i) + k1) · H(i)
//! ```
//!
//! Parameters are laid out as `[k1, b(1)..b(f), boost(1)..boost(f)]`: b(j) is
//! slot `j` and boost(j) is slot `f + j`.
//!
//! A field whose normalizer `1 − b + b · lp` is not positive contributes
//! nothing. Length penalties can legitimately be zero or negative for odd
//! documents, and a negative denominator would flip the sign of the evidence.

use super::{param_or, ParamKind, ScoringModel};
use crate::codec::MultiFieldRecord;
use crate::error::{Error, FeatureError};
use crate::types::{Document, ParameterVector};
use std::ops::Range;

pub const DEFAULT_K1: f64 = 1.2;
pub const DEFAULT_B: f64 = 0.75;
pub const DEFAULT_BOOST: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Bm25f {
    keywords: usize,
    fields: usize,
    params: ParameterVector,
}

impl Default for Bm25f {
    fn default() -> Self {
        Self::new()
    }
}

impl Bm25f {
    /// An uninitialized model: zero fields, `[k1]` only.
    pub fn new() -> Self {
        Self::with_fields(0)
    }

    /// A model sized for `fields` fields, with default parameters.
    pub fn with_fields(fields: usize) -> Self {
        Self {
            keywords: 0,
            fields,
            params: Self::defaults_for(fields),
        }
    }

    fn defaults_for(fields: usize) -> ParameterVector {
        let mut values = Vec::with_capacity(1 + 2 * fields);
        values.push(DEFAULT_K1);
        values.extend(std::iter::repeat(DEFAULT_B).take(fields));
        values.extend(std::iter::repeat(DEFAULT_BOOST).take(fields));
        ParameterVector::new(values)
    }
}

impl ScoringModel for Bm25f {
    fn name(&self) -> &'static str {
        "BM25F"
    }

    fn initialize(&mut self, sample: Option<&Document>) -> Result<(), FeatureError> {
        let layout = match sample {
            Some(doc) => MultiFieldRecord::probe(&doc.features)?,
            None => Default::default(),
        };
        self.keywords = layout.keywords;
        self.fields = layout.fields;
        self.params = Self::defaults_for(layout.fields);
        Ok(())
    }

    fn field_count(&self) -> usize {
        self.fields
    }

    fn keyword_count(&self) -> usize {
        self.keywords
    }

    fn default_parameters(&self) -> ParameterVector {
        Self::defaults_for(self.fields)
    }

    fn parameters(&self) -> &ParameterVector {
        &self.params
    }

    fn set_parameters(&mut self, params: ParameterVector) -> Result<(), Error> {
        if params.len() != self.params.len() {
            return Err(Error::ParameterCount {
                expected: self.params.len(),
                found: params.len(),
            });
        }
        self.params = params;
        Ok(())
    }

    fn parameter_kind(&self, index: usize) -> ParamKind {
        if index == 0 {
            ParamKind::Saturation
        } else if index <= self.fields {
            ParamKind::LengthNormalization
        } else {
            ParamKind::Boost
        }
    }

    fn parameter_name(&self, index: usize) -> String {
        if index == 0 {
            "k1".to_string()
        } else if index <= self.fields {
            format!("b({})", index)
        } else {
            format!("boost({})", index - self.fields)
        }
    }

    fn boost_range(&self) -> Range<usize> {
        1 + self.fields..1 + 2 * self.fields
    }

    fn score_with(&self, params: &[f64], doc: &Document) -> Result<f64, FeatureError> {
        let layout = MultiFieldRecord::probe(&doc.features)?;
        if self.fields > 0 && layout.fields != self.fields {
            return Err(FeatureError::FieldCountMismatch {
                expected: self.fields,
                found: layout.fields,
            });
        }
        let record = MultiFieldRecord::decode(&doc.features, layout.fields)?;
        let f = record.fields();

        let k1 = param_or(params, 0, DEFAULT_K1);
        let mut score = 0.0;
        for i in 1..=record.keywords() {
            let mut w = 0.0;
            for j in 1..=f {
                let b = param_or(params, j, DEFAULT_B);
                let boost = param_or(params, f + j, DEFAULT_BOOST);
                let denom = 1.0 - b + b * record.length_penalty(j);
                if denom > 0.0 {
                    w += boost * record.term_frequency(i, j) / denom;
                }
            }
            score += w / (w + k1) * record.weight(i);
        }
        Ok(score)
    }
}
