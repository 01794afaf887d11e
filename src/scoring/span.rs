// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Span proximity model, extended to multiple fields.
//!
//! Instead of counting how often a keyword occurs, look at the spans it
//! occurs in: a span where many query keywords co-occur within a short width
//! is strong evidence, a wide span with one keyword is weak. Each span
//! contributes `s^z / w^x`, where `s` is its co-occurrence count and `w` its
//! width; the rest is the same saturating sum as BM25F.
//!
//! ```text
//! keyword(j) = Σ_i boost(i) · (Σ_spans s^z(i) / w^x(i)) / (1 − b(i) + b(i) · lp(i))
//! score      = Σ_j keyword(j) / (keyword(j) + k1) · H(j)
//! ```
//!
//! Parameters: `[k1, z(1..f), x(1..f), b(1..f), boost(1..f)]`, so z(i) is slot
//! `i`, x(i) is `f + i`, b(i) is `2f + i` and boost(i) is `3f + i`.
//!
//! Reference: R. Song, M. J. Taylor, J.-R. Wen, H.-W. Hon, and Y. Yu. Viewing
//! term proximity from a different perspective. ECIR 2008, pp. 346–357.

use super::{param_or, ParamKind, ScoringModel};
use crate::codec::SpanRecord;
use crate::error::{Error, FeatureError};
use crate::types::{Document, ParameterVector};
use std::ops::Range;

pub const DEFAULT_K1: f64 = 0.4;
pub const DEFAULT_Z: f64 = 0.55;
pub const DEFAULT_X: f64 = 0.25;
pub const DEFAULT_B: f64 = 0.3;
pub const DEFAULT_BOOST: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct SpanModel {
    keywords: usize,
    fields: usize,
    params: ParameterVector,
}

impl Default for SpanModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanModel {
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
        let mut values = Vec::with_capacity(1 + 4 * fields);
        values.push(DEFAULT_K1);
        for default in [DEFAULT_Z, DEFAULT_X, DEFAULT_B, DEFAULT_BOOST] {
            values.extend(std::iter::repeat(default).take(fields));
        }
        ParameterVector::new(values)
    }

    /// Block number (0 = k1, 1 = z, 2 = x, 3 = b, 4 = boost) and 1-based field of a slot.
    fn locate(&self, index: usize) -> (usize, usize) {
        if index == 0 || self.fields == 0 {
            return (0, 0);
        }
        let block = ((index - 1) / self.fields + 1).min(4);
        (block, index - (block - 1) * self.fields)
    }
}

impl ScoringModel for SpanModel {
    fn name(&self) -> &'static str {
        "SpanF"
    }

    fn initialize(&mut self, sample: Option<&Document>) -> Result<(), FeatureError> {
        let layout = match sample {
            Some(doc) => SpanRecord::probe(&doc.features)?,
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
        match self.locate(index).0 {
            0 => ParamKind::Saturation,
            1 => ParamKind::SpanCountExponent,
            2 => ParamKind::SpanWidthExponent,
            3 => ParamKind::LengthNormalization,
            _ => ParamKind::Boost,
        }
    }

    fn parameter_name(&self, index: usize) -> String {
        let (block, field) = self.locate(index);
        match block {
            0 => "k1".to_string(),
            1 => format!("z({})", field),
            2 => format!("x({})", field),
            3 => format!("b({})", field),
            _ => format!("boost({})", field),
        }
    }

    fn boost_range(&self) -> Range<usize> {
        1 + 3 * self.fields..1 + 4 * self.fields
    }

    fn score_with(&self, params: &[f64], doc: &Document) -> Result<f64, FeatureError> {
        let record = SpanRecord::decode(&doc.features)?;
        let f = record.fields();
        if self.fields > 0 && f != self.fields {
            return Err(FeatureError::FieldCountMismatch {
                expected: self.fields,
                found: f,
            });
        }

        let k1 = param_or(params, 0, DEFAULT_K1);
        let mut score = 0.0;
        for j in 1..=record.keywords() {
            let mut keyword_score = 0.0;
            for i in 1..=f {
                let z = param_or(params, i, DEFAULT_Z);
                let x = param_or(params, f + i, DEFAULT_X);
                let b = param_or(params, 2 * f + i, DEFAULT_B);
                let boost = param_or(params, 3 * f + i, DEFAULT_BOOST);

                let denom = 1.0 - b + b * record.length_penalty(i);
                if denom <= 0.0 {
                    continue;
                }
                let field_score: f64 = record
                    .spans(i, j)
                    .map(|span| span.count.powf(z) / span.width.powf(x))
                    .sum();
                keyword_score += boost * field_score / denom;
            }
            score += keyword_score / (keyword_score + k1) * record.weight(j);
        }
        Ok(score)
    }
}
