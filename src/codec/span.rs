// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Span (proximity) layout.
//!
//! ```text
//! [k, f, H(1), ..., H(k), lp(1), ..., lp(f),
//!  n(1,1), s, w, s, w, ...,      <- spans of field 1 for keyword 1
//!  n(2,1), s, w, ...,            <- spans of field 2 for keyword 1
//!  ...
//!  n(f,k), s, w, ...]            <- spans of field f for keyword k
//! ```
//!
//! Keyword is the outer loop, field the inner one. Each cell starts with its
//! span count `n(i, j)` followed by that many `(co-occurrence count, width)`
//! pairs. Because the cells are variable-length there are no fixed offsets
//! past the header: `decode` walks the vector once, records where each cell's
//! pairs live, and fails unless it ends exactly on the last value.

use super::{FeatureCursor, FeatureLayout};
use crate::error::FeatureError;

/// One proximity span: how many query keywords co-occur in it, and how wide it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub count: f64,
    pub width: f64,
}

/// A decoded span feature vector. Accessors take 1-based keyword and field numbers.
#[derive(Debug, Clone)]
pub struct SpanRecord<'a> {
    layout: FeatureLayout,
    weights: &'a [f64],
    length_penalties: &'a [f64],
    /// `cells[(j - 1) * f + (i - 1)]` holds the flattened (s, w) pairs of field i, keyword j.
    cells: Vec<&'a [f64]>,
}

impl<'a> SpanRecord<'a> {
    /// Read only the `[k, f]` header.
    pub fn probe(features: &[f64]) -> Result<FeatureLayout, FeatureError> {
        if features.is_empty() {
            return Err(FeatureError::Empty);
        }
        let mut cursor = FeatureCursor::new(features);
        let keywords = cursor.next_count()?;
        let fields = cursor.next_count()?;
        Ok(FeatureLayout::new(keywords, fields))
    }

    /// Decode the whole vector.
    pub fn decode(features: &'a [f64]) -> Result<Self, FeatureError> {
        if features.is_empty() {
            return Err(FeatureError::Empty);
        }
        let mut cursor = FeatureCursor::new(features);
        let keywords = cursor.next_count()?;
        let fields = cursor.next_count()?;
        let weights = cursor.take(keywords)?;
        let length_penalties = cursor.take(fields)?;

        // Every cell needs at least its count value, so a header that
        // promises more cells than values left is lying.
        let cell_count = keywords
            .checked_mul(fields)
            .filter(|&n| n <= cursor.remaining())
            .ok_or(FeatureError::Truncated {
                slot: cursor.position().saturating_add(keywords.saturating_mul(fields)),
                len: features.len(),
            })?;

        let mut cells = Vec::with_capacity(cell_count);
        for _ in 0..cell_count {
            let spans = cursor.next_count()?;
            let pairs = spans.checked_mul(2).ok_or(FeatureError::Truncated {
                slot: usize::MAX,
                len: features.len(),
            })?;
            cells.push(cursor.take(pairs)?);
        }
        cursor.finish()?;

        Ok(Self {
            layout: FeatureLayout::new(keywords, fields),
            weights,
            length_penalties,
            cells,
        })
    }

    #[inline]
    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }

    #[inline]
    pub fn keywords(&self) -> usize {
        self.layout.keywords
    }

    #[inline]
    pub fn fields(&self) -> usize {
        self.layout.fields
    }

    /// H(j), the global weight of keyword `j`.
    #[inline]
    pub fn weight(&self, keyword: usize) -> f64 {
        nth(self.weights, keyword).copied().unwrap_or(0.0)
    }

    /// lp(i), the length penalty of field `i`.
    #[inline]
    pub fn length_penalty(&self, field: usize) -> f64 {
        nth(self.length_penalties, field).copied().unwrap_or(0.0)
    }

    /// n(i, j), the number of spans of field `i` containing keyword `j`.
    #[inline]
    pub fn span_count(&self, field: usize, keyword: usize) -> usize {
        self.cell(field, keyword).len() / 2
    }

    /// Spans of field `i` containing keyword `j`, in file order.
    pub fn spans(&self, field: usize, keyword: usize) -> impl Iterator<Item = Span> + 'a {
        self.cell(field, keyword)
            .chunks_exact(2)
            .map(|pair| Span {
                count: pair[0],
                width: pair[1],
            })
    }

    /// Empty outside `1..=f` by `1..=k`.
    fn cell(&self, field: usize, keyword: usize) -> &'a [f64] {
        if !(1..=self.layout.fields).contains(&field)
            || !(1..=self.layout.keywords).contains(&keyword)
        {
            return &[];
        }
        self.cells
            .get((keyword - 1) * self.layout.fields + (field - 1))
            .copied()
            .unwrap_or(&[])
    }
}

/// `values[number - 1]` for a 1-based `number`.
#[inline]
fn nth(values: &[f64], number: usize) -> Option<&f64> {
    number.checked_sub(1).and_then(|i| values.get(i))
}
