// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-field (BM25F) layout.
//!
//! ```text
//! [k,     H(1),     H(2),     ..., H(k),
//!  lp(1), tf(1, 1), tf(2, 1), ..., tf(k, 1),
//!  lp(2), tf(1, 2), tf(2, 2), ..., tf(k, 2),
//!  ...
//!  lp(f), tf(1, f), tf(2, f), ..., tf(k, f)]
//! ```
//!
//! Numbered from 1 the way training files number features, H(i) is feature
//! `i + 1`, lp(j) is feature `(k + 1)j + 1` and tf(i, j) is feature
//! `(k + 1)j + i + 1`. The vector is exactly `(k + 1)(f + 1)` long, which is
//! also how `f` is recovered when nobody has told us the field count.

use super::{FeatureCursor, FeatureLayout};
use crate::error::FeatureError;

/// A decoded multi-field feature vector. Accessors take 1-based keyword and
/// field numbers.
#[derive(Debug, Clone, Copy)]
pub struct MultiFieldRecord<'a> {
    layout: FeatureLayout,
    weights: &'a [f64],
    blocks: &'a [f64],
}

/// One field's slice of a multi-field record.
#[derive(Debug, Clone, Copy)]
pub struct FieldBlock<'a> {
    pub length_penalty: f64,
    /// `term_frequencies[i - 1]` is tf(i, j) for this field j.
    pub term_frequencies: &'a [f64],
}

impl<'a> MultiFieldRecord<'a> {
    /// Decode a vector that must hold exactly `fields` field blocks.
    pub fn decode(features: &'a [f64], fields: usize) -> Result<Self, FeatureError> {
        let mut cursor = FeatureCursor::new(features);
        let keywords = read_keywords(&mut cursor)?;
        let weights = cursor.take(keywords)?;

        let block_len = block_len(keywords)?;
        let expected = fields
            .checked_mul(block_len)
            .filter(|&n| n == cursor.remaining())
            .ok_or(FeatureError::LengthMismatch {
                keywords,
                fields,
                expected: fields.saturating_mul(block_len).saturating_add(block_len),
                actual: features.len(),
            })?;
        let blocks = cursor.take(expected)?;
        cursor.finish()?;

        Ok(Self {
            layout: FeatureLayout::new(keywords, fields),
            weights,
            blocks,
        })
    }

    /// Decode a vector whose field count is implied by its length.
    pub fn decode_any(features: &'a [f64]) -> Result<Self, FeatureError> {
        Self::decode(features, Self::probe(features)?.fields)
    }

    /// Read `k` and derive `f = len / (k + 1) - 1` without decoding the body.
    pub fn probe(features: &[f64]) -> Result<FeatureLayout, FeatureError> {
        let mut cursor = FeatureCursor::new(features);
        let keywords = read_keywords(&mut cursor)?;
        let block_len = block_len(keywords)?;
        let fields = (features.len() / block_len).saturating_sub(1);

        if features.len() % block_len != 0 || features.len() < block_len {
            return Err(FeatureError::LengthMismatch {
                keywords,
                fields,
                expected: (fields + 1) * block_len,
                actual: features.len(),
            });
        }
        Ok(FeatureLayout::new(keywords, fields))
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

    /// H(i), the global weight of keyword `i`. 0 outside `1..=k`.
    #[inline]
    pub fn weight(&self, keyword: usize) -> f64 {
        keyword
            .checked_sub(1)
            .and_then(|i| self.weights.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// lp(j), the length penalty of field `j`.
    #[inline]
    pub fn length_penalty(&self, field: usize) -> f64 {
        self.block_start(field).map_or(0.0, |start| self.blocks[start])
    }

    /// tf(i, j), the frequency of keyword `i` in field `j`.
    #[inline]
    pub fn term_frequency(&self, keyword: usize, field: usize) -> f64 {
        self.block_start(field)
            .map_or(0.0, |start| self.blocks[start + keyword])
    }

    /// The whole block of field `j`, `None` outside `1..=f`.
    pub fn field(&self, field: usize) -> Option<FieldBlock<'a>> {
        let start = self.block_start(field)?;
        let block = self.blocks.get(start..start + 1 + self.layout.keywords)?;
        Some(FieldBlock {
            length_penalty: block[0],
            term_frequencies: &block[1..],
        })
    }

    fn block_start(&self, field: usize) -> Option<usize> {
        (1..=self.layout.fields)
            .contains(&field)
            .then(|| (field - 1) * (self.layout.keywords + 1))
    }
}

fn read_keywords(cursor: &mut FeatureCursor<'_>) -> Result<usize, FeatureError> {
    if cursor.remaining() == 0 {
        return Err(FeatureError::Empty);
    }
    cursor.next_count()
}

/// `k + 1`: one length penalty plus `k` term frequencies per field.
fn block_len(keywords: usize) -> Result<usize, FeatureError> {
    keywords.checked_add(1).ok_or(FeatureError::InvalidCount {
        slot: 1,
        value: keywords as f64,
    })
}
