// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounds-checked forward reader over a feature vector.

use crate::error::FeatureError;

/// Reads a feature vector front to back. Every read is checked against the
/// vector length, and errors report 1-based feature numbers.
#[derive(Debug, Clone)]
pub struct FeatureCursor<'a> {
    values: &'a [f64],
    pos: usize,
}

impl<'a> FeatureCursor<'a> {
    pub fn new(values: &'a [f64]) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of values consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of values not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.pos
    }

    /// Read one value.
    pub fn next_value(&mut self) -> Result<f64, FeatureError> {
        let value = *self
            .values
            .get(self.pos)
            .ok_or(FeatureError::Truncated {
                slot: self.pos + 1,
                len: self.values.len(),
            })?;
        self.pos += 1;
        Ok(value)
    }

    /// Read one value that must be a non-negative whole number.
    pub fn next_count(&mut self) -> Result<usize, FeatureError> {
        let slot = self.pos + 1;
        let value = self.next_value()?;
        to_count(slot, value)
    }

    /// Borrow the next `n` values as a slice.
    pub fn take(&mut self, n: usize) -> Result<&'a [f64], FeatureError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.values.len())
            .ok_or(FeatureError::Truncated {
                slot: self.pos.saturating_add(n),
                len: self.values.len(),
            })?;
        let slice = &self.values[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Succeeds only if every value was consumed.
    pub fn finish(self) -> Result<(), FeatureError> {
        if self.pos == self.values.len() {
            Ok(())
        } else {
            Err(FeatureError::TrailingValues {
                consumed: self.pos,
                len: self.values.len(),
            })
        }
    }
}

/// Interpret a feature value as a count. `slot` is 1-based, for the error.
///
/// `usize::MAX as f64` rounds up to 2^64, so the upper bound is exclusive.
pub fn to_count(slot: usize, value: f64) -> Result<usize, FeatureError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < usize::MAX as f64 {
        Ok(value as usize)
    } else {
        Err(FeatureError::InvalidCount { slot, value })
    }
}
