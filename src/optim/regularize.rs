// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance of a candidate's field boosts from the anchor's.
//!
//! Only the boost sub-range is compared, and each side is first scaled to unit
//! L1 norm, so the penalty reacts to how the boosts are *distributed* across
//! fields rather than to their overall magnitude.

use std::ops::Range;

/// Euclidean distance between the L1-normalized `range` of both vectors.
///
/// A side whose sub-range sums to zero in absolute value normalizes to all
/// zeros. An empty range is distance 0.
pub fn boost_distance(candidate: &[f64], anchor: &[f64], range: Range<usize>) -> f64 {
    let (Some(a), Some(b)) = (candidate.get(range.clone()), anchor.get(range)) else {
        return 0.0;
    };
    let norm_a = l1_norm(a);
    let norm_b = l1_norm(b);

    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = normalize(x, norm_a) - normalize(y, norm_b);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[inline]
fn l1_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).sum()
}

#[inline]
fn normalize(value: f64, norm: f64) -> f64 {
    if norm > 0.0 {
        value / norm
    } else {
        0.0
    }
}
