//! Runtime contracts for ranking and optimization.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure** close to the code that broke the property
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_ranked_list`        | scores non-increasing, NaN only at the tail      |
//! | `check_unique_keys`        | a grouping key appears at most once per list     |
//! | `check_parameters_valid`   | every slot is inside its kind's domain           |
//! | `check_no_regression`      | a sweep never ends below the score it started at |
//!
//! # Usage
//!
//! ```ignore
//! use fieldtune::contracts::*;
//!
//! // In debug builds, this panics if the list is out of order
//! check_ranked_list(&ranked);
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default parameter vectors must themselves be valid, or a fresh model
/// could never be tuned.
const _: () = {
    use crate::scoring::{bm25f, span};

    assert!(bm25f::DEFAULT_K1 > 0.0);
    assert!(bm25f::DEFAULT_B >= 0.0 && bm25f::DEFAULT_B <= 1.0);
    assert!(span::DEFAULT_K1 > 0.0);
    assert!(span::DEFAULT_B >= 0.0 && span::DEFAULT_B <= 1.0);
};

use crate::ranking::RankedList;
use crate::scoring::ScoringModel;
use std::collections::HashSet;

// ============================================================================
// RANKED LIST CONTRACTS
// ============================================================================

/// Check ordering and key uniqueness of a ranked list.
///
/// # Panics (debug builds only)
/// Panics if a comparable score follows a smaller one, a NaN is followed by a
/// number, or a key repeats.
#[inline]
pub fn check_ranked_list(ranked: &RankedList<'_>) {
    for (i, pair) in ranked.entries.windows(2).enumerate() {
        let (a, b) = (pair[0].score, pair[1].score);
        debug_assert!(
            !(a.is_nan() && !b.is_nan()),
            "Contract violation: ranked[{}] is NaN but ranked[{}] = {}",
            i,
            i + 1,
            b
        );
        debug_assert!(
            a.is_nan() || b.is_nan() || a >= b,
            "Contract violation: ranked[{}] = {} < ranked[{}] = {}",
            i,
            a,
            i + 1,
            b
        );
    }
    check_unique_keys(ranked);
}

/// Check that no grouping key appears twice.
#[inline]
pub fn check_unique_keys(ranked: &RankedList<'_>) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(ranked.len());
        for entry in &ranked.entries {
            debug_assert!(
                seen.insert(entry.document.key.as_str()),
                "Contract violation: key {:?} appears twice in list {:?}",
                entry.document.key,
                ranked.query_id
            );
        }
    }
}

// ============================================================================
// OPTIMIZER CONTRACTS
// ============================================================================

/// Check that every parameter admitted by the line search is in its domain.
#[inline]
pub fn check_parameters_valid<M: ScoringModel + ?Sized>(model: &M, params: &[f64]) {
    for (index, &value) in params.iter().enumerate() {
        debug_assert!(
            model.is_valid(index, value),
            "Contract violation: {} = {} is outside its domain",
            model.parameter_name(index),
            value
        );
    }
}

/// Check that a sweep did not lose ground.
#[inline]
pub fn check_no_regression(start: f64, end: f64) {
    debug_assert!(
        end >= start || start.is_nan(),
        "Contract violation: sweep ended at {} below its start {}",
        end,
        start
    );
}
