// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-key best-occurrence tracking for ranked lists.
//!
//! Training files often contain the same document more than once for a query
//! (say, once per matching passage). A ranked list should show it at most
//! once, at its best score. `KeyTracker` is the single place that decides
//! which occurrence survives.
//!
//! **Invariant**: at most one position per grouping key is live, and it is
//! the one with the highest score seen so far for that key. Ties keep the
//! earlier position.
//!
//! **Verified by**:
//! - `prop_rank_keeps_one_best_per_key` (tests/property/ranking_props.rs)
//! - `contracts::check_unique_keys` in debug builds

use std::collections::HashMap;

/// Outcome of offering a scored position to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// First time this key was seen; the position is live.
    New,
    /// Beat the previous best; the returned position must be excluded.
    Replaces(usize),
    /// Didn't beat the current best; this position is excluded.
    Rejected,
}

/// Remembers the best score and position for each grouping key.
#[derive(Debug, Default)]
pub struct KeyTracker<'a> {
    best: HashMap<&'a str, (f64, usize)>,
}

impl<'a> KeyTracker<'a> {
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            best: HashMap::with_capacity(capacity),
        }
    }

    /// Offer `position` of `key` with `score`. Only a strictly higher score
    /// displaces the current best.
    pub fn offer(&mut self, key: &'a str, position: usize, score: f64) -> Offer {
        match self.best.get_mut(key) {
            None => {
                self.best.insert(key, (score, position));
                Offer::New
            }
            Some(best) if best.0 < score => {
                let previous = best.1;
                *best = (score, position);
                Offer::Replaces(previous)
            }
            Some(_) => Offer::Rejected,
        }
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
