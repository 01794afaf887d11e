// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized discounted cumulative gain on the primary grade.

use super::MetricScorer;
use crate::ranking::RankedList;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ndcg {
    /// Cutoff; 0 scores the whole list.
    k: usize,
}

impl Ndcg {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    fn cutoff(&self, len: usize) -> usize {
        if self.k == 0 {
            len
        } else {
            self.k.min(len)
        }
    }
}

/// `Σ (2^g − 1) / log2(rank + 1)` over the first `cutoff` grades.
fn dcg(grades: impl Iterator<Item = f64>, cutoff: usize) -> f64 {
    grades
        .take(cutoff)
        .enumerate()
        .map(|(i, g)| (2f64.powf(g) - 1.0) / ((i + 2) as f64).log2())
        .sum()
}

impl MetricScorer for Ndcg {
    fn name(&self) -> String {
        if self.k == 0 {
            "NDCG".to_string()
        } else {
            format!("NDCG@{}", self.k)
        }
    }

    fn score(&self, ranked: &RankedList<'_>) -> f64 {
        let cutoff = self.cutoff(ranked.len());
        let mut ideal: Vec<f64> = ranked.documents().map(|d| d.label()).collect();
        ideal.sort_by(|a, b| b.total_cmp(a));

        let ideal_dcg = dcg(ideal.into_iter(), cutoff);
        if ideal_dcg <= 0.0 {
            return 0.0;
        }
        dcg(ranked.documents().map(|d| d.label()), cutoff) / ideal_dcg
    }
}
