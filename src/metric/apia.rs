// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Intent-aware mean average precision (MAPIA).
//!
//! Each document carries one grade per query intent. For every intent, take
//! the average precision over the documents relevant to it (grade > 0), then
//! average across intents. An intent nobody is relevant to contributes 0, so a
//! query with a dead intent can't reach 1.0.

use super::MetricScorer;
use crate::ranking::RankedList;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntentAwareAp;

impl IntentAwareAp {
    fn average_precision(ranked: &RankedList<'_>, intent: usize) -> f64 {
        let mut relevant = 0usize;
        let mut precision_sum = 0.0;
        for (position, doc) in ranked.documents().enumerate() {
            if doc.intent_label(intent) > 0.0 {
                relevant += 1;
                precision_sum += relevant as f64 / (position + 1) as f64;
            }
        }
        if relevant == 0 {
            0.0
        } else {
            precision_sum / relevant as f64
        }
    }
}

impl MetricScorer for IntentAwareAp {
    fn name(&self) -> String {
        "MAPIA".to_string()
    }

    fn score(&self, ranked: &RankedList<'_>) -> f64 {
        let intents = match ranked.entries.first() {
            Some(entry) => entry.document.labels.len(),
            None => return 0.0,
        };
        if intents == 0 {
            return 0.0;
        }
        (0..intents)
            .map(|intent| Self::average_precision(ranked, intent))
            .sum::<f64>()
            / intents as f64
    }
}
