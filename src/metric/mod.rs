// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! List-wise evaluation metrics.
//!
//! A metric looks at a ranked list and the relevance grades it carries and
//! returns a number, higher is better. The optimizer only ever sees the mean
//! over all training lists.

mod apia;
mod ndcg;

pub use apia::IntentAwareAp;
pub use ndcg::Ndcg;

use crate::error::Error;
use crate::ranking::RankedList;
use std::fmt;
use std::str::FromStr;

/// Scores a ranked list against its relevance judgments.
pub trait MetricScorer: Send + Sync {
    /// Display name, e.g. `"MAPIA"` or `"NDCG@10"`.
    fn name(&self) -> String;

    /// Score one ranked list. An empty list scores 0.
    fn score(&self, ranked: &RankedList<'_>) -> f64;

    /// Mean over all lists, 0 when there are none.
    fn score_all(&self, lists: &[RankedList<'_>]) -> f64 {
        if lists.is_empty() {
            return 0.0;
        }
        lists.iter().map(|ranked| self.score(ranked)).sum::<f64>() / lists.len() as f64
    }
}

/// Which metric to build, parsed from names like `MAPIA` or `NDCG@10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    #[default]
    Mapia,
    /// NDCG cut at `k`; 0 means the whole list.
    Ndcg(usize),
}

impl MetricKind {
    pub fn build(self) -> Box<dyn MetricScorer> {
        match self {
            MetricKind::Mapia => Box::new(IntentAwareAp),
            MetricKind::Ndcg(k) => Box::new(Ndcg::new(k)),
        }
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.split_once('@') {
            None if upper == "MAPIA" => Ok(MetricKind::Mapia),
            None if upper == "NDCG" => Ok(MetricKind::Ndcg(0)),
            Some(("NDCG", k)) => k
                .parse()
                .map(MetricKind::Ndcg)
                .map_err(|_| Error::UnknownMetric(s.to_string())),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Mapia => write!(f, "MAPIA"),
            MetricKind::Ndcg(0) => write!(f, "NDCG"),
            MetricKind::Ndcg(k) => write!(f, "NDCG@{}", k),
        }
    }
}
