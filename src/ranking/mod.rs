// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deduplicated ranking of a query list.
//!
//! Score every document once, keep the best occurrence of each grouping key,
//! and sort what survives by score, highest first. The sort is stable, so
//! equal scores stay in input order.
//!
//! # Algorithm
//!
//! ```text
//! for each document, in input order:
//!     score it
//!     if its key has a better-or-equal earlier occurrence: exclude it
//!     if it beats the earlier best of its key: exclude the earlier one
//! stable sort live positions by score, descending
//! ```
//!
//! Excluded positions are dropped entirely; the result is shorter than the
//! input whenever keys repeat. A NaN score sorts after every comparable score
//! rather than poisoning the order.

mod dedup;

pub use dedup::{KeyTracker, Offer};

use crate::contracts::check_ranked_list;
use crate::error::FeatureError;
use crate::scoring::ScoringModel;
use crate::types::{Document, QueryList};
use std::cmp::Ordering;

/// A document and the score it was ranked by.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// The ranked, deduplicated view of one query list.
#[derive(Debug, Clone)]
pub struct RankedList<'a> {
    pub query_id: &'a str,
    pub entries: Vec<RankedEntry<'a>>,
}

impl<'a> RankedList<'a> {
    /// The list exactly as given, unscored (every score is 0) and not deduplicated.
    ///
    /// Handy for evaluating a metric against a known order.
    pub fn in_input_order(list: &'a QueryList) -> Self {
        Self {
            query_id: &list.id,
            entries: list
                .documents
                .iter()
                .map(|document| RankedEntry {
                    document,
                    score: 0.0,
                })
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Documents in rank order.
    pub fn documents(&self) -> impl Iterator<Item = &'a Document> + '_ {
        self.entries.iter().map(|entry| entry.document)
    }
}

/// Descending by score, NaN last. Suitable for a stable sort.
#[inline]
pub fn compare_scores_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Rank `list` with the model's current parameters.
pub fn rank<'a, M>(list: &'a QueryList, model: &M) -> Result<RankedList<'a>, FeatureError>
where
    M: ScoringModel + ?Sized,
{
    rank_with(list, model, model.parameters())
}

/// Rank `list` with a candidate parameter vector, leaving the model untouched.
pub fn rank_with<'a, M>(
    list: &'a QueryList,
    model: &M,
    params: &[f64],
) -> Result<RankedList<'a>, FeatureError>
where
    M: ScoringModel + ?Sized,
{
    let docs = &list.documents;
    let mut scores = Vec::with_capacity(docs.len());
    let mut live = vec![true; docs.len()];
    let mut tracker = KeyTracker::with_capacity(docs.len());

    for (position, doc) in docs.iter().enumerate() {
        let score = model.score_with(params, doc)?;
        scores.push(score);
        match tracker.offer(&doc.key, position, score) {
            Offer::New => {}
            Offer::Replaces(previous) => live[previous] = false,
            Offer::Rejected => live[position] = false,
        }
    }

    let mut order: Vec<usize> = (0..docs.len()).filter(|&p| live[p]).collect();
    order.sort_by(|&a, &b| compare_scores_desc(scores[a], scores[b]));

    let ranked = RankedList {
        query_id: &list.id,
        entries: order
            .into_iter()
            .map(|p| RankedEntry {
                document: &docs[p],
                score: scores[p],
            })
            .collect(),
    };
    check_ranked_list(&ranked);
    Ok(ranked)
}

/// Rank every list with a candidate parameter vector.
pub fn rank_all<'a, M>(
    lists: &'a [QueryList],
    model: &M,
    params: &[f64],
) -> Result<Vec<RankedList<'a>>, FeatureError>
where
    M: ScoringModel + ?Sized,
{
    lists
        .iter()
        .map(|list| rank_with(list, model, params))
        .collect()
}

/// `rank_all` across threads. Only for reporting on held-out lists; training
/// ranks sequentially.
#[cfg(feature = "parallel")]
pub fn rank_all_parallel<'a, M>(
    lists: &'a [QueryList],
    model: &M,
    params: &[f64],
) -> Result<Vec<RankedList<'a>>, FeatureError>
where
    M: ScoringModel + Sync + ?Sized,
{
    use rayon::prelude::*;

    lists
        .par_iter()
        .map(|list| rank_with(list, model, params))
        .collect()
}
