// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parameter search.
//!
//! `CoordinateAscent` tunes any `ScoringModel` against any `MetricScorer`.
//! Configuration lives in `AscentConfig`, sweep ordering is injected through
//! `SweepOrder`, and `boost_distance` is the regularization penalty.

mod ascent;
mod config;
mod order;
mod regularize;

pub use ascent::{CoordinateAscent, RestartSummary, TrainingOutcome};
pub use config::AscentConfig;
pub use order::{FixedOrder, ShuffledOrder, SweepOrder};
pub use regularize::boost_distance;

use crate::error::FeatureError;
use crate::metric::MetricScorer;
use crate::scoring::ScoringModel;
use crate::types::QueryList;

/// Unpenalized mean metric of `model`'s current parameters over `lists`.
///
/// Used for reporting after training. With the `parallel` feature the lists
/// are ranked across threads.
pub fn evaluate<M, S>(model: &M, lists: &[QueryList], metric: &S) -> Result<f64, FeatureError>
where
    M: ScoringModel + ?Sized,
    S: MetricScorer + ?Sized,
{
    #[cfg(feature = "parallel")]
    let ranked = crate::ranking::rank_all_parallel(lists, model, model.parameters())?;
    #[cfg(not(feature = "parallel"))]
    let ranked = crate::ranking::rank_all(lists, model, model.parameters())?;

    Ok(metric.score_all(&ranked))
}
