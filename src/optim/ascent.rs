// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Coordinate ascent with restarts.
//!
//! # Algorithm
//!
//! ```text
//! for each restart:
//!     params = defaults; best = objective(params)
//!     while fewer than n-1 consecutive parameters failed to improve:
//!         for index in order.next_order(n):
//!             for dir in [+1, -1]:
//!                 step = s0 (or 5% of |o| if s0 is large next to o)
//!                 total = step
//!                 repeat N times:
//!                     trial = o + total * dir
//!                     stop this direction if trial is out of bounds
//!                     keep trial if objective beats best
//!                     step *= γ; total += step
//!                 skip -1 if +1 improved
//!             commit the best trial, or restore o and count a failure
//!         stop the restart if the sweep gained less than τ
//!     keep params if this restart beat every earlier one
//! ```
//!
//! The objective is the mean metric over the training lists, minus
//! `λ · boost_distance(params, defaults)` when regularization is on. Candidates
//! are scored by handing the vector to the model; the model's own parameters
//! are only written once, at the end.

use super::config::AscentConfig;
use super::evaluate;
use super::order::SweepOrder;
use super::regularize::boost_distance;
use crate::contracts::{check_no_regression, check_parameters_valid};
use crate::error::{Error, FeatureError, Result};
use crate::metric::MetricScorer;
use crate::ranking::rank_all;
use crate::scoring::ScoringModel;
use crate::types::{layout_sample, ParameterVector, QueryList, TrainedModel};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, info, info_span, trace};

/// What one restart did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestartSummary {
    /// 0-based restart number.
    pub restart: usize,
    /// Objective at the default parameters.
    pub start_score: f64,
    /// Best objective reached.
    pub best_score: f64,
    pub sweeps: usize,
    /// Best objective after each sweep. Never decreases.
    pub history: Vec<f64>,
}

/// A trained model plus how training got there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingOutcome {
    pub model: TrainedModel,
    pub restarts: Vec<RestartSummary>,
}

/// Penalized metric over the training lists for a candidate vector.
struct Objective<'a, M: ?Sized, S: ?Sized> {
    model: &'a M,
    lists: &'a [QueryList],
    metric: &'a S,
    anchor: &'a [f64],
    boosts: Range<usize>,
    weight: f64,
}

impl<M, S> Objective<'_, M, S>
where
    M: ScoringModel + ?Sized,
    S: MetricScorer + ?Sized,
{
    fn score(&self, params: &[f64]) -> std::result::Result<f64, FeatureError> {
        let ranked = rank_all(self.lists, self.model, params)?;
        let mut score = self.metric.score_all(&ranked);
        if self.weight > 0.0 {
            score -= self.weight * boost_distance(params, self.anchor, self.boosts.clone());
        }
        Ok(score)
    }
}

/// The coordinate ascent optimizer. Holds only its configuration; every
/// `learn` call starts from scratch.
#[derive(Debug, Clone)]
pub struct CoordinateAscent {
    config: AscentConfig,
}

impl CoordinateAscent {
    /// Validates `config` up front so a bad setting fails before any scoring.
    pub fn new(config: AscentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AscentConfig {
        &self.config
    }

    /// Tune `model` on `train`, report on `validation`.
    ///
    /// The model is re-initialized from the first document of the first
    /// training list, so any parameters it held before are discarded. On
    /// return it holds the best parameters found.
    pub fn learn<M, S>(
        &self,
        model: &mut M,
        train: &[QueryList],
        validation: Option<&[QueryList]>,
        metric: &S,
        order: &mut dyn SweepOrder,
    ) -> Result<TrainingOutcome>
    where
        M: ScoringModel + ?Sized,
        S: MetricScorer + ?Sized,
    {
        self.learn_observed(model, train, validation, metric, order, &mut |_| {})
    }

    /// `learn`, calling `on_restart` after every restart finishes.
    pub fn learn_observed<M, S>(
        &self,
        model: &mut M,
        train: &[QueryList],
        validation: Option<&[QueryList]>,
        metric: &S,
        order: &mut dyn SweepOrder,
        on_restart: &mut dyn FnMut(&RestartSummary),
    ) -> Result<TrainingOutcome>
    where
        M: ScoringModel + ?Sized,
        S: MetricScorer + ?Sized,
    {
        model.initialize(layout_sample(train))?;
        let anchor = model.default_parameters();

        info!(
            model = model.name(),
            metric = %metric.name(),
            lists = train.len(),
            parameters = anchor.len(),
            fields = model.field_count(),
            "training started"
        );

        let mut restarts = Vec::new();
        if train.is_empty() {
            info!("no training lists, keeping default parameters");
        } else {
            let objective = Objective {
                model: &*model,
                lists: train,
                metric,
                anchor: &anchor,
                boosts: model.boost_range(),
                weight: self.config.penalty_weight(),
            };

            let mut global: Option<(f64, ParameterVector)> = None;
            for restart in 0..self.config.restarts {
                let _span = info_span!("restart", restart).entered();
                let (summary, params) = self.run_restart(restart, &objective, &anchor, order)?;
                info!(
                    start = summary.start_score,
                    best = summary.best_score,
                    sweeps = summary.sweeps,
                    "restart finished"
                );
                on_restart(&summary);

                let improved = match &global {
                    Some((score, _)) => summary.best_score > *score,
                    None => true,
                };
                if improved {
                    global = Some((summary.best_score, params));
                }
                restarts.push(summary);
            }

            if let Some((_, params)) = global {
                model.set_parameters(params)?;
            }
        }

        let training_score = if train.is_empty() {
            0.0
        } else {
            evaluate(&*model, train, metric)?
        };
        let validation_score = match validation {
            Some(lists) => Some(evaluate(&*model, lists, metric)?),
            None => None,
        };

        info!(
            training = training_score,
            validation = ?validation_score,
            "training finished"
        );

        Ok(TrainingOutcome {
            model: TrainedModel {
                model: model.name().to_string(),
                metric: metric.name(),
                keywords: model.keyword_count(),
                fields: model.field_count(),
                parameters: model.parameters().clone(),
                named_parameters: model.named_parameters(),
                training_score,
                validation_score,
            },
            restarts,
        })
    }

    fn run_restart<M, S>(
        &self,
        restart: usize,
        objective: &Objective<'_, M, S>,
        anchor: &ParameterVector,
        order: &mut dyn SweepOrder,
    ) -> Result<(RestartSummary, ParameterVector)>
    where
        M: ScoringModel + ?Sized,
        S: MetricScorer + ?Sized,
    {
        let model = objective.model;
        let mut current = anchor.clone();
        let n = current.len();
        let start_score = objective.score(&current)?;
        let mut best = start_score;
        let mut fails = 0usize;
        let mut history = Vec::new();

        while (n > 1 && fails < n - 1) || (n == 1 && fails == 0) {
            let sweep_start = best;
            for index in order.next_order(n) {
                if index >= n {
                    return Err(Error::InvalidSweepOrder {
                        index,
                        parameter_count: n,
                    });
                }
                match self.line_search(objective, &mut current, index, &mut best)? {
                    Some(value) => {
                        current[index] = value;
                        fails = 0;
                        debug!(
                            parameter = %model.parameter_name(index),
                            value,
                            score = best,
                            "accepted"
                        );
                    }
                    None => fails += 1,
                }
            }

            history.push(best);
            check_no_regression(sweep_start, best);
            let gain = best - sweep_start;
            if !(gain > 0.0 && gain >= self.config.tolerance) {
                break;
            }
        }

        check_parameters_valid(model, &current);
        let summary = RestartSummary {
            restart,
            start_score,
            best_score: best,
            sweeps: history.len(),
            history,
        };
        Ok((summary, current))
    }

    /// Search both directions along one coordinate. Returns the best value
    /// found, or `None` with the coordinate restored.
    fn line_search<M, S>(
        &self,
        objective: &Objective<'_, M, S>,
        current: &mut ParameterVector,
        index: usize,
        best: &mut f64,
    ) -> Result<Option<f64>>
    where
        M: ScoringModel + ?Sized,
        S: MetricScorer + ?Sized,
    {
        let model = objective.model;
        let origin = current[index];
        let mut found = None;

        for direction in [1.0, -1.0] {
            let mut step = self.config.initial_step;
            if origin != 0.0 && step > 0.5 * origin.abs() {
                step = self.config.relative_step * origin.abs();
            }
            let mut total = step;

            for _ in 0..self.config.max_iterations {
                let trial = origin + total * direction;
                if !model.is_valid(index, trial) {
                    break;
                }
                current[index] = trial;
                let score = objective.score(current)?;
                trace!(index, trial, score, "trial");
                if score > *best {
                    *best = score;
                    found = Some(trial);
                }
                step *= self.config.step_scale;
                total += step;
            }

            if found.is_some() {
                break;
            }
        }

        current[index] = origin;
        Ok(found)
    }
}
