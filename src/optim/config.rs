// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Coordinate ascent settings.
//!
//! Defaults match the classic RankLib coordinate ascent: 5 restarts, 25
//! line-search steps per direction, a 0.001 starting step that doubles every
//! step, and a 0.001 convergence tolerance. Any field left out of a JSON config
//! takes its default.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AscentConfig {
    /// Independent restarts from the default parameters.
    pub restarts: usize,
    /// Line-search steps per direction.
    pub max_iterations: usize,
    /// First step of a line search.
    pub initial_step: f64,
    /// Fraction of `|o|` used instead when `initial_step` exceeds `|o| / 2`.
    pub relative_step: f64,
    /// Growth factor applied to the step after every trial.
    pub step_scale: f64,
    /// A sweep gaining less than this ends the restart.
    pub tolerance: f64,
    /// Penalize distance from the default boosts.
    pub regularized: bool,
    /// Weight of the regularization penalty.
    pub regularization: f64,
}

impl Default for AscentConfig {
    fn default() -> Self {
        Self {
            restarts: 5,
            max_iterations: 25,
            initial_step: 0.001,
            relative_step: 0.05,
            step_scale: 2.0,
            tolerance: 0.001,
            regularized: false,
            regularization: 0.001,
        }
    }
}

impl AscentConfig {
    /// Reject settings that would make the search meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(ConfigError::NoRestarts);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        for (name, value) in [
            ("initial_step", self.initial_step),
            ("relative_step", self.relative_step),
            ("step_scale", self.step_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidStep { name, value });
            }
        }
        for (name, value) in [
            ("tolerance", self.tolerance),
            ("regularization", self.regularization),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }

    /// Weight actually applied to the distance penalty.
    #[inline]
    pub fn penalty_weight(&self) -> f64 {
        if self.regularized {
            self.regularization
        } else {
            0.0
        }
    }
}
