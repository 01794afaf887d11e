// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where each sweep's parameter order comes from.
//!
//! Production shuffles; tests pin the order so a run is reproducible down to
//! the last bit. The optimizer asks once per sweep and checks every index it
//! gets back.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Supplies the order in which one sweep visits the parameters.
pub trait SweepOrder {
    /// Indices to visit, each below `parameter_count`.
    fn next_order(&mut self, parameter_count: usize) -> Vec<usize>;
}

impl<F> SweepOrder for F
where
    F: FnMut(usize) -> Vec<usize>,
{
    fn next_order(&mut self, parameter_count: usize) -> Vec<usize> {
        self(parameter_count)
    }
}

/// A fresh random permutation of every parameter each sweep.
#[derive(Debug, Clone)]
pub struct ShuffledOrder {
    rng: StdRng,
}

impl ShuffledOrder {
    /// Reproducible shuffling.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffling seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SweepOrder for ShuffledOrder {
    fn next_order(&mut self, parameter_count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..parameter_count).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// The same order every sweep. May name a subset of the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOrder(Vec<usize>);

impl FixedOrder {
    pub fn new(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// `0, 1, ..., count - 1`.
    pub fn sequential(count: usize) -> Self {
        Self((0..count).collect())
    }
}

impl SweepOrder for FixedOrder {
    fn next_order(&mut self, _parameter_count: usize) -> Vec<usize> {
        self.0.clone()
    }
}
