// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fieldtune command-line interface.
//!
//! Two subcommands: `train` runs coordinate ascent on a LETOR file and prints
//! the tuned parameters, `inspect` decodes the first document of a file so you
//! can check its layout before spending minutes on training.

pub mod display;
pub mod inspect;
pub mod train;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fieldtune",
    about = "Tune BM25F and span proximity ranking parameters with coordinate ascent",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tune model parameters on a training file
    Train(TrainArgs),

    /// Decode the first document of a training file and show its layout
    Inspect {
        /// Path to a LETOR file
        file: PathBuf,

        /// Model family whose feature layout to decode (bm25f or span)
        #[arg(short, long, default_value = "bm25f")]
        model: String,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct TrainArgs {
    /// Training data in LETOR format
    #[arg(short, long)]
    pub train: PathBuf,

    /// Held-out data scored once training finishes
    #[arg(long)]
    pub validate: Option<PathBuf>,

    /// Model family (bm25f or span)
    #[arg(short, long, default_value = "bm25f")]
    pub model: String,

    /// Metric to optimize (MAPIA, NDCG, NDCG@k)
    #[arg(long, default_value = "MAPIA")]
    pub metric: String,

    /// JSON file with optimizer settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of restarts
    #[arg(long)]
    pub restarts: Option<usize>,

    /// Line-search steps per direction
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Minimum gain per sweep before a restart stops
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Enable regularization toward the default boosts with this weight
    #[arg(long, value_name = "LAMBDA")]
    pub regularize: Option<f64>,

    /// Seed for the sweep order; omit for a random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the full training report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,
}
