// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `fieldtune train`: load data, tune, print, optionally write a JSON report.

use super::display::*;
use super::TrainArgs;
use fieldtune::{
    letor, AscentConfig, CoordinateAscent, MetricKind, ModelKind, RestartSummary, Result,
    ShuffledOrder, TrainingOutcome,
};
use std::fs;
use tracing::info;

pub fn run(args: &TrainArgs) -> Result<()> {
    let config = load_config(args)?;
    let model_kind: ModelKind = args.model.parse()?;
    let metric_kind: MetricKind = args.metric.parse()?;
    let optimizer = CoordinateAscent::new(config)?;

    let train = letor::read_file(&args.train)?;
    let validation = args.validate.as_ref().map(letor::read_file).transpose()?;
    info!(
        train = train.len(),
        validation = validation.as_ref().map_or(0, Vec::len),
        "loaded query lists"
    );

    let mut model = model_kind.build();
    let metric = metric_kind.build();
    let mut order = match args.seed {
        Some(seed) => ShuffledOrder::seeded(seed),
        None => ShuffledOrder::from_entropy(),
    };

    let progress = Progress::new(optimizer.config().restarts);
    let outcome = optimizer.learn_observed(
        model.as_mut(),
        &train,
        validation.as_deref(),
        metric.as_ref(),
        &mut order,
        &mut |summary| progress.restart_done(summary),
    )?;
    progress.finish();

    let defaults = model.default_parameters();
    print_summary(&outcome, &defaults);

    if let Some(path) = &args.report {
        fs::write(path, serde_json::to_string_pretty(&outcome)?)?;
        info!(path = %path.display(), "wrote training report");
    }
    Ok(())
}

/// JSON config file first, then individual flags on top.
fn load_config(args: &TrainArgs) -> Result<AscentConfig> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => AscentConfig::default(),
    };
    if let Some(restarts) = args.restarts {
        config.restarts = restarts;
    }
    if let Some(iterations) = args.iterations {
        config.max_iterations = iterations;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(lambda) = args.regularize {
        config.regularized = true;
        config.regularization = lambda;
    }
    Ok(config)
}

fn print_summary(outcome: &TrainingOutcome, defaults: &[f64]) {
    let model = &outcome.model;

    println!();
    section_top("MODEL");
    row(&format!(" family   {}", model.model));
    row(&format!(" metric   {}", model.metric));
    row(&format!(" layout   {} keywords, {} fields", model.keywords, model.fields));
    section_bot();

    section_top("PARAMETERS");
    for (param, default) in model.named_parameters.iter().zip(defaults) {
        row(&format!(
            " {} {:>10.4}  {}",
            pad_right(&param.name, 10),
            param.value,
            delta(*default, param.value)
        ));
    }
    section_bot();

    section_top("SCORES");
    row(&format!(" training   {}", metric_value(model.training_score)));
    if let Some(validation) = model.validation_score {
        row(&format!(" validation {}", metric_value(validation)));
    }
    section_bot();

    if !outcome.restarts.is_empty() {
        section_top("RESTARTS");
        for summary in &outcome.restarts {
            row(&format!(
                " #{:<2} {:.4} -> {:.4}  {:>2} sweeps  {}",
                summary.restart,
                summary.start_score,
                summary.best_score,
                summary.sweeps,
                bar(summary.best_score, 20)
            ));
        }
        section_bot();
    }
}

/// Restart progress bar when `indicatif` is available, nothing otherwise.
struct Progress {
    #[cfg(feature = "parallel")]
    bar: indicatif::ProgressBar,
}

impl Progress {
    #[cfg(feature = "parallel")]
    fn new(restarts: usize) -> Self {
        use indicatif::{ProgressBar, ProgressStyle};

        let bar = ProgressBar::new(restarts as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸");
        bar.set_style(style);
        bar.set_prefix("Training");
        Self { bar }
    }

    #[cfg(not(feature = "parallel"))]
    fn new(_restarts: usize) -> Self {
        Self {}
    }

    fn restart_done(&self, summary: &RestartSummary) {
        #[cfg(feature = "parallel")]
        {
            self.bar.set_message(format!("best {:.4}", summary.best_score));
            self.bar.inc(1);
        }
        #[cfg(not(feature = "parallel"))]
        let _ = summary;
    }

    fn finish(&self) {
        #[cfg(feature = "parallel")]
        self.bar.finish_and_clear();
    }
}
