//! Field-weighted ranking models and a coordinate ascent tuner.
//!
//! This crate scores documents with parametric multi-field ranking formulas
//! (BM25F and a span proximity model) and searches for the parameters that
//! maximize a list-wise retrieval metric on judged training queries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  codec/     │────▶│  scoring/    │────▶│  ranking/   │
//! │ (cursor,    │     │ (Bm25f,      │     │ (rank, key  │
//! │  layouts)   │     │  SpanModel)  │     │  dedup)     │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!        ┌────────────────────────────────────────┘
//!        ▼
//! ┌─────────────┐     ┌──────────────────────────────────┐
//! │  metric/    │────▶│  optim/                          │
//! │ (MAPIA,     │     │  (CoordinateAscent, SweepOrder,  │
//! │  NDCG@k)    │     │   AscentConfig, boost_distance)  │
//! └─────────────┘     └──────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Module      | Property                                        | Checked by                 |
//! |-------------|-------------------------------------------------|----------------------------|
//! | `codec`     | vectors are consumed exactly, counts integral   | `FeatureError`             |
//! | `ranking`   | one entry per key, scores non-increasing        | `contracts`, property tests|
//! | `optim`     | parameters stay in bounds, sweeps never regress | `contracts`, property tests|
//!
//! # Usage
//!
//! ```ignore
//! use fieldtune::{letor, AscentConfig, Bm25f, CoordinateAscent, IntentAwareAp, ShuffledOrder};
//!
//! let lists = letor::read_file("train.txt")?;
//! let mut model = Bm25f::new();
//! let outcome = CoordinateAscent::new(AscentConfig::default())?
//!     .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(42))?;
//! println!("{:?}", outcome.model.named_parameters);
//! ```

pub mod codec;
pub mod contracts;
pub mod error;
pub mod letor;
pub mod logging;
pub mod metric;
pub mod optim;
pub mod ranking;
pub mod scoring;
pub mod testing;
mod types;

pub use codec::{FeatureLayout, MultiFieldRecord, Span, SpanRecord};
pub use error::{ConfigError, Error, FeatureError, ParseError, Result};
pub use metric::{IntentAwareAp, MetricKind, MetricScorer, Ndcg};
pub use optim::{
    boost_distance, evaluate, AscentConfig, CoordinateAscent, FixedOrder, RestartSummary,
    ShuffledOrder, SweepOrder, TrainingOutcome,
};
pub use ranking::{rank, rank_all, rank_with, RankedEntry, RankedList};
pub use scoring::{Bm25f, ModelKind, ParamKind, ScoringModel, SpanModel};
pub use types::{
    layout_sample, Document, NamedParameter, ParameterVector, QueryList, TrainedModel,
};
