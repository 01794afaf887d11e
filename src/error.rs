// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three families of things go wrong: a feature vector doesn't match its own
//! header (`FeatureError`), a training configuration is nonsense
//! (`ConfigError`), or an input file can't be parsed (`ParseError`). All three
//! fold into the top-level `Error` so callers can `?` through the optimizer.
//!
//! Slot numbers in messages are 1-based, matching the feature numbering of the
//! training files.

use std::fmt;
use std::io;

/// A feature vector that contradicts its own header.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Vector has no values at all, so not even the header can be read.
    Empty,
    /// A count slot holds something that isn't a non-negative integer.
    InvalidCount { slot: usize, value: f64 },
    /// The header promises more values than the vector holds.
    Truncated { slot: usize, len: usize },
    /// Values remain after the last declared span.
    TrailingValues { consumed: usize, len: usize },
    /// Vector length isn't `1 + k + f(k+1)` for any whole number of fields.
    LengthMismatch {
        keywords: usize,
        fields: usize,
        expected: usize,
        actual: usize,
    },
    /// Document declares a different field count than the model was built for.
    FieldCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::Empty => write!(f, "feature vector is empty"),
            FeatureError::InvalidCount { slot, value } => {
                write!(
                    f,
                    "feature {} must be a non-negative integer count, got {}",
                    slot, value
                )
            }
            FeatureError::Truncated { slot, len } => {
                write!(
                    f,
                    "feature {} is declared by the header but the vector has only {} values",
                    slot, len
                )
            }
            FeatureError::TrailingValues { consumed, len } => {
                write!(
                    f,
                    "layout ends after {} values but the vector has {}",
                    consumed, len
                )
            }
            FeatureError::LengthMismatch {
                keywords,
                fields,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} keywords and {} fields need {} values, vector has {}",
                    keywords, fields, expected, actual
                )
            }
            FeatureError::FieldCountMismatch { expected, found } => {
                write!(
                    f,
                    "model was initialized for {} fields, document has {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for FeatureError {}

/// Rejected optimizer configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `restarts` must be at least 1.
    NoRestarts,
    /// `max_iterations` must be at least 1.
    NoIterations,
    /// A step-size setting is zero, negative, or not finite.
    InvalidStep { name: &'static str, value: f64 },
    /// A non-negative setting is negative or not finite.
    Negative { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoRestarts => write!(f, "restarts must be at least 1"),
            ConfigError::NoIterations => write!(f, "max_iterations must be at least 1"),
            ConfigError::InvalidStep { name, value } => {
                write!(f, "{} must be positive and finite, got {}", name, value)
            }
            ConfigError::Negative { name, value } => {
                write!(f, "{} must be non-negative and finite, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A line in a LETOR file that can't be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Top-level error for everything the crate does.
#[derive(Debug)]
pub enum Error {
    Feature(FeatureError),
    Config(ConfigError),
    Parse(ParseError),
    Io(io::Error),
    /// A configuration file or report that isn't valid JSON.
    Json(serde_json::Error),
    /// A sweep order named a parameter the model doesn't have.
    InvalidSweepOrder { index: usize, parameter_count: usize },
    /// A parameter vector of the wrong length was handed to a model.
    ParameterCount { expected: usize, found: usize },
    /// A metric name that no evaluator answers to.
    UnknownMetric(String),
    /// A model family name that no scoring model answers to.
    UnknownModel(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Feature(e) => write!(f, "malformed feature vector: {}", e),
            Error::Config(e) => write!(f, "invalid configuration: {}", e),
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::InvalidSweepOrder {
                index,
                parameter_count,
            } => {
                write!(
                    f,
                    "sweep order names parameter {} but the model has {}",
                    index, parameter_count
                )
            }
            Error::ParameterCount { expected, found } => {
                write!(f, "expected {} parameters, got {}", expected, found)
            }
            Error::UnknownMetric(name) => write!(f, "unknown metric '{}'", name),
            Error::UnknownModel(name) => write!(f, "unknown model '{}'", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Feature(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeatureError> for Error {
    fn from(e: FeatureError) -> Self {
        Error::Feature(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
