// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reader for LETOR / SVMlight-style training files.
//!
//! ```text
//! <grades> qid:<id> <index>:<value> ... [# <description>]
//! ```
//!
//! `grades` is one relevance grade or a comma-separated list of per-intent
//! grades. Feature indices are 1-based; anything not mentioned is 0 and the
//! dense vector runs up to the largest index seen. The description becomes the
//! document's grouping key. Consecutive lines sharing a `qid` make one list.

use crate::error::{ParseError, Result};
use crate::types::{Document, QueryList};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Largest feature index accepted. Bounds the dense vector a single line can allocate.
pub const MAX_FEATURE_INDEX: usize = 1 << 20;

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
pub struct LetorLine {
    pub qid: String,
    pub labels: Vec<f64>,
    pub features: Vec<f64>,
    pub description: Option<String>,
}

/// Parse one line. Blank lines and `#` comments give `Ok(None)`.
///
/// `number` is the 1-based line number used in errors.
pub fn parse_line(line: &str, number: usize) -> std::result::Result<Option<LetorLine>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (body, description) = match trimmed.split_once('#') {
        Some((body, rest)) => {
            let rest = rest.trim();
            (body, (!rest.is_empty()).then(|| rest.to_string()))
        }
        None => (trimmed, None),
    };

    let mut tokens = body.split_whitespace();
    let labels = tokens
        .next()
        .ok_or_else(|| ParseError::new(number, "missing relevance grade"))
        .and_then(|token| parse_labels(token, number))?;

    let qid = match tokens.next().and_then(|t| t.strip_prefix("qid:")) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ParseError::new(number, "expected qid:<id> after the grade")),
    };

    let mut pairs = Vec::new();
    let mut len = 0;
    for token in tokens {
        let (index, value) = token.split_once(':').ok_or_else(|| {
            ParseError::new(number, format!("expected <index>:<value>, got '{}'", token))
        })?;
        let index: usize = index
            .parse()
            .map_err(|_| ParseError::new(number, format!("invalid feature index '{}'", index)))?;
        if index == 0 || index > MAX_FEATURE_INDEX {
            return Err(ParseError::new(
                number,
                format!("feature index {} outside 1..={}", index, MAX_FEATURE_INDEX),
            ));
        }
        let value: f64 = value.parse().map_err(|_| {
            ParseError::new(number, format!("invalid value '{}' for feature {}", value, index))
        })?;
        len = len.max(index);
        pairs.push((index, value));
    }

    let mut features = vec![0.0; len];
    for (index, value) in pairs {
        features[index - 1] = value;
    }

    Ok(Some(LetorLine {
        qid,
        labels,
        features,
        description,
    }))
}

fn parse_labels(token: &str, number: usize) -> std::result::Result<Vec<f64>, ParseError> {
    token
        .split(',')
        .map(|grade| {
            grade.parse::<f64>().map_err(|_| {
                ParseError::new(number, format!("invalid relevance grade '{}'", grade))
            })
        })
        .collect()
}

/// Read query lists from any buffered reader.
pub fn read_lists<R: BufRead>(reader: R) -> Result<Vec<QueryList>> {
    let mut lists: Vec<QueryList> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(parsed) = parse_line(&line, i + 1)? else {
            continue;
        };

        let same_query = lists.last().is_some_and(|list| list.id == parsed.qid);
        if !same_query {
            lists.push(QueryList::new(parsed.qid.clone(), Vec::new()));
        }
        let Some(list) = lists.last_mut() else {
            continue;
        };
        let key = parsed
            .description
            .unwrap_or_else(|| list.documents.len().to_string());
        list.documents
            .push(Document::with_labels(parsed.features, parsed.labels, key));
    }

    debug!(
        lists = lists.len(),
        documents = lists.iter().map(QueryList::len).sum::<usize>(),
        "read training data"
    );
    Ok(lists)
}

/// Parse query lists from an in-memory string.
pub fn parse_lists(text: &str) -> Result<Vec<QueryList>> {
    read_lists(text.as_bytes())
}

/// Read query lists from a file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<QueryList>> {
    let file = File::open(path.as_ref())?;
    read_lists(BufReader::new(file))
}
