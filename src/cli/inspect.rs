// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `fieldtune inspect`: decode the first document of a file.

use super::display::*;
use fieldtune::{
    letor, Document, Error, ModelKind, MultiFieldRecord, ParseError, Result, SpanRecord,
};
use std::path::Path;

pub fn run(file: &Path, model: &str) -> Result<()> {
    let kind: ModelKind = model.parse()?;
    let lists = letor::read_file(file)?;
    let doc = lists
        .first()
        .and_then(|list| list.first())
        .ok_or_else(|| Error::Parse(ParseError::new(0, "file contains no documents")))?;

    let documents: usize = lists.iter().map(|list| list.len()).sum();
    println!();
    section_top("FILE");
    row(&format!(" {}", file.display()));
    row(&format!(" {} lists, {} documents", lists.len(), documents));
    section_bot();

    match kind {
        ModelKind::Bm25f => show_multi_field(doc),
        ModelKind::Span => show_span(doc),
    }
}

fn show_multi_field(doc: &Document) -> Result<()> {
    let record = MultiFieldRecord::decode_any(&doc.features)?;
    section_top(&format!("BM25F LAYOUT  key={}", doc.key));
    row(&format!(
        " {} keywords, {} fields, {} values",
        record.keywords(),
        record.fields(),
        doc.features.len()
    ));
    for i in 1..=record.keywords() {
        row(&format!(" H({}) = {}", i, record.weight(i)));
    }
    for j in 1..=record.fields() {
        if let Some(block) = record.field(j) {
            row(&format!(
                " field {:<2} lp = {:<8} tf = {:?}",
                j, block.length_penalty, block.term_frequencies
            ));
        }
    }
    section_bot();
    Ok(())
}

fn show_span(doc: &Document) -> Result<()> {
    let record = SpanRecord::decode(&doc.features)?;
    section_top(&format!("SPAN LAYOUT  key={}", doc.key));
    row(&format!(
        " {} keywords, {} fields, {} values",
        record.keywords(),
        record.fields(),
        doc.features.len()
    ));
    for i in 1..=record.fields() {
        row(&format!(" field {:<2} lp = {}", i, record.length_penalty(i)));
    }
    for j in 1..=record.keywords() {
        let counts: Vec<usize> = (1..=record.fields())
            .map(|i| record.span_count(i, j))
            .collect();
        row(&format!(
            " keyword {:<2} H = {:<8} spans per field = {:?}",
            j,
            record.weight(j),
            counts
        ));
    }
    section_bot();
    Ok(())
}
