// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the feature vector codecs.
//!
//! Feature vectors come straight out of LETOR files, so the counts in their
//! first slots are arbitrary floats. Decoding must return Err on anything
//! malformed and scoring a decodable vector must never panic.

#![no_main]

use fieldtune::{Bm25f, Document, MultiFieldRecord, ScoringModel, SpanModel, SpanRecord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|features: Vec<f64>| {
    // Keep vectors small enough that huge declared counts fail fast
    if features.len() > 4096 {
        return;
    }

    if let Ok(record) = MultiFieldRecord::decode_any(&features) {
        let layout = record.layout();
        for i in 0..=layout.keywords {
            let _ = record.weight(i);
            for j in 0..=layout.fields {
                let _ = record.term_frequency(i, j);
            }
        }
        for j in 0..=layout.fields {
            let _ = record.length_penalty(j);
            let _ = record.field(j);
        }

        let doc = Document::new(features.clone(), 0.0, "fuzz");
        let mut model = Bm25f::new();
        if model.initialize(Some(&doc)).is_ok() {
            let score = model.evaluate(&doc);
            assert!(score.is_ok(), "decodable vector failed to score: {:?}", score);
        }
    }

    if let Ok(record) = SpanRecord::decode(&features) {
        let layout = record.layout();
        for j in 0..=layout.fields {
            let _ = record.length_penalty(j);
            for i in 0..=layout.keywords {
                assert!(record.spans(j, i).count() == record.span_count(j, i));
            }
        }

        let doc = Document::new(features.clone(), 0.0, "fuzz");
        let mut model = SpanModel::new();
        if model.initialize(Some(&doc)).is_ok() {
            let score = model.evaluate(&doc);
            assert!(score.is_ok(), "decodable vector failed to score: {:?}", score);
        }
    }
});
