// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Feature vector decoding: how flat numbers become keywords, fields, and spans.
//!
//! Every document describes its own layout. The first one or two values say
//! how many keywords (and, for spans, fields) follow, and everything after is
//! packed accordingly. Nothing outside this module indexes into a feature
//! vector by offset; scoring code asks a decoded record for `tf(i, j)` or the
//! spans of `(field, keyword)` and lets the record worry about where they live.
//!
//! Two layouts:
//!
//! ```text
//! multi-field:  [k, H(1..k), lp(1), tf(1..k,1), lp(2), tf(1..k,2), ..., lp(f), tf(1..k,f)]
//! span:         [k, f, H(1..k), lp(1..f), {n(i,j), (s, w) × n(i,j)} for j in 1..k, i in 1..f]
//! ```
//!
//! The multi-field layout has a fixed size once `k` and `f` are known. The
//! span layout doesn't: every `(field, keyword)` cell carries its own span
//! count, so decoding walks a single cursor from front to back and insists on
//! landing exactly on the last value.

mod cursor;
pub mod multi_field;
pub mod span;

pub use cursor::{to_count, FeatureCursor};
pub use multi_field::{FieldBlock, MultiFieldRecord};
pub use span::{Span, SpanRecord};

use serde::{Deserialize, Serialize};

/// Keyword and field counts read from a document header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureLayout {
    pub keywords: usize,
    pub fields: usize,
}

impl FeatureLayout {
    pub fn new(keywords: usize, fields: usize) -> Self {
        Self { keywords, fields }
    }

    /// No keywords matched or no fields configured: every score is zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.keywords == 0 || self.fields == 0
    }
}
