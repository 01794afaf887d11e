// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the LETOR line parser.
//!
//! Every training file goes through this parser. Garbage must come back as a
//! ParseError carrying the line number, never as a panic or a huge allocation.

#![no_main]

use fieldtune::letor::parse_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let line: String = String::from_utf8_lossy(data).chars().take(512).collect();

    match parse_line(&line, 7) {
        Ok(Some(parsed)) => {
            assert!(!parsed.labels.is_empty(), "parsed line without labels");
        }
        Ok(None) => {}
        Err(e) => assert_eq!(e.line, 7),
    }
});
