// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the line-by-line parser
//!
//! This fuzzes `LogParser` with diagnostics disabled and enabled, feeding
//! the input one line at a time.

#![no_main]

use libfuzzer_sys::fuzz_target;

use libtest_summary_core::{LogParser, ParseOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for options in [ParseOptions::default(), ParseOptions::tests_only()] {
            let mut parser = LogParser::new(options);

            // Process each line - parser should never panic
            for line in input.lines() {
                parser.process_line(line);
            }

            let _ = parser.finish();
        }
    }
});
