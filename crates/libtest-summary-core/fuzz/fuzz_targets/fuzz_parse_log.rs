// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for whole-log parsing and rendering
//!
//! This fuzzes `parse` followed by `render`, which must accept any text.

#![no_main]

use libfuzzer_sys::fuzz_target;

use libtest_summary_core::{parse, render};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string - invalid UTF-8 is rejected before parsing
    if let Ok(input) = std::str::from_utf8(data) {
        let result = parse(input);
        let _ = render(&result);
        let _ = result.verdict();
    }
});
