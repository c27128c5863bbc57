// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! libtest-summary-core: Test log summaries for CI job pages
//!
//! This library crate parses the console output of `cargo test` (including
//! any compiler diagnostics printed before the run) and renders it as a
//! markdown job summary with a pass/fail verdict.
//!
//! # Example
//!
//! ```
//! use libtest_summary_core::{parse, render};
//!
//! let log = "test parser::tests::empty ... ok\n\
//!            test result: ok. 1 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s";
//! let result = parse(log);
//! let markdown = render(&result);
//!
//! assert!(markdown.starts_with("# Test Results ✅"));
//! assert!(result.verdict().is_ok());
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use error::Failure;
pub use model::{
    BuildDiagnostic, BuildIssues, FailureRecord, ParsedResult, RunSummary, TestCase, TestStatus,
};
pub use parser::{LogParser, ParseOptions, parse, parse_with};
pub use render::render;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::Failure;
    pub use crate::model::{ParsedResult, TestCase, TestStatus};
    pub use crate::parser::{ParseOptions, parse, parse_with};
    pub use crate::render::render;
}
