// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! libtest console log parsing
//!
//! This module turns the plain-text output of `cargo test` (optionally
//! preceded by compiler output) into a [`ParsedResult`]:
//! - `warning:` / `error[E0308]:` compiler diagnostic headers and error details
//! - `test <name> ... ok|FAILED` lines
//! - the `test result: ...` summary line
//! - per-test captured output in the `failures:` section
//!
//! Parsing is a single forward pass over the lines. Unrecognized lines are
//! skipped, so parsing never fails.
//!
//! # Example
//!
//! ```
//! use libtest_summary_core::parser::parse;
//!
//! let log = "test math::adds ... ok\n\
//!            test result: ok. 1 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s";
//! let result = parse(log);
//! assert_eq!(result.tests.len(), 1);
//! assert_eq!(result.summary.map(|s| s.passed), Some(1));
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::model::{
    BuildDiagnostic, FailureRecord, ParsedResult, RunSummary, TestCase, TestStatus,
};

// ============================================================================
// Line patterns
// ============================================================================

static WARNING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^warning:(.+?)(?:\s+-->.*)?$").expect("warning pattern is valid")
});

static ERROR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^error(?:\[(E[0-9]+)\])?:(.+?)(?:\s+-->.*)?$").expect("error pattern is valid")
});

static TEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^test (.*?) \.\.\. (ok|FAILED)$").expect("test pattern is valid")
});

// Not anchored at the start: the summary may follow other text on the line.
static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"test result: (FAILED|ok)\. ([0-9]+) passed; ([0-9]+) failed; ([0-9]+) ignored; ([0-9]+) measured; ([0-9]+) filtered out; finished in (.*)$",
    )
    .expect("summary pattern is valid")
});

static FAILURE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---- (.*?) stdout ----$").expect("failure header pattern is valid")
});

const FAILURE_SECTION_START: &str = "failures:";

// ============================================================================
// Options
// ============================================================================

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Recognize compiler warnings and errors preceding the test output
    pub build_diagnostics: bool,
}

impl ParseOptions {
    /// Options that ignore compiler output and only read test lines
    #[must_use]
    pub fn tests_only() -> Self {
        Self {
            build_diagnostics: false,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            build_diagnostics: true,
        }
    }
}

// ============================================================================
// Parsing Functions
// ============================================================================

/// Parse a complete log with default options
#[must_use]
pub fn parse(content: &str) -> ParsedResult {
    parse_with(content, ParseOptions::default())
}

/// Parse a complete log
///
/// The content is split on `\n` and every line is folded through one
/// [`LogParser`].
#[must_use]
pub fn parse_with(content: &str, options: ParseOptions) -> ParsedResult {
    content
        .split('\n')
        .fold(LogParser::new(options), |mut parser, line| {
            parser.process_line(line);
            parser
        })
        .finish()
}

/// Parse a `test result:` line
///
/// Returns `None` if the line is not a summary or a count does not fit in a `u64`.
#[must_use]
pub fn parse_summary_line(line: &str) -> Option<RunSummary> {
    let caps = SUMMARY_RE.captures(line)?;
    let count = |i: usize| caps[i].parse::<u64>().ok();

    Some(RunSummary {
        status: TestStatus::from_token(&caps[1])?,
        passed: count(2)?,
        failed: count(3)?,
        ignored: count(4)?,
        measured: count(5)?,
        filtered: count(6)?,
        duration: caps[7].to_string(),
    })
}

fn header_message(caps: &Captures<'_>, group: usize) -> String {
    caps[group].trim().to_string()
}

// ============================================================================
// Line-by-line parser
// ============================================================================

/// Accumulator for a single pass over a log
///
/// Holds the result built so far plus the little state the format needs:
/// the build error currently collecting details, whether the `failures:`
/// section has started, and the failure block currently collecting output.
#[derive(Debug, Default)]
pub struct LogParser {
    options: ParseOptions,
    result: ParsedResult,
    current_error: Option<usize>,
    in_failure_section: bool,
    current_failure: Option<usize>,
}

impl LogParser {
    /// Create a parser with the given options
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Process a single line of the log
    ///
    /// Rules are tried in order and the first match consumes the line, with
    /// one exception: appending a line to the current build error's details
    /// does not consume it, so the same line may also be recorded as a test
    /// or summary line.
    pub fn process_line(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if self.options.build_diagnostics && self.process_build_line(line) {
            return;
        }

        if let Some(caps) = TEST_RE.captures(line)
            && let Some(status) = TestStatus::from_token(&caps[2])
        {
            trace!(test = &caps[1], %status, "test line");
            self.result.tests.push(TestCase::new(&caps[1], status));
            return;
        }

        if let Some(summary) = parse_summary_line(line) {
            trace!(?summary, "summary line");
            self.result.summary = Some(summary);
            return;
        }

        if line == FAILURE_SECTION_START {
            self.in_failure_section = true;
            return;
        }

        if self.in_failure_section {
            self.process_failure_line(line);
        }
    }

    /// Returns true if the line was consumed by a diagnostic header
    fn process_build_line(&mut self, line: &str) -> bool {
        if let Some(caps) = WARNING_RE.captures(line) {
            let warning = BuildDiagnostic::warning(header_message(&caps, 1));
            trace!(text = %warning.message, "build warning");
            self.result.build.warnings.push(warning);
            return true;
        }

        if let Some(caps) = ERROR_RE.captures(line) {
            let code = caps.get(1).map(|m| m.as_str().to_string());
            let error = BuildDiagnostic::error(code, header_message(&caps, 2));
            trace!(code = ?error.code, text = %error.message, "build error");
            self.result.build.errors.push(error);
            self.current_error = Some(self.result.build.errors.len() - 1);
            return true;
        }

        let trimmed = line.trim();
        if let Some(idx) = self.current_error
            && !trimmed.is_empty()
            && !line.starts_with("error")
        {
            self.result.build.errors[idx]
                .details
                .push(trimmed.to_string());
        }

        false
    }

    fn process_failure_line(&mut self, line: &str) {
        if let Some(caps) = FAILURE_HEADER_RE.captures(line) {
            trace!(test = &caps[1], "failure block");
            self.result.failures.push(FailureRecord::new(&caps[1]));
            self.current_failure = Some(self.result.failures.len() - 1);
            return;
        }

        let trimmed = line.trim();
        if let Some(idx) = self.current_failure
            && !trimmed.is_empty()
        {
            self.result.failures[idx].details.push(trimmed.to_string());
        }
    }

    /// Get the result accumulated so far
    #[must_use]
    pub fn result(&self) -> &ParsedResult {
        &self.result
    }

    /// Finish parsing and return the result
    #[must_use]
    pub fn finish(self) -> ParsedResult {
        let result = self.result;
        debug!(
            tests = result.tests.len(),
            failures = result.failures.len(),
            warnings = result.build.warnings.len(),
            errors = result.build.errors.len(),
            has_summary = result.summary.is_some(),
            "parsed test log"
        );
        result
    }
}
