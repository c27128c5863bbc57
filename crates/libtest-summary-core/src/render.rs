// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown job summary rendering
//!
//! Renders a [`ParsedResult`] as the markdown document shown in a pipeline's
//! job summary: build diagnostics first, then (only if the build had no
//! errors) the test summary, a collapsible per-module breakdown and the
//! captured output of each failure.
//!
//! Rendering is a pure function of its input and never fails.

use std::collections::HashMap;
use std::fmt::Write;

use crate::model::{BuildDiagnostic, FailureRecord, ParsedResult, RunSummary, TestCase};

/// Status glyphs used in the report
pub mod glyph {
    /// Passing test, module or run
    pub const SUCCESS: &str = "✅";
    /// Failing test, module or run
    pub const FAILURE: &str = "❌";
    /// Build section and runs without a summary line
    pub const WARNING: &str = "⚠️";
    /// Passed count and build errors heading
    pub const PASSED: &str = "🟢";
    /// Failed count and build errors heading
    pub const FAILED: &str = "🔴";
    /// Ignored count
    pub const IGNORED: &str = "⚪";
    /// Measured count
    pub const MEASURED: &str = "🔵";
}

const FENCE: &str = "```";

/// Tests sharing a module prefix, in first-seen order
#[derive(Debug, PartialEq, Eq)]
pub struct ModuleGroup<'a> {
    /// Module name (prefix before the first `::`)
    pub name: &'a str,
    /// Tests in log order
    pub tests: Vec<&'a TestCase>,
}

impl ModuleGroup<'_> {
    /// Check if any test in the group failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.tests.iter().any(|t| t.failed())
    }
}

/// Group tests by module, keeping the order in which modules first appear
#[must_use]
pub fn group_by_module(tests: &[TestCase]) -> Vec<ModuleGroup<'_>> {
    let mut groups: Vec<ModuleGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for test in tests {
        let module = test.module();
        let idx = *index.entry(module).or_insert_with(|| {
            groups.push(ModuleGroup {
                name: module,
                tests: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].tests.push(test);
    }

    groups
}

/// Render the job summary for a parsed log
#[must_use]
pub fn render(result: &ParsedResult) -> String {
    let mut md = String::new();

    if !result.build.is_empty() {
        render_build(&mut md, result);
    }

    // A failed build has no meaningful test output.
    if !result.has_build_errors() {
        render_tests(&mut md, result);
    }

    md
}

fn render_build(md: &mut String, result: &ParsedResult) {
    let _ = write!(md, "# Build Results {}\n\n", glyph::WARNING);

    if !result.build.errors.is_empty() {
        let _ = write!(md, "## Build Errors {}\n\n", glyph::FAILED);
        for error in &result.build.errors {
            render_build_error(md, error);
        }
    }

    if !result.build.warnings.is_empty() {
        let _ = write!(md, "## Build Warnings {}\n\n", glyph::WARNING);
        for warning in &result.build.warnings {
            let _ = writeln!(md, "- {}", warning.message);
            if !warning.details.is_empty() {
                push_code_block(md, &warning.details);
                md.push('\n');
            }
        }
        md.push('\n');
    }
}

fn render_build_error(md: &mut String, error: &BuildDiagnostic) {
    match &error.code {
        Some(code) => {
            let _ = write!(md, "### Error {code}\n\n");
        }
        None => md.push_str("### Error\n\n"),
    }
    let _ = write!(md, "{}\n\n", error.message);
    if !error.details.is_empty() {
        push_code_block(md, &error.details);
        md.push_str("\n\n");
    }
}

fn render_tests(md: &mut String, result: &ParsedResult) {
    let status = match &result.summary {
        Some(summary) if summary.failed > 0 => glyph::FAILURE,
        Some(_) => glyph::SUCCESS,
        None => glyph::WARNING,
    };
    let _ = write!(md, "# Test Results {status}\n\n");

    // Breakdown and failures are only shown for runs that reached a summary.
    let Some(summary) = &result.summary else {
        return;
    };

    render_summary(md, summary, result.tests.len());
    render_breakdown(md, &result.tests);

    if !result.failures.is_empty() {
        md.push_str("## Failures\n\n");
        for failure in &result.failures {
            render_failure(md, failure);
        }
    }
}

fn render_summary(md: &mut String, summary: &RunSummary, total: usize) {
    md.push_str("## Summary\n\n");
    let _ = writeln!(md, "- **Status**: {}", summary.status);
    let _ = writeln!(md, "- **Duration**: {}", summary.duration);
    let _ = writeln!(md, "- **Total Tests**: {total}");
    let _ = writeln!(md, "- **Passed**: {} {}", summary.passed, glyph::PASSED);
    if summary.failed > 0 {
        let _ = writeln!(md, "- **Failed**: {} {}", summary.failed, glyph::FAILED);
    }
    if summary.ignored > 0 {
        let _ = writeln!(md, "- **Ignored**: {} {}", summary.ignored, glyph::IGNORED);
    }
    if summary.measured > 0 {
        let _ = writeln!(md, "- **Measured**: {} {}", summary.measured, glyph::MEASURED);
    }
}

fn render_breakdown(md: &mut String, tests: &[TestCase]) {
    md.push_str("\n## Test Breakdown\n\n");

    for group in group_by_module(tests) {
        let status = if group.has_failures() {
            glyph::FAILURE
        } else {
            glyph::SUCCESS
        };

        md.push_str("<details>\n");
        let _ = write!(
            md,
            "<summary>{status} {} ({} tests)</summary>\n\n",
            group.name,
            group.tests.len()
        );
        for test in &group.tests {
            let icon = if test.passed() {
                glyph::SUCCESS
            } else {
                glyph::FAILURE
            };
            let _ = writeln!(md, "{icon} {}", test.display_name());
        }
        md.push_str("\n</details>\n\n");
    }
}

fn render_failure(md: &mut String, failure: &FailureRecord) {
    let _ = write!(md, "### {}\n\n", failure.test_name);
    push_code_block(md, &failure.details);
    md.push_str("\n\n");
}

/// Fenced block without a trailing newline after the closing fence
fn push_code_block(md: &mut String, lines: &[String]) {
    let _ = write!(md, "{FENCE}\n{}\n{FENCE}", lines.join("\n"));
}
