// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for libtest-summary-core
//!
//! These tests parse and render real `cargo test` console logs.

use libtest_summary_core::{
    Failure, ParseOptions, TestStatus, parse, parse_with, render, render::glyph,
};
use similar_asserts::assert_eq;
use std::path::Path;

/// Get the fixtures directory for test data
fn fixtures_dir() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
}

#[test]
fn test_passing_log() {
    let result = parse(&read_fixture("passing.log"));

    assert_eq!(result.tests.len(), 5);
    assert!(result.tests.iter().all(|t| t.passed()));
    assert!(result.failures.is_empty());
    assert!(result.build.is_empty());

    let summary = result.summary.as_ref().expect("Should have summary");
    assert_eq!(summary.status, TestStatus::Passed);
    assert_eq!(summary.passed, 5);
    assert_eq!(summary.duration, "0.01s");
    assert_eq!(result.verdict(), Ok(()));

    let md = render(&result);
    assert!(md.starts_with("# Test Results ✅\n\n## Summary\n\n"));
    assert!(md.contains("- **Total Tests**: 5\n"));
    assert!(!md.contains("**Failed**"));
    assert!(md.contains(
        "<summary>✅ ops (2 tests)</summary>\n\n✅ tests::adds\n✅ tests::subtracts\n"
    ));
    assert!(md.contains("<summary>✅ parse (2 tests)</summary>"));
    assert!(md.contains("<summary>✅ smoke (1 tests)</summary>\n\n✅ smoke\n"));
    assert!(!md.contains("## Failures"));

    // Modules appear in the order they were first seen.
    let ops = md.find("✅ ops").expect("ops group");
    let parse_group = md.find("✅ parse").expect("parse group");
    let smoke = md.find("✅ smoke (").expect("smoke group");
    assert!(ops < parse_group && parse_group < smoke);
}

#[test]
fn test_failing_log() {
    let result = parse(&read_fixture("failing.log"));

    // The `... ignored` line is not a recognized outcome.
    assert_eq!(result.tests.len(), 3);
    assert_eq!(result.failing_tests().len(), 1);
    assert_eq!(result.failing_tests()[0].name, "ops::tests::divides");

    assert_eq!(result.failures.len(), 1);
    let failure = &result.failures[0];
    assert_eq!(failure.test_name, "ops::tests::divides");
    assert_eq!(
        failure.details,
        vec![
            "thread 'ops::tests::divides' panicked at src/ops.rs:42:9:",
            "assertion `left == right` failed",
            "left: 3",
            "right: 2",
            "note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace",
            "ops::tests::divides",
        ]
    );

    let summary = result.summary.as_ref().expect("Should have summary");
    assert_eq!(summary.status, TestStatus::Failed);
    assert_eq!(
        (summary.passed, summary.failed, summary.ignored),
        (2, 1, 1)
    );
    assert_eq!(result.verdict(), Err(Failure::Tests));

    let md = render(&result);
    assert!(md.starts_with(&format!("# Test Results {}\n\n", glyph::FAILURE)));
    assert!(md.contains("- **Failed**: 1 🔴\n"));
    assert!(md.contains("- **Ignored**: 1 ⚪\n"));
    assert!(md.contains("<summary>❌ ops (2 tests)</summary>\n\n✅ tests::adds\n❌ tests::divides\n"));
    assert!(md.contains("## Failures\n\n### ops::tests::divides\n\n```\nthread 'ops::tests::divides'"));
}

#[test]
fn test_cargo_error_trailer_is_a_build_error() {
    // cargo prints this to stderr after failing tests; when both streams are
    // captured it is indistinguishable from a compiler error.
    let log = format!(
        "{}error: test failed, to rerun pass `--lib`\n",
        read_fixture("failing.log")
    );
    let result = parse(&log);
    assert_eq!(result.build.errors.len(), 1);
    assert_eq!(result.verdict(), Err(Failure::Build));
    assert!(!render(&result).contains("# Test Results"));
}

#[test]
fn test_build_error_log() {
    let result = parse(&read_fixture("build_error.log"));

    assert_eq!(result.build.warnings.len(), 2);
    assert_eq!(result.build.warnings[0].message, "unused import: `std::fmt`");
    assert_eq!(
        result.build.warnings[1].message,
        "`calc` (lib test) generated 1 warning"
    );

    assert_eq!(result.build.errors.len(), 2);
    let mismatched = &result.build.errors[0];
    assert_eq!(mismatched.code.as_deref(), Some("E0308"));
    assert_eq!(mismatched.message, "mismatched types");
    assert_eq!(mismatched.details.first().map(String::as_str), Some("--> src/ops.rs:12:5"));
    assert_eq!(
        mismatched.details.last().map(String::as_str),
        Some("For more information about this error, try `rustc --explain E0308`.")
    );
    assert_eq!(result.build.errors[1].code, None);
    assert!(result.build.errors[1].details.is_empty());

    assert_eq!(result.verdict(), Err(Failure::Build));

    let md = render(&result);
    assert!(md.starts_with("# Build Results ⚠️\n\n## Build Errors 🔴\n\n### Error E0308\n\nmismatched types\n\n```\n--> src/ops.rs:12:5\n"));
    assert!(md.contains("### Error\n\ncould not compile `calc`"));
    assert!(md.contains("## Build Warnings ⚠️\n\n- unused import: `std::fmt`\n"));
    assert!(!md.contains("# Test Results"));
}

#[test]
fn test_build_warnings_log() {
    let result = parse(&read_fixture("build_warnings.log"));

    assert_eq!(result.build.warnings.len(), 2);
    assert!(result.build.errors.is_empty());
    assert_eq!(result.tests.len(), 2);
    assert_eq!(result.summary.as_ref().map(|s| s.filtered), Some(3));
    assert_eq!(result.verdict(), Ok(()));

    let md = render(&result);
    assert!(md.starts_with("# Build Results ⚠️\n\n## Build Warnings ⚠️\n\n- unused variable: `scale`\n"));
    assert!(md.contains("# Test Results ✅\n\n"));
}

#[test]
fn test_tests_only_ignores_build_output() {
    let result = parse_with(&read_fixture("build_error.log"), ParseOptions::tests_only());
    assert!(result.build.is_empty());
    assert_eq!(result.verdict(), Ok(()));
    assert_eq!(render(&result), "# Test Results ⚠️\n\n");
}

#[test]
fn test_rendering_is_deterministic() {
    for fixture in ["passing.log", "failing.log", "build_error.log", "build_warnings.log"] {
        let result = parse(&read_fixture(fixture));
        assert_eq!(render(&result), render(&result), "{fixture}");
    }
}
