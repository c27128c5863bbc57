// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Summary pipeline
//!
//! Reads the log, parses it, renders the markdown, writes it to the sink and
//! finally reports the verdict. Every failure is terminal and reported once
//! through the [`FailureSignal`]; the summary is always written before a
//! build or test failure is signaled.
//!
//! # Example
//!
//! ```no_run
//! use libtest_summary::host::{ActionsFailureSignal, FileLogSource, StepSummarySink};
//! use libtest_summary::runner;
//! use libtest_summary_core::ParseOptions;
//!
//! # async fn example() {
//! let source = FileLogSource::new("test-output.log");
//! let sink = StepSummarySink::new(None);
//! let signal = ActionsFailureSignal::new();
//!
//! runner::run(&source, &sink, &signal, ParseOptions::default()).await;
//! assert!(!signal.has_failed());
//! # }
//! ```

use libtest_summary_core::{Failure, ParseOptions, ParsedResult, parse_with, render};
use tracing::{error, info, warn};

use crate::host::{FailureSignal, HostError, LogSource, ReportSink};

/// Outcome of a run that reached the sink
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Everything parsed from the log
    pub result: ParsedResult,
    /// The markdown that was written
    pub markdown: String,
    /// Pass/fail verdict derived from the result
    pub verdict: Result<(), Failure>,
}

/// Read, parse, render and write the summary without signaling failures
///
/// # Errors
///
/// Returns a `HostError` if the log cannot be read or the summary cannot be
/// written.
pub async fn summarize<S, R>(
    source: &S,
    sink: &R,
    options: ParseOptions,
) -> Result<RunReport, HostError>
where
    S: LogSource + ?Sized,
    R: ReportSink + ?Sized,
{
    let content = source.read_log()?;
    info!(bytes = content.len(), "Read test log");

    let result = parse_with(&content, options);
    let markdown = render(&result);
    sink.write_report(&markdown).await?;

    info!(
        tests = result.tests.len(),
        failures = result.failures.len(),
        build_errors = result.build.errors.len(),
        build_warnings = result.build.warnings.len(),
        "Wrote test summary"
    );

    let verdict = result.verdict();
    Ok(RunReport {
        result,
        markdown,
        verdict,
    })
}

/// Run the pipeline and report any failure through `signal`
///
/// Returns the report, or `None` if reading the log or writing the summary
/// failed. At most one failure is signaled per run.
pub async fn run<S, R, F>(
    source: &S,
    sink: &R,
    signal: &F,
    options: ParseOptions,
) -> Option<RunReport>
where
    S: LogSource + ?Sized,
    R: ReportSink + ?Sized,
    F: FailureSignal + ?Sized,
{
    match summarize(source, sink, options).await {
        Ok(report) => {
            if let Err(failure) = report.verdict {
                warn!(%failure, "Test log reports a failure");
                signal.fail(&failure.to_string());
            }
            Some(report)
        }
        Err(e) => {
            error!(error = %e, "Summary run aborted");
            signal.fail(&e.to_string());
            None
        }
    }
}
