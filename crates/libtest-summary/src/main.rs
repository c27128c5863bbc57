//! libtest-summary: CI job summaries for `cargo test` logs
//!
//! This binary reads a captured `cargo test` log, appends a markdown summary
//! to the job summary file and exits non-zero when the build or the tests
//! failed.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use libtest_summary::config::Config;
use libtest_summary::host::{ActionsFailureSignal, FileLogSource, StepSummarySink};
use libtest_summary::runner;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries workflow commands and, without a
    // summary file, the summary itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        results_file = %config.results_file.display(),
        "Starting libtest-summary..."
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let source = FileLogSource::new(&config.results_file);
    let sink = StepSummarySink::new(config.summary_file.clone());
    let signal = ActionsFailureSignal::new();

    runtime.block_on(runner::run(&source, &sink, &signal, config.parse_options()));

    Ok(if signal.has_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
