//! Configuration for the libtest-summary binary
//!
//! Every option can also be supplied through the environment, so the binary
//! works unchanged as a GitHub Actions step: the `results-file` input arrives
//! as `INPUT_RESULTS-FILE` and the job summary path as `GITHUB_STEP_SUMMARY`.

use std::path::PathBuf;

use clap::Parser;
use libtest_summary_core::ParseOptions;

/// Summarize a `cargo test` log as a markdown job summary
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "libtest-summary")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the captured `cargo test` output
    #[arg(short, long, env = "INPUT_RESULTS-FILE")]
    pub results_file: PathBuf,

    /// File the markdown summary is appended to
    ///
    /// Defaults to the job summary file provided by GitHub Actions. When
    /// neither is set the summary is written to stdout.
    #[arg(short, long, env = "GITHUB_STEP_SUMMARY")]
    pub summary_file: Option<PathBuf>,

    /// Only report test results, ignoring compiler warnings and errors
    #[arg(long, default_value = "false")]
    pub no_build_diagnostics: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with a summary written
    /// to stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Parser options selected by the flags
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        if self.no_build_diagnostics {
            ParseOptions::tests_only()
        } else {
            ParseOptions::default()
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
