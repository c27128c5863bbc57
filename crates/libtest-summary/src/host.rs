// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Host collaborators
//!
//! The pipeline only touches the outside world through three seams: where
//! the log comes from, where the rendered summary goes and how a failed job
//! is reported. Each seam is a trait so the pipeline can run against
//! in-memory doubles in tests; the implementations here target GitHub
//! Actions.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised by host I/O
#[derive(Debug, Error)]
pub enum HostError {
    /// The log file could not be read (missing, unreadable or not UTF-8)
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the log file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The summary could not be appended to the summary file
    #[error("Failed to write summary to {path}: {source}")]
    Write {
        /// Path of the summary file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The summary could not be written to stdout
    #[error("Failed to write summary to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

// ============================================================================
// Collaborator traits
// ============================================================================

/// Source of the raw test log
pub trait LogSource {
    /// Read the whole log as text
    ///
    /// # Errors
    ///
    /// Returns `HostError::Read` if the log cannot be read.
    fn read_log(&self) -> Result<String, HostError>;
}

/// Destination of the rendered markdown
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Write the summary. Called exactly once per run.
    ///
    /// # Errors
    ///
    /// Returns a `HostError` if the summary cannot be written.
    async fn write_report(&self, markdown: &str) -> Result<(), HostError>;
}

/// Reports job failure to the host
pub trait FailureSignal {
    /// Mark the job as failed with a message
    fn fail(&self, message: &str);
}

// ============================================================================
// GitHub Actions implementations
// ============================================================================

/// Reads the log from a UTF-8 file
#[derive(Debug, Clone)]
pub struct FileLogSource {
    path: PathBuf,
}

impl FileLogSource {
    /// Create a source reading `path`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the log file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileLogSource {
    fn read_log(&self) -> Result<String, HostError> {
        debug!(path = %self.path.display(), "reading test log");
        std::fs::read_to_string(&self.path).map_err(|source| HostError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

/// Appends the summary to the job summary file, or prints it to stdout
#[derive(Debug, Clone, Default)]
pub struct StepSummarySink {
    path: Option<PathBuf>,
}

impl StepSummarySink {
    /// Create a sink; `None` writes to stdout
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Get the summary file path, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn append_to_file(path: &Path, markdown: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(markdown.as_bytes()).await?;
        file.flush().await
    }

    async fn write_to_stdout(markdown: &str) -> std::io::Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(markdown.as_bytes()).await?;
        stdout.flush().await
    }
}

#[async_trait]
impl ReportSink for StepSummarySink {
    async fn write_report(&self, markdown: &str) -> Result<(), HostError> {
        match &self.path {
            Some(path) => {
                debug!(path = %path.display(), bytes = markdown.len(), "appending summary");
                Self::append_to_file(path, markdown)
                    .await
                    .map_err(|source| HostError::Write {
                        path: path.clone(),
                        source,
                    })
            }
            None => Self::write_to_stdout(markdown)
                .await
                .map_err(HostError::Stdout),
        }
    }
}

/// Emits a GitHub `::error::` workflow command and remembers the failure
///
/// The binary turns a recorded failure into a non-zero exit status.
#[derive(Debug, Default)]
pub struct ActionsFailureSignal {
    failed: AtomicBool,
}

impl ActionsFailureSignal {
    /// Create a signal with no failure recorded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a failure was signaled
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl FailureSignal for ActionsFailureSignal {
    fn fail(&self, message: &str) {
        error!(reason = message, "job failed");
        self.failed.store(true, Ordering::SeqCst);
        println!("{}", error_command(message));
    }
}

/// Format a message as a GitHub Actions `::error::` workflow command
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escape workflow command data so it stays on one line
///
/// `%` must be escaped first so the other escapes are not double-encoded.
#[must_use]
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
