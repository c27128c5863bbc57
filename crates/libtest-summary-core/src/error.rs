// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for libtest-summary-core

use thiserror::Error;

/// Reasons a parsed log fails the pipeline job
///
/// Parsing and rendering never fail; these are the only failures the core
/// derives from a log, and they are reported after the summary is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    /// At least one compiler error was found in the log
    #[error("Build failed with errors")]
    Build,

    /// The run summary reports one or more failed tests
    #[error("Tests failed")]
    Tests,
}
