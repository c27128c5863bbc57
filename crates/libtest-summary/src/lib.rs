// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! libtest-summary library
//!
//! This module exports the host layer of the libtest-summary binary for use
//! in integration tests and as a library.

pub mod config;
pub mod host;
pub mod runner;
