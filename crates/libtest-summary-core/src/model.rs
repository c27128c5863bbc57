//! Parsed log types
//!
//! Everything the parser extracts from a libtest console log: individual test
//! outcomes, the captured output of failing tests, the final `test result:`
//! line and any compiler diagnostics printed before the tests ran.

use std::fmt;

use crate::error::Failure;

/// Separator between path segments in a test name
pub const MODULE_SEPARATOR: &str = "::";

/// Outcome of a single test, or of the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStatus {
    /// Reported as `ok`
    Passed,
    /// Reported as `FAILED`
    Failed,
}

impl TestStatus {
    /// Map a raw libtest status token to a status
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ok" => Some(Self::Passed),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    /// The token libtest prints for this status
    #[must_use]
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Passed => "ok",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// A `test <name> ... <status>` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Full test path as printed by the runner
    pub name: String,
    /// Test outcome
    pub status: TestStatus,
}

impl TestCase {
    /// Create a test case
    #[must_use]
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status == TestStatus::Failed
    }

    /// Grouping key: the name up to the first `::`, or the whole name
    ///
    /// `parser::tests::empty` -> `parser`, `standalone` -> `standalone`
    #[must_use]
    pub fn module(&self) -> &str {
        self.name
            .split_once(MODULE_SEPARATOR)
            .map_or(self.name.as_str(), |(module, _)| module)
    }

    /// Name with the module prefix stripped
    ///
    /// `parser::tests::empty` -> `tests::empty`. A name without a separator
    /// is returned unchanged.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .split_once(MODULE_SEPARATOR)
            .map_or(self.name.as_str(), |(_, rest)| rest)
    }
}

/// Captured output of one failing test from the `failures:` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureRecord {
    /// Name from the `---- <name> stdout ----` header
    pub test_name: String,
    /// Non-blank trimmed lines following the header
    pub details: Vec<String>,
}

impl FailureRecord {
    /// Open a record with no captured output yet
    #[must_use]
    pub fn new(test_name: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            details: Vec::new(),
        }
    }
}

/// A compiler warning or error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildDiagnostic {
    /// Error code such as `E0308`, without brackets. Always `None` for warnings.
    pub code: Option<String>,
    /// Header message with any `-->` location removed
    pub message: String,
    /// Trimmed lines collected after the header
    pub details: Vec<String>,
}

impl BuildDiagnostic {
    /// Create a warning
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Create an error, optionally carrying a code
    #[must_use]
    pub fn error(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }
}

/// Diagnostics found in the build output preceding the test run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildIssues {
    /// `warning:` headers in log order
    pub warnings: Vec<BuildDiagnostic>,
    /// `error:` / `error[E..]:` headers in log order
    pub errors: Vec<BuildDiagnostic>,
}

impl BuildIssues {
    /// True when neither warnings nor errors were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// The final `test result:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Overall status reported by the runner
    pub status: TestStatus,
    /// Tests passed
    pub passed: u64,
    /// Tests failed
    pub failed: u64,
    /// Tests ignored
    pub ignored: u64,
    /// Benchmarks measured
    pub measured: u64,
    /// Tests filtered out
    pub filtered: u64,
    /// Duration text after `finished in`, e.g. `0.01s`
    pub duration: String,
}

/// Everything extracted from one log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResult {
    /// Test lines in log order
    pub tests: Vec<TestCase>,
    /// Failure output blocks in log order
    pub failures: Vec<FailureRecord>,
    /// Last summary line seen, if any
    pub summary: Option<RunSummary>,
    /// Compiler diagnostics (empty when diagnostics parsing is disabled)
    pub build: BuildIssues,
}

impl ParsedResult {
    /// Check if any build error was parsed
    #[must_use]
    pub fn has_build_errors(&self) -> bool {
        !self.build.errors.is_empty()
    }

    /// Check if the summary reports failed tests
    ///
    /// A log without a summary line is not considered failing.
    #[must_use]
    pub fn tests_failed(&self) -> bool {
        self.summary.as_ref().is_some_and(|s| s.failed > 0)
    }

    /// Get failing test cases
    #[must_use]
    pub fn failing_tests(&self) -> Vec<&TestCase> {
        self.tests.iter().filter(|t| t.failed()).collect()
    }

    /// Pass/fail verdict for the pipeline
    ///
    /// Build errors take precedence over test failures.
    ///
    /// # Errors
    ///
    /// Returns `Failure::Build` if build errors were found, otherwise
    /// `Failure::Tests` if the summary reports failed tests.
    pub fn verdict(&self) -> Result<(), Failure> {
        if self.has_build_errors() {
            Err(Failure::Build)
        } else if self.tests_failed() {
            Err(Failure::Tests)
        } else {
            Ok(())
        }
    }
}
