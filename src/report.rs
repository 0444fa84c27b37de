//! Outcome records for cases and suites.
//!
//! The runner produces one [`CaseReport`] per case, in table order, and wraps
//! them in a [`SuiteReport`]. Reports are plain data: reporters read them,
//! callers inspect them, and they serialize to JSON for tooling.
//!
//! # Severity
//!
//! Every [`Failure`] carries a [`Severity`]:
//! - **Error**: a mismatch; the case kept evaluating its remaining checks
//! - **Fatal**: further checks were meaningless and the case stopped early
//! - **Panic**: the unit under test or the assertion panicked
//!
//! A case passes exactly when it recorded no failure at all.
//!
//! # Failing a test
//!
//! [`SuiteReport::into_result`] turns a failing suite into a
//! [`SuiteError`] diagnostic, and [`SuiteReport::assert_passed`] panics with
//! the rendered failure details so the enclosing `#[test]` fails.

use std::time::Duration;

use serde::Serialize;

use crate::error::SuiteError;

// =============================================================================
// FAILURES
// =============================================================================

/// How a failure affects the rest of its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The case keeps evaluating its remaining checks.
    Error,
    /// The remaining checks of the case were skipped.
    Fatal,
    /// The unit under test (or the assertion) panicked.
    Panic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub message: String,
    pub severity: Severity,
}

impl Failure {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Fatal,
        }
    }

    pub fn panic(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Panic,
        }
    }
}

// =============================================================================
// CASE REPORTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    Failed,
    Skipped { reason: String },
}

/// The recorded outcome of one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub status: CaseStatus,
    pub failures: Vec<Failure>,
    pub duration: Duration,
}

impl CaseReport {
    pub(crate) fn finished(name: String, failures: Vec<Failure>, duration: Duration) -> Self {
        let status = if failures.is_empty() {
            CaseStatus::Passed
        } else {
            CaseStatus::Failed
        };
        Self {
            name,
            status,
            failures,
            duration,
        }
    }

    pub(crate) fn skipped(name: String, reason: String) -> Self {
        Self {
            name,
            status: CaseStatus::Skipped { reason },
            failures: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }

    pub fn failed(&self) -> bool {
        self.status == CaseStatus::Failed
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, CaseStatus::Skipped { .. })
    }

    /// Failures that stopped the case early.
    pub fn fatal_failures(&self) -> impl Iterator<Item = &Failure> {
        self.failures
            .iter()
            .filter(|f| f.severity != Severity::Error)
    }
}

// =============================================================================
// SUITE REPORTS
// =============================================================================

/// Pass/fail/skip counts for a suite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// The recorded outcome of a whole table of cases, in table order.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub cases: Vec<CaseReport>,
    pub duration: Duration,
}

impl SuiteReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.cases.len(),
            ..Summary::default()
        };
        for case in &self.cases {
            match case.status {
                CaseStatus::Passed => summary.passed += 1,
                CaseStatus::Failed => summary.failed += 1,
                CaseStatus::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.name == name)
    }

    pub fn failed_cases(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| c.failed())
    }

    /// Renders every failing case with its messages, one block per case.
    pub fn failure_details(&self) -> String {
        let mut out = String::new();
        for case in self.failed_cases() {
            out.push_str(&format!("FAIL: {}\n", case.name));
            for failure in &case.failures {
                let tag = match failure.severity {
                    Severity::Error => "",
                    Severity::Fatal => "[fatal] ",
                    Severity::Panic => "[panic] ",
                };
                out.push_str(&format!("  {}{}\n", tag, failure.message));
            }
        }
        out
    }

    pub fn into_result(self) -> Result<Self, SuiteError> {
        let summary = self.summary();
        if summary.has_failures() {
            return Err(SuiteError::CasesFailed {
                details: self.failure_details(),
                suite: self.name,
                failed: summary.failed,
                total: summary.total,
            });
        }
        Ok(self)
    }

    /// Panics with the failure details if any case failed.
    ///
    /// This is what makes a failing table fail the enclosing `#[test]`.
    pub fn assert_passed(&self) {
        let summary = self.summary();
        if summary.has_failures() {
            panic!(
                "{} of {} cases failed in suite `{}`\n{}",
                summary.failed,
                summary.total,
                self.name,
                self.failure_details()
            );
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
