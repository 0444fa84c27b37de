//! The parameterized test runner.
//!
//! Drives a table of [`TestCase`]s through the unit under test and an
//! assertion, one isolated [`Scope`] per case.
//!
//! # Execution model
//!
//! For every case, in table order:
//! 1. **Selection**: `only` markers, `skip` reasons and the configured name
//!    filter decide whether the case runs at all (see [`RunConfig::skip_reason`]).
//! 2. **Transform**: the case input is passed to the unit under test.
//! 3. **Assertion**: the expected and actual outputs are handed to the
//!    assertion together with the case scope.
//! 4. **Reporting**: the case outcome is recorded and passed to the
//!    [`Reporter`].
//!
//! Failures, fatal failures and panics stay inside the case that raised them,
//! so every case of a table is always evaluated.
//!
//! # Public API
//!
//! - [`Runner::run`]: run a table and return the [`SuiteReport`]
//! - [`group_test`]: run with any assertion, fail the calling test on failure
//! - [`default_group_test`]: the same with scalar equality
//! - [`slice_group_test`]: the same with ordered-sequence equality

use std::fmt::Debug;
use std::time::Instant;

use tracing::{debug, debug_span, warn};

use crate::assert::{assert_eq, assert_seq_eq};
use crate::case::TestCase;
use crate::config::RunConfig;
use crate::error::ConfigError;
use crate::output::ConsoleReporter;
use crate::report::{CaseReport, SuiteReport};
use crate::reporter::Reporter;
use crate::scope::Scope;

// =============================================================================
// RUNNER
// =============================================================================

/// Runs case tables with a fixed configuration and reporter.
pub struct Runner<R = ConsoleReporter> {
    config: RunConfig,
    reporter: R,
}

impl Runner<ConsoleReporter> {
    /// A runner reporting to stderr.
    pub fn new(config: RunConfig) -> Self {
        let reporter = ConsoleReporter::new(&config);
        Self { config, reporter }
    }
}

impl<R: Reporter> Runner<R> {
    pub fn with_reporter(config: RunConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Runs every selected case of `cases`, in order.
    ///
    /// Never panics on a failing case; inspect the returned report, or call
    /// [`SuiteReport::assert_passed`] on it.
    pub fn run<I, O, T, A>(
        &mut self,
        suite: &str,
        cases: &[TestCase<I, O>],
        transform: T,
        assert: A,
    ) -> SuiteReport
    where
        T: Fn(&I) -> O,
        A: Fn(&mut Scope, &O, &O),
    {
        let _span = debug_span!("suite", name = suite).entered();
        let started = Instant::now();
        self.reporter.on_suite_start(suite, cases.len());

        let has_only = cases.iter().any(|case| case.only);
        let mut reports = Vec::with_capacity(cases.len());
        for case in cases {
            let report = match self.config.skip_reason(case, has_only) {
                Some(reason) => {
                    debug!(case = %case.name, %reason, "skipped");
                    CaseReport::skipped(case.name.clone(), reason)
                }
                None => {
                    self.reporter.on_case_start(&case.name);
                    run_case(case, &transform, &assert)
                }
            };
            self.reporter.on_case_complete(&report);
            reports.push(report);
        }

        let report = SuiteReport {
            name: suite.to_string(),
            cases: reports,
            duration: started.elapsed(),
        };
        self.reporter.on_suite_complete(&report);
        report
    }
}

// =============================================================================
// CASE EXECUTION
// =============================================================================

/// Runs one selected case under a fresh scope.
fn run_case<I, O, T, A>(case: &TestCase<I, O>, transform: &T, assert: &A) -> CaseReport
where
    T: Fn(&I) -> O,
    A: Fn(&mut Scope, &O, &O),
{
    let _span = debug_span!("case", name = %case.name).entered();
    let started = Instant::now();
    let mut scope = Scope::new(case.name.as_str());
    scope.capture(|scope| {
        let actual = transform(&case.input);
        assert(scope, &case.expected, &actual);
    });

    let failures = scope.into_failures();
    if failures.is_empty() {
        debug!("passed");
    }
    for failure in &failures {
        warn!(severity = ?failure.severity, detail = %failure.message, "failed");
    }
    CaseReport::finished(case.name.clone(), failures, started.elapsed())
}

// =============================================================================
// CONVENIENCE API
// =============================================================================

/// Builds a console runner, panicking with the rendered diagnostic when the
/// configuration is invalid.
fn console_runner(config: Result<RunConfig, ConfigError>) -> Runner {
    match config {
        Ok(config) => Runner::new(config),
        Err(err) => panic!("{:?}", miette::Report::new(err)),
    }
}

/// Runs `cases` with a custom assertion and fails the calling test if any
/// case failed.
pub fn group_test<I, O, T, A>(
    suite: &str,
    cases: &[TestCase<I, O>],
    transform: T,
    assert: A,
) -> SuiteReport
where
    T: Fn(&I) -> O,
    A: Fn(&mut Scope, &O, &O),
{
    let report = console_runner(RunConfig::from_env()).run(suite, cases, transform, assert);
    report.assert_passed();
    report
}

/// [`group_test`] with scalar equality.
pub fn default_group_test<I, O, T>(
    suite: &str,
    cases: &[TestCase<I, O>],
    transform: T,
) -> SuiteReport
where
    T: Fn(&I) -> O,
    O: PartialEq + Debug,
{
    group_test(suite, cases, transform, assert_eq::<O>)
}

/// [`group_test`] with ordered-sequence equality.
pub fn slice_group_test<I, E, T>(
    suite: &str,
    cases: &[TestCase<I, Vec<E>>],
    transform: T,
) -> SuiteReport
where
    T: Fn(&I) -> Vec<E>,
    E: PartialEq + Debug,
{
    group_test(suite, cases, transform, assert_seq_eq::<Vec<E>, E>)
}
