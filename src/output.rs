//! Console output for suite runs.
//!
//! Everything is written into a termcolor [`Buffer`] first and then echoed
//! with `eprint!`, so the test harness's output capture still applies and
//! passing tests stay quiet.

use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use tracing::warn;

use crate::config::RunConfig;
use crate::report::{CaseReport, CaseStatus, Severity, SuiteReport};
use crate::reporter::Reporter;

/// Colored PASS/FAIL/SKIP lines plus a summary per suite.
///
/// Failures are always shown. PASS and SKIP lines only in verbose mode.
pub struct ConsoleReporter {
    out: Buffer,
    verbose: bool,
    echo: bool,
}

impl ConsoleReporter {
    /// A reporter that echoes to stderr.
    pub fn new(config: &RunConfig) -> Self {
        let out = if config.use_colors {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        Self {
            out,
            verbose: config.verbose,
            echo: true,
        }
    }

    /// A reporter that keeps its output; read it back with [`ConsoleReporter::output`].
    pub fn buffered(verbose: bool) -> Self {
        Self {
            out: Buffer::no_color(),
            verbose,
            echo: false,
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.out.as_slice()).into_owned()
    }

    fn label(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_case(&mut self, case: &CaseReport) -> io::Result<()> {
        match &case.status {
            CaseStatus::Passed => {
                if self.verbose {
                    self.label("PASS", Color::Green)?;
                    writeln!(self.out, ": {} ({}ms)", case.name, case.duration.as_millis())?;
                }
            }
            CaseStatus::Failed => {
                self.label("FAIL", Color::Red)?;
                writeln!(self.out, ": {}", case.name)?;
                for failure in &case.failures {
                    let prefix = match failure.severity {
                        Severity::Error => "",
                        Severity::Fatal => "fatal: ",
                        Severity::Panic => "panicked: ",
                    };
                    let mut lines = failure.message.lines();
                    let first = lines.next().unwrap_or_default();
                    writeln!(self.out, "  {}{}", prefix, first)?;
                    for line in lines {
                        writeln!(self.out, "    {}", line)?;
                    }
                }
            }
            CaseStatus::Skipped { reason } => {
                if self.verbose {
                    self.label("SKIP", Color::Yellow)?;
                    writeln!(self.out, ": {} ({})", case.name, reason)?;
                }
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &SuiteReport) -> io::Result<()> {
        let summary = report.summary();
        if !summary.has_failures() && !self.verbose {
            return Ok(());
        }
        write!(self.out, "suite `{}`: total {}, ", report.name, summary.total)?;
        self.label("passed", Color::Green)?;
        write!(self.out, " {}, ", summary.passed)?;
        self.label("failed", Color::Red)?;
        write!(self.out, " {}, ", summary.failed)?;
        self.label("skipped", Color::Yellow)?;
        writeln!(
            self.out,
            " {} in {:.2}s",
            summary.skipped,
            report.duration.as_secs_f64()
        )
    }

    fn flush(&mut self) {
        if self.echo {
            eprint!("{}", String::from_utf8_lossy(self.out.as_slice()));
            self.out.clear();
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_case_complete(&mut self, case: &CaseReport) {
        if let Err(err) = self.write_case(case) {
            warn!(case = %case.name, error = %err, "could not write case result");
        }
        self.flush();
    }

    fn on_suite_complete(&mut self, report: &SuiteReport) {
        if let Err(err) = self.write_summary(report) {
            warn!(suite = %report.name, error = %err, "could not write suite summary");
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::report::Failure;

    fn case(name: &str, status: CaseStatus, failures: Vec<Failure>) -> CaseReport {
        CaseReport {
            name: name.to_string(),
            status,
            failures,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn quiet_mode_only_shows_failures() {
        let mut reporter = ConsoleReporter::buffered(false);
        reporter.on_case_complete(&case("basic", CaseStatus::Passed, vec![]));
        reporter.on_case_complete(&case(
            "wrong",
            CaseStatus::Failed,
            vec![Failure::error("expected \"two\", got \"one\"")],
        ));
        let output = reporter.output();
        assert!(!output.contains("basic"));
        assert!(output.contains("FAIL: wrong\n  expected \"two\", got \"one\"\n"));
    }

    #[test]
    fn verbose_mode_shows_everything() {
        let mut reporter = ConsoleReporter::buffered(true);
        reporter.on_case_complete(&case("basic", CaseStatus::Passed, vec![]));
        reporter.on_case_complete(&case(
            "later",
            CaseStatus::Skipped {
                reason: "Marked 'skip': pending".into(),
            },
            vec![],
        ));
        let output = reporter.output();
        assert!(output.contains("PASS: basic (0ms)"));
        assert!(output.contains("SKIP: later (Marked 'skip': pending)"));
    }

    #[test]
    fn multiline_failures_are_indented() {
        let mut reporter = ConsoleReporter::buffered(false);
        reporter.on_case_complete(&case(
            "split",
            CaseStatus::Failed,
            vec![Failure::fatal("line one\nline two")],
        ));
        assert!(reporter
            .output()
            .contains("  fatal: line one\n    line two\n"));
    }

    #[test]
    fn summary_on_failure() {
        let mut reporter = ConsoleReporter::buffered(false);
        let report = SuiteReport {
            name: "split".into(),
            cases: vec![case("a", CaseStatus::Failed, vec![Failure::error("x")])],
            duration: Duration::ZERO,
        };
        reporter.on_suite_complete(&report);
        assert!(reporter
            .output()
            .contains("suite `split`: total 1, passed 0, failed 1, skipped 0"));
    }

    #[test]
    fn passing_suite_is_quiet_unless_verbose() {
        let report = SuiteReport {
            name: "trim".into(),
            cases: vec![case("basic", CaseStatus::Passed, vec![])],
            duration: Duration::ZERO,
        };
        let mut quiet = ConsoleReporter::buffered(false);
        quiet.on_suite_complete(&report);
        assert!(quiet.output().is_empty());

        let mut verbose = ConsoleReporter::buffered(true);
        verbose.on_suite_complete(&report);
        assert!(verbose.output().contains("suite `trim`: total 1, passed 1"));
    }

    #[test]
    fn console_reporter_follows_the_config() {
        let config = RunConfig::default().verbose(true).colors(false);
        let reporter = ConsoleReporter::new(&config);
        assert!(reporter.verbose);
        assert!(reporter.echo);

        let quiet = ConsoleReporter::new(&RunConfig::default().colors(false));
        assert!(!quiet.verbose);
    }
}
