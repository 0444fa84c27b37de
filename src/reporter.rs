//! Observers for suite runs.
//!
//! The runner owns the pass/fail decision; a [`Reporter`] only gets told
//! about it. Implement the trait for custom output formats.

use crate::report::{CaseReport, CaseStatus, SuiteReport, Summary};

pub trait Reporter {
    /// Called before the first case of a suite.
    fn on_suite_start(&mut self, _suite: &str, _case_count: usize) {}

    /// Called before a selected case runs. Skipped cases do not get this.
    fn on_case_start(&mut self, _name: &str) {}

    /// Called once per case, in table order, skipped cases included.
    fn on_case_complete(&mut self, case: &CaseReport);

    /// Called after the last case.
    fn on_suite_complete(&mut self, _report: &SuiteReport) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_suite_start(&mut self, suite: &str, case_count: usize) {
        (**self).on_suite_start(suite, case_count)
    }

    fn on_case_start(&mut self, name: &str) {
        (**self).on_case_start(name)
    }

    fn on_case_complete(&mut self, case: &CaseReport) {
        (**self).on_case_complete(case)
    }

    fn on_suite_complete(&mut self, report: &SuiteReport) {
        (**self).on_suite_complete(report)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn on_case_complete(&mut self, _case: &CaseReport) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SuiteStart { suite: String, case_count: usize },
    CaseStart { name: String },
    CaseComplete { name: String, status: CaseStatus },
    SuiteComplete { suite: String, summary: Summary },
}

/// Keeps the sequence of events it saw.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the cases that actually ran, in the order they started.
    pub fn started(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::CaseStart { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn on_suite_start(&mut self, suite: &str, case_count: usize) {
        self.events.push(Event::SuiteStart {
            suite: suite.to_string(),
            case_count,
        });
    }

    fn on_case_start(&mut self, name: &str) {
        self.events.push(Event::CaseStart {
            name: name.to_string(),
        });
    }

    fn on_case_complete(&mut self, case: &CaseReport) {
        self.events.push(Event::CaseComplete {
            name: case.name.clone(),
            status: case.status.clone(),
        });
    }

    fn on_suite_complete(&mut self, report: &SuiteReport) {
        self.events.push(Event::SuiteComplete {
            suite: report.name.clone(),
            summary: report.summary(),
        });
    }
}
