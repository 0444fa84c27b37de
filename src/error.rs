//! Error types.
//!
//! Running a suite never errors by itself; these cover turning a failed
//! report into a `Result`, loading case tables, and reading configuration.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SuiteError {
    #[error("{failed} of {total} cases failed in suite `{suite}`")]
    #[diagnostic(
        code(param::suite::cases_failed),
        help("run with PARAM_FILTER=<case name> to focus on a single case")
    )]
    CasesFailed {
        suite: String,
        failed: usize,
        total: usize,
        details: String,
    },
}

#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("failed to read case table {}", path.display())]
    #[diagnostic(code(param::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed case table")]
    #[diagnostic(
        code(param::load::yaml),
        help("a case table is a YAML list of {{name, input, expected}} mappings")
    )]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("invalid case filter `{pattern}`")]
    #[diagnostic(code(param::config::filter))]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
