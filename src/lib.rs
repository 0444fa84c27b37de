//! Table-driven tests.
//!
//! Declare a table of named input/expected pairs once, then run every case
//! through the unit under test and an assertion. Each case gets its own
//! reporting [`Scope`], so a failing, fatal or panicking case never stops the
//! ones after it.
//!
//! ```
//! use param::{cases, default_group_test};
//!
//! let table = cases![
//!     "basic" => ("one ", "one"),
//!     "full width spaces" => ("\u{3000}日本語\u{3000}", "日本語"),
//! ];
//! default_group_test("trim", &table, |s| s.trim());
//! ```

pub mod assert;
pub mod case;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod report;
pub mod reporter;
pub mod runner;
pub mod scope;

pub use crate::assert::{assert_eq, assert_seq_eq};
pub use crate::case::TestCase;
pub use crate::config::RunConfig;
pub use crate::error::{ConfigError, LoadError, SuiteError};
pub use crate::loader::{load_cases, parse_cases};
pub use crate::output::ConsoleReporter;
pub use crate::report::{CaseReport, CaseStatus, Failure, Severity, SuiteReport, Summary};
pub use crate::reporter::{RecordingReporter, Reporter, SilentReporter};
pub use crate::runner::{default_group_test, group_test, slice_group_test, Runner};
pub use crate::scope::Scope;
