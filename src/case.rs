//! Case tables: the named input/expected pairs a suite is built from.

use serde::Deserialize;

/// A single named case: an input for the unit under test and the output it
/// is expected to produce.
///
/// Cases are plain data owned by the calling suite. The runner only borrows
/// them, so a table can be declared once and reused across several runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase<I, O> {
    pub name: String,
    pub input: I,
    pub expected: O,
    /// Reason for skipping, if the case is disabled.
    #[serde(default)]
    pub skip: Option<String>,
    /// When any case in a table is marked `only`, the unmarked ones are skipped.
    #[serde(default)]
    pub only: bool,
}

impl<I, O> TestCase<I, O> {
    pub fn new(name: impl Into<String>, input: I, expected: O) -> Self {
        Self {
            name: name.into(),
            input,
            expected,
            skip: None,
            only: false,
        }
    }

    /// Marks the case as skipped with the given reason.
    pub fn skip(mut self, reason: impl Into<String>) -> Self {
        self.skip = Some(reason.into());
        self
    }

    /// Marks the case as focused.
    pub fn only(mut self) -> Self {
        self.only = true;
        self
    }
}

/// Builds a `Vec<TestCase>` from a table of `name => (input, expected)` rows.
///
/// ```
/// use param::cases;
///
/// let table = cases![
///     "basic" => ("one ", "one"),
///     "noop" => ("one", "one"),
/// ];
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[0].name, "basic");
/// ```
#[macro_export]
macro_rules! cases {
    ($($name:expr => ($input:expr, $expected:expr)),* $(,)?) => {
        vec![$($crate::TestCase::new($name, $input, $expected)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_markers() {
        let case = TestCase::new("trim", " a ", "a").skip("flaky on ci");
        assert_eq!(case.skip.as_deref(), Some("flaky on ci"));
        assert!(!case.only);

        let case = TestCase::new("trim", " a ", "a").only();
        assert!(case.only);
        assert!(case.skip.is_none());
    }

    #[test]
    fn table_macro_preserves_order() {
        let table = cases![
            "first" => (1, 2),
            "second" => (3, 4),
            "third" => (5, 6),
        ];
        let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(table[1].input, 3);
        assert_eq!(table[1].expected, 4);
    }
}
