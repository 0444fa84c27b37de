//! Default assertion strategies.
//!
//! Both have the shape the runner expects, `(scope, expected, actual)`, so
//! they can be passed straight to [`crate::Runner::run`] or
//! [`crate::group_test`].

use std::fmt::Debug;

use difference::{Changeset, Difference};

use crate::scope::Scope;

/// Scalar equality: one non-fatal failure when `expected != actual`.
pub fn assert_eq<O>(scope: &mut Scope, expected: &O, actual: &O)
where
    O: PartialEq + Debug + ?Sized,
{
    if expected != actual {
        scope.fail(mismatch_message(expected, actual));
    }
}

/// Ordered-sequence equality.
///
/// A length mismatch is fatal and no element is compared. Otherwise every
/// mismatching index is reported on its own and checking continues.
pub fn assert_seq_eq<S, E>(scope: &mut Scope, expected: &S, actual: &S)
where
    S: AsRef<[E]> + ?Sized,
    E: PartialEq + Debug,
{
    let (expected, actual) = (expected.as_ref(), actual.as_ref());
    if expected.len() != actual.len() {
        scope.fatal(format!(
            "slice length mismatch: expected {} elements, got {}",
            expected.len(),
            actual.len()
        ));
    }
    for (index, (want, got)) in expected.iter().zip(actual).enumerate() {
        if want != got {
            scope.fail(format!(
                "slice contents mismatch at index {}: expected {:?}, got {:?}",
                index, want, got
            ));
        }
    }
}

fn mismatch_message<O: Debug + ?Sized>(expected: &O, actual: &O) -> String {
    let mut message = format!("expected {:?}, got {:?}", expected, actual);
    let (pretty_expected, pretty_actual) = (format!("{:#?}", expected), format!("{:#?}", actual));
    if pretty_expected.contains('\n') || pretty_actual.contains('\n') {
        message.push_str("\ndiff (-expected +actual):");
        let changeset = Changeset::new(&pretty_expected, &pretty_actual, "\n");
        for diff in &changeset.diffs {
            let (sign, text) = match diff {
                Difference::Same(text) => (' ', text),
                Difference::Rem(text) => ('-', text),
                Difference::Add(text) => ('+', text),
            };
            for line in text.lines() {
                message.push('\n');
                message.push(sign);
                message.push_str(line);
            }
        }
    }
    message
}
