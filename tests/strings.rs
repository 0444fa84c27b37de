//! String helpers from the standard library, checked through case tables.

mod common;

use param::{cases, default_group_test, load_cases, slice_group_test, TestCase};
use unicode_segmentation::UnicodeSegmentation;

fn trim_table() -> Vec<TestCase<&'static str, &'static str>> {
    cases![
        "basic" => ("one ", "one"),
        "noop" => ("one", "one"),
        "empty" => ("", ""),
        "sentence" => ("the quick brown fox", "the quick brown fox"),
        "sentence margin" => ("   the quick brown fox     ", "the quick brown fox"),
        "full width spaces" => ("\u{3000}日本語\u{3000}", "日本語"),
    ]
}

#[test]
fn trim_whitespace() {
    common::init_tracing();
    let report = default_group_test("trim_whitespace", &trim_table(), |s| s.trim());
    assert_eq!(report.summary().passed, 6);
}

#[test]
fn trim_explicit_set() {
    common::init_tracing();
    default_group_test("trim_explicit_set", &trim_table(), |s| {
        s.trim_matches(&[' ', '\u{3000}'][..])
    });
}

struct Split {
    s: &'static str,
    sep: &'static str,
}

/// Splits on `sep`; an empty separator splits into grapheme clusters.
fn split(input: &Split) -> Vec<&'static str> {
    if input.sep.is_empty() {
        input.s.graphemes(true).collect()
    } else {
        input.s.split(input.sep).collect()
    }
}

#[test]
fn split_by_separator() {
    common::init_tracing();
    let table = cases![
        "simple" => (Split { s: "one two three", sep: " " }, vec!["one", "two", "three"]),
        "single" => (Split { s: "one", sep: " " }, vec!["one"]),
        "empty separator" => (Split { s: "one", sep: "" }, vec!["o", "n", "e"]),
        "trailing separator" => (Split { s: "a,b,", sep: "," }, vec!["a", "b", ""]),
        "combining marks" => (Split { s: "e\u{301}a", sep: "" }, vec!["e\u{301}", "a"]),
    ];
    let report = slice_group_test("split_by_separator", &table, split);
    assert_eq!(report.summary().total, 5);
}

#[test]
fn trim_table_from_yaml() {
    common::init_tracing();
    let table: Vec<TestCase<String, String>> =
        load_cases(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/tables/trim.yaml")).unwrap();
    assert_eq!(table.len(), 6);
    default_group_test("trim_table_from_yaml", &table, |s| s.trim().to_string());
}
