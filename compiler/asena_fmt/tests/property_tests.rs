//! Property-based tests for the formatter.
//!
//! Generated expressions are written in canonical layout already, so
//! formatting must reproduce them byte for byte and the output must parse
//! back to the same tree.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use asena_fmt::format_source_file;
use asena_parse::{parse_source, DialectConfig};
use proptest::prelude::*;

const OPERATORS: [&str; 6] = ["+", "-", "*", "<>", "==", "&&"];

/// Names prefixed so they can never collide with a keyword.
fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "v[a-z0-9]{0,3}",
        "[1-9][0-9]{0,2}",
    ]
}

fn expr() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        let atom = prop_oneof![
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a}, {b})")),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(", "))),
        ];
        prop_oneof![
            atom.clone(),
            ("f[a-z]{0,2}", prop::collection::vec(atom.clone(), 1..3))
                .prop_map(|(callee, args)| format!("{callee} {}", args.join(" "))),
            (inner, 0..OPERATORS.len(), atom)
                .prop_map(|(lhs, op, rhs)| format!("{lhs} {} {rhs}", OPERATORS[op])),
        ]
    })
}

fn format(source: &str) -> String {
    let output = parse_source(source, &DialectConfig::expressions());
    assert!(!output.has_errors(), "{source:?}: {:?}", output.errors);
    format_source_file(&output.file, &output.arena, &output.interner, source)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn canonical_expressions_print_unchanged(e in expr()) {
        let source = format!("let x = {e}\n");
        prop_assert_eq!(format(&source), source);
    }

    #[test]
    fn formatted_text_parses_to_the_same_tree(e in expr()) {
        let source = format!("let  x=\t{e}");
        let formatted = format(&source);
        let before = parse_source(&source, &DialectConfig::expressions()).syntax_tree().shape();
        let after = parse_source(&formatted, &DialectConfig::expressions()).syntax_tree().shape();
        prop_assert_eq!(after, before);
        prop_assert_eq!(format(&formatted), formatted);
    }
}
