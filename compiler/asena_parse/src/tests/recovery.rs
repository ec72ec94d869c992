//! Error recovery tests.
//!
//! A failure inside one declaration or statement leaves an error node and
//! a diagnostic behind; everything after the next line break still parses.

use pretty_assertions::assert_eq;

use super::{parse_decl_src, parse_expr_src, parse_mixed_src};
use crate::{parse_bytes, parse_source, DialectConfig, FatalError, ParseErrorKind};
use asena_diagnostic::span_utils::LineOffsetTable;
use asena_diagnostic::ErrorCode;
use asena_ir::{Span, TokenTag};

fn item_kinds(output: &crate::ParseOutput) -> Vec<&'static str> {
    output
        .syntax_tree()
        .fields
        .iter()
        .filter_map(|(_, child)| match child {
            asena_ir::ast::NodeChild::Node(node) => Some(node.kind),
            asena_ir::ast::NodeChild::Token { .. } => None,
        })
        .collect()
}

#[test]
fn test_missing_let_value_at_end_of_input() {
    let output = parse_mixed_src("f = 1\nlet x = ");
    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert!(matches!(
        error.kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenTag::Eof,
            ..
        }
    ));
    assert_eq!(error.code, ErrorCode::E1002);
    assert_eq!(error.context, Some("a let statement"));
    assert_eq!(item_kinds(&output), vec!["Clause", "ErrorStmt"]);
}

#[test]
fn test_missing_let_value_before_next_declaration() {
    let output = parse_mixed_src("let x = \nf = 1");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1002);
    assert_eq!(output.errors[0].context, Some("a let statement"));
    assert_eq!(item_kinds(&output), vec!["ErrorStmt", "Clause"]);
}

#[test]
fn test_bad_declaration_does_not_hide_the_next() {
    let output = parse_decl_src("f = (1]\ng = 2");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1001);
    assert_eq!(item_kinds(&output), vec!["ErrorDecl", "Clause"]);
}

#[test]
fn test_error_node_spans_skipped_input() {
    let output = parse_decl_src("f = (1]\ng = 2");
    let tree = output.syntax_tree();
    let error = tree.child_node("declaration").unwrap();
    assert_eq!(error.kind, "ErrorDecl");
    assert_eq!(error.span, Span::new(0, 7));
}

#[test]
fn test_block_keeps_statements_after_a_bad_one() {
    let output = parse_expr_src("if c {\n  let = 1\n  g x\n}");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1008);
    let tree = output.syntax_tree();
    let block = tree
        .child_node("statement")
        .and_then(|s| s.child_node("then"))
        .unwrap();
    let kinds: Vec<_> = block.children("statement").map(|s| s.kind).collect();
    assert_eq!(kinds, vec!["ErrorStmt", "ExprStmt"]);
}

#[test]
fn test_trailing_tokens_after_statement() {
    let output = parse_expr_src("a )\nb");
    assert_eq!(output.errors.len(), 1);
    assert!(matches!(
        output.errors[0].kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenTag::RParen,
            ..
        }
    ));
    assert_eq!(item_kinds(&output), vec!["ErrorStmt", "ExprStmt"]);
}

#[test]
fn test_unclosed_block_points_at_opener() {
    let output = parse_expr_src("if c { a");
    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.code, ErrorCode::E1003);
    assert_eq!(error.opened_at, Some(Span::new(5, 6)));
}

#[test]
fn test_missing_comma_lists_expected_tokens() {
    let output = parse_expr_src("(a b c");
    let error = &output.errors[0];
    match error.kind {
        ParseErrorKind::UnexpectedToken { found, expected } => {
            assert_eq!(found, TokenTag::Eof);
            assert!(expected.contains(TokenTag::Comma));
            assert!(expected.contains(TokenTag::RParen));
        }
        other => panic!("unexpected error kind {other:?}"),
    }
    assert_eq!(error.message, "expected `)` or `,`, found end of input");
}

#[test]
fn test_methods_need_separator() {
    let output = parse_decl_src("data T {\n  A, B\n  len (self) : Nat\n}\nf = 1");
    let error = &output.errors[0];
    assert_eq!(error.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(error.code, ErrorCode::E1011);
    assert_eq!(
        output.syntax_tree().children("declaration").last().unwrap().kind,
        "Clause"
    );
}

#[test]
fn test_empty_implicit_list() {
    let output = parse_decl_src("f [] : T");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1008);
}

#[test]
fn test_unterminated_string() {
    let output = parse_expr_src("let s = \"abc\nt");
    assert_eq!(output.errors[0].kind, ParseErrorKind::UnterminatedLiteral);
    assert_eq!(output.errors[0].code, ErrorCode::E0001);
    assert_eq!(item_kinds(&output), vec!["ErrorStmt", "ExprStmt"]);
}

#[test]
fn test_unknown_character() {
    let output = parse_expr_src("a $$ \u{7f}");
    assert!(output
        .errors
        .iter()
        .any(|e| e.kind == ParseErrorKind::UnknownToken));
}

#[test]
fn test_error_context_names_construct() {
    let output = parse_decl_src("data T (");
    let error = &output.errors[0];
    assert_eq!(error.context, Some("a type declaration"));
    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.code, error.code);
}

#[test]
fn test_diagnostics_and_positions() {
    let source = "f = 1\ng = )";
    let output = parse_decl_src(source);
    assert_eq!(output.diagnostics().len(), output.errors.len());
    let table = LineOffsetTable::build(source);
    let position = output.errors[0].position(&table, source);
    assert_eq!((position.line, position.column), (2, 5));
    assert_eq!(position.offset, 10);
}

#[test]
fn test_no_accepted_forms() {
    let config = DialectConfig {
        accepts_declarations: false,
        accepts_statements: false,
        ..DialectConfig::declarations()
    };
    let output = parse_source("x\ny", &config);
    assert_eq!(output.errors.len(), 2);
    assert!(output.errors.iter().all(|e| e.code == ErrorCode::E1012));
}

#[test]
fn test_shebang_rejected_when_not_accepted() {
    let config = DialectConfig {
        accepts_shebang: false,
        ..DialectConfig::declarations()
    };
    let output = parse_source("#!/bin/asena\nf = 1", &config);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.file.shebang, None);
    assert_eq!(item_kinds(&output), vec!["Clause"]);
}

// === Encoding ===

#[test]
fn test_invalid_utf8_at_start_is_fatal() {
    let result = parse_bytes(b"\xff\xfe", &DialectConfig::default());
    assert_eq!(result.err(), Some(FatalError::InvalidEncoding));
}

#[test]
fn test_invalid_utf8_later_truncates() {
    let output = parse_bytes(b"f = 1\ng = \xff", &DialectConfig::default()).unwrap();
    let last = output.errors.last().unwrap();
    assert_eq!(last.code, ErrorCode::E0005);
    assert_eq!(last.kind, ParseErrorKind::UnknownToken);
    assert_eq!(last.span, Span::point(10));
    assert_eq!(item_kinds(&output).first(), Some(&"Clause"));
}
