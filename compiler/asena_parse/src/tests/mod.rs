//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `parser`: expressions, statements and literals in the expression dialect
//! - `ambiguity`: the places where the same tokens admit two derivations
//! - `declarations`: top-level declarations and type bodies
//! - `recovery`: error nodes, diagnostics and resynchronization

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod declarations;
mod parser;
mod recovery;

use asena_ir::ast::SyntaxNode;

use crate::{parse_source, DialectConfig, ParseOutput};

/// Statements and expressions only.
fn parse_expr_src(source: &str) -> ParseOutput {
    parse_source(source, &DialectConfig::expressions())
}

/// Declarations only.
fn parse_decl_src(source: &str) -> ParseOutput {
    parse_source(source, &DialectConfig::declarations())
}

/// Declarations and statements mixed at top level.
fn parse_mixed_src(source: &str) -> ParseOutput {
    let config = DialectConfig {
        accepts_statements: true,
        ..DialectConfig::declarations()
    };
    parse_source(source, &config)
}

/// Parse and fail the test on any error.
fn parse_ok(output: ParseOutput) -> SyntaxNode {
    assert!(
        !output.has_errors(),
        "unexpected errors: {:#?}",
        output.errors
    );
    output.syntax_tree()
}

/// Shape of the only top-level item.
fn single_item(tree: &SyntaxNode) -> String {
    assert_eq!(tree.fields.len(), 1, "expected one item in {}", tree.shape());
    match &tree.fields[0].1 {
        asena_ir::ast::NodeChild::Node(node) => node.shape(),
        asena_ir::ast::NodeChild::Token { text, .. } => panic!("item is a token: {text}"),
    }
}

/// Shape of the expression of a lone expression statement.
fn expr_shape(source: &str) -> String {
    let tree = parse_ok(parse_expr_src(source));
    let stmt = tree.child_node("statement").unwrap();
    assert_eq!(stmt.kind, "ExprStmt", "not an expression statement: {}", stmt.shape());
    stmt.child_node("expression").unwrap().shape()
}
