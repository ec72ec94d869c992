//! Declaration parsing tests.

use pretty_assertions::assert_eq;

use super::{parse_decl_src, parse_mixed_src, parse_ok, single_item};
use asena_ir::Span;

fn ident(name: &str) -> String {
    format!("(Identifier name:{name:?})")
}

fn path(name: &str) -> String {
    format!("(Path segment:{name:?})")
}

fn binding(name: &str) -> String {
    format!("(ConsPattern constructor:{})", path(name))
}

// === Simple forms ===

#[test]
fn test_use() {
    let tree = parse_ok(parse_decl_src("use Data.List"));
    assert_eq!(
        single_item(&tree),
        r#"(Using path:(Path segment:"Data" segment:"List"))"#
    );
}

#[test]
fn test_command() {
    let tree = parse_ok(parse_decl_src("#eval f 1"));
    assert_eq!(
        single_item(&tree),
        format!(
            r#"(Command name:{} argument:{} argument:(Literal value:"1"))"#,
            path("eval"),
            ident("f")
        )
    );
}

#[test]
fn test_clause() {
    let tree = parse_ok(parse_decl_src("add x y = x + y"));
    assert_eq!(
        single_item(&tree),
        format!(
            r#"(Clause name:{} pattern:{} pattern:{} value:(Binary lhs:{} operator:"+" rhs:{}))"#,
            path("add"),
            binding("x"),
            binding("y"),
            ident("x"),
            ident("y")
        )
    );
}

#[test]
fn test_clause_with_literal_and_rest_patterns() {
    let tree = parse_ok(parse_decl_src("f 0 .. (Some x) = x"));
    assert_eq!(
        single_item(&tree),
        format!(
            r#"(Clause name:{} pattern:(LiteralPattern literal:"0") pattern:(RestPattern) pattern:(ConsPattern constructor:{} pattern:{}) value:{})"#,
            path("f"),
            path("Some"),
            binding("x"),
            ident("x")
        )
    );
}

#[test]
fn test_clause_without_value() {
    let tree = parse_ok(parse_decl_src("f x =\ng = 1"));
    let clauses: Vec<_> = tree.children("declaration").collect();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].shape(), format!("(Clause name:{} pattern:{})", path("f"), binding("x")));
    assert_eq!(clauses[1].kind, "Clause");
}

#[test]
fn test_signature_argument_lists_keep_order() {
    let tree = parse_ok(parse_decl_src("f (x) [T] (y: T) : T"));
    let sig = tree.child_node("declaration").unwrap();
    assert_eq!(sig.kind, "Signature");
    let kinds: Vec<_> = sig.children("arguments").map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec!["ExplicitArguments", "ImplicitArguments", "ExplicitArguments"]
    );
    assert_eq!(sig.child_node("type").unwrap().shape(), ident("T"));
}

#[test]
fn test_signature_with_body() {
    let tree = parse_ok(parse_decl_src("main : IO Unit {\n  line <- read\n  print line\n}"));
    let sig = tree.child_node("declaration").unwrap();
    let body = sig.child_node("value").unwrap();
    let kinds: Vec<_> = body.children("statement").map(|s| s.kind).collect();
    assert_eq!(kinds, vec!["Ask", "ExprStmt"]);
}

#[test]
fn test_empty_explicit_list_is_allowed() {
    let tree = parse_ok(parse_decl_src("unit () : Unit"));
    let sig = tree.child_node("declaration").unwrap();
    let args = sig.child_node("arguments").unwrap();
    assert_eq!(args.shape(), "(ExplicitArguments)");
}

// === Type declarations ===

#[test]
fn test_data_with_constructors_and_methods() {
    let tree = parse_ok(parse_decl_src("data Maybe { Some: T, None ; length(self) : Nat }"));
    assert_eq!(
        single_item(&tree),
        format!(
            "(DataDecl name:{} body:(Body constructor:(TypedConstructor name:{} type:{}) constructor:(FunctionConstructor name:{}) method:(Signature name:{} arguments:(ExplicitArguments parameter:(Parameter pattern:{})) type:{})))",
            path("Maybe"),
            path("Some"),
            ident("T"),
            path("None"),
            path("length"),
            binding("self"),
            ident("Nat")
        )
    );
}

#[test]
fn test_data_constructor_parameters() {
    let source = "data Pair (a) (b) {\n  MkPair(fst: a, b),\n}";
    let tree = parse_ok(parse_decl_src(source));
    let data = tree.child_node("declaration").unwrap();
    assert_eq!(data.children("arguments").count(), 2);
    let ctor = data
        .child_node("body")
        .and_then(|b| b.child_node("constructor"))
        .unwrap();
    assert_eq!(
        ctor.shape(),
        format!(
            r#"(FunctionConstructor name:{} parameter:(NamedParameter name:"fst" type:{}) parameter:{})"#,
            path("MkPair"),
            ident("a"),
            ident("b")
        )
    );
}

#[test]
fn test_data_constructors_on_lines() {
    let source = "data Bool {\n  True,\n  False\n}";
    let tree = parse_ok(parse_decl_src(source));
    let body = tree
        .child_node("declaration")
        .and_then(|d| d.child_node("body"))
        .unwrap();
    assert_eq!(body.children("constructor").count(), 2);
    assert_eq!(body.children("method").count(), 0);
}

#[test]
fn test_class_with_only_methods() {
    let source = "public class Functor [f] : Type {\n  ;\n  map (g) : f\n  pure (x) : f\n}";
    let tree = parse_ok(parse_decl_src(source));
    let class = tree.child_node("declaration").unwrap();
    assert_eq!(class.kind, "ClassDecl");
    assert_eq!(class.token_text("visibility"), Some("public"));
    assert_eq!(
        class.child_node("arguments").unwrap().kind,
        "ImplicitArguments"
    );
    assert_eq!(class.child_node("type").unwrap().shape(), ident("Type"));
    let body = class.child_node("body").unwrap();
    assert_eq!(body.children("constructor").count(), 0);
    let names: Vec<_> = body
        .children("method")
        .map(|m| m.child_node("name").unwrap().shape())
        .collect();
    assert_eq!(names, vec![path("map"), path("pure")]);
}

#[test]
fn test_trait_methods() {
    let source = "trait Show {\n  show (self) : String\n  debug (self) : String\n}";
    let tree = parse_ok(parse_decl_src(source));
    let tr = tree.child_node("declaration").unwrap();
    assert_eq!(tr.kind, "TraitDecl");
    assert_eq!(
        tr.child_node("body").unwrap().children("method").count(),
        2
    );
}

#[test]
fn test_type_declaration_without_body() {
    let tree = parse_ok(parse_decl_src("sealed data Void"));
    assert_eq!(
        single_item(&tree),
        format!(r#"(DataDecl visibility:"sealed" name:{})"#, path("Void"))
    );
}

// === Docs and attributes ===

#[test]
fn test_doc_strings_and_attributes() {
    let source = "//! Adds.\n//! Twice.\n@inline\n@deprecated(\"old\", 2)\nadd x y = x";
    let tree = parse_ok(parse_decl_src(source));
    let clause = tree.child_node("declaration").unwrap();
    let docs: Vec<_> = clause
        .fields
        .iter()
        .filter(|(f, _)| *f == "doc")
        .map(|(_, c)| match c {
            asena_ir::ast::NodeChild::Token { text, .. } => text.clone(),
            asena_ir::ast::NodeChild::Node(n) => n.shape(),
        })
        .collect();
    assert_eq!(docs, vec!["Adds.".to_owned(), "Twice.".to_owned()]);
    assert_eq!(clause.span.start, 0);

    let attrs: Vec<_> = clause.children("attribute").collect();
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].shape(), format!("(Attribute path:{})", path("inline")));
    assert_eq!(attrs[1].child_node("path").unwrap().shape(), path("deprecated"));
    assert_eq!(attrs[1].children("argument").count(), 2);
}

#[test]
fn test_plain_comments_are_not_docs() {
    let tree = parse_ok(parse_decl_src("// note\nf = 1"));
    let clause = tree.child_node("declaration").unwrap();
    assert_eq!(clause.child("doc"), None);
}

#[test]
fn test_docs_attach_to_the_next_declaration_only() {
    let tree = parse_ok(parse_decl_src("f = 1\n//! About g.\ng = 2"));
    let decls: Vec<_> = tree.children("declaration").collect();
    assert_eq!(decls[0].token_text("doc"), None);
    assert_eq!(decls[1].token_text("doc"), Some("About g."));
}

#[test]
fn test_expression_dialect_keeps_docs_out_of_the_tree() {
    let output = super::parse_expr_src("//! doc\nx");
    assert!(!output.has_errors());
    assert_eq!(output.comments.len(), 1);
    let tree = output.syntax_tree();
    assert_eq!(tree.child_node("statement").unwrap().token_text("doc"), None);
}

// === Dialects ===

#[test]
fn test_mixed_dialect_sorts_items() {
    let tree = parse_ok(parse_mixed_src("use Prelude\nf x = x\nprint (f 1)\nlet y = 2"));
    let kinds: Vec<_> = tree
        .fields
        .iter()
        .map(|(field, _)| *field)
        .collect();
    assert_eq!(
        kinds,
        vec!["declaration", "declaration", "statement", "statement"]
    );
}

#[test]
fn test_doc_comment_does_not_make_a_statement_a_declaration() {
    let output = parse_mixed_src("//! doc\nlet x = 1\n//! more\nprint x");
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_eq!(output.comments.len(), 2);
    let tree = output.syntax_tree();
    let kinds: Vec<_> = tree.children("statement").map(|n| n.kind).collect();
    assert_eq!(kinds, vec!["Let", "ExprStmt"]);
    assert!(tree.child_node("declaration").is_none());
}

#[test]
fn test_mixed_dialect_documented_clause_keeps_docs() {
    let tree = parse_ok(parse_mixed_src("//! Identity.\nf x = x"));
    let clause = tree.child_node("declaration").unwrap();
    assert_eq!(clause.kind, "Clause");
    assert_eq!(clause.token_text("doc"), Some("Identity."));
}

#[test]
fn test_declaration_dialect_rejects_statements() {
    let output = parse_decl_src("let x = 1");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, asena_diagnostic::ErrorCode::E1012);
}

#[test]
fn test_file_span_covers_source() {
    let source = "f = 1\n";
    let output = parse_decl_src(source);
    assert_eq!(output.file.span, Span::new(0, 6));
}
