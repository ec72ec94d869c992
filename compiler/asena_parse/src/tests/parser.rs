//! Core parser tests.
//!
//! Literals, primaries, application, binary chains, binders and statements,
//! checked through the shape of the named-field tree.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{expr_shape, parse_expr_src, parse_ok};

const A: &str = r#"(Identifier name:"a")"#;
const B: &str = r#"(Identifier name:"b")"#;
const C: &str = r#"(Identifier name:"c")"#;

fn ident(name: &str) -> String {
    format!("(Identifier name:{name:?})")
}

fn binding(name: &str) -> String {
    format!("(ConsPattern constructor:(Path segment:{name:?}))")
}

// === Literals ===

#[test]
fn test_parse_number_literals() {
    assert_eq!(expr_shape("42"), r#"(Literal value:"42")"#);
    assert_eq!(
        expr_shape("0x1Fu8"),
        r#"(Literal value:"0x1Fu8" base:"0x" digits:"1F" suffix:"u8")"#
    );
    assert_eq!(
        expr_shape("3.25f64"),
        r#"(Literal value:"3.25f64" digits:"3.25" suffix:"f64")"#
    );
    assert_eq!(expr_shape("7n"), r#"(Literal value:"7n" digits:"7" suffix:"n")"#);
    assert_eq!(
        expr_shape("0b101"),
        r#"(Literal value:"0b101" base:"0b" digits:"101")"#
    );
}

#[test]
fn test_parse_string_and_char_literals() {
    let tree = parse_ok(parse_expr_src(r#""hi\n""#));
    let lit = tree
        .child_node("statement")
        .and_then(|s| s.child_node("expression"))
        .unwrap();
    assert_eq!(lit.kind, "Literal");
    assert_eq!(lit.token_text("value"), Some(r#""hi\n""#));

    let tree = parse_ok(parse_expr_src("'x'"));
    let lit = tree
        .child_node("statement")
        .and_then(|s| s.child_node("expression"))
        .unwrap();
    assert_eq!(lit.token_text("value"), Some("'x'"));
}

// === Names and paths ===

#[test]
fn test_lone_name_is_identifier() {
    assert_eq!(expr_shape("a"), A);
}

#[test]
fn test_dotted_name_is_path() {
    assert_eq!(
        expr_shape("Nat.succ"),
        r#"(Path path:(Path segment:"Nat" segment:"succ"))"#
    );
}

#[test]
fn test_symbol_identifier() {
    assert_eq!(
        expr_shape("`+ a b"),
        format!(r#"(App callee:{} argument:{A} argument:{B})"#, ident("+"))
    );
}

// === Groups ===

#[test]
fn test_tuple_and_trailing_comma() {
    assert_eq!(
        expr_shape("(a, b,)"),
        format!(r#"(Tuple element:{A} element:{B} trailing_comma:",")"#)
    );
    assert_eq!(expr_shape("(a, b)"), format!("(Tuple element:{A} element:{B})"));
    assert_eq!(expr_shape("()"), "(Tuple)");
}

#[test]
fn test_array() {
    assert_eq!(
        expr_shape("[1, 2]"),
        r#"(Array element:(Literal value:"1") element:(Literal value:"2"))"#
    );
    assert_eq!(expr_shape("[]"), "(Array)");
}

#[test]
fn test_group_spans_lines() {
    assert_eq!(
        expr_shape("(a,\n b,\n c)"),
        format!("(Tuple element:{A} element:{B} element:{C})")
    );
}

// === Binary chains ===

#[test]
fn test_binary_is_flat_and_left_associative() {
    assert_eq!(
        expr_shape("a + b * c"),
        format!(
            r#"(Binary lhs:(Binary lhs:{A} operator:"+" rhs:{B}) operator:"*" rhs:{C})"#
        )
    );
}

#[test]
fn test_application_binds_tighter_than_operators() {
    assert_eq!(
        expr_shape("f x + y"),
        format!(
            r#"(Binary lhs:(App callee:{} argument:{}) operator:"+" rhs:{})"#,
            ident("f"),
            ident("x"),
            ident("y")
        )
    );
}

#[test]
fn test_operator_continues_on_next_line() {
    assert_eq!(
        expr_shape("a +\n  b"),
        format!(r#"(Binary lhs:{A} operator:"+" rhs:{B})"#)
    );
}

#[test]
fn test_pipe_outside_lambda_is_an_operator() {
    assert_eq!(
        expr_shape("a | b"),
        format!(r#"(Binary lhs:{A} operator:"|" rhs:{B})"#)
    );
}

// === Application ===

#[test]
fn test_application_with_trailing_block() {
    assert_eq!(
        expr_shape("f x { y }"),
        format!(
            "(App callee:{} argument:{} block:(Block statement:(ExprStmt expression:{})))",
            ident("f"),
            ident("x"),
            ident("y")
        )
    );
}

#[test]
fn test_keyword_forms_are_arguments() {
    assert_eq!(
        expr_shape("f if c then a else b"),
        format!(
            "(App callee:{} argument:(IfExpr condition:{C} then:{A} else:{B}))",
            ident("f")
        )
    );
    assert_eq!(
        expr_shape("f match x { }"),
        format!("(App callee:{} argument:(Match scrutinee:{}))", ident("f"), ident("x"))
    );
    assert_eq!(
        expr_shape("f return"),
        format!("(App callee:{} argument:(Return))", ident("f"))
    );
    assert_eq!(
        expr_shape("f x return y"),
        format!(
            "(App callee:{} argument:{} argument:(Return value:{}))",
            ident("f"),
            ident("x"),
            ident("y")
        )
    );
}

#[test]
fn test_if_argument_still_needs_its_parts() {
    assert!(parse_expr_src("f if").has_errors());
    assert!(parse_expr_src("f if c then a").has_errors());
}

#[test]
fn test_lambda_argument_needs_parentheses() {
    assert_eq!(
        expr_shape("f |x| x"),
        format!(
            r#"(Binary lhs:(Binary lhs:{} operator:"|" rhs:{}) operator:"|" rhs:{})"#,
            ident("f"),
            ident("x"),
            ident("x")
        )
    );
    assert_eq!(
        expr_shape("f (|x| x)"),
        format!(
            "(App callee:{} argument:(Tuple element:(Lambda parameter:(Parameter pattern:{}) body:{})))",
            ident("f"),
            binding("x"),
            ident("x")
        )
    );
}

// === Binders ===

#[test]
fn test_pi_is_right_associative() {
    assert_eq!(
        expr_shape("(x) -> (y) -> z"),
        format!(
            "(Pi parameter:(Parameter pattern:{}) codomain:(Pi parameter:(Parameter pattern:{}) codomain:{}))",
            binding("x"),
            binding("y"),
            ident("z")
        )
    );
}

#[test]
fn test_bare_pi() {
    assert_eq!(
        expr_shape("Nat -> Nat -> Nat"),
        format!(
            "(Pi domain:{n} codomain:(Pi domain:{n} codomain:{n}))",
            n = ident("Nat")
        )
    );
}

#[test]
fn test_sigma() {
    assert_eq!(
        expr_shape("[x: Nat] -> P x"),
        format!(
            "(Sigma parameter:(Parameter pattern:{} type:{}) codomain:(App callee:{} argument:{}))",
            binding("x"),
            ident("Nat"),
            ident("P"),
            ident("x")
        )
    );
}

#[test]
fn test_ascription() {
    assert_eq!(
        expr_shape("x : List Nat"),
        format!(
            "(Ann value:{} type:(TypeApp callee:{} argument:{}))",
            ident("x"),
            ident("List"),
            ident("Nat")
        )
    );
}

#[test]
fn test_lambda_body_extends_right() {
    assert_eq!(
        expr_shape("|x| x + 1"),
        format!(
            r#"(Lambda parameter:(Parameter pattern:{}) body:(Binary lhs:{} operator:"+" rhs:(Literal value:"1")))"#,
            binding("x"),
            ident("x")
        )
    );
}

#[test]
fn test_lambda_parameters() {
    assert_eq!(
        expr_shape("|a: Nat, b| a"),
        format!(
            "(Lambda parameter:(Parameter pattern:{} type:{}) parameter:(Parameter pattern:{}) body:{A})",
            binding("a"),
            ident("Nat"),
            binding("b")
        )
    );
    assert_eq!(expr_shape("|| 1"), r#"(Lambda body:(Literal value:"1"))"#);
}

// === Keyword forms ===

#[test]
fn test_match_arms() {
    assert_eq!(
        expr_shape("match x { Some y => y, None => 0 }"),
        format!(
            r#"(Match scrutinee:{x} arm:(Arm pattern:(ConsPattern constructor:(Path segment:"Some") pattern:{y}) body:{yv}) arm:(Arm pattern:{none} body:(Literal value:"0")))"#,
            x = ident("x"),
            y = binding("y"),
            yv = ident("y"),
            none = binding("None")
        )
    );
}

#[test]
fn test_match_arms_on_lines() {
    let shape = expr_shape("match x {\n  1 => a\n  .. => { b }\n}");
    assert_eq!(
        shape,
        format!(
            r#"(Match scrutinee:{} arm:(Arm pattern:(LiteralPattern literal:"1") body:{A}) arm:(Arm pattern:(RestPattern) body:(Block statement:(ExprStmt expression:{B}))))"#,
            ident("x")
        )
    );
}

#[test]
fn test_empty_match() {
    assert_eq!(
        expr_shape("match x {}"),
        format!("(Match scrutinee:{})", ident("x"))
    );
}

#[test]
fn test_return() {
    assert_eq!(expr_shape("return 1"), r#"(Return value:(Literal value:"1"))"#);
    assert_eq!(expr_shape("return"), "(Return)");
}

#[test]
fn test_if_expression_with_blocks() {
    assert_eq!(
        expr_shape("f (if c { a } else { b })"),
        format!(
            "(App callee:{} argument:(Tuple element:(IfExpr condition:{C} then:(Block statement:(ExprStmt expression:{A})) else:(Block statement:(ExprStmt expression:{B})))))",
            ident("f")
        )
    );
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 20_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let tree = parse_ok(parse_expr_src(&source));
    let mut deepest = 0;
    tree.walk(&mut |_, level| deepest = deepest.max(level));
    // SourceFile, then the statement, then one tuple per group.
    assert_eq!(deepest, depth + 2);
    assert!(tree.shape().contains(r#"(Tuple element:(Identifier name:"x"))"#));
}

// === Statements ===

#[test]
fn test_let_statement() {
    let tree = parse_ok(parse_expr_src("let x = f y"));
    assert_eq!(
        tree.child_node("statement").unwrap().shape(),
        format!(
            "(Let pattern:{} value:(App callee:{} argument:{}))",
            binding("x"),
            ident("f"),
            ident("y")
        )
    );
}

#[test]
fn test_ask_statement() {
    let tree = parse_ok(parse_expr_src("Some x <- read"));
    assert_eq!(
        tree.child_node("statement").unwrap().shape(),
        format!(
            r#"(Ask pattern:(ConsPattern constructor:(Path segment:"Some") pattern:{}) value:{})"#,
            binding("x"),
            ident("read")
        )
    );
}

#[test]
fn test_statements_split_on_lines_and_semicolons() {
    let tree = parse_ok(parse_expr_src("a; b\n\nc"));
    let kinds: Vec<_> = tree.children("statement").map(|s| s.kind).collect();
    assert_eq!(kinds, vec!["ExprStmt", "ExprStmt", "ExprStmt"]);
}

#[test]
fn test_shebang_is_kept() {
    let output = parse_expr_src("#!/usr/bin/env asena\na");
    let tree = parse_ok(output);
    assert_eq!(tree.token_text("shebang"), Some("#!"));
    assert_eq!(tree.children("statement").count(), 1);
}

#[test]
fn test_shebang_span_covers_the_line() {
    let source = "#!/usr/bin/env asena
a";
    let tree = parse_ok(parse_expr_src(source));
    let span = tree.child("shebang").map(asena_ir::ast::NodeChild::span).unwrap();
    assert_eq!(span, asena_ir::Span::new(0, 20));
    assert_eq!(&source[span.start as usize..span.end as usize], "#!/usr/bin/env asena");
}

// === Spans ===

#[test]
fn test_child_spans_nest_in_parents() {
    let sources = [
        "a + b * c",
        "let x = if c then a else b",
        "match f x {\n  Some (y) => y\n  .. => 0\n}",
        "g x { let y = 1\n y }",
        "(a: Nat) -> [b: Nat] -> a : Type",
        "|x, y| (x, y,)",
    ];
    for source in sources {
        let tree = parse_ok(parse_expr_src(source));
        let mut stack: Vec<asena_ir::Span> = Vec::new();
        tree.walk(&mut |node, depth| {
            stack.truncate(depth);
            if let Some(parent) = stack.last() {
                assert!(
                    parent.contains_span(node.span),
                    "{} at {:?} escapes its parent {:?} in {source:?}",
                    node.kind,
                    node.span,
                    parent
                );
            }
            stack.push(node.span);
        });
    }
}

// === Properties ===

const OPERATORS: [&str; 6] = ["+", "-", "*", "<>", "==", "&&"];

fn chain() -> impl Strategy<Value = (Vec<String>, Vec<usize>)> {
    (1usize..8).prop_flat_map(|len| {
        (
            proptest::collection::vec("v[a-z0-9]{0,3}", len),
            proptest::collection::vec(0..OPERATORS.len(), len - 1),
        )
    })
}

proptest! {
    /// Any operator chain nests to the left: every right operand is a leaf
    /// and the operators read back in source order.
    #[test]
    fn test_operator_chains_nest_left((names, ops) in chain()) {
        let mut source = names[0].clone();
        for (name, &op) in names[1..].iter().zip(&ops) {
            source.push(' ');
            source.push_str(OPERATORS[op]);
            source.push(' ');
            source.push_str(name);
        }

        let output = parse_expr_src(&source);
        prop_assert!(!output.has_errors(), "{:?}", output.errors);
        let tree = output.syntax_tree();
        let mut node = tree
            .child_node("statement")
            .and_then(|s| s.child_node("expression"))
            .unwrap();

        let mut seen = Vec::new();
        while node.kind == "Binary" {
            let rhs = node.child_node("rhs").unwrap();
            prop_assert_eq!(rhs.kind, "Identifier");
            seen.push(node.token_text("operator").unwrap().to_owned());
            node = node.child_node("lhs").unwrap();
        }
        prop_assert_eq!(node.token_text("name"), Some(names[0].as_str()));
        seen.reverse();
        let expected: Vec<String> = ops.iter().map(|&op| OPERATORS[op].to_owned()).collect();
        prop_assert_eq!(seen, expected);
    }
}
