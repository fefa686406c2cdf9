// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use expect_test::expect;

use crate::ast::{self, make, BinaryOp, HasArgList, HasExpr, HasName, HasVarType, UnaryOp};
use crate::{AstNode, HasTextName, SyntaxKind, SyntaxTreeBuilder, T};

fn demo_program() -> ast::Program {
    make::program([
        make::declare_name("demo").into(),
        make::version("1.0").into(),
        make::target(
            "fock",
            Some(make::arg_list([], [make::kwarg("cutoff_dim", make::literal("7"))])),
        )
        .into(),
        make::expression_var(
            "int",
            "n",
            make::bin_expr(make::literal("3"), BinaryOp::Add, make::literal("4")),
        )
        .into(),
        make::array_var(
            "float",
            "M",
            Some(&[2, 2]),
            vec![
                vec![make::literal("1"), make::literal("2")],
                vec![make::literal("3"), make::literal("4")],
            ],
        )
        .into(),
        make::statement(
            "Sgate",
            Some(make::arg_list([make::regref(0)], [])),
            &[0, 1],
        )
        .into(),
        make::statement("MeasureFock", None, &[2]).into(),
    ])
}

#[test]
fn make_program_text() {
    let program = demo_program();
    expect![[r#"
        name demo
        version 1.0
        target fock(cutoff_dim=7)
        int n = 3 + 4
        float array M[2, 2] =
            1, 2
            3, 4
        Sgate(q0) | [0, 1]
        MeasureFock | 2
    "#]]
    .assert_eq(&program.to_string());
}

#[test]
fn program_items_in_order() {
    let program = demo_program();
    let kinds = program
        .items()
        .map(|item| item.syntax().kind())
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::DECLARE_NAME,
            SyntaxKind::VERSION,
            SyntaxKind::TARGET,
            SyntaxKind::EXPRESSION_VAR,
            SyntaxKind::ARRAY_VAR,
            SyntaxKind::STATEMENT,
            SyntaxKind::STATEMENT,
        ]
    );
}

#[test]
fn expression_var_accessors() {
    let decl = make::expression_var("float", "alpha", make::literal("0.5"));
    assert_eq!(decl.var_type().unwrap().string(), "float");
    assert_eq!(decl.name().unwrap().string(), "alpha");
    let expr = decl.expr().unwrap();
    let literal = match expr {
        ast::Expr::Literal(literal) => literal,
        _ => unreachable!(),
    };
    assert!(matches!(
        literal.kind(),
        Some(ast::LiteralKind::FloatNumber(_))
    ));
}

#[test]
fn array_var_accessors() {
    let decl = make::array_var(
        "int",
        "A",
        Some(&[1, 3]),
        vec![vec![make::literal("1"), make::literal("2"), make::literal("3")]],
    );
    let dims = decl
        .shape()
        .unwrap()
        .dims()
        .map(|token| token.text().to_string())
        .collect::<Vec<_>>();
    assert_eq!(dims, vec!["1", "3"]);
    let rows = decl.array_val().unwrap().rows().collect::<Vec<_>>();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells().count(), 3);
}

#[test]
fn array_var_without_shape() {
    let decl = make::array_var("int", "A", None, vec![vec![make::literal("1")]]);
    assert!(decl.shape().is_none());
    assert_eq!(decl.to_string(), "int array A =\n    1");
}

#[test]
fn statement_accessors() {
    let stmt = make::statement(
        "BSgate",
        Some(make::arg_list(
            [make::literal("0.5")],
            [make::kwarg("phi", make::literal("0.1"))],
        )),
        &[2, 0],
    );
    assert_eq!(stmt.operation().unwrap().string(), "BSgate");
    assert!(stmt.measure().is_none());
    let modes = stmt
        .modes()
        .unwrap()
        .indices()
        .map(|token| token.text().to_string())
        .collect::<Vec<_>>();
    assert_eq!(modes, vec!["2", "0"]);
    let arg_list = stmt.arg_list().unwrap();
    assert_eq!(arg_list.args().count(), 1);
    let kwargs = arg_list.kwargs().collect::<Vec<_>>();
    assert_eq!(kwargs.len(), 1);
    assert_eq!(kwargs[0].name().unwrap().string(), "phi");
    assert_eq!(kwargs[0].expr().unwrap().to_string(), "0.1");
}

#[test]
fn measure_statement() {
    let stmt = make::statement("MeasureHomodyne", None, &[0]);
    assert!(stmt.operation().is_none());
    assert_eq!(stmt.measure().unwrap().string(), "MeasureHomodyne");
    assert!(stmt.arg_list().is_none());
}

#[test]
fn bin_expr_operands() {
    let expr = make::bin_expr(
        make::regref(0),
        BinaryOp::Add,
        make::bin_expr(make::literal("2"), BinaryOp::Mul, make::regref(1)),
    );
    assert_eq!(expr.to_string(), "q0 + 2 * q1");
    let bin = match expr {
        ast::Expr::BinExpr(bin) => bin,
        _ => unreachable!(),
    };
    assert_eq!(bin.op_kind(), Some(BinaryOp::Add));
    assert!(matches!(bin.lhs(), Some(ast::Expr::RegRefExpr(_))));
    assert!(matches!(bin.rhs(), Some(ast::Expr::BinExpr(_))));
}

#[test]
fn power_and_prefix() {
    let expr = make::prefix_expr(
        UnaryOp::Neg,
        make::paren_expr(make::bin_expr(
            make::literal("2"),
            BinaryOp::Pow,
            make::literal("3"),
        )),
    );
    assert_eq!(expr.to_string(), "-(2 ** 3)");
    let prefix = match expr {
        ast::Expr::PrefixExpr(prefix) => prefix,
        _ => unreachable!(),
    };
    assert_eq!(prefix.op_kind(), Some(UnaryOp::Neg));
    let inner = match prefix.expr() {
        Some(ast::Expr::ParenExpr(paren)) => paren.expr(),
        _ => None,
    };
    match inner {
        Some(ast::Expr::BinExpr(bin)) => assert_eq!(bin.op_kind(), Some(BinaryOp::Pow)),
        _ => panic!("expected a power expression"),
    }
}

#[test]
fn call_expr_function_name() {
    let expr = make::call_expr("sin", make::regref(3));
    assert_eq!(expr.to_string(), "sin(q3)");
    match expr {
        ast::Expr::CallExpr(call) => {
            assert_eq!(call.function_token().unwrap().text(), "sin");
            assert!(matches!(call.expr(), Some(ast::Expr::RegRefExpr(_))));
        }
        _ => unreachable!(),
    }
}

#[test]
fn word_kinds() {
    assert_eq!(SyntaxKind::from_word("q0"), SyntaxKind::REGREF);
    assert_eq!(SyntaxKind::from_word("q12"), SyntaxKind::REGREF);
    assert_eq!(SyntaxKind::from_word("q"), SyntaxKind::IDENT);
    assert_eq!(SyntaxKind::from_word("qa1"), SyntaxKind::IDENT);
    assert_eq!(SyntaxKind::from_word("float"), SyntaxKind::FLOAT_KW);
    assert_eq!(SyntaxKind::from_word("alpha"), SyntaxKind::IDENT);
    assert!(SyntaxKind::from_word("pi").is_keyword());
}

#[test]
fn literal_kinds() {
    assert_eq!(SyntaxKind::from_literal_text("3"), SyntaxKind::INT_NUMBER);
    assert_eq!(SyntaxKind::from_literal_text("3.0"), SyntaxKind::FLOAT_NUMBER);
    assert_eq!(SyntaxKind::from_literal_text("1e-3"), SyntaxKind::FLOAT_NUMBER);
    assert_eq!(SyntaxKind::from_literal_text("2j"), SyntaxKind::IMAG_NUMBER);
    assert_eq!(SyntaxKind::from_literal_text("\"a\""), SyntaxKind::STRING);
    assert_eq!(SyntaxKind::from_literal_text("True"), SyntaxKind::TRUE_KW);
}

#[test]
fn listener_node_cast() {
    let program = demo_program();
    let root = program.syntax().clone();
    assert!(matches!(
        ast::ListenerNode::cast(root.clone()),
        Some(ast::ListenerNode::Program(_))
    ));
    let listened = root
        .descendants()
        .filter_map(ast::ListenerNode::cast)
        .count();
    // The root plus seven items; names, args and expressions are not listened to.
    assert_eq!(listened, 8);
}

#[test]
fn tree_builder_matches_make() {
    let mut builder = SyntaxTreeBuilder::default();
    builder.start_node(SyntaxKind::PROGRAM);
    builder.start_node(SyntaxKind::DECLARE_NAME);
    builder.token(SyntaxKind::NAME_KW, "name");
    builder.token(SyntaxKind::WHITESPACE, " ");
    builder.start_node(SyntaxKind::NAME);
    builder.token(SyntaxKind::IDENT, "demo");
    builder.finish_node();
    builder.finish_node();
    builder.token(SyntaxKind::NEWLINE, "\n");
    builder.finish_node();
    let built = builder.finish();

    let made = make::program([make::declare_name("demo").into()]);
    assert_eq!(built.to_string(), made.to_string());
    assert_eq!(built.kind(), SyntaxKind::PROGRAM);
    let program = ast::Program::cast(built).unwrap();
    match program.items().next() {
        Some(ast::Item::DeclareName(decl)) => {
            assert_eq!(decl.program_name().unwrap().string(), "demo")
        }
        _ => panic!("expected a name declaration"),
    }
}

#[test]
fn punctuation_macro() {
    assert_eq!(T![**], SyntaxKind::STAR2);
    assert_eq!(T![|], SyntaxKind::PIPE);
}
