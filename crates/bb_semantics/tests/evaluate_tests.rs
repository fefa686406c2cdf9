// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use num_complex::Complex64;

use bb_semantics::evaluate::evaluate_expr;
use bb_semantics::{Evaluated, Number, SemanticErrorKind, SymExpr, Value, VariableTable};
use bb_syntax::ast::{make, BinaryOp, UnaryOp};

fn eval(expr: bb_syntax::ast::Expr) -> Evaluated {
    evaluate_expr(&expr, &VariableTable::new()).unwrap()
}

fn concrete(expr: bb_syntax::ast::Expr) -> Value {
    match eval(expr) {
        Evaluated::Concrete(value) => value,
        Evaluated::Symbolic(sym) => panic!("expected a concrete value, got {sym}"),
    }
}

#[test]
fn test_literals() {
    assert_eq!(concrete(make::literal("42")), Value::Int(42));
    assert_eq!(concrete(make::literal("0.5")), Value::Float(0.5));
    assert_eq!(concrete(make::literal("1e-3")), Value::Float(1e-3));
    assert_eq!(
        concrete(make::literal("2j")),
        Value::Complex(Complex64::new(0.0, 2.0))
    );
    assert_eq!(
        concrete(make::string_literal("fock")),
        Value::Str("fock".to_string())
    );
    assert_eq!(concrete(make::literal("True")), Value::Bool(true));
    assert_eq!(concrete(make::literal("False")), Value::Bool(false));
    assert_eq!(concrete(make::literal("pi")), Value::Float(std::f64::consts::PI));
}

#[test]
fn test_integer_arithmetic_stays_integer() {
    let expr = make::bin_expr(make::literal("3"), BinaryOp::Add, make::literal("4"));
    assert_eq!(concrete(expr), Value::Int(7));
    let expr = make::bin_expr(make::literal("2"), BinaryOp::Pow, make::literal("10"));
    assert_eq!(concrete(expr), Value::Int(1024));
}

#[test]
fn test_division_is_true_division() {
    let expr = make::bin_expr(make::literal("7"), BinaryOp::Div, make::literal("2"));
    assert_eq!(concrete(expr), Value::Float(3.5));
}

#[test]
fn test_complex_arithmetic() {
    // 1 + 2j
    let expr = make::bin_expr(make::literal("1"), BinaryOp::Add, make::literal("2j"));
    assert_eq!(concrete(expr), Value::Complex(Complex64::new(1.0, 2.0)));
}

#[test]
fn test_precedence_follows_tree() {
    // -(2 ** 3) + 1
    let expr = make::bin_expr(
        make::prefix_expr(
            UnaryOp::Neg,
            make::paren_expr(make::bin_expr(
                make::literal("2"),
                BinaryOp::Pow,
                make::literal("3"),
            )),
        ),
        BinaryOp::Add,
        make::literal("1"),
    );
    assert_eq!(concrete(expr), Value::Int(-7));
}

#[test]
fn test_math_functions() {
    assert_eq!(
        concrete(make::call_expr("cos", make::literal("0"))),
        Value::Float(1.0)
    );
    let expr = make::call_expr(
        "sqrt",
        make::prefix_expr(UnaryOp::Neg, make::literal("1j")),
    );
    match concrete(expr) {
        Value::Complex(z) => {
            let expected = Complex64::new(0.7071067811865476, -0.7071067811865476);
            assert!((z - expected).norm() < 1e-12);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_unknown_function() {
    let expr = make::call_expr("cot", make::literal("1"));
    let err = evaluate_expr(&expr, &VariableTable::new()).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);
    assert!(err.message().contains("cot"));
}

#[test]
fn test_regref_is_symbolic() {
    assert_eq!(eval(make::regref(3)), Evaluated::Symbolic(SymExpr::RegRef(3)));
}

#[test]
fn test_symbolic_operand_makes_result_symbolic() {
    // q0 + 2 * q1, with the product of constants folded
    let expr = make::bin_expr(
        make::regref(0),
        BinaryOp::Add,
        make::bin_expr(
            make::bin_expr(make::literal("1"), BinaryOp::Add, make::literal("1")),
            BinaryOp::Mul,
            make::regref(1),
        ),
    );
    let sym = match eval(expr) {
        Evaluated::Symbolic(sym) => sym,
        other => panic!("expected a symbolic value, got {other}"),
    };
    assert_eq!(sym.to_string(), "q0 + 2*q1");
}

#[test]
fn test_variable_reference() {
    let mut variables = VariableTable::new();
    variables.insert("alpha".to_string(), Value::Float(0.25));
    let expr = make::bin_expr(make::ident("alpha"), BinaryOp::Mul, make::literal("4"));
    let value = evaluate_expr(&expr, &variables).unwrap();
    assert_eq!(value, Evaluated::Concrete(Value::Float(1.0)));
}

#[test]
fn test_undefined_variable() {
    let expr = make::bin_expr(make::ident("beta"), BinaryOp::Mul, make::literal("4"));
    let err = evaluate_expr(&expr, &VariableTable::new()).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);
    assert_eq!(err.message(), "Undefined variable 'beta'");
}

#[test]
fn test_string_operands_are_unsupported() {
    let expr = make::bin_expr(
        make::string_literal("a"),
        BinaryOp::Add,
        make::literal("1"),
    );
    let err = evaluate_expr(&expr, &VariableTable::new()).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);
}

#[test]
fn test_division_by_zero() {
    let expr = make::bin_expr(make::literal("1"), BinaryOp::Div, make::literal("0"));
    let err = evaluate_expr(&expr, &VariableTable::new()).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);
    assert_eq!(err.message(), "division by zero in '1 / 0'");
}

#[test]
fn test_integer_overflow() {
    let expr = make::bin_expr(make::literal("2"), BinaryOp::Pow, make::literal("100"));
    let err = evaluate_expr(&expr, &VariableTable::new()).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);
}

#[test]
fn test_malformed_literal() {
    let err = evaluate_expr(&make::literal("99999999999999999999"), &VariableTable::new())
        .unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);
}

#[test]
fn test_symbolic_evaluation_matches_concrete() {
    // Evaluating `q0 / 2 + 1` later gives the same result as evaluating `3 / 2 + 1` now.
    let build = |atom| {
        make::bin_expr(
            make::bin_expr(atom, BinaryOp::Div, make::literal("2")),
            BinaryOp::Add,
            make::literal("1"),
        )
    };
    let sym = match eval(build(make::regref(0))) {
        Evaluated::Symbolic(sym) => sym,
        other => panic!("expected a symbolic value, got {other}"),
    };
    let transform = bb_semantics::RegRefTransform::new(sym);
    let later = transform.eval(&[3_i64]).unwrap();
    assert_eq!(Value::from(later), concrete(build(make::literal("3"))));
    assert_eq!(later, Number::Float(2.5));
}
