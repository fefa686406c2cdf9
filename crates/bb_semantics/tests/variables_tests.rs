// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use num_complex::Complex64;

use bb_semantics::variables::{declare_array, declare_scalar};
use bb_semantics::{Scalar, SemanticErrorKind, TypeTag, Value, VariableTable};
use bb_syntax::ast::{make, BinaryOp};

fn lit(text: &str) -> bb_syntax::ast::Expr {
    make::literal(text)
}

#[test]
fn test_scalar_is_converted_to_declared_type() {
    let mut table = VariableTable::new();
    declare_scalar(&make::expression_var("float", "x", lit("3")), &mut table).unwrap();
    declare_scalar(&make::expression_var("int", "n", lit("3.7")), &mut table).unwrap();
    declare_scalar(&make::expression_var("complex", "z", lit("2")), &mut table).unwrap();
    declare_scalar(&make::expression_var("bool", "b", lit("0")), &mut table).unwrap();
    declare_scalar(&make::expression_var("str", "s", lit("1.5")), &mut table).unwrap();
    assert_eq!(table["x"], Value::Float(3.0));
    assert_eq!(table["n"], Value::Int(3));
    assert_eq!(table["z"], Value::Complex(Complex64::new(2.0, 0.0)));
    assert_eq!(table["b"], Value::Bool(false));
    assert_eq!(table["s"], Value::Str("1.5".to_string()));
}

#[test]
fn test_scalar_type_error() {
    let mut table = VariableTable::new();
    let decl = make::expression_var("float", "x", lit("1j"));
    let err = declare_scalar(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::TypeError);
    assert_eq!(err.message(), "Var x = 1j is not of declared type float");
    assert!(table.is_empty());
}

#[test]
fn test_symbolic_scalar_is_a_type_error() {
    let mut table = VariableTable::new();
    let decl = make::expression_var(
        "float",
        "x",
        make::bin_expr(make::regref(0), BinaryOp::Mul, lit("2")),
    );
    let err = declare_scalar(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::TypeError);
    assert_eq!(err.message(), "Var x = q0*2 is not of declared type float");
}

#[test]
fn test_scalar_from_variable() {
    let mut table = VariableTable::new();
    declare_scalar(&make::expression_var("int", "n", lit("4")), &mut table).unwrap();
    let decl = make::expression_var(
        "float",
        "half",
        make::bin_expr(make::ident("n"), BinaryOp::Div, lit("8")),
    );
    declare_scalar(&decl, &mut table).unwrap();
    assert_eq!(table["half"], Value::Float(0.5));
}

#[test]
fn test_regref_name_is_reserved() {
    let mut table = VariableTable::new();
    let decl = make::expression_var("int", "q0", lit("1"));
    let err = declare_scalar(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
    assert_eq!(
        err.message(),
        "Variable name 'q0' is reserved for register references"
    );
    // The error points at the name.
    assert_eq!((err.line(), err.column()), (1, 4));
}

#[test]
fn test_keyword_name_is_reserved() {
    let mut table = VariableTable::new();
    for name in ["pi", "target", "sin"] {
        let decl = make::expression_var("float", name, lit("1.0"));
        let err = declare_scalar(&decl, &mut table).unwrap_err();
        assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
        assert_eq!(
            err.message(),
            format!("Variable name '{name}' is a reserved Blackbird keyword")
        );
    }
    let decl = make::array_var("int", "array", None, vec![vec![lit("1")]]);
    let err = declare_array(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
}

#[test]
fn test_array_declaration() {
    let mut table = VariableTable::new();
    let decl = make::array_var(
        "float",
        "M",
        None,
        vec![vec![lit("1"), lit("2")], vec![lit("3"), lit("4")]],
    );
    declare_array(&decl, &mut table).unwrap();
    let array = table["M"].as_array().unwrap();
    assert_eq!(array.dtype(), TypeTag::Float);
    assert_eq!(array.shape(), &[2, 2]);
    assert_eq!(
        array.data(),
        &[
            Scalar::Float(1.0),
            Scalar::Float(2.0),
            Scalar::Float(3.0),
            Scalar::Float(4.0)
        ]
    );
}

#[test]
fn test_array_with_matching_shape() {
    let mut table = VariableTable::new();
    let decl = make::array_var(
        "complex",
        "U",
        Some(&[1, 3]),
        vec![vec![lit("1"), lit("1j"), make::ident("pi")]],
    );
    // `pi` as an identifier is not a declared variable.
    let err = declare_array(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::EvaluationError);

    let decl = make::array_var(
        "complex",
        "U",
        Some(&[1, 3]),
        vec![vec![lit("1"), lit("1j"), lit("pi")]],
    );
    declare_array(&decl, &mut table).unwrap();
    assert_eq!(table["U"].as_array().unwrap().shape(), &[1, 3]);
}

#[test]
fn test_array_shape_mismatch() {
    let mut table = VariableTable::new();
    let decl = make::array_var(
        "float",
        "M",
        Some(&[3, 3]),
        vec![vec![lit("1"), lit("2")], vec![lit("3"), lit("4")]],
    );
    let err = declare_array(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
    assert_eq!(
        err.message(),
        "Array var M has declared shape (3, 3) but actual shape (2, 2)"
    );
    assert!(!table.contains_key("M"));
}

#[test]
fn test_ragged_array() {
    let mut table = VariableTable::new();
    let decl = make::array_var(
        "int",
        "A",
        None,
        vec![vec![lit("1"), lit("2")], vec![lit("3")]],
    );
    let err = declare_array(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
    assert_eq!(err.message(), "Array var A is not of declared type int");
}

#[test]
fn test_array_element_type_error() {
    let mut table = VariableTable::new();
    let decl = make::array_var("float", "A", None, vec![vec![lit("1"), lit("2j")]]);
    let err = declare_array(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
    assert_eq!(err.message(), "Array var A is not of declared type float");
    // Array errors point at the start of the declaration.
    assert_eq!((err.line(), err.column()), (1, 0));
}

#[test]
fn test_symbolic_array_cell() {
    let mut table = VariableTable::new();
    let decl = make::array_var("float", "A", None, vec![vec![make::regref(1)]]);
    let err = declare_array(&decl, &mut table).unwrap_err();
    assert_eq!(err.kind(), SemanticErrorKind::SyntaxError);
}

#[test]
fn test_redeclaration_overwrites() {
    let mut table = VariableTable::new();
    declare_scalar(&make::expression_var("int", "n", lit("1")), &mut table).unwrap();
    declare_scalar(&make::expression_var("float", "m", lit("2")), &mut table).unwrap();
    declare_scalar(&make::expression_var("str", "n", lit("3")), &mut table).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table["n"], Value::Str("3".to_string()));
    // Position of the first declaration is kept.
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["n", "m"]);
}
