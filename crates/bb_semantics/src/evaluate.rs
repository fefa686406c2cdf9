// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

// Evaluation of expression nodes.
//
// Concrete subexpressions are folded as they are evaluated. A register
// reference anywhere below a node makes the result of that node symbolic.

use num_complex::Complex64;

use bb_syntax::ast::{self, HasExpr, HasTextName, LiteralKind, UnaryOp};
use bb_syntax::AstNode;

use crate::reserved::{self, MathFunction};
use crate::semantic_error::SemanticError;
use crate::symbolic::{Evaluated, SymExpr};
use crate::value::{Number, NumericError, Value};
use crate::variables::VariableTable;

/// Evaluate `expr`. Identifiers are looked up in `variables`.
pub fn evaluate_expr(
    expr: &ast::Expr,
    variables: &VariableTable,
) -> Result<Evaluated, SemanticError> {
    match expr {
        ast::Expr::Literal(literal) => evaluate_literal(literal).map(Evaluated::Concrete),
        ast::Expr::Identifier(ident) => evaluate_identifier(ident, variables),
        ast::Expr::RegRefExpr(regref) => {
            let token = regref
                .regref_token()
                .ok_or_else(|| SemanticError::missing(regref, "register reference"))?;
            match reserved::regref_index(token.text()) {
                Some(mode) => Ok(Evaluated::Symbolic(SymExpr::RegRef(mode))),
                None => Err(SemanticError::evaluation_error(
                    regref,
                    format!("Invalid register reference '{}'", token.text()),
                )),
            }
        }
        ast::Expr::ParenExpr(paren) => evaluate_expr(&child_expr(paren)?, variables),
        ast::Expr::PrefixExpr(prefix) => evaluate_prefix(prefix, variables),
        ast::Expr::BinExpr(bin) => evaluate_binary(bin, variables),
        ast::Expr::CallExpr(call) => evaluate_call(call, variables),
    }
}

fn child_expr<N: HasExpr>(node: &N) -> Result<ast::Expr, SemanticError> {
    node.expr()
        .ok_or_else(|| SemanticError::missing(node, "expression"))
}

fn evaluate_literal(literal: &ast::Literal) -> Result<Value, SemanticError> {
    let malformed =
        || SemanticError::evaluation_error(literal, format!("Malformed literal '{literal}'"));
    let kind = literal.kind().ok_or_else(malformed)?;
    let value = match kind {
        LiteralKind::IntNumber(token) => Value::Int(token.text().parse().map_err(|_| malformed())?),
        LiteralKind::FloatNumber(token) => {
            Value::Float(token.text().parse().map_err(|_| malformed())?)
        }
        LiteralKind::ImagNumber(token) => {
            let digits = token
                .text()
                .strip_suffix(&['j', 'J'][..])
                .ok_or_else(malformed)?;
            let im: f64 = digits.parse().map_err(|_| malformed())?;
            Value::Complex(Complex64::new(0.0, im))
        }
        LiteralKind::String(token) => {
            let text = token.text();
            let inner = text
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .ok_or_else(malformed)?;
            Value::Str(inner.to_string())
        }
        LiteralKind::Bool(b) => Value::Bool(b),
        LiteralKind::Pi => Value::Float(std::f64::consts::PI),
    };
    Ok(value)
}

fn evaluate_identifier(
    ident: &ast::Identifier,
    variables: &VariableTable,
) -> Result<Evaluated, SemanticError> {
    let name = ident.string();
    if let Some(mode) = reserved::regref_index(&name) {
        return Ok(Evaluated::Symbolic(SymExpr::RegRef(mode)));
    }
    variables
        .get(&name)
        .cloned()
        .map(Evaluated::Concrete)
        .ok_or_else(|| {
            SemanticError::evaluation_error(ident, format!("Undefined variable '{name}'"))
        })
}

// An arithmetic operand: a number, or an expression awaiting measurement results.
enum Operand {
    Number(Number),
    Symbol(SymExpr),
}

impl Operand {
    fn into_sym(self) -> SymExpr {
        match self {
            Operand::Number(n) => SymExpr::Const(n),
            Operand::Symbol(expr) => expr,
        }
    }
}

fn operand<N: AstNode>(evaluated: Evaluated, node: &N) -> Result<Operand, SemanticError> {
    match evaluated {
        Evaluated::Symbolic(expr) => Ok(Operand::Symbol(expr)),
        Evaluated::Concrete(value) => value.as_number().map(Operand::Number).ok_or_else(|| {
            SemanticError::evaluation_error(
                node,
                format!("Unsupported operand {} in '{}'", value.repr(), node.syntax()),
            )
        }),
    }
}

fn numeric_error<N: AstNode>(err: NumericError, node: &N) -> SemanticError {
    SemanticError::evaluation_error(node, format!("{err} in '{}'", node.syntax()))
}

fn evaluate_prefix(
    prefix: &ast::PrefixExpr,
    variables: &VariableTable,
) -> Result<Evaluated, SemanticError> {
    let op = prefix
        .op_kind()
        .ok_or_else(|| SemanticError::missing(prefix, "operator"))?;
    let inner = evaluate_expr(&child_expr(prefix)?, variables)?;
    let res = match (op, operand(inner, prefix)?) {
        (UnaryOp::Plus, Operand::Number(n)) => Evaluated::Concrete(n.into()),
        (UnaryOp::Plus, Operand::Symbol(expr)) => Evaluated::Symbolic(expr),
        (UnaryOp::Neg, Operand::Number(n)) => {
            Evaluated::Concrete(n.neg().map_err(|e| numeric_error(e, prefix))?.into())
        }
        (UnaryOp::Neg, Operand::Symbol(expr)) => Evaluated::Symbolic(SymExpr::Neg(Box::new(expr))),
    };
    Ok(res)
}

fn evaluate_binary(
    bin: &ast::BinExpr,
    variables: &VariableTable,
) -> Result<Evaluated, SemanticError> {
    let op = bin
        .op_kind()
        .ok_or_else(|| SemanticError::missing(bin, "operator"))?;
    let lhs = bin
        .lhs()
        .ok_or_else(|| SemanticError::missing(bin, "left operand"))?;
    let rhs = bin
        .rhs()
        .ok_or_else(|| SemanticError::missing(bin, "right operand"))?;
    let lhs = operand(evaluate_expr(&lhs, variables)?, bin)?;
    let rhs = operand(evaluate_expr(&rhs, variables)?, bin)?;
    let res = match (lhs, rhs) {
        (Operand::Number(a), Operand::Number(b)) => {
            let n = Number::binary(op, a, b).map_err(|e| numeric_error(e, bin))?;
            Evaluated::Concrete(n.into())
        }
        (lhs, rhs) => Evaluated::Symbolic(SymExpr::binary(op, lhs.into_sym(), rhs.into_sym())),
    };
    Ok(res)
}

fn evaluate_call(
    call: &ast::CallExpr,
    variables: &VariableTable,
) -> Result<Evaluated, SemanticError> {
    let token = call
        .function_token()
        .ok_or_else(|| SemanticError::missing(call, "function name"))?;
    let function = MathFunction::from_name(token.text()).ok_or_else(|| {
        SemanticError::evaluation_error(call, format!("Unknown function '{}'", token.text()))
    })?;
    let arg = evaluate_expr(&child_expr(call)?, variables)?;
    let res = match operand(arg, call)? {
        Operand::Number(n) => Evaluated::Concrete(n.apply(function).into()),
        Operand::Symbol(expr) => Evaluated::Symbolic(SymExpr::Call(function, Box::new(expr))),
    };
    Ok(res)
}
