// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Symbolic expressions over register references.
//!
//! An expression that mentions a register reference such as `q0` cannot be
//! evaluated until the mode has been measured. The evaluator folds every
//! concrete subexpression to a constant and keeps the rest as a [`SymExpr`].

use std::collections::BTreeSet;
use std::fmt;

use bb_syntax::ast::BinaryOp;

use crate::reserved::{MathFunction, REGREF_PREFIX};
use crate::value::{Number, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum SymExpr {
    Const(Number),
    /// The measurement result of a mode.
    RegRef(usize),
    Neg(Box<SymExpr>),
    Binary(BinaryOp, Box<SymExpr>, Box<SymExpr>),
    Call(MathFunction, Box<SymExpr>),
}

/// Result of evaluating an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluated {
    Concrete(Value),
    Symbolic(SymExpr),
}

impl Evaluated {
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Evaluated::Symbolic(_))
    }
}

impl fmt::Display for Evaluated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluated::Concrete(value) => fmt::Display::fmt(value, f),
            Evaluated::Symbolic(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

// Binding strength used when printing.
const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_NEG: u8 = 3;
const PREC_POW: u8 = 4;
const PREC_ATOM: u8 = 5;

impl SymExpr {
    pub fn binary(op: BinaryOp, lhs: SymExpr, rhs: SymExpr) -> SymExpr {
        SymExpr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Modes referenced anywhere in the expression, in ascending order.
    pub fn free_regrefs(&self) -> BTreeSet<usize> {
        let mut modes = BTreeSet::new();
        self.collect_regrefs(&mut modes);
        modes
    }

    fn collect_regrefs(&self, modes: &mut BTreeSet<usize>) {
        match self {
            SymExpr::Const(_) => {}
            SymExpr::RegRef(mode) => {
                modes.insert(*mode);
            }
            SymExpr::Neg(inner) | SymExpr::Call(_, inner) => inner.collect_regrefs(modes),
            SymExpr::Binary(_, lhs, rhs) => {
                lhs.collect_regrefs(modes);
                rhs.collect_regrefs(modes);
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            SymExpr::Const(Number::Int(n)) if *n < 0 => PREC_NEG,
            SymExpr::Const(Number::Float(x)) if x.is_sign_negative() => PREC_NEG,
            SymExpr::Const(Number::Complex(z)) if z.re == 0.0 && z.im.is_sign_negative() => {
                PREC_NEG
            }
            SymExpr::Const(_) | SymExpr::RegRef(_) | SymExpr::Call(..) => PREC_ATOM,
            SymExpr::Neg(_) => PREC_NEG,
            SymExpr::Binary(BinaryOp::Add | BinaryOp::Sub, ..) => PREC_ADD,
            SymExpr::Binary(BinaryOp::Mul | BinaryOp::Div, ..) => PREC_MUL,
            SymExpr::Binary(BinaryOp::Pow, ..) => PREC_POW,
        }
    }

    fn fmt_operand(&self, min_prec: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.precedence() < min_prec {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Printed like `q0 + 2*q1`: spaces around `+` and `-` only, parentheses
/// only where binding requires them.
impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymExpr::Const(n) => write!(f, "{n}"),
            SymExpr::RegRef(mode) => write!(f, "{REGREF_PREFIX}{mode}"),
            SymExpr::Neg(inner) => {
                f.write_str("-")?;
                inner.fmt_operand(PREC_POW, f)
            }
            SymExpr::Call(function, arg) => write!(f, "{function}({arg})"),
            SymExpr::Binary(op, lhs, rhs) => {
                let (lhs_prec, rhs_prec, sep) = match op {
                    BinaryOp::Add => (PREC_ADD, PREC_ADD, " + "),
                    BinaryOp::Sub => (PREC_ADD, PREC_MUL, " - "),
                    BinaryOp::Mul => (PREC_MUL, PREC_NEG, "*"),
                    BinaryOp::Div => (PREC_MUL, PREC_POW, "/"),
                    BinaryOp::Pow => (PREC_ATOM, PREC_POW, "**"),
                };
                lhs.fmt_operand(lhs_prec, f)?;
                f.write_str(sep)?;
                rhs.fmt_operand(rhs_prec, f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(mode: usize) -> SymExpr {
        SymExpr::RegRef(mode)
    }

    fn int(n: i64) -> SymExpr {
        SymExpr::Const(Number::Int(n))
    }

    #[test]
    fn printing() {
        let e = SymExpr::binary(
            BinaryOp::Add,
            q(0),
            SymExpr::binary(BinaryOp::Mul, int(2), q(1)),
        );
        assert_eq!(e.to_string(), "q0 + 2*q1");

        let e = SymExpr::binary(
            BinaryOp::Mul,
            SymExpr::binary(BinaryOp::Add, q(0), int(1)),
            q(2),
        );
        assert_eq!(e.to_string(), "(q0 + 1)*q2");

        let e = SymExpr::binary(
            BinaryOp::Sub,
            q(0),
            SymExpr::binary(BinaryOp::Sub, q(1), q(2)),
        );
        assert_eq!(e.to_string(), "q0 - (q1 - q2)");

        let e = SymExpr::Neg(Box::new(SymExpr::binary(BinaryOp::Pow, q(0), int(2))));
        assert_eq!(e.to_string(), "-q0**2");

        let e = SymExpr::binary(BinaryOp::Pow, SymExpr::Neg(Box::new(q(0))), int(2));
        assert_eq!(e.to_string(), "(-q0)**2");

        let e = SymExpr::Call(
            MathFunction::Sin,
            Box::new(SymExpr::binary(BinaryOp::Div, q(3), int(2))),
        );
        assert_eq!(e.to_string(), "sin(q3/2)");
    }

    #[test]
    fn free_regrefs_are_sorted_and_unique() {
        let e = SymExpr::binary(
            BinaryOp::Add,
            q(4),
            SymExpr::binary(BinaryOp::Mul, q(1), q(4)),
        );
        assert_eq!(e.free_regrefs().into_iter().collect::<Vec<_>>(), vec![1, 4]);
    }
}
