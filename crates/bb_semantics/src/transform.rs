// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Register-reference transforms: classical functions of measurement
//! results, passed as arguments to later operations.

use std::fmt;
use std::sync::Arc;

use crate::symbolic::SymExpr;
use crate::value::{Number, NumericError};

type Compiled = Box<dyn Fn(&[Number]) -> Result<Number, NumericError> + Send + Sync>;
type SharedFn = Arc<dyn Fn(&[Number]) -> Result<Number, NumericError> + Send + Sync>;

/// A symbolic expression compiled to a callable.
///
/// The inputs of [`func`](Self::func) are the measurement results of the
/// modes in [`regrefs`](Self::regrefs), in that order. `regrefs` lists every
/// mode mentioned by the expression once, in ascending order.
#[derive(Clone)]
pub struct RegRefTransform {
    func_str: String,
    regrefs: Vec<usize>,
    expr: SymExpr,
    func: SharedFn,
}

impl RegRefTransform {
    pub fn new(expr: SymExpr) -> RegRefTransform {
        let regrefs: Vec<usize> = expr.free_regrefs().into_iter().collect();
        let body = compile(&expr, &regrefs);
        let arity = regrefs.len();
        let func: SharedFn = Arc::new(move |inputs: &[Number]| {
            if inputs.len() != arity {
                return Err(NumericError::ArityMismatch {
                    expected: arity,
                    found: inputs.len(),
                });
            }
            body(inputs)
        });
        RegRefTransform {
            func_str: expr.to_string(),
            regrefs,
            expr,
            func,
        }
    }

    /// The printed expression, e.g. `q0 + 2*q1`.
    pub fn func_str(&self) -> &str {
        &self.func_str
    }

    pub fn regrefs(&self) -> &[usize] {
        &self.regrefs
    }

    pub fn expr(&self) -> &SymExpr {
        &self.expr
    }

    pub fn func(&self) -> &(dyn Fn(&[Number]) -> Result<Number, NumericError> + Send + Sync) {
        &*self.func
    }

    /// Evaluate with one measurement result per entry of `regrefs`.
    pub fn eval<N: Into<Number> + Copy>(&self, inputs: &[N]) -> Result<Number, NumericError> {
        let inputs = inputs.iter().map(|&n| n.into()).collect::<Vec<Number>>();
        (self.func)(&inputs)
    }
}

// Each register reference is bound to its input slot here, once.
fn compile(expr: &SymExpr, regrefs: &[usize]) -> Compiled {
    match expr {
        SymExpr::Const(n) => {
            let n = *n;
            Box::new(move |_: &[Number]| Ok(n))
        }
        SymExpr::RegRef(mode) => {
            let slot = regrefs.partition_point(|m| m < mode);
            let arity = regrefs.len();
            Box::new(move |inputs: &[Number]| {
                inputs
                    .get(slot)
                    .copied()
                    .ok_or(NumericError::ArityMismatch {
                        expected: arity,
                        found: inputs.len(),
                    })
            })
        }
        SymExpr::Neg(inner) => {
            let inner = compile(inner, regrefs);
            Box::new(move |inputs: &[Number]| inner(inputs)?.neg())
        }
        SymExpr::Binary(op, lhs, rhs) => {
            let op = *op;
            let lhs = compile(lhs, regrefs);
            let rhs = compile(rhs, regrefs);
            Box::new(move |inputs: &[Number]| Number::binary(op, lhs(inputs)?, rhs(inputs)?))
        }
        SymExpr::Call(function, arg) => {
            let function = *function;
            let arg = compile(arg, regrefs);
            Box::new(move |inputs: &[Number]| Ok(arg(inputs)?.apply(function)))
        }
    }
}

impl PartialEq for RegRefTransform {
    fn eq(&self, other: &Self) -> bool {
        self.func_str == other.func_str && self.regrefs == other.regrefs
    }
}

impl fmt::Debug for RegRefTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegRefTransform")
            .field("func_str", &self.func_str)
            .field("regrefs", &self.regrefs)
            .finish()
    }
}

impl fmt::Display for RegRefTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.func_str)
    }
}
