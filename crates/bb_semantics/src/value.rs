// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Runtime values of Blackbird programs.
//!
//! [`Number`] is the numeric tower `int < float < complex` shared by the
//! evaluator and by compiled transforms. [`Scalar`] adds booleans and
//! strings, and [`Value`] adds arrays and deferred transforms.

use std::fmt;

use itertools::Itertools;
use num_complex::Complex64;

use bb_syntax::ast::BinaryOp;

use crate::reserved::MathFunction;
use crate::transform::RegRefTransform;
use crate::types::TypeTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericError {
    Overflow,
    ZeroDivision,
    /// A transform was called with the wrong number of inputs.
    ArityMismatch {
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => f.write_str("numeric overflow"),
            NumericError::ZeroDivision => f.write_str("division by zero"),
            NumericError::ArityMismatch { expected, found } => {
                write!(f, "expected {expected} inputs, found {found}")
            }
        }
    }
}

impl std::error::Error for NumericError {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    Complex(Complex64),
}

// Operands brought to their common type.
enum Promoted {
    Ints(i64, i64),
    Floats(f64, f64),
    Complexes(Complex64, Complex64),
}

fn promote(a: Number, b: Number) -> Promoted {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Promoted::Ints(x, y),
        (Number::Complex(_), _) | (_, Number::Complex(_)) => {
            Promoted::Complexes(a.to_complex(), b.to_complex())
        }
        _ => Promoted::Floats(a.to_f64_lossy(), b.to_f64_lossy()),
    }
}

const CZERO: Complex64 = Complex64::new(0.0, 0.0);

impl Number {
    /// The real value of an int or float. `None` for complex numbers.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Number::Int(n) => Some(n as f64),
            Number::Float(x) => Some(x),
            Number::Complex(_) => None,
        }
    }

    fn to_f64_lossy(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
            Number::Complex(z) => z.re,
        }
    }

    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Complex(z) => z,
            real => Complex64::new(real.to_f64_lossy(), 0.0),
        }
    }

    pub fn neg(self) -> Result<Number, NumericError> {
        match self {
            Number::Int(n) => n.checked_neg().map(Number::Int).ok_or(NumericError::Overflow),
            Number::Float(x) => Ok(Number::Float(-x)),
            Number::Complex(z) => Ok(Number::Complex(-z)),
        }
    }

    /// Apply `op` with Python semantics: `/` always divides exactly, integer
    /// overflow and division by zero are errors.
    pub fn binary(op: BinaryOp, lhs: Number, rhs: Number) -> Result<Number, NumericError> {
        match op {
            BinaryOp::Add => lhs.add(rhs),
            BinaryOp::Sub => lhs.sub(rhs),
            BinaryOp::Mul => lhs.mul(rhs),
            BinaryOp::Div => lhs.div(rhs),
            BinaryOp::Pow => lhs.pow(rhs),
        }
    }

    pub fn add(self, rhs: Number) -> Result<Number, NumericError> {
        match promote(self, rhs) {
            Promoted::Ints(a, b) => a.checked_add(b).map(Number::Int).ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(Number::Float(a + b)),
            Promoted::Complexes(a, b) => Ok(Number::Complex(a + b)),
        }
    }

    pub fn sub(self, rhs: Number) -> Result<Number, NumericError> {
        match promote(self, rhs) {
            Promoted::Ints(a, b) => a.checked_sub(b).map(Number::Int).ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(Number::Float(a - b)),
            Promoted::Complexes(a, b) => Ok(Number::Complex(a - b)),
        }
    }

    pub fn mul(self, rhs: Number) -> Result<Number, NumericError> {
        match promote(self, rhs) {
            Promoted::Ints(a, b) => a.checked_mul(b).map(Number::Int).ok_or(NumericError::Overflow),
            Promoted::Floats(a, b) => Ok(Number::Float(a * b)),
            Promoted::Complexes(a, b) => Ok(Number::Complex(a * b)),
        }
    }

    pub fn div(self, rhs: Number) -> Result<Number, NumericError> {
        match promote(self, rhs) {
            Promoted::Ints(_, 0) => Err(NumericError::ZeroDivision),
            Promoted::Ints(a, b) => Ok(Number::Float(a as f64 / b as f64)),
            Promoted::Floats(_, b) if b == 0.0 => Err(NumericError::ZeroDivision),
            Promoted::Floats(a, b) => Ok(Number::Float(a / b)),
            Promoted::Complexes(_, b) if b == CZERO => Err(NumericError::ZeroDivision),
            Promoted::Complexes(a, b) => Ok(Number::Complex(a / b)),
        }
    }

    pub fn pow(self, rhs: Number) -> Result<Number, NumericError> {
        match promote(self, rhs) {
            Promoted::Ints(a, b) => int_pow(a, b),
            Promoted::Floats(a, b) => float_pow(a, b),
            Promoted::Complexes(a, b) => complex_pow(a, b),
        }
    }

    /// Real functions of real arguments give real results, NaN outside
    /// their domain. Complex arguments use the principal branch.
    pub fn apply(self, function: MathFunction) -> Number {
        match self {
            Number::Complex(z) => Number::Complex(apply_complex(function, z)),
            real => Number::Float(apply_real(function, real.to_f64_lossy())),
        }
    }
}

fn int_pow(base: i64, exp: i64) -> Result<Number, NumericError> {
    if exp < 0 {
        if base == 0 {
            return Err(NumericError::ZeroDivision);
        }
        return float_pow(base as f64, exp as f64);
    }
    let res = match (base, u32::try_from(exp)) {
        (_, Ok(e)) => base.checked_pow(e),
        (0 | 1, Err(_)) => Some(base),
        (-1, Err(_)) => Some(if exp % 2 == 0 { 1 } else { -1 }),
        _ => None,
    };
    res.map(Number::Int).ok_or(NumericError::Overflow)
}

fn float_pow(base: f64, exp: f64) -> Result<Number, NumericError> {
    if base == 0.0 && exp < 0.0 {
        return Err(NumericError::ZeroDivision);
    }
    // A negative base with a fractional exponent has a complex result.
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return complex_pow(Complex64::new(base, 0.0), Complex64::new(exp, 0.0));
    }
    let res = base.powf(exp);
    if res.is_infinite() && base.is_finite() && exp.is_finite() {
        return Err(NumericError::Overflow);
    }
    Ok(Number::Float(res))
}

fn complex_pow(base: Complex64, exp: Complex64) -> Result<Number, NumericError> {
    if base == CZERO {
        if exp == CZERO {
            return Ok(Number::Complex(Complex64::new(1.0, 0.0)));
        }
        if exp.im != 0.0 || exp.re < 0.0 {
            return Err(NumericError::ZeroDivision);
        }
        return Ok(Number::Complex(CZERO));
    }
    // Small integral exponents are computed by repeated multiplication, so
    // that e.g. `(1+1j)**2` is exactly `2j`.
    if exp.im == 0.0 && exp.re.fract() == 0.0 && exp.re.abs() <= 64.0 {
        return Ok(Number::Complex(base.powi(exp.re as i32)));
    }
    Ok(Number::Complex(base.powc(exp)))
}

fn apply_real(function: MathFunction, x: f64) -> f64 {
    match function {
        MathFunction::Exp => x.exp(),
        MathFunction::Log => x.ln(),
        MathFunction::Sqrt => x.sqrt(),
        MathFunction::Sin => x.sin(),
        MathFunction::Cos => x.cos(),
        MathFunction::Tan => x.tan(),
        MathFunction::Arcsin => x.asin(),
        MathFunction::Arccos => x.acos(),
        MathFunction::Arctan => x.atan(),
        MathFunction::Sinh => x.sinh(),
        MathFunction::Cosh => x.cosh(),
        MathFunction::Tanh => x.tanh(),
        MathFunction::Arcsinh => x.asinh(),
        MathFunction::Arccosh => x.acosh(),
        MathFunction::Arctanh => x.atanh(),
    }
}

fn apply_complex(function: MathFunction, z: Complex64) -> Complex64 {
    match function {
        MathFunction::Exp => z.exp(),
        MathFunction::Log => z.ln(),
        MathFunction::Sqrt => z.sqrt(),
        MathFunction::Sin => z.sin(),
        MathFunction::Cos => z.cos(),
        MathFunction::Tan => z.tan(),
        MathFunction::Arcsin => z.asin(),
        MathFunction::Arccos => z.acos(),
        MathFunction::Arctan => z.atan(),
        MathFunction::Sinh => z.sinh(),
        MathFunction::Cosh => z.cosh(),
        MathFunction::Tanh => z.tanh(),
        MathFunction::Arcsinh => z.asinh(),
        MathFunction::Arccosh => z.acosh(),
        MathFunction::Arctanh => z.atanh(),
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Number {
        Number::Int(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number {
        Number::Float(x)
    }
}

impl From<Complex64> for Number {
    fn from(z: Complex64) -> Number {
        Number::Complex(z)
    }
}

// Floats are written like Python's `repr`: always with a fractional part or
// an exponent.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else {
        write!(f, "{x:?}")
    }
}

// Complex numbers are written like Python's `repr`: `2j`, `(1+2j)`, `(1.5-0.5j)`.
fn fmt_complex(z: Complex64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if z.im.is_sign_negative() { '-' } else { '+' };
    if z.re == 0.0 && !z.re.is_sign_negative() {
        write!(f, "{}j", z.im)
    } else {
        write!(f, "({}{}{}j)", z.re, sign, z.im.abs())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => fmt_float(*x, f),
            Number::Complex(z) => fmt_complex(*z, f),
        }
    }
}

/// A single element of an array, or a scalar variable.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Bool(bool),
    Str(String),
}

impl Scalar {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Scalar::Int(_) => TypeTag::Int,
            Scalar::Float(_) => TypeTag::Float,
            Scalar::Complex(_) => TypeTag::Complex,
            Scalar::Bool(_) => TypeTag::Bool,
            Scalar::Str(_) => TypeTag::Str,
        }
    }

    /// Booleans take part in arithmetic as `0` and `1`; strings do not.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Scalar::Int(n) => Some(Number::Int(*n)),
            Scalar::Float(x) => Some(Number::Float(*x)),
            Scalar::Complex(z) => Some(Number::Complex(*z)),
            Scalar::Bool(b) => Some(Number::Int(i64::from(*b))),
            Scalar::Str(_) => None,
        }
    }

    /// Like `Display`, but strings are quoted.
    pub fn repr(&self) -> String {
        match self {
            Scalar::Str(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Scalar {
        match n {
            Number::Int(n) => Scalar::Int(n),
            Number::Float(x) => Scalar::Float(x),
            Number::Complex(z) => Scalar::Complex(z),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => fmt_float(*x, f),
            Scalar::Complex(z) => fmt_complex(*z, f),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// A homogeneous, row-major array. Every element has type `dtype`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array {
    dtype: TypeTag,
    shape: Vec<usize>,
    data: Vec<Scalar>,
}

impl Array {
    /// Build an array with one row per element of `rows`, converting every
    /// cell to `dtype`. Returns `None` if the rows differ in length or a
    /// cell cannot be converted. Without rows the shape is `[0]`, otherwise
    /// `[rows, columns]`.
    pub fn from_rows(dtype: TypeTag, rows: &[Vec<Scalar>]) -> Option<Array> {
        let shape = match rows.first() {
            None => vec![0],
            Some(first) => {
                let ncols = first.len();
                if rows.iter().any(|row| row.len() != ncols) {
                    return None;
                }
                vec![rows.len(), ncols]
            }
        };
        let data = rows
            .iter()
            .flatten()
            .map(|cell| dtype.convert(cell))
            .collect::<Option<Vec<_>>>()?;
        Some(Array { dtype, shape, data })
    }

    pub fn dtype(&self) -> TypeTag {
        self.dtype
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Elements in row-major order.
    pub fn data(&self) -> &[Scalar] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element at `index`, which must have one entry per dimension.
    pub fn get(&self, index: &[usize]) -> Option<&Scalar> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        self.data.get(flat)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape.as_slice() {
            [_, ncols] => {
                let rows = self
                    .data
                    .chunks((*ncols).max(1))
                    .map(|row| format!("[{}]", row.iter().map(Scalar::repr).join(", ")))
                    .join(", ");
                write!(f, "[{rows}]")
            }
            _ => write!(f, "[{}]", self.data.iter().map(Scalar::repr).join(", ")),
        }
    }
}

/// A value stored in the variable table or passed to an instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Complex(Complex64),
    Bool(bool),
    Str(String),
    Array(Array),
    /// An argument that depends on measurement results.
    Transform(RegRefTransform),
}

impl Value {
    pub fn as_scalar(&self) -> Option<Scalar> {
        let res = match self {
            Value::Int(n) => Scalar::Int(*n),
            Value::Float(x) => Scalar::Float(*x),
            Value::Complex(z) => Scalar::Complex(*z),
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Str(s) => Scalar::Str(s.clone()),
            Value::Array(_) | Value::Transform(_) => return None,
        };
        Some(res)
    }

    /// The value as an arithmetic operand, if it is one.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(x) => Some(Number::Float(*x)),
            Value::Complex(z) => Some(Number::Complex(*z)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Str(_) | Value::Array(_) | Value::Transform(_) => None,
        }
    }

    /// Type tag of a scalar, or the element type of an array.
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Value::Array(array) => Some(array.dtype()),
            Value::Transform(_) => None,
            scalar => scalar.as_scalar().map(|s| s.type_tag()),
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_transform(&self) -> Option<&RegRefTransform> {
        match self {
            Value::Transform(transform) => Some(transform),
            _ => None,
        }
    }

    /// Like `Display`, but strings are quoted.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Value {
        match scalar {
            Scalar::Int(n) => Value::Int(n),
            Scalar::Float(x) => Value::Float(x),
            Scalar::Complex(z) => Value::Complex(z),
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Str(s) => Value::Str(s),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Scalar::from(n).into()
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Value {
        Value::Array(array)
    }
}

impl From<RegRefTransform> for Value {
    fn from(transform: RegRefTransform) -> Value {
        Value::Transform(transform)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array(array) => fmt::Display::fmt(array, f),
            Value::Transform(transform) => fmt::Display::fmt(transform, f),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Complex(z) => fmt_complex(*z, f),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Str(s) => f.write_str(s),
        }
    }
}
