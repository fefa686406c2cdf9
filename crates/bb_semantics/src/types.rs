// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

// Declared types of Blackbird variables, and the one conversion each of
// them applies to an evaluated scalar.

use std::fmt;

use num_complex::Complex64;

use crate::value::Scalar;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    Complex,
    Str,
    Bool,
}

impl TypeTag {
    pub fn from_name(name: &str) -> Option<TypeTag> {
        let tag = match name {
            "int" => TypeTag::Int,
            "float" => TypeTag::Float,
            "complex" => TypeTag::Complex,
            "str" => TypeTag::Str,
            "bool" => TypeTag::Bool,
            _ => return None,
        };
        Some(tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Complex => "complex",
            TypeTag::Str => "str",
            TypeTag::Bool => "bool",
        }
    }

    /// Convert `value` to this type, or return `None` if it cannot be
    /// represented. Conversions follow Python casts: `int` truncates floats,
    /// `bool` is truthiness, `str` formats any scalar, and strings are parsed
    /// for the numeric types.
    pub fn convert(self, value: &Scalar) -> Option<Scalar> {
        match self {
            TypeTag::Int => to_int(value).map(Scalar::Int),
            TypeTag::Float => to_float(value).map(Scalar::Float),
            TypeTag::Complex => to_complex(value).map(Scalar::Complex),
            TypeTag::Str => Some(Scalar::Str(value.to_string())),
            TypeTag::Bool => Some(Scalar::Bool(truthiness(value))),
        }
    }

    /// True if `value` already has this type.
    pub fn matches(self, value: &Scalar) -> bool {
        value.type_tag() == self
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn to_int(value: &Scalar) -> Option<i64> {
    match value {
        Scalar::Int(n) => Some(*n),
        Scalar::Bool(b) => Some(i64::from(*b)),
        Scalar::Float(x) => {
            let t = x.trunc();
            // `i64::MAX as f64` is 2^63, which is itself out of range.
            if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
                Some(t as i64)
            } else {
                None
            }
        }
        Scalar::Complex(_) => None,
        Scalar::Str(s) => s.trim().parse().ok(),
    }
}

fn to_float(value: &Scalar) -> Option<f64> {
    match value {
        Scalar::Int(n) => Some(*n as f64),
        Scalar::Bool(b) => Some(f64::from(u8::from(*b))),
        Scalar::Float(x) => Some(*x),
        Scalar::Complex(_) => None,
        Scalar::Str(s) => s.trim().parse().ok(),
    }
}

fn to_complex(value: &Scalar) -> Option<Complex64> {
    match value {
        Scalar::Complex(z) => Some(*z),
        Scalar::Str(s) => parse_complex(s),
        other => to_float(other).map(|re| Complex64::new(re, 0.0)),
    }
}

fn truthiness(value: &Scalar) -> bool {
    match value {
        Scalar::Int(n) => *n != 0,
        Scalar::Float(x) => *x != 0.0,
        Scalar::Complex(z) => z.re != 0.0 || z.im != 0.0,
        Scalar::Bool(b) => *b,
        Scalar::Str(s) => !s.is_empty(),
    }
}

/// Parse the forms `1.5`, `2j`, `1+2j`, `(1-2.5j)`, `-j`.
fn parse_complex(text: &str) -> Option<Complex64> {
    let text = text.trim();
    let text = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    if let Ok(re) = text.parse::<f64>() {
        return Some(Complex64::new(re, 0.0));
    }
    let body = text.strip_suffix(&['j', 'J'][..])?;
    // The sign separating real and imaginary parts is the last one that does
    // not start the text or belong to an exponent.
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
    let (re, im) = match split {
        Some(i) => (body[..i].parse::<f64>().ok()?, &body[i..]),
        None => (0.0, body),
    };
    let im = match im {
        "" | "+" => 1.0,
        "-" => -1.0,
        _ => im.parse::<f64>().ok()?,
    };
    Some(Complex64::new(re, im))
}
