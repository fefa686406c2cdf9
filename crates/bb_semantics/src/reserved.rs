// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Language constants: the register-reference prefix, reserved keywords and
//! the table of math functions callable in expressions.

use std::fmt;

/// A register reference is this prefix followed by a mode index, e.g. `q3`.
pub const REGREF_PREFIX: char = 'q';

/// Words that cannot be used as variable names.
pub const KEYWORDS: &[&str] = &[
    "name", "version", "target", "array", "float", "complex", "int", "str", "bool", "True",
    "False", "pi",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierClass {
    Ordinary,
    /// Matches the register-reference pattern; carries the mode index.
    RegRef(usize),
    Keyword,
}

/// Mode index of a register reference such as `q12`, or `None` if `text` is
/// not one. Only ASCII digits may follow the prefix.
pub fn regref_index(text: &str) -> Option<usize> {
    let digits = text.strip_prefix(REGREF_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text) || MathFunction::from_name(text).is_some()
}

pub fn classify_identifier(text: &str) -> IdentifierClass {
    if let Some(mode) = regref_index(text) {
        IdentifierClass::RegRef(mode)
    } else if is_keyword(text) {
        IdentifierClass::Keyword
    } else {
        IdentifierClass::Ordinary
    }
}

/// Unary functions that may be called in expressions, named as in NumPy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathFunction {
    Exp,
    Log,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Sinh,
    Cosh,
    Tanh,
    Arcsinh,
    Arccosh,
    Arctanh,
}

impl MathFunction {
    pub const ALL: [MathFunction; 15] = [
        MathFunction::Exp,
        MathFunction::Log,
        MathFunction::Sqrt,
        MathFunction::Sin,
        MathFunction::Cos,
        MathFunction::Tan,
        MathFunction::Arcsin,
        MathFunction::Arccos,
        MathFunction::Arctan,
        MathFunction::Sinh,
        MathFunction::Cosh,
        MathFunction::Tanh,
        MathFunction::Arcsinh,
        MathFunction::Arccosh,
        MathFunction::Arctanh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MathFunction::Exp => "exp",
            MathFunction::Log => "log",
            MathFunction::Sqrt => "sqrt",
            MathFunction::Sin => "sin",
            MathFunction::Cos => "cos",
            MathFunction::Tan => "tan",
            MathFunction::Arcsin => "arcsin",
            MathFunction::Arccos => "arccos",
            MathFunction::Arctan => "arctan",
            MathFunction::Sinh => "sinh",
            MathFunction::Cosh => "cosh",
            MathFunction::Tanh => "tanh",
            MathFunction::Arcsinh => "arcsinh",
            MathFunction::Arccosh => "arccosh",
            MathFunction::Arctanh => "arctanh",
        }
    }

    pub fn from_name(name: &str) -> Option<MathFunction> {
        MathFunction::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for MathFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
