// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Defines [`SyntaxKind`] -- a fieldless enum of all token and node kinds
//! an external Blackbird parser may put into the tree.

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u16)]
pub enum SyntaxKind {
    // Trivia
    WHITESPACE = 0,
    NEWLINE,
    COMMENT,

    // Punctuation
    L_PAREN,
    R_PAREN,
    L_BRACK,
    R_BRACK,
    COMMA,
    EQ,
    PIPE,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    STAR2,

    // Keywords
    NAME_KW,
    VERSION_KW,
    TARGET_KW,
    ARRAY_KW,
    FLOAT_KW,
    COMPLEX_KW,
    INT_KW,
    STR_KW,
    BOOL_KW,
    TRUE_KW,
    FALSE_KW,
    PI_KW,

    // Literal and name tokens
    IDENT,
    REGREF,
    INT_NUMBER,
    FLOAT_NUMBER,
    IMAG_NUMBER,
    STRING,
    ERROR,

    // Nodes
    PROGRAM,
    DECLARE_NAME,
    VERSION,
    TARGET,
    EXPRESSION_VAR,
    ARRAY_VAR,
    VAR_TYPE,
    NAME,
    SHAPE,
    ARRAY_VAL,
    ARRAY_ROW,
    STATEMENT,
    OPERATION,
    MEASURE,
    MODES,
    ARG_LIST,
    KWARG,
    LITERAL,
    IDENTIFIER,
    REGREF_EXPR,
    PAREN_EXPR,
    PREFIX_EXPR,
    BIN_EXPR,
    CALL_EXPR,

    #[doc(hidden)]
    __LAST,
}

use self::SyntaxKind::*;

impl From<u16> for SyntaxKind {
    #[inline]
    fn from(d: u16) -> SyntaxKind {
        assert!(d <= (SyntaxKind::__LAST as u16));
        unsafe { std::mem::transmute::<u16, SyntaxKind>(d) }
    }
}

impl From<SyntaxKind> for u16 {
    #[inline]
    fn from(k: SyntaxKind) -> u16 {
        k as u16
    }
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, WHITESPACE | NEWLINE | COMMENT)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            NAME_KW
                | VERSION_KW
                | TARGET_KW
                | ARRAY_KW
                | FLOAT_KW
                | COMPLEX_KW
                | INT_KW
                | STR_KW
                | BOOL_KW
                | TRUE_KW
                | FALSE_KW
                | PI_KW
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            INT_NUMBER | FLOAT_NUMBER | IMAG_NUMBER | STRING | TRUE_KW | FALSE_KW | PI_KW
        )
    }

    /// Return the keyword kind spelled `ident`, if any.
    pub fn from_keyword(ident: &str) -> Option<SyntaxKind> {
        let kw = match ident {
            "name" => NAME_KW,
            "version" => VERSION_KW,
            "target" => TARGET_KW,
            "array" => ARRAY_KW,
            "float" => FLOAT_KW,
            "complex" => COMPLEX_KW,
            "int" => INT_KW,
            "str" => STR_KW,
            "bool" => BOOL_KW,
            "True" => TRUE_KW,
            "False" => FALSE_KW,
            "pi" => PI_KW,
            _ => return None,
        };
        Some(kw)
    }

    /// Kind of the token a Blackbird lexer produces for the word `word`:
    /// a keyword, a register reference `q<digits>`, or a plain identifier.
    pub fn from_word(word: &str) -> SyntaxKind {
        if let Some(kw) = SyntaxKind::from_keyword(word) {
            return kw;
        }
        match word.strip_prefix('q') {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                REGREF
            }
            _ => IDENT,
        }
    }

    /// Kind of a numeric or string literal token spelled `text`.
    pub fn from_literal_text(text: &str) -> SyntaxKind {
        if let Some(kw) = SyntaxKind::from_keyword(text) {
            return kw;
        }
        if text.starts_with('"') {
            STRING
        } else if text.ends_with('j') {
            IMAG_NUMBER
        } else if text.contains(&['.', 'e', 'E'][..]) {
            FLOAT_NUMBER
        } else {
            INT_NUMBER
        }
    }
}

/// Shorthand for the punctuation token kinds.
#[macro_export]
macro_rules! T {
    ['('] => { $crate::SyntaxKind::L_PAREN };
    [')'] => { $crate::SyntaxKind::R_PAREN };
    ['['] => { $crate::SyntaxKind::L_BRACK };
    [']'] => { $crate::SyntaxKind::R_BRACK };
    [,] => { $crate::SyntaxKind::COMMA };
    [=] => { $crate::SyntaxKind::EQ };
    [|] => { $crate::SyntaxKind::PIPE };
    [+] => { $crate::SyntaxKind::PLUS };
    [-] => { $crate::SyntaxKind::MINUS };
    [*] => { $crate::SyntaxKind::STAR };
    [/] => { $crate::SyntaxKind::SLASH };
    [**] => { $crate::SyntaxKind::STAR2 };
}
