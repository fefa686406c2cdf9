// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Various extension methods to ast Expr Nodes, which are hard to code-generate.
//!
//! These methods should only do simple, shallow tasks related to the syntax of the node itself.

use crate::{
    ast::{
        self,
        operators::{BinaryOp, UnaryOp},
        support, AstNode,
    },
    SyntaxKind::*,
    SyntaxToken, T,
};

/// The literal forms a Blackbird lexer produces. Numeric text is not
/// interpreted here; that is the job of the semantic layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    IntNumber(SyntaxToken),
    FloatNumber(SyntaxToken),
    /// A number with imaginary suffix, e.g. `2j` or `0.5j`.
    ImagNumber(SyntaxToken),
    String(SyntaxToken),
    Bool(bool),
    Pi,
}

impl ast::Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        support::first_significant_token(self.syntax())
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        let token = self.token()?;
        let kind = match token.kind() {
            INT_NUMBER => LiteralKind::IntNumber(token),
            FLOAT_NUMBER => LiteralKind::FloatNumber(token),
            IMAG_NUMBER => LiteralKind::ImagNumber(token),
            STRING => LiteralKind::String(token),
            TRUE_KW => LiteralKind::Bool(true),
            FALSE_KW => LiteralKind::Bool(false),
            PI_KW => LiteralKind::Pi,
            _ => return None,
        };
        Some(kind)
    }
}

impl ast::RegRefExpr {
    pub fn regref_token(&self) -> Option<SyntaxToken> {
        support::first_significant_token(self.syntax())
    }
}

impl ast::PrefixExpr {
    pub fn op_kind(&self) -> Option<UnaryOp> {
        let res = match self.op_token()?.kind() {
            T![-] => UnaryOp::Neg,
            T![+] => UnaryOp::Plus,
            _ => return None,
        };
        Some(res)
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        support::first_significant_token(self.syntax())
    }
}

impl ast::BinExpr {
    pub fn op_details(&self) -> Option<(SyntaxToken, BinaryOp)> {
        self.syntax()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find_map(|c| {
                let bin_op = match c.kind() {
                    T![+] => BinaryOp::Add,
                    T![-] => BinaryOp::Sub,
                    T![*] => BinaryOp::Mul,
                    T![/] => BinaryOp::Div,
                    T![**] => BinaryOp::Pow,
                    _ => return None,
                };
                Some((c, bin_op))
            })
    }

    pub fn op_kind(&self) -> Option<BinaryOp> {
        self.op_details().map(|t| t.1)
    }

    pub fn op_token(&self) -> Option<SyntaxToken> {
        self.op_details().map(|t| t.0)
    }

    pub fn lhs(&self) -> Option<ast::Expr> {
        support::children(self.syntax()).next()
    }

    pub fn rhs(&self) -> Option<ast::Expr> {
        support::children(self.syntax()).nth(1)
    }
}

impl ast::CallExpr {
    /// The token naming the called function, e.g. `sin` in `sin(q0)`.
    pub fn function_token(&self) -> Option<SyntaxToken> {
        support::token(self.syntax(), IDENT)
    }
}
