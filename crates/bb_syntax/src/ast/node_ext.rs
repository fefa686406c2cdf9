// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Various extension methods to ast Nodes, which are hard to code-generate.
//! Extensions for expressions live in the sibling `expr_ext` module.
//!
//! These methods should only do simple, shallow tasks related to the syntax of the node itself.

use crate::{
    ast::{self, support, AstChildren, AstNode},
    SyntaxKind::*,
    SyntaxToken,
};

// Several AstNodes consist of a single significant token, a name or a keyword.
// `text` returns the text of that token rather than the text of the whole
// subtree, so surrounding trivia is never included.
pub trait HasTextName: AstNode {
    fn token(&self) -> Option<SyntaxToken> {
        support::first_significant_token(self.syntax())
    }

    fn string(&self) -> String {
        self.token()
            .map(|token| token.text().to_string())
            .unwrap_or_default()
    }
}

impl HasTextName for ast::Name {}
impl HasTextName for ast::VarType {}
impl HasTextName for ast::Operation {}
impl HasTextName for ast::Measure {}
impl HasTextName for ast::Identifier {}

impl ast::Program {
    pub fn items(&self) -> AstChildren<ast::Item> {
        support::children(self.syntax())
    }
}

impl ast::DeclareName {
    pub fn program_name(&self) -> Option<ast::Name> {
        support::child(self.syntax())
    }
}

impl ast::Version {
    pub fn version_number(&self) -> Option<SyntaxToken> {
        self.syntax()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|it| matches!(it.kind(), FLOAT_NUMBER | INT_NUMBER))
    }
}

impl ast::Target {
    pub fn device(&self) -> Option<ast::Name> {
        support::child(self.syntax())
    }
}

impl ast::ArrayVar {
    pub fn shape(&self) -> Option<ast::Shape> {
        support::child(self.syntax())
    }

    pub fn array_val(&self) -> Option<ast::ArrayVal> {
        support::child(self.syntax())
    }
}

impl ast::Shape {
    /// The integer tokens of the shape annotation, separators excluded.
    pub fn dims(&self) -> impl Iterator<Item = SyntaxToken> {
        support::tokens(self.syntax(), INT_NUMBER)
    }
}

impl ast::ArrayVal {
    pub fn rows(&self) -> AstChildren<ast::ArrayRow> {
        support::children(self.syntax())
    }
}

impl ast::ArrayRow {
    pub fn cells(&self) -> AstChildren<ast::Expr> {
        support::children(self.syntax())
    }
}

impl ast::Statement {
    pub fn operation(&self) -> Option<ast::Operation> {
        support::child(self.syntax())
    }

    pub fn measure(&self) -> Option<ast::Measure> {
        support::child(self.syntax())
    }

    pub fn modes(&self) -> Option<ast::Modes> {
        support::child(self.syntax())
    }
}

impl ast::Modes {
    /// The mode index tokens in source order, separators excluded.
    pub fn indices(&self) -> impl Iterator<Item = SyntaxToken> {
        support::tokens(self.syntax(), INT_NUMBER)
    }
}

impl ast::ArgList {
    /// Positional arguments in source order.
    pub fn args(&self) -> AstChildren<ast::Expr> {
        support::children(self.syntax())
    }

    pub fn kwargs(&self) -> AstChildren<ast::Kwarg> {
        support::children(self.syntax())
    }
}
