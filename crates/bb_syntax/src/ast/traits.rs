// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Various traits that are implemented by ast nodes.
//!
//! The implementations are trivial and are listed at the bottom of this file.

use either::Either;

use crate::ast::{self, support, AstNode};

pub trait HasName: AstNode {
    fn name(&self) -> Option<ast::Name> {
        support::child(self.syntax())
    }
}

pub trait HasArgList: AstNode {
    fn arg_list(&self) -> Option<ast::ArgList> {
        support::child(self.syntax())
    }
}

/// Nodes with exactly one expression child.
pub trait HasExpr: AstNode {
    fn expr(&self) -> Option<ast::Expr> {
        support::child(self.syntax())
    }
}

pub trait HasVarType: AstNode {
    fn var_type(&self) -> Option<ast::VarType> {
        support::child(self.syntax())
    }
}

impl<A: HasName, B: HasName> HasName for Either<A, B> {}

impl HasName for ast::ExpressionVar {}
impl HasName for ast::ArrayVar {}
impl HasName for ast::Kwarg {}

impl HasArgList for ast::Target {}
impl HasArgList for ast::Statement {}

impl HasExpr for ast::ExpressionVar {}
impl HasExpr for ast::Kwarg {}
impl HasExpr for ast::ParenExpr {}
impl HasExpr for ast::PrefixExpr {}
impl HasExpr for ast::CallExpr {}

impl HasVarType for ast::ExpressionVar {}
impl HasVarType for ast::ArrayVar {}
