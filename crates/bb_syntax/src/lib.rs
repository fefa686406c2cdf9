// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Syntax tree contract for the Blackbird semantic front end.
//!
//! A Blackbird parser (not part of this workspace) hands over a lossless
//! `rowan` tree whose node and token kinds are those of [`SyntaxKind`].
//! The [`ast`] module layers typed accessors on top of the untyped nodes;
//! semantic analysis only ever reads the tree through them.
//!
//! Parsers emit trees with [`SyntaxTreeBuilder`]. Tools and tests that build
//! trees directly use the constructors in [`ast::make`].

mod syntax_kind;
mod syntax_node;

pub mod ast;

#[cfg(test)]
mod tests;

pub use crate::{
    ast::{AstNode, HasTextName},
    syntax_kind::SyntaxKind,
    syntax_node::{
        BlackbirdLanguage, GreenElement, GreenNode, GreenToken, Preorder, SyntaxElement,
        SyntaxElementChildren, SyntaxNode, SyntaxNodeChildren, SyntaxToken, SyntaxTreeBuilder,
    },
};
pub use rowan::{NodeOrToken, TextRange, TextSize, WalkEvent};
