// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! This module defines the Concrete Syntax Tree (CST) handed over by a Blackbird parser.
//!
//! The CST includes comments and whitespace, provides a single node type,
//! `SyntaxNode`, and a basic traversal API (parent, children, siblings).
//!
//! The *real* implementation is in the (language-agnostic) `rowan` crate, this
//! module just wraps its API.

use rowan::{GreenNodeBuilder, Language};

use crate::SyntaxKind;

pub use rowan::{GreenNode, GreenToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlackbirdLanguage {}
impl Language for BlackbirdLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        SyntaxKind::from(raw.0)
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind.into())
    }
}

pub type SyntaxNode = rowan::SyntaxNode<BlackbirdLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<BlackbirdLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<BlackbirdLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<BlackbirdLanguage>;
pub type SyntaxElementChildren = rowan::SyntaxElementChildren<BlackbirdLanguage>;
pub type Preorder = rowan::api::Preorder<BlackbirdLanguage>;

/// A green node or token, the unit `make` composes trees from.
pub type GreenElement = rowan::NodeOrToken<GreenNode, GreenToken>;

/// Event-style builder for parsers. Every `start_node` must be matched by a
/// `finish_node`; tokens must be pushed in source order, trivia included,
/// so that text ranges of the resulting tree index into the source.
#[derive(Default)]
pub struct SyntaxTreeBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl SyntaxTreeBuilder {
    pub fn finish_green(self) -> GreenNode {
        self.inner.finish()
    }

    pub fn finish(self) -> SyntaxNode {
        SyntaxNode::new_root(self.finish_green())
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        let kind = BlackbirdLanguage::kind_to_raw(kind);
        self.inner.token(kind, text);
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        let kind = BlackbirdLanguage::kind_to_raw(kind);
        self.inner.start_node(kind);
    }

    pub fn finish_node(&mut self) {
        self.inner.finish_node();
    }
}

pub(crate) fn green_token(kind: SyntaxKind, text: &str) -> GreenElement {
    rowan::NodeOrToken::Token(GreenToken::new(
        BlackbirdLanguage::kind_to_raw(kind),
        text,
    ))
}

pub(crate) fn green_node<I>(kind: SyntaxKind, children: I) -> GreenNode
where
    I: IntoIterator<Item = GreenElement>,
{
    let children: Vec<GreenElement> = children.into_iter().collect();
    GreenNode::new(BlackbirdLanguage::kind_to_raw(kind), children)
}
