// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

// Drive a listener over a syntax tree, and build a `Program` from an ast.
//
// In the filename syntax_to_semantics.rs, "syntax" is a noun and "semantics" is a noun.

use bb_syntax::ast::{self, ListenerNode};
use bb_syntax::{AstNode, SyntaxNode, WalkEvent};

use crate::listener::ProgramListener;
use crate::program::Program;
use crate::semantic_error::SemanticError;

/// Receives an event each time the walk leaves a node the listener cares about.
pub trait ExitListener {
    fn exit(&mut self, node: &ListenerNode) -> Result<(), SemanticError>;
}

/// Walk the tree under `root` in document order, calling `listener` on the
/// exit of every listened-to node. Children are exited before their parent.
/// The first error stops the walk.
pub fn walk<L: ExitListener>(listener: &mut L, root: &SyntaxNode) -> Result<(), SemanticError> {
    for event in root.preorder() {
        if let WalkEvent::Leave(node) = event {
            if let Some(node) = ListenerNode::cast(node) {
                listener.exit(&node)?;
            }
        }
    }
    Ok(())
}

/// Run a fresh [`ProgramListener`] over `program`.
pub fn analyze(program: &ast::Program) -> Result<Program, SemanticError> {
    let mut listener = ProgramListener::new();
    walk(&mut listener, program.syntax())?;
    Ok(listener.finish())
}
