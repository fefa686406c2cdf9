// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use bb_source_file::{line_col, ErrorTrait, LineCol};
use bb_syntax::{AstNode, SyntaxNode};

// re-exported in lib.rs from rowan
use crate::TextRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SemanticErrorKind {
    /// Reserved identifiers, malformed arrays and array shape mismatches.
    SyntaxError,
    /// A scalar value that the declared type cannot hold.
    TypeError,
    /// Malformed literals, undefined names, unsupported operands and
    /// arithmetic failures.
    EvaluationError,
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = match self {
            SemanticErrorKind::SyntaxError => "SyntaxError",
            SemanticErrorKind::TypeError => "TypeError",
            SemanticErrorKind::EvaluationError => "EvaluationError",
        };
        f.write_str(res)
    }
}

/// An error that aborts semantic extraction.
///
/// The position is resolved when the error is created, from the root of the
/// tree containing the offending node, so an error stays meaningful after the
/// tree is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SemanticError {
    kind: SemanticErrorKind,
    range: TextRange,
    position: LineCol,
    message: String,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, node: &SyntaxNode, message: impl Into<String>) -> Self {
        let range = node.text_range();
        // `ancestors` starts at `node` itself, so there is always a last element.
        let root = node.ancestors().last().unwrap_or_else(|| node.clone());
        let position = line_col(&root.text().to_string(), range.start());
        Self {
            kind,
            range,
            position,
            message: message.into(),
        }
    }

    pub fn syntax_error<T: AstNode>(node: &T, message: impl Into<String>) -> Self {
        Self::new(SemanticErrorKind::SyntaxError, node.syntax(), message)
    }

    pub fn type_error<T: AstNode>(node: &T, message: impl Into<String>) -> Self {
        Self::new(SemanticErrorKind::TypeError, node.syntax(), message)
    }

    pub fn evaluation_error<T: AstNode>(node: &T, message: impl Into<String>) -> Self {
        Self::new(SemanticErrorKind::EvaluationError, node.syntax(), message)
    }

    /// A required child of `node` is absent. Trees from a conforming parser
    /// never trigger this.
    pub(crate) fn missing<T: AstNode>(node: &T, what: &str) -> Self {
        Self::syntax_error(node, format!("Missing {what}"))
    }

    pub fn kind(&self) -> SemanticErrorKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Line of the error, counting from 1.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Column of the error in characters, counting from 0.
    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorTrait for SemanticError {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn range(&self) -> TextRange {
        self.range
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Blackbird {} (line {}:{}): {}",
            self.kind, self.position.line, self.position.column, self.message
        )
    }
}

impl std::error::Error for SemanticError {}
