// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Typed wrappers for every node kind, plus the closed enums `Expr`, `Item`
//! and `ListenerNode` grouping them.

use std::fmt;

use crate::{
    ast::AstNode,
    SyntaxKind::{self, *},
    SyntaxNode,
};

macro_rules! ast_node {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name {
                pub(crate) syntax: SyntaxNode,
            }

            impl AstNode for $name {
                fn can_cast(kind: SyntaxKind) -> bool {
                    kind == $kind
                }

                fn cast(syntax: SyntaxNode) -> Option<Self> {
                    if Self::can_cast(syntax.kind()) {
                        Some(Self { syntax })
                    } else {
                        None
                    }
                }

                fn syntax(&self) -> &SyntaxNode {
                    &self.syntax
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self.syntax(), f)
                }
            }
        )*
    };
}

ast_node! {
    /// Root of a Blackbird source.
    Program => PROGRAM;
    /// `name <programname>`
    DeclareName => DECLARE_NAME;
    /// `version <number>`
    Version => VERSION;
    /// `target <device> (<arguments>)`
    Target => TARGET;
    /// `<vartype> <name> = <expression>`
    ExpressionVar => EXPRESSION_VAR;
    /// `<vartype> array <name>[<shape>] =` followed by rows
    ArrayVar => ARRAY_VAR;
    VarType => VAR_TYPE;
    Name => NAME;
    Shape => SHAPE;
    ArrayVal => ARRAY_VAL;
    ArrayRow => ARRAY_ROW;
    /// `<operation or measurement>(<arguments>) | <modes>`
    Statement => STATEMENT;
    Operation => OPERATION;
    Measure => MEASURE;
    Modes => MODES;
    ArgList => ARG_LIST;
    Kwarg => KWARG;
    Literal => LITERAL;
    Identifier => IDENTIFIER;
    RegRefExpr => REGREF_EXPR;
    ParenExpr => PAREN_EXPR;
    PrefixExpr => PREFIX_EXPR;
    BinExpr => BIN_EXPR;
    CallExpr => CALL_EXPR;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    Identifier(Identifier),
    RegRefExpr(RegRefExpr),
    ParenExpr(ParenExpr),
    PrefixExpr(PrefixExpr),
    BinExpr(BinExpr),
    CallExpr(CallExpr),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            LITERAL | IDENTIFIER | REGREF_EXPR | PAREN_EXPR | PREFIX_EXPR | BIN_EXPR | CALL_EXPR
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            LITERAL => Expr::Literal(Literal { syntax }),
            IDENTIFIER => Expr::Identifier(Identifier { syntax }),
            REGREF_EXPR => Expr::RegRefExpr(RegRefExpr { syntax }),
            PAREN_EXPR => Expr::ParenExpr(ParenExpr { syntax }),
            PREFIX_EXPR => Expr::PrefixExpr(PrefixExpr { syntax }),
            BIN_EXPR => Expr::BinExpr(BinExpr { syntax }),
            CALL_EXPR => Expr::CallExpr(CallExpr { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Expr::Literal(it) => &it.syntax,
            Expr::Identifier(it) => &it.syntax,
            Expr::RegRefExpr(it) => &it.syntax,
            Expr::ParenExpr(it) => &it.syntax,
            Expr::PrefixExpr(it) => &it.syntax,
            Expr::BinExpr(it) => &it.syntax,
            Expr::CallExpr(it) => &it.syntax,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.syntax(), f)
    }
}

/// Top-level items of a program, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    DeclareName(DeclareName),
    Version(Version),
    Target(Target),
    ExpressionVar(ExpressionVar),
    ArrayVar(ArrayVar),
    Statement(Statement),
}

impl AstNode for Item {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            DECLARE_NAME | VERSION | TARGET | EXPRESSION_VAR | ARRAY_VAR | STATEMENT
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            DECLARE_NAME => Item::DeclareName(DeclareName { syntax }),
            VERSION => Item::Version(Version { syntax }),
            TARGET => Item::Target(Target { syntax }),
            EXPRESSION_VAR => Item::ExpressionVar(ExpressionVar { syntax }),
            ARRAY_VAR => Item::ArrayVar(ArrayVar { syntax }),
            STATEMENT => Item::Statement(Statement { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Item::DeclareName(it) => &it.syntax,
            Item::Version(it) => &it.syntax,
            Item::Target(it) => &it.syntax,
            Item::ExpressionVar(it) => &it.syntax,
            Item::ArrayVar(it) => &it.syntax,
            Item::Statement(it) => &it.syntax,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.syntax(), f)
    }
}

/// The node kinds a program listener reacts to when the walk leaves them.
/// Every other node kind is only reached through the accessors of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerNode {
    Program(Program),
    Item(Item),
}

impl AstNode for ListenerNode {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == PROGRAM || Item::can_cast(kind)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == PROGRAM {
            Some(ListenerNode::Program(Program { syntax }))
        } else {
            Item::cast(syntax).map(ListenerNode::Item)
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            ListenerNode::Program(it) => &it.syntax,
            ListenerNode::Item(it) => it.syntax(),
        }
    }
}

macro_rules! item_from {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Item {
                fn from(node: $name) -> Item {
                    Item::$name(node)
                }
            }
        )*
    };
}

item_from!(DeclareName, Version, Target, ExpressionVar, ArrayVar, Statement);
