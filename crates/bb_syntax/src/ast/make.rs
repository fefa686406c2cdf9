// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! This module contains free-standing functions for creating AST fragments out
//! of smaller pieces.
//!
//! Note that all functions here are intended to be stupid constructors, which just
//! assemble a finished node from immediate children. Tokens and trivia are laid out
//! the way a Blackbird lexer would produce them, so that the text of the built tree
//! is valid Blackbird and text ranges map to plausible lines and columns.
//!
//! Each function returns a node that is the root of its own tree. Composite
//! constructors copy the green nodes of their arguments, so building never
//! mutates an existing tree.

use itertools::Itertools;

use crate::{
    ast::{self, AstNode, BinaryOp, UnaryOp},
    syntax_node::{green_node, green_token, GreenElement},
    SyntaxKind::{self, *},
    SyntaxNode, T,
};

#[track_caller]
fn cast_root<N: AstNode>(kind: SyntaxKind, children: Vec<GreenElement>) -> N {
    let green = green_node(kind, children);
    match N::cast(SyntaxNode::new_root(green)) {
        Some(it) => it,
        None => {
            let node = std::any::type_name::<N>();
            panic!("Failed to make ast node `{node}` from kind {kind:?}")
        }
    }
}

fn green<N: AstNode>(node: &N) -> GreenElement {
    rowan::NodeOrToken::Node(node.syntax().green().into_owned())
}

fn ws() -> GreenElement {
    green_token(WHITESPACE, " ")
}

fn newline() -> GreenElement {
    green_token(NEWLINE, "\n")
}

/// Join groups of elements with `, `.
fn comma_separated<I>(groups: I) -> Vec<GreenElement>
where
    I: IntoIterator<Item = Vec<GreenElement>>,
{
    Itertools::intersperse(groups.into_iter(), vec![green_token(T![,], ","), ws()])
        .flatten()
        .collect()
}

pub fn name(text: &str) -> ast::Name {
    cast_root(NAME, vec![green_token(SyntaxKind::from_word(text), text)])
}

pub fn var_type(text: &str) -> ast::VarType {
    cast_root(VAR_TYPE, vec![green_token(SyntaxKind::from_word(text), text)])
}

//
// Expressions
//

/// A literal token; its kind is inferred from `text`, e.g. `3`, `0.5`, `2j`, `"abc"`, `True`, `pi`.
pub fn literal(text: &str) -> ast::Expr {
    cast_root(
        LITERAL,
        vec![green_token(SyntaxKind::from_literal_text(text), text)],
    )
}

pub fn string_literal(value: &str) -> ast::Expr {
    literal(&format!("\"{value}\""))
}

pub fn ident(text: &str) -> ast::Expr {
    cast_root(IDENTIFIER, vec![green_token(IDENT, text)])
}

pub fn regref(mode: usize) -> ast::Expr {
    cast_root(REGREF_EXPR, vec![green_token(REGREF, &format!("q{mode}"))])
}

pub fn paren_expr(expr: ast::Expr) -> ast::Expr {
    cast_root(
        PAREN_EXPR,
        vec![
            green_token(T!['('], "("),
            green(&expr),
            green_token(T![')'], ")"),
        ],
    )
}

pub fn prefix_expr(op: UnaryOp, expr: ast::Expr) -> ast::Expr {
    let op_token = match op {
        UnaryOp::Neg => green_token(T![-], "-"),
        UnaryOp::Plus => green_token(T![+], "+"),
    };
    cast_root(PREFIX_EXPR, vec![op_token, green(&expr)])
}

pub fn bin_expr(lhs: ast::Expr, op: BinaryOp, rhs: ast::Expr) -> ast::Expr {
    let op_token = match op {
        BinaryOp::Add => green_token(T![+], "+"),
        BinaryOp::Sub => green_token(T![-], "-"),
        BinaryOp::Mul => green_token(T![*], "*"),
        BinaryOp::Div => green_token(T![/], "/"),
        BinaryOp::Pow => green_token(T![**], "**"),
    };
    cast_root(BIN_EXPR, vec![green(&lhs), ws(), op_token, ws(), green(&rhs)])
}

pub fn call_expr(function: &str, arg: ast::Expr) -> ast::Expr {
    cast_root(
        CALL_EXPR,
        vec![
            green_token(IDENT, function),
            green_token(T!['('], "("),
            green(&arg),
            green_token(T![')'], ")"),
        ],
    )
}

//
// Arguments
//

pub fn kwarg(name_text: &str, value: ast::Expr) -> ast::Kwarg {
    cast_root(
        KWARG,
        vec![
            green(&name(name_text)),
            green_token(T![=], "="),
            green(&value),
        ],
    )
}

pub fn arg_list<A, K>(args: A, kwargs: K) -> ast::ArgList
where
    A: IntoIterator<Item = ast::Expr>,
    K: IntoIterator<Item = ast::Kwarg>,
{
    let groups = args
        .into_iter()
        .map(|arg| vec![green(&arg)])
        .chain(kwargs.into_iter().map(|kwarg| vec![green(&kwarg)]));
    let mut children = vec![green_token(T!['('], "(")];
    children.extend(comma_separated(groups));
    children.push(green_token(T![')'], ")"));
    cast_root(ARG_LIST, children)
}

//
// Items
//

pub fn declare_name(program_name: &str) -> ast::DeclareName {
    cast_root(
        DECLARE_NAME,
        vec![
            green_token(NAME_KW, "name"),
            ws(),
            green(&name(program_name)),
        ],
    )
}

pub fn version(number: &str) -> ast::Version {
    cast_root(
        VERSION,
        vec![
            green_token(VERSION_KW, "version"),
            ws(),
            green_token(SyntaxKind::from_literal_text(number), number),
        ],
    )
}

pub fn target(device: &str, args: Option<ast::ArgList>) -> ast::Target {
    let mut children = vec![green_token(TARGET_KW, "target"), ws(), green(&name(device))];
    children.extend(args.as_ref().map(green));
    cast_root(TARGET, children)
}

/// `<ty> <name> = <value>`
pub fn expression_var(ty: &str, name_text: &str, value: ast::Expr) -> ast::ExpressionVar {
    cast_root(
        EXPRESSION_VAR,
        vec![
            green(&var_type(ty)),
            ws(),
            green(&name(name_text)),
            ws(),
            green_token(T![=], "="),
            ws(),
            green(&value),
        ],
    )
}

/// An array declaration with one indented line per row:
///
/// ```text
/// float array M[2, 2] =
///     1, 2
///     3, 4
/// ```
pub fn array_var<R>(ty: &str, name_text: &str, shape: Option<&[usize]>, rows: R) -> ast::ArrayVar
where
    R: IntoIterator<Item = Vec<ast::Expr>>,
{
    let mut children = vec![
        green(&var_type(ty)),
        ws(),
        green_token(ARRAY_KW, "array"),
        ws(),
        green(&name(name_text)),
    ];
    if let Some(shape) = shape {
        let dims = shape
            .iter()
            .map(|dim| vec![green_token(INT_NUMBER, &dim.to_string())]);
        children.push(green_token(T!['['], "["));
        children.push(rowan::NodeOrToken::Node(green_node(
            SHAPE,
            comma_separated(dims),
        )));
        children.push(green_token(T![']'], "]"));
    }
    children.push(ws());
    children.push(green_token(T![=], "="));

    let mut val_children = Vec::new();
    for row in rows {
        let cells = row.iter().map(|cell| vec![green(cell)]);
        val_children.push(newline());
        val_children.push(green_token(WHITESPACE, "    "));
        val_children.push(rowan::NodeOrToken::Node(green_node(
            ARRAY_ROW,
            comma_separated(cells),
        )));
    }
    children.push(rowan::NodeOrToken::Node(green_node(ARRAY_VAL, val_children)));
    cast_root(ARRAY_VAR, children)
}

/// `<op>(<args>) | <modes>`. Names starting with `Measure` become measurement nodes.
/// Several modes are written in brackets, a single one bare.
pub fn statement(op: &str, args: Option<ast::ArgList>, modes: &[usize]) -> ast::Statement {
    let op_kind = if op.starts_with("Measure") {
        MEASURE
    } else {
        OPERATION
    };
    let mut children = vec![rowan::NodeOrToken::Node(green_node(
        op_kind,
        vec![green_token(IDENT, op)],
    ))];
    children.extend(args.as_ref().map(green));
    children.push(ws());
    children.push(green_token(T![|], "|"));
    children.push(ws());

    let indices = modes
        .iter()
        .map(|mode| vec![green_token(INT_NUMBER, &mode.to_string())]);
    let modes_node = rowan::NodeOrToken::Node(green_node(MODES, comma_separated(indices)));
    if modes.len() > 1 {
        children.push(green_token(T!['['], "["));
        children.push(modes_node);
        children.push(green_token(T![']'], "]"));
    } else {
        children.push(modes_node);
    }
    cast_root(STATEMENT, children)
}

/// Assemble a program, one item per line.
pub fn program<I>(items: I) -> ast::Program
where
    I: IntoIterator<Item = ast::Item>,
{
    let mut children = Vec::new();
    for item in items {
        children.push(green(&item));
        children.push(newline());
    }
    cast_root(PROGRAM, children)
}
