// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Type-checked variable declarations.
//!
//! Declared values are converted to their declared type before they are
//! inserted, so every value in a [`VariableTable`] has the type its
//! declaration names. Redeclaring a name replaces the old value.

use indexmap::IndexMap;
use itertools::Itertools;
use tracing::debug;

use bb_syntax::ast::{self, HasExpr, HasName, HasTextName, HasVarType};

use crate::evaluate::evaluate_expr;
use crate::reserved::{classify_identifier, IdentifierClass};
use crate::semantic_error::SemanticError;
use crate::symbolic::Evaluated;
use crate::types::TypeTag;
use crate::value::{Array, Value};

/// Variables in declaration order.
pub type VariableTable = IndexMap<String, Value>;

/// Reject names that look like register references or are keywords.
fn check_identifier(name: &ast::Name) -> Result<String, SemanticError> {
    let text = name.string();
    match classify_identifier(&text) {
        IdentifierClass::Ordinary => Ok(text),
        IdentifierClass::RegRef(_) => Err(SemanticError::syntax_error(
            name,
            format!("Variable name '{text}' is reserved for register references"),
        )),
        IdentifierClass::Keyword => Err(SemanticError::syntax_error(
            name,
            format!("Variable name '{text}' is a reserved Blackbird keyword"),
        )),
    }
}

/// Declare a scalar variable, e.g. `float alpha = 0.5 * pi`.
pub fn declare_scalar(
    decl: &ast::ExpressionVar,
    table: &mut VariableTable,
) -> Result<(), SemanticError> {
    let name = decl
        .name()
        .ok_or_else(|| SemanticError::missing(decl, "variable name"))?;
    let name = check_identifier(&name)?;
    let type_name = decl
        .var_type()
        .ok_or_else(|| SemanticError::missing(decl, "variable type"))?
        .string();
    let expr = decl
        .expr()
        .ok_or_else(|| SemanticError::missing(decl, "value"))?;
    let evaluated = evaluate_expr(&expr, table)?;

    let converted = match (TypeTag::from_name(&type_name), &evaluated) {
        (Some(tag), Evaluated::Concrete(value)) => {
            value.as_scalar().and_then(|scalar| tag.convert(&scalar))
        }
        _ => None,
    };
    let Some(scalar) = converted else {
        return Err(SemanticError::type_error(
            decl,
            format!("Var {name} = {evaluated} is not of declared type {type_name}"),
        ));
    };
    debug!(variable = %name, value = %scalar, "declared scalar");
    table.insert(name, scalar.into());
    Ok(())
}

// Python tuple notation: `(2,)`, `(2, 3)`.
fn fmt_shape(shape: &[usize]) -> String {
    match shape {
        [n] => format!("({n},)"),
        dims => format!("({})", dims.iter().join(", ")),
    }
}

/// Declare an array variable, one row per line:
///
/// ```text
/// complex array U[2, 2] =
///     1, 1j
///     -1j, 1
/// ```
pub fn declare_array(
    decl: &ast::ArrayVar,
    table: &mut VariableTable,
) -> Result<(), SemanticError> {
    let name = decl
        .name()
        .ok_or_else(|| SemanticError::missing(decl, "variable name"))?;
    let name = check_identifier(&name)?;
    let type_name = decl
        .var_type()
        .ok_or_else(|| SemanticError::missing(decl, "variable type"))?
        .string();

    let declared_shape = match decl.shape() {
        Some(shape) => Some(
            shape
                .dims()
                .map(|dim| {
                    dim.text().parse::<usize>().map_err(|_| {
                        SemanticError::syntax_error(
                            &shape,
                            format!("Invalid dimension '{}' in shape of {name}", dim.text()),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };

    let array_val = decl
        .array_val()
        .ok_or_else(|| SemanticError::missing(decl, "array value"))?;
    let mut rows = Vec::new();
    for row in array_val.rows() {
        let mut cells = Vec::new();
        for cell in row.cells() {
            cells.push(evaluate_expr(&cell, table)?);
        }
        rows.push(cells);
    }

    let not_of_type = || {
        SemanticError::syntax_error(
            decl,
            format!("Array var {name} is not of declared type {type_name}"),
        )
    };
    let tag = TypeTag::from_name(&type_name).ok_or_else(not_of_type)?;
    // Symbolic cells, nested arrays and transforms have no scalar value.
    let scalar_rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Evaluated::Concrete(value) => value.as_scalar(),
                    Evaluated::Symbolic(_) => None,
                })
                .collect::<Option<Vec<_>>>()
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(not_of_type)?;
    let array = Array::from_rows(tag, &scalar_rows).ok_or_else(not_of_type)?;

    if let Some(declared) = declared_shape {
        if declared != array.shape() {
            return Err(SemanticError::syntax_error(
                decl,
                format!(
                    "Array var {name} has declared shape {} but actual shape {}",
                    fmt_shape(&declared),
                    fmt_shape(array.shape())
                ),
            ));
        }
    }
    debug!(variable = %name, dtype = %tag, shape = ?array.shape(), "declared array");
    table.insert(name, array.into());
    Ok(())
}
