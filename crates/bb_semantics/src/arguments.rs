// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use bb_syntax::ast::{self, HasExpr, HasName, HasTextName};

use crate::evaluate::evaluate_expr;
use crate::semantic_error::SemanticError;
use crate::symbolic::Evaluated;
use crate::variables::VariableTable;

pub type KeywordArguments = IndexMap<String, Evaluated>;

/// Evaluate the positional and keyword arguments of `arg_list`.
///
/// Positional arguments keep their source order. If a keyword repeats, the
/// last value wins and the keyword keeps the position of its first
/// occurrence.
pub fn get_arguments(
    arg_list: &ast::ArgList,
    variables: &VariableTable,
) -> Result<(Vec<Evaluated>, KeywordArguments), SemanticError> {
    let args = arg_list
        .args()
        .map(|arg| evaluate_expr(&arg, variables))
        .collect::<Result<Vec<_>, _>>()?;
    let mut kwargs = KeywordArguments::new();
    for kwarg in arg_list.kwargs() {
        let name = kwarg
            .name()
            .ok_or_else(|| SemanticError::missing(&kwarg, "keyword"))?
            .string();
        let value = kwarg
            .expr()
            .ok_or_else(|| SemanticError::missing(&kwarg, "keyword value"))?;
        kwargs.insert(name, evaluate_expr(&value, variables)?);
    }
    Ok((args, kwargs))
}
