// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Semantic extraction for Blackbird programs.
//!
//! A syntax tree from `bb_syntax` is walked once. Exit events for the program
//! and its items are handed to a [`ProgramListener`], which evaluates
//! expressions, type checks variable declarations, collects the active modes
//! and queues instructions. Arguments that depend on measurement results of
//! earlier statements become [`RegRefTransform`]s, callables that are
//! evaluated later by whatever consumes the [`Program`].

pub mod arguments;
pub mod evaluate;
pub mod listener;
pub mod program;
pub mod reserved;
pub mod semantic_error;
pub mod symbolic;
pub mod syntax_to_semantics;
pub mod transform;
pub mod types;
pub mod value;
pub mod variables;

pub use bb_syntax::TextRange;

pub use listener::ProgramListener;
pub use program::{Instruction, Program, Target};
pub use semantic_error::{SemanticError, SemanticErrorKind};
pub use symbolic::{Evaluated, SymExpr};
pub use syntax_to_semantics::{analyze, walk, ExitListener};
pub use transform::RegRefTransform;
pub use types::TypeTag;
pub use value::{Array, Number, NumericError, Scalar, Value};
pub use variables::VariableTable;
