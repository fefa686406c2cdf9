// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

//! Assembly of a [`Program`] from tree-exit events.

use indexmap::IndexMap;
use tracing::{debug, trace};

use bb_syntax::ast::{self, HasArgList, HasTextName, Item, ListenerNode};
use bb_syntax::AstNode;

use crate::arguments::get_arguments;
use crate::program::{Instruction, Program, Target};
use crate::semantic_error::SemanticError;
use crate::symbolic::Evaluated;
use crate::syntax_to_semantics::ExitListener;
use crate::transform::RegRefTransform;
use crate::value::Value;
use crate::variables::{declare_array, declare_scalar, VariableTable};

/// Builds a [`Program`] from the exit events of one walk.
///
/// Declarations go to a scratch table, which is committed to the program
/// only when the program node is exited. A listener is used for one walk and
/// then consumed by [`finish`](Self::finish).
#[derive(Debug)]
pub struct ProgramListener {
    program: Program,
    scratch: VariableTable,
}

impl Default for ProgramListener {
    fn default() -> Self {
        Self::new()
    }
}

// Symbolic arguments become transforms of the measurement results they use.
fn resolve(evaluated: Evaluated) -> Value {
    match evaluated {
        Evaluated::Concrete(value) => value,
        Evaluated::Symbolic(expr) => Value::Transform(RegRefTransform::new(expr)),
    }
}

impl ProgramListener {
    pub fn new() -> ProgramListener {
        ProgramListener {
            program: Program::new(),
            scratch: VariableTable::new(),
        }
    }

    /// Declarations not yet committed to the program.
    pub fn scratch(&self) -> &VariableTable {
        &self.scratch
    }

    /// The program as assembled so far.
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn finish(self) -> Program {
        self.program
    }

    fn exit_declare_name(&mut self, decl: &ast::DeclareName) -> Result<(), SemanticError> {
        let name = decl
            .program_name()
            .ok_or_else(|| SemanticError::missing(decl, "program name"))?
            .string();
        self.program.set_name(name);
        Ok(())
    }

    fn exit_version(&mut self, version: &ast::Version) -> Result<(), SemanticError> {
        let number = version
            .version_number()
            .ok_or_else(|| SemanticError::missing(version, "version number"))?;
        self.program.set_version(number.text().to_string());
        Ok(())
    }

    // Positional target arguments are ignored.
    fn exit_target(&mut self, target: &ast::Target) -> Result<(), SemanticError> {
        let device = target
            .device()
            .ok_or_else(|| SemanticError::missing(target, "device"))?
            .string();
        let options = match target.arg_list() {
            Some(arg_list) => {
                let (_, kwargs) = get_arguments(&arg_list, &self.scratch)?;
                kwargs.into_iter().map(|(k, v)| (k, resolve(v))).collect()
            }
            None => IndexMap::new(),
        };
        debug!(device = %device, options = options.len(), "set target");
        self.program.set_target(Target::new(device, options));
        Ok(())
    }

    fn exit_statement(&mut self, stmt: &ast::Statement) -> Result<(), SemanticError> {
        let op = match (stmt.operation(), stmt.measure()) {
            (Some(operation), _) => operation.string(),
            (None, Some(measure)) => measure.string(),
            (None, None) => return Err(SemanticError::missing(stmt, "operation")),
        };
        let modes_node = stmt
            .modes()
            .ok_or_else(|| SemanticError::missing(stmt, "modes"))?;
        let modes = modes_node
            .indices()
            .map(|index| {
                index.text().parse::<usize>().map_err(|_| {
                    SemanticError::syntax_error(
                        &modes_node,
                        format!("Invalid mode '{}'", index.text()),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (args, kwargs) = match stmt.arg_list() {
            Some(arg_list) => {
                let (args, kwargs) = get_arguments(&arg_list, &self.scratch)?;
                (
                    args.into_iter().map(resolve).collect(),
                    kwargs.into_iter().map(|(k, v)| (k, resolve(v))).collect(),
                )
            }
            None => (Vec::new(), IndexMap::new()),
        };
        debug!(op = %op, ?modes, args = args.len(), kwargs = kwargs.len(), "queued instruction");
        self.program
            .push_instruction(Instruction::new(op, modes, args, kwargs));
        Ok(())
    }

    fn exit_program(&mut self) {
        debug!(variables = self.scratch.len(), "committed variables");
        self.program.commit_variables(&mut self.scratch);
    }
}

impl ExitListener for ProgramListener {
    fn exit(&mut self, node: &ListenerNode) -> Result<(), SemanticError> {
        trace!(kind = ?node.syntax().kind(), range = ?node.syntax().text_range(), "exit");
        match node {
            ListenerNode::Program(_) => {
                self.exit_program();
                Ok(())
            }
            ListenerNode::Item(item) => match item {
                Item::DeclareName(decl) => self.exit_declare_name(decl),
                Item::Version(version) => self.exit_version(version),
                Item::Target(target) => self.exit_target(target),
                Item::ExpressionVar(decl) => declare_scalar(decl, &mut self.scratch),
                Item::ArrayVar(decl) => declare_array(decl, &mut self.scratch),
                Item::Statement(stmt) => self.exit_statement(stmt),
            },
        }
    }
}
