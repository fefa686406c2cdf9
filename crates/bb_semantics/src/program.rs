// Copyright contributors to the blackbird-frontend project
// SPDX-License-Identifier: Apache-2.0

// The result of semantic extraction: program metadata, declared variables,
// the modes touched and the queue of instructions in program order.
// Only `ProgramListener` constructs and fills a `Program`.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::value::Value;
use crate::variables::VariableTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    name: String,
    version: Option<String>,
    active_modes: BTreeSet<usize>,
    variables: VariableTable,
    target: Option<Target>,
    queue: Vec<Instruction>,
}

impl Program {
    pub(crate) fn new() -> Program {
        Program {
            name: String::new(),
            version: None,
            active_modes: BTreeSet::new(),
            variables: VariableTable::new(),
            target: None,
            queue: Vec::new(),
        }
    }

    /// Program name; empty if the program declares none.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn active_modes(&self) -> &BTreeSet<usize> {
        &self.active_modes
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn queue(&self) -> &[Instruction] {
        &self.queue
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_version(&mut self, version: String) {
        self.version = Some(version);
    }

    // A later target replaces an earlier one.
    pub(crate) fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    /// Queue `instruction` and mark its modes active.
    pub(crate) fn push_instruction(&mut self, instruction: Instruction) {
        self.active_modes
            .extend(instruction.modes.iter().copied());
        self.queue.push(instruction);
    }

    pub(crate) fn commit_variables(&mut self, scratch: &mut VariableTable) {
        self.variables.extend(scratch.drain(..));
    }
}

/// The device a program is written for, with its keyword options.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    name: String,
    options: IndexMap<String, Value>,
}

impl Target {
    pub(crate) fn new(name: String, options: IndexMap<String, Value>) -> Target {
        Target { name, options }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &IndexMap<String, Value> {
        &self.options
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    op: String,
    modes: Vec<usize>,
    args: Vec<Value>,
    kwargs: IndexMap<String, Value>,
}

impl Instruction {
    pub(crate) fn new(
        op: String,
        modes: Vec<usize>,
        args: Vec<Value>,
        kwargs: IndexMap<String, Value>,
    ) -> Instruction {
        Instruction {
            op,
            modes,
            args,
            kwargs,
        }
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    /// Modes in the order they are written, not sorted.
    pub fn modes(&self) -> &[usize] {
        &self.modes
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn kwargs(&self) -> &IndexMap<String, Value> {
        &self.kwargs
    }
}

fn fmt_call(
    f: &mut fmt::Formatter<'_>,
    args: &[Value],
    kwargs: &IndexMap<String, Value>,
) -> fmt::Result {
    if args.is_empty() && kwargs.is_empty() {
        return Ok(());
    }
    let args = args
        .iter()
        .map(Value::repr)
        .chain(kwargs.iter().map(|(k, v)| format!("{k}={}", v.repr())))
        .join(", ");
    write!(f, "({args})")
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        fmt_call(f, &[], &self.options)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.op)?;
        fmt_call(f, &self.args, &self.kwargs)?;
        write!(f, " | [{}]", self.modes.iter().join(", "))
    }
}

/// A listing of the program for diagnostics. This is not Blackbird source.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name {}", self.name)?;
        if let Some(version) = &self.version {
            writeln!(f, "version {version}")?;
        }
        if let Some(target) = &self.target {
            writeln!(f, "target {target}")?;
        }
        writeln!(f, "modes {{{}}}", self.active_modes.iter().join(", "))?;
        if !self.variables.is_empty() {
            writeln!(f, "variables")?;
            for (name, value) in &self.variables {
                let ty = match value {
                    Value::Array(array) => format!("{} array", array.dtype()),
                    other => other
                        .type_tag()
                        .map(|tag| tag.to_string())
                        .unwrap_or_default(),
                };
                writeln!(f, "    {ty} {name} = {}", value.repr())?;
            }
        }
        if !self.queue.is_empty() {
            writeln!(f, "queue")?;
            for instruction in &self.queue {
                writeln!(f, "    {instruction}")?;
            }
        }
        Ok(())
    }
}
