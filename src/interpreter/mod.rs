/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     interpreter/mod.rs
 * Purpose:  Tree-walking evaluator entry points.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the MONKEY programming language project.
 *
 * MONKEY is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

pub mod calls;
pub mod environment;
pub mod expressions;
pub mod helpers;
pub mod statements;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::ast::Program;
use crate::value::Value;

use environment::{EnvId, Environments};

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Tree-walking evaluator for Monkey programs.
///
/// An `Interpreter` owns the environment arena for one session (a REPL run
/// or one file). Bindings made by one `eval_program` call stay visible to
/// the next, which is what lets the REPL build on earlier lines.
#[derive(Debug, Clone)]
pub struct Interpreter {
    pub(crate) envs: Environments,
    pub(crate) call_depth: usize,
    pub(crate) max_call_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            envs: Environments::new(),
            call_depth: 0,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Sets how deeply function calls may nest before evaluation fails
    /// with an error value.
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// The session's root scope.
    pub fn root(&self) -> EnvId {
        self.envs.root()
    }

    pub fn environments(&self) -> &Environments {
        &self.envs
    }

    /// Lets a host seed bindings before calling [`Interpreter::eval_program_in`].
    pub fn environments_mut(&mut self) -> &mut Environments {
        &mut self.envs
    }

    /// Evaluates a whole program in the root scope.
    ///
    /// Returns `None` when no statement produced a value (an empty program,
    /// or one ending in `let`). A top-level `return` ends the program and
    /// its payload becomes the result; a runtime error ends the program and
    /// is returned as `Value::Error`.
    pub fn eval_program(&mut self, program: &Program) -> Option<Value> {
        let root = self.envs.root();
        self.eval_program_in(program, root)
    }

    /// Like [`Interpreter::eval_program`], but in an explicit scope.
    pub fn eval_program_in(&mut self, program: &Program, env: EnvId) -> Option<Value> {
        let mut result = None;

        for stmt in &program.statements {
            match self.eval_statement(stmt, env) {
                Some(Value::ReturnValue(value)) => return Some(*value),
                Some(error @ Value::Error(_)) => {
                    debug!(error = %error, "evaluation stopped");
                    return Some(error);
                }
                other => result = other,
            }
        }

        result
    }
}
