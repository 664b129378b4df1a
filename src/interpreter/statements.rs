/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     interpreter/statements.rs
 * Purpose:  Statement and block evaluation.
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

use crate::ast::{BlockStatement, Statement};
use crate::interpreter::environment::EnvId;
use crate::interpreter::Interpreter;
use crate::stack::ensure_sufficient_stack;
use crate::value::{Value, NULL};

impl Interpreter {
    /// Executes a single statement in `env`.
    ///
    /// `let` binds into `env` itself and yields no value; every other
    /// statement yields one.
    pub(crate) fn eval_statement(&mut self, stmt: &Statement, env: EnvId) -> Option<Value> {
        match stmt {
            Statement::Let(stmt) => {
                let value = self.eval_expression(&stmt.value, env);
                if value.is_control() {
                    return Some(value);
                }
                self.envs.set(env, stmt.name.value.clone(), value);
                None
            }

            Statement::Return(stmt) => {
                let value = match &stmt.value {
                    Some(expr) => self.eval_expression(expr, env),
                    None => NULL,
                };
                if value.is_control() {
                    return Some(value);
                }
                Some(Value::ReturnValue(Box::new(value)))
            }

            Statement::Expression(stmt) => Some(self.eval_expression(&stmt.expression, env)),

            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Executes a block in the **same** scope as its surroundings.
    ///
    /// Stops at the first error or `return`, handing either back unchanged
    /// so it keeps unwinding; only the program level unwraps a return.
    pub(crate) fn eval_block(&mut self, block: &BlockStatement, env: EnvId) -> Option<Value> {
        ensure_sufficient_stack(|| {
            let mut result = None;

            for stmt in &block.statements {
                result = self.eval_statement(stmt, env);

                if let Some(Value::ReturnValue(_) | Value::Error(_)) = result {
                    return result;
                }
            }

            result
        })
    }
}
