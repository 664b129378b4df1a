/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     interpreter/calls.rs
 * Purpose:  Function calls.
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

use tracing::trace;

use crate::ast::CallExpression;
use crate::interpreter::environment::EnvId;
use crate::interpreter::helpers::{call_depth_exceeded, not_a_function, wrong_argument_count};
use crate::interpreter::Interpreter;
use crate::value::{Value, NULL};

impl Interpreter {
    /// Evaluates the callee, then each argument left to right, then applies.
    ///
    /// The first error among callee and arguments is the result of the call.
    pub(crate) fn eval_call_expression(&mut self, call: &CallExpression, env: EnvId) -> Value {
        let function = self.eval_expression(&call.function, env);
        if function.is_control() {
            return function;
        }

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for arg in &call.arguments {
            let value = self.eval_expression(arg, env);
            if value.is_control() {
                return value;
            }
            arguments.push(value);
        }

        self.apply_function(function, arguments)
    }

    /// Calls a function value with already-evaluated arguments.
    ///
    /// This function:
    /// 1. Creates a new scope whose parent is the function's defining scope
    /// 2. Binds each parameter to its argument in that scope
    /// 3. Executes the body there
    /// 4. Unwraps a `return`, so it stops at the call boundary
    /// 5. Releases the scopes the call allocated, unless a returned closure
    ///    still refers to them
    ///
    /// A body that produces no value makes the call evaluate to `null`.
    pub fn apply_function(&mut self, function: Value, arguments: Vec<Value>) -> Value {
        let func = match function {
            Value::Function(func) => func,
            other => return not_a_function(&other),
        };

        if func.parameters.len() != arguments.len() {
            return wrong_argument_count(func.parameters.len(), arguments.len());
        }

        if self.call_depth >= self.max_call_depth {
            return call_depth_exceeded(self.max_call_depth);
        }

        let mark = self.envs.mark();
        let call_env = self.envs.enclosed(func.env);
        for (param, arg) in func.parameters.iter().zip(arguments) {
            self.envs.set(call_env, param.value.clone(), arg);
        }

        trace!(depth = self.call_depth, arity = func.parameters.len(), "call");

        self.call_depth += 1;
        let result = self.eval_block(&func.body, call_env);
        self.call_depth -= 1;

        let value = match result {
            Some(Value::ReturnValue(value)) => *value,
            Some(value) => value,
            None => NULL,
        };

        // `let` only writes the innermost scope, so the call's scopes can
        // only outlive it through a returned closure.
        let escapes = matches!(
            &value,
            Value::Function(f) if self.envs.allocated_since(f.env, mark)
        );
        if !escapes {
            self.envs.release(mark);
        }

        value
    }
}
