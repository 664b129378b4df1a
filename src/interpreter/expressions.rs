/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     interpreter/expressions.rs
 * Purpose:  Expression evaluation and operator semantics.
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

use std::rc::Rc;

use crate::ast::{Expression, IfExpression};
use crate::interpreter::environment::EnvId;
use crate::interpreter::helpers::{
    division_by_zero, identifier_not_found, is_falsy, non_boolean_condition, type_mismatch,
    unknown_infix_operator, unknown_prefix_operator,
};
use crate::interpreter::Interpreter;
use crate::stack::ensure_sufficient_stack;
use crate::value::{Function, Value, NULL};

impl Interpreter {
    /// Evaluates a single Monkey expression and returns its runtime value.
    ///
    /// This is the **core expression dispatcher** used throughout the
    /// interpreter. An error, or a `return` unwinding out of a nested `if`,
    /// short-circuits the enclosing expression and is handed back as-is.
    pub fn eval_expression(&mut self, expr: &Expression, env: EnvId) -> Value {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: EnvId) -> Value {
        match expr {
            Expression::Identifier(ident) => self
                .envs
                .get(env, &ident.value)
                .cloned()
                .unwrap_or_else(|| identifier_not_found(&ident.value)),

            Expression::IntegerLiteral(lit) => Value::Integer(lit.value),

            Expression::BooleanLiteral(lit) => Value::from_bool(lit.value),

            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right, env);
                if right.is_control() {
                    return right;
                }
                eval_prefix_expression(&prefix.operator, right)
            }

            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left, env);
                if left.is_control() {
                    return left;
                }
                let right = self.eval_expression(&infix.right, env);
                if right.is_control() {
                    return right;
                }
                eval_infix_expression(&infix.operator, left, right)
            }

            Expression::If(expr) => self.eval_if_expression(expr, env),

            Expression::FunctionLiteral(func) => Value::Function(Rc::new(Function {
                parameters: func.parameters.clone(),
                body: func.body.clone(),
                env,
            })),

            Expression::Call(call) => self.eval_call_expression(call, env),
        }
    }

    /// Conditions must be booleans; there is no truthiness coercion.
    fn eval_if_expression(&mut self, expr: &IfExpression, env: EnvId) -> Value {
        let condition = self.eval_expression(&expr.condition, env);

        let branch = match condition {
            Value::Error(_) | Value::ReturnValue(_) => return condition,
            Value::Boolean(true) => Some(&expr.consequence),
            Value::Boolean(false) => expr.alternative.as_ref(),
            other => return non_boolean_condition(&other),
        };

        branch
            .and_then(|block| self.eval_block(block, env))
            .unwrap_or(NULL)
    }
}

pub fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match (operator, &right) {
        ("!", value) => Value::from_bool(is_falsy(value)),
        ("-", Value::Integer(n)) => Value::Integer(n.wrapping_neg()),
        _ => unknown_prefix_operator(operator, &right),
    }
}

pub fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),

        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            "==" => Value::from_bool(l == r),
            "!=" => Value::from_bool(l != r),
            _ => unknown_infix_operator(&left, operator, &right),
        },

        _ if left.type_name() != right.type_name() => type_mismatch(&left, operator, &right),

        _ => unknown_infix_operator(&left, operator, &right),
    }
}

/// Integer arithmetic wraps on overflow; division truncates toward zero.
pub fn eval_integer_infix_expression(operator: &str, l: i64, r: i64) -> Value {
    match operator {
        "+" => Value::Integer(l.wrapping_add(r)),
        "-" => Value::Integer(l.wrapping_sub(r)),
        "*" => Value::Integer(l.wrapping_mul(r)),
        "/" if r == 0 => division_by_zero(l),
        "/" => Value::Integer(l.wrapping_div(r)),
        "<" => Value::from_bool(l < r),
        ">" => Value::from_bool(l > r),
        "<=" => Value::from_bool(l <= r),
        ">=" => Value::from_bool(l >= r),
        "==" => Value::from_bool(l == r),
        "!=" => Value::from_bool(l != r),
        _ => unknown_infix_operator(&Value::Integer(l), operator, &Value::Integer(r)),
    }
}
