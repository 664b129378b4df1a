/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     interpreter/helpers.rs
 * Purpose:  Runtime error constructors and truthiness.
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

use crate::value::Value;

/// `-true`, `!fn...` style misuse of a prefix operator.
pub fn unknown_prefix_operator(operator: &str, right: &Value) -> Value {
    Value::error(format!("unknown operator: {}{}", operator, right.type_name()))
}

/// Operator not defined for two operands of the same type.
pub fn unknown_infix_operator(left: &Value, operator: &str, right: &Value) -> Value {
    Value::error(format!(
        "unknown operator: {} {} {}",
        left.type_name(),
        operator,
        right.type_name()
    ))
}

/// Operands of different types.
pub fn type_mismatch(left: &Value, operator: &str, right: &Value) -> Value {
    Value::error(format!(
        "type mismatch: {} {} {}",
        left.type_name(),
        operator,
        right.type_name()
    ))
}

pub fn identifier_not_found(name: &str) -> Value {
    Value::error(format!("identifier not found: {}", name))
}

pub fn non_boolean_condition(condition: &Value) -> Value {
    Value::error(format!(
        "non-boolean condition in if expression: {}",
        condition.type_name()
    ))
}

pub fn division_by_zero(left: i64) -> Value {
    Value::error(format!("division by zero: {} / 0", left))
}

pub fn not_a_function(value: &Value) -> Value {
    Value::error(format!("not a function: {}", value.type_name()))
}

pub fn wrong_argument_count(want: usize, got: usize) -> Value {
    Value::error(format!(
        "wrong number of arguments: want={}, got={}",
        want, got
    ))
}

pub fn call_depth_exceeded(limit: usize) -> Value {
    Value::error(format!("maximum call depth exceeded ({})", limit))
}

/// Logical negation: only `false` and `null` negate to `true`.
pub fn is_falsy(value: &Value) -> bool {
    matches!(value, Value::Boolean(false) | Value::Null)
}
