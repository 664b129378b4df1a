/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     value.rs
 * Purpose:  Runtime value model.
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

use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::interpreter::environment::EnvId;

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

/// Monkey runtime value representation.
///
/// This is the core type that flows through the interpreter.
/// Every expression ultimately evaluates to one of these.
///
/// `ReturnValue` and `Error` are control values rather than user data: they
/// carry a `return` or a runtime fault up through nested blocks until the
/// program level unwraps or reports them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,

    /// Wraps the value of a `return` while it unwinds.
    ReturnValue(Box<Value>),

    /// A runtime fault with a human-readable message.
    Error(String),

    Function(Rc<Function>),
}

/// A function value: its parameters and body, plus the environment it was
/// defined in.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: EnvId,
}

impl Value {
    /// Upper-case type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// Human-readable rendering shown by the REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// `Error` or `ReturnValue`: values that must keep unwinding instead of
    /// being used as an operand.
    pub fn is_control(&self) -> bool {
        matches!(self, Value::Error(_) | Value::ReturnValue(_))
    }

    pub fn from_bool(b: bool) -> Value {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            Value::ReturnValue(inner) => write!(f, "{}", inner),
            Value::Error(message) => f.write_str(message),
            Value::Function(func) => {
                f.write_str("fn(")?;
                for (i, param) in func.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") {}", func.body)
            }
        }
    }
}
