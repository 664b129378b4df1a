/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  AST root: Program, rendering and JSON output.
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

/// Expression nodes.
pub mod expr;

/// Statement nodes.
pub mod stmt;

use serde::{Serialize, Serializer};
use std::fmt;

use crate::stack::ensure_sufficient_stack;

pub use expr::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, PrefixExpression,
};
pub use stmt::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};

/// Root of every parsed Monkey source: an ordered list of statements.
///
/// The `Display` rendering re-parses to a tree with the same rendering,
/// which makes it handy for checking precedence in tests:
///
/// ```rust
/// use monkey::parser::Parser;
///
/// let mut parser = Parser::from_source("a + b * c; -a + b");
/// let program = parser.parse_program();
/// assert_eq!(program.to_string(), "(a + (b * c)); ((-a) + b)");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Pretty JSON rendering of the tree, for tooling that inspects it.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        stmt::write_statements(f, &self.statements)
    }
}

/// Serializes a child node with the stack grown on demand; used on every
/// field through which the tree nests.
pub(crate) fn serialize_nested<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize + ?Sized,
    S: Serializer,
{
    ensure_sufficient_stack(|| value.serialize(serializer))
}
