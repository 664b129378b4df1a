/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement nodes.
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

use serde::Serialize;
use std::fmt;

use crate::ast::expr::{Expression, Identifier};
use crate::ast::serialize_nested;
use crate::lexer::token::Token;
use crate::stack::ensure_sufficient_stack;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
            Statement::Block(s) => &s.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

/// `return;` or `return <value>;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

/// A bare expression used as a statement, e.g. `x + 1;`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

/// `{ ... }`. The token is the opening brace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStatement {
    pub token: Token,
    #[serde(serialize_with = "serialize_nested")]
    pub statements: Vec<Statement>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{} {} = {}", s.token.literal, s.name, s.value),
            Statement::Return(s) => match &s.value {
                Some(value) => write!(f, "{} {}", s.token.literal, value),
                None => f.write_str(&s.token.literal),
            },
            Statement::Expression(s) => fmt::Display::fmt(&s.expression, f),
            Statement::Block(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.write_str("{ ")?;
            if !self.statements.is_empty() {
                write_statements(f, &self.statements)?;
                f.write_str(" ")?;
            }
            f.write_str("}")
        })
    }
}

/// Writes a statement sequence separated by `"; "`.
pub(crate) fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        write!(f, "{}", stmt)?;
    }
    Ok(())
}
