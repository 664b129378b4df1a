/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     ast/expr.rs
 * Purpose:  Expression nodes.
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

use crate::ast::serialize_nested;
use crate::ast::stmt::{BlockStatement, Statement};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use crate::stack::ensure_sufficient_stack;

/// Every expression form the parser can produce.
///
/// Required children are never optional: when a sub-expression fails to
/// parse the whole enclosing node is dropped and a diagnostic is recorded.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    /// The token that introduced this expression.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::IntegerLiteral(e) => &e.token,
            Expression::BooleanLiteral(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::FunctionLiteral(e) => &e.token,
            Expression::Call(e) => &e.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    /// Childless stand-in left behind when a child is detached.
    fn placeholder() -> Expression {
        Expression::Identifier(Identifier {
            token: Token::new(TokenKind::Illegal, String::new(), Span::default()),
            value: String::new(),
        })
    }

    /// Moves every direct child expression into `out`, including the
    /// expressions held by nested blocks.
    fn detach_children(&mut self, out: &mut Vec<Expression>) {
        match self {
            Expression::Identifier(_)
            | Expression::IntegerLiteral(_)
            | Expression::BooleanLiteral(_) => {}
            Expression::Prefix(e) => out.push(detach(&mut e.right)),
            Expression::Infix(e) => {
                out.push(detach(&mut e.left));
                out.push(detach(&mut e.right));
            }
            Expression::If(e) => {
                out.push(detach(&mut e.condition));
                detach_block(&mut e.consequence, out);
                if let Some(alternative) = &mut e.alternative {
                    detach_block(alternative, out);
                }
            }
            Expression::FunctionLiteral(e) => detach_block(&mut e.body, out),
            Expression::Call(e) => {
                out.push(detach(&mut e.function));
                out.append(&mut e.arguments);
            }
        }
    }
}

fn detach(child: &mut Box<Expression>) -> Expression {
    std::mem::replace(&mut **child, Expression::placeholder())
}

fn detach_block(block: &mut BlockStatement, out: &mut Vec<Expression>) {
    let mut pending = std::mem::take(&mut block.statements);

    while let Some(stmt) = pending.pop() {
        match stmt {
            Statement::Let(s) => out.push(s.value),
            Statement::Return(s) => out.extend(s.value),
            Statement::Expression(s) => out.push(s.expression),
            Statement::Block(b) => pending.extend(b.statements),
        }
    }
}

/// Trees are torn down from a heap worklist rather than recursively, so
/// dropping a deeply nested expression cannot overflow the stack.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expression::Identifier(e) => Expression::Identifier(e.clone()),
            Expression::IntegerLiteral(e) => Expression::IntegerLiteral(e.clone()),
            Expression::BooleanLiteral(e) => Expression::BooleanLiteral(e.clone()),
            Expression::Prefix(e) => Expression::Prefix(e.clone()),
            Expression::Infix(e) => Expression::Infix(e.clone()),
            Expression::If(e) => Expression::If(e.clone()),
            Expression::FunctionLiteral(e) => Expression::FunctionLiteral(e.clone()),
            Expression::Call(e) => Expression::Call(e.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

/// `!x` or `-x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    #[serde(serialize_with = "serialize_nested")]
    pub right: Box<Expression>,
}

/// `left <operator> right`. The token is the operator token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfixExpression {
    pub token: Token,
    #[serde(serialize_with = "serialize_nested")]
    pub left: Box<Expression>,
    pub operator: String,
    #[serde(serialize_with = "serialize_nested")]
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfExpression {
    pub token: Token,
    #[serde(serialize_with = "serialize_nested")]
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `function(arguments...)`. The token is the opening `(`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpression {
    pub token: Token,
    #[serde(serialize_with = "serialize_nested")]
    pub function: Box<Expression>,
    #[serde(serialize_with = "serialize_nested")]
    pub arguments: Vec<Expression>,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expression::Identifier(e) => fmt::Display::fmt(e, f),
            Expression::IntegerLiteral(e) => f.write_str(&e.token.literal),
            Expression::BooleanLiteral(e) => f.write_str(&e.token.literal),
            Expression::Prefix(e) => write!(f, "({}{})", e.operator, e.right),
            Expression::Infix(e) => write!(f, "({} {} {})", e.left, e.operator, e.right),
            Expression::If(e) => fmt::Display::fmt(e, f),
            Expression::FunctionLiteral(e) => fmt::Display::fmt(e, f),
            Expression::Call(e) => {
                write!(f, "{}(", e.function)?;
                write_comma_separated(f, &e.arguments)?;
                f.write_str(")")
            }
        })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.literal)?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
