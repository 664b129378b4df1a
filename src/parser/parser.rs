/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     parser/parser.rs
 * Purpose:  Parser state, precedence table and program entry point.
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

use std::collections::HashMap;

use crate::ast::{Expression, Program};
use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::tokenize;

/// Parses the expression that starts at the current token.
pub type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;

/// Continues an already-parsed left-hand expression; the current token is
/// the operator (or `(` for calls).
pub type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// Binding power of infix operators, lowest to highest.
///
/// This ordering is what makes `a + b * c` parse as `a + (b * c)` and
/// `-a + b` parse as `(-a) + b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Binding power of a token in infix position.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::LessGreater
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// The Monkey Pratt parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - A cursor giving the current token and one token of lookahead
/// - The errors recorded so far
/// - The prefix / infix parse function tables
///
/// The grammar itself is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed; always ends with `Eof`.
    pub(crate) tokens: Vec<Token>,

    /// Index of the current token.
    pub(crate) position: usize,

    pub(crate) errors: Vec<ParseError>,

    pub(crate) prefix_parse_fns: HashMap<TokenKind, PrefixParseFn>,
    pub(crate) infix_parse_fns: HashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    /// Creates a parser over a token stream and registers every prefix and
    /// infix parse function.
    ///
    /// A missing trailing `Eof` token is supplied, so any `Vec<Token>` is
    /// accepted.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, "", span));
        }

        let mut parser = Parser {
            tokens,
            position: 0,
            errors: Vec::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        parser.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        parser.register_prefix(TokenKind::True, Parser::parse_boolean);
        parser.register_prefix(TokenKind::False, Parser::parse_boolean);
        parser.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, Parser::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Parser::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Parser::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
        ] {
            parser.register_infix(kind, Parser::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LParen, Parser::parse_call_expression);

        parser
    }

    /// Lexes `source` and builds a parser over the result.
    pub fn from_source(source: &str) -> Self {
        Parser::new(tokenize(source))
    }

    /// Parses the entire token stream into a `Program`.
    ///
    /// Statements that fail to parse are left out of the program; the
    /// reason is recorded in [`Parser::errors`] and parsing resumes at the
    /// next token. Callers must check the error list before trusting the
    /// returned program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// Errors recorded so far, in source order of detection.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses `source` in one go, returning the program or every error found.
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    if parser.errors.is_empty() {
        Ok(program)
    } else {
        Err(parser.errors)
    }
}
