/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Parse errors and command-line driver errors.
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

use std::io;

use thiserror::Error;

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// A syntax error recorded by the parser.
///
/// Parse errors are collected, never thrown: the parser appends one for
/// each problem it finds and keeps going, so a single pass can report
/// several independent mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Stable error code (`E_EXPECTED_TOKEN`, `E_NO_PREFIX`, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Location of the offending token
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// The token after the cursor was not the one the grammar requires.
    pub fn expected_token(expected: TokenKind, found: &Token) -> Self {
        Self::new(
            "E_EXPECTED_TOKEN",
            format!(
                "expected next token to be {}, got {} instead",
                expected, found.kind
            ),
            found.span,
        )
    }

    /// Nothing can start an expression with this token.
    pub fn no_prefix_parse_fn(token: &Token) -> Self {
        Self::new(
            "E_NO_PREFIX",
            format!("no prefix parse function for {} found", token.kind),
            token.span,
        )
    }

    /// Integer literal text that does not fit an `i64`.
    pub fn invalid_integer(token: &Token) -> Self {
        Self::new(
            "E_INTEGER_LITERAL",
            format!("could not parse {:?} as integer", token.literal),
            token.span,
        )
        .with_help("integer literals must fit in a signed 64-bit integer")
    }

    /// A block ran into end of input before its closing brace.
    pub fn unterminated_block(eof: &Token) -> Self {
        Self::new(
            "E_UNTERMINATED_BLOCK",
            "unterminated block: expected }, got EOF instead",
            eof.span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Failures of the `monkey` command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Stdio(#[from] io::Error),

    #[error("could not serialize AST: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} syntax error(s)")]
    Parse(usize),

    #[error("{0}")]
    Runtime(String),

    #[error("{0}")]
    Usage(String),
}
