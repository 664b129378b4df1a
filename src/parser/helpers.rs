/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Cursor movement and lookahead helpers.
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

use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{InfixParseFn, Parser, Precedence, PrefixParseFn};

impl Parser {
    pub(crate) fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, f);
    }

    pub(crate) fn register_infix(&mut self, kind: TokenKind, f: InfixParseFn) {
        self.infix_parse_fns.insert(kind, f);
    }

    /// Advances one token forward. Stays on `Eof` once reached.
    pub(crate) fn next_token(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    pub(crate) fn current_token(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// The lookahead token; `Eof` when the cursor is already on it.
    pub(crate) fn peek_token(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + 1).min(last)]
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.current_token().is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token().is(kind)
    }

    /// Advances if the lookahead is `kind`; records an error otherwise.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            let error = ParseError::expected_token(kind, self.peek_token());
            self.errors.push(error);
            false
        }
    }

    /// Consumes an optional trailing `;`.
    pub(crate) fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token().kind)
    }

    pub(crate) fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.current_token().kind)
    }
}
