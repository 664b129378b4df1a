/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  let / return / expression / block statements.
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

use crate::ast::{
    BlockStatement, ExpressionStatement, Identifier, LetStatement, ReturnStatement, Statement,
};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{Parser, Precedence};

impl Parser {
    /// Dispatches on the current token to the matching statement parser.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        trace!(
            kind = %self.current_token().kind,
            span = %self.current_token().span,
            "parse statement"
        );

        match self.current_token().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// let_statement → "let" IDENT "=" expression ";"?
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current_token().clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier {
            token: self.current_token().clone(),
            value: self.current_token().literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    /// return_statement → "return" expression? ";"?
    ///
    /// The value is absent when `return` is directly followed by `;`, `}`
    /// or the end of input.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current_token().clone();

        let value = match self.peek_token().kind {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => {
                self.next_token();
                Some(self.parse_expression(Precedence::Lowest)?)
            }
        };
        self.skip_semicolon();

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    /// expression_statement → expression ";"?
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current_token().clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    /// block → "{" statement* "}"
    ///
    /// Expects the current token to be `{`; leaves the cursor on the
    /// matching `}`. Running into end of input is reported.
    pub(crate) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.current_token().clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) {
            if self.cur_token_is(TokenKind::Eof) {
                let error = ParseError::unterminated_block(self.current_token());
                self.errors.push(error);
                return None;
            }

            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Some(BlockStatement { token, statements })
    }
}
