/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Prefix and infix expression parsers.
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

use crate::ast::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, PrefixExpression,
};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{Parser, Precedence};
use crate::stack::ensure_sufficient_stack;

impl Parser {
    /// Pratt expression parser.
    ///
    /// Runs the prefix parse function for the current token, then keeps
    /// folding infix operators into the left-hand side while the lookahead
    /// binds tighter than `precedence`. Passing the operator's own
    /// precedence when parsing its right operand makes equal-precedence
    /// chains left-associative.
    ///
    /// Every nesting level passes through here, so the stack is grown on
    /// demand before descending.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.current_token().kind).copied() else {
            let error = ParseError::no_prefix_parse_fn(self.current_token());
            self.errors.push(error);
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek_token().kind).copied() else {
                return Some(left);
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    pub(crate) fn parse_identifier(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();
        let value = token.literal.clone();
        Some(Expression::Identifier(Identifier { token, value }))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.errors.push(ParseError::invalid_integer(&token));
                None
            }
        }
    }

    pub(crate) fn parse_boolean(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();
        let value = token.is(TokenKind::True);
        Some(Expression::BooleanLiteral(BooleanLiteral { token, value }))
    }

    /// prefix → ( "!" | "-" ) expression
    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current_token().clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// grouped → "(" expression ")"
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expression)
    }

    /// if → "if" "(" expression ")" block ( "else" block )?
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// function → "fn" "(" parameters? ")" block
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current_token().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// parameters → IDENT ( "," IDENT )*
    ///
    /// Called with the cursor on `(`; leaves it on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        loop {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            let token = self.current_token().clone();
            let value = token.literal.clone();
            parameters.push(Identifier { token, value });

            if !self.peek_token_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// call → expression "(" arguments? ")"
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current_token().clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Called with the cursor on `(`; leaves it on `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(arguments)
    }
}
