/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     lexer/lexer.rs
 * Purpose:  Character scanner turning source text into tokens.
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

use crate::lexer::keywords::lookup_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new Monkey lexer instance from raw source code.
    ///
    /// # Parameters
    /// - `source`: A UTF-8 encoded Monkey source string.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`
    /// - Empty token output buffer
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// This method repeatedly scans individual tokens until the end of
    /// the source is reached, then appends a final `EOF` token.
    ///
    /// # Behavior
    /// - Skips whitespace
    /// - Never fails: unknown characters become `Illegal` tokens and are
    ///   left for the parser to report
    /// - Guarantees exactly one terminating `TokenKind::Eof` marker
    pub fn scan_tokens(&mut self) {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
        }

        let span = self.span();
        self.tokens.push(Token::new(TokenKind::Eof, "", span));
    }

    /// Scans and emits a single token starting at the cursor.
    fn scan_token(&mut self) {
        let span = self.span();
        let start = self.current;
        let ch = self.advance();

        let kind = match ch {
            '=' => self.either('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.either('=', TokenKind::NotEq, TokenKind::Bang),
            '<' => self.either('=', TokenKind::LtEq, TokenKind::Lt),
            '>' => self.either('=', TokenKind::GtEq, TokenKind::Gt),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,

            c if c.is_ascii_digit() => {
                let literal = self.read_while(ch, |c| c.is_ascii_digit());
                self.tokens.push(Token::new(TokenKind::Int, literal, span));
                return;
            }

            c if is_identifier_start(c) => {
                let word = self.read_while(ch, is_identifier_char);
                let kind = lookup_keyword(&word).unwrap_or(TokenKind::Ident);
                self.tokens.push(Token::new(kind, word, span));
                return;
            }

            _ => TokenKind::Illegal,
        };

        // Two-character operators consumed their second char in `either`.
        let literal: String = self.chars[start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, literal, span));
    }

    /// Returns `double` and consumes `next` when it follows, `single` otherwise.
    fn either(&mut self, next: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.match_char(next) {
            double
        } else {
            single
        }
    }

    fn read_while(&mut self, first: char, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::from(first);
        while !self.is_at_end() && pred(self.peek()) {
            out.push(self.advance());
        }
        out
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn peek(&self) -> char {
        self.chars[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
