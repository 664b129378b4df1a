/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Lexer module root and the tokenize() shortcut.
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

/// Lexical token model: `TokenKind` and `Token`.
pub mod token;

/// Reserved word lookup.
pub mod keywords;

/// The character scanner.
pub mod lexer;


pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Converts Monkey source text into a token stream ending in `Eof`.
///
/// # Example
/// ```rust
/// use monkey::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("let x = 5;");
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}
