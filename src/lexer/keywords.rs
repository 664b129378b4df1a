/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
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

use crate::lexer::token::TokenKind;

/// Resolves an identifier to its **reserved keyword** kind, if it is one.
///
/// This function is used exclusively by the lexer during tokenization to
/// distinguish **user-defined identifiers** from **language-defined keywords**.
///
/// # Parameters
/// - `word`: The identifier string extracted from source code.
///
/// # Returns
/// - `Some(kind)` if the word is a reserved Monkey keyword.
/// - `None` if the word should be treated as a normal identifier.
///
/// # Monkey Examples
/// ```text
/// fn      -> Function
/// let     -> Let
/// adder   -> identifier
/// ```
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    match word {
        "fn" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}
