/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Pratt parser module root.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and the precedence table
/// - Exposes `Parser::parse_program` and the `parse(source)` shortcut
pub mod parser;

/// Statement-level parsing:
/// - let / return / expression statements
/// - brace-delimited blocks
pub mod statements;

/// Expression-level parsing:
/// - the Pratt loop
/// - prefix, infix, grouped, if, function literal and call expressions
pub mod expressions;

/// Shared parser helpers:
/// - cursor movement and lookahead
/// - expected-token checks
/// - parse function registration
pub mod helpers;


pub use parser::{parse, InfixParseFn, Parser, Precedence, PrefixParseFn};
