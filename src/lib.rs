/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root: module tree and tracing setup.
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

//! Monkey: a Pratt parser and tree-walking interpreter for a small
//! expression language.
//!
//! Source text flows through [`lexer`] → [`parser`] → [`interpreter`]:
//!
//! ```
//! use monkey::interpreter::Interpreter;
//! use monkey::value::Value;
//!
//! let program = monkey::parser::parse("let add = fn(a, b) { a + b }; add(2, 3)").unwrap();
//! let result = Interpreter::new().eval_program(&program);
//! assert_eq!(result, Some(Value::Integer(5)));
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod span;
pub mod stack;
pub mod value;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs stay silent.
/// Output goes to stderr and never mixes with REPL or program output.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
