/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Caret-style rendering of parse errors.
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

use std::io::{self, Write};

use crate::error::ParseError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Monkey parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being interpreted.
    source: String,

    /// Name of the source file (e.g. `main.monkey`). Display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    ///
    /// # Arguments
    /// - `file_name` → The name of the file being executed
    /// - `source` → The full source text of that file
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Writes a formatted error diagnostic to `out`.
    ///
    /// # Output Example
    /// ```text
    /// error[E_EXPECTED_TOKEN]: expected next token to be IDENT, got = instead
    ///   --> example.monkey:1:5
    ///    |
    ///  1 | let = 5;
    ///    |     ^
    /// ```
    pub fn write<W: Write>(&self, out: &mut W, error: &ParseError) -> io::Result<()> {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}",
            error.code, error.message, self.file_name, error.span
        )?;
        writeln!(out, "   |")?;
        writeln!(out, "{:>3} | {}", line, src_line)?;
        writeln!(out, "   | {}^", " ".repeat(column))?;

        if let Some(help) = &error.help {
            writeln!(out, "help: {}", help)?;
        }

        Ok(())
    }

    /// Writes every error in order, separated by blank lines.
    pub fn write_all<W: Write>(&self, out: &mut W, errors: &[ParseError]) -> io::Result<()> {
        for (i, error) in errors.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.write(out, error)?;
        }
        Ok(())
    }
}
