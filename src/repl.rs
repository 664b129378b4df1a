/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     repl.rs
 * Purpose:  Interactive read / parse / evaluate / print loop.
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

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::interpreter::Interpreter;
use crate::parser::Parser;

pub const BANNER: &str = "Hello! This is the Monkey programming language!";
pub const PARSE_ERROR_HEADER: &str = "Woops! We ran into some monkey business here!";

/// Line-at-a-time read / parse / evaluate / print loop.
///
/// One `Repl` is one session: every line is evaluated in the same root
/// scope, so bindings made on one line are visible on the next.
pub struct Repl {
    prompt: String,
    interpreter: Interpreter,
}

impl Repl {
    pub fn new(prompt: impl Into<String>, interpreter: Interpreter) -> Self {
        Self {
            prompt: prompt.into(),
            interpreter,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Runs the loop until `input` reaches end of file.
    ///
    /// # Parameters
    /// - `input`: where lines are read from
    /// - `output`: where the banner, prompts and results are written
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", BANNER)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                return Ok(());
            };

            self.eval_line(&line?, output)?;
        }
    }

    /// Parses and evaluates one line, writing whatever it produces.
    pub fn eval_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let mut parser = Parser::from_source(line);
        let program = parser.parse_program();

        if parser.has_errors() {
            debug!(count = parser.errors().len(), "line rejected");
            writeln!(output, "{}", PARSE_ERROR_HEADER)?;
            for error in parser.errors() {
                writeln!(output, "\t{}", error)?;
            }
            return Ok(());
        }

        if let Some(value) = self.interpreter.eval_program(&program) {
            writeln!(output, "{}", value.inspect())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(input: &str) -> String {
        let mut repl = Repl::new(">> ", Interpreter::new());
        let mut out = Vec::new();
        repl.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_banner_prompts_and_results() {
        assert_eq!(
            session("1 + 2\n"),
            "Hello! This is the Monkey programming language!\n>> 3\n>> \n"
        );
    }

    #[test]
    fn bindings_persist_between_lines() {
        assert_eq!(
            session("let x = 5;\nx * 2\n"),
            "Hello! This is the Monkey programming language!\n>> >> 10\n>> \n"
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(
            session("\n   \n7\n"),
            "Hello! This is the Monkey programming language!\n>> >> >> 7\n>> \n"
        );
    }

    #[test]
    fn parse_errors_are_listed_and_not_evaluated() {
        let mut repl = Repl::new("", Interpreter::new());
        let mut out = Vec::new();
        repl.eval_line("let x 5; let = 1;", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Woops! We ran into some monkey business here!\n\
             \texpected next token to be =, got INT instead\n\
             \texpected next token to be IDENT, got = instead\n\
             \tno prefix parse function for = found\n"
        );
        let root = repl.interpreter().root();
        assert_eq!(repl.interpreter().environments().get(root, "x"), None);
    }

    #[test]
    fn runtime_errors_print_their_message() {
        let mut repl = Repl::new("", Interpreter::new());
        let mut out = Vec::new();
        repl.eval_line("let a = 1; a + true; let b = 2;", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "type mismatch: INTEGER + BOOLEAN\n");
        let root = repl.interpreter().root();
        assert!(repl.interpreter().environments().get(root, "a").is_some());
        assert!(repl.interpreter().environments().get(root, "b").is_none());
    }
}
