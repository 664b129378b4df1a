/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver: REPL, file runner and AST dumper.
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

//! Monkey command-line driver: REPL, file runner and AST dumper.

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use monkey::config::{Command, Config, USAGE};
use monkey::diagnostics::DiagnosticPrinter;
use monkey::error::CliError;
use monkey::interpreter::Interpreter;
use monkey::parser::Parser;
use monkey::repl::Repl;
use monkey::value::Value;

fn main() -> ExitCode {
    monkey::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match dispatch(&config) {
        Ok(()) => ExitCode::SUCCESS,
        // Diagnostics were already printed.
        Err(CliError::Parse(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(config: &Config) -> Result<(), CliError> {
    let interpreter = Interpreter::new().with_max_call_depth(config.max_call_depth);

    match &config.command {
        Command::Repl => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Repl::new(config.prompt.clone(), interpreter).run(stdin.lock(), &mut stdout)?;
            Ok(())
        }
        Command::Run { path } => run_file(path, interpreter),
        Command::Ast { path, output } => dump_ast(path, output.as_deref()),
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse `path`, printing diagnostics to stderr when it is malformed.
fn parse_file(path: &Path) -> Result<monkey::ast::Program, CliError> {
    let source = read_source(path)?;
    let mut parser = Parser::from_source(&source);
    let program = parser.parse_program();

    if parser.has_errors() {
        let printer = DiagnosticPrinter::new(path.display().to_string(), source.as_str());
        printer.write_all(&mut io::stderr().lock(), parser.errors())?;
        return Err(CliError::Parse(parser.errors().len()));
    }

    Ok(program)
}

fn run_file(path: &Path, mut interpreter: Interpreter) -> Result<(), CliError> {
    let program = parse_file(path)?;

    match interpreter.eval_program(&program) {
        Some(Value::Error(message)) => Err(CliError::Runtime(message)),
        Some(value) => {
            println!("{}", value.inspect());
            Ok(())
        }
        None => Ok(()),
    }
}

fn dump_ast(path: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let program = parse_file(path)?;
    let json = program.to_json()?;

    match output {
        Some(out) => fs::write(out, json + "\n").map_err(|source| CliError::Io {
            path: out.display().to_string(),
            source,
        }),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
