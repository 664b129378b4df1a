/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * File:     config.rs
 * Purpose:  Command-line configuration.
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

use std::path::PathBuf;

use crate::error::CliError;
use crate::interpreter::DEFAULT_MAX_CALL_DEPTH;

/// Prompt printed before each REPL line unless overridden.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Environment variable that replaces the default prompt.
pub const PROMPT_ENV: &str = "MONKEY_PROMPT";

pub const USAGE: &str = "\
Usage: monkey [command]

Commands:
  repl [--prompt=<p>]     Start the interactive REPL (default)
  run <file>              Parse and evaluate a file, print the result
  ast <file> [-o <out>]   Dump the parsed AST as JSON
  help                    Show this message

Options:
  --max-depth=<n>         Maximum nested function calls (default 200)

Set RUST_LOG (e.g. RUST_LOG=monkey=trace) to enable developer tracing.";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run { path: PathBuf },
    Ast { path: PathBuf, output: Option<PathBuf> },
    Help,
}

/// Command-line configuration for one `monkey` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub prompt: String,
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: Command::Repl,
            prompt: DEFAULT_PROMPT.to_string(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self, CliError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args, std::env::var(PROMPT_ENV).ok())
    }

    /// Builds the configuration from `args` (without the program name).
    ///
    /// # Parameters
    /// - `args`: command-line words after the binary name
    /// - `env_prompt`: value of `MONKEY_PROMPT`, if set
    ///
    /// # Returns
    /// The parsed configuration, or `CliError::Usage` describing the first
    /// argument that could not be understood.
    pub fn from_args(args: &[String], env_prompt: Option<String>) -> Result<Self, CliError> {
        let mut config = Config::default();
        if let Some(prompt) = env_prompt {
            config.prompt = prompt;
        }

        let mut command: Option<&str> = None;
        let mut path: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();

            if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_string();
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                config.max_call_depth = depth
                    .parse()
                    .map_err(|_| CliError::Usage(format!("invalid --max-depth value: {}", depth)))?;
            } else if arg == "-o" || arg == "--output" {
                let Some(out) = args.get(i + 1) else {
                    return Err(CliError::Usage(format!("{} requires a path", arg)));
                };
                output = Some(PathBuf::from(out));
                i += 1;
            } else if arg == "-h" || arg == "--help" {
                command = Some("help");
            } else if arg.starts_with('-') {
                return Err(CliError::Usage(format!("unknown option: {}", arg)));
            } else if command.is_none() {
                command = Some(arg);
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(CliError::Usage(format!("unexpected argument: {}", arg)));
            }

            i += 1;
        }

        config.command = match command {
            None | Some("repl") => Command::Repl,
            Some("help") => Command::Help,
            Some("run") => Command::Run {
                path: path.ok_or_else(|| CliError::Usage("run requires a file path".into()))?,
            },
            Some("ast") => Command::Ast {
                path: path.ok_or_else(|| CliError::Usage("ast requires a file path".into()))?,
                output,
            },
            Some(other) => return Err(CliError::Usage(format!("unknown command: {}", other))),
        };

        Ok(config)
    }
}
