// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing, argument validation and exit statuses.

use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::core::error::{ErrorKind, ParseError};

pub const USAGE: &str = "USAGE:
  ippforge <input >output
  ippforge [arguments]

Reads an IPPcode21 program from standard input, validates it and writes
its XML representation to standard output.

ARGUMENTS:
  --help\tdisplay help
";

#[derive(Parser, Debug)]
#[command(
    name = "ippforge",
    about = "IPPcode21 parser with XML output",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(long = "help", action = ArgAction::SetTrue, help = "Display usage help")]
    pub help: bool,
}

/// What a valid invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// Parse stdin and write XML to stdout.
    Run,
    /// Print usage and stop.
    Help,
}

/// Parse the command line. The first item is the program name.
///
/// The only accepted forms are no arguments or exactly `--help`.
pub fn parse_cli<I, T>(args: I) -> Result<CliAction, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(extra) = args.iter().skip(1).find(|arg| *arg != "--help") {
        let detail = format!("unexpected argument '{}'", extra.to_string_lossy());
        return Err(invalid_arguments(&detail));
    }
    if args.len() > 2 {
        return Err(invalid_arguments("--help takes no further arguments"));
    }

    let cli = Cli::try_parse_from(args).map_err(|err| {
        let detail = err.to_string();
        let detail = detail.lines().next().unwrap_or_default().to_string();
        invalid_arguments(&detail)
    })?;
    Ok(if cli.help {
        CliAction::Help
    } else {
        CliAction::Run
    })
}

fn invalid_arguments(detail: &str) -> ParseError {
    ParseError::new(ErrorKind::Configuration, "Invalid arguments", Some(detail))
}

/// Process exit statuses. The numeric values are a stable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Help = 1,
    Configuration = 10,
    Input = 11,
    Output = 12,
    MissingHeader = 21,
    UnknownInstruction = 22,
    Arity = 23,
    OperandGrammar = 24,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorKind> for ExitStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Configuration => ExitStatus::Configuration,
            ErrorKind::Input => ExitStatus::Input,
            ErrorKind::Output => ExitStatus::Output,
            ErrorKind::MissingHeader => ExitStatus::MissingHeader,
            ErrorKind::UnknownInstruction => ExitStatus::UnknownInstruction,
            ErrorKind::Arity => ExitStatus::Arity,
            ErrorKind::OperandGrammar => ExitStatus::OperandGrammar,
        }
    }
}
