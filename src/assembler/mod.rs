// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! IPPcode21 parser - main entry point.
//!
//! This module ties the command line, the validating core and the XML
//! output adapter together.

pub mod cli;

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Read, Write};

use crate::core::error::{ErrorKind, ParseError};
use crate::core::program::{assemble, Program};
use crate::core::text_utils::split_source_lines;
use crate::output::xml::XmlWriter;

use cli::{parse_cli, CliAction, ExitStatus, USAGE};

/// Result of a successful run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Program validated and written.
    Assembled(Program),
    /// Usage was printed.
    Help,
}

impl RunOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RunOutcome::Assembled(_) => ExitStatus::Success,
            RunOutcome::Help => ExitStatus::Help,
        }
    }
}

/// Error from a failed run, with the source needed to render diagnostics.
#[derive(Debug)]
pub struct RunError {
    error: ParseError,
    source_lines: Vec<String>,
}

impl RunError {
    pub fn new(error: ParseError, source_lines: Vec<String>) -> Self {
        Self {
            error,
            source_lines,
        }
    }

    pub fn source_lines(&self) -> &[String] {
        &self.source_lines
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from(self.error.kind())
    }

    pub fn format_with_context(&self, use_color: bool) -> String {
        self.error
            .diagnostic()
            .format_with_context(Some(self.source_lines()), use_color)
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for RunError {}

impl From<ParseError> for RunError {
    fn from(error: ParseError) -> Self {
        Self::new(error, Vec::new())
    }
}

/// Run the parser with process arguments, stdin and stdout.
pub fn run() -> Result<RunOutcome, RunError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(std::env::args_os(), stdin.lock(), stdout.lock())
}

/// Run the parser against explicit arguments and streams.
///
/// Arguments are validated before any input is read. Output is written only
/// once the whole program has validated.
pub fn run_with_io<I, T, R, W>(args: I, mut input: R, mut output: W) -> Result<RunOutcome, RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Read,
    W: Write,
{
    if parse_cli(args)? == CliAction::Help {
        output
            .write_all(USAGE.as_bytes())
            .and_then(|_| output.flush())
            .map_err(output_error)?;
        return Ok(RunOutcome::Help);
    }

    let mut source = Vec::new();
    input.read_to_end(&mut source).map_err(|err| {
        ParseError::new(ErrorKind::Input, "Error reading input", Some(&err.to_string()))
    })?;
    let source_lines = split_source_lines(&source);

    let program = match assemble(&source_lines) {
        Ok(program) => program,
        Err(err) => return Err(RunError::new(err, source_lines)),
    };

    let mut writer = XmlWriter::new(&mut output);
    writer.write_program(&program).map_err(output_error)?;
    output.flush().map_err(output_error)?;

    Ok(RunOutcome::Assembled(program))
}

fn output_error(err: io::Error) -> ParseError {
    ParseError::new(ErrorKind::Output, "Error writing output", Some(&err.to_string()))
}
