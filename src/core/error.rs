// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types, diagnostics, and reporting for the parser.

use std::fmt;

/// Categories of parser errors. Every kind is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid command-line invocation.
    Configuration,
    /// Reading the source failed.
    Input,
    /// Writing the output failed.
    Output,
    /// No code lines, or the first one is not the header.
    MissingHeader,
    /// Opcode missing from the instruction table.
    UnknownInstruction,
    /// Wrong number of operands.
    Arity,
    /// Operand token does not fit the kind its position demands.
    OperandGrammar,
}

/// A parser error with a kind, message and optional source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    line: u32,
    token: Option<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, msg: &str, param: Option<&str>) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
            line: 0,
            token: None,
        }
    }

    /// Attach the 1-based physical source line.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Attach the offending token, used to highlight the source line.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source line number, 0 when the error is not tied to a line.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build the diagnostic for this error.
    pub fn diagnostic(&self) -> Diagnostic<'_> {
        Diagnostic { error: self }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Renders a [`ParseError`] against the source it came from.
pub struct Diagnostic<'a> {
    error: &'a ParseError,
}

impl Diagnostic<'_> {
    pub fn format_with_context(&self, lines: Option<&[String]>, use_color: bool) -> String {
        let line_num = self.error.line;
        if line_num == 0 {
            return format!("ERROR: {}", self.error.message());
        }

        let mut out = String::new();
        out.push_str(&format!("{line_num}: ERROR"));
        out.push('\n');
        for line in build_context_lines(line_num, self.error.token(), lines, use_color) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!("ERROR: {}", self.error.message()));
        out
    }
}

/// Build context lines for error display.
pub fn build_context_lines(
    line_num: u32,
    token: Option<&str>,
    lines: Option<&[String]>,
    use_color: bool,
) -> Vec<String> {
    let line_idx = line_num.saturating_sub(1) as usize;
    match lines.and_then(|lines| lines.get(line_idx)) {
        Some(line) => vec![format!(
            "{:>5} | {}",
            line_num,
            highlight_token(line, token, use_color)
        )],
        None => vec![format!("{:>5} | <source unavailable>", line_num)],
    }
}

fn highlight_token(line: &str, token: Option<&str>, use_color: bool) -> String {
    let Some(token) = token.filter(|token| !token.is_empty()) else {
        return line.to_string();
    };
    let Some(idx) = line.find(token) else {
        return line.to_string();
    };
    let (head, tail) = line.split_at(idx);
    let rest = &tail[token.len()..];
    if use_color {
        format!("{head}\x1b[31m{token}\x1b[0m{rest}")
    } else {
        format!("{head}{token}{rest}")
    }
}

/// Format an error message with an optional parameter.
pub fn format_error(msg: &str, param: Option<&str>) -> String {
    match param {
        Some(p) => format!("{msg}: {p}"),
        None => msg.to_string(),
    }
}
