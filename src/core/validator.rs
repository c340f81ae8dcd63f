// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction validation.
//!
//! Turns one normalized code line into an [`Instruction`] by looking up the
//! opcode signature and classifying each operand token against it.

use crate::core::classify::classify;
use crate::core::error::{ErrorKind, ParseError};
use crate::core::instructions::lookup;
use crate::core::operand::Operand;

/// A validated instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based position among emitted instructions.
    pub order: u32,
    /// Upper-case mnemonic.
    pub opcode: String,
    pub operands: Vec<Operand>,
    /// Physical source line, 0 when unknown.
    pub line: u32,
}

impl Instruction {
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

/// Validate a normalized line and assign it `order`.
pub fn validate_instruction(line: &str, order: u32) -> Result<Instruction, ParseError> {
    let mut tokens = line.split(' ');
    let opcode = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    let entry = lookup(opcode).ok_or_else(|| {
        ParseError::new(ErrorKind::UnknownInstruction, "Unknown instruction", Some(opcode))
            .with_token(opcode)
    })?;

    if args.len() != entry.arity() {
        let msg = format!(
            "Expected {} operand(s), found {}",
            entry.arity(),
            args.len()
        );
        return Err(ParseError::new(ErrorKind::Arity, &msg, Some(opcode)).with_token(opcode));
    }

    let mut operands = Vec::with_capacity(args.len());
    for (kind, token) in entry.signature.iter().zip(args.iter().copied()) {
        let operand = classify(*kind, token).ok_or_else(|| {
            let msg = format!("Invalid {} operand", kind.as_str());
            ParseError::new(ErrorKind::OperandGrammar, &msg, Some(token)).with_token(token)
        })?;
        operands.push(operand);
    }

    Ok(Instruction {
        order,
        opcode: opcode.to_ascii_uppercase(),
        operands,
        line: 0,
    })
}
