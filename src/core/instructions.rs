// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// Instruction metadata types shared by the opcode table.

use crate::core::operand::OperandKind;

pub struct InstructionEntry {
    pub mnemonic: &'static str,
    pub signature: &'static [OperandKind],
}

impl InstructionEntry {
    pub fn arity(&self) -> usize {
        self.signature.len()
    }
}

pub mod table;

pub use table::{lookup, INSTRUCTION_TABLE};
