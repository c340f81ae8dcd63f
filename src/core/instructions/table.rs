// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! IPPcode21 instruction table.
//!
//! Entries are sorted by lower-case mnemonic so lookups can binary search.

use super::InstructionEntry;
use crate::core::operand::OperandKind;

const V: OperandKind = OperandKind::Variable;
const S: OperandKind = OperandKind::Symbol;
const L: OperandKind = OperandKind::Label;
const T: OperandKind = OperandKind::Type;

macro_rules! entry {
    ($mnemonic:literal $(, $kind:ident)*) => {
        InstructionEntry {
            mnemonic: $mnemonic,
            signature: &[$($kind),*],
        }
    };
}

pub static INSTRUCTION_TABLE: &[InstructionEntry] = &[
    entry!("add", V, S, S),
    entry!("and", V, S, S),
    entry!("break"),
    entry!("call", L),
    entry!("concat", V, S, S),
    entry!("createframe"),
    entry!("defvar", V),
    entry!("dprint", S),
    entry!("eq", V, S, S),
    entry!("exit", S),
    entry!("getchar", V, S, S),
    entry!("gt", V, S, S),
    entry!("idiv", V, S, S),
    entry!("int2char", V, S),
    entry!("jump", L),
    entry!("jumpifeq", L, S, S),
    entry!("jumpifneq", L, S, S),
    entry!("label", L),
    entry!("lt", V, S, S),
    entry!("move", V, S),
    entry!("mul", V, S, S),
    entry!("not", V, S),
    entry!("or", V, S, S),
    entry!("popframe"),
    entry!("pops", V),
    entry!("pushframe"),
    entry!("pushs", S),
    entry!("read", V, T),
    entry!("return"),
    entry!("setchar", V, S, S),
    entry!("stri2int", V, S, S),
    entry!("strlen", V, S),
    entry!("sub", V, S, S),
    entry!("type", V, S),
    entry!("write", S),
];

/// Look up an opcode, ignoring case.
pub fn lookup(opcode: &str) -> Option<&'static InstructionEntry> {
    let key = opcode.to_ascii_lowercase();
    INSTRUCTION_TABLE
        .binary_search_by(|entry| entry.mnemonic.cmp(key.as_str()))
        .ok()
        .map(|idx| &INSTRUCTION_TABLE[idx])
}
