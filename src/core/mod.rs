// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! IPPcode21 validating core.
//!
//! Raw lines flow through the normalizer, then the validator (which consults
//! the instruction table and the lexical classifiers), and are collected into
//! a [`Program`] by the program assembler.
//!
//! # Components
//!
//! - [`text_utils`] - Character classes and line normalization
//! - [`operand`] - Operand kinds and classified operand values
//! - [`classify`] - Lexical classifiers for variables, constants, labels, types
//! - [`instructions`] - Opcode to operand signature table
//! - [`validator`] - Per-line instruction validation
//! - [`program`] - Header check and whole-program assembly
//! - [`error`] - Error kinds and diagnostics

pub mod classify;
pub mod error;
pub mod instructions;
pub mod operand;
pub mod program;
pub mod text_utils;
pub mod validator;

// Re-exports for convenience
pub use classify::{classify, is_constant, is_label, is_type, is_variable};
pub use error::{Diagnostic, ErrorKind, ParseError};
pub use instructions::{lookup, InstructionEntry};
pub use operand::{ConstantKind, Frame, Operand, OperandKind};
pub use program::{assemble, assemble_source, Program, HEADER};
pub use text_utils::normalize_line;
pub use validator::{validate_instruction, Instruction};
