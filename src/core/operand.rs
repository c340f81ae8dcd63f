// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Operand representation.
//!
//! Every instruction position expects one [`OperandKind`]. The validator
//! classifies the source token for that position and stores the result as an
//! [`Operand`] value, so downstream consumers never re-inspect raw text.

use std::fmt;

/// Kind of operand an instruction signature position demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Frame-scoped variable reference (`GF@x`).
    Variable,
    /// Variable reference or literal constant.
    Symbol,
    /// Bare identifier used as a jump target.
    Label,
    /// One of the type names `int`, `bool`, `string`, `nil`.
    Type,
}

impl OperandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperandKind::Variable => "variable",
            OperandKind::Symbol => "symbol",
            OperandKind::Label => "label",
            OperandKind::Type => "type",
        }
    }
}

/// Variable scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Global,
    Local,
    Temporary,
}

impl Frame {
    /// Parse a frame prefix (`GF`, `LF`, `TF`).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "GF" => Some(Frame::Global),
            "LF" => Some(Frame::Local),
            "TF" => Some(Frame::Temporary),
            _ => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Frame::Global => "GF",
            Frame::Local => "LF",
            Frame::Temporary => "TF",
        }
    }
}

/// Literal constant subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantKind {
    Int,
    Bool,
    String,
    Nil,
}

impl ConstantKind {
    /// Parse a constant prefix (the text before the first `@`).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "int" => Some(ConstantKind::Int),
            "bool" => Some(ConstantKind::Bool),
            "string" => Some(ConstantKind::String),
            "nil" => Some(ConstantKind::Nil),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConstantKind::Int => "int",
            ConstantKind::Bool => "bool",
            ConstantKind::String => "string",
            ConstantKind::Nil => "nil",
        }
    }
}

/// A classified instruction operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Variable reference: frame plus name.
    Variable { frame: Frame, name: String },

    /// Literal constant. `value` is the raw text after the first `@`,
    /// escape sequences included.
    Constant { kind: ConstantKind, value: String },

    /// Jump target name.
    Label(String),

    /// Type name.
    Type(String),
}

impl Operand {
    /// Kind tag written to serialized output (`var`, `int`, `label`, ...).
    pub fn type_name(&self) -> &str {
        match self {
            Operand::Variable { .. } => "var",
            Operand::Constant { kind, .. } => kind.as_str(),
            Operand::Label(_) => "label",
            Operand::Type(_) => "type",
        }
    }

    /// Value written to serialized output.
    ///
    /// Variables keep their frame prefix; constants drop their subtype prefix.
    pub fn value_text(&self) -> String {
        match self {
            Operand::Variable { frame, name } => format!("{}@{}", frame.prefix(), name),
            Operand::Constant { value, .. } => value.clone(),
            Operand::Label(name) => name.clone(),
            Operand::Type(name) => name.clone(),
        }
    }

    /// Reproduce the source token this operand was classified from.
    pub fn render(&self) -> String {
        match self {
            Operand::Constant { kind, value } => format!("{}@{}", kind.as_str(), value),
            _ => self.value_text(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
