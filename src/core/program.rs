// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Program assembly: header check plus sequential instruction validation.

use crate::core::error::{ErrorKind, ParseError};
use crate::core::text_utils::normalize_line;
use crate::core::validator::{validate_instruction, Instruction};

/// Header line every program starts with (compared case-insensitively).
pub const HEADER: &str = ".IPPcode21";

/// Language name written by output adapters.
pub const LANGUAGE: &str = "IPPcode21";

/// A normalized code line with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub line_num: u32,
    pub text: String,
}

/// A fully validated program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    header_ok: bool,
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn header_ok(&self) -> bool {
        self.header_ok
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Normalize raw lines, keeping only code lines with their line numbers.
pub fn collect_code_lines<I, S>(lines: I) -> Vec<SourceLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .zip(1u32..)
        .filter_map(|(raw, line_num)| {
            normalize_line(raw.as_ref()).map(|text| SourceLine { line_num, text })
        })
        .collect()
}

/// Assemble a program from raw source lines.
///
/// Stops at the first failure; no partial program is returned.
pub fn assemble<I, S>(lines: I) -> Result<Program, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let code = collect_code_lines(lines);
    let Some((header, body)) = code.split_first() else {
        return Err(ParseError::new(
            ErrorKind::MissingHeader,
            "Missing header",
            Some(HEADER),
        ));
    };
    if !header.text.eq_ignore_ascii_case(HEADER) {
        return Err(ParseError::new(
            ErrorKind::MissingHeader,
            "Invalid header, expected",
            Some(HEADER),
        )
        .with_line(header.line_num)
        .with_token(&header.text));
    }

    let mut instructions = Vec::with_capacity(body.len());
    for (source, order) in body.iter().zip(1u32..) {
        let instruction = validate_instruction(&source.text, order)
            .map_err(|err| err.with_line(source.line_num))?;
        instructions.push(instruction.with_line(source.line_num));
    }

    Ok(Program {
        header_ok: true,
        instructions,
    })
}

/// Assemble a program from a complete source text.
pub fn assemble_source(source: &str) -> Result<Program, ParseError> {
    assemble(source.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operand::{ConstantKind, Frame, Operand};

    #[test]
    fn header_with_single_instruction() {
        let program = assemble([".ippcode21", "DEFVAR GF@x"]).expect("valid program");
        assert!(program.header_ok());
        assert_eq!(program.len(), 1);
        let instr = &program.instructions()[0];
        assert_eq!(instr.order, 1);
        assert_eq!(instr.opcode, "DEFVAR");
        assert_eq!(
            instr.operands,
            vec![Operand::Variable {
                frame: Frame::Global,
                name: "x".to_string()
            }]
        );
    }

    #[test]
    fn add_with_constant() {
        let program = assemble([".ippcode21", "ADD GF@x GF@y int@5"]).expect("valid program");
        let instr = &program.instructions()[0];
        assert_eq!(instr.opcode, "ADD");
        assert_eq!(
            instr.operands[2],
            Operand::Constant {
                kind: ConstantKind::Int,
                value: "5".to_string()
            }
        );
    }

    #[test]
    fn missing_header() {
        let err = assemble(["foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingHeader);
        assert_eq!(err.line(), 1);

        let err = assemble(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingHeader);

        let err = assemble(["# only a comment", "   "]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingHeader);
    }

    #[test]
    fn header_is_checked_before_instructions() {
        let err = assemble(["DEFVAR GF@x", ".IPPcode21"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingHeader);
        let err = assemble([".IPPcode20", "FROB"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingHeader);
    }

    #[test]
    fn unknown_instruction() {
        let err = assemble([".ippcode21", "FROB GF@x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownInstruction);
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn arity_error() {
        let err = assemble([".ippcode21", "WRITE"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);
    }

    #[test]
    fn header_only_is_empty_program() {
        let program = assemble([".ippcode21"]).expect("valid program");
        assert!(program.header_ok());
        assert!(program.is_empty());
    }

    #[test]
    fn header_after_comments_and_case_insensitive() {
        let source = "# leading comment\n\n  .IPPCODE21   # header\nBREAK\n";
        let program = assemble_source(source).expect("valid program");
        assert_eq!(program.len(), 1);
        assert_eq!(program.instructions()[0].line, 4);
    }

    #[test]
    fn blank_lines_do_not_consume_order() {
        let source = ".IPPcode21\n\nDEFVAR GF@a\n# comment\n\n  MOVE GF@a int@1\nWRITE GF@a # out\n";
        let program = assemble_source(source).expect("valid program");
        let orders: Vec<u32> = program.instructions().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        let lines: Vec<u32> = program.instructions().iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![3, 6, 7]);
    }

    #[test]
    fn first_error_wins() {
        let source = ".IPPcode21\nDEFVAR GF@a\nWRITE\nFROB\n";
        let err = assemble_source(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn repeated_header_is_an_unknown_instruction() {
        let err = assemble([".IPPcode21", ".IPPcode21"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownInstruction);
    }

    #[test]
    fn collect_code_lines_keeps_line_numbers() {
        let code = collect_code_lines(["", "  a   b ", "#c", "d"]);
        assert_eq!(
            code,
            vec![
                SourceLine {
                    line_num: 2,
                    text: "a b".to_string()
                },
                SourceLine {
                    line_num: 4,
                    text: "d".to_string()
                },
            ]
        );
    }
}
