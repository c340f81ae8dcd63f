// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! XML output for validated programs.

use std::io::Write;

use crate::core::program::{Program, LANGUAGE};
use crate::core::validator::Instruction;

/// Writer for the XML program document.
pub struct XmlWriter<W: Write> {
    out: W,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_program(&mut self, program: &Program) -> std::io::Result<()> {
        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        if program.is_empty() {
            writeln!(self.out, r#"<program language="{LANGUAGE}"/>"#)?;
            return Ok(());
        }
        writeln!(self.out, r#"<program language="{LANGUAGE}">"#)?;
        for instruction in program.instructions() {
            self.write_instruction(instruction)?;
        }
        writeln!(self.out, "</program>")?;
        Ok(())
    }

    fn write_instruction(&mut self, instruction: &Instruction) -> std::io::Result<()> {
        let open = format!(
            r#"  <instruction order="{}" opcode="{}""#,
            instruction.order,
            escape(&instruction.opcode)
        );
        if instruction.operands.is_empty() {
            return writeln!(self.out, "{open}/>");
        }
        writeln!(self.out, "{open}>")?;
        for (idx, operand) in instruction.operands.iter().enumerate() {
            let tag = format!("arg{}", idx + 1);
            writeln!(
                self.out,
                r#"    <{tag} type="{}">{}</{tag}>"#,
                operand.type_name(),
                escape(&operand.value_text())
            )?;
        }
        writeln!(self.out, "  </instruction>")
    }
}

/// Escape text for element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
