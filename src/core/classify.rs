// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Lexical classifiers for operand tokens.
//!
//! Grammar, with `ident` = `[A-Za-z_\-$&%*!?][0-9A-Za-z_\-$&%*!?]*`:
//!
//! - variable: `(GF|LF|TF)@ident`
//! - constant: `int@[+-]?[0-9]+`, `bool@(true|false)`, `nil@nil`,
//!   `string@` followed by any run of characters that are not whitespace,
//!   `#` or `\`, or escape sequences `\` + three decimal digits
//! - label: `ident`
//! - type: `int|bool|string|nil`
//!
//! All classifiers are total: they answer with a bool or an `Option`.

use crate::core::operand::{ConstantKind, Frame, Operand, OperandKind};
use crate::core::text_utils::{is_identifier, is_space};

/// Split a variable reference into frame and name.
pub fn parse_variable(token: &str) -> Option<(Frame, &str)> {
    let (prefix, name) = token.split_once('@')?;
    let frame = Frame::from_prefix(prefix)?;
    is_identifier(name).then_some((frame, name))
}

pub fn is_variable(token: &str) -> bool {
    parse_variable(token).is_some()
}

/// Split a literal constant into subtype and raw value.
pub fn parse_constant(token: &str) -> Option<(ConstantKind, &str)> {
    let (prefix, value) = token.split_once('@')?;
    let kind = ConstantKind::from_prefix(prefix)?;
    let valid = match kind {
        ConstantKind::Int => is_int_literal(value),
        ConstantKind::Bool => value == "true" || value == "false",
        ConstantKind::String => is_string_literal(value),
        ConstantKind::Nil => value == "nil",
    };
    valid.then_some((kind, value))
}

pub fn is_constant(token: &str) -> bool {
    parse_constant(token).is_some()
}

pub fn is_label(token: &str) -> bool {
    is_identifier(token)
}

pub fn is_type(token: &str) -> bool {
    matches!(token, "int" | "bool" | "string" | "nil")
}

/// Classify a token against the kind its position demands.
///
/// A `Symbol` position prefers the variable reading; the two forms cannot
/// both match because their prefixes differ.
pub fn classify(kind: OperandKind, token: &str) -> Option<Operand> {
    match kind {
        OperandKind::Variable => classify_variable(token),
        OperandKind::Symbol => classify_variable(token).or_else(|| {
            parse_constant(token).map(|(kind, value)| Operand::Constant {
                kind,
                value: value.to_string(),
            })
        }),
        OperandKind::Label => is_label(token).then(|| Operand::Label(token.to_string())),
        OperandKind::Type => is_type(token).then(|| Operand::Type(token.to_string())),
    }
}

fn classify_variable(token: &str) -> Option<Operand> {
    parse_variable(token).map(|(frame, name)| Operand::Variable {
        frame,
        name: name.to_string(),
    })
}

fn is_int_literal(value: &str) -> bool {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_string_literal(value: &str) -> bool {
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                for _ in 0..3 {
                    if !chars.next().is_some_and(|d| d.is_ascii_digit()) {
                        return false;
                    }
                }
            }
            '#' => return false,
            _ if is_space(c) => return false,
            _ => {}
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_requires_known_frame() {
        assert_eq!(parse_variable("GF@x"), Some((Frame::Global, "x")));
        assert_eq!(parse_variable("LF@_tmp-1"), Some((Frame::Local, "_tmp-1")));
        assert_eq!(parse_variable("TF@?"), Some((Frame::Temporary, "?")));
        assert!(!is_variable("gf@x"));
        assert!(!is_variable("XF@x"));
        assert!(!is_variable("GF@"));
        assert!(!is_variable("GF@1x"));
        assert!(!is_variable("GF@x@y"));
        assert!(!is_variable("GFx"));
    }

    #[test]
    fn int_constants() {
        assert_eq!(parse_constant("int@5"), Some((ConstantKind::Int, "5")));
        assert_eq!(parse_constant("int@+42"), Some((ConstantKind::Int, "+42")));
        assert_eq!(parse_constant("int@-0"), Some((ConstantKind::Int, "-0")));
        assert!(!is_constant("int@"));
        assert!(!is_constant("int@+"));
        assert!(!is_constant("int@+-1"));
        assert!(!is_constant("int@0x10"));
        assert!(!is_constant("int@1.5"));
    }

    #[test]
    fn bool_and_nil_constants() {
        assert_eq!(parse_constant("bool@true"), Some((ConstantKind::Bool, "true")));
        assert_eq!(parse_constant("bool@false"), Some((ConstantKind::Bool, "false")));
        assert!(!is_constant("bool@TRUE"));
        assert!(!is_constant("bool@1"));
        assert_eq!(parse_constant("nil@nil"), Some((ConstantKind::Nil, "nil")));
        assert!(!is_constant("nil@"));
        assert!(!is_constant("nil@null"));
    }

    #[test]
    fn string_constants() {
        assert_eq!(parse_constant("string@"), Some((ConstantKind::String, "")));
        assert_eq!(
            parse_constant("string@hello\\032world"),
            Some((ConstantKind::String, "hello\\032world"))
        );
        assert_eq!(
            parse_constant("string@a@b<&>"),
            Some((ConstantKind::String, "a@b<&>"))
        );
        assert_eq!(
            parse_constant("string@příliš"),
            Some((ConstantKind::String, "příliš"))
        );
        assert!(is_constant("string@\\999"));
    }

    #[test]
    fn string_rejects_bad_escapes_and_forbidden_chars() {
        assert!(!is_constant("string@\\"));
        assert!(!is_constant("string@a\\b"));
        assert!(!is_constant("string@\\12"));
        assert!(!is_constant("string@\\12x"));
        assert!(!is_constant("string@a#b"));
        assert!(!is_constant("string@a b"));
        assert!(!is_constant("string@a\tb"));
    }

    #[test]
    fn unknown_constant_prefix() {
        assert!(!is_constant("float@1.0"));
        assert!(!is_constant("Int@1"));
        assert!(!is_constant("5"));
    }

    #[test]
    fn labels_and_types() {
        assert!(is_label("while_loop"));
        assert!(is_label("$end"));
        assert!(!is_label("GF@x"));
        assert!(!is_label("1st"));
        assert!(is_type("int"));
        assert!(is_type("nil"));
        assert!(!is_type("float"));
        assert!(!is_type("INT"));
    }

    #[test]
    fn classify_symbol_picks_variable_or_constant() {
        assert_eq!(
            classify(OperandKind::Symbol, "LF@x"),
            Some(Operand::Variable {
                frame: Frame::Local,
                name: "x".to_string()
            })
        );
        assert_eq!(
            classify(OperandKind::Symbol, "int@5"),
            Some(Operand::Constant {
                kind: ConstantKind::Int,
                value: "5".to_string()
            })
        );
        assert_eq!(classify(OperandKind::Symbol, "label"), None);
    }

    #[test]
    fn classify_variable_rejects_constants() {
        assert_eq!(classify(OperandKind::Variable, "int@5"), None);
        assert_eq!(classify(OperandKind::Label, "GF@x"), None);
        assert_eq!(classify(OperandKind::Type, "GF@x"), None);
        assert_eq!(
            classify(OperandKind::Type, "string"),
            Some(Operand::Type("string".to_string()))
        );
    }

    #[test]
    fn classified_operand_renders_source_token() {
        for (kind, token) in [
            (OperandKind::Variable, "LF@x"),
            (OperandKind::Symbol, "GF@counter"),
            (OperandKind::Symbol, "int@-17"),
            (OperandKind::Symbol, "string@a\\010b"),
            (OperandKind::Symbol, "nil@nil"),
            (OperandKind::Label, "loop"),
            (OperandKind::Type, "bool"),
        ] {
            let op = classify(kind, token).expect("valid token");
            assert_eq!(op.render(), token);
            assert_eq!(classify(kind, &op.render()), Some(op));
        }
    }
}
