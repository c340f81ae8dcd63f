// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Shared text utilities for line normalization and token classification.

/// Punctuation allowed anywhere in an identifier, including the first character.
pub const IDENT_PUNCT: &[u8] = b"_-$&%*!?";

/// Check if a character may start an identifier (ASCII letter or identifier punctuation).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || (c.is_ascii() && IDENT_PUNCT.contains(&(c as u8)))
}

/// Check if a character may continue an identifier.
#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_digit() || is_ident_start(c)
}

/// Check if a string is a complete identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_char),
        _ => false,
    }
}

/// Check if a character is whitespace: space, tab, LF, CR, vertical tab or form feed.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Split a line into code and comment parts at the first `#`.
pub fn split_comment(line: &str) -> (&str, &str) {
    match line.find('#') {
        Some(idx) => (&line[..idx], &line[idx..]),
        None => (line, ""),
    }
}

/// Split raw source bytes into lines.
///
/// Each line is decoded on its own, so bytes that are not UTF-8 only affect
/// the line they sit on (and vanish with it when it is a comment). A trailing
/// `\r` is dropped, and a final newline does not start an extra line.
pub fn split_source_lines(bytes: &[u8]) -> Vec<String> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if bytes.is_empty() {
        return Vec::new();
    }
    bytes
        .split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

/// Normalize one raw source line.
///
/// Strips the comment, trims surrounding whitespace and collapses every inner
/// whitespace run to a single space. Returns `None` for lines that carry no code.
pub fn normalize_line(raw: &str) -> Option<String> {
    let (code, _) = split_comment(raw);
    let code = code.trim_matches(is_space);
    if code.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(code.len());
    let mut in_space = false;
    for c in code.chars() {
        if is_space(c) {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    Some(out)
}
