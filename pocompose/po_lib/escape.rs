//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Escaping of PO string literals
//!
//! Only `"`, newline, tab and carriage return are escaped. Every other
//! byte, backslash included, is copied as-is. Classification is done per
//! byte; the special bytes are all ASCII so UTF-8 sequences are never
//! split.

use std::borrow::Cow;

use super::compose::Fragment;

const NN: u8 = b'n'; // \x0A
const TT: u8 = b't'; // \x09
const RR: u8 = b'r'; // \x0D
const QU: u8 = b'"'; // \x22
const __: u8 = 0;

static ESCAPE_TABLE: [u8; 256] = {
    let mut table = [__; 256];
    table[b'\n' as usize] = NN;
    table[b'\t' as usize] = TT;
    table[b'\r' as usize] = RR;
    table[b'"' as usize] = QU;
    table
};

fn escape_sequence(code: u8) -> &'static str {
    match code {
        NN => "\\n",
        TT => "\\t",
        RR => "\\r",
        _ => "\\\"",
    }
}

/// Append the escaped form of `segment` to `out`.
///
/// Unescaped runs are pushed as borrowed slices of `segment`.
pub fn escape_into<'a>(segment: &'a str, out: &mut Vec<Fragment<'a>>) {
    let mut literal_start = 0;

    for (i, &b) in segment.as_bytes().iter().enumerate() {
        let code = ESCAPE_TABLE[b as usize];
        if code == __ {
            continue;
        }

        if literal_start < i {
            out.push(Cow::Borrowed(&segment[literal_start..i]));
        }
        out.push(Cow::Borrowed(escape_sequence(code)));
        literal_start = i + 1;
    }

    if literal_start < segment.len() {
        out.push(Cow::Borrowed(&segment[literal_start..]));
    }
}

/// Escape `segment` for use between the quotes of a PO string literal.
pub fn escape(segment: &str) -> Cow<'_, str> {
    if !segment.bytes().any(|b| ESCAPE_TABLE[b as usize] != __) {
        return Cow::Borrowed(segment);
    }

    let mut parts = Vec::new();
    escape_into(segment, &mut parts);
    Cow::Owned(parts.concat())
}
