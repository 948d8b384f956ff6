//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Field formatting
//!
//! Each function appends zero or more complete lines to `out`. Every line
//! ends with its own `"\n"` fragment.

use std::borrow::Cow;

use super::catalog::Reference;
use super::compose::Fragment;
use super::escape::escape_into;

const NEWLINE: &str = "\n";
const OBSOLETE_PREFIX: &str = "#~ ";

fn prefixed_lines<'a>(prefix: &'static str, lines: &'a [String], out: &mut Vec<Fragment<'a>>) {
    for line in lines {
        out.push(Cow::Borrowed(prefix));
        out.push(Cow::Borrowed(line.as_str()));
        out.push(Cow::Borrowed(NEWLINE));
    }
}

/// Translator comments: `# text`
pub fn comment_lines<'a>(comments: &'a [String], out: &mut Vec<Fragment<'a>>) {
    prefixed_lines("# ", comments, out);
}

/// Extracted comments: `#. text`
pub fn extracted_comment_lines<'a>(comments: &'a [String], out: &mut Vec<Fragment<'a>>) {
    prefixed_lines("#. ", comments, out);
}

/// One `#: ` line per reference group, references joined with `", "`
pub fn reference_lines<'a>(groups: &'a [Vec<Reference>], out: &mut Vec<Fragment<'a>>) {
    for group in groups {
        out.push(Cow::Borrowed("#: "));
        for (i, reference) in group.iter().enumerate() {
            if i > 0 {
                out.push(Cow::Borrowed(", "));
            }
            match reference {
                Reference::File(file) => out.push(Cow::Borrowed(file.as_str())),
                Reference::Line(..) => out.push(Cow::Owned(reference.to_string())),
            }
        }
        out.push(Cow::Borrowed(NEWLINE));
    }
}

/// One `#, ` line per flag group, flags joined with `", "`
pub fn flag_lines<'a>(groups: &'a [Vec<String>], out: &mut Vec<Fragment<'a>>) {
    for group in groups {
        out.push(Cow::Borrowed("#, "));
        for (i, flag) in group.iter().enumerate() {
            if i > 0 {
                out.push(Cow::Borrowed(", "));
            }
            out.push(Cow::Borrowed(flag.as_str()));
        }
        out.push(Cow::Borrowed(NEWLINE));
    }
}

/// `#| msgid "..."` lines.
///
/// Never obsolete-prefixed, whatever the owning entry.
pub fn previous_msgid_lines<'a>(previous: &'a [String], out: &mut Vec<Fragment<'a>>) {
    for msgid in previous {
        out.push(Cow::Borrowed("#| "));
        keyword_block("msgid", std::slice::from_ref(msgid), false, out);
    }
}

/// The keyword and quoted-strings block shared by msgctxt, msgid,
/// msgid_plural, msgstr and msgstr[N].
///
/// The first segment goes on the keyword line, each further segment on a
/// continuation line of its own. `segments` must not be empty.
pub fn keyword_block<'a>(
    keyword: impl Into<Fragment<'a>>,
    segments: &'a [String],
    obsolete: bool,
    out: &mut Vec<Fragment<'a>>,
) {
    let (first, rest) = segments
        .split_first()
        .expect("keyword block needs at least one segment");

    if obsolete {
        out.push(Cow::Borrowed(OBSOLETE_PREFIX));
    }
    out.push(keyword.into());
    out.push(Cow::Borrowed(" \""));
    escape_into(first, out);
    out.push(Cow::Borrowed("\"\n"));

    continuation_lines(rest, obsolete, out);
}

/// Quoted continuation lines, one per segment, with no keyword
pub fn continuation_lines<'a>(
    segments: &'a [String],
    obsolete: bool,
    out: &mut Vec<Fragment<'a>>,
) {
    for segment in segments {
        if obsolete {
            out.push(Cow::Borrowed(OBSOLETE_PREFIX));
        }
        out.push(Cow::Borrowed("\""));
        escape_into(segment, out);
        out.push(Cow::Borrowed("\"\n"));
    }
}

/// `msgctxt` block, omitted when there is no context
pub fn msgctxt_block<'a>(msgctxt: &'a Option<String>, obsolete: bool, out: &mut Vec<Fragment<'a>>) {
    if let Some(ctxt) = msgctxt {
        keyword_block("msgctxt", std::slice::from_ref(ctxt), obsolete, out);
    }
}

/// `msgstr[N]` blocks in the order given
pub fn plural_msgstr_blocks<'a>(
    msgstr: &'a [(u32, Vec<String>)],
    obsolete: bool,
    out: &mut Vec<Fragment<'a>>,
) {
    for (index, segments) in msgstr {
        keyword_block(format!("msgstr[{}]", index), segments, obsolete, out);
    }
}
