//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Entry rendering
//!
//! Field order is fixed: comments, extracted comments, flags, references,
//! previous msgids, msgctxt, msgid, then msgid_plural and msgstr[N] for
//! plural entries or msgstr for singular ones. Only keyword lines carry
//! the obsolete prefix.

use super::catalog::{Entry, Plural, Reference, Singular};
use super::compose::Fragment;
use super::field::{
    comment_lines, continuation_lines, extracted_comment_lines, flag_lines, keyword_block,
    msgctxt_block, plural_msgstr_blocks, previous_msgid_lines, reference_lines,
};

/// msgid of the synthetic header entry, and first msgstr segment
static EMPTY_SEGMENT: [String; 1] = [String::new()];

fn annotation_lines<'a>(
    comments: &'a [String],
    extracted_comments: &'a [String],
    flags: &'a [Vec<String>],
    references: &'a [Vec<Reference>],
    previous_msgids: &'a [String],
    out: &mut Vec<Fragment<'a>>,
) {
    comment_lines(comments, out);
    extracted_comment_lines(extracted_comments, out);
    flag_lines(flags, out);
    reference_lines(references, out);
    previous_msgid_lines(previous_msgids, out);
}

fn render_singular<'a>(entry: &'a Singular, out: &mut Vec<Fragment<'a>>) {
    annotation_lines(
        &entry.comments,
        &entry.extracted_comments,
        &entry.flags,
        &entry.references,
        &entry.previous_msgids,
        out,
    );
    msgctxt_block(&entry.msgctxt, entry.obsolete, out);
    keyword_block("msgid", &entry.msgid, entry.obsolete, out);
    keyword_block("msgstr", &entry.msgstr, entry.obsolete, out);
}

fn render_plural<'a>(entry: &'a Plural, out: &mut Vec<Fragment<'a>>) {
    annotation_lines(
        &entry.comments,
        &entry.extracted_comments,
        &entry.flags,
        &entry.references,
        &entry.previous_msgids,
        out,
    );
    msgctxt_block(&entry.msgctxt, entry.obsolete, out);
    keyword_block("msgid", &entry.msgid, entry.obsolete, out);
    keyword_block("msgid_plural", &entry.msgid_plural, entry.obsolete, out);
    plural_msgstr_blocks(&entry.msgstr, entry.obsolete, out);
}

/// Append the lines of one entry to `out`
pub fn render_entry<'a>(entry: &'a Entry, out: &mut Vec<Fragment<'a>>) {
    match entry {
        Entry::Singular(singular) => render_singular(singular, out),
        Entry::Plural(plural) => render_plural(plural, out),
    }
}

/// Append the header entry: empty msgid, then an empty msgstr keyword
/// line followed by one continuation line per header.
pub fn render_header<'a>(
    comments: &'a [String],
    headers: &'a [String],
    out: &mut Vec<Fragment<'a>>,
) {
    comment_lines(comments, out);
    keyword_block("msgid", &EMPTY_SEGMENT, false, out);
    keyword_block("msgstr", &EMPTY_SEGMENT, false, out);
    continuation_lines(headers, false, out);
}
