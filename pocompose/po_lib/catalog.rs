//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Message catalog data model
//!
//! Strings that may span several PO lines (msgid, msgstr, msgid_plural)
//! are kept as sequences of segments. Each segment becomes one quoted
//! line in the output, and the sequences are never empty.

use std::fmt;

/// A source location attached to an entry (#: ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reference {
    /// Bare file name
    File(String),
    /// File name and line number
    Line(String, u32),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::File(file) => write!(f, "{}", file),
            Reference::Line(file, line) => write!(f, "{}:{}", file, line),
        }
    }
}

impl From<&str> for Reference {
    fn from(file: &str) -> Self {
        Reference::File(file.to_string())
    }
}

impl From<String> for Reference {
    fn from(file: String) -> Self {
        Reference::File(file)
    }
}

impl<S: Into<String>> From<(S, u32)> for Reference {
    fn from((file, line): (S, u32)) -> Self {
        Reference::Line(file.into(), line)
    }
}

/// A message with one translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Singular {
    /// Translator comments (# ...)
    pub comments: Vec<String>,
    /// Extracted comments (#. ...)
    pub extracted_comments: Vec<String>,
    /// Flag groups, one #, line each
    pub flags: Vec<Vec<String>>,
    /// Reference groups, one #: line each
    pub references: Vec<Vec<Reference>>,
    /// Previous msgids (#| msgid "...")
    pub previous_msgids: Vec<String>,
    pub msgctxt: Option<String>,
    pub msgid: Vec<String>,
    pub msgstr: Vec<String>,
    pub obsolete: bool,
}

impl Singular {
    /// Build an entry from a single-segment msgid and msgstr
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Singular {
            msgid: vec![msgid.into()],
            msgstr: vec![msgstr.into()],
            ..Default::default()
        }
    }
}

/// A message with one translation per plural form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plural {
    pub comments: Vec<String>,
    pub extracted_comments: Vec<String>,
    pub flags: Vec<Vec<String>>,
    pub references: Vec<Vec<Reference>>,
    pub previous_msgids: Vec<String>,
    pub msgctxt: Option<String>,
    pub msgid: Vec<String>,
    pub msgid_plural: Vec<String>,
    /// (plural index, segments), emitted in this order
    pub msgstr: Vec<(u32, Vec<String>)>,
    pub obsolete: bool,
}

impl Plural {
    /// Build an entry with single-segment strings; plural forms are
    /// numbered from 0 in the order given.
    pub fn new<I, S>(msgid: impl Into<String>, msgid_plural: impl Into<String>, msgstr: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let msgstr = msgstr
            .into_iter()
            .zip(0u32..)
            .map(|(s, idx)| (idx, vec![s.into()]))
            .collect();

        Plural {
            msgid: vec![msgid.into()],
            msgid_plural: vec![msgid_plural.into()],
            msgstr,
            ..Default::default()
        }
    }
}

/// A single translatable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Singular(Singular),
    Plural(Plural),
}

impl Entry {
    pub fn is_obsolete(&self) -> bool {
        match self {
            Entry::Singular(s) => s.obsolete,
            Entry::Plural(p) => p.obsolete,
        }
    }

    pub fn msgctxt(&self) -> Option<&str> {
        match self {
            Entry::Singular(s) => s.msgctxt.as_deref(),
            Entry::Plural(p) => p.msgctxt.as_deref(),
        }
    }

    pub fn msgid(&self) -> &[String] {
        match self {
            Entry::Singular(s) => &s.msgid,
            Entry::Plural(p) => &p.msgid,
        }
    }
}

impl From<Singular> for Entry {
    fn from(entry: Singular) -> Self {
        Entry::Singular(entry)
    }
}

impl From<Plural> for Entry {
    fn from(entry: Plural) -> Self {
        Entry::Plural(entry)
    }
}

/// A complete catalog, ready to be composed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Header lines, already including any injected metadata.
    /// Rendered as the msgstr of a leading entry with an empty msgid.
    pub headers: Vec<String>,
    /// Comments attached to the header entry. Only rendered when
    /// `headers` is non-empty.
    pub header_comments: Vec<String>,
    pub entries: Vec<Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }
}

/// Split a logical string into PO segments, breaking after each newline.
///
/// `"a\nb"` becomes `["a\n", "b"]`. An empty string yields a single empty
/// segment.
pub fn segments(text: &str) -> Vec<String> {
    let segs: Vec<String> = text.split_inclusive('\n').map(String::from).collect();
    if segs.is_empty() {
        vec![String::new()]
    } else {
        segs
    }
}
