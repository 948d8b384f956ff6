//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Catalog composition
//!
//! [`compose`] returns a lazy iterator of text fragments. Entries are
//! rendered one at a time as the iterator reaches them, and almost all
//! fragments borrow from the catalog, so a caller can write a large
//! catalog out without it ever existing as one string.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use log::{debug, trace};

use super::catalog::{Catalog, Entry};
use super::entry::{render_entry, render_header};

/// A chunk of PO source text
pub type Fragment<'a> = Cow<'a, str>;

/// Composition options. None are recognized yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ComposeOptions {}

impl ComposeOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fragment stream of a composed catalog
pub struct Fragments<'a> {
    catalog: &'a Catalog,
    header_pending: bool,
    entries: slice::Iter<'a, Entry>,
    rendered: usize,
    pending: vec::IntoIter<Fragment<'a>>,
}

impl<'a> Fragments<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        Fragments {
            catalog,
            header_pending: !catalog.headers.is_empty(),
            entries: catalog.entries.iter(),
            rendered: 0,
            pending: Vec::new().into_iter(),
        }
    }

    /// Render the next entry into the pending buffer.
    /// Returns false once every entry has been rendered.
    fn refill(&mut self) -> bool {
        let catalog = self.catalog;
        let mut out = Vec::new();
        if self.rendered > 0 {
            out.push(Cow::Borrowed("\n"));
        }

        if self.header_pending {
            self.header_pending = false;
            render_header(&catalog.header_comments, &catalog.headers, &mut out);
            trace!("rendered header entry: {} fragments", out.len());
        } else if let Some(entry) = self.entries.next() {
            render_entry(entry, &mut out);
            trace!(
                "rendered entry {} (msgid {:?}, msgctxt {:?}{}): {} fragments",
                self.rendered,
                entry.msgid().concat(),
                entry.msgctxt(),
                if entry.is_obsolete() { ", obsolete" } else { "" },
                out.len()
            );
        } else {
            return false;
        }

        self.rendered += 1;
        self.pending = out.into_iter();
        true
    }

    /// Stream every remaining fragment into `writer`
    pub fn write_to<W: Write>(self, writer: &mut W) -> io::Result<()> {
        for fragment in self {
            writer.write_all(fragment.as_bytes())?;
        }
        Ok(())
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.pending.next() {
                return Some(fragment);
            }
            if !self.refill() {
                return None;
            }
        }
    }
}

impl FusedIterator for Fragments<'_> {}

/// Compose `catalog` into PO source text.
///
/// The header entry, if there are headers, comes first; entries follow
/// in catalog order, separated by blank lines. Never fails; entries with
/// empty msgid/msgstr/msgid_plural segment lists panic.
pub fn compose<'a>(catalog: &'a Catalog, _options: &ComposeOptions) -> Fragments<'a> {
    debug!(
        "composing catalog: {} header lines, {} entries",
        catalog.headers.len(),
        catalog.entries.len()
    );
    Fragments::new(catalog)
}

/// Compose `catalog` into a single string
pub fn compose_to_string(catalog: &Catalog, options: &ComposeOptions) -> String {
    compose(catalog, options).collect()
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in compose(self, &ComposeOptions::default()) {
            f.write_str(&fragment)?;
        }
        Ok(())
    }
}
