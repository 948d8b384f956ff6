//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! .po (Portable Object) file composer
//!
//! The composer is the writing half of the PO format. It consumes an
//! already-built [`Catalog`] and yields the file text as a sequence of
//! fragments, in this order per entry:
//! - #  - translator comments
//! - #. - extracted comments
//! - #, - flags
//! - #: - references (file:line)
//! - #| - previous msgid
//! - msgctxt, msgid, msgid_plural, msgstr / msgstr[N]
//!
//! Keyword lines of obsolete entries are prefixed with `#~ `.
//! Entries are separated by one blank line.

pub mod catalog;
pub mod compose;
pub mod entry;
pub mod escape;
pub mod field;

pub use catalog::{segments, Catalog, Entry, Plural, Reference, Singular};
pub use compose::{compose, compose_to_string, ComposeOptions, Fragment, Fragments};
