//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! posixutils-pocompose library
//!
//! This library turns an in-memory message catalog into the text of a
//! .po/.pot file:
//! - po_lib::catalog: headers and translation entries
//! - po_lib::compose: lazy fragment stream of PO source text
//!
//! The xgettext utility in this package is built on top of it.

pub mod po_lib;
