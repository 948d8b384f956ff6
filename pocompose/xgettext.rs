//
// Copyright (c) 2025 fox0
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! xgettext - extract gettext call strings from Rust source files
//!
//! Extracted messages are collected into a catalog and written as a
//! .pot template by the PO composer.

use std::collections::{BTreeMap, HashMap};
use std::env::current_dir;
use std::ffi::OsStr;
use std::fs::{read_to_string, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use log::{debug, warn};
use posixutils_pocompose::po_lib::{
    compose, segments, Catalog, ComposeOptions, Plural, Reference, Singular,
};
use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;
use syn::{parse_file, parse_str, LitStr};

/// Keywords recognized unless disabled with `-K ""`
const DEFAULT_KEYWORDS: &[&str] = &[
    "gettext",
    "ngettext:1,2",
    "pgettext:1c,2",
    "npgettext:1c,2,3",
    "dgettext:2",
    "dngettext:2,3",
    "dcgettext:2",
];

#[derive(Parser)]
#[command(
    version,
    about = gettext("xgettext - extract gettext call strings from Rust source files"),
    help_template = gettext("{about}\n\nUsage: {usage}\n\nArguments:\n{positionals}\n\nOptions:\n{options}"),
    disable_help_flag = true,
    disable_version_flag = true,
)]
struct Args {
    #[arg(
        short,
        help = gettext("Name the default output file DEFAULT_DOMAIN.pot instead of messages.pot")
    )]
    default_domain: Option<String>,

    #[arg(
        short = 'K',
        help = gettext("\
            Specify an additional keyword to be looked for:\n\
            * An empty KEYWORD_SPEC disables the default keywords of the gettext family.\n\
            * id: the first argument of calls to id is the msgid.\n\
            * id:argnum: the argnum-th argument is the msgid.\n\
            * id:argnum1,argnum2: the arguments are the msgid and msgid_plural.\n\
            * An argnum suffixed with 'c' names the msgctxt argument, as in pgettext:1c,2.")
    )]
    keyword_spec: Vec<String>,

    #[arg(
        short,
        help = gettext("Add comment lines to the output file indicating pathnames and line numbers in the source files where each extracted string is encountered")
    )]
    numbers_lines: bool,

    #[arg(
        short,
        help = gettext("Create output files in the directory specified by pathname instead of in the current working directory")
    )]
    pathname: Option<PathBuf>,

    #[arg(short, long, help = gettext("Print help"), action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    #[arg(short = 'V', long, help = gettext("Print version"), action = clap::ArgAction::Version)]
    version: Option<bool>,

    #[arg(
        name = "FILE",
        trailing_var_arg = true,
        help = gettext("A pathname of an input file containing Rust source code. If '-' is specified for an instance of file, the standard input shall be used.")
    )]
    files: Vec<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
enum XgettextError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{path}: {source}")]
    Parse { path: String, source: syn::Error },
    #[error("{0}: unsupported file type")]
    UnsupportedFile(String),
    #[error("invalid keyword specification: {0:?}")]
    InvalidKeyword(String),
}

/// A keyword spec: which call arguments hold the strings. Argument
/// numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyword {
    name: String,
    msgid: usize,
    msgid_plural: Option<usize>,
    msgctxt: Option<usize>,
}

impl FromStr for Keyword {
    type Err = XgettextError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || XgettextError::InvalidKeyword(spec.to_string());

        let (name, argnums) = match spec.split_once(':') {
            Some((name, argnums)) => (name, Some(argnums)),
            None => (spec, None),
        };
        if parse_str::<syn::Ident>(name).is_err() {
            return Err(invalid());
        }

        let mut positions = Vec::new();
        let mut msgctxt = None;
        match argnums {
            None => positions.push(1),
            Some(argnums) => {
                for argnum in argnums.split(',') {
                    let (num, is_context) = match argnum.strip_suffix('c') {
                        Some(num) => (num, true),
                        None => (argnum, false),
                    };
                    let num: usize = num
                        .parse()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(invalid)?;
                    if !is_context {
                        positions.push(num);
                    } else if msgctxt.replace(num).is_some() {
                        return Err(invalid());
                    }
                }
            }
        }

        let (msgid, msgid_plural) = match positions.as_slice() {
            [msgid] => (*msgid, None),
            [msgid, plural] => (*msgid, Some(*plural)),
            _ => return Err(invalid()),
        };

        Ok(Keyword {
            name: name.to_string(),
            msgid,
            msgid_plural,
            msgctxt,
        })
    }
}

/// Build the keyword table from the -K options
fn keywords_from_specs(specs: &[String]) -> Result<Vec<Keyword>, XgettextError> {
    let mut keywords = Vec::new();
    if !specs.iter().any(|s| s.is_empty()) {
        for spec in DEFAULT_KEYWORDS {
            keywords.push(spec.parse()?);
        }
    }
    for spec in specs.iter().filter(|s| !s.is_empty()) {
        keywords.push(spec.parse()?);
    }
    Ok(keywords)
}

#[derive(Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct Line {
    path: String,
    line: usize,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<Line> for Reference {
    fn from(line: Line) -> Self {
        Reference::Line(line.path, u32::try_from(line.line).unwrap_or(u32::MAX))
    }
}

/// Messages sort by msgid, then context
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord)]
struct MessageKey {
    msgid: String,
    msgctxt: Option<String>,
}

#[derive(Debug, Default)]
struct Message {
    msgid_plural: Option<String>,
    lines: Vec<Line>,
}

#[derive(Debug)]
pub struct Walker {
    keywords: HashMap<String, Keyword>,
    numbers_lines: bool,
    messages: BTreeMap<MessageKey, Message>,
}

impl Walker {
    fn new(keywords: Vec<Keyword>, numbers_lines: bool) -> Self {
        // later specs for the same name win
        let keywords = keywords
            .into_iter()
            .map(|k| (k.name.clone(), k))
            .collect();

        Self {
            keywords,
            numbers_lines,
            messages: BTreeMap::new(),
        }
    }

    fn process_rust_file(&mut self, content: &str, path: &str) -> Result<(), XgettextError> {
        let file = parse_file(content).map_err(|source| XgettextError::Parse {
            path: path.to_string(),
            source,
        })?;
        let before = self.messages.len();
        self.walk(file.into_token_stream(), path);
        debug!(
            "{}: {} new messages",
            path,
            self.messages.len() - before
        );
        Ok(())
    }

    fn walk(&mut self, stream: TokenStream, path: &str) {
        let mut iter = stream.into_iter().peekable();
        while let Some(token) = iter.next() {
            match token {
                TokenTree::Group(group) => {
                    self.walk(group.stream(), path);
                }
                TokenTree::Ident(ident) => {
                    let keyword = match self.keywords.get(&ident.to_string()) {
                        Some(keyword) => keyword.clone(),
                        None => continue,
                    };
                    if let Some(TokenTree::Group(group)) = iter.peek() {
                        if group.delimiter() == Delimiter::Parenthesis {
                            let args = split_arguments(group.stream());
                            self.extract(&keyword, &args, path);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn extract(&mut self, keyword: &Keyword, args: &[Vec<TokenTree>], path: &str) {
        let argument = |argnum: usize| args.get(argnum - 1).and_then(|arg| string_literal(arg));

        let Some((msgid, line)) = argument(keyword.msgid) else {
            return;
        };
        if msgid.is_empty() {
            return;
        }
        let msgid_plural = match keyword.msgid_plural {
            Some(argnum) => match argument(argnum) {
                Some((plural, _)) => Some(plural),
                None => return,
            },
            None => None,
        };
        let msgctxt = match keyword.msgctxt {
            Some(argnum) => match argument(argnum) {
                Some((ctxt, _)) => Some(ctxt),
                None => return,
            },
            None => None,
        };

        let message = self
            .messages
            .entry(MessageKey { msgid, msgctxt })
            .or_default();
        if let Some(plural) = msgid_plural {
            if message.msgid_plural.is_none() {
                message.msgid_plural = Some(plural);
            } else if message.msgid_plural.as_deref() != Some(plural.as_str()) {
                warn!("{}:{}: conflicting msgid_plural {:?} ignored", path, line, plural);
            }
        }
        if self.numbers_lines {
            message.lines.push(Line {
                path: path.to_string(),
                line,
            });
        }
    }

    fn sort(&mut self) {
        if !self.numbers_lines {
            return;
        }
        for message in self.messages.values_mut() {
            message.lines.sort();
            message.lines.dedup();
        }
    }

    /// Turn the extracted messages into an untranslated catalog
    fn into_catalog(self) -> Catalog {
        let mut catalog = Catalog::new();
        for (key, message) in self.messages {
            let references = if message.lines.is_empty() {
                Vec::new()
            } else {
                vec![message.lines.into_iter().map(Reference::from).collect()]
            };

            match message.msgid_plural {
                None => catalog.push(Singular {
                    references,
                    msgctxt: key.msgctxt.as_deref().map(escape_backslashes),
                    msgid: segments(&escape_backslashes(&key.msgid)),
                    msgstr: vec![String::new()],
                    ..Default::default()
                }),
                Some(plural) => catalog.push(Plural {
                    references,
                    msgctxt: key.msgctxt.as_deref().map(escape_backslashes),
                    msgid: segments(&escape_backslashes(&key.msgid)),
                    msgid_plural: segments(&escape_backslashes(&plural)),
                    msgstr: vec![(0, vec![String::new()]), (1, vec![String::new()])],
                    ..Default::default()
                }),
            }
        }
        catalog
    }
}

/// The composer leaves backslashes alone, so literal values carry them
/// pre-escaped.
fn escape_backslashes(value: &str) -> String {
    value.replace('\\', "\\\\")
}

/// Split a call's argument tokens at top-level commas
fn split_arguments(stream: TokenStream) -> Vec<Vec<TokenTree>> {
    let mut args = vec![Vec::new()];
    for token in stream {
        match &token {
            TokenTree::Punct(p) if p.as_char() == ',' && p.spacing() == Spacing::Alone => {
                args.push(Vec::new());
            }
            _ => {
                if let Some(last) = args.last_mut() {
                    last.push(token);
                }
            }
        }
    }
    args
}

/// The value and line of an argument that is exactly one string literal
fn string_literal(arg: &[TokenTree]) -> Option<(String, usize)> {
    match arg {
        [TokenTree::Literal(literal)] => {
            let line = literal.span().start().line;
            let value = parse_str::<LitStr>(&literal.to_string()).ok()?.value();
            Some((value, line))
        }
        _ => None,
    }
}

fn run(args: Args) -> Result<(), XgettextError> {
    let keywords = keywords_from_specs(&args.keyword_spec)?;
    let mut walker = Walker::new(keywords, args.numbers_lines);

    for path in &args.files {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            walker.process_rust_file(&content, "-")?;
            continue;
        }
        match path.extension().and_then(OsStr::to_str) {
            Some("rs") => {
                let content = read_to_string(path)?;
                walker.process_rust_file(&content, &path.to_string_lossy())?;
            }
            _ => return Err(XgettextError::UnsupportedFile(path.display().to_string())),
        }
    }

    walker.sort();

    let dir = match args.pathname {
        Some(dir) => dir,
        None => current_dir()?,
    };
    let output = dir.join(format!(
        "{}.pot",
        args.default_domain.as_deref().unwrap_or("messages")
    ));

    let catalog = walker.into_catalog();
    let mut writer = BufWriter::new(File::create(&output)?);
    compose(&catalog, &ComposeOptions::default()).write_to(&mut writer)?;
    writer.flush()?;

    debug!("wrote {} messages to {}", catalog.entries.len(), output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    if textdomain("posixutils-rs").is_err() {
        // Ignore error - translation may not be available
    }
    let _ = bind_textdomain_codeset("posixutils-rs", "UTF-8");

    let args = Args::parse();

    if args.files.is_empty() {
        eprintln!("xgettext: {}", gettext("no input file given"));
        exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("xgettext: {}", e);
        exit(1);
    }
}
