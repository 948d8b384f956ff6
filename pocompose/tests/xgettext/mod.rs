// SPDX-License-Identifier: MIT

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use plib::testing::{run_test, run_test_in, TestPlan};

fn plan(args: &[&str], stdin_data: &str) -> TestPlan {
    TestPlan {
        cmd: String::from("xgettext"),
        args: args.iter().map(|s| String::from(*s)).collect(),
        stdin_data: String::from(stdin_data),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    }
}

fn assert_same_file<P: AsRef<Path>, P2: AsRef<Path>>(output_file: P, expected_output_file: P2) {
    let output = read_to_string(output_file).expect("Unable to open pot-file");
    let expected_out = read_to_string(expected_output_file).unwrap();
    assert_eq!(output, expected_out);
}

/// Run xgettext with `-p <tempdir>` and compare `<domain>.pot` to a fixture
fn xgettext_test(args: &[&str], domain: &str, expected_output_file: &str) {
    let temp_dir = tempdir().expect("Unable to create temporary directory");
    let dir = temp_dir.path().to_str().unwrap();

    let mut all_args = vec!["-p", dir];
    all_args.extend_from_slice(args);
    run_test(plan(&all_args, ""));

    assert_same_file(
        temp_dir.path().join(format!("{}.pot", domain)),
        expected_output_file,
    );
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/xgettext")
        .join(name)
}

#[test]
fn test_xgettext_no_arg() {
    let mut plan = plan(&[], "");
    plan.expected_err = String::from("xgettext: no input file given\n");
    plan.expected_exit_code = 1;
    run_test(plan);
}

#[test]
fn test_xgettext_unsupported_file() {
    let mut plan = plan(&["notes.txt"], "");
    plan.expected_err = String::from("xgettext: notes.txt: unsupported file type\n");
    plan.expected_exit_code = 1;
    run_test(plan);
}

#[test]
fn test_xgettext_invalid_keyword() {
    let mut plan = plan(&["-K", "tr:0", "tests/xgettext/test_keyword.rs"], "");
    plan.expected_err = String::from("xgettext: invalid keyword specification: \"tr:0\"\n");
    plan.expected_exit_code = 1;
    run_test(plan);
}

#[test]
fn test_xgettext_current_dir() {
    let temp_dir = tempdir().expect("Unable to create temporary directory");
    let input = fixture("test_gettext.rs");
    run_test_in(plan(&[input.to_str().unwrap()], ""), temp_dir.path());

    assert_same_file(
        temp_dir.path().join("messages.pot"),
        "tests/xgettext/test_gettext_no_lines.pot",
    );
}

#[test]
fn test_xgettext_pathname() {
    xgettext_test(
        &["tests/xgettext/test_gettext.rs"],
        "messages",
        "tests/xgettext/test_gettext_no_lines.pot",
    );
}

#[test]
fn test_xgettext_domain_pathname() {
    xgettext_test(
        &["-d", "domain", "tests/xgettext/test_gettext.rs"],
        "domain",
        "tests/xgettext/test_gettext_no_lines.pot",
    );
}

#[test]
fn test_xgettext_pathname_lines() {
    xgettext_test(
        &["-n", "tests/xgettext/test_gettext.rs"],
        "messages",
        "tests/xgettext/test_gettext.pot",
    );
}

#[test]
fn test_clap() {
    xgettext_test(
        &["-n", "tests/xgettext/test_clap.rs"],
        "messages",
        "tests/xgettext/test_clap.pot",
    );
}

#[test]
fn test_xgettext_plural_and_context() {
    xgettext_test(
        &["-n", "tests/xgettext/test_plural.rs"],
        "messages",
        "tests/xgettext/test_plural.pot",
    );
}

#[test]
fn test_xgettext_backslashes() {
    xgettext_test(
        &["-n", "tests/xgettext/test_backslash.rs"],
        "messages",
        "tests/xgettext/test_backslash.pot",
    );
}

#[test]
fn test_xgettext_custom_keyword() {
    xgettext_test(
        &["-K", "", "-K", "tr", "tests/xgettext/test_keyword.rs"],
        "messages",
        "tests/xgettext/test_keyword.pot",
    );
}

#[test]
fn test_xgettext_stdin() {
    let temp_dir = tempdir().expect("Unable to create temporary directory");
    let dir = temp_dir.path().to_str().unwrap();
    run_test(plan(
        &["-n", "-p", dir, "-"],
        "fn main() {\n    gettext(\"From stdin\");\n}\n",
    ));

    let output = read_to_string(temp_dir.path().join("messages.pot")).unwrap();
    assert_eq!(output, "#: -:2\nmsgid \"From stdin\"\nmsgstr \"\"\n");
}
