//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Harness for running a built utility in integration tests.
//!
//! Binaries are looked up in the workspace `target/` directory, so tests
//! must run from a member crate directory (which `cargo test` does).

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// One invocation of a utility and its expected results
pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Path of a utility built in the same profile as the test
pub fn utility_path(cmd: &str) -> PathBuf {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    std::env::current_dir()
        .expect("no current directory")
        .parent()
        .expect("test must run inside a workspace member")
        .join("target")
        .join(profile)
        .join(cmd)
}

/// Run `cmd` with `args` and `stdin_data`, in `dir` when given
pub fn run_test_base_in(cmd: &str, args: &[String], stdin_data: &[u8], dir: Option<&Path>) -> Output {
    let mut command = Command::new(utility_path(cmd));
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let mut child = command
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn command {cmd}: {e}"));

    // dropping stdin closes the pipe
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(stdin_data) {
            eprintln!("Error writing to stdin: {}", e);
        }
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test_base(cmd: &str, args: &[String], stdin_data: &[u8]) -> Output {
    run_test_base_in(cmd, args, stdin_data, None)
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    check_output(&plan, &output);
}

/// [`run_test`] with `dir` as the utility's working directory
pub fn run_test_in(plan: TestPlan, dir: &Path) {
    let output = run_test_base_in(&plan.cmd, &plan.args, plan.stdin_data.as_bytes(), Some(dir));
    check_output(&plan, &output);
}
