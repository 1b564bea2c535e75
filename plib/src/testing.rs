//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Location of a workspace binary built for the current profile.
pub fn get_binary_path(cmd: &str) -> PathBuf {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}{}", cmd, std::env::consts::EXE_SUFFIX)
    } else {
        format!("target/release/{}{}", cmd, std::env::consts::EXE_SUFFIX)
    };
    std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap() // Move up to the workspace root from the current package directory
        .join(relpath)
}

/// Run a probe with piped stdio and collect everything it wrote.
pub fn run_test_base(cmd: &str, args: &Vec<String>, stdin_data: &[u8]) -> Output {
    let test_bin_path = get_binary_path(cmd);

    let mut child = Command::new(test_bin_path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|_| panic!("failed to spawn command {cmd}"));

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(stdin_data) {
            eprintln!("Error writing to stdin: {}", e);
        }
        // Explicitly drop stdin to close the pipe
        drop(stdin);
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    checker(&plan, &output);
}

/// Signal that terminated the probe, if it did not exit normally.
#[cfg(unix)]
pub fn terminating_signal(output: &Output) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    output.status.signal()
}
