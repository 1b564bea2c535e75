//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test_with_checker, TestPlan};
use regex::Regex;
use std::process::Output;

const EXIT_SUCCESS: i32 = 0;

fn run_platform_test(check_fn: fn(&TestPlan, &Output)) {
    let plan = TestPlan {
        cmd: String::from("platform_id"),
        args: Vec::new(),
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: EXIT_SUCCESS,
    };
    run_test_with_checker(plan, check_fn);
}

fn expected_pattern() -> &'static str {
    if cfg!(all(target_os = "linux", target_env = "gnu")) {
        r"^Running Linux glibc_2\.\d+\n$"
    } else if cfg!(target_os = "linux") {
        r"^Running Linux non-glibc\n$"
    } else if cfg!(target_os = "macos") {
        r"^Running macOS non-glibc\n$"
    } else {
        r"^Running Windows version \d+\.\d+ \(\d+\)\.\r?\n$"
    }
}

fn check_platform_line(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let re = Regex::new(expected_pattern()).unwrap();
    assert!(re.is_match(&stdout), "unexpected stdout: {stdout:?}");
    assert!(output.stderr.is_empty());
    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}

fn check_single_line(_: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Running "));
}

#[test]
fn test_platform_id_line() {
    run_platform_test(check_platform_line);
}

#[test]
fn test_platform_id_single_line() {
    run_platform_test(check_single_line);
}
