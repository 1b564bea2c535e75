//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test_with_checker, terminating_signal, TestPlan};
use std::process::Output;

// The process is killed by a signal, so there is no exit code to match.
const NO_EXIT_CODE: i32 = -1;

const EXPECTED_STDOUT: &str = "about to cast \"1\" to double!\n\
1\n\
about to cast \"z\" to double, but expecting to catch bad_lexical_cast\n\
caught bad_lexical_cast\n\
about to cast \"z\" to double, should see an uncaught exception.\n";

fn lexical_cast_plan() -> TestPlan {
    TestPlan {
        cmd: String::from("lexical_cast"),
        args: Vec::new(),
        stdin_data: String::new(),
        expected_out: String::from(EXPECTED_STDOUT),
        expected_err: String::new(),
        expected_exit_code: NO_EXIT_CODE,
    }
}

fn check_progress_lines(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);
    assert_eq!(stdout.matches("caught bad_lexical_cast").count(), 1);
    assert!(!stdout.contains("uh-oh"));
}

fn check_abnormal_termination(_: &TestPlan, output: &Output) {
    assert!(!output.status.success());
    // Killed by a signal rather than exiting; which one is up to the platform.
    assert_eq!(output.status.code(), None);
    assert!(terminating_signal(output).is_some());
}

fn check_terminate_message(_: &TestPlan, output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("terminate called after throwing an instance of 'bad_lexical_cast'"),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("what():  bad lexical cast"));
}

#[test]
fn test_lexical_cast_progress() {
    run_test_with_checker(lexical_cast_plan(), check_progress_lines);
}

#[test]
fn test_lexical_cast_terminates_abnormally() {
    run_test_with_checker(lexical_cast_plan(), check_abnormal_termination);
}

#[test]
fn test_lexical_cast_reports_uncaught() {
    run_test_with_checker(lexical_cast_plan(), check_terminate_message);
}
