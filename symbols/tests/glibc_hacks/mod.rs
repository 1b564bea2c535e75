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

fn check_lucky_numbers(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let re = Regex::new(r"^Your lucky numbers are 0x([0-9a-f]+) and 0x([0-9a-f]+)\n$").unwrap();
    let caps = re
        .captures(&stdout)
        .unwrap_or_else(|| panic!("unexpected stdout: {stdout:?}"));

    let fcntl_addr = u64::from_str_radix(&caps[1], 16).unwrap();
    let res_search_addr = u64::from_str_radix(&caps[2], 16).unwrap();
    assert_ne!(fcntl_addr, 0);
    assert_ne!(res_search_addr, 0);
    assert_ne!(fcntl_addr, res_search_addr);

    assert!(output.stderr.is_empty());
    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}

#[test]
fn test_glibc_hacks_resolves_symbols() {
    let plan = TestPlan {
        cmd: String::from("glibc_hacks"),
        args: Vec::new(),
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    };
    run_test_with_checker(plan, check_lucky_numbers);
}
