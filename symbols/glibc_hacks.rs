//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Takes the addresses of `fcntl` and `res_search`.  Both have needed
//! special handling in cross toolchains (versioned `fcntl64` aliases,
//! `res_search` living in libresolv), so a successful link is the test.
//! See https://github.com/ziglang/zig/issues/9485.

use clap::Parser;
use plib::i18n::gettext;

cfg_if::cfg_if! {
    if #[cfg(any(all(target_os = "linux", target_env = "gnu"), target_os = "macos"))] {
        #[link(name = "resolv")]
        extern "C" {
            fn res_search(
                dname: *const libc::c_char,
                class: libc::c_int,
                type_: libc::c_int,
                answer: *mut libc::c_uchar,
                anslen: libc::c_int,
            ) -> libc::c_int;
        }
    } else if #[cfg(unix)] {
        extern "C" {
            fn res_search(
                dname: *const libc::c_char,
                class: libc::c_int,
                type_: libc::c_int,
                answer: *mut libc::c_uchar,
                anslen: libc::c_int,
            ) -> libc::c_int;
        }
    } else {
        compile_error!("glibc_hacks needs a unix C library");
    }
}

/// glibc_hacks - check that rarely linked libc symbols resolve
#[derive(Parser)]
#[command(version, about = gettext("glibc_hacks - check that rarely linked libc symbols resolve"))]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    plib::init()?;

    let fcntl_addr = libc::fcntl as *const ();
    let res_search_addr = res_search as *const ();
    log::debug!("fcntl at {:p}, res_search at {:p}", fcntl_addr, res_search_addr);

    println!(
        "Your lucky numbers are {:p} and {:p}",
        fcntl_addr, res_search_addr
    );

    Ok(())
}
