//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use plib::i18n::gettext;

/// hello - the smallest program a toolchain should be able to build and run
#[derive(Parser)]
#[command(version, about = gettext("hello - print a greeting and exit successfully"))]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    plib::init()?;

    println!("hello, world");

    Ok(())
}
