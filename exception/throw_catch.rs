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
use probes_exception::{uncaught, Thrown};

/// throw_catch - throw a message and catch it by type
#[derive(Parser)]
#[command(version, about = gettext("throw_catch - throw a message and catch it by type"))]
struct Args {}

fn throw_message() -> Result<(), Thrown> {
    Err(Thrown::Message("error"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    plib::init()?;

    eprintln!("will throw and expect to catch an error...");

    match throw_message() {
        Ok(()) => {}
        Err(Thrown::Message(msg)) => eprintln!("caught: {}", msg),
        Err(other) => uncaught(other),
    }

    eprintln!("done");

    Ok(())
}
