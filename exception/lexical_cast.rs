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
use probes_exception::{lexical_cast, uncaught, Thrown};

/// lexical_cast - catch one failed conversion, then let a second one terminate the process
#[derive(Parser)]
#[command(version, about = gettext("lexical_cast - catch one failed conversion, then let a second one terminate the process"))]
struct Args {}

fn cast_double(text: &str) -> Result<f64, Thrown> {
    Ok(lexical_cast::<f64>(text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    plib::init()?;

    println!("about to cast \"1\" to double!");
    let value = cast_double("1").unwrap_or_else(|e| uncaught(e));
    println!("{}", value);

    println!("about to cast \"z\" to double, but expecting to catch bad_lexical_cast");
    match cast_double("z") {
        Ok(value) => {
            print!("{}", value);
            println!("uh-oh, should have thrown an exception before here.");
        }
        Err(Thrown::LexicalCast(_)) => println!("caught bad_lexical_cast"),
        Err(other) => uncaught(other),
    }

    println!("about to cast \"z\" to double, should see an uncaught exception.");
    let value = cast_double("z").unwrap_or_else(|e| uncaught(e));
    print!("{}", value);
    println!("uh-oh, should have thrown an exception before here.");

    Ok(())
}
