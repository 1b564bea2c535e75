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
use plib::platform::{self, Platform};

// Resolved while compiling: a target without a variant stops the build here.
const PLATFORM: Platform = match platform::CURRENT {
    Some(platform) => platform,
    None => panic!("Unknown platform"),
};

/// platform_id - print the operating system and C library this program was built for
#[derive(Parser)]
#[command(version, about = gettext("platform_id - print the operating system and C library this program was built for"))]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();

    plib::init()?;

    let detail = PLATFORM.detect();
    log::debug!("{:?}: {:?}", PLATFORM, detail);

    println!("{}", PLATFORM.line(&detail));

    Ok(())
}
