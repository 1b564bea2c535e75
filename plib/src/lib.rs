//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod error;
pub mod i18n;
pub mod platform;
pub mod testing;

pub const PROJECT_NAME: &'static str = "toolchain-probes";

pub use error::ProbeError;
pub use testing::*;

/// Common start-up for every probe: message catalogue, then logging.
///
/// Logging stays silent unless `RUST_LOG` asks for it, so the text a
/// harness matches on stdout/stderr is never disturbed.
pub fn init() -> std::io::Result<()> {
    i18n::init_locale()?;

    // A second call (e.g. from a test) keeps the first logger.
    let _ = env_logger::Builder::from_default_env().try_init();

    Ok(())
}

/// Name this process was invoked as, for usage and diagnostic lines.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg0| arg0.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(PROJECT_NAME))
}
