// SPDX-License-Identifier: MIT

use crate::error::ProbeError;
use crate::PROJECT_NAME;
use clap::{error::ErrorKind, Parser};
use std::io;
use std::process::exit;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        pub use gettextrs::gettext;
        use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};

        pub fn init_locale() -> io::Result<()> {
            setlocale(LocaleCategory::LcAll, "");
            textdomain(PROJECT_NAME)?;
            bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
            Ok(())
        }
    } else {
        // No message catalogues on Windows or WASI targets.
        pub fn gettext<T: Into<String>>(msgid: T) -> String {
            msgid.into()
        }

        pub fn init_locale() -> io::Result<()> {
            log::trace!("no locale support for {}", PROJECT_NAME);
            Ok(())
        }
    }
}

pub trait ProbeArgs: Parser {
    /// Parse the command line, collapsing every argument error into the
    /// one-line usage message and exit status 1 a harness expects.
    ///
    /// `--help` and `--version` are still answered by clap.
    fn parse_or_usage(operands: &'static str) -> Self {
        Self::try_parse().unwrap_or_else(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            kind => {
                log::debug!("rejected command line: {kind}");
                let usage = ProbeError::Usage {
                    program: crate::program_name(),
                    operands,
                };
                eprintln!("{}", usage);
                exit(usage.exit_code());
            }
        })
    }
}

impl<T: Parser> ProbeArgs for T {}
