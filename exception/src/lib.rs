//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Failure values thrown by the exception probes, and the "nobody caught
//! it" path that ends the process abnormally.

use std::io::{self, Write};
use std::str::FromStr;

/// Text that could not be read as the requested numeric type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("bad lexical cast: source type value could not be interpreted as target")]
pub struct BadLexicalCast {
    pub source_text: String,
    pub target: &'static str,
}

/// Everything a probe may throw.  Handlers pick out the variant they
/// expect and pass the rest on.
#[derive(thiserror::Error, Debug)]
pub enum Thrown {
    #[error("{0}")]
    Message(&'static str),
    #[error(transparent)]
    LexicalCast(#[from] BadLexicalCast),
}

impl Thrown {
    pub fn type_name(&self) -> &'static str {
        match self {
            Thrown::Message(_) => "char const*",
            Thrown::LexicalCast(_) => "bad_lexical_cast",
        }
    }
}

/// Strict conversion: the whole of `text` must be a valid `T`, with no
/// surrounding whitespace.
pub fn lexical_cast<T: FromStr>(text: &str) -> Result<T, BadLexicalCast> {
    text.parse::<T>().map_err(|_| {
        log::debug!("cannot read {:?} as {}", text, std::any::type_name::<T>());
        BadLexicalCast {
            source_text: text.to_owned(),
            target: std::any::type_name::<T>(),
        }
    })
}

/// Terminate on a failure no handler took.  Output already written is
/// flushed first so the harness sees every line that preceded it.
pub fn uncaught(thrown: Thrown) -> ! {
    let _ = io::stdout().flush();

    eprintln!(
        "terminate called after throwing an instance of '{}'",
        thrown.type_name()
    );
    eprintln!("  what():  {}", thrown);

    std::process::abort()
}
