//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io;
use std::path::PathBuf;

/// Run-time failures a probe reports through its exit status.
///
/// Unsupported platforms and unresolved symbols never get this far: they
/// stop the build instead.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("Usage: {program} {operands}")]
    Usage {
        program: String,
        operands: &'static str,
    },
    #[error("test failed. Return code: {code}")]
    ChildFailed { code: i32 },
    #[error("{program}: {}: {source}", .path.display())]
    Spawn {
        program: String,
        path: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProbeError>;

pub trait GetExitCode {
    fn get_exit_code(&self) -> i32;
}

impl ProbeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::Usage { .. } => 1,
            ProbeError::ChildFailed { .. } => 1,
            ProbeError::Spawn { .. } => 1,
        }
    }
}

impl<T> GetExitCode for Result<T> {
    fn get_exit_code(&self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(e) => e.exit_code(),
        }
    }
}
