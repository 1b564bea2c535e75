//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the toolchain-probes project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Build-target identification.
//!
//! The target family is fixed when the crate is compiled; only the version
//! details (Windows version word, glibc release) are looked up at run time.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Wasi,
}

// Decision order: 64-bit Windows, Apple, Linux, WASI.  Anything else has
// no variant, and probes that need one refuse to build.
cfg_if::cfg_if! {
    if #[cfg(all(target_os = "windows", target_pointer_width = "64"))] {
        pub const CURRENT: Option<Platform> = Some(Platform::Windows);
    } else if #[cfg(target_os = "macos")] {
        pub const CURRENT: Option<Platform> = Some(Platform::MacOs);
    } else if #[cfg(target_os = "linux")] {
        pub const CURRENT: Option<Platform> = Some(Platform::Linux);
    } else if #[cfg(target_os = "wasi")] {
        pub const CURRENT: Option<Platform> = Some(Platform::Wasi);
    } else {
        pub const CURRENT: Option<Platform> = None;
    }
}

/// Run-time detail printed after the platform tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    Windows(WindowsVersion),
    Libc(LibcFlavor),
}

impl Platform {
    pub fn tag(self) -> &'static str {
        match self {
            Platform::Windows => "Running Windows version",
            Platform::MacOs => "Running macOS",
            Platform::Linux => "Running Linux",
            Platform::Wasi => "Running WASI",
        }
    }

    pub fn detect(self) -> Detail {
        match self {
            Platform::Windows => match WindowsVersion::current() {
                Some(version) => Detail::Windows(version),
                None => Detail::Libc(LibcFlavor::current()),
            },
            _ => Detail::Libc(LibcFlavor::current()),
        }
    }

    pub fn line(self, detail: &Detail) -> String {
        match detail {
            Detail::Windows(version) => format!("{} {}.", self.tag(), version),
            Detail::Libc(flavor) => format!("{} {}", self.tag(), flavor),
        }
    }
}

/// Version triple unpacked from the `GetVersion` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl WindowsVersion {
    /// Low byte of the low word is the major version, high byte of the low
    /// word the minor.  The high word is a build number only while the top
    /// bit of the raw value is clear.
    pub fn from_raw(raw: u32) -> WindowsVersion {
        let low_word = raw & 0xffff;
        let major = low_word & 0xff;
        let minor = (low_word >> 8) & 0xff;

        let mut build = 0;
        if raw < 0x8000_0000 {
            build = (raw >> 16) & 0xffff;
        }

        WindowsVersion {
            major,
            minor,
            build,
        }
    }

    #[cfg(windows)]
    pub fn current() -> Option<WindowsVersion> {
        let raw = unsafe { windows::Win32::System::SystemInformation::GetVersion() };
        log::debug!("GetVersion returned {raw:#010x}");
        Some(WindowsVersion::from_raw(raw))
    }

    #[cfg(not(windows))]
    pub fn current() -> Option<WindowsVersion> {
        None
    }
}

impl fmt::Display for WindowsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} ({})", self.major, self.minor, self.build)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibcFlavor {
    Glibc { major: u32, minor: u32 },
    NonGlibc,
}

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "linux", target_env = "gnu"))] {
        extern "C" {
            fn gnu_get_libc_version() -> *const libc::c_char;
        }

        fn glibc_version() -> Option<String> {
            let ptr = unsafe { gnu_get_libc_version() };
            if ptr.is_null() {
                return None;
            }
            let version = unsafe { std::ffi::CStr::from_ptr(ptr) };
            Some(version.to_string_lossy().into_owned())
        }
    } else {
        fn glibc_version() -> Option<String> {
            None
        }
    }
}

impl LibcFlavor {
    /// Parse a glibc release string such as `2.35` or `2.39.9000`.
    pub fn parse(version: &str) -> Option<LibcFlavor> {
        let mut parts = version.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some(LibcFlavor::Glibc { major, minor })
    }

    pub fn current() -> LibcFlavor {
        let version = glibc_version();
        log::debug!("glibc release: {:?}", version);

        version
            .as_deref()
            .and_then(LibcFlavor::parse)
            .unwrap_or(LibcFlavor::NonGlibc)
    }
}

impl fmt::Display for LibcFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibcFlavor::Glibc { major, minor } => write!(f, "glibc_{}.{}", major, minor),
            LibcFlavor::NonGlibc => write!(f, "non-glibc"),
        }
    }
}
