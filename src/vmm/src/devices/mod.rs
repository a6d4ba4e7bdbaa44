// SPDX-License-Identifier: Apache-2.0

//! Legacy devices and host back-ends.

use std::io::Error as IoError;

pub(crate) mod bindings;
pub mod disk;
pub mod i8042;
pub mod pci;
pub mod rtc;
pub mod serial;
pub mod tap;

/// Custom defined [`std::result::Result`]
pub type Result<T> = std::result::Result<T, Error>;

/// Error related to host-side device plumbing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open /dev/net/tun: {0}")]
    OpenTun(IoError),

    #[error("Failed to communicate with device: {0}")]
    IoctlError(IoError),

    #[error("TAP interface name {0} is too long")]
    InvalidTapLength(String),

    #[error("TAP setup script {0} failed")]
    TapScript(String),
}
