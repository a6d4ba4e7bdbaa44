// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! TAP device backing the virtio NIC.

use libc::{c_char, IFF_NO_PI, IFF_TAP};
use std::fs::File;
use std::io::{Error as IoError, Read, Write};
use std::os::unix::io::{AsRawFd, FromRawFd, RawFd};
use std::path::Path;
use std::process::Command;

use log::info;
use vmm_sys_util::ioctl::ioctl_with_mut_ref;
use vmm_sys_util::{ioctl_expr, ioctl_ioc_nr, ioctl_iow_nr};

use crate::devices::bindings::{ifreq, IFNAMSIZ};
use crate::devices::{Error, Result};
use crate::virtio::net::NetBackend;

const TAP_FILE: *const c_char = b"/dev/net/tun\0".as_ptr() as *const c_char;

// See if_tun.h
// https://elixir.bootlin.com/linux/v4.17/source/include/uapi/linux/if_tun.h#L34
// 84 is the ascii code for "T", see if_tun.h too
const TUNTAP: ::std::os::raw::c_uint = 84;
ioctl_iow_nr!(TUNSETIFF, TUNTAP, 202, ::std::os::raw::c_int);

/// A TAP interface. The fd stays blocking: the dedicated receive thread
/// parks in `read` until the host side has a frame.
#[derive(Debug)]
pub struct Tap {
    file: File,
    if_name: [u8; IFNAMSIZ],
}

/// Take if_name and return a null terminated C string with our interface
/// name inside.
fn terminated_if_name(if_name: &str) -> Result<[u8; IFNAMSIZ]> {
    let bytes_name = if_name.as_bytes();

    // One byte stays for the terminator.
    if bytes_name.len() >= IFNAMSIZ {
        return Err(Error::InvalidTapLength(if_name.to_string()));
    }
    let mut terminated_name = [b'\0'; IFNAMSIZ];
    terminated_name[..bytes_name.len()].copy_from_slice(bytes_name);
    Ok(terminated_name)
}

impl Tap {
    /// Open `/dev/net/tun` and attach to (or create) the named TAP
    /// interface.
    pub fn open_named(if_name: &str) -> Result<Self> {
        let fd = unsafe {
            // O_CLOEXEC so the tap setup script does not inherit the fd.
            libc::open(TAP_FILE, libc::O_RDWR | libc::O_CLOEXEC)
        };
        if fd < 0 {
            return Err(Error::OpenTun(IoError::last_os_error()));
        }

        let tuntap = unsafe { File::from_raw_fd(fd) };

        let mut req = ifreq::default();
        req.ifr_name = terminated_if_name(if_name)?;
        req.ifr_flags = (IFF_TAP | IFF_NO_PI) as i16;

        let ret = unsafe { ioctl_with_mut_ref(&tuntap, TUNSETIFF(), &mut req) };
        if ret < 0 {
            return Err(Error::IoctlError(IoError::last_os_error()));
        }

        Ok(Tap {
            file: tuntap,
            if_name: req.ifr_name,
        })
    }

    pub fn if_name(&self) -> &str {
        let len = self
            .if_name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(IFNAMSIZ);
        std::str::from_utf8(&self.if_name[..len]).unwrap_or("")
    }

    /// Hand the freshly created interface to the user's setup script;
    /// it learns the interface and the host address via the environment.
    pub fn run_setup_script<P: AsRef<Path>>(&self, script: P, host_ip: &str) -> Result<()> {
        let script = script.as_ref();
        info!("running tap setup script {}", script.display());
        let status = Command::new(script)
            .env("TAP_NAME", self.if_name())
            .env("HOST_IP", host_ip)
            .status()
            .map_err(|_| Error::TapScript(script.display().to_string()))?;
        if !status.success() {
            return Err(Error::TapScript(script.display().to_string()));
        }
        Ok(())
    }
}

impl NetBackend for Tap {
    fn recv(&self, buf: &mut [u8]) -> std::io::Result<usize> {
        (&self.file).read(buf)
    }

    fn send(&self, buf: &[u8]) -> std::io::Result<usize> {
        (&self.file).write(buf)
    }
}

impl AsRawFd for Tap {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
