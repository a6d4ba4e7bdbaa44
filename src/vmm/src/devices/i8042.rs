// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Keyboard controller and system-port stubs at 0x60..0x64.
//!
//! The guest runs with `i8042.nokbd`, so only the reset path matters:
//! command 0xFE pulses the CPU reset line, which we turn into a VM
//! shutdown request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;

use crate::bus::BusDevice;

pub const I8042_PORT_BASE: u16 = 0x60;
pub const I8042_PORT_SIZE: u16 = 5;

const CMD_PORT_OFFSET: u64 = 4; // 0x64
const CMD_RESET_CPU: u8 = 0xfe;

pub struct I8042 {
    reset_request: Arc<AtomicBool>,
}

impl I8042 {
    pub fn new(reset_request: Arc<AtomicBool>) -> Self {
        I8042 { reset_request }
    }
}

impl BusDevice for I8042 {
    fn read(&mut self, _base: u64, _offset: u64, data: &mut [u8]) {
        // Status and data read as empty; port 0x61 reports a quiet
        // system control port B.
        for b in data.iter_mut() {
            *b = 0;
        }
    }

    fn write(&mut self, _base: u64, offset: u64, data: &[u8]) {
        if offset == CMD_PORT_OFFSET && data[0] == CMD_RESET_CPU {
            info!("guest requested cpu reset, shutting down");
            self.reset_request.store(true, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_command_sets_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut kbd = I8042::new(flag.clone());

        kbd.write(0, 0, &[CMD_RESET_CPU]); // data port, not a command
        assert!(!flag.load(Ordering::Acquire));

        kbd.write(0, CMD_PORT_OFFSET, &[0xaa]);
        assert!(!flag.load(Ordering::Acquire));

        kbd.write(0, CMD_PORT_OFFSET, &[CMD_RESET_CPU]);
        assert!(flag.load(Ordering::Acquire));
    }

    #[test]
    fn test_reads_are_quiet() {
        let mut kbd = I8042::new(Arc::new(AtomicBool::new(false)));
        let mut data = [0xffu8];
        kbd.read(0, 1, &mut data); // port 0x61
        assert_eq!(data[0], 0);
        kbd.read(0, 4, &mut data); // status port
        assert_eq!(data[0], 0);
    }
}
