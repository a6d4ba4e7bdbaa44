// SPDX-License-Identifier: Apache-2.0

//! 8250 UART at the ttyS0 ports, wired to stdout/stdin and IRQ 4.

use std::collections::VecDeque;
use std::io::{stdout, Error, Result, Stdout};
use std::ops::Deref;

use log::warn;
use vm_superio::serial::NoEvents;
use vm_superio::{Serial, Trigger};
use vmm_sys_util::eventfd::EventFd;

use crate::bus::BusDevice;

pub const SERIAL_PORT_BASE: u16 = 0x3f8;
pub const SERIAL_PORT_SIZE: u16 = 8;
pub const SERIAL_IRQ: u32 = 4;

/// Byte sequence queued by the one-shot sysrq path. The UART model
/// cannot signal a line break, so the key byte alone is delivered.
const SYSRQ_BYTES: &[u8] = b"p";

pub struct EventFdTrigger(EventFd);

impl Trigger for EventFdTrigger {
    type E = Error;

    fn trigger(&self) -> Result<()> {
        self.write(1)
    }
}

impl Deref for EventFdTrigger {
    type Target = EventFd;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl EventFdTrigger {
    pub fn new(flag: i32) -> Result<Self> {
        Ok(EventFdTrigger(EventFd::new(flag)?))
    }
    pub fn try_clone(&self) -> Result<Self> {
        Ok(EventFdTrigger((**self).try_clone()?))
    }
}

/// The serial device plus the input bytes its 16-byte FIFO could not
/// take yet. Interrupts are delivered through an irqfd registered on
/// GSI 4.
pub struct SerialConsole {
    // eventfd allows for the device to send interrupts to the guest.
    eventfd: EventFdTrigger,

    serial: Serial<EventFdTrigger, NoEvents, Stdout>,

    pending: VecDeque<u8>,
}

impl SerialConsole {
    pub fn new() -> Result<Self> {
        let eventfd = EventFdTrigger::new(libc::EFD_NONBLOCK)?;

        Ok(SerialConsole {
            eventfd: eventfd.try_clone()?,
            serial: Serial::new(eventfd.try_clone()?, stdout()),
            pending: VecDeque::new(),
        })
    }

    pub fn eventfd(&self) -> Result<EventFd> {
        Ok(self.eventfd.try_clone()?.0)
    }

    /// Bytes read from stdin. Whatever the FIFO cannot take now is
    /// retried on the next tick.
    pub fn queue_input(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes);
        self.flush_pending();
    }

    /// Periodic tick: drain input the FIFO had no room for.
    pub fn tick(&mut self) {
        if !self.pending.is_empty() {
            self.flush_pending();
        }
    }

    /// One-shot sysrq injection for guest debugging.
    pub fn inject_sysrq(&mut self) {
        self.pending.extend(SYSRQ_BYTES);
        self.flush_pending();
    }

    fn flush_pending(&mut self) {
        while !self.pending.is_empty() {
            self.pending.make_contiguous();
            let (bytes, _) = self.pending.as_slices();
            match self.serial.enqueue_raw_bytes(bytes) {
                Ok(0) => break,
                Ok(accepted) => {
                    self.pending.drain(..accepted);
                }
                // FIFO full; the guest has to drain it first.
                Err(_) => break,
            }
        }
    }
}

impl BusDevice for SerialConsole {
    fn read(&mut self, _base: u64, offset: u64, data: &mut [u8]) {
        data[0] = self.serial.read(offset as u8);
    }

    fn write(&mut self, _base: u64, offset: u64, data: &[u8]) {
        if let Err(e) = self.serial.write(offset as u8, data[0]) {
            warn!("serial register write failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Register offsets used by the tests.
    const DATA: u64 = 0;
    const IER: u64 = 1;
    const LSR: u64 = 5;

    const LSR_DATA_READY: u8 = 0x01;

    fn read_reg(serial: &mut SerialConsole, offset: u64) -> u8 {
        let mut data = [0u8];
        serial.read(0, offset, &mut data);
        data[0]
    }

    #[test]
    fn test_input_shows_up_in_fifo() {
        let mut serial = SerialConsole::new().unwrap();
        // Enable receive interrupts so enqueue triggers the eventfd.
        serial.write(0, IER, &[0x01]);

        serial.queue_input(b"x");
        assert_ne!(read_reg(&mut serial, LSR) & LSR_DATA_READY, 0);
        assert_eq!(read_reg(&mut serial, DATA), b'x');
        assert_eq!(read_reg(&mut serial, LSR) & LSR_DATA_READY, 0);
    }

    #[test]
    fn test_overflow_is_parked_and_ticked_in() {
        let mut serial = SerialConsole::new().unwrap();

        // More than the 16-byte FIFO takes in one go.
        let input: Vec<u8> = (b'a'..=b'z').collect();
        serial.queue_input(&input);
        assert!(!serial.pending.is_empty());

        // Drain what the FIFO holds.
        let mut got = Vec::new();
        while read_reg(&mut serial, LSR) & LSR_DATA_READY != 0 {
            got.push(read_reg(&mut serial, DATA));
        }
        assert_eq!(&got[..], &input[..got.len()]);

        // Tick delivers the remainder.
        serial.tick();
        while read_reg(&mut serial, LSR) & LSR_DATA_READY != 0 {
            got.push(read_reg(&mut serial, DATA));
        }
        assert_eq!(got, input);
        assert!(serial.pending.is_empty());
    }

    #[test]
    fn test_sysrq_injection() {
        let mut serial = SerialConsole::new().unwrap();
        serial.inject_sysrq();
        assert_ne!(read_reg(&mut serial, LSR) & LSR_DATA_READY, 0);
        assert_eq!(read_reg(&mut serial, DATA), b'p');
    }
}
