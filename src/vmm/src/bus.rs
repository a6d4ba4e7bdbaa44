// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Port-I/O and MMIO dispatch.
//!
//! A [`Bus`] holds a sorted, non-overlapping set of address ranges, each
//! backed by a device. Routes are registered while the machine is being
//! assembled and frozen before the first vCPU runs; dispatch then only
//! reads the table, so vCPU threads share it without locking. Devices
//! serialize themselves with their own mutex.
//!
//! The same structure serves both address spaces: port numbers are
//! widened to u64 for the PIO instance.

use std::sync::{Arc, Mutex};

use log::debug;

/// A device reachable through bus dispatch.
///
/// `base` is the first address of the matched route and `offset` the
/// distance from it, so devices never see absolute addresses.
pub trait BusDevice: Send {
    fn read(&mut self, base: u64, offset: u64, data: &mut [u8]);
    fn write(&mut self, base: u64, offset: u64, data: &[u8]);
}

#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("range {0:#x}+{1:#x} overlaps an existing route")]
    Overlap(u64, u64),

    #[error("zero-length bus range at {0:#x}")]
    ZeroLength(u64),
}

struct Route {
    base: u64,
    len: u64,
    device: Arc<Mutex<dyn BusDevice>>,
}

/// An address-range keyed dispatch table.
#[derive(Default)]
pub struct Bus {
    routes: Vec<Route>,
}

impl Bus {
    pub fn new() -> Self {
        Bus { routes: Vec::new() }
    }

    /// Register `device` at `[base, base + len)`. Ranges must not overlap.
    pub fn register(
        &mut self,
        base: u64,
        len: u64,
        device: Arc<Mutex<dyn BusDevice>>,
    ) -> Result<(), BusError> {
        if len == 0 {
            return Err(BusError::ZeroLength(base));
        }
        let idx = self.routes.partition_point(|r| r.base < base);
        if let Some(prev) = idx.checked_sub(1).and_then(|i| self.routes.get(i)) {
            if prev.base + prev.len > base {
                return Err(BusError::Overlap(base, len));
            }
        }
        if let Some(next) = self.routes.get(idx) {
            if base + len > next.base {
                return Err(BusError::Overlap(base, len));
            }
        }
        self.routes.insert(idx, Route { base, len, device });
        Ok(())
    }

    fn find(&self, addr: u64) -> Option<&Route> {
        let idx = self.routes.partition_point(|r| r.base <= addr);
        let route = self.routes.get(idx.checked_sub(1)?)?;
        if addr - route.base < route.len {
            Some(route)
        } else {
            None
        }
    }

    /// Dispatch a read. Unknown addresses read as all-ones.
    pub fn read(&self, addr: u64, data: &mut [u8]) -> bool {
        match self.find(addr) {
            Some(route) => {
                route
                    .device
                    .lock()
                    .unwrap()
                    .read(route.base, addr - route.base, data);
                true
            }
            None => {
                debug!("unhandled read at {:#x} ({} bytes)", addr, data.len());
                for b in data.iter_mut() {
                    *b = 0xff;
                }
                false
            }
        }
    }

    /// Dispatch a write. Unknown addresses swallow the data.
    pub fn write(&self, addr: u64, data: &[u8]) -> bool {
        match self.find(addr) {
            Some(route) => {
                route
                    .device
                    .lock()
                    .unwrap()
                    .write(route.base, addr - route.base, data);
                true
            }
            None => {
                debug!("unhandled write at {:#x} ({} bytes)", addr, data.len());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        reads: Vec<(u64, u64)>,
        writes: Vec<(u64, u64, Vec<u8>)>,
    }

    impl Recorder {
        fn new() -> Arc<Mutex<Self>> {
            Arc::new(Mutex::new(Recorder {
                reads: Vec::new(),
                writes: Vec::new(),
            }))
        }
    }

    impl BusDevice for Recorder {
        fn read(&mut self, base: u64, offset: u64, data: &mut [u8]) {
            self.reads.push((base, offset));
            for b in data.iter_mut() {
                *b = 0xab;
            }
        }

        fn write(&mut self, base: u64, offset: u64, data: &[u8]) {
            self.writes.push((base, offset, data.to_vec()));
        }
    }

    #[test]
    fn test_dispatch_hits_covering_range() {
        let mut bus = Bus::new();
        let dev = Recorder::new();
        bus.register(0x3f8, 8, dev.clone()).unwrap();

        let mut data = [0u8; 1];
        assert!(bus.read(0x3fd, &mut data));
        assert_eq!(data[0], 0xab);
        assert!(bus.write(0x3f8, &[0x42]));

        let dev = dev.lock().unwrap();
        assert_eq!(dev.reads, vec![(0x3f8, 5)]);
        assert_eq!(dev.writes, vec![(0x3f8, 0, vec![0x42])]);
    }

    #[test]
    fn test_unknown_addresses_read_all_ones() {
        let bus = Bus::new();
        let mut data = [0u8; 4];
        assert!(!bus.read(0x80, &mut data));
        assert_eq!(data, [0xff; 4]);
        assert!(!bus.write(0x80, &[0]));
    }

    #[test]
    fn test_overlap_rejected() {
        let mut bus = Bus::new();
        bus.register(0x100, 0x10, Recorder::new()).unwrap();
        assert!(bus.register(0x10f, 0x10, Recorder::new()).is_err());
        assert!(bus.register(0xf8, 0x10, Recorder::new()).is_err());
        assert!(bus.register(0x100, 0x10, Recorder::new()).is_err());
        // Adjacent ranges are fine.
        bus.register(0x110, 0x10, Recorder::new()).unwrap();
        bus.register(0xf0, 0x10, Recorder::new()).unwrap();
    }

    #[test]
    fn test_first_and_last_byte_of_range() {
        let mut bus = Bus::new();
        let dev = Recorder::new();
        bus.register(0x200, 4, dev.clone()).unwrap();

        let mut data = [0u8; 1];
        assert!(bus.read(0x200, &mut data));
        assert!(bus.read(0x203, &mut data));
        assert!(!bus.read(0x204, &mut data));
        assert_eq!(dev.lock().unwrap().reads, vec![(0x200, 0), (0x200, 3)]);
    }
}
