// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Virtio console: host-to-guest on queue 0, guest-to-host on queue 1.
//!
//! Input bytes arrive from the stdin poller and are parked until the
//! guest posts receive buffers; the periodic tick retries the flush so
//! input typed before the driver came up is not lost.

use std::collections::VecDeque;
use std::io::{self, Write};

use log::warn;

use super::queue::{gather, scatter};
use super::{Activation, Result, VirtioDevice, VIRTIO_ID_CONSOLE};

const QUEUE_SIZES: [u16; 2] = [128, 128];
const RX_QUEUE: usize = 0;
const TX_QUEUE: u16 = 1;

pub struct Console {
    pending_rx: VecDeque<u8>,
    active: Option<Activation>,
}

impl Console {
    pub fn new() -> Self {
        Console {
            pending_rx: VecDeque::new(),
            active: None,
        }
    }

    /// Bytes read from stdin. Parked until the guest offers buffers.
    pub fn queue_input(&mut self, bytes: &[u8]) {
        self.pending_rx.extend(bytes);
        self.flush_rx();
    }

    /// Periodic tick: retry delivering parked input.
    pub fn tick(&mut self) {
        if !self.pending_rx.is_empty() {
            self.flush_rx();
        }
    }

    fn flush_rx(&mut self) {
        let activation = match &self.active {
            Some(activation) => activation.clone(),
            None => return,
        };
        let mut signal = false;
        while !self.pending_rx.is_empty() {
            if activation.failed() {
                return;
            }
            let popped = activation.queues[RX_QUEUE]
                .lock()
                .unwrap()
                .pop(&activation.mem);
            let chain = match popped {
                Ok(Some(chain)) => chain,
                Ok(None) => break,
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            };
            self.pending_rx.make_contiguous();
            let (bytes, _) = self.pending_rx.as_slices();
            let written = match scatter(&activation.mem, &chain.input, bytes) {
                Ok(written) => written,
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            };
            self.pending_rx.drain(..written as usize);
            signal |= activation.retire(RX_QUEUE, chain.head, written);
        }
        if signal {
            activation.interrupt.signal_queue();
        }
    }

    fn process_tx(&mut self) {
        let activation = match &self.active {
            Some(activation) => activation.clone(),
            None => return,
        };
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut signal = false;
        loop {
            if activation.failed() {
                return;
            }
            let popped = activation.queues[usize::from(TX_QUEUE)]
                .lock()
                .unwrap()
                .pop(&activation.mem);
            let chain = match popped {
                Ok(Some(chain)) => chain,
                Ok(None) => break,
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            };
            match gather(&activation.mem, &chain.out) {
                Ok(bytes) => {
                    if let Err(e) = out.write_all(&bytes) {
                        warn!("console output failed: {}", e);
                    }
                }
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            }
            signal |= activation.retire(usize::from(TX_QUEUE), chain.head, 0);
        }
        let _ = out.flush();
        if signal {
            activation.interrupt.signal_queue();
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtioDevice for Console {
    fn device_type(&self) -> u32 {
        VIRTIO_ID_CONSOLE
    }

    fn queue_sizes(&self) -> &[u16] {
        &QUEUE_SIZES
    }

    fn device_features(&self) -> u32 {
        0
    }

    /// cols/rows; we do not negotiate VIRTIO_CONSOLE_F_SIZE, so zeros.
    fn read_config(&self, _offset: u64, data: &mut [u8]) {
        for b in data.iter_mut() {
            *b = 0;
        }
    }

    fn activate(&mut self, activation: Activation) -> Result<()> {
        self.active = Some(activation);
        // Input typed during boot is delivered as soon as buffers show up.
        self.flush_rx();
        Ok(())
    }

    fn queue_notify(&mut self, queue: u16) {
        match queue {
            0 => self.flush_rx(),
            TX_QUEUE => self.process_tx(),
            other => warn!("console doorbell on unknown queue {}", other),
        }
    }

    fn reset(&mut self) {
        self.active = None;
        self.pending_rx.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::queue::testing::{ready_queue_at, test_mem, TestRing};
    use super::super::queue::VIRTQ_DESC_F_WRITE;
    use super::super::test_utils::TestIrq;
    use super::super::VirtioInterrupt;
    use super::*;
    use std::sync::atomic::AtomicU8;
    use std::sync::{Arc, Mutex};
    use vm_memory::{Bytes, GuestAddress};

    const RX_PFN: u32 = 0x100;
    const TX_PFN: u32 = 0x110;

    fn console_with_rings(mem: &vm_memory::GuestMemoryMmap) -> (Console, Activation) {
        let activation = Activation {
            mem: Arc::new(mem.clone()),
            interrupt: Arc::new(VirtioInterrupt::new(TestIrq::new())),
            status: Arc::new(AtomicU8::new(0)),
            queues: vec![
                Arc::new(Mutex::new(ready_queue_at(mem, 8, RX_PFN))),
                Arc::new(Mutex::new(ready_queue_at(mem, 8, TX_PFN))),
            ],
        };
        let mut console = Console::new();
        console.activate(activation.clone()).unwrap();
        (console, activation)
    }

    #[test]
    fn test_input_waits_for_buffers_then_flushes() {
        let mem = test_mem();
        let mut rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let _tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (mut console, _activation) = console_with_rings(&mem);

        // No buffers yet: input parks.
        console.queue_input(b"hi");
        assert_eq!(rx.used_idx(), 0);

        rx.write_desc(0, 0x3000, 64, VIRTQ_DESC_F_WRITE, 0);
        rx.push(0);
        console.tick();

        assert_eq!(rx.used_idx(), 1);
        assert_eq!(rx.used_elem(0), (0, 2));
        let mut data = [0u8; 2];
        mem.read_slice(&mut data, GuestAddress(0x3000)).unwrap();
        assert_eq!(&data, b"hi");
        // Nothing left pending: tick does not retire more buffers.
        console.tick();
        assert_eq!(rx.used_idx(), 1);
    }

    #[test]
    fn test_input_larger_than_buffer_spans_chains() {
        let mem = test_mem();
        let mut rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let _tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (mut console, _activation) = console_with_rings(&mem);

        rx.write_desc(0, 0x3000, 4, VIRTQ_DESC_F_WRITE, 0);
        rx.push(0);
        rx.write_desc(1, 0x4000, 4, VIRTQ_DESC_F_WRITE, 0);
        rx.push(1);

        console.queue_input(b"abcdefg");
        assert_eq!(rx.used_idx(), 2);
        assert_eq!(rx.used_elem(0), (0, 4));
        assert_eq!(rx.used_elem(1), (1, 3));
        let mut first = [0u8; 4];
        mem.read_slice(&mut first, GuestAddress(0x3000)).unwrap();
        assert_eq!(&first, b"abcd");
        let mut second = [0u8; 3];
        mem.read_slice(&mut second, GuestAddress(0x4000)).unwrap();
        assert_eq!(&second, b"efg");
    }

    #[test]
    fn test_tx_retires_chains() {
        let mem = test_mem();
        let _rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let mut tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (mut console, _activation) = console_with_rings(&mem);

        mem.write_slice(b"out", GuestAddress(0x3000)).unwrap();
        tx.write_desc(0, 0x3000, 3, 0, 0);
        tx.push(0);
        console.queue_notify(1);
        assert_eq!(tx.used_idx(), 1);
        assert_eq!(tx.used_elem(0), (0, 0));
    }

    #[test]
    fn test_reset_drops_parked_input() {
        let mem = test_mem();
        let _rx = TestRing::at_pfn(&mem, 8, RX_PFN);
        let _tx = TestRing::at_pfn(&mem, 8, TX_PFN);
        let (mut console, _activation) = console_with_rings(&mem);

        console.queue_input(b"stale");
        console.reset();
        assert!(console.pending_rx.is_empty());
        assert!(console.active.is_none());
    }
}
