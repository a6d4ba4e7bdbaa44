// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Virtio entropy device: writable descriptors are filled from the
//! host's non-blocking entropy source.

use std::fs::File;
use std::io::Read;
use std::sync::Arc;

use super::queue::scatter;
use super::{Activation, Result, VirtioDevice, VIRTIO_ID_RNG};
use crate::worker::WorkerPool;

const QUEUE_SIZE: u16 = 64;
const ENTROPY_SOURCE: &str = "/dev/urandom";

pub struct Rng {
    source: Arc<File>,
    pool: Arc<WorkerPool>,
    active: Option<Activation>,
}

impl Rng {
    pub fn new(pool: Arc<WorkerPool>) -> std::io::Result<Self> {
        Ok(Rng {
            source: Arc::new(File::open(ENTROPY_SOURCE)?),
            pool,
            active: None,
        })
    }

    fn process_queue(activation: &Activation, source: &File) {
        let mut signal = false;
        loop {
            if activation.failed() {
                return;
            }
            let popped = activation.queues[0].lock().unwrap().pop(&activation.mem);
            let chain = match popped {
                Ok(Some(chain)) => chain,
                Ok(None) => break,
                Err(e) => {
                    activation.fail(&e);
                    return;
                }
            };
            let mut entropy = vec![0u8; chain.in_len() as usize];
            // urandom never blocks and never runs short.
            let written = match (&*source).read_exact(&mut entropy) {
                Ok(()) => match scatter(&activation.mem, &chain.input, &entropy) {
                    Ok(written) => written,
                    Err(e) => {
                        activation.fail(&e);
                        return;
                    }
                },
                Err(_) => 0,
            };
            signal |= activation.retire(0, chain.head, written);
        }
        if signal {
            activation.interrupt.signal_queue();
        }
    }
}

impl VirtioDevice for Rng {
    fn device_type(&self) -> u32 {
        VIRTIO_ID_RNG
    }

    fn queue_sizes(&self) -> &[u16] {
        &[QUEUE_SIZE]
    }

    fn device_features(&self) -> u32 {
        0
    }

    fn read_config(&self, _offset: u64, data: &mut [u8]) {
        for b in data.iter_mut() {
            *b = 0;
        }
    }

    fn activate(&mut self, activation: Activation) -> Result<()> {
        self.active = Some(activation);
        Ok(())
    }

    fn queue_notify(&mut self, queue: u16) {
        if queue != 0 {
            return;
        }
        if let Some(activation) = &self.active {
            let activation = activation.clone();
            let source = Arc::clone(&self.source);
            self.pool.spawn(move || {
                Rng::process_queue(&activation, &source);
            });
        }
    }

    fn reset(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::queue::testing::{ready_queue, test_mem, TestRing};
    use super::super::queue::VIRTQ_DESC_F_WRITE;
    use super::super::test_utils::TestIrq;
    use super::super::VirtioInterrupt;
    use super::*;
    use std::sync::atomic::AtomicU8;
    use std::sync::Mutex;
    use vm_memory::{Bytes, GuestAddress};

    #[test]
    fn test_fills_writable_descriptors() {
        let mem = test_mem();
        let mut ring = TestRing::new(&mem, 8);
        let activation = Activation {
            mem: Arc::new(mem.clone()),
            interrupt: Arc::new(VirtioInterrupt::new(TestIrq::new())),
            status: Arc::new(AtomicU8::new(0)),
            queues: vec![Arc::new(Mutex::new(ready_queue(&mem, 8)))],
        };

        // Zero the target so "filled" is observable with overwhelming
        // probability for a 64-byte read.
        mem.write_slice(&[0u8; 64], GuestAddress(0x3000)).unwrap();
        ring.write_desc(0, 0x3000, 64, VIRTQ_DESC_F_WRITE, 0);
        ring.push(0);

        let source = File::open(ENTROPY_SOURCE).unwrap();
        Rng::process_queue(&activation, &source);

        assert_eq!(ring.used_idx(), 1);
        assert_eq!(ring.used_elem(0), (0, 64));
        let mut data = [0u8; 64];
        mem.read_slice(&mut data, GuestAddress(0x3000)).unwrap();
        assert!(data.iter().any(|&b| b != 0));
    }
}
