// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Virtio device core shared by every paravirtual back-end: the device
//! trait, feature negotiation, interrupt status byte and the state each
//! back-end holds once the guest driver is up.

pub mod block;
pub mod console;
pub mod net;
pub mod pci;
pub mod queue;
pub mod rng;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use log::{error, warn};
use vm_memory::GuestMemoryMmap;

use crate::irq::IrqSignal;
pub use queue::{DescriptorChain, Iovec, QueueError, VirtQueue};

/// Device types, as published in the PCI subsystem ID.
pub const VIRTIO_ID_NET: u32 = 1;
pub const VIRTIO_ID_BLOCK: u32 = 2;
pub const VIRTIO_ID_CONSOLE: u32 = 3;
pub const VIRTIO_ID_RNG: u32 = 4;

/// Device status bits, written by the guest driver.
pub const STATUS_ACKNOWLEDGE: u8 = 0x01;
pub const STATUS_DRIVER: u8 = 0x02;
pub const STATUS_DRIVER_OK: u8 = 0x04;
pub const STATUS_FEATURES_OK: u8 = 0x08;
pub const STATUS_FAILED: u8 = 0x80;

/// ISR status byte: which event caused the interrupt. Cleared on read.
pub const ISR_QUEUE: u8 = 0x01;
pub const ISR_CONFIG: u8 = 0x02;

#[derive(Debug, thiserror::Error)]
pub enum VirtioError {
    #[error("virtqueue error: {0}")]
    Queue(#[from] QueueError),

    #[error("device backend i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VirtioError>;

/// Interrupt plumbing for one device: the ISR byte plus its PCI INTx
/// line. The ISR is OR-ed before the line is asserted; the guest's ISR
/// read returns-and-clears it, which also deasserts the line.
pub struct VirtioInterrupt {
    isr: AtomicU8,
    line: Arc<dyn IrqSignal>,
}

impl VirtioInterrupt {
    pub fn new(line: Arc<dyn IrqSignal>) -> Self {
        VirtioInterrupt {
            isr: AtomicU8::new(0),
            line,
        }
    }

    pub fn signal_queue(&self) {
        self.isr.fetch_or(ISR_QUEUE, Ordering::AcqRel);
        self.line.set_level(true);
    }

    pub fn signal_config(&self) {
        self.isr.fetch_or(ISR_CONFIG, Ordering::AcqRel);
        self.line.set_level(true);
    }

    /// Guest read of the ISR register.
    pub fn ack(&self) -> u8 {
        let isr = self.isr.swap(0, Ordering::AcqRel);
        if isr != 0 {
            self.line.set_level(false);
        }
        isr
    }
}

/// Mask guest feature bits against what the device offers, warning about
/// anything the driver acknowledged that we never advertised.
pub fn negotiate_features(device_features: u32, guest_features: u32) -> u32 {
    let unsupported = guest_features & !device_features;
    if unsupported != 0 {
        warn!(
            "guest acknowledged unknown features {:#x}, masking them off",
            unsupported
        );
    }
    guest_features & device_features
}

/// Everything a back-end needs once the driver wrote DRIVER_OK: guest
/// memory, the interrupt plumbing, the shared status byte (for the
/// FAILED latch) and its queues.
#[derive(Clone)]
pub struct Activation {
    pub mem: Arc<GuestMemoryMmap>,
    pub interrupt: Arc<VirtioInterrupt>,
    pub status: Arc<AtomicU8>,
    pub queues: Vec<Arc<Mutex<VirtQueue>>>,
}

impl Activation {
    /// Retire `head` on `queue` and report whether the guest wants an
    /// interrupt for it. The caller signals after its batch so several
    /// completions can share one interrupt.
    pub fn retire(&self, queue: usize, head: u16, len: u32) -> bool {
        let mut q = self.queues[queue].lock().unwrap();
        if let Err(e) = q.add_used(&self.mem, head, len) {
            drop(q);
            self.fail(&e);
            return false;
        }
        q.should_signal(&self.mem)
    }

    /// Latch the FAILED status bit. The guest observes a dead device;
    /// its siblings keep running.
    pub fn fail(&self, err: &QueueError) {
        error!("virtio device failed: {}", err);
        self.status.fetch_or(STATUS_FAILED, Ordering::SeqCst);
    }

    pub fn failed(&self) -> bool {
        self.status.load(Ordering::SeqCst) & STATUS_FAILED != 0
    }
}

/// A paravirtual device back-end behind the legacy PCI transport.
///
/// `activate` runs on the vCPU thread that wrote DRIVER_OK and is where
/// back-end threads are started or queues attached to the worker pool.
/// `queue_notify` runs on the vCPU thread that struck the doorbell and
/// must not block on host I/O.
pub trait VirtioDevice: Send {
    fn device_type(&self) -> u32;

    /// Fixed ring size for each queue, in queue-index order.
    fn queue_sizes(&self) -> &[u16];

    fn device_features(&self) -> u32;

    fn read_config(&self, offset: u64, data: &mut [u8]);

    fn write_config(&mut self, _offset: u64, _data: &[u8]) {}

    fn activate(&mut self, activation: Activation) -> Result<()>;

    fn queue_notify(&mut self, queue: u16);

    /// Status write of 0: drop back-end state. Queues are torn down by
    /// the transport.
    fn reset(&mut self) {}
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::AtomicUsize;
    use vm_memory::GuestAddress;

    /// Records line transitions instead of calling into KVM.
    pub struct TestIrq {
        pub level: AtomicBool,
        pub asserts: AtomicUsize,
    }

    impl TestIrq {
        pub fn new() -> Arc<Self> {
            Arc::new(TestIrq {
                level: AtomicBool::new(false),
                asserts: AtomicUsize::new(0),
            })
        }
    }

    impl crate::irq::IrqSignal for TestIrq {
        fn set_level(&self, level: bool) {
            if level {
                self.asserts.fetch_add(1, Ordering::SeqCst);
            }
            self.level.store(level, Ordering::SeqCst);
        }
    }

    pub fn test_mem() -> Arc<GuestMemoryMmap> {
        Arc::new(GuestMemoryMmap::from_ranges(&[(GuestAddress(0), 2 << 20)]).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::TestIrq;
    use super::*;

    #[test]
    fn test_negotiate_masks_unknown_bits() {
        assert_eq!(negotiate_features(0b0111, 0b0101), 0b0101);
        assert_eq!(negotiate_features(0b0011, 0b1101), 0b0001);
        assert_eq!(negotiate_features(0, 0xffff_ffff), 0);
    }

    #[test]
    fn test_isr_read_clears_and_deasserts() {
        let irq = TestIrq::new();
        let intr = VirtioInterrupt::new(irq.clone());

        intr.signal_queue();
        intr.signal_config();
        assert!(irq.level.load(Ordering::SeqCst));
        assert_eq!(intr.ack(), ISR_QUEUE | ISR_CONFIG);
        assert!(!irq.level.load(Ordering::SeqCst));
        // Second read observes nothing and leaves the line alone.
        assert_eq!(intr.ack(), 0);
    }
}
