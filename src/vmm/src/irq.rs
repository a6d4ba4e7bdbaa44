// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Interrupt injection into the in-kernel irqchip.

use std::sync::Arc;

use kvm_ioctls::VmFd;
use log::warn;

/// First GSI handed out to virtio devices. Lines below it belong to the
/// legacy devices (serial on 4, PIT on 0, ...).
const FIRST_VIRTIO_GSI: u32 = 5;

/// Something a device can drive as its interrupt line. The production
/// implementation is [`IrqLine`]; tests substitute a recorder.
pub trait IrqSignal: Send + Sync {
    fn set_level(&self, level: bool);
}

/// One input line of the virtual interrupt controller.
///
/// Level semantics: `raise(true)` asserts, `raise(false)` deasserts. The
/// in-kernel PIC/IOAPIC latches the level, so a device must deassert once
/// the guest has acknowledged it (virtio does this on ISR read).
#[derive(Clone)]
pub struct IrqLine {
    vm_fd: Arc<VmFd>,
    gsi: u32,
}

impl IrqLine {
    pub fn new(vm_fd: Arc<VmFd>, gsi: u32) -> Self {
        IrqLine { vm_fd, gsi }
    }

    pub fn gsi(&self) -> u32 {
        self.gsi
    }

    pub fn raise(&self, level: bool) {
        if let Err(e) = self.vm_fd.set_irq_line(self.gsi, level) {
            // Interrupt loss is survivable; the guest will usually poll
            // its way out. Do not take the device down for it.
            warn!("failed to set irq line {}: {}", self.gsi, e);
        }
    }
}

impl IrqSignal for IrqLine {
    fn set_level(&self, level: bool) {
        self.raise(level);
    }
}

/// Hands out GSIs to virtio devices, in registration order.
pub struct GsiAllocator {
    next: u32,
}

impl GsiAllocator {
    pub fn new() -> Self {
        GsiAllocator {
            next: FIRST_VIRTIO_GSI,
        }
    }

    pub fn allocate(&mut self) -> u32 {
        let gsi = self.next;
        self.next += 1;
        gsi
    }
}

impl Default for GsiAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsi_allocation_is_sequential() {
        let mut alloc = GsiAllocator::new();
        assert_eq!(alloc.allocate(), 5);
        assert_eq!(alloc.allocate(), 6);
        assert_eq!(alloc.allocate(), 7);
    }
}
