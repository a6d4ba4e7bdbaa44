// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Legacy virtio-over-PCI transport: the 20-byte common register window
//! at the start of BAR0, followed by device-specific configuration.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use vm_memory::GuestMemoryMmap;

use super::{
    negotiate_features, Activation, VirtQueue, VirtioDevice, VirtioInterrupt, STATUS_DRIVER_OK,
    STATUS_FAILED,
};
use crate::bus::BusDevice;

// Legacy register layout, offsets into BAR0.
const HOST_FEATURES: u64 = 0x00;
const GUEST_FEATURES: u64 = 0x04;
const QUEUE_PFN: u64 = 0x08;
const QUEUE_NUM: u64 = 0x0c;
const QUEUE_SEL: u64 = 0x0e;
const QUEUE_NOTIFY: u64 = 0x10;
const DEVICE_STATUS: u64 = 0x12;
const ISR_STATUS: u64 = 0x13;
/// Device-specific configuration starts here.
pub const CONFIG_OFFSET: u64 = 0x14;

/// Port-I/O window of one virtio device. Owns the transport-level state
/// (status, feature words, queue registers); the back-end behind it only
/// sees activations and doorbells.
pub struct VirtioPciDevice {
    device: Arc<Mutex<dyn VirtioDevice>>,
    mem: Arc<GuestMemoryMmap>,
    interrupt: Arc<VirtioInterrupt>,
    status: Arc<AtomicU8>,
    queues: Vec<Arc<Mutex<VirtQueue>>>,
    device_features: u32,
    guest_features: u32,
    queue_sel: u16,
    activated: bool,
}

impl VirtioPciDevice {
    pub fn new(
        device: Arc<Mutex<dyn VirtioDevice>>,
        mem: Arc<GuestMemoryMmap>,
        interrupt: Arc<VirtioInterrupt>,
    ) -> Self {
        let (device_features, queues) = {
            let dev = device.lock().unwrap();
            let queues = dev
                .queue_sizes()
                .iter()
                .map(|&size| Arc::new(Mutex::new(VirtQueue::new(size))))
                .collect();
            (dev.device_features(), queues)
        };

        VirtioPciDevice {
            device,
            mem,
            interrupt,
            status: Arc::new(AtomicU8::new(0)),
            queues,
            device_features,
            guest_features: 0,
            queue_sel: 0,
            activated: false,
        }
    }

    fn selected_queue(&self) -> Option<&Arc<Mutex<VirtQueue>>> {
        self.queues.get(usize::from(self.queue_sel))
    }

    fn set_status(&mut self, status: u8) {
        if status == 0 {
            self.reset();
            return;
        }
        self.status.store(status, Ordering::SeqCst);
        if status & STATUS_DRIVER_OK != 0 && !self.activated {
            self.activate();
        }
    }

    fn activate(&mut self) {
        let activation = Activation {
            mem: Arc::clone(&self.mem),
            interrupt: Arc::clone(&self.interrupt),
            status: Arc::clone(&self.status),
            queues: self.queues.clone(),
        };
        match self.device.lock().unwrap().activate(activation) {
            Ok(()) => self.activated = true,
            Err(e) => {
                warn!("virtio device activation failed: {}", e);
                self.status.fetch_or(STATUS_FAILED, Ordering::SeqCst);
            }
        }
    }

    /// Guest wrote 0 to the status register: return to pristine state.
    fn reset(&mut self) {
        self.device.lock().unwrap().reset();
        for queue in &self.queues {
            queue.lock().unwrap().reset();
        }
        self.interrupt.ack();
        self.guest_features = 0;
        self.queue_sel = 0;
        self.activated = false;
        self.status.store(0, Ordering::SeqCst);
    }

    fn failed(&self) -> bool {
        self.status.load(Ordering::SeqCst) & STATUS_FAILED != 0
    }
}

fn read_le16(data: &[u8]) -> u16 {
    match data {
        [a, b, ..] => u16::from_le_bytes([*a, *b]),
        [a] => u16::from(*a),
        _ => 0,
    }
}

fn read_le32(data: &[u8]) -> u32 {
    let mut bytes = [0u8; 4];
    for (i, b) in data.iter().take(4).enumerate() {
        bytes[i] = *b;
    }
    u32::from_le_bytes(bytes)
}

fn put_le16(data: &mut [u8], value: u16) {
    for (i, b) in value.to_le_bytes().iter().enumerate() {
        if let Some(slot) = data.get_mut(i) {
            *slot = *b;
        }
    }
}

fn put_le32(data: &mut [u8], value: u32) {
    for (i, b) in value.to_le_bytes().iter().enumerate() {
        if let Some(slot) = data.get_mut(i) {
            *slot = *b;
        }
    }
}

impl BusDevice for VirtioPciDevice {
    fn read(&mut self, _base: u64, offset: u64, data: &mut [u8]) {
        match offset {
            HOST_FEATURES => put_le32(data, self.device_features),
            QUEUE_PFN => {
                let pfn = self
                    .selected_queue()
                    .map(|q| q.lock().unwrap().pfn())
                    .unwrap_or(0);
                put_le32(data, pfn);
            }
            QUEUE_NUM => {
                let size = self
                    .selected_queue()
                    .map(|q| q.lock().unwrap().size())
                    .unwrap_or(0);
                put_le16(data, size);
            }
            QUEUE_SEL => put_le16(data, self.queue_sel),
            DEVICE_STATUS => data[0] = self.status.load(Ordering::SeqCst),
            ISR_STATUS => data[0] = self.interrupt.ack(),
            o if o >= CONFIG_OFFSET => {
                self.device.lock().unwrap().read_config(o - CONFIG_OFFSET, data);
            }
            _ => {
                debug!("unhandled virtio register read at {:#x}", offset);
                for b in data.iter_mut() {
                    *b = 0;
                }
            }
        }
    }

    fn write(&mut self, _base: u64, offset: u64, data: &[u8]) {
        match offset {
            GUEST_FEATURES => {
                self.guest_features = negotiate_features(self.device_features, read_le32(data));
            }
            QUEUE_PFN => {
                let pfn = read_le32(data);
                if let Some(queue) = self.selected_queue() {
                    let result = queue.lock().unwrap().set_pfn(&self.mem, pfn);
                    if let Err(e) = result {
                        warn!("rejecting queue {} ring: {}", self.queue_sel, e);
                        self.status.fetch_or(STATUS_FAILED, Ordering::SeqCst);
                    }
                }
            }
            QUEUE_SEL => self.queue_sel = read_le16(data),
            QUEUE_NOTIFY => {
                let index = read_le16(data);
                if self.failed() {
                    return;
                }
                if let Some(queue) = self.queues.get(usize::from(index)) {
                    queue.lock().unwrap().notify_count += 1;
                }
                if self.activated {
                    self.device.lock().unwrap().queue_notify(index);
                } else {
                    debug!("doorbell on queue {} before DRIVER_OK", index);
                }
            }
            DEVICE_STATUS => self.set_status(data[0]),
            o if o >= CONFIG_OFFSET => {
                self.device
                    .lock()
                    .unwrap()
                    .write_config(o - CONFIG_OFFSET, data);
            }
            _ => debug!("unhandled virtio register write at {:#x}", offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{test_mem, TestIrq};
    use super::super::{Result, VIRTIO_ID_RNG};
    use super::*;

    struct FakeDevice {
        activations: usize,
        resets: usize,
        notifies: Vec<u16>,
        config: [u8; 4],
    }

    impl FakeDevice {
        fn new() -> Arc<Mutex<Self>> {
            Arc::new(Mutex::new(FakeDevice {
                activations: 0,
                resets: 0,
                notifies: Vec::new(),
                config: *b"cfg!",
            }))
        }
    }

    impl VirtioDevice for FakeDevice {
        fn device_type(&self) -> u32 {
            VIRTIO_ID_RNG
        }

        fn queue_sizes(&self) -> &[u16] {
            &[64, 128]
        }

        fn device_features(&self) -> u32 {
            0b1010
        }

        fn read_config(&self, offset: u64, data: &mut [u8]) {
            for (i, b) in data.iter_mut().enumerate() {
                *b = *self.config.get(offset as usize + i).unwrap_or(&0);
            }
        }

        fn activate(&mut self, _activation: Activation) -> Result<()> {
            self.activations += 1;
            Ok(())
        }

        fn queue_notify(&mut self, queue: u16) {
            self.notifies.push(queue);
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    fn transport(device: &Arc<Mutex<FakeDevice>>) -> VirtioPciDevice {
        let interrupt = Arc::new(VirtioInterrupt::new(TestIrq::new()));
        VirtioPciDevice::new(device.clone(), test_mem(), interrupt)
    }

    fn read_reg32(t: &mut VirtioPciDevice, offset: u64) -> u32 {
        let mut data = [0u8; 4];
        t.read(0, offset, &mut data);
        u32::from_le_bytes(data)
    }

    fn read_reg16(t: &mut VirtioPciDevice, offset: u64) -> u16 {
        let mut data = [0u8; 2];
        t.read(0, offset, &mut data);
        u16::from_le_bytes(data)
    }

    #[test]
    fn test_feature_negotiation() {
        let dev = FakeDevice::new();
        let mut t = transport(&dev);
        assert_eq!(read_reg32(&mut t, HOST_FEATURES), 0b1010);
        t.write(0, GUEST_FEATURES, &0b1111u32.to_le_bytes());
        assert_eq!(t.guest_features, 0b1010);
    }

    #[test]
    fn test_queue_selection_and_sizes() {
        let dev = FakeDevice::new();
        let mut t = transport(&dev);
        assert_eq!(read_reg16(&mut t, QUEUE_NUM), 64);
        t.write(0, QUEUE_SEL, &1u16.to_le_bytes());
        assert_eq!(read_reg16(&mut t, QUEUE_NUM), 128);
        // Out-of-range selection reads back size 0.
        t.write(0, QUEUE_SEL, &7u16.to_le_bytes());
        assert_eq!(read_reg16(&mut t, QUEUE_NUM), 0);
    }

    #[test]
    fn test_driver_ok_activates_once() {
        let dev = FakeDevice::new();
        let mut t = transport(&dev);
        t.write(0, QUEUE_PFN, &0x100u32.to_le_bytes());
        t.write(0, DEVICE_STATUS, &[0x01]);
        t.write(0, DEVICE_STATUS, &[0x03]);
        t.write(0, DEVICE_STATUS, &[0x0b]);
        assert_eq!(dev.lock().unwrap().activations, 0);
        t.write(0, DEVICE_STATUS, &[0x0f]);
        t.write(0, DEVICE_STATUS, &[0x0f]);
        assert_eq!(dev.lock().unwrap().activations, 1);

        t.write(0, QUEUE_NOTIFY, &0u16.to_le_bytes());
        assert_eq!(dev.lock().unwrap().notifies, vec![0]);
    }

    #[test]
    fn test_reset_returns_to_first_boot_state() {
        let dev = FakeDevice::new();
        let mut t = transport(&dev);

        t.write(0, GUEST_FEATURES, &0b1010u32.to_le_bytes());
        t.write(0, QUEUE_PFN, &0x100u32.to_le_bytes());
        t.write(0, QUEUE_SEL, &1u16.to_le_bytes());
        t.write(0, DEVICE_STATUS, &[0x0f]);
        assert_eq!(dev.lock().unwrap().activations, 1);

        t.write(0, DEVICE_STATUS, &[0]);
        assert_eq!(dev.lock().unwrap().resets, 1);
        let mut status = [0u8; 1];
        t.read(0, DEVICE_STATUS, &mut status);
        assert_eq!(status[0], 0);
        assert_eq!(t.guest_features, 0);
        assert_eq!(t.queue_sel, 0);
        assert_eq!(read_reg32(&mut t, QUEUE_PFN), 0);

        // Full re-initialization activates again, same as first boot.
        t.write(0, QUEUE_PFN, &0x100u32.to_le_bytes());
        t.write(0, DEVICE_STATUS, &[0x0f]);
        assert_eq!(dev.lock().unwrap().activations, 2);
    }

    #[test]
    fn test_bad_pfn_fails_device_and_gates_doorbells() {
        let dev = FakeDevice::new();
        let mut t = transport(&dev);
        t.write(0, DEVICE_STATUS, &[0x0f]);
        // 2 MiB of test RAM: a ring at its last page cannot fit.
        t.write(0, QUEUE_PFN, &0x1ffu32.to_le_bytes());
        let mut status = [0u8; 1];
        t.read(0, DEVICE_STATUS, &mut status);
        assert_eq!(status[0] & STATUS_FAILED, STATUS_FAILED);

        t.write(0, QUEUE_NOTIFY, &0u16.to_le_bytes());
        assert!(dev.lock().unwrap().notifies.is_empty());
    }

    #[test]
    fn test_device_config_window() {
        let dev = FakeDevice::new();
        let mut t = transport(&dev);
        let mut data = [0u8; 2];
        t.read(0, CONFIG_OFFSET + 1, &mut data);
        assert_eq!(&data, b"fg");
    }
}
