// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Virtio block back-end over a raw disk image.
//!
//! Each request chain carries a 16-byte header in its out portion, data
//! buffers, and a final device-writable status byte. Requests are
//! serviced on the worker pool; the doorbell handler never touches the
//! image itself.

use std::sync::{Arc, Mutex};

use log::warn;
use vm_memory::{Address, ByteValued, Bytes, GuestAddress};

use super::queue::{gather, scatter, DescriptorChain, Iovec};
use super::{Activation, Result, VirtioDevice, VIRTIO_ID_BLOCK};
use crate::devices::disk::{DiskImage, SECTOR_SIZE};
use crate::worker::WorkerPool;

const QUEUE_SIZE: u16 = 256;

// Request types, per the legacy virtio spec.
pub const VIRTIO_BLK_T_IN: u32 = 0;
pub const VIRTIO_BLK_T_OUT: u32 = 1;
pub const VIRTIO_BLK_T_FLUSH: u32 = 4;
pub const VIRTIO_BLK_T_GET_ID: u32 = 8;

// Completion status, written to the final byte of the chain.
pub const VIRTIO_BLK_S_OK: u8 = 0;
pub const VIRTIO_BLK_S_IOERR: u8 = 1;
pub const VIRTIO_BLK_S_UNSUPP: u8 = 2;

/// Device is read-only.
const VIRTIO_BLK_F_RO: u32 = 5;
/// Flush command supported.
const VIRTIO_BLK_F_FLUSH: u32 = 9;

const DISK_ID_BYTES: usize = 20;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
struct RequestHeader {
    request_type: u32,
    reserved: u32,
    sector: u64,
}

// Safe: plain little-endian words, no padding.
unsafe impl ByteValued for RequestHeader {}

pub struct Block {
    disk: Arc<DiskImage>,
    pool: Arc<WorkerPool>,
    serial: [u8; DISK_ID_BYTES],
    active: Option<Activation>,
}

impl Block {
    pub fn new(disk: DiskImage, pool: Arc<WorkerPool>, index: usize) -> Self {
        let mut serial = [0u8; DISK_ID_BYTES];
        let id = format!("kestrel-vd{}", (b'a' + index as u8) as char);
        serial[..id.len()].copy_from_slice(id.as_bytes());
        Block {
            disk: Arc::new(disk),
            pool,
            serial,
            active: None,
        }
    }

    /// Drain the request queue; runs on a worker thread.
    fn process_queue(activation: &Activation, disk: &DiskImage, serial: &[u8; DISK_ID_BYTES]) {
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
            let written = execute(activation, disk, serial, &chain);
            signal |= activation.retire(0, chain.head, written);
        }
        if signal {
            activation.interrupt.signal_queue();
        }
    }
}

/// Carry out one request and return the number of bytes written to the
/// chain's in portion (data plus the status byte).
fn execute(
    activation: &Activation,
    disk: &DiskImage,
    serial: &[u8; DISK_ID_BYTES],
    chain: &DescriptorChain,
) -> u32 {
    let mem = &*activation.mem;

    // The final writable byte is the status; everything before it is the
    // data area.
    let (data_iovs, status_addr) = match split_status(&chain.input) {
        Some(split) => split,
        None => {
            warn!("block request without a status byte, dropping");
            return 0;
        }
    };

    let header: RequestHeader = match chain.out.first().and_then(|iov| {
        if iov.len as usize >= std::mem::size_of::<RequestHeader>() {
            mem.read_obj(iov.addr).ok()
        } else {
            None
        }
    }) {
        Some(header) => header,
        None => {
            let _ = mem.write_obj(VIRTIO_BLK_S_UNSUPP, status_addr);
            return 1;
        }
    };

    let offset = header.sector.wrapping_mul(SECTOR_SIZE);
    let (status, data_written) = match header.request_type {
        VIRTIO_BLK_T_IN => {
            let len: usize = data_iovs.iter().map(|iov| iov.len as usize).sum();
            let mut data = vec![0u8; len];
            match disk.read_at(&mut data, offset) {
                Ok(()) => match scatter(mem, &data_iovs, &data) {
                    Ok(n) => (VIRTIO_BLK_S_OK, n),
                    Err(_) => (VIRTIO_BLK_S_IOERR, 0),
                },
                Err(e) => {
                    warn!("disk read at {:#x} failed: {}", offset, e);
                    (VIRTIO_BLK_S_IOERR, 0)
                }
            }
        }
        VIRTIO_BLK_T_OUT => {
            match gather(mem, &chain.out) {
                Ok(buf) if buf.len() >= std::mem::size_of::<RequestHeader>() => {
                    let data = &buf[std::mem::size_of::<RequestHeader>()..];
                    match disk.write_at(data, offset) {
                        Ok(()) => (VIRTIO_BLK_S_OK, 0),
                        Err(e) => {
                            warn!("disk write at {:#x} failed: {}", offset, e);
                            (VIRTIO_BLK_S_IOERR, 0)
                        }
                    }
                }
                _ => (VIRTIO_BLK_S_IOERR, 0),
            }
        }
        VIRTIO_BLK_T_FLUSH => match disk.flush() {
            Ok(()) => (VIRTIO_BLK_S_OK, 0),
            Err(e) => {
                warn!("disk flush failed: {}", e);
                (VIRTIO_BLK_S_IOERR, 0)
            }
        },
        VIRTIO_BLK_T_GET_ID => match scatter(mem, &data_iovs, serial) {
            Ok(n) => (VIRTIO_BLK_S_OK, n),
            Err(_) => (VIRTIO_BLK_S_IOERR, 0),
        },
        other => {
            warn!("unsupported block request type {}", other);
            (VIRTIO_BLK_S_UNSUPP, 0)
        }
    };

    if mem.write_obj(status, status_addr).is_err() {
        warn!("cannot write block status byte");
        return data_written;
    }
    data_written + 1
}

/// Split the in portion into data segments and the status byte address.
fn split_status(input: &[Iovec]) -> Option<(Vec<Iovec>, GuestAddress)> {
    let last = input.last()?;
    if last.len == 0 {
        return None;
    }
    let status_addr = last.addr.unchecked_add(u64::from(last.len) - 1);
    let mut data = input.to_vec();
    let tail = data.last_mut().unwrap();
    tail.len -= 1;
    if tail.len == 0 {
        data.pop();
    }
    Some((data, status_addr))
}

impl VirtioDevice for Block {
    fn device_type(&self) -> u32 {
        VIRTIO_ID_BLOCK
    }

    fn queue_sizes(&self) -> &[u16] {
        &[QUEUE_SIZE]
    }

    fn device_features(&self) -> u32 {
        let mut features = 1 << VIRTIO_BLK_F_FLUSH;
        if self.disk.read_only() {
            features |= 1 << VIRTIO_BLK_F_RO;
        }
        features
    }

    /// Config space: capacity in 512-byte sectors, little-endian u64.
    fn read_config(&self, offset: u64, data: &mut [u8]) {
        let capacity = self.disk.sectors().to_le_bytes();
        for (i, b) in data.iter_mut().enumerate() {
            *b = *capacity.get(offset as usize + i).unwrap_or(&0);
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
            let disk = Arc::clone(&self.disk);
            let serial = self.serial;
            self.pool.spawn(move || {
                Block::process_queue(&activation, &disk, &serial);
            });
        }
    }

    fn reset(&mut self) {
        self.active = None;
    }
}
