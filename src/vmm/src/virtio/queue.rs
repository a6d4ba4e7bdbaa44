// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Legacy split-ring virtqueue engine.
//!
//! The guest lays out `desc[N]`, the available ring and the used ring in
//! one contiguous block whose page frame number it writes to the queue
//! PFN register. The monitor keeps a 16-bit shadow of the last seen
//! available index and owns the used ring; it never writes `desc` or
//! `avail`.
//!
//! Ordering contract: a used element is written before `used.idx` is
//! published behind a release fence, and the fence precedes the interrupt
//! the transport injects afterwards. The pop side pairs this with an
//! acquire fence after reading `avail.idx`.

use std::sync::atomic::{fence, Ordering};

use vm_memory::{
    Address, ByteValued, Bytes, GuestAddress, GuestMemory, GuestMemoryError, GuestMemoryMmap,
};

use crate::memory::PAGE_SHIFT;

/// Chained descriptor: continues at `next`.
pub const VIRTQ_DESC_F_NEXT: u16 = 0x1;
/// Device-writable descriptor (guest receives data through it).
pub const VIRTQ_DESC_F_WRITE: u16 = 0x2;

/// Guest asks the device not to interrupt on used-ring updates.
pub const VRING_AVAIL_F_NO_INTERRUPT: u16 = 0x1;

/// Ring sizes are powers of two up to this bound.
pub const MAX_QUEUE_SIZE: u16 = 32768;

/// A chain longer than this is treated as guest misbehavior (it is more
/// links than any ring we offer can legitimately produce).
const MAX_CHAIN_LINKS: usize = 1024;

/// Legacy transport aligns the used ring to a page boundary.
const VRING_USED_ALIGN: u64 = 4096;

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("guest memory access failed: {0}")]
    GuestMemory(#[from] GuestMemoryError),

    #[error("ring at pfn {0:#x} does not fit in guest RAM")]
    RingOutOfRange(u32),

    #[error("descriptor head {head} out of range for queue of size {size}")]
    InvalidHead { head: u16, size: u16 },

    #[error("descriptor link {0} out of range")]
    InvalidLink(u16),

    #[error("descriptor chain at head {0} exceeds {MAX_CHAIN_LINKS} links")]
    ChainTooLong(u16),

    #[error("readable descriptor follows a writable one in chain at head {0}")]
    OutAfterIn(u16),

    #[error("descriptor buffer at {0:#x} is outside guest RAM")]
    BufferOutOfRange(u64),
}

pub type Result<T> = std::result::Result<T, QueueError>;

/// One guest buffer segment, translated and clamped to guest RAM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Iovec {
    pub addr: GuestAddress,
    pub len: u32,
}

/// One request popped from the available ring: the out portion carries
/// guest-to-device data, the in portion is device-writable.
#[derive(Debug)]
pub struct DescriptorChain {
    pub head: u16,
    pub out: Vec<Iovec>,
    pub input: Vec<Iovec>,
}

impl DescriptorChain {
    pub fn out_len(&self) -> u64 {
        self.out.iter().map(|iov| u64::from(iov.len)).sum()
    }

    pub fn in_len(&self) -> u64 {
        self.input.iter().map(|iov| u64::from(iov.len)).sum()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
struct Descriptor {
    addr: u64,
    len: u32,
    flags: u16,
    next: u16,
}

// Safe: plain bytes, no padding, any bit pattern is valid.
unsafe impl ByteValued for Descriptor {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
struct UsedElem {
    id: u32,
    len: u32,
}

unsafe impl ByteValued for UsedElem {}

/// Monitor-side state of one virtqueue.
pub struct VirtQueue {
    size: u16,
    pfn: u32,
    ready: bool,
    desc_table: GuestAddress,
    avail_ring: GuestAddress,
    used_ring: GuestAddress,
    last_avail_idx: u16,
    next_used: u16,
    /// Doorbell strikes observed on this queue.
    pub notify_count: u64,
}

impl VirtQueue {
    /// `size` must be a power of two no larger than [`MAX_QUEUE_SIZE`].
    pub fn new(size: u16) -> Self {
        assert!(size.is_power_of_two() && size <= MAX_QUEUE_SIZE);
        VirtQueue {
            size,
            pfn: 0,
            ready: false,
            desc_table: GuestAddress(0),
            avail_ring: GuestAddress(0),
            used_ring: GuestAddress(0),
            last_avail_idx: 0,
            next_used: 0,
            notify_count: 0,
        }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn pfn(&self) -> u32 {
        self.pfn
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Install the ring the guest placed at `pfn`. A zero PFN tears the
    /// queue down again (guest-side reset).
    pub fn set_pfn(&mut self, mem: &GuestMemoryMmap, pfn: u32) -> Result<()> {
        if pfn == 0 {
            self.reset();
            return Ok(());
        }

        let n = u64::from(self.size);
        let base = GuestAddress(u64::from(pfn) << PAGE_SHIFT);
        let desc_len = 16 * n;
        let avail = base.unchecked_add(desc_len);
        // flags + idx + ring[n] + used_event
        let avail_len = 6 + 2 * n;
        let used = GuestAddress(
            (avail.raw_value() + avail_len + VRING_USED_ALIGN - 1) & !(VRING_USED_ALIGN - 1),
        );
        // flags + idx + ring[n] + avail_event
        let used_len = 6 + 8 * n;

        if !range_in_ram(mem, base, desc_len)
            || !range_in_ram(mem, avail, avail_len)
            || !range_in_ram(mem, used, used_len)
        {
            return Err(QueueError::RingOutOfRange(pfn));
        }

        self.pfn = pfn;
        self.desc_table = base;
        self.avail_ring = avail;
        self.used_ring = used;
        // Adopt the indices the guest initialized the ring with, so a
        // reset-and-reinit sequence starts from a consistent view.
        self.last_avail_idx = mem.read_obj(self.avail_ring.unchecked_add(2))?;
        self.next_used = mem.read_obj(self.used_ring.unchecked_add(2))?;
        self.ready = true;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.pfn = 0;
        self.ready = false;
        self.last_avail_idx = 0;
        self.next_used = 0;
        self.notify_count = 0;
    }

    /// Pop the next available head and walk its chain. Returns `Ok(None)`
    /// when the guest has published nothing new.
    pub fn pop(&mut self, mem: &GuestMemoryMmap) -> Result<Option<DescriptorChain>> {
        if !self.ready {
            return Ok(None);
        }

        let avail_idx: u16 = mem.read_obj(self.avail_ring.unchecked_add(2))?;
        fence(Ordering::Acquire);
        if avail_idx == self.last_avail_idx {
            return Ok(None);
        }

        let slot = u64::from(self.last_avail_idx % self.size);
        let head: u16 = mem.read_obj(self.avail_ring.unchecked_add(4 + 2 * slot))?;
        self.last_avail_idx = self.last_avail_idx.wrapping_add(1);

        self.walk(mem, head).map(Some)
    }

    fn walk(&self, mem: &GuestMemoryMmap, head: u16) -> Result<DescriptorChain> {
        if head >= self.size {
            return Err(QueueError::InvalidHead {
                head,
                size: self.size,
            });
        }

        let mut out = Vec::new();
        let mut input = Vec::new();
        let mut index = head;
        let mut links = 0usize;

        loop {
            links += 1;
            if links > MAX_CHAIN_LINKS {
                return Err(QueueError::ChainTooLong(head));
            }
            if index >= self.size {
                return Err(QueueError::InvalidLink(index));
            }

            let desc: Descriptor = mem.read_obj(self.desc_table.unchecked_add(16 * u64::from(index)))?;
            let writable = desc.flags & VIRTQ_DESC_F_WRITE != 0;
            if !writable && !input.is_empty() {
                return Err(QueueError::OutAfterIn(head));
            }

            if desc.len > 0 {
                let addr = GuestAddress(desc.addr);
                if !mem.address_in_range(addr) {
                    return Err(QueueError::BufferOutOfRange(desc.addr));
                }
                // Clamp the segment at the end of guest RAM.
                let room = mem.last_addr().raw_value() - desc.addr + 1;
                let len = u64::from(desc.len).min(room) as u32;
                let iov = Iovec { addr, len };
                if writable {
                    input.push(iov);
                } else {
                    out.push(iov);
                }
            }

            if desc.flags & VIRTQ_DESC_F_NEXT != 0 {
                index = desc.next;
            } else {
                break;
            }
        }

        Ok(DescriptorChain { head, out, input })
    }

    /// Retire `head`, recording `len` bytes written to its in portion.
    /// The element is visible before the index thanks to the release
    /// fence; callers inject the interrupt only after this returns.
    pub fn add_used(&mut self, mem: &GuestMemoryMmap, head: u16, len: u32) -> Result<()> {
        if head >= self.size {
            return Err(QueueError::InvalidHead {
                head,
                size: self.size,
            });
        }

        let slot = u64::from(self.next_used % self.size);
        mem.write_obj(
            UsedElem {
                id: u32::from(head),
                len,
            },
            self.used_ring.unchecked_add(4 + 8 * slot),
        )?;
        self.next_used = self.next_used.wrapping_add(1);
        fence(Ordering::Release);
        mem.write_obj(self.next_used, self.used_ring.unchecked_add(2))?;
        Ok(())
    }

    /// Whether the guest wants an interrupt for used-ring updates.
    pub fn should_signal(&self, mem: &GuestMemoryMmap) -> bool {
        if !self.ready {
            return false;
        }
        match mem.read_obj::<u16>(self.avail_ring) {
            Ok(flags) => flags & VRING_AVAIL_F_NO_INTERRUPT == 0,
            Err(_) => true,
        }
    }
}

fn range_in_ram(mem: &GuestMemoryMmap, addr: GuestAddress, len: u64) -> bool {
    if len == 0 {
        return true;
    }
    match addr.checked_add(len - 1) {
        Some(end) => mem.address_in_range(addr) && mem.address_in_range(end),
        None => false,
    }
}

/// Gather the bytes of `iovs` into one buffer.
pub fn gather(mem: &GuestMemoryMmap, iovs: &[Iovec]) -> Result<Vec<u8>> {
    let total: usize = iovs.iter().map(|iov| iov.len as usize).sum();
    let mut buf = vec![0u8; total];
    let mut off = 0;
    for iov in iovs {
        let len = iov.len as usize;
        mem.read_slice(&mut buf[off..off + len], iov.addr)?;
        off += len;
    }
    Ok(buf)
}

/// Scatter `data` across `iovs`, in order. Returns the number of bytes
/// that fit.
pub fn scatter(mem: &GuestMemoryMmap, iovs: &[Iovec], data: &[u8]) -> Result<u32> {
    let mut off = 0usize;
    for iov in iovs {
        if off == data.len() {
            break;
        }
        let len = (iov.len as usize).min(data.len() - off);
        mem.write_slice(&data[off..off + len], iov.addr)?;
        off += len;
    }
    Ok(off as u32)
}

/// Guest-side ring builder shared by the virtio unit tests: it plays the
/// driver, laying out descriptors and publishing available entries the
/// way a guest would.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use vm_memory::Bytes;

    pub const RAM_SIZE: u64 = 2 << 20;
    pub const RING_PFN: u32 = 0x100; // ring block at 1 MiB

    pub fn test_mem() -> GuestMemoryMmap {
        GuestMemoryMmap::from_ranges(&[(GuestAddress(0), RAM_SIZE as usize)]).unwrap()
    }

    pub struct TestRing<'a> {
        pub mem: &'a GuestMemoryMmap,
        pub desc: GuestAddress,
        pub avail: GuestAddress,
        pub used: GuestAddress,
        size: u16,
        avail_idx: u16,
    }

    impl<'a> TestRing<'a> {
        pub fn new(mem: &'a GuestMemoryMmap, size: u16) -> Self {
            Self::at_pfn(mem, size, RING_PFN)
        }

        pub fn at_pfn(mem: &'a GuestMemoryMmap, size: u16, pfn: u32) -> Self {
            let base = GuestAddress(u64::from(pfn) << PAGE_SHIFT);
            let n = u64::from(size);
            let avail = base.unchecked_add(16 * n);
            let used = GuestAddress(
                (avail.raw_value() + 6 + 2 * n + VRING_USED_ALIGN - 1) & !(VRING_USED_ALIGN - 1),
            );
            TestRing {
                mem,
                desc: base,
                avail,
                used,
                size,
                avail_idx: 0,
            }
        }

        pub fn write_desc(&self, index: u16, addr: u64, len: u32, flags: u16, next: u16) {
            let d = Descriptor {
                addr,
                len,
                flags,
                next,
            };
            self.mem
                .write_obj(d, self.desc.unchecked_add(16 * u64::from(index)))
                .unwrap();
        }

        /// Publish `head` at `slot` and move the avail index to `avail_idx`.
        pub fn publish(&self, slot: u16, head: u16, avail_idx: u16) {
            self.mem
                .write_obj(
                    head,
                    self.avail
                        .unchecked_add(4 + 2 * u64::from(slot % self.size)),
                )
                .unwrap();
            self.mem
                .write_obj(avail_idx, self.avail.unchecked_add(2))
                .unwrap();
        }

        /// Publish `head` at the next free slot.
        pub fn push(&mut self, head: u16) {
            let slot = self.avail_idx;
            self.avail_idx = self.avail_idx.wrapping_add(1);
            self.publish(slot, head, self.avail_idx);
        }

        pub fn set_avail_flags(&self, flags: u16) {
            self.mem.write_obj(flags, self.avail).unwrap();
        }

        pub fn used_idx(&self) -> u16 {
            self.mem.read_obj(self.used.unchecked_add(2)).unwrap()
        }

        pub fn used_elem(&self, slot: u16) -> (u32, u32) {
            let e: UsedElem = self
                .mem
                .read_obj(self.used.unchecked_add(4 + 8 * u64::from(slot % self.size)))
                .unwrap();
            (e.id, e.len)
        }
    }

    pub fn ready_queue(mem: &GuestMemoryMmap, size: u16) -> VirtQueue {
        ready_queue_at(mem, size, RING_PFN)
    }

    pub fn ready_queue_at(mem: &GuestMemoryMmap, size: u16, pfn: u32) -> VirtQueue {
        let mut q = VirtQueue::new(size);
        q.set_pfn(mem, pfn).unwrap();
        q
    }
}
