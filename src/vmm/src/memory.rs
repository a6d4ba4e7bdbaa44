// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Guest physical RAM: one contiguous host mapping starting at guest
//! address 0, registered with KVM as a single memory slot.

use std::sync::Arc;

use vm_memory::{
    Address, GuestAddress, GuestMemory, GuestMemoryError, GuestMemoryMmap, GuestMemoryRegion,
};

/// Guest pages are 4 KiB; PFNs shift by this amount.
pub const PAGE_SHIFT: u64 = 12;

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("cannot allocate guest memory: {0}")]
    Alloc(vm_memory::Error),

    #[error("guest range {0:#x}+{1:#x} is outside guest RAM")]
    OutOfRange(u64, u64),

    #[error("guest memory access failed: {0}")]
    Access(#[from] GuestMemoryError),
}

pub type Result<T> = std::result::Result<T, MemoryError>;

/// The single region backing guest physical memory.
///
/// Every guest physical address `g` in `[0, size)` maps to host address
/// `host_base + g`. The mapping lives until the `GuestRam` (and every
/// `Arc` clone of its inner mmap) is dropped, which happens after all
/// vCPUs have been joined and all devices torn down.
pub struct GuestRam {
    mem: Arc<GuestMemoryMmap>,
    size: u64,
}

impl GuestRam {
    /// Allocate `size` bytes of anonymous, private memory for the guest.
    pub fn new(size: u64) -> Result<Self> {
        let mem = GuestMemoryMmap::from_ranges(&[(GuestAddress(0), size as usize)])
            .map_err(MemoryError::Alloc)?;

        // Hint transparent huge pages; advisory, failure is not an error.
        for region in mem.iter() {
            if let Ok(host) = mem.get_host_address(region.start_addr()) {
                unsafe {
                    libc::madvise(
                        host as *mut libc::c_void,
                        region.len() as usize,
                        libc::MADV_HUGEPAGE,
                    );
                }
            }
        }

        Ok(GuestRam {
            mem: Arc::new(mem),
            size,
        })
    }

    pub fn mem(&self) -> &Arc<GuestMemoryMmap> {
        &self.mem
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Host virtual address backing `addr`, bounds-checked.
    pub fn host_address(&self, addr: GuestAddress) -> Result<*mut u8> {
        self.mem
            .get_host_address(addr)
            .map_err(|_| MemoryError::OutOfRange(addr.raw_value(), 0))
    }

    /// Check that `[addr, addr + len)` lies entirely inside guest RAM.
    pub fn check_range(&self, addr: GuestAddress, len: u64) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        let end = addr
            .raw_value()
            .checked_add(len - 1)
            .ok_or_else(|| MemoryError::OutOfRange(addr.raw_value(), len))?;
        if self.mem.address_in_range(addr) && self.mem.address_in_range(GuestAddress(end)) {
            Ok(())
        } else {
            Err(MemoryError::OutOfRange(addr.raw_value(), len))
        }
    }

    /// Guest physical address of a page frame number. The PFN is widened
    /// to 64 bits before shifting so frames above 4 GiB survive intact.
    pub fn pfn_to_gpa(&self, pfn: u32) -> Result<GuestAddress> {
        let gpa = GuestAddress(u64::from(pfn) << PAGE_SHIFT);
        self.check_range(gpa, 1)?;
        Ok(gpa)
    }
}

/// Host physical RAM in MiB, or `None` if sysconf fails.
pub fn host_ram_mib() -> Option<u64> {
    let pages = unsafe { libc::sysconf(libc::_SC_PHYS_PAGES) };
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGE_SIZE) };
    if pages < 0 || page_size < 0 {
        return None;
    }
    Some((pages as u64 * page_size as u64) >> 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_bounds() {
        let ram = GuestRam::new(1 << 20).unwrap();
        assert_eq!(ram.size(), 1 << 20);

        assert!(ram.check_range(GuestAddress(0), 1 << 20).is_ok());
        assert!(ram.check_range(GuestAddress(0xf_f000), 0x1000).is_ok());
        assert!(ram.check_range(GuestAddress(0xf_f000), 0x1001).is_err());
        assert!(ram.check_range(GuestAddress(1 << 20), 1).is_err());
        // Zero-length ranges never fault.
        assert!(ram.check_range(GuestAddress(1 << 20), 0).is_ok());
    }

    #[test]
    fn test_pfn_translation() {
        let ram = GuestRam::new(1 << 20).unwrap();
        assert_eq!(ram.pfn_to_gpa(0).unwrap(), GuestAddress(0));
        assert_eq!(ram.pfn_to_gpa(0xff).unwrap(), GuestAddress(0xff000));
        assert!(ram.pfn_to_gpa(0x100).is_err());
    }

    #[test]
    fn test_host_mapping_is_flat() {
        let ram = GuestRam::new(1 << 20).unwrap();
        let base = ram.host_address(GuestAddress(0)).unwrap() as u64;
        let at_4k = ram.host_address(GuestAddress(0x1000)).unwrap() as u64;
        assert_eq!(at_4k - base, 0x1000);
    }
}
