// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Boot MSR state, zeroing the syscall/sysenter machinery.

use kvm_bindings::{kvm_msr_entry, Msrs};

use super::msr_index::*;

/// Errors building the MSR list.
#[derive(Debug)]
pub enum Error {
    /// FAM-wrapper allocation failed.
    FamError(vmm_sys_util::fam::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn msr_entry(index: u32, data: u64) -> kvm_msr_entry {
    kvm_msr_entry {
        index,
        data,
        ..Default::default()
    }
}

/// The MSR values a freshly booted 64-bit kernel expects.
pub fn create_boot_msr_entries() -> Result<Msrs> {
    let entries = [
        msr_entry(MSR_IA32_SYSENTER_CS, 0),
        msr_entry(MSR_IA32_SYSENTER_ESP, 0),
        msr_entry(MSR_IA32_SYSENTER_EIP, 0),
        msr_entry(MSR_STAR, 0),
        msr_entry(MSR_CSTAR, 0),
        msr_entry(MSR_KERNEL_GS_BASE, 0),
        msr_entry(MSR_SYSCALL_MASK, 0),
        msr_entry(MSR_LSTAR, 0),
        msr_entry(MSR_IA32_TSC, 0),
        msr_entry(MSR_IA32_MISC_ENABLE, MSR_IA32_MISC_ENABLE_FAST_STRING),
    ];
    Msrs::from_entries(&entries).map_err(Error::FamError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_msrs() {
        let msrs = create_boot_msr_entries().unwrap();
        let entries = msrs.as_slice();
        assert_eq!(entries.len(), 10);
        assert!(entries.iter().any(|e| e.index == MSR_LSTAR));
        let misc = entries
            .iter()
            .find(|e| e.index == MSR_IA32_MISC_ENABLE)
            .unwrap();
        assert_eq!(misc.data, MSR_IA32_MISC_ENABLE_FAST_STRING);
    }
}
