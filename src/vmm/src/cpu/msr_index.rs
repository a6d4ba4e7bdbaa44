// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! The model-specific registers the boot path touches.

pub const MSR_IA32_TSC: u32 = 0x0000_0010;
pub const MSR_IA32_SYSENTER_CS: u32 = 0x0000_0174;
pub const MSR_IA32_SYSENTER_ESP: u32 = 0x0000_0175;
pub const MSR_IA32_SYSENTER_EIP: u32 = 0x0000_0176;
pub const MSR_IA32_MISC_ENABLE: u32 = 0x0000_01a0;

pub const MSR_STAR: u32 = 0xc000_0081;
pub const MSR_LSTAR: u32 = 0xc000_0082;
pub const MSR_CSTAR: u32 = 0xc000_0083;
pub const MSR_SYSCALL_MASK: u32 = 0xc000_0084;
pub const MSR_KERNEL_GS_BASE: u32 = 0xc000_0102;

/// Fast-string operation enable.
pub const MSR_IA32_MISC_ENABLE_FAST_STRING: u64 = 0x1;

// EFER bits.
pub const EFER_LME: u32 = 0x100;
pub const EFER_LMA: u32 = 0x400;
