// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Per-vCPU CPUID adjustments on top of what KVM supports.

use kvm_bindings::CpuId;
use kvm_ioctls::Kvm;

// Leaf 0x1 EBX fields.
const EBX_CLFLUSH_CACHELINE: u32 = 8;
const EBX_CLFLUSH_SIZE_SHIFT: u32 = 8;
const EBX_CPU_COUNT_SHIFT: u32 = 16;
const EBX_CPUID_SHIFT: u32 = 24;
// Leaf 0x1 EDX: hyper-threading.
const EDX_HTT_SHIFT: u32 = 28;

const KVM_CPUID_SIGNATURE: u32 = 0x4000_0000;

/// Stamp the vCPU's identity (initial APIC ID, topology) into the CPUID
/// table KVM reported.
pub fn filter_cpuid(_kvm: &Kvm, cpu_index: usize, cpu_count: usize, cpuid: &mut CpuId) {
    for entry in cpuid.as_mut_slice().iter_mut() {
        match entry.function {
            0x01 => {
                entry.ebx = ((cpu_index as u32) << EBX_CPUID_SHIFT)
                    | (EBX_CLFLUSH_CACHELINE << EBX_CLFLUSH_SIZE_SHIFT);
                if cpu_count > 1 {
                    entry.ebx |= (cpu_count as u32) << EBX_CPU_COUNT_SHIFT;
                    entry.edx |= 1 << EDX_HTT_SHIFT;
                }
            }
            0x0b => {
                // Extended topology: EDX carries the x2APIC id.
                entry.edx = cpu_index as u32;
            }
            KVM_CPUID_SIGNATURE => {
                // "KVMKVMKVM\0\0\0"
                entry.ebx = 0x4b4d564b;
                entry.ecx = 0x564b4d56;
                entry.edx = 0x0000004d;
            }
            _ => {}
        }
    }
}
