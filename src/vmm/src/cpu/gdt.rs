// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Boot-time GDT/IDT setup for the 64-bit entry path.

use kvm_bindings::kvm_segment;
use vm_memory::{Bytes, GuestAddress, GuestMemory, GuestMemoryError, GuestMemoryMmap};

/// Address of the boot GDT, right below the zero page.
pub const BOOT_GDT_OFFSET: u64 = 0x500;
/// Address of the boot IDT.
pub const BOOT_IDT_OFFSET: u64 = 0x520;
/// Number of initial GDT entries.
pub const BOOT_GDT_MAX: u64 = 4;

/// Pack a (flags, base, limit) triple into the GDT entry format.
pub fn gdt_entry(flags: u16, base: u32, limit: u32) -> u64 {
    ((u64::from(base) & 0xff00_0000u64) << (56 - 24))
        | ((u64::from(flags) & 0x0000_f0ffu64) << 40)
        | ((u64::from(limit) & 0x000f_0000u64) << (48 - 16))
        | ((u64::from(base) & 0x00ff_ffffu64) << 16)
        | (u64::from(limit) & 0x0000_ffffu64)
}

fn get_base(entry: u64) -> u64 {
    ((entry & 0xff00_0000_0000_0000) >> 32)
        | ((entry & 0x0000_00ff_0000_0000) >> 16)
        | ((entry & 0x0000_0000_ffff_0000) >> 16)
}

fn get_limit(entry: u64) -> u32 {
    (((entry & 0x000f_0000_0000_0000) >> 32) | (entry & 0x0000_0000_0000_ffff)) as u32
}

fn get_g(entry: u64) -> u8 {
    ((entry & 0x0080_0000_0000_0000) >> 55) as u8
}

fn get_db(entry: u64) -> u8 {
    ((entry & 0x0040_0000_0000_0000) >> 54) as u8
}

fn get_l(entry: u64) -> u8 {
    ((entry & 0x0020_0000_0000_0000) >> 53) as u8
}

fn get_avl(entry: u64) -> u8 {
    ((entry & 0x0010_0000_0000_0000) >> 52) as u8
}

fn get_p(entry: u64) -> u8 {
    ((entry & 0x0000_8000_0000_0000) >> 47) as u8
}

fn get_dpl(entry: u64) -> u8 {
    ((entry & 0x0000_6000_0000_0000) >> 45) as u8
}

fn get_s(entry: u64) -> u8 {
    ((entry & 0x0000_1000_0000_0000) >> 44) as u8
}

fn get_type(entry: u64) -> u8 {
    ((entry & 0x0000_0f00_0000_0000) >> 40) as u8
}

/// Build a kvm_segment from a GDT entry and its table index.
pub fn kvm_segment_from_gdt(entry: u64, table_index: u8) -> kvm_segment {
    kvm_segment {
        base: get_base(entry),
        limit: get_limit(entry),
        selector: u16::from(table_index) * 8,
        type_: get_type(entry),
        present: get_p(entry),
        dpl: get_dpl(entry),
        db: get_db(entry),
        s: get_s(entry),
        l: get_l(entry),
        g: get_g(entry),
        avl: get_avl(entry),
        padding: 0,
        unusable: match get_p(entry) {
            0 => 1,
            _ => 0,
        },
    }
}

pub fn write_gdt_table(
    table: &[u64],
    guest_mem: &GuestMemoryMmap,
) -> Result<(), GuestMemoryError> {
    let boot_gdt_addr = GuestAddress(BOOT_GDT_OFFSET);
    for (index, entry) in table.iter().enumerate() {
        let addr = guest_mem
            .checked_offset(boot_gdt_addr, index * std::mem::size_of::<u64>())
            .ok_or(GuestMemoryError::InvalidGuestAddress(boot_gdt_addr))?;
        guest_mem.write_obj(*entry, addr)?;
    }
    Ok(())
}

pub fn write_idt_value(val: u64, guest_mem: &GuestMemoryMmap) -> Result<(), GuestMemoryError> {
    let boot_idt_addr = GuestAddress(BOOT_IDT_OFFSET);
    guest_mem.write_obj(val, boot_idt_addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_from_gdt() {
        let code = gdt_entry(0xa09b, 0, 0xfffff);
        let seg = kvm_segment_from_gdt(code, 1);
        assert_eq!(seg.selector, 8);
        assert_eq!(seg.base, 0);
        assert_eq!(seg.limit, 0xfffff);
        assert_eq!(seg.l, 1); // 64-bit code
        assert_eq!(seg.present, 1);
        assert_eq!(seg.unusable, 0);

        let null = kvm_segment_from_gdt(gdt_entry(0, 0, 0), 0);
        assert_eq!(null.unusable, 1);
    }
}
