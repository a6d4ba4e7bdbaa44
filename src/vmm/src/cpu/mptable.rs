// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! MP table generation so SMP guests discover their CPUs.
//!
//! A floating pointer at the EBDA points at a configuration table with
//! one processor entry per vCPU, the ISA bus, the IO-APIC and the 16
//! legacy interrupt sources.

use vm_memory::{Address, ByteValued, Bytes, GuestAddress, GuestMemoryError, GuestMemoryMmap};

const MPTABLE_START: u64 = 0x9fc00;
const APIC_DEFAULT_PHYS_BASE: u32 = 0xfee0_0000;
const IO_APIC_DEFAULT_PHYS_BASE: u32 = 0xfec0_0000;

const MP_SPEC: u8 = 4; // revision 1.4
const APIC_VERSION: u8 = 0x14;

const CPU_STEPPING: u32 = 0x600;
const CPU_FEATURE_APIC: u32 = 0x200;
const CPU_FEATURE_FPU: u32 = 0x001;

// Entry type tags.
const MP_PROCESSOR: u8 = 0;
const MP_BUS: u8 = 1;
const MP_IOAPIC: u8 = 2;
const MP_INTSRC: u8 = 3;
const MP_LINTSRC: u8 = 4;

// The IO-APIC id must not collide with any CPU's APIC id, which are
// assigned from zero; this caps the CPU count.
pub const MAX_SUPPORTED_CPUS: u8 = 254;
const IOAPIC_ID: u8 = MAX_SUPPORTED_CPUS;

#[derive(Debug)]
pub enum Error {
    /// More vCPUs than APIC ids.
    TooManyCpus,
    /// Table does not fit at the EBDA.
    WriteTable(GuestMemoryError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpfIntel {
    signature: [u8; 4],
    physptr: u32,
    length: u8,
    specification: u8,
    checksum: u8,
    feature1: u8,
    feature2: [u8; 4],
}

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpcTable {
    signature: [u8; 4],
    length: u16,
    spec: u8,
    checksum: u8,
    oem: [u8; 8],
    productid: [u8; 12],
    oemptr: u32,
    oemsize: u16,
    oemcount: u16,
    lapic: u32,
    reserved: u32,
}

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpcCpu {
    type_: u8,
    apicid: u8,
    apicver: u8,
    cpuflag: u8,
    cpufeature: u32,
    featureflag: u32,
    reserved: [u32; 2],
}

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpcBus {
    type_: u8,
    busid: u8,
    bustype: [u8; 6],
}

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpcIoapic {
    type_: u8,
    apicid: u8,
    apicver: u8,
    flags: u8,
    apicaddr: u32,
}

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpcIntsrc {
    type_: u8,
    irqtype: u8,
    irqflag: u16,
    srcbus: u8,
    srcbusirq: u8,
    dstapic: u8,
    dstirq: u8,
}

#[repr(C, packed)]
#[derive(Clone, Copy, Default)]
struct MpcLintsrc {
    type_: u8,
    irqtype: u8,
    irqflag: u16,
    srcbusid: u8,
    srcbusirq: u8,
    destapic: u8,
    destapiclint: u8,
}

// Safe: packed, no padding, all-bytes types.
unsafe impl ByteValued for MpfIntel {}
unsafe impl ByteValued for MpcTable {}
unsafe impl ByteValued for MpcCpu {}
unsafe impl ByteValued for MpcBus {}
unsafe impl ByteValued for MpcIoapic {}
unsafe impl ByteValued for MpcIntsrc {}
unsafe impl ByteValued for MpcLintsrc {}

fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    (!sum).wrapping_add(1)
}

/// Write the MP floating pointer and configuration table for `num_cpus`.
pub fn setup_mptable(mem: &GuestMemoryMmap, num_cpus: u8) -> Result<()> {
    if num_cpus == 0 || num_cpus > MAX_SUPPORTED_CPUS {
        return Err(Error::TooManyCpus);
    }

    // Assemble the entries that follow the table header.
    let mut entries: Vec<u8> = Vec::new();
    let mut entry_count = 0u16;

    for cpu_id in 0..num_cpus {
        let cpu = MpcCpu {
            type_: MP_PROCESSOR,
            apicid: cpu_id,
            apicver: APIC_VERSION,
            // Enabled, and the first CPU is the bootstrap processor.
            cpuflag: if cpu_id == 0 { 0x3 } else { 0x1 },
            cpufeature: CPU_STEPPING,
            featureflag: CPU_FEATURE_APIC | CPU_FEATURE_FPU,
            ..Default::default()
        };
        entries.extend_from_slice(cpu.as_slice());
        entry_count += 1;
    }

    let bus = MpcBus {
        type_: MP_BUS,
        busid: 0,
        bustype: *b"ISA   ",
    };
    entries.extend_from_slice(bus.as_slice());
    entry_count += 1;

    let ioapic = MpcIoapic {
        type_: MP_IOAPIC,
        apicid: IOAPIC_ID,
        apicver: APIC_VERSION,
        flags: 0x1, // enabled
        apicaddr: IO_APIC_DEFAULT_PHYS_BASE,
    };
    entries.extend_from_slice(ioapic.as_slice());
    entry_count += 1;

    for irq in 0..16u8 {
        let intsrc = MpcIntsrc {
            type_: MP_INTSRC,
            irqtype: 0, // vectored interrupt
            irqflag: 0, // conforms to bus default
            srcbus: 0,
            srcbusirq: irq,
            dstapic: IOAPIC_ID,
            dstirq: irq,
        };
        entries.extend_from_slice(intsrc.as_slice());
        entry_count += 1;
    }

    for (irqtype, destapiclint) in [(3u8, 0u8), (1u8, 1u8)] {
        // ExtINT on LINT0, NMI on LINT1, all local APICs.
        let lintsrc = MpcLintsrc {
            type_: MP_LINTSRC,
            irqtype,
            irqflag: 0,
            srcbusid: 0,
            srcbusirq: 0,
            destapic: 0xff,
            destapiclint,
        };
        entries.extend_from_slice(lintsrc.as_slice());
        entry_count += 1;
    }

    let mut table = MpcTable {
        signature: *b"PCMP",
        length: (std::mem::size_of::<MpcTable>() + entries.len()) as u16,
        spec: MP_SPEC,
        oem: *b"KESTREL ",
        productid: *b"000000000000",
        oemcount: entry_count,
        lapic: APIC_DEFAULT_PHYS_BASE,
        ..Default::default()
    };
    let mut table_bytes = Vec::with_capacity(usize::from(table.length));
    table_bytes.extend_from_slice(table.as_slice());
    table_bytes.extend_from_slice(&entries);
    table.checksum = checksum(&table_bytes);

    let table_addr = GuestAddress(MPTABLE_START + std::mem::size_of::<MpfIntel>() as u64);
    let mut mpf = MpfIntel {
        signature: *b"_MP_",
        physptr: table_addr.raw_value() as u32,
        length: 1, // in 16-byte units
        specification: MP_SPEC,
        ..Default::default()
    };
    mpf.checksum = checksum(mpf.as_slice());

    mem.write_obj(mpf, GuestAddress(MPTABLE_START))
        .map_err(Error::WriteTable)?;
    mem.write_obj(table, table_addr).map_err(Error::WriteTable)?;
    mem.write_slice(
        &entries,
        table_addr.unchecked_add(std::mem::size_of::<MpcTable>() as u64),
    )
    .map_err(Error::WriteTable)?;

    Ok(())
}
