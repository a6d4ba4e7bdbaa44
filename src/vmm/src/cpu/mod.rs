// Copyright 2020 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Per-vCPU state: boot-time register setup, the run loop that
//! classifies VM exits, and the signal-driven debug dump machinery.

use std::os::raw::{c_int, c_void};
use std::ptr;
use std::result;
use std::sync::atomic::{AtomicBool, AtomicPtr, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use kvm_bindings::{
    kvm_fpu, kvm_guest_debug, kvm_regs, kvm_sregs, CpuId, KVM_GUESTDBG_ENABLE,
    KVM_GUESTDBG_SINGLESTEP,
};
use kvm_ioctls::{VcpuExit, VcpuFd, VmFd};
use log::{debug, error, info};
use vm_memory::{Address, Bytes, GuestAddress, GuestMemoryError, GuestMemoryMmap};

use crate::bus::Bus;
use crate::devices::serial::SerialConsole;

pub(crate) mod cpuid;
mod gdt;
use gdt::*;
mod interrupts;
use interrupts::*;
pub(crate) mod mptable;
pub(crate) mod msr_index;
pub(crate) mod msrs;

/// Initial stack for the boot CPU.
const BOOT_STACK_POINTER: u64 = 0x8ff0;

// Initial pagetables.
const PML4_START: u64 = 0x9000;
const PDPTE_START: u64 = 0xa000;
const PDE_START: u64 = 0xb000;

const X86_CR0_PE: u64 = 0x1;
const X86_CR0_PG: u64 = 0x8000_0000;
const X86_CR4_PAE: u64 = 0x20;

/// Signal dumping the receiving thread's vCPU.
pub const SIG_VCPU_DUMP: c_int = libc::SIGUSR1;
/// Signal kicking a vCPU out of KVM_RUN at teardown; handler is empty.
pub const SIG_VCPU_KICK: c_int = libc::SIGUSR2;
/// Signal dumping every vCPU in turn, without interleaving.
pub const SIG_DUMP_ALL: c_int = libc::SIGQUIT;

/// Errors encountered during vCPU operation.
#[derive(Debug)]
pub enum Error {
    /// Failed to operate on guest memory.
    GuestMemory(GuestMemoryError),
    /// Error issuing an ioctl to KVM.
    KvmIoctl(kvm_ioctls::Error),
    /// Failed to configure mptables.
    Mptable(mptable::Error),
    /// Failed to configure MSRs.
    SetModelSpecificRegistersCount,
    /// Failed to configure MSRs.
    CreateMsr(msrs::Error),
    /// Failed to install the debug signal handlers.
    SignalHandler(vmm_sys_util::errno::Error),
}

/// Dedicated Result type.
pub type Result<T> = result::Result<T, Error>;

/// How a vCPU thread finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VcpuOutcome {
    /// Clean guest shutdown.
    Shutdown,
    /// Unrecoverable exit; the process exits non-zero.
    Fatal,
}

// The debug signal handlers find their vCPU through the thread they run
// on, and the dump-all walk finds the threads through a table published
// before any vCPU starts.
thread_local! {
    static CURRENT_VCPU: AtomicPtr<Vcpu> = AtomicPtr::new(ptr::null_mut());
}

static DUMP_DONE: AtomicBool = AtomicBool::new(false);
static DEBUG_TABLE: AtomicPtr<DebugTable> = AtomicPtr::new(ptr::null_mut());

/// Serializes debug output so dumps from different vCPUs never mix.
static PRINT_LOCK: Mutex<()> = Mutex::new(());

pub(crate) struct DebugTable {
    pub threads: Vec<libc::pthread_t>,
    pub serial: Arc<Mutex<SerialConsole>>,
}

/// Publish the thread table for the dump-all signal. Called once, after
/// the vCPU threads exist and before anyone can ask for a dump.
pub(crate) fn publish_debug_table(table: DebugTable) {
    let ptr = Box::into_raw(Box::new(table));
    DEBUG_TABLE.store(ptr, Ordering::Release);
}

/// The kick handler is always needed: teardown uses it to yank vCPU
/// threads out of `KVM_RUN`.
pub(crate) fn install_kick_handler() -> Result<()> {
    vmm_sys_util::signal::register_signal_handler(SIG_VCPU_KICK, handle_kick)
        .map_err(Error::SignalHandler)
}

/// The dump signals are opt-in, behind the debug toggle.
pub(crate) fn install_debug_handlers() -> Result<()> {
    vmm_sys_util::signal::register_signal_handler(SIG_VCPU_DUMP, handle_dump)
        .map_err(Error::SignalHandler)?;
    vmm_sys_util::signal::register_signal_handler(SIG_DUMP_ALL, handle_dump_all)
        .map_err(Error::SignalHandler)?;
    Ok(())
}

extern "C" fn handle_kick(_: c_int, _: *mut libc::siginfo_t, _: *mut c_void) {}

extern "C" fn handle_dump(_: c_int, _: *mut libc::siginfo_t, _: *mut c_void) {
    CURRENT_VCPU.with(|cell| {
        let vcpu = cell.load(Ordering::Acquire);
        if !vcpu.is_null() {
            unsafe { (*vcpu).debug_dump() };
        }
    });
    DUMP_DONE.store(true, Ordering::Release);
}

extern "C" fn handle_dump_all(_: c_int, _: *mut libc::siginfo_t, _: *mut c_void) {
    let table = DEBUG_TABLE.load(Ordering::Acquire);
    if table.is_null() {
        return;
    }
    let table = unsafe { &*table };
    for &tid in &table.threads {
        DUMP_DONE.store(false, Ordering::Release);
        if unsafe { libc::pthread_kill(tid, SIG_VCPU_DUMP) } != 0 {
            continue;
        }
        // Wait for the vCPU to finish its dump before signalling the
        // next thread, so the output blocks never interleave.
        while !DUMP_DONE.load(Ordering::Acquire) {
            std::hint::spin_loop();
        }
    }
    // Best effort: skip the sysrq if the interrupted thread holds the
    // serial lock.
    if let Ok(mut serial) = table.serial.try_lock() {
        serial.inject_sysrq();
    }
}

/// Struct for interacting with vCPUs.
pub(crate) struct Vcpu {
    /// Index.
    pub index: u64,
    /// KVM file descriptor for a vCPU.
    pub vcpu_fd: VcpuFd,

    pio_bus: Arc<Bus>,
    mmio_bus: Arc<Bus>,
    mem: Arc<GuestMemoryMmap>,
    exit_flag: Arc<AtomicBool>,
}

impl Vcpu {
    /// Create a new vCPU.
    pub fn new(
        vm_fd: &VmFd,
        index: u64,
        pio_bus: Arc<Bus>,
        mmio_bus: Arc<Bus>,
        mem: Arc<GuestMemoryMmap>,
        exit_flag: Arc<AtomicBool>,
    ) -> Result<Self> {
        Ok(Vcpu {
            index,
            vcpu_fd: vm_fd.create_vcpu(index).map_err(Error::KvmIoctl)?,
            pio_bus,
            mmio_bus,
            mem,
            exit_flag,
        })
    }

    /// Set CPUID.
    pub fn configure_cpuid(&self, cpuid: &CpuId) -> Result<()> {
        self.vcpu_fd.set_cpuid2(cpuid).map_err(Error::KvmIoctl)
    }

    /// Configure MSRs.
    pub fn configure_msrs(&self) -> Result<()> {
        let msrs = msrs::create_boot_msr_entries().map_err(Error::CreateMsr)?;
        self.vcpu_fd
            .set_msrs(&msrs)
            .map_err(Error::KvmIoctl)
            .and_then(|msrs_written| {
                if msrs_written as u32 != msrs.as_fam_struct_ref().nmsrs {
                    Err(Error::SetModelSpecificRegistersCount)
                } else {
                    Ok(())
                }
            })
    }

    /// Configure regs.
    pub fn configure_regs(&self, entry: GuestAddress) -> Result<()> {
        let regs = kvm_regs {
            rflags: 0x0000_0000_0000_0002u64,
            rip: entry.raw_value(),
            // Frame pointer. It gets a snapshot of the stack pointer (rsp) so that when adjustments are
            // made to rsp (i.e. reserving space for local variables or pushing values on to the stack),
            // local variables and function parameters are still accessible from a constant offset from rbp.
            rsp: BOOT_STACK_POINTER,
            // Starting stack pointer.
            rbp: BOOT_STACK_POINTER,
            // Must point to zero page address per Linux ABI. This is x86_64 specific.
            rsi: crate::kernel::ZEROPG_START,
            ..Default::default()
        };
        self.vcpu_fd.set_regs(&regs).map_err(Error::KvmIoctl)
    }

    /// Configure sregs.
    pub fn configure_sregs(&self, guest_memory: &GuestMemoryMmap) -> Result<()> {
        let mut sregs = self.vcpu_fd.get_sregs().map_err(Error::KvmIoctl)?;

        // Global descriptor tables.
        let gdt_table: [u64; BOOT_GDT_MAX as usize] = [
            gdt_entry(0, 0, 0),            // NULL
            gdt_entry(0xa09b, 0, 0xfffff), // CODE
            gdt_entry(0xc093, 0, 0xfffff), // DATA
            gdt_entry(0x808b, 0, 0xfffff), // TSS
        ];

        let code_seg = kvm_segment_from_gdt(gdt_table[1], 1);
        let data_seg = kvm_segment_from_gdt(gdt_table[2], 2);
        let tss_seg = kvm_segment_from_gdt(gdt_table[3], 3);

        // Write segments to guest memory.
        write_gdt_table(&gdt_table[..], guest_memory).map_err(Error::GuestMemory)?;
        sregs.gdt.base = BOOT_GDT_OFFSET as u64;
        sregs.gdt.limit = std::mem::size_of_val(&gdt_table) as u16 - 1;

        write_idt_value(0, guest_memory).map_err(Error::GuestMemory)?;
        sregs.idt.base = BOOT_IDT_OFFSET as u64;
        sregs.idt.limit = std::mem::size_of::<u64>() as u16 - 1;

        sregs.cs = code_seg;
        sregs.ds = data_seg;
        sregs.es = data_seg;
        sregs.fs = data_seg;
        sregs.gs = data_seg;
        sregs.ss = data_seg;
        sregs.tr = tss_seg;

        // 64-bit protected mode.
        sregs.cr0 |= X86_CR0_PE;
        sregs.efer |= u64::from(msr_index::EFER_LME | msr_index::EFER_LMA);

        // Start page table configuration.
        // Puts PML4 right after zero page but aligned to 4k.
        let boot_pml4_addr = GuestAddress(PML4_START);
        let boot_pdpte_addr = GuestAddress(PDPTE_START);
        let boot_pde_addr = GuestAddress(PDE_START);

        // Entry covering VA [0..512GB).
        guest_memory
            .write_obj(boot_pdpte_addr.raw_value() as u64 | 0x03, boot_pml4_addr)
            .map_err(Error::GuestMemory)?;

        // Entry covering VA [0..1GB).
        guest_memory
            .write_obj(boot_pde_addr.raw_value() as u64 | 0x03, boot_pdpte_addr)
            .map_err(Error::GuestMemory)?;

        // 512 2MB entries together covering VA [0..1GB).
        // This assumes that the CPU supports 2MB pages (/proc/cpuinfo has 'pse').
        for i in 0..512 {
            guest_memory
                .write_obj((i << 21) + 0x83u64, boot_pde_addr.unchecked_add(i * 8))
                .map_err(Error::GuestMemory)?;
        }

        sregs.cr3 = boot_pml4_addr.raw_value() as u64;
        sregs.cr4 |= X86_CR4_PAE;
        sregs.cr0 |= X86_CR0_PG;

        self.vcpu_fd.set_sregs(&sregs).map_err(Error::KvmIoctl)
    }

    /// Configure FPU.
    pub fn configure_fpu(&self) -> Result<()> {
        let fpu = kvm_fpu {
            fcw: 0x37f,
            mxcsr: 0x1f80,
            ..Default::default()
        };
        self.vcpu_fd.set_fpu(&fpu).map_err(Error::KvmIoctl)
    }

    /// Configures LAPICs. LAPIC0 is set for external interrupts, LAPIC1 is set for NMI.
    pub fn configure_lapic(&self) -> Result<()> {
        let mut klapic = self.vcpu_fd.get_lapic().map_err(Error::KvmIoctl)?;

        let lvt_lint0 = get_klapic_reg(&klapic, APIC_LVT0);
        set_klapic_reg(
            &mut klapic,
            APIC_LVT0,
            set_apic_delivery_mode(lvt_lint0, APIC_MODE_EXTINT),
        );
        let lvt_lint1 = get_klapic_reg(&klapic, APIC_LVT1);
        set_klapic_reg(
            &mut klapic,
            APIC_LVT1,
            set_apic_delivery_mode(lvt_lint1, APIC_MODE_NMI),
        );

        self.vcpu_fd.set_lapic(&klapic).map_err(Error::KvmIoctl)
    }

    /// Trap back after every guest instruction.
    pub fn enable_single_step(&self) -> Result<()> {
        let debug = kvm_guest_debug {
            control: KVM_GUESTDBG_ENABLE | KVM_GUESTDBG_SINGLESTEP,
            ..Default::default()
        };
        self.vcpu_fd
            .set_guest_debug(&debug)
            .map_err(Error::KvmIoctl)
    }

    /// vCPU emulation loop.
    ///
    /// Call into KVM to launch (VMLAUNCH) or resume (VMRESUME) the
    /// virtual CPU. `run` blocks until the next VM exit, which is
    /// classified here; everything the in-kernel irqchip does not handle
    /// funnels into the I/O buses.
    pub fn run_loop(&mut self) -> VcpuOutcome {
        CURRENT_VCPU.with(|cell| cell.store(self as *mut Vcpu, Ordering::Release));

        let outcome = loop {
            if self.exit_flag.load(Ordering::Acquire) {
                break VcpuOutcome::Shutdown;
            }

            match self.vcpu_fd.run() {
                Ok(exit_reason) => match exit_reason {
                    // The VM stopped (triple fault or power off).
                    VcpuExit::Shutdown => {
                        info!("vcpu {}: guest shutdown", self.index);
                        self.exit_flag.store(true, Ordering::Release);
                        break VcpuOutcome::Shutdown;
                    }

                    // This is a PIO write, i.e. the guest is trying to write
                    // something to an I/O port.
                    VcpuExit::IoOut(addr, data) => {
                        self.pio_bus.write(u64::from(addr), data);
                    }

                    // This is a PIO read, i.e. the guest is trying to read
                    // from an I/O port.
                    VcpuExit::IoIn(addr, data) => {
                        self.pio_bus.read(u64::from(addr), data);
                    }

                    // This is a MMIO write, i.e. the guest is trying to write
                    // something to a memory-mapped I/O region.
                    VcpuExit::MmioWrite(addr, data) => {
                        self.mmio_bus.write(addr, data);
                    }

                    // This is a MMIO read, i.e. the guest is trying to read
                    // from a memory-mapped I/O region.
                    VcpuExit::MmioRead(addr, data) => {
                        self.mmio_bus.read(addr, data);
                    }

                    // With the in-kernel irqchip HLT is normally absorbed
                    // by KVM; if one surfaces, idle briefly instead of
                    // spinning back into the guest.
                    VcpuExit::Hlt => {
                        thread::sleep(Duration::from_millis(1));
                    }

                    // Single-stepping or a guest breakpoint.
                    VcpuExit::Debug { .. } => {
                        debug!("vcpu {}: debug exit", self.index);
                    }

                    // A host signal yanked us out of guest mode.
                    VcpuExit::Intr => {}

                    other => {
                        error!("vcpu {}: unhandled VM exit: {:?}", self.index, other);
                        break VcpuOutcome::Fatal;
                    }
                },

                Err(e) => match e.errno() {
                    // Kicked by a signal; loop around and re-enter.
                    libc::EINTR | libc::EAGAIN => {}
                    _ => {
                        error!("vcpu {}: emulation error: {}", self.index, e);
                        break VcpuOutcome::Fatal;
                    }
                },
            }
        };

        if outcome == VcpuOutcome::Fatal {
            self.debug_dump();
            // Take the whole VM down with us.
            self.exit_flag.store(true, Ordering::Release);
        }

        CURRENT_VCPU.with(|cell| cell.store(ptr::null_mut(), Ordering::Release));
        outcome
    }

    /// Print registers, code bytes and the page-table path for RIP.
    /// Runs from the fatal-exit path and from the debug signals.
    pub fn debug_dump(&self) {
        let _guard = PRINT_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        eprintln!("\n #\n # vCPU {} dump:\n #", self.index);
        let regs = match self.vcpu_fd.get_regs() {
            Ok(regs) => regs,
            Err(e) => {
                eprintln!(" ! cannot read registers: {}", e);
                return;
            }
        };
        eprintln!(" rip: {:016x}   rsp: {:016x}   rflags: {:016x}", regs.rip, regs.rsp, regs.rflags);
        eprintln!(" rax: {:016x}   rbx: {:016x}   rcx: {:016x}", regs.rax, regs.rbx, regs.rcx);
        eprintln!(" rdx: {:016x}   rsi: {:016x}   rdi: {:016x}", regs.rdx, regs.rsi, regs.rdi);
        eprintln!(" rbp: {:016x}   r8:  {:016x}   r9:  {:016x}", regs.rbp, regs.r8, regs.r9);
        eprintln!(" r10: {:016x}   r11: {:016x}   r12: {:016x}", regs.r10, regs.r11, regs.r12);
        eprintln!(" r13: {:016x}   r14: {:016x}   r15: {:016x}", regs.r13, regs.r14, regs.r15);

        let sregs = match self.vcpu_fd.get_sregs() {
            Ok(sregs) => sregs,
            Err(e) => {
                eprintln!(" ! cannot read sregs: {}", e);
                return;
            }
        };
        eprintln!(
            " cr0: {:016x}   cr3: {:016x}   cr4: {:016x}   efer: {:016x}",
            sregs.cr0, sregs.cr3, sregs.cr4, sregs.efer
        );
        eprintln!(
            " cs: {:04x}   ds: {:04x}   ss: {:04x}",
            sregs.cs.selector, sregs.ds.selector, sregs.ss.selector
        );

        if let Some(gpa) = self.dump_page_walk(&sregs, regs.rip) {
            let mut code = [0u8; 16];
            if self.mem.read_slice(&mut code, GuestAddress(gpa)).is_ok() {
                let hex: Vec<String> = code.iter().map(|b| format!("{:02x}", b)).collect();
                eprintln!(" code: {}", hex.join(" "));
            }
        }
    }

    /// Walk the guest page tables for `gva`, printing each level, and
    /// return the backing guest physical address if it is mapped.
    fn dump_page_walk(&self, sregs: &kvm_sregs, gva: u64) -> Option<u64> {
        const PRESENT: u64 = 0x1;
        const PAGE_SIZE_FLAG: u64 = 0x80; // PS bit on PDPTE/PDE
        const ADDR_MASK: u64 = 0x000f_ffff_ffff_f000;

        eprintln!(" page walk for {:016x}:", gva);
        let mut table = sregs.cr3 & ADDR_MASK;
        let shifts = [39u32, 30, 21, 12];
        for (level, shift) in shifts.iter().enumerate() {
            let index = (gva >> shift) & 0x1ff;
            let entry: u64 = self
                .mem
                .read_obj(GuestAddress(table + index * 8))
                .ok()?;
            eprintln!("  level {}: [{:3}] = {:016x}", 4 - level, index, entry);
            if entry & PRESENT == 0 {
                eprintln!("  not present");
                return None;
            }
            // Large page: the remaining VA bits offset into it.
            if (*shift == 30 || *shift == 21) && entry & PAGE_SIZE_FLAG != 0 {
                let page_mask = (1u64 << shift) - 1;
                return Some((entry & ADDR_MASK & !page_mask) | (gva & page_mask));
            }
            if *shift == 12 {
                return Some((entry & ADDR_MASK) | (gva & 0xfff));
            }
            table = entry & ADDR_MASK;
        }
        None
    }
}
