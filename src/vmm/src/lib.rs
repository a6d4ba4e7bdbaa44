// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

#![cfg(target_arch = "x86_64")]

extern crate libc;

extern crate linux_loader;
extern crate vm_memory;

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use kvm_bindings::{kvm_pit_config, kvm_userspace_memory_region, KVM_MAX_CPUID_ENTRIES};
use kvm_ioctls::{Kvm, VmFd};
use linux_loader::loader;
use log::{info, warn};
use vm_memory::{Address, GuestAddress, GuestMemory, GuestMemoryRegion};

pub mod config;
use config::{ConsoleMode, VMMConfig, CMDLINE_VIRTIO_CONSOLE};

mod bus;
mod cpu;
mod devices;
mod epoll_context;
mod irq;
mod kernel;
mod memory;
mod timer;
mod virtio;
mod worker;

use bus::Bus;
use cpu::{cpuid, mptable, DebugTable, Vcpu, VcpuOutcome};
use devices::disk::DiskImage;
use devices::i8042::{I8042, I8042_PORT_BASE, I8042_PORT_SIZE};
use devices::pci::{
    PciConfigIo, PciConfigSpace, PCI_CONFIG_PORT, PCI_CONFIG_PORT_SIZE, VIRTIO_PCI_IO_BASE,
    VIRTIO_PCI_IO_SIZE,
};
use devices::rtc::{Rtc, RTC_PORT_BASE, RTC_PORT_SIZE};
use devices::serial::{SerialConsole, SERIAL_IRQ, SERIAL_PORT_BASE, SERIAL_PORT_SIZE};
use devices::tap::Tap;
use epoll_context::{EpollContext, EPOLL_EVENTS_LEN};
use irq::{GsiAllocator, IrqLine};
use memory::{GuestRam, MemoryError};
use timer::TickThread;
use virtio::console::Console;
use virtio::pci::VirtioPciDevice;
use virtio::{VirtioDevice, VirtioInterrupt};
use worker::WorkerPool;

// PCI class codes, by device flavor.
const PCI_CLASS_STORAGE: u32 = 0x018000;
const PCI_CLASS_NETWORK: u32 = 0x020000;
const PCI_CLASS_COMM: u32 = 0x078000;
const PCI_CLASS_OTHER: u32 = 0xff0000;

#[derive(Debug)]

/// VMM errors.
pub enum Error {
    /// Failed to write boot parameters to guest memory.
    BootConfigure(linux_loader::configurator::Error),
    /// Error configuring the kernel command line.
    Cmdline(linux_loader::cmdline::Error),
    /// Failed to load kernel.
    KernelLoad(loader::Error),
    /// Failed to load the initramfs.
    InitramfsLoad,
    /// No suitable address for the initramfs.
    InitramfsAddress,
    /// Invalid E820 configuration.
    E820Configuration,
    /// Highmem start address is past the guest memory end.
    HimemStartPastMemEnd,
    /// I/O error.
    IO(io::Error),
    /// Error issuing an ioctl to KVM.
    KvmIoctl(kvm_ioctls::Error),
    /// vCPU errors.
    Vcpu(cpu::Error),
    /// Memory error.
    Memory(MemoryError),
    /// I/O bus assembly error.
    Bus(bus::BusError),
    /// Disk image error.
    Disk(devices::disk::DiskError),
    /// TAP device error.
    Tap(devices::Error),
    /// A vCPU hit an unrecoverable exit.
    VcpuFatal,
}

/// Dedicated [`Result`](https://doc.rust-lang.org/std/result/) type.
pub type Result<T> = std::result::Result<T, Error>;

/// Initramfs placement in guest memory.
pub struct InitramfsConfig {
    pub address: GuestAddress,
    pub size: usize,
}

pub(crate) fn pagesize() -> usize {
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
}

pub struct VMM {
    kvm: Kvm,
    vm_fd: Arc<VmFd>,

    pio_bus: Option<Arc<Bus>>,
    mmio_bus: Option<Arc<Bus>>,
    serial: Arc<Mutex<SerialConsole>>,
    console: Option<Arc<Mutex<Console>>>,
    console_mode: ConsoleMode,
    pool: Option<Arc<WorkerPool>>,

    vcpus: Vec<Vcpu>,
    vcpu_handles: Vec<thread::JoinHandle<VcpuOutcome>>,
    vcpu_thread_ids: Arc<Mutex<Vec<libc::pthread_t>>>,
    exit_flag: Arc<AtomicBool>,
    tick: Option<TickThread>,
    single_step: bool,
    debug: bool,

    // Dropped last: every device and vCPU borrows the guest mapping.
    ram: Option<GuestRam>,
}

impl VMM {
    /// Create a new VMM.
    pub fn new() -> Result<Self> {
        // Open /dev/kvm and get a file descriptor to it.
        let kvm = Kvm::new().map_err(Error::KvmIoctl)?;

        // Create a KVM VM object.
        // KVM returns a file descriptor to the VM object.
        let vm_fd = kvm.create_vm().map_err(Error::KvmIoctl)?;

        let serial = Arc::new(Mutex::new(
            SerialConsole::new().map_err(Error::IO)?,
        ));

        Ok(VMM {
            kvm,
            vm_fd: Arc::new(vm_fd),
            pio_bus: None,
            mmio_bus: None,
            serial,
            console: None,
            console_mode: ConsoleMode::Serial,
            pool: None,
            vcpus: vec![],
            vcpu_handles: vec![],
            vcpu_thread_ids: Arc::new(Mutex::new(Vec::new())),
            exit_flag: Arc::new(AtomicBool::new(false)),
            tick: None,
            single_step: false,
            debug: false,
            ram: None,
        })
    }

    fn configure_memory(&mut self, mem_size_mb: u32) -> Result<()> {
        if let Some(host_mib) = memory::host_ram_mib() {
            if u64::from(mem_size_mb) > host_mib {
                warn!(
                    "guest memory size {} MiB exceeds host physical RAM of {} MiB",
                    mem_size_mb, host_mib
                );
            }
        }

        let ram = GuestRam::new(u64::from(mem_size_mb) << 20).map_err(Error::Memory)?;

        for (index, region) in ram.mem().iter().enumerate() {
            let kvm_memory_region = kvm_userspace_memory_region {
                slot: index as u32,
                guest_phys_addr: region.start_addr().raw_value(),
                memory_size: region.len() as u64,
                userspace_addr: ram.host_address(region.start_addr()).map_err(Error::Memory)?
                    as u64,
                flags: 0,
            };

            // Register the guest RAM with KVM.
            unsafe { self.vm_fd.set_user_memory_region(kvm_memory_region) }
                .map_err(Error::KvmIoctl)?;
        }

        self.ram = Some(ram);
        Ok(())
    }

    /// Assemble the interrupt controller and every device on the buses.
    fn configure_io(&mut self, config: &VMMConfig) -> Result<()> {
        // First, create the irqchip.
        // On `x86_64`, this _must_ be created _before_ the vCPUs.
        // It sets up the virtual IOAPIC, virtual PIC, and sets up the future vCPUs for local APIC.
        // When in doubt, look in the kernel for `KVM_CREATE_IRQCHIP`.
        // https://elixir.bootlin.com/linux/latest/source/arch/x86/kvm/x86.c
        self.vm_fd.create_irq_chip().map_err(Error::KvmIoctl)?;

        // The PIT drives the guest's early timekeeping.
        self.vm_fd
            .create_pit2(kvm_pit_config::default())
            .map_err(Error::KvmIoctl)?;

        // The 8250 interrupts through an irqfd on IRQ 4.
        self.vm_fd
            .register_irqfd(
                &self
                    .serial
                    .lock()
                    .unwrap()
                    .eventfd()
                    .map_err(Error::IO)?,
                SERIAL_IRQ,
            )
            .map_err(Error::KvmIoctl)?;

        let mem = Arc::clone(self.ram.as_ref().unwrap().mem());
        let vm_fd = Arc::clone(&self.vm_fd);
        let pool = Arc::new(WorkerPool::new_for_host());
        let mut pio = Bus::new();
        let mut pci = PciConfigIo::new();
        let mut gsi = GsiAllocator::new();
        let mut next_io_base = VIRTIO_PCI_IO_BASE;

        pio.register(
            u64::from(SERIAL_PORT_BASE),
            u64::from(SERIAL_PORT_SIZE),
            self.serial.clone(),
        )
        .map_err(Error::Bus)?;
        pio.register(
            u64::from(RTC_PORT_BASE),
            u64::from(RTC_PORT_SIZE),
            Arc::new(Mutex::new(Rtc::new())),
        )
        .map_err(Error::Bus)?;
        pio.register(
            u64::from(I8042_PORT_BASE),
            u64::from(I8042_PORT_SIZE),
            Arc::new(Mutex::new(I8042::new(self.exit_flag.clone()))),
        )
        .map_err(Error::Bus)?;

        let mut add_virtio =
            |device: Arc<Mutex<dyn VirtioDevice>>, class: u32, pio: &mut Bus, pci: &mut PciConfigIo| -> Result<()> {
                let subsystem_id = device.lock().unwrap().device_type() as u16;
                let line = gsi.allocate();
                let interrupt = Arc::new(VirtioInterrupt::new(Arc::new(IrqLine::new(
                    Arc::clone(&vm_fd),
                    line,
                ))));
                let io_base = next_io_base;
                next_io_base += VIRTIO_PCI_IO_SIZE;

                let transport = VirtioPciDevice::new(device, Arc::clone(&mem), interrupt);
                pio.register(
                    u64::from(io_base),
                    u64::from(VIRTIO_PCI_IO_SIZE),
                    Arc::new(Mutex::new(transport)),
                )
                .map_err(Error::Bus)?;
                pci.register(Arc::new(Mutex::new(PciConfigSpace::new_virtio(
                    subsystem_id,
                    class,
                    io_base,
                    line,
                ))));
                info!(
                    "virtio device {} at {:#x}, irq {}",
                    subsystem_id, io_base, line
                );
                Ok(())
            };

        for (index, disk_config) in config.disks.iter().enumerate() {
            let disk =
                DiskImage::open(&disk_config.path, disk_config.read_only).map_err(Error::Disk)?;
            info!(
                "disk {}: {} ({} sectors{})",
                index,
                disk_config.path.display(),
                disk.sectors(),
                if disk.read_only() { ", ro" } else { "" }
            );
            let block = virtio::block::Block::new(disk, Arc::clone(&pool), index);
            add_virtio(
                Arc::new(Mutex::new(block)),
                PCI_CLASS_STORAGE,
                &mut pio,
                &mut pci,
            )?;
        }

        if config.console == ConsoleMode::Virtio {
            let console = Arc::new(Mutex::new(Console::new()));
            self.console = Some(Arc::clone(&console));
            add_virtio(console, PCI_CLASS_COMM, &mut pio, &mut pci)?;
        }

        if config.rng {
            let rng = virtio::rng::Rng::new(Arc::clone(&pool)).map_err(Error::IO)?;
            add_virtio(
                Arc::new(Mutex::new(rng)),
                PCI_CLASS_OTHER,
                &mut pio,
                &mut pci,
            )?;
        }

        if let Some(net_config) = &config.net {
            let tap = Tap::open_named(&net_config.tap_name).map_err(Error::Tap)?;
            if let Some(script) = &net_config.tap_script {
                tap.run_setup_script(script, &net_config.host_ip)
                    .map_err(Error::Tap)?;
            }
            let net = virtio::net::Net::new(tap, net_config.guest_mac, Arc::clone(&pool));
            add_virtio(
                Arc::new(Mutex::new(net)),
                PCI_CLASS_NETWORK,
                &mut pio,
                &mut pci,
            )?;
        }

        pio.register(
            u64::from(PCI_CONFIG_PORT),
            u64::from(PCI_CONFIG_PORT_SIZE),
            Arc::new(Mutex::new(pci)),
        )
        .map_err(Error::Bus)?;

        // The route tables are read-only from here on.
        self.pio_bus = Some(Arc::new(pio));
        self.mmio_bus = Some(Arc::new(Bus::new()));
        self.pool = Some(pool);
        self.console_mode = config.console;

        Ok(())
    }

    fn configure_vcpus(&mut self, num_vcpus: u8, entry: GuestAddress) -> Result<()> {
        let mem = Arc::clone(self.ram.as_ref().unwrap().mem());

        mptable::setup_mptable(&mem, num_vcpus)
            .map_err(|e| Error::Vcpu(cpu::Error::Mptable(e)))?;

        let base_cpuid = self
            .kvm
            .get_supported_cpuid(KVM_MAX_CPUID_ENTRIES)
            .map_err(Error::KvmIoctl)?;

        for index in 0..num_vcpus {
            let vcpu = Vcpu::new(
                &self.vm_fd,
                index.into(),
                Arc::clone(self.pio_bus.as_ref().unwrap()),
                Arc::clone(self.mmio_bus.as_ref().unwrap()),
                Arc::clone(&mem),
                Arc::clone(&self.exit_flag),
            )
            .map_err(Error::Vcpu)?;

            // Set CPUID.
            let mut vcpu_cpuid = base_cpuid.clone();
            cpuid::filter_cpuid(
                &self.kvm,
                index as usize,
                num_vcpus as usize,
                &mut vcpu_cpuid,
            );
            vcpu.configure_cpuid(&vcpu_cpuid).map_err(Error::Vcpu)?;

            // Configure MSRs (model specific registers).
            vcpu.configure_msrs().map_err(Error::Vcpu)?;

            // Configure regs, sregs and fpu.
            vcpu.configure_regs(entry).map_err(Error::Vcpu)?;
            vcpu.configure_sregs(&mem).map_err(Error::Vcpu)?;
            vcpu.configure_fpu().map_err(Error::Vcpu)?;

            // Configure LAPICs.
            vcpu.configure_lapic().map_err(Error::Vcpu)?;

            if self.single_step {
                vcpu.enable_single_step().map_err(Error::Vcpu)?;
            }

            self.vcpus.push(vcpu);
        }

        Ok(())
    }

    /// Configure the VMM from the front-end's settings: memory, devices,
    /// the kernel image, and finally the vCPUs.
    pub fn configure(&mut self, config: VMMConfig) -> Result<()> {
        self.single_step = config.single_step;
        self.debug = config.debug;
        self.configure_memory(config.memory)?;
        self.configure_io(&config)?;

        let mut kernel = config.kernel;
        if config.console == ConsoleMode::Virtio {
            // The last console= on the command line wins.
            kernel
                .cmdline
                .insert_str(CMDLINE_VIRTIO_CONSOLE)
                .map_err(Error::Cmdline)?;
        }
        if !config.disks.is_empty() && !kernel.cmdline.as_str().contains("root=") {
            kernel
                .cmdline
                .insert_str("root=/dev/vda rw")
                .map_err(Error::Cmdline)?;
        }

        info!(
            "booting {} with {} MiB, {} vcpu(s)",
            kernel.kernel_path.display(),
            config.memory,
            config.cpus
        );

        let mem = Arc::clone(self.ram.as_ref().unwrap().mem());
        let loaded = kernel::kernel_setup(&mem, kernel, config.initramfs)?;
        self.configure_vcpus(config.cpus, loaded.entry)?;

        Ok(())
    }

    fn start_vcpus(&mut self) {
        for mut vcpu in self.vcpus.drain(..) {
            let thread_ids = Arc::clone(&self.vcpu_thread_ids);
            let handle = thread::Builder::new()
                .name(format!("vcpu{}", vcpu.index))
                .spawn(move || {
                    thread_ids
                        .lock()
                        .unwrap()
                        .push(unsafe { libc::pthread_self() });
                    vcpu.run_loop()
                })
                .expect("failed to spawn vCPU thread");
            self.vcpu_handles.push(handle);
        }
    }

    /// Kick every vCPU out of `KVM_RUN` and wait for the threads.
    fn join_vcpus(&mut self) -> Result<()> {
        for &tid in self.vcpu_thread_ids.lock().unwrap().iter() {
            unsafe {
                libc::pthread_kill(tid, cpu::SIG_VCPU_KICK);
            }
        }

        let mut fatal = false;
        for handle in self.vcpu_handles.drain(..) {
            match handle.join() {
                Ok(VcpuOutcome::Shutdown) => {}
                Ok(VcpuOutcome::Fatal) | Err(_) => fatal = true,
            }
        }
        self.vcpu_thread_ids.lock().unwrap().clear();

        if fatal {
            Err(Error::VcpuFatal)
        } else {
            Ok(())
        }
    }

    /// Run the guest to completion: start the vCPUs and the tick thread,
    /// pump stdin into the active console, and tear everything down once
    /// the guest shuts down.
    pub fn run(&mut self) -> Result<()> {
        cpu::install_kick_handler().map_err(Error::Vcpu)?;
        if self.debug {
            cpu::install_debug_handlers().map_err(Error::Vcpu)?;
        }

        let vcpu_count = {
            let count = self.vcpus.len();
            self.start_vcpus();
            count
        };

        // Wait until every vCPU thread registered itself, then hand the
        // debug signal handlers their table.
        while self.vcpu_thread_ids.lock().unwrap().len() < vcpu_count {
            thread::sleep(Duration::from_millis(1));
        }
        if self.debug {
            cpu::publish_debug_table(DebugTable {
                threads: self.vcpu_thread_ids.lock().unwrap().clone(),
                serial: Arc::clone(&self.serial),
            });
        }

        self.tick = Some(TickThread::start(
            Arc::clone(&self.serial),
            self.console.clone(),
        ));

        // Main thread: route stdin to whichever console is active.
        let epoll = EpollContext::new().map_err(Error::IO)?;
        let mut stdin_open = epoll.add_stdin().is_ok();
        let mut events = vec![epoll::Event::new(epoll::Events::empty(), 0); EPOLL_EVENTS_LEN];
        let mut input = [0u8; 64];

        while !self.exit_flag.load(Ordering::Acquire) {
            let ready = match epoll.wait(100, &mut events) {
                Ok(ready) => ready,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::IO(e)),
            };
            if !stdin_open || ready == 0 {
                continue;
            }

            match io::stdin().read(&mut input) {
                Ok(0) => {
                    // EOF: stop polling, keep waiting for the guest.
                    let _ = epoll.remove_stdin();
                    stdin_open = false;
                }
                Ok(count) => match self.console_mode {
                    ConsoleMode::Serial => {
                        self.serial.lock().unwrap().queue_input(&input[..count]);
                    }
                    ConsoleMode::Virtio => {
                        if let Some(console) = &self.console {
                            console.lock().unwrap().queue_input(&input[..count]);
                        }
                    }
                },
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::IO(e)),
            }
        }

        // Teardown: timer first so no tick fires into dying devices,
        // then the vCPUs, then the worker pool.
        if let Some(tick) = &mut self.tick {
            tick.stop();
        }
        let outcome = self.join_vcpus();
        if let Some(pool) = &self.pool {
            pool.shutdown();
        }

        if outcome.is_ok() {
            info!("guest session ended normally");
        }
        outcome
    }
}
