use clap::Parser;
use log::LevelFilter;
use vmm::config::{ConsoleMode, VMMConfig};
use vmm::VMM;

#[derive(Parser)]
#[clap(version = "0.1", about = "A minimal KVM monitor")]
struct VMMOpts {
    /// Linux kernel path (bzImage or vmlinux)
    #[clap(short, long)]
    kernel: String,

    /// Initramfs path
    #[clap(short, long)]
    initramfs: Option<String>,

    /// Kernel command line, replacing the built-in default
    #[clap(short, long)]
    params: Option<String>,

    /// Number of virtual CPUs assigned to the guest
    #[clap(short, long, default_value = "1")]
    cpus: u8,

    /// Memory amount (in MBytes) assigned to the guest
    #[clap(short, long, default_value = "512")]
    memory: u32,

    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences))]
    verbose: i32,

    /// Console to use: serial or virtio
    #[clap(long, default_value = "serial")]
    console: String,

    /// Disk image, as PATH[,ro]; may be given up to four times
    #[clap(short, long)]
    disk: Vec<String>,

    /// Enable the virtio Random Number Generator
    #[clap(long)]
    rng: bool,

    /// TAP interface name used to give network to the guest
    #[clap(long)]
    net: Option<String>,

    /// Assign this address to the host side networking
    #[clap(long)]
    host_ip: Option<String>,

    /// Assign this address to the guest side NIC
    #[clap(long)]
    guest_mac: Option<String>,

    /// Script run against the freshly created TAP device
    #[clap(long)]
    tapscript: Option<String>,

    /// Enable debug messages
    #[clap(long)]
    debug: bool,

    /// Enable single stepping
    #[clap(long)]
    single_step: bool,
}

#[derive(Debug)]
pub enum Error {
    Config(vmm::config::Error),

    VmmNew(vmm::Error),

    VmmConfigure(vmm::Error),

    VmmRun(vmm::Error),
}

fn build_config(opts: &VMMOpts) -> Result<VMMConfig, Error> {
    let console: ConsoleMode = opts.console.parse().map_err(Error::Config)?;

    VMMConfig::builder(opts.cpus, opts.memory, &opts.kernel)
        .cmdline(opts.params.clone())
        .initramfs(opts.initramfs.clone())
        .console(console)
        .disks(opts.disk.clone())
        .rng(opts.rng)
        .tap(opts.net.clone())
        .host_ip(opts.host_ip.clone())
        .guest_mac(opts.guest_mac.clone())
        .tap_script(opts.tapscript.clone())
        .debug(opts.debug)
        .single_step(opts.single_step)
        .build()
        .map_err(Error::Config)
}

fn run(opts: VMMOpts) -> Result<(), Error> {
    let config = build_config(&opts)?;

    // Create a new VMM
    let mut vmm = VMM::new().map_err(Error::VmmNew)?;

    // Configure the VMM:
    // * Number of virtual CPUs
    // * Memory size (in MB)
    // * Path to a Linux kernel, optional initramfs
    // * Devices built from the remaining options
    vmm.configure(config).map_err(Error::VmmConfigure)?;

    // Run the VMM
    vmm.run().map_err(Error::VmmRun)?;

    Ok(())
}

fn main() {
    let opts: VMMOpts = VMMOpts::parse();

    let level = match (opts.debug, opts.verbose) {
        (false, 0) => LevelFilter::Info,
        (true, 0) | (false, 1) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(opts) {
        Ok(()) => {}
        Err(Error::VmmRun(vmm::Error::VcpuFatal)) => {
            eprintln!("fatal vCPU exit");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {:?}", e);
            std::process::exit(2);
        }
    }
}
