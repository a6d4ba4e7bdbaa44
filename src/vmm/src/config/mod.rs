use linux_loader::cmdline::Cmdline;
use std::convert::TryFrom;
use std::path::PathBuf;
use std::str::FromStr;

mod builder;

const KERNEL_CMDLINE_CAPACITY: usize = 4096;
// Default command line: legacy PIC timing, config-mechanism-1 PCI probing
// and the 8250 console, as the emulated board expects.
const KERNEL_CMDLINE_DEFAULT: &str =
    "noapic noacpi pci=conf1 console=ttyS0 i8042.nokbd reboot=k panic=1";
/// Command line console when the paravirtual console is selected.
pub const CMDLINE_VIRTIO_CONSOLE: &str = "console=hvc0";

/// Guests get at least this much RAM.
pub const MIN_MEMORY_MIB: u32 = 64;
/// At most this many disk images.
pub const MAX_DISK_IMAGES: usize = 4;

pub const DEFAULT_HOST_IP: &str = "192.168.33.2";
pub const DEFAULT_GUEST_MAC: &str = "00:11:22:33:44:55";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Kernel configuration file check error")]
    KernelConfig(String),

    #[error("Disk configuration error: {0}")]
    DiskConfig(String),

    #[error("Memory size {0} MiB is below the {MIN_MEMORY_MIB} MiB minimum")]
    MemoryTooSmall(u32),

    #[error("Only {MAX_DISK_IMAGES} disk images are supported")]
    TooManyDisks,

    #[error("Invalid MAC address {0}")]
    GuestMac(String),

    #[error("Invalid console mode {0}, expected serial or virtio")]
    ConsoleMode(String),
}

/// Where stdin is routed and which console the kernel talks to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConsoleMode {
    Serial,
    Virtio,
}

impl Default for ConsoleMode {
    fn default() -> Self {
        ConsoleMode::Serial
    }
}

impl FromStr for ConsoleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "serial" => Ok(ConsoleMode::Serial),
            "virtio" => Ok(ConsoleMode::Virtio),
            other => Err(Error::ConsoleMode(other.to_string())),
        }
    }
}

/// One disk image attachment, parsed from `PATH[,ro]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiskConfig {
    pub path: PathBuf,
    pub read_only: bool,
}

impl FromStr for DiskConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (path, read_only) = match s.split_once(',') {
            Some((path, "ro")) => (path, true),
            Some((_, flag)) => {
                return Err(Error::DiskConfig(format!("unknown disk flag {:?}", flag)))
            }
            None => (s, false),
        };
        if path.is_empty() {
            return Err(Error::DiskConfig("empty disk path".to_string()));
        }
        Ok(DiskConfig {
            path: PathBuf::from(path),
            read_only,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetConfig {
    pub tap_name: String,
    pub host_ip: String,
    pub guest_mac: [u8; 6],
    pub tap_script: Option<PathBuf>,
}

/// "aa:bb:cc:dd:ee:ff" to bytes.
pub fn parse_mac(s: &str) -> Result<[u8; 6], Error> {
    let mut mac = [0u8; 6];
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 6 {
        return Err(Error::GuestMac(s.to_string()));
    }
    for (byte, part) in mac.iter_mut().zip(parts) {
        *byte = u8::from_str_radix(part, 16).map_err(|_| Error::GuestMac(s.to_string()))?;
    }
    Ok(mac)
}

/// VMM configuration.
#[derive(Debug, Default)]
pub struct VMMConfig {
    /// Linux kernel path
    pub kernel: KernelConfig,

    /// Optional initramfs path
    pub initramfs: Option<PathBuf>,

    /// Number of virtual CPUs assigned to the guest
    pub cpus: u8,

    /// Memory amount (in MBytes) assigned to the guest
    pub memory: u32,

    /// Console the guest talks to and stdin routes into
    pub console: ConsoleMode,

    /// Disk images attached as virtio block devices
    pub disks: Vec<DiskConfig>,

    /// Optional virtio network device over a TAP interface
    pub net: Option<NetConfig>,

    /// Attach a virtio entropy device
    pub rng: bool,

    /// Install the register/page-table dump signal handlers
    pub debug: bool,

    /// Trap after every guest instruction
    pub single_step: bool,
}

/// Store the current state of the kernel & its command line
/// arguments
#[derive(Clone, Debug, PartialEq)]
pub struct KernelConfig {
    /// Path to the kernel binary
    pub kernel_path: PathBuf,

    /// Command line arguments for kernel binary run
    pub cmdline: Cmdline,
}

impl TryFrom<String> for KernelConfig {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let path = PathBuf::from(value);
        let kernel = KernelConfig {
            kernel_path: path.clone(),
            ..Default::default()
        };

        if !path.exists() {
            return Err(Error::KernelConfig("File does not exist".to_string()));
        }

        Ok(kernel)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            kernel_path: PathBuf::default(),
            // We define the highest capacity of CMD line so we don't have overflow problems
            cmdline: KernelConfig::default_cmdline(),
        }
    }
}

impl KernelConfig {
    pub fn new(path: String, cfg_cmdline: Option<String>) -> Result<Self, Error> {
        let mut cmdline = Cmdline::new(KERNEL_CMDLINE_CAPACITY);
        cmdline
            .insert_str(cfg_cmdline.unwrap_or_else(|| KERNEL_CMDLINE_DEFAULT.to_string()))
            .map_err(|_| Error::KernelConfig("Capacity error on kernel cmdline".to_string()))?;

        let mut kernel: KernelConfig = TryFrom::try_from(path)?;
        kernel.cmdline = cmdline;

        Ok(kernel)
    }

    pub fn default_cmdline() -> Cmdline {
        let mut cmd = Cmdline::new(KERNEL_CMDLINE_CAPACITY);

        // Safe `unwrap` as sufficient capacity
        cmd.insert_str(KERNEL_CMDLINE_DEFAULT).unwrap();
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryInto;

    #[test]
    fn test_success_try_from_kernelconfig() {
        let valid_path = String::from("./Cargo.toml");
        let kernel: Result<KernelConfig, Error> = valid_path.try_into();
        assert!(kernel.is_ok())
    }

    #[test]
    fn test_sucess_new_kernelconfig() {
        let valid_path = String::from("./Cargo.toml");
        let kernel = KernelConfig::new(valid_path.clone(), None);
        assert!(kernel.is_ok());
        {
            let kernel = kernel.unwrap();
            assert_eq!(kernel.kernel_path.to_str().unwrap(), valid_path);
        }
    }

    #[test]
    fn test_fail_new_kernelconfig() {
        // This is an invalid file
        let valid_path = String::from("./Cargo.tomle");
        let kernel = KernelConfig::new(valid_path, None);
        assert!(kernel.is_err());
    }

    #[test]
    fn test_sucess_new_with_cmd_kernelconfig() {
        // As we know Cargo.toml exists, we ensure a OK result
        let valid_path = String::from("./Cargo.toml");
        let cmdline = String::from(KERNEL_CMDLINE_DEFAULT);
        let kernel = KernelConfig::new(valid_path.clone(), Some(cmdline.clone()));
        assert!(kernel.is_ok());

        {
            let kernel = kernel.unwrap();
            assert_eq!(kernel.cmdline.as_str(), cmdline);
            assert_eq!(kernel.kernel_path.to_str().unwrap(), valid_path);
        }
    }

    #[test]
    fn test_disk_config_parsing() {
        let plain: DiskConfig = "disk.img".parse().unwrap();
        assert_eq!(
            plain,
            DiskConfig {
                path: PathBuf::from("disk.img"),
                read_only: false,
            }
        );

        let ro: DiskConfig = "/images/root.img,ro".parse().unwrap();
        assert!(ro.read_only);

        assert!("disk.img,rw".parse::<DiskConfig>().is_err());
        assert!("".parse::<DiskConfig>().is_err());
    }

    #[test]
    fn test_console_mode_parsing() {
        assert_eq!("serial".parse::<ConsoleMode>().unwrap(), ConsoleMode::Serial);
        assert_eq!("virtio".parse::<ConsoleMode>().unwrap(), ConsoleMode::Virtio);
        assert!("vga".parse::<ConsoleMode>().is_err());
    }

    #[test]
    fn test_mac_parsing() {
        assert_eq!(
            parse_mac(DEFAULT_GUEST_MAC).unwrap(),
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]
        );
        assert!(parse_mac("00:11:22:33:44").is_err());
        assert!(parse_mac("00:11:22:33:44:zz").is_err());
    }
}
