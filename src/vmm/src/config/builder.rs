use crate::config::{
    parse_mac, ConsoleMode, DiskConfig, Error, NetConfig, VMMConfig, DEFAULT_GUEST_MAC,
    DEFAULT_HOST_IP, MAX_DISK_IMAGES, MIN_MEMORY_MIB,
};
use std::path::PathBuf;
use std::str::FromStr;

impl VMMConfig {
    /// Create the builder to generate a vmm config
    pub fn builder(num_vcpus: u8, mem_size_mb: u32, kernel_path: &str) -> VMMConfigBuilder {
        VMMConfigBuilder::new(num_vcpus, mem_size_mb, kernel_path)
    }
}

/// See VMMConfig for explanation about these options
#[derive(Debug, Default)]
pub struct VMMConfigBuilder {
    kernel: String,
    cmdline: Option<String>,
    initramfs: Option<PathBuf>,
    cpus: u8,
    memory: u32,
    console: ConsoleMode,
    disks: Vec<String>,
    tap: Option<String>,
    host_ip: Option<String>,
    guest_mac: Option<String>,
    tap_script: Option<PathBuf>,
    rng: bool,
    debug: bool,
    single_step: bool,
}

impl VMMConfigBuilder {
    pub fn new(num_vcpus: u8, mem_size_mb: u32, kernel_path: &str) -> Self {
        VMMConfigBuilder {
            cpus: num_vcpus,
            memory: mem_size_mb,
            kernel: kernel_path.to_string(),
            ..Default::default()
        }
    }

    /// Validate everything and produce the config the VMM consumes.
    pub fn build(self) -> Result<VMMConfig, Error> {
        if self.memory < MIN_MEMORY_MIB {
            return Err(Error::MemoryTooSmall(self.memory));
        }
        if self.disks.len() > MAX_DISK_IMAGES {
            return Err(Error::TooManyDisks);
        }

        let kernel = crate::config::KernelConfig::new(self.kernel, self.cmdline)?;

        let disks = self
            .disks
            .iter()
            .map(|spec| DiskConfig::from_str(spec))
            .collect::<Result<Vec<_>, _>>()?;

        let net = match self.tap {
            Some(tap_name) => Some(NetConfig {
                tap_name,
                host_ip: self.host_ip.unwrap_or_else(|| DEFAULT_HOST_IP.to_string()),
                guest_mac: parse_mac(
                    self.guest_mac
                        .as_deref()
                        .unwrap_or(DEFAULT_GUEST_MAC),
                )?,
                tap_script: self.tap_script,
            }),
            None => None,
        };

        Ok(VMMConfig {
            kernel,
            initramfs: self.initramfs,
            cpus: self.cpus.max(1),
            memory: self.memory,
            console: self.console,
            disks,
            net,
            rng: self.rng,
            debug: self.debug,
            single_step: self.single_step,
        })
    }

    pub fn cmdline(mut self, cmdline: Option<String>) -> Self {
        self.cmdline = cmdline;
        self
    }

    pub fn initramfs(mut self, initramfs: Option<String>) -> Self {
        self.initramfs = initramfs.map(PathBuf::from);
        self
    }

    pub fn console(mut self, console: ConsoleMode) -> Self {
        self.console = console;
        self
    }

    pub fn disks(mut self, disks: Vec<String>) -> Self {
        self.disks = disks;
        self
    }

    pub fn tap(mut self, tap_name: Option<String>) -> Self {
        self.tap = tap_name;
        self
    }

    pub fn host_ip(mut self, host_ip: Option<String>) -> Self {
        self.host_ip = host_ip;
        self
    }

    pub fn guest_mac(mut self, guest_mac: Option<String>) -> Self {
        self.guest_mac = guest_mac;
        self
    }

    pub fn tap_script(mut self, tap_script: Option<String>) -> Self {
        self.tap_script = tap_script.map(PathBuf::from);
        self
    }

    pub fn rng(mut self, rng: bool) -> Self {
        self.rng = rng;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn single_step(mut self, single_step: bool) -> Self {
        self.single_step = single_step;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_minimal() {
        let config = VMMConfig::builder(1, 128, "./Cargo.toml").build().unwrap();
        assert_eq!(config.cpus, 1);
        assert_eq!(config.memory, 128);
        assert_eq!(config.console, ConsoleMode::Serial);
        assert!(config.disks.is_empty());
        assert!(config.net.is_none());
    }

    #[test]
    fn test_build_rejects_small_memory() {
        assert!(matches!(
            VMMConfig::builder(1, 32, "./Cargo.toml").build(),
            Err(Error::MemoryTooSmall(32))
        ));
    }

    #[test]
    fn test_build_rejects_disk_overflow() {
        let disks: Vec<String> = (0..5).map(|i| format!("disk{}.img", i)).collect();
        assert!(matches!(
            VMMConfig::builder(1, 128, "./Cargo.toml").disks(disks).build(),
            Err(Error::TooManyDisks)
        ));
    }

    #[test]
    fn test_build_net_defaults() {
        let config = VMMConfig::builder(1, 128, "./Cargo.toml")
            .tap(Some("tap0".to_string()))
            .build()
            .unwrap();
        let net = config.net.unwrap();
        assert_eq!(net.tap_name, "tap0");
        assert_eq!(net.host_ip, DEFAULT_HOST_IP);
        assert_eq!(net.guest_mac, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert!(net.tap_script.is_none());
    }

    #[test]
    fn test_zero_cpus_rounds_up() {
        let config = VMMConfig::builder(0, 128, "./Cargo.toml").build().unwrap();
        assert_eq!(config.cpus, 1);
    }
}
