// SPDX-License-Identifier: Apache-2.0 OR BSD-3-Clause

//! Raw disk image access for the virtio block device.

use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::FileExt;
use std::path::Path;

pub const SECTOR_SIZE: u64 = 512;

#[derive(Debug, thiserror::Error)]
pub enum DiskError {
    #[error("cannot open disk image: {0}")]
    Open(#[source] io::Error),

    #[error("disk image size {0} is not a multiple of {SECTOR_SIZE}")]
    UnalignedSize(u64),

    #[error("write to read-only disk image")]
    ReadOnly,

    #[error("access beyond end of image at offset {0:#x}")]
    OutOfBounds(u64),

    #[error("disk i/o failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DiskError>;

pub struct DiskImage {
    file: std::fs::File,
    read_only: bool,
    size: u64,
}

impl DiskImage {
    pub fn open<P: AsRef<Path>>(path: P, read_only: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(!read_only)
            .open(path)
            .map_err(DiskError::Open)?;
        let size = file.metadata().map_err(DiskError::Open)?.len();
        if size % SECTOR_SIZE != 0 {
            return Err(DiskError::UnalignedSize(size));
        }
        Ok(DiskImage {
            file,
            read_only,
            size,
        })
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sectors(&self) -> u64 {
        self.size / SECTOR_SIZE
    }

    fn check_bounds(&self, offset: u64, len: usize) -> Result<()> {
        let end = offset
            .checked_add(len as u64)
            .ok_or(DiskError::OutOfBounds(offset))?;
        if end > self.size {
            return Err(DiskError::OutOfBounds(offset));
        }
        Ok(())
    }

    pub fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        self.check_bounds(offset, buf.len())?;
        self.file.read_exact_at(buf, offset)?;
        Ok(())
    }

    pub fn write_at(&self, buf: &[u8], offset: u64) -> Result<()> {
        if self.read_only {
            return Err(DiskError::ReadOnly);
        }
        self.check_bounds(offset, buf.len())?;
        self.file.write_all_at(buf, offset)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        if self.read_only {
            return Ok(());
        }
        self.file.sync_data()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vmm_sys_util::tempfile::TempFile;

    fn image(sectors: u64) -> (TempFile, DiskImage) {
        let tmp = TempFile::new().unwrap();
        tmp.as_file()
            .write_all(&vec![0u8; (sectors * SECTOR_SIZE) as usize])
            .unwrap();
        let disk = DiskImage::open(tmp.as_path(), false).unwrap();
        (tmp, disk)
    }

    #[test]
    fn test_round_trip() {
        let (_tmp, disk) = image(4);
        assert_eq!(disk.sectors(), 4);

        let data = [0xabu8; 512];
        disk.write_at(&data, SECTOR_SIZE).unwrap();
        disk.flush().unwrap();

        let mut back = [0u8; 512];
        disk.read_at(&mut back, SECTOR_SIZE).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_unaligned_image_rejected() {
        let tmp = TempFile::new().unwrap();
        tmp.as_file().write_all(&[0u8; 100]).unwrap();
        assert!(matches!(
            DiskImage::open(tmp.as_path(), false),
            Err(DiskError::UnalignedSize(100))
        ));
    }

    #[test]
    fn test_bounds_and_read_only() {
        let (_tmp, disk) = image(2);
        let mut buf = [0u8; 512];
        assert!(matches!(
            disk.read_at(&mut buf, 2 * SECTOR_SIZE),
            Err(DiskError::OutOfBounds(_))
        ));

        let tmp = TempFile::new().unwrap();
        tmp.as_file().write_all(&[0u8; 1024]).unwrap();
        let ro = DiskImage::open(tmp.as_path(), true).unwrap();
        assert!(matches!(
            ro.write_at(&buf, 0),
            Err(DiskError::ReadOnly)
        ));
        // Flushing a read-only image is a no-op, not an error.
        ro.flush().unwrap();
    }
}
