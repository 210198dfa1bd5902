use super::{SlotError, Slots};
use crc::crc32;
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// One file per slot in a directory, each block followed by its CRC-32
/// in little-endian order.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
    count: u8,
}

impl FileSlots {
    pub fn new<P: AsRef<Path>>(dir: P, count: u8) -> std::io::Result<FileSlots> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(FileSlots { dir, count })
    }

    fn path(&self, slot: u8) -> PathBuf {
        self.dir.join(format!("slot{}.bin", slot))
    }

    fn check(&self, slot: u8) -> Result<(), SlotError> {
        if slot >= self.count {
            return Err(SlotError::NoSuchSlot(slot));
        }
        Ok(())
    }
}

impl Slots for FileSlots {
    fn slot_count(&self) -> u8 {
        self.count
    }

    fn read_block(&mut self, slot: u8) -> Result<Vec<u8>, SlotError> {
        self.check(slot)?;
        let mut bytes = vec![];
        match File::open(self.path(slot)) {
            Ok(mut file) => file.read_to_end(&mut bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(SlotError::Empty(slot)),
            Err(e) => return Err(e.into()),
        };
        if bytes.len() < 4 {
            return Err(SlotError::Checksum(slot));
        }
        let trailer = bytes.split_off(bytes.len() - 4);
        let sum = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
        if crc32::checksum_ieee(&bytes) != sum {
            return Err(SlotError::Checksum(slot));
        }
        Ok(bytes)
    }

    fn persist_block(&mut self, slot: u8, block: &[u8]) -> Result<(), SlotError> {
        self.check(slot)?;
        let mut file = File::create(self.path(slot))?;
        file.write_all(block)?;
        file.write_all(&crc32::checksum_ieee(block).to_le_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}
