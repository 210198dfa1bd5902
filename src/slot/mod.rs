/*!
## Rust Slot Module

Saved images of the machine. A block is the packed program store padded
to `program_size`, then the packed variable store padded to
`variables_size`. Slot 0 is the built-in program and can't be written.

*/

use crate::lang::{ErrorCode, Line};
use crate::mach::{Config, Program, Var};

mod file;
mod http;
mod link;

pub use file::FileSlots;
pub use http::HttpSlots;
pub use link::{serve, LinkSlots, ACK, NAK};

/// Storage for whole blocks.
pub trait Slots {
    /// Slots numbered `0..slot_count`.
    fn slot_count(&self) -> u8;
    fn read_block(&mut self, slot: u8) -> Result<Vec<u8>, SlotError>;
    fn persist_block(&mut self, slot: u8, block: &[u8]) -> Result<(), SlotError>;
}

#[derive(Debug)]
pub enum SlotError {
    NoSuchSlot(u8),
    ReadOnly,
    Empty(u8),
    Io(std::io::Error),
    Checksum(u8),
    Protocol(&'static str),
    Corrupt,
    Http(reqwest::Error),
}

impl SlotError {
    /// The BASIC error a failed SAVE or LOAD stops with.
    pub fn code(&self) -> ErrorCode {
        match self {
            SlotError::NoSuchSlot(_) | SlotError::ReadOnly => ErrorCode::SubscriptOutOfRange,
            _ => ErrorCode::Stopped,
        }
    }
}

impl std::fmt::Display for SlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SlotError::NoSuchSlot(n) => write!(f, "no slot {}", n),
            SlotError::ReadOnly => write!(f, "slot 0 is read only"),
            SlotError::Empty(n) => write!(f, "slot {} is empty", n),
            SlotError::Io(e) => write!(f, "slot i/o: {}", e),
            SlotError::Checksum(n) => write!(f, "slot {} failed its checksum", n),
            SlotError::Protocol(s) => write!(f, "slot link: {}", s),
            SlotError::Corrupt => write!(f, "slot image is corrupt"),
            SlotError::Http(e) => write!(f, "slot http: {}", e),
        }
    }
}

impl std::error::Error for SlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlotError::Io(e) => Some(e),
            SlotError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(e: std::io::Error) -> SlotError {
        SlotError::Io(e)
    }
}

impl From<reqwest::Error> for SlotError {
    fn from(e: reqwest::Error) -> SlotError {
        SlotError::Http(e)
    }
}

/// Slots kept in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemorySlots {
    blocks: Vec<Option<Vec<u8>>>,
}

impl MemorySlots {
    pub fn new(count: u8) -> MemorySlots {
        MemorySlots {
            blocks: vec![None; count as usize],
        }
    }
}

impl Slots for MemorySlots {
    fn slot_count(&self) -> u8 {
        self.blocks.len() as u8
    }

    fn read_block(&mut self, slot: u8) -> Result<Vec<u8>, SlotError> {
        match self.blocks.get(slot as usize) {
            Some(Some(block)) => Ok(block.clone()),
            Some(None) => Err(SlotError::Empty(slot)),
            None => Err(SlotError::NoSuchSlot(slot)),
        }
    }

    fn persist_block(&mut self, slot: u8, block: &[u8]) -> Result<(), SlotError> {
        match self.blocks.get_mut(slot as usize) {
            Some(entry) => {
                *entry = Some(block.to_vec());
                Ok(())
            }
            None => Err(SlotError::NoSuchSlot(slot)),
        }
    }
}

pub fn encode(program: &Program, vars: &Var, config: &Config) -> Vec<u8> {
    let mut block = program.bytes().to_vec();
    block.resize(config.program_size, 0);
    vars.encode(&mut block);
    block.resize(config.block_size(), 0);
    block
}

pub fn decode(block: &[u8], config: &Config) -> Result<(Program, Var), SlotError> {
    if block.len() != config.block_size() {
        return Err(SlotError::Corrupt);
    }
    let (program, vars) = block.split_at(config.program_size);
    let program = Program::decode(program, config.program_size).ok_or(SlotError::Corrupt)?;
    let vars = Var::decode(vars, config.variables_size).ok_or(SlotError::Corrupt)?;
    Ok((program, vars))
}

const BUILTIN: &[&str] = &[
    "10 REM SQUARES",
    "20 PRINT \"N\",\"N**2\"",
    "30 FOR N=1 TO 10",
    "40 PRINT N,N**2",
    "50 NEXT N",
];

/// The image slot 0 loads.
pub fn builtin(config: &Config) -> Vec<u8> {
    let mut program = Program::new(config.program_size);
    for text in BUILTIN {
        let line = Line::new(text);
        if program.insert(line.number(), line.bytes()).is_err() {
            break;
        }
    }
    encode(&program, &Var::new(config.variables_size), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_round_trip() {
        let config = Config::default();
        let mut program = Program::new(config.program_size);
        let line = Line::new("10 PRINT 1");
        program.insert(line.number(), line.bytes()).unwrap();
        let mut vars = Var::new(config.variables_size);
        vars.assign_number(b"A", 7).unwrap();
        let block = encode(&program, &vars, &config);
        assert_eq!(block.len(), config.block_size());
        let (p, v) = decode(&block, &config).unwrap();
        assert_eq!(p, program);
        assert_eq!(v.fetch_number(b"A").unwrap(), 7);
    }

    #[test]
    fn test_short_block_is_corrupt() {
        let config = Config::default();
        assert!(matches!(decode(&[0, 0], &config), Err(SlotError::Corrupt)));
    }

    #[test]
    fn test_builtin_has_lines() {
        let config = Config::default();
        let (program, vars) = decode(&builtin(&config), &config).unwrap();
        assert_eq!(program.lines().count(), BUILTIN.len());
        assert!(vars.is_empty());
    }

    #[test]
    fn test_memory_slots() {
        let mut slots = MemorySlots::new(3);
        assert!(matches!(slots.read_block(1), Err(SlotError::Empty(1))));
        slots.persist_block(1, &[1, 2, 3]).unwrap();
        assert_eq!(slots.read_block(1).unwrap(), vec![1, 2, 3]);
        assert!(matches!(slots.read_block(3), Err(SlotError::NoSuchSlot(3))));
        assert_eq!(SlotError::ReadOnly.code(), ErrorCode::SubscriptOutOfRange);
        assert_eq!(SlotError::Corrupt.code(), ErrorCode::Stopped);
    }
}
