use super::{SlotError, Slots};
use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

pub const ACK: u8 = 0x06;
pub const NAK: u8 = 0x15;
const LOAD: u8 = b'L';
const SAVE: u8 = b'S';
const TIMEOUT: Duration = Duration::from_secs(5);

/// Slots held by a storage controller at the other end of a byte link.
///
/// `LOAD<n>` is `L n`, answered by `ACK` and the block. `SAVE<n>` is
/// `S n` and the block, answered by `ACK`. A refusal is `NAK`.
#[derive(Debug)]
pub struct LinkSlots<T: Read + Write> {
    link: T,
    count: u8,
    block_size: usize,
}

impl<T: Read + Write> LinkSlots<T> {
    pub fn new(link: T, count: u8, block_size: usize) -> LinkSlots<T> {
        LinkSlots {
            link,
            count,
            block_size,
        }
    }

    fn request(&mut self, frame: &[u8]) -> Result<bool, SlotError> {
        self.link.write_all(frame)?;
        self.link.flush()?;
        let mut reply = [0];
        self.link.read_exact(&mut reply)?;
        match reply[0] {
            ACK => Ok(true),
            NAK => Ok(false),
            _ => Err(SlotError::Protocol("unexpected reply")),
        }
    }
}

impl LinkSlots<TcpStream> {
    pub fn connect<A: ToSocketAddrs>(
        addr: A,
        count: u8,
        block_size: usize,
    ) -> std::io::Result<LinkSlots<TcpStream>> {
        let stream = TcpStream::connect(addr)?;
        stream.set_read_timeout(Some(TIMEOUT))?;
        stream.set_write_timeout(Some(TIMEOUT))?;
        Ok(LinkSlots::new(stream, count, block_size))
    }
}

impl<T: Read + Write> Slots for LinkSlots<T> {
    fn slot_count(&self) -> u8 {
        self.count
    }

    fn read_block(&mut self, slot: u8) -> Result<Vec<u8>, SlotError> {
        if !self.request(&[LOAD, slot])? {
            return Err(SlotError::Empty(slot));
        }
        let mut block = vec![0; self.block_size];
        self.link.read_exact(&mut block)?;
        Ok(block)
    }

    fn persist_block(&mut self, slot: u8, block: &[u8]) -> Result<(), SlotError> {
        if block.len() != self.block_size {
            return Err(SlotError::Corrupt);
        }
        let mut frame = Vec::with_capacity(block.len() + 2);
        frame.push(SAVE);
        frame.push(slot);
        frame.extend_from_slice(block);
        if self.request(&frame)? {
            Ok(())
        } else {
            Err(SlotError::Protocol("save refused"))
        }
    }
}

/// The controller side: answers requests from `link` out of `slots`
/// until the other end hangs up.
pub fn serve<T: Read + Write, S: Slots + ?Sized>(
    link: &mut T,
    slots: &mut S,
    block_size: usize,
) -> Result<(), SlotError> {
    loop {
        let mut head = [0; 2];
        match link.read_exact(&mut head[..1]) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e.into()),
        }
        link.read_exact(&mut head[1..])?;
        let slot = head[1];
        match head[0] {
            LOAD => match slots.read_block(slot) {
                Ok(block) if block.len() == block_size => {
                    link.write_all(&[ACK])?;
                    link.write_all(&block)?;
                }
                _ => link.write_all(&[NAK])?,
            },
            SAVE => {
                let mut block = vec![0; block_size];
                link.read_exact(&mut block)?;
                let reply = match slots.persist_block(slot, &block) {
                    Ok(()) => ACK,
                    Err(_) => NAK,
                };
                link.write_all(&[reply])?;
            }
            _ => {
                link.write_all(&[NAK])?;
                link.flush()?;
                return Err(SlotError::Protocol("unknown request"));
            }
        }
        link.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlots;
    use std::io::Cursor;

    /// Replies are read from `input`, requests land in `output`.
    struct Wire {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Read for Wire {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for Wire {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.output.write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_client_frames() {
        let wire = Wire {
            input: Cursor::new(vec![ACK, ACK, 9, 8, 7, NAK]),
            output: vec![],
        };
        let mut slots = LinkSlots::new(wire, 4, 3);
        slots.persist_block(2, &[1, 2, 3]).unwrap();
        assert_eq!(slots.read_block(2).unwrap(), vec![9, 8, 7]);
        assert!(matches!(slots.read_block(3), Err(SlotError::Empty(3))));
        assert_eq!(slots.link.output, vec![SAVE, 2, 1, 2, 3, LOAD, 2, LOAD, 3]);
    }

    #[test]
    fn test_server_replies() {
        let mut wire = Wire {
            input: Cursor::new(vec![SAVE, 1, 4, 5, LOAD, 1, LOAD, 2]),
            output: vec![],
        };
        let mut slots = MemorySlots::new(3);
        serve(&mut wire, &mut slots, 2).unwrap();
        assert_eq!(wire.output, vec![ACK, ACK, 4, 5, NAK]);
    }
}
