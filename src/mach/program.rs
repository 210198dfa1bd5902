use crate::error;
use crate::lang::charset::NEWLINE;
use crate::lang::{Error, Line, LineNumber, MAX_LINE_NUMBER};

type Result<T> = std::result::Result<T, Error>;

const END: [u8; 2] = [0, 0];

/// ## Program store
///
/// Lines packed in ascending order: a little-endian line number, the
/// crunched statement, `NEWLINE`. A zero line number ends the store.
/// Positions into the store are byte offsets and go stale after any
/// insert, so callers hold on to line numbers instead.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    bytes: Vec<u8>,
    capacity: usize,
}

impl Program {
    pub fn new(capacity: usize) -> Program {
        Program {
            bytes: END.to_vec(),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.bytes.extend_from_slice(&END);
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.line_number_at(0) == 0
    }

    /// Line number of the line at `offset`, zero at the end.
    pub fn line_number_at(&self, offset: usize) -> LineNumber {
        match self.bytes.get(offset..offset + 2) {
            Some(b) => LineNumber::from_le_bytes([b[0], b[1]]),
            None => 0,
        }
    }

    pub fn next_line(&self, offset: usize) -> usize {
        let body = offset + 2;
        match self
            .bytes
            .get(body..)
            .and_then(|rest| rest.iter().position(|&b| b == NEWLINE))
        {
            Some(len) => body + len + 1,
            None => self.bytes.len(),
        }
    }

    /// Offset of the first line numbered `number` or higher, and the
    /// offset of the line before it.
    pub fn find_line(&self, number: LineNumber) -> (usize, Option<usize>) {
        let mut previous = None;
        let mut offset = 0;
        loop {
            let n = self.line_number_at(offset);
            if n == 0 || n >= number {
                return (offset, previous);
            }
            previous = Some(offset);
            offset = self.next_line(offset);
        }
    }

    pub fn line(&self, offset: usize) -> Option<Line> {
        let number = self.line_number_at(offset);
        if number == 0 {
            return None;
        }
        let end = self.next_line(offset) - 1;
        Some(Line::from_bytes(number, self.bytes[offset + 2..end].to_vec()))
    }

    pub fn get(&self, number: LineNumber) -> Option<Line> {
        let (offset, _) = self.find_line(number);
        match self.line(offset) {
            Some(line) if line.number() == number => Some(line),
            _ => None,
        }
    }

    pub fn lines(&self) -> Lines<'_> {
        Lines {
            program: self,
            offset: 0,
        }
    }

    /// Stores a line, replacing one with the same number. Empty
    /// statements delete.
    pub fn insert(&mut self, number: LineNumber, statement: &[u8]) -> Result<()> {
        debug_assert!(number != 0 && number <= MAX_LINE_NUMBER);
        let (offset, _) = self.find_line(number);
        let existing = if self.line_number_at(offset) == number {
            self.next_line(offset) - offset
        } else {
            0
        };
        if statement.is_empty() {
            self.bytes.drain(offset..offset + existing);
            return Ok(());
        }
        let len = statement.len() + 3;
        if self.bytes.len() - existing + len > self.capacity {
            return Err(error!(OutOfMemory));
        }
        let mut record = Vec::with_capacity(len);
        record.extend_from_slice(&number.to_le_bytes());
        record.extend_from_slice(statement);
        record.push(NEWLINE);
        self.bytes.splice(offset..offset + existing, record);
        Ok(())
    }

    /// Reads a packed store, trailing bytes after the terminator ignored.
    /// `None` when lines are out of order, unterminated, or too long.
    pub fn decode(block: &[u8], capacity: usize) -> Option<Program> {
        let mut offset = 0;
        let mut last = 0;
        loop {
            let number = LineNumber::from_le_bytes([*block.get(offset)?, *block.get(offset + 1)?]);
            if number == 0 {
                break;
            }
            if number <= last || number > MAX_LINE_NUMBER {
                return None;
            }
            let len = block[offset + 2..].iter().position(|&b| b == NEWLINE)?;
            last = number;
            offset += len + 3;
        }
        if offset + 2 > capacity {
            return None;
        }
        Some(Program {
            bytes: block[..offset + 2].to_vec(),
            capacity,
        })
    }
}

pub struct Lines<'a> {
    program: &'a Program,
    offset: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let line = self.program.line(self.offset)?;
        self.offset = self.program.next_line(self.offset);
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn numbers(program: &Program) -> Vec<LineNumber> {
        program.lines().map(|l| l.number()).collect()
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut program = Program::new(64);
        program.insert(20, &[1]).unwrap();
        program.insert(10, &[2, 3]).unwrap();
        program.insert(30, &[4]).unwrap();
        assert_eq!(numbers(&program), vec![10, 20, 30]);
        program.insert(20, &[5, 5, 5]).unwrap();
        assert_eq!(program.get(20).unwrap().bytes(), &[5, 5, 5]);
        program.insert(10, &[]).unwrap();
        assert_eq!(numbers(&program), vec![20, 30]);
        program.insert(15, &[]).unwrap();
        assert_eq!(numbers(&program), vec![20, 30]);
    }

    #[test]
    fn test_find_line() {
        let mut program = Program::new(64);
        program.insert(10, &[1]).unwrap();
        program.insert(20, &[1]).unwrap();
        let (offset, previous) = program.find_line(15);
        assert_eq!(program.line_number_at(offset), 20);
        assert_eq!(previous, Some(0));
        let (offset, _) = program.find_line(21);
        assert_eq!(program.line_number_at(offset), 0);
    }

    #[test]
    fn test_capacity() {
        let mut program = Program::new(10);
        program.insert(10, &[1, 2, 3]).unwrap();
        assert_eq!(program.bytes().len(), 8);
        assert_eq!(
            program.insert(20, &[1]).unwrap_err().code(),
            ErrorCode::OutOfMemory
        );
        program.insert(10, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(program.bytes().len(), 10);
    }

    #[test]
    fn test_decode() {
        let mut program = Program::new(64);
        program.insert(10, &[1]).unwrap();
        program.insert(20, &[2]).unwrap();
        let mut block = program.bytes().to_vec();
        block.resize(64, 0xAA);
        assert_eq!(Program::decode(&block, 64), Some(program));
        assert_eq!(Program::decode(&[20, 0, 1, NEWLINE, 10, 0, 1, NEWLINE, 0, 0], 64), None);
        assert_eq!(Program::decode(&[10, 0, 1], 64), None);
    }
}
