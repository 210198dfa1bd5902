use crate::error;
use crate::lang::charset::QUOTE;
use crate::lang::{Error, Int, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub const MAX_NAME_LEN: usize = 63;
pub const MAX_ARRAY_INDEX: Int = 255;

const SENTINEL: u8 = 0xFF;
const WORD: usize = std::mem::size_of::<Int>();

/// ## Variable memory
///
/// Records are kept in creation order and accounted for byte by byte as
/// they would be packed: a header byte holding the type in the top two
/// bits and the name length in the low six, the name, then the payload.
/// A `0xFF` byte ends the store.

#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Num(Int),
    For {
        value: Int,
        limit: Int,
        resume_line: LineNumber,
    },
    Array(Vec<Int>),
    Str(Vec<u8>),
}

/// Records sharing a name only collide within a family. A FOR record is
/// a number with loop state attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Numeric,
    Array,
    String,
}

impl Variable {
    pub fn family(&self) -> Family {
        match self {
            Variable::Num(_) | Variable::For { .. } => Family::Numeric,
            Variable::Array(_) => Family::Array,
            Variable::Str(_) => Family::String,
        }
    }

    fn tag(&self) -> u8 {
        match self {
            Variable::Num(_) => 0,
            Variable::For { .. } => 1,
            Variable::Str(_) => 2,
            Variable::Array(_) => 3,
        }
    }

    fn payload_size(&self) -> usize {
        match self {
            Variable::Num(_) => WORD,
            Variable::For { .. } => 2 * WORD + 2,
            Variable::Array(values) => 1 + values.len() * WORD,
            Variable::Str(s) => s.len() + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Record {
    name: Vec<u8>,
    variable: Variable,
}

impl Record {
    fn size(&self) -> usize {
        1 + self.name.len() + self.variable.payload_size()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    records: Vec<Record>,
    capacity: usize,
    used: usize,
}

impl Var {
    pub fn new(capacity: usize) -> Var {
        Var {
            records: vec![],
            capacity,
            used: 1,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.used = 1;
    }

    /// Bytes in use, terminator included.
    pub fn used(&self) -> usize {
        self.used
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &[u8], family: Family) -> Option<&Variable> {
        self.position(name, family).map(|i| &self.records[i].variable)
    }

    fn position(&self, name: &[u8], family: Family) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.variable.family() == family && r.name == name)
    }

    fn grow(&mut self, old: usize, new: usize) -> Result<()> {
        if new > old {
            if self.used + (new - old) > self.capacity {
                return Err(error!(OutOfMemory));
            }
            self.used += new - old;
        } else {
            self.used -= old - new;
        }
        Ok(())
    }

    fn append(&mut self, name: &[u8], variable: Variable) -> Result<()> {
        let record = Record {
            name: name.to_vec(),
            variable,
        };
        self.grow(0, record.size())?;
        self.records.push(record);
        Ok(())
    }

    fn replace(&mut self, index: usize, variable: Variable) -> Result<()> {
        let old = self.records[index].size();
        let new = old - self.records[index].variable.payload_size() + variable.payload_size();
        self.grow(old, new)?;
        self.records[index].variable = variable;
        Ok(())
    }

    pub fn fetch_number(&self, name: &[u8]) -> Result<Int> {
        match self.get(name, Family::Numeric) {
            Some(Variable::Num(n)) => Ok(*n),
            Some(Variable::For { value, .. }) => Ok(*value),
            _ => Err(error!(VariableNotFound)),
        }
    }

    pub fn fetch_string(&self, name: &[u8]) -> Result<Vec<u8>> {
        match self.get(name, Family::String) {
            Some(Variable::Str(s)) => Ok(s.clone()),
            _ => Err(error!(VariableNotFound)),
        }
    }

    pub fn fetch_element(&self, name: &[u8], index: Int) -> Result<Int> {
        match self.get(name, Family::Array) {
            Some(Variable::Array(values)) => Ok(values[element(values, index)?]),
            _ => Err(error!(VariableNotFound)),
        }
    }

    pub fn assign_number(&mut self, name: &[u8], value: Int) -> Result<()> {
        match self.position(name, Family::Numeric) {
            Some(i) => {
                match &mut self.records[i].variable {
                    Variable::Num(n) => *n = value,
                    Variable::For { value: n, .. } => *n = value,
                    _ => {}
                }
                Ok(())
            }
            None => self.append(name, Variable::Num(value)),
        }
    }

    pub fn assign_string(&mut self, name: &[u8], value: Vec<u8>) -> Result<()> {
        match self.position(name, Family::String) {
            Some(i) => self.replace(i, Variable::Str(value)),
            None => self.append(name, Variable::Str(value)),
        }
    }

    pub fn assign_element(&mut self, name: &[u8], index: Int, value: Int) -> Result<()> {
        let i = match self.position(name, Family::Array) {
            Some(i) => i,
            None => return Err(error!(VariableNotFound)),
        };
        if let Variable::Array(values) = &mut self.records[i].variable {
            let slot = element(values, index)?;
            values[slot] = value;
        }
        Ok(())
    }

    /// Creates an array indexed `0..=max_index`, all zero, replacing any
    /// array of the same name.
    pub fn declare_array(&mut self, name: &[u8], max_index: Int) -> Result<()> {
        if max_index < 0 || max_index > MAX_ARRAY_INDEX {
            return Err(error!(SubscriptOutOfRange));
        }
        // An array header with a 63 byte name would read as the terminator.
        if name.len() >= MAX_NAME_LEN {
            return Err(error!(Syntax));
        }
        if let Some(i) = self.position(name, Family::Array) {
            let old = self.records.remove(i);
            self.used -= old.size();
        }
        self.append(name, Variable::Array(vec![0; max_index as usize + 1]))
    }

    /// Turns a numeric variable into a loop variable, or re-arms one.
    pub fn promote_to_for(&mut self, name: &[u8], limit: Int, resume_line: LineNumber) -> Result<()> {
        let i = match self.position(name, Family::Numeric) {
            Some(i) => i,
            None => return Err(error!(VariableNotFound)),
        };
        let value = match self.records[i].variable {
            Variable::Num(value) | Variable::For { value, .. } => value,
            _ => return Err(error!(VariableNotFound)),
        };
        self.replace(
            i,
            Variable::For {
                value,
                limit,
                resume_line,
            },
        )
    }

    /// Steps a loop variable by one. Returns the line to resume at while
    /// the loop is still within its limit.
    pub fn step_for(&mut self, name: &[u8]) -> Result<Option<LineNumber>> {
        let i = match self.position(name, Family::Numeric) {
            Some(i) => i,
            None => return Err(error!(NextWithoutFor)),
        };
        match &mut self.records[i].variable {
            Variable::For {
                value,
                limit,
                resume_line,
            } => {
                let next = match value.checked_add(1) {
                    Some(n) => n,
                    None => return Err(error!(ArithmeticOverflow)),
                };
                *value = next;
                if next <= *limit {
                    Ok(Some(*resume_line))
                } else {
                    Ok(None)
                }
            }
            _ => Err(error!(NextWithoutFor)),
        }
    }

    /// Packs the store, terminator included.
    pub fn encode(&self, out: &mut Vec<u8>) {
        for record in &self.records {
            out.push(record.variable.tag() << 6 | record.name.len() as u8);
            out.extend_from_slice(&record.name);
            match &record.variable {
                Variable::Num(n) => out.extend_from_slice(&n.to_le_bytes()),
                Variable::For {
                    value,
                    limit,
                    resume_line,
                } => {
                    out.extend_from_slice(&value.to_le_bytes());
                    out.extend_from_slice(&limit.to_le_bytes());
                    out.extend_from_slice(&resume_line.to_le_bytes());
                }
                Variable::Array(values) => {
                    out.push((values.len() - 1) as u8);
                    for v in values {
                        out.extend_from_slice(&v.to_le_bytes());
                    }
                }
                Variable::Str(s) => {
                    out.extend_from_slice(s);
                    out.push(QUOTE);
                }
            }
        }
        out.push(SENTINEL);
    }

    /// Unpacks a store. `None` when the bytes are not a well formed store
    /// or would not fit in `capacity`.
    pub fn decode(bytes: &[u8], capacity: usize) -> Option<Var> {
        let mut var = Var::new(capacity);
        let mut reader = Reader { bytes, pos: 0 };
        loop {
            let header = reader.byte()?;
            if header == SENTINEL {
                break;
            }
            let name = reader.take(header as usize & 0x3F)?.to_vec();
            let variable = match header >> 6 {
                0 => Variable::Num(reader.int()?),
                1 => Variable::For {
                    value: reader.int()?,
                    limit: reader.int()?,
                    resume_line: LineNumber::from_le_bytes([reader.byte()?, reader.byte()?]),
                },
                2 => {
                    let len = reader.bytes[reader.pos..].iter().position(|&b| b == QUOTE)?;
                    let s = reader.take(len)?.to_vec();
                    reader.byte()?;
                    Variable::Str(s)
                }
                _ => {
                    let max = reader.byte()? as usize;
                    let mut values = Vec::with_capacity(max + 1);
                    for _ in 0..=max {
                        values.push(reader.int()?);
                    }
                    Variable::Array(values)
                }
            };
            var.append(&name, variable).ok()?;
        }
        Some(var)
    }
}

fn element(values: &[Int], index: Int) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < values.len() => Ok(i),
        _ => Err(error!(SubscriptOutOfRange)),
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn byte(&mut self) -> Option<u8> {
        let b = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let slice = self.bytes.get(self.pos..self.pos + len)?;
        self.pos += len;
        Some(slice)
    }

    fn int(&mut self) -> Option<Int> {
        let mut raw = [0u8; WORD];
        raw.copy_from_slice(self.take(WORD)?);
        Some(Int::from_le_bytes(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_families_do_not_collide() {
        let mut var = Var::new(256);
        var.assign_number(b"A", 1).unwrap();
        var.assign_string(b"A", vec![0x26]).unwrap();
        var.declare_array(b"A", 3).unwrap();
        assert_eq!(var.fetch_number(b"A").unwrap(), 1);
        assert_eq!(var.fetch_string(b"A").unwrap(), vec![0x26]);
        assert_eq!(var.fetch_element(b"A", 3).unwrap(), 0);
        assert_eq!(
            var.fetch_element(b"A", 4).unwrap_err().code(),
            ErrorCode::SubscriptOutOfRange
        );
        assert_eq!(var.len(), 3);
    }

    #[test]
    fn test_accounting_matches_encoding() {
        let mut var = Var::new(256);
        var.assign_number(b"N", 7).unwrap();
        var.assign_string(b"S", vec![1, 2, 3]).unwrap();
        var.assign_string(b"S", vec![1]).unwrap();
        var.declare_array(b"AR", 2).unwrap();
        var.promote_to_for(b"N", 9, 20).unwrap();
        let mut bytes = vec![];
        var.encode(&mut bytes);
        assert_eq!(bytes.len(), var.used());
        assert_eq!(Var::decode(&bytes, 256), Some(var));
    }

    #[test]
    fn test_out_of_memory() {
        let mut var = Var::new(8);
        var.assign_number(b"A", 1).unwrap();
        assert_eq!(
            var.assign_number(b"B", 1).unwrap_err().code(),
            ErrorCode::OutOfMemory
        );
        assert_eq!(var.used(), 1 + 1 + 1 + WORD);
    }

    #[test]
    fn test_for_steps() {
        let mut var = Var::new(64);
        assert_eq!(var.step_for(b"I").unwrap_err().code(), ErrorCode::NextWithoutFor);
        var.assign_number(b"I", 1).unwrap();
        assert_eq!(var.step_for(b"I").unwrap_err().code(), ErrorCode::NextWithoutFor);
        var.promote_to_for(b"I", 2, 30).unwrap();
        assert_eq!(var.step_for(b"I").unwrap(), Some(30));
        assert_eq!(var.step_for(b"I").unwrap(), None);
        assert_eq!(var.fetch_number(b"I").unwrap(), 3);
    }

    #[test]
    fn test_redimension_replaces() {
        let mut var = Var::new(64);
        var.declare_array(b"A", 1).unwrap();
        var.assign_element(b"A", 1, 5).unwrap();
        var.declare_array(b"A", 1).unwrap();
        assert_eq!(var.fetch_element(b"A", 1).unwrap(), 0);
        assert_eq!(var.len(), 1);
        assert!(var.declare_array(b"A", 256).is_err());
    }
}
