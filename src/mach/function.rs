use super::operation::Operation;
use super::scan::IdentKind;
use super::{Host, Runtime, Val};
use crate::error;
use crate::lang::charset::{self, QUOTE};
use crate::lang::{Error, Int};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Sgn,
    Rnd,
    Peek,
    Len,
    Code,
    Val,
    Chr,
    Str,
    Time,
}

const FUNCTIONS: [(&str, IdentKind, Function); 10] = [
    ("ABS", IdentKind::Array, Function::Abs),
    ("SGN", IdentKind::Array, Function::Sgn),
    ("RND", IdentKind::Array, Function::Rnd),
    ("PEEK", IdentKind::Array, Function::Peek),
    ("LEN", IdentKind::Array, Function::Len),
    ("CODE", IdentKind::Array, Function::Code),
    ("VAL", IdentKind::Array, Function::Val),
    ("CHR", IdentKind::StringFunction, Function::Chr),
    ("STR", IdentKind::StringFunction, Function::Str),
    ("TIME", IdentKind::Number, Function::Time),
];

impl Function {
    /// The builtin spelled `name` and used as `kind`, if any.
    pub fn lookup(name: &[u8], kind: IdentKind) -> Option<Function> {
        let name = charset::decode(name);
        FUNCTIONS
            .iter()
            .find(|(n, k, _)| *n == name && *k == kind)
            .map(|(_, _, f)| *f)
    }

    /// Builtin names cannot be used for variables, whatever the suffix.
    pub fn is_reserved(name: &[u8]) -> bool {
        let name = charset::decode(name);
        FUNCTIONS.iter().any(|(n, _, _)| *n == name)
    }

    pub fn takes_argument(self) -> bool {
        self != Function::Time
    }

    pub fn takes_string(self) -> bool {
        matches!(self, Function::Len | Function::Code | Function::Val)
    }

    pub fn returns_string(self) -> bool {
        matches!(self, Function::Chr | Function::Str)
    }
}

impl<H: Host> Runtime<H> {
    pub(super) fn builtin(&mut self, function: Function, argument: Val) -> Result<Val> {
        let result = match (function, argument) {
            (Function::Abs, Val::Number(n)) => Val::Number(Operation::absolute(n)),
            (Function::Sgn, Val::Number(n)) => Val::Number(n.signum()),
            (Function::Rnd, Val::Number(n)) => {
                if n < 1 {
                    return Err(error!(ArithmeticOverflow));
                }
                Val::Number(self.host.random(n))
            }
            (Function::Peek, Val::Number(n)) => Val::Number(self.peek(n)? as Int),
            (Function::Len, Val::Str(s)) => match Int::try_from(s.len()) {
                Ok(n) => Val::Number(n),
                Err(_) => return Err(error!(ArithmeticOverflow)),
            },
            (Function::Code, Val::Str(s)) => Val::Number(s.first().copied().unwrap_or(0) as Int),
            (Function::Val, Val::Str(s)) => match charset::parse_number(&s) {
                Some(n) => Val::Number(n),
                None => return Err(error!(Syntax)),
            },
            (Function::Chr, Val::Number(n)) => {
                // A quote would end a packed string record early.
                if n < 0 || n > 0x3F || n as u8 == QUOTE {
                    return Err(error!(ArithmeticOverflow));
                }
                Val::Str(vec![n as u8])
            }
            (Function::Str, Val::Number(n)) => Val::Str(charset::format_number(n)),
            (Function::Time, _) => {
                let seconds = self.host.current_time().saturating_sub(self.started) / 1000;
                Val::Number(Int::try_from(seconds).unwrap_or(Int::max_value()))
            }
            _ => return Err(error!(Syntax)),
        };
        Ok(result)
    }

    pub(super) fn peek(&self, address: Int) -> Result<u8> {
        match usize::try_from(address) {
            Ok(a) if a < self.memory.len() => Ok(self.memory[a]),
            _ => Err(error!(SubscriptOutOfRange)),
        }
    }

    pub(super) fn poke(&mut self, address: Int, value: Int) -> Result<()> {
        let a = match usize::try_from(address) {
            Ok(a) if a < self.memory.len() => a,
            _ => return Err(error!(SubscriptOutOfRange)),
        };
        match u8::try_from(value) {
            Ok(v) => {
                self.memory[a] = v;
                Ok(())
            }
            Err(_) => Err(error!(ArithmeticOverflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_kind() {
        let abs = charset::encode("ABS");
        assert_eq!(Function::lookup(&abs, IdentKind::Array), Some(Function::Abs));
        assert_eq!(Function::lookup(&abs, IdentKind::Number), None);
        assert!(Function::is_reserved(&abs));
        let chr = charset::encode("CHR");
        assert_eq!(Function::lookup(&chr, IdentKind::StringFunction), Some(Function::Chr));
        assert!(!Function::is_reserved(&charset::encode("ABSX")));
        assert!(!Function::is_reserved(&[charset::NEWLINE]));
    }
}
