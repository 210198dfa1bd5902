use crate::lang::Int;

/// The accumulator every expression evaluates into. Strings are display
/// codes.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(Int),
    Str(Vec<u8>),
}

impl Val {
    pub fn is_string(&self) -> bool {
        matches!(self, Val::Str(_))
    }

    pub fn number(&self) -> Option<Int> {
        match self {
            Val::Number(n) => Some(*n),
            Val::Str(_) => None,
        }
    }
}

impl Default for Val {
    fn default() -> Val {
        Val::Number(0)
    }
}

impl From<Int> for Val {
    fn from(n: Int) -> Val {
        Val::Number(n)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::Str(s) => write!(f, "{}", crate::lang::charset::decode(s)),
        }
    }
}
