use super::LineNumber;

/// A BASIC error. Carries the kind, the line it happened in (zero for a
/// direct line) and, once latched, the byte position in the scanned line.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    position: Option<usize>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($pos)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr, ..$pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .at($pos)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: 0,
            position: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_direct(&self) -> bool {
        self.line_number == 0
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: line,
            position: self.position,
        }
    }

    pub fn at(&self, position: usize) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number,
            position: Some(position),
        }
    }
}

/// The closed set of things that can go wrong. The discriminant is the
/// digit shown in a report; syntax errors report as `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    VariableNotFound = 2,
    SubscriptOutOfRange = 3,
    OutOfMemory = 4,
    DisplayFull = 5,
    ArithmeticOverflow = 6,
    ReturnWithoutGosub = 7,
    InputNotInProgram = 8,
    Stopped = 9,
    Syntax = 12,
}

impl ErrorCode {
    pub fn report_char(self) -> char {
        match self {
            ErrorCode::Syntax => 'C',
            code => (b'0' + code as u8) as char,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            VariableNotFound => "VARIABLE NOT FOUND",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            OutOfMemory => "OUT OF MEMORY",
            DisplayFull => "DISPLAY FULL",
            ArithmeticOverflow => "ARITHMETIC OVERFLOW",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            InputNotInProgram => "INPUT NOT IN PROGRAM",
            Stopped => "STOPPED",
            Syntax => "SYNTAX ERROR",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "Error {{ {} @{} }}", self.to_string(), pos),
            None => write!(f, "Error {{ {} }}", self.to_string()),
        }
    }
}

/// The report form, `<code>/<line>`.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.code.report_char(), self.line_number)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_form() {
        assert_eq!(error!(ArithmeticOverflow, 10).to_string(), "6/10");
        assert_eq!(error!(Syntax).to_string(), "C/0");
        assert_eq!(error!(Stopped, 30, ..4).position(), Some(4));
        assert!(error!(NextWithoutFor).is_direct());
    }
}
