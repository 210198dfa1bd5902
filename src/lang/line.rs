use super::charset::{self, SPACE};
use super::lex::lex;
use super::token::Token;
use super::LineNumber;

/// One crunched line, without its `NEWLINE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    bytes: Vec<u8>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, bytes) = lex(s);
        Line { number, bytes }
    }

    pub fn from_bytes(number: LineNumber, bytes: Vec<u8>) -> Line {
        Line { number, bytes }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_direct(&self) -> bool {
        self.number == 0
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The line as it is listed, in display codes. Spelled tokens get a
    /// space on each side, but never two spaces in a row.
    pub fn listing(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 16);
        if self.number != 0 {
            out.extend(charset::format_number(self.number as super::Int));
        }
        let mut suppress_space = out.is_empty();
        for &byte in &self.bytes {
            match Token::from_code(byte) {
                Some(token) if token.is_spaced() => {
                    if !suppress_space {
                        out.push(SPACE);
                    }
                    out.extend(charset::encode(&token.to_string()));
                    out.push(SPACE);
                    suppress_space = true;
                }
                Some(token) => {
                    out.extend(charset::encode(&token.to_string()));
                    suppress_space = false;
                }
                None => {
                    out.push(byte);
                    suppress_space = false;
                }
            }
        }
        while out.last() == Some(&SPACE) {
            out.pop();
        }
        out
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", charset::decode(&self.listing()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing() {
        let line = Line::new("10 if a<>b then goto 20");
        assert_eq!(line.number(), 10);
        assert_eq!(line.to_string(), "10 IF A<>B THEN GOTO 20");
        assert_eq!(Line::new(line.to_string().as_str()), line);
    }

    #[test]
    fn test_direct_listing() {
        let line = Line::new("print");
        assert!(line.is_direct());
        assert_eq!(line.to_string(), "PRINT");
    }

    #[test]
    fn test_remark_keeps_text() {
        let line = Line::new("5 REM  go to   print");
        assert_eq!(line.to_string(), "5 REM GO TO   PRINT");
    }
}
