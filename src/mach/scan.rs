use super::state::{Buffer, CursorMode};
use super::var::MAX_NAME_LEN;
use super::{Host, Runtime, Val};
use crate::error;
use crate::lang::charset::*;
use crate::lang::{Error, Int, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// What follows a name decides what it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    /// `A`
    Number,
    /// `A$(`: only builtin functions are spelled this way. Shares its
    /// packed type code with loop variables.
    StringFunction,
    /// `A(`
    Array,
    /// `A$`
    String,
}

/// ## Scanner
///
/// Reads the buffer under the cursor one byte at a time. Spaces are
/// skipped; the end of the buffer reads as `NEWLINE` and the cursor never
/// moves past it.
impl<H: Host> Runtime<H> {
    fn buffer(&self) -> &[u8] {
        match self.state.cursor.buffer {
            Buffer::Program => self.program.bytes(),
            Buffer::Edit => self.edit.bytes(),
        }
    }

    pub(super) fn byte_at(&self, pos: usize) -> u8 {
        self.buffer().get(pos).copied().unwrap_or(NEWLINE)
    }

    pub(super) fn current_char(&mut self) -> u8 {
        while self.byte_at(self.state.cursor.pos) == SPACE {
            self.state.cursor.pos += 1;
        }
        self.track_edit_cursor();
        self.byte_at(self.state.cursor.pos)
    }

    pub(super) fn advance(&mut self) -> u8 {
        if self.byte_at(self.state.cursor.pos) != NEWLINE {
            self.state.cursor.pos += 1;
        }
        self.current_char()
    }

    pub(super) fn skip(&mut self, count: usize) {
        for _ in 0..count {
            if self.byte_at(self.state.cursor.pos) == NEWLINE {
                break;
            }
            self.state.cursor.pos += 1;
        }
    }

    pub(super) fn skip_to_end(&mut self) {
        while self.byte_at(self.state.cursor.pos) != NEWLINE {
            self.state.cursor.pos += 1;
        }
    }

    pub(super) fn expect(&mut self, code: u8) -> Result<()> {
        if self.current_char() == code {
            self.advance();
            Ok(())
        } else {
            Err(error!(Syntax))
        }
    }

    pub(super) fn end_of_line(&mut self) -> Result<()> {
        if self.current_char() == NEWLINE {
            Ok(())
        } else {
            Err(error!(Syntax))
        }
    }

    /// The first time the scanner reaches the edit cursor decides its glyph.
    fn track_edit_cursor(&mut self) {
        if self.state.cursor.buffer == Buffer::Edit
            && self.state.cursor_mode.is_none()
            && !self.state.flags.input
            && self.state.cursor.pos >= self.edit.cursor_byte()
        {
            self.state.cursor_mode = Some(if self.state.flags.keyword_expected {
                CursorMode::Keyword
            } else {
                CursorMode::Letter
            });
        }
    }

    /// Reads decimal digits into the accumulator.
    pub(super) fn parse_signed_number(&mut self) -> Result<()> {
        let mut value: Int = 0;
        self.current_char();
        loop {
            let c = self.byte_at(self.state.cursor.pos);
            if !is_digit(c) {
                break;
            }
            let digit = (c - DIGIT_0) as Int;
            value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => v,
                None => return Err(error!(ArithmeticOverflow)),
            };
            self.state.cursor.pos += 1;
        }
        self.state.result = Val::Number(value);
        Ok(())
    }

    /// Reads digits as a line number, wrapping rather than failing.
    /// Returns the value and how many digits were read.
    pub(super) fn parse_unsigned_number(&mut self) -> (LineNumber, usize) {
        let mut value: LineNumber = 0;
        let mut digits = 0;
        self.current_char();
        loop {
            let c = self.byte_at(self.state.cursor.pos);
            if !is_digit(c) {
                break;
            }
            value = value.wrapping_mul(10).wrapping_add((c - DIGIT_0) as LineNumber);
            digits += 1;
            self.state.cursor.pos += 1;
        }
        (value, digits)
    }

    /// Classifies the name at the cursor without moving. The length
    /// counts the name only, not a `$` or `(` after it.
    pub(super) fn parse_identifier(&mut self) -> (IdentKind, usize) {
        let start = self.state.cursor.pos;
        let mut len = 1;
        while is_name_char(self.byte_at(start + len)) {
            len += 1;
        }
        let kind = match self.byte_at(start + len) {
            DOLLAR if self.byte_at(start + len + 1) == LPAREN => IdentKind::StringFunction,
            DOLLAR => IdentKind::String,
            LPAREN => IdentKind::Array,
            _ => IdentKind::Number,
        };
        (kind, len)
    }

    /// Copies the name at the cursor.
    pub(super) fn name(&self, len: usize) -> Result<Vec<u8>> {
        if len > MAX_NAME_LEN {
            return Err(error!(Syntax));
        }
        let start = self.state.cursor.pos;
        Ok(self.buffer()[start..start + len].to_vec())
    }

    /// Reads a string literal into the accumulator.
    pub(super) fn parse_string(&mut self) -> Result<()> {
        let mut s = vec![];
        let mut pos = self.state.cursor.pos + 1;
        loop {
            match self.byte_at(pos) {
                NEWLINE => {
                    self.state.cursor.pos = pos;
                    return Err(error!(Syntax));
                }
                QUOTE => break,
                c => s.push(c),
            }
            pos += 1;
        }
        self.state.cursor.pos = pos;
        self.advance();
        self.state.result = Val::Str(s);
        Ok(())
    }
}
