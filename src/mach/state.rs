use super::Val;
use crate::lang::{Error, ErrorCode, LineNumber};

/// Whether a line is only being checked, as while typing, or run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Execute,
}

impl Mode {
    pub fn is_check(self) -> bool {
        self == Mode::Check
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    Program,
    Edit,
}

/// Where the scanner is: a buffer and a byte offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub buffer: Buffer,
    pub pos: usize,
}

impl Cursor {
    pub fn program(pos: usize) -> Cursor {
        Cursor {
            buffer: Buffer::Program,
            pos,
        }
    }

    pub fn edit(pos: usize) -> Cursor {
        Cursor {
            buffer: Buffer::Edit,
            pos,
        }
    }
}

/// The glyph shown at the edit cursor: a statement keyword is expected
/// (`K`) or anything else (`L`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    Keyword,
    Letter,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// An INPUT line is being read into the edit buffer.
    pub input: bool,
    /// The next line to run is `State::jump` instead of the following one.
    pub goto: bool,
    /// The scanner is at a place where a statement keyword belongs.
    pub keyword_expected: bool,
}

/// Scanner and interpreter registers shared by every component.
#[derive(Debug)]
pub struct State {
    pub cursor: Cursor,
    pub result: Val,
    pub flags: Flags,
    pub cursor_mode: Option<CursorMode>,
    /// Line being run, zero for a direct line.
    pub line: LineNumber,
    /// Target of a pending jump, zero to end the program.
    pub jump: LineNumber,
    error: Option<Error>,
}

impl Default for State {
    fn default() -> State {
        State {
            cursor: Cursor::edit(0),
            result: Val::default(),
            flags: Flags::default(),
            cursor_mode: None,
            line: 0,
            jump: 0,
            error: None,
        }
    }
}

impl State {
    pub fn raise(&mut self, code: ErrorCode) -> Error {
        self.latch(Error::new(code))
    }

    /// Records an error at the cursor unless one is already recorded.
    /// Returns whichever error is recorded.
    pub fn latch(&mut self, error: Error) -> Error {
        if let Some(latched) = &self.error {
            return latched.clone();
        }
        let error = match error.position() {
            Some(_) => error,
            None => error.at(self.cursor.pos),
        };
        self.error = Some(error.clone());
        error
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
