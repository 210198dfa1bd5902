use super::state::{Cursor, CursorMode, Mode};
use super::{Host, Key, Runtime, Status};
use crate::lang::charset::{self, is_digit, INVERSE, SPACE};
use crate::lang::{crunch, Crunched, Error, LineNumber, MAX_LINE_NUMBER};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

const KEYWORD_CURSOR: u8 = INVERSE | charset::code(b'K');
const LETTER_CURSOR: u8 = INVERSE | charset::code(b'L');
const ERROR_MARKER: u8 = INVERSE | charset::code(b'S');

/// ## Edit buffer
///
/// The line being typed, as display codes with a cursor, plus its
/// crunched form which the scanner reads.
#[derive(Debug, Default)]
pub struct Edit {
    text: Vec<u8>,
    cursor: usize,
    crunched: Crunched,
    cursor_byte: usize,
    body: usize,
    marker: Option<usize>,
    current: LineNumber,
}

impl Edit {
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The crunched line.
    pub fn bytes(&self) -> &[u8] {
        &self.crunched.bytes
    }

    /// Crunched byte the text cursor falls on.
    pub fn cursor_byte(&self) -> usize {
        self.cursor_byte
    }

    pub fn is_blank(&self) -> bool {
        self.text.iter().all(|&c| c == SPACE)
    }

    /// Line number last stored, where recall starts from.
    pub fn current(&self) -> LineNumber {
        self.current
    }

    pub fn insert(&mut self, code: u8) {
        self.text.insert(self.cursor, code);
        self.cursor += 1;
        self.marker = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
        self.marker = None;
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.set_text(vec![]);
    }

    pub fn set_text(&mut self, text: Vec<u8>) {
        self.cursor = text.len();
        self.text = text;
        self.marker = None;
        self.crunch();
    }

    pub fn crunch(&mut self) {
        self.crunched = crunch(&self.text);
        self.cursor_byte = self.crunched.byte_at_column(self.cursor);
    }

    /// Marks the text column a crunched byte came from.
    pub fn mark(&mut self, byte: usize) {
        self.marker = Some(self.crunched.column(byte));
    }

    pub fn mark_column(&mut self, column: usize) {
        self.marker = Some(column);
    }

    pub fn marker(&self) -> Option<usize> {
        self.marker
    }

    /// The text with the cursor glyph and any error marker in place.
    pub fn render(&self, mode: CursorMode) -> Vec<u8> {
        let glyph = match mode {
            CursorMode::Keyword => KEYWORD_CURSOR,
            CursorMode::Letter => LETTER_CURSOR,
        };
        let mut out = Vec::with_capacity(self.text.len() + 2);
        for column in 0..=self.text.len() {
            if self.marker == Some(column) {
                out.push(ERROR_MARKER);
            }
            if self.cursor == column {
                out.push(glyph);
            }
            if let Some(&code) = self.text.get(column) {
                out.push(code);
            }
        }
        out
    }
}

/// ## Line editor
///
/// Keys arrive one at a time. After every key the line is crunched and
/// checked, which places the error marker and picks the cursor glyph.
/// Enter stores a numbered line or runs a direct one.
impl<H: Host> Runtime<H> {
    /// Handles one key. Returns false when Enter was refused because the
    /// line does not check.
    pub fn key(&mut self, key: Key) -> bool {
        let accepted = match key {
            Key::Enter => self.submit(),
            Key::Up => {
                self.recall_previous();
                true
            }
            Key::Down => {
                self.recall_next();
                true
            }
            key => {
                self.edit_key(key);
                true
            }
        };
        let _ = self.check_edit_line();
        self.redraw();
        accepted
    }

    /// Types a whole line and presses Enter.
    pub fn enter(&mut self, line: &str) -> bool {
        self.edit.clear();
        for code in charset::encode(line) {
            self.key(Key::Char(code));
        }
        self.key(Key::Enter)
    }

    pub(super) fn edit_key(&mut self, key: Key) {
        match key {
            Key::Char(code) => self.edit.insert(code),
            Key::Delete => self.edit.backspace(),
            Key::Left => self.edit.left(),
            Key::Right => self.edit.right(),
            Key::Break => self.edit.clear(),
            Key::Up | Key::Down | Key::Enter => {}
        }
    }

    pub(super) fn redraw(&mut self) {
        let mode = if self.state.flags.input {
            CursorMode::Letter
        } else {
            self.state.cursor_mode.unwrap_or(CursorMode::Letter)
        };
        let codes = self.edit.render(mode);
        self.host.show_edit_line(&codes);
    }

    /// Checks the edit line, returning its line number, zero if direct.
    pub(super) fn check_edit_line(&mut self) -> Result<LineNumber> {
        self.edit.crunch();
        self.state.clear_error();
        self.state.cursor_mode = None;
        self.state.cursor = Cursor::edit(0);
        let result = match self.edit_line_number() {
            Ok(number) => {
                self.edit.body = self.state.cursor.pos;
                self.line(Mode::Check).map(|_| number)
            }
            Err(error) => Err(self.state.latch(error)),
        };
        if let Err(error) = &result {
            self.edit.mark(error.position().unwrap_or(0));
        }
        self.state.clear_error();
        result
    }

    fn edit_line_number(&mut self) -> Result<LineNumber> {
        self.state.flags.keyword_expected = true;
        if !is_digit(self.current_char()) {
            return Ok(0);
        }
        let (number, digits) = self.parse_unsigned_number();
        if digits > 4 || number == 0 || number > MAX_LINE_NUMBER {
            return Err(error!(Syntax, ..0));
        }
        Ok(number)
    }

    fn submit(&mut self) -> bool {
        if self.edit.is_blank() {
            self.edit.clear();
            self.host.clear();
            let _ = self.list(0);
            return true;
        }
        let number = match self.check_edit_line() {
            Ok(number) => number,
            Err(_) => return false,
        };
        if number == 0 {
            self.host.clear();
            self.execute_direct();
            self.edit.clear();
            return true;
        }
        let statement = {
            let bytes = self.edit.bytes();
            bytes[self.edit.body..bytes.len() - 1].to_vec()
        };
        match self.program.insert(number, &statement) {
            Ok(()) => {
                self.edit.current = number;
                self.edit.clear();
                true
            }
            Err(error) => {
                self.report(error.code().report_char(), 0);
                false
            }
        }
    }

    fn execute_direct(&mut self) {
        self.status = Status::DirectExec;
        self.state.line = 0;
        self.state.flags.goto = false;
        self.state.cursor = Cursor::edit(self.edit.body);
        let mut outcome = self.line(Mode::Execute);
        if outcome.is_ok() && self.state.flags.goto {
            self.status = Status::Running;
            outcome = self.run_program();
        }
        self.finish(outcome);
        self.status = Status::Editing;
    }

    fn recall_previous(&mut self) {
        let (_, previous) = self.program.find_line(self.edit.current);
        if let Some(offset) = previous {
            self.recall(offset);
        }
    }

    fn recall_next(&mut self) {
        let (offset, _) = self.program.find_line(self.edit.current.saturating_add(1));
        self.recall(offset);
    }

    fn recall(&mut self, offset: usize) {
        if let Some(line) = self.program.line(offset) {
            self.edit.current = line.number();
            self.edit.set_text(line.listing());
        }
    }
}

