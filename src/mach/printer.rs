use super::{Host, Runtime, Val};
use crate::error;
use crate::lang::charset::{self, SPACE};
use crate::lang::{Error, Int, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Printer
///
/// All output goes through here. A full display is a `DisplayFull` error.
impl<H: Host> Runtime<H> {
    pub(super) fn print_code(&mut self, code: u8) -> Result<()> {
        if self.host.print_char(code) {
            Err(error!(DisplayFull))
        } else {
            Ok(())
        }
    }

    pub(super) fn print_codes(&mut self, codes: &[u8]) -> Result<()> {
        if self.host.print_string(codes) {
            Err(error!(DisplayFull))
        } else {
            Ok(())
        }
    }

    pub(super) fn print_newline(&mut self) -> Result<()> {
        if self.host.print_newline() {
            Err(error!(DisplayFull))
        } else {
            Ok(())
        }
    }

    pub(super) fn print_val(&mut self, val: &Val) -> Result<()> {
        match val {
            Val::Number(n) => self.print_codes(&charset::format_number(*n)),
            Val::Str(s) => self.print_codes(s),
        }
    }

    /// A comma moves to the middle of the line, or to the next line from
    /// there on.
    pub(super) fn print_comma(&mut self) -> Result<()> {
        let half = self.config.width / 2;
        if self.host.print_column() < half {
            while self.host.print_column() < half {
                self.print_code(SPACE)?;
            }
            Ok(())
        } else {
            self.print_newline()
        }
    }

    pub(super) fn print_at(&mut self, row: Int, column: Int) -> Result<()> {
        match (usize::try_from(row), usize::try_from(column)) {
            (Ok(row), Ok(column)) if !self.host.set_print_position(row, column) => Ok(()),
            _ => Err(error!(DisplayFull)),
        }
    }

    /// Pads with spaces to a column, taken modulo the width, starting a
    /// new line first if already past it.
    pub(super) fn tab_to(&mut self, column: Int) -> Result<()> {
        let width = self.config.width as i64;
        let column = (column as i64).rem_euclid(width) as usize;
        if self.host.print_column() > column {
            self.print_newline()?;
        }
        while self.host.print_column() < column {
            self.print_code(SPACE)?;
        }
        Ok(())
    }

    /// Lists the program from the first line at or after `from`.
    pub(super) fn list(&mut self, from: LineNumber) -> Result<()> {
        let (offset, _) = self.program.find_line(from);
        let mut offset = offset;
        while let Some(line) = self.program.line(offset) {
            self.print_codes(&line.listing())?;
            self.print_newline()?;
            offset = self.program.next_line(offset);
        }
        Ok(())
    }

    /// Shows `<code>/<line>` below the display.
    pub(super) fn report(&mut self, code: char, line: LineNumber) {
        let text = format!("{}/{}", code, line);
        self.host.show_report(&charset::encode(&text));
    }
}
