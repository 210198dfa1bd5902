use super::{bold, now, Interrupt};
use basic::lang::{charset, Int};
use basic::mach::{Config, Display, Host, Key};
use rand::Rng;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Runs lines without a screen. Printing goes to the output as it
/// happens and INPUT reads lines from the input. A stream has no bottom,
/// so the grid starts over instead of filling up.
pub struct Batch<R: BufRead, W: Write> {
    input: R,
    output: W,
    display: Display,
    pending: VecDeque<Key>,
    interrupt: Interrupt,
}

impl<R: BufRead, W: Write> Batch<R, W> {
    pub fn new(config: &Config, input: R, output: W, interrupt: Interrupt) -> Batch<R, W> {
        Batch {
            input,
            output,
            display: Display::new(config.width, config.height),
            pending: VecDeque::new(),
            interrupt,
        }
    }

    fn write(&mut self, s: &str) {
        let _ = self.output.write_all(s.as_bytes());
    }
}

impl<R: BufRead, W: Write> Host for Batch<R, W> {
    fn next_input_char(&mut self) -> Option<Key> {
        if self.pending.is_empty() {
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            self.pending.extend(charset::encode(line.trim_end()).into_iter().map(Key::Char));
            self.pending.push_back(Key::Enter);
        }
        self.pending.pop_front()
    }

    fn key_held(&mut self, key: Key) -> bool {
        key == Key::Break && self.interrupt.take()
    }

    fn print_char(&mut self, code: u8) -> bool {
        if self.display.print_char(code) {
            self.display.clear();
            self.display.print_char(code);
        }
        self.write(&charset::to_char(code).to_string());
        if self.display.column() == 0 {
            self.write("\n");
        }
        false
    }

    fn print_newline(&mut self) -> bool {
        if self.display.print_newline() {
            self.display.clear();
        }
        self.write("\n");
        false
    }

    /// Moving back up can't be shown on a stream, so the text carries on
    /// from a fresh line.
    fn set_print_position(&mut self, row: usize, column: usize) -> bool {
        let (from_row, from_column) = (self.display.row(), self.display.column());
        if self.display.set_position(row, column) {
            return true;
        }
        let mut from_column = from_column;
        if row != from_row || column < from_column {
            self.write("\n");
            from_column = 0;
        }
        self.write(&" ".repeat(column - from_column));
        false
    }

    fn print_column(&self) -> usize {
        self.display.column()
    }

    fn clear(&mut self) {
        self.display.clear();
    }

    fn show_edit_line(&mut self, _codes: &[u8]) {}

    fn show_report(&mut self, codes: &[u8]) {
        if self.display.column() != 0 {
            self.write("\n");
        }
        let report = charset::decode(codes);
        let report = if report.starts_with('0') {
            report
        } else {
            bold(&report)
        };
        self.write(&report);
        self.write("\n");
    }

    fn notice(&mut self, message: &str) {
        eprintln!("{}", bold(message));
    }

    fn current_time(&self) -> u64 {
        now()
    }

    fn delay(&mut self, ms: u64) {
        let _ = self.output.flush();
        std::thread::sleep(Duration::from_millis(ms));
    }

    fn random(&mut self, max: Int) -> Int {
        rand::thread_rng().gen_range(1..=max)
    }
}
