use crate::lang::Int;

/// Keys the editor understands. Characters are display codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(u8),
    Left,
    Right,
    Up,
    Down,
    Delete,
    Enter,
    Break,
}

/// Everything the interpreter needs from the machine it runs on.
///
/// Printing functions return `true` when the display has no room left.
pub trait Host {
    /// Blocks for the next key. `None` once input has ended for good.
    fn next_input_char(&mut self) -> Option<Key>;

    /// Polled between statements and while waiting.
    fn key_held(&mut self, key: Key) -> bool;

    fn print_char(&mut self, code: u8) -> bool;

    fn print_string(&mut self, codes: &[u8]) -> bool {
        codes.iter().any(|&c| self.print_char(c))
    }

    fn print_newline(&mut self) -> bool;

    fn set_print_position(&mut self, row: usize, column: usize) -> bool;

    /// Column the next character will print at.
    fn print_column(&self) -> usize;

    fn clear(&mut self);

    /// Redraws the edit line. Codes may include inverted glyphs.
    fn show_edit_line(&mut self, codes: &[u8]);

    /// Shows a `<code>/<line>` report below the display.
    fn show_report(&mut self, codes: &[u8]);

    /// Extra detail about a failure, for front ends that can show it.
    fn notice(&mut self, _message: &str) {}

    /// Milliseconds from an arbitrary start.
    fn current_time(&self) -> u64;

    fn delay(&mut self, ms: u64);

    /// A number in `1..=max`. `max` is at least one.
    fn random(&mut self, max: Int) -> Int;

    /// Starts a tone of the given pitch, or stops it.
    fn tone(&mut self, _pitch: Option<Int>) {}
}
