use super::{Config, Display, Host, Key};
use crate::lang::{charset, Int};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A host that plays back queued keys and records what is printed.
/// Time only moves when the interpreter waits.
#[derive(Debug)]
pub struct Capture {
    keys: VecDeque<Key>,
    display: Display,
    transcript: String,
    edit_line: Vec<u8>,
    notices: Vec<String>,
    tones: Vec<(Int, u64)>,
    tone_started: Option<(Int, u64)>,
    clock: u64,
    break_at: Option<u64>,
    rng: StdRng,
}

impl Capture {
    pub fn new(config: &Config) -> Capture {
        Capture {
            keys: VecDeque::new(),
            display: Display::new(config.width, config.height),
            transcript: String::new(),
            edit_line: vec![],
            notices: vec![],
            tones: vec![],
            tone_started: None,
            clock: 0,
            break_at: None,
            rng: StdRng::seed_from_u64(0x5EED),
        }
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Queues keys for the characters of `s`, then Enter.
    pub fn type_line(&mut self, s: &str) {
        for code in charset::encode(s) {
            self.keys.push_back(Key::Char(code));
        }
        self.keys.push_back(Key::Enter);
    }

    /// Everything printed and reported since the last call.
    pub fn take_transcript(&mut self) -> String {
        std::mem::take(&mut self.transcript)
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// The edit line as last shown, inverted glyphs in brackets.
    pub fn edit_line(&self) -> String {
        let mut s = String::new();
        for &code in &self.edit_line {
            if charset::is_inverse(code) {
                s.push('[');
                s.push(charset::to_char(code));
                s.push(']');
            } else {
                s.push(charset::to_char(code));
            }
        }
        s
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Tones played, as pitch and duration in milliseconds.
    pub fn tones(&self) -> &[(Int, u64)] {
        &self.tones
    }

    /// Holds down break from `ms` on the virtual clock.
    pub fn break_at(&mut self, ms: u64) {
        self.break_at = Some(ms);
    }

    pub fn release_break(&mut self) {
        self.break_at = None;
    }

    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Host for Capture {
    fn next_input_char(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }

    fn key_held(&mut self, key: Key) -> bool {
        match (key, self.break_at) {
            (Key::Break, Some(ms)) => self.clock >= ms,
            _ => false,
        }
    }

    fn print_char(&mut self, code: u8) -> bool {
        if self.display.print_char(code) {
            return true;
        }
        self.transcript.push(charset::to_char(code));
        false
    }

    fn print_newline(&mut self) -> bool {
        if self.display.print_newline() {
            return true;
        }
        self.transcript.push('\n');
        false
    }

    fn set_print_position(&mut self, row: usize, column: usize) -> bool {
        self.display.set_position(row, column)
    }

    fn print_column(&self) -> usize {
        self.display.column()
    }

    fn clear(&mut self) {
        self.display.clear();
    }

    fn show_edit_line(&mut self, codes: &[u8]) {
        self.edit_line = codes.to_vec();
    }

    fn show_report(&mut self, codes: &[u8]) {
        if !self.transcript.is_empty() && !self.transcript.ends_with('\n') {
            self.transcript.push('\n');
        }
        self.transcript.push_str(&charset::decode(codes));
        self.transcript.push('\n');
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn current_time(&self) -> u64 {
        self.clock
    }

    fn delay(&mut self, ms: u64) {
        self.clock += ms;
    }

    fn random(&mut self, max: Int) -> Int {
        self.rng.gen_range(1..=max)
    }

    fn tone(&mut self, pitch: Option<Int>) {
        if let Some((p, start)) = self.tone_started.take() {
            self.tones.push((p, self.clock - start));
        }
        if let Some(p) = pitch {
            self.tone_started = Some((p, self.clock));
        }
    }
}
