use super::{now, Interrupt};
use basic::lang::{charset, Int};
use basic::mach::{Config, Display, Host, Key};
use mortal::{Color, Event, PrepareConfig, Screen, Style};
use rand::Rng;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// The machine on a full screen terminal. The display grid sits at the
/// top, the report line below it and the edit line at the bottom.
pub struct Terminal {
    screen: Screen,
    display: Display,
    report: String,
    notice: String,
    edit: Vec<u8>,
    pending: VecDeque<Key>,
    interrupt: Interrupt,
    dirty: bool,
}

impl Terminal {
    pub fn new(config: &Config, interrupt: Interrupt) -> std::io::Result<Terminal> {
        let screen = Screen::new(PrepareConfig::default())?;
        Ok(Terminal {
            screen,
            display: Display::new(config.width, config.height),
            report: String::new(),
            notice: String::new(),
            edit: vec![],
            pending: VecDeque::new(),
            interrupt,
            dirty: true,
        })
    }

    fn draw(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.screen.clear_screen();
        for (line, row) in self.display.rows().enumerate() {
            self.screen.write_at((line, 0), &charset::decode(row));
        }
        let height = self.display.height();
        self.screen.write_at((height, 0), &self.report);
        if !self.notice.is_empty() {
            self.screen.write_str(" ");
            self.screen
                .write_styled(None::<Color>, None::<Color>, Style::BOLD, &self.notice);
        }
        self.screen.set_cursor((height + 1, 0));
        for &code in &self.edit {
            let ch = charset::to_char(code).to_string();
            if charset::is_inverse(code) {
                self.screen
                    .write_styled(None::<Color>, None::<Color>, Style::REVERSE, &ch);
            } else {
                self.screen.write_str(&ch);
            }
        }
        let _ = self.screen.refresh();
    }

    /// `None` for keys the machine has no use for.
    fn translate(&self, event: Event) -> Option<Option<Key>> {
        use mortal::Key as K;
        let key = match event {
            Event::Key(K::Char(ch)) => Key::Char(charset::from_char(ch)?),
            Event::Key(K::Enter) => Key::Enter,
            Event::Key(K::Backspace) | Event::Key(K::Delete) => Key::Delete,
            Event::Key(K::Left) => Key::Left,
            Event::Key(K::Right) => Key::Right,
            Event::Key(K::Up) => Key::Up,
            Event::Key(K::Down) => Key::Down,
            Event::Key(K::Escape) | Event::Key(K::Ctrl('c')) => Key::Break,
            Event::Key(K::Ctrl('d')) => return Some(None),
            _ => return None,
        };
        Some(Some(key))
    }
}

impl Host for Terminal {
    fn next_input_char(&mut self) -> Option<Key> {
        if let Some(key) = self.pending.pop_front() {
            return Some(key);
        }
        self.draw();
        loop {
            if self.interrupt.take() {
                return Some(Key::Break);
            }
            match self.screen.read_event(Some(Duration::from_millis(100))) {
                Ok(Some(event)) => {
                    if let Some(key) = self.translate(event) {
                        return key;
                    }
                }
                Ok(None) => {}
                Err(_) => return None,
            }
        }
    }

    fn key_held(&mut self, key: Key) -> bool {
        self.draw();
        let mut held = key == Key::Break && self.interrupt.take();
        while let Ok(Some(event)) = self.screen.read_event(Some(Duration::from_millis(0))) {
            match self.translate(event) {
                Some(Some(k)) if k == key => held = true,
                Some(Some(k)) => self.pending.push_back(k),
                _ => {}
            }
        }
        held
    }

    fn print_char(&mut self, code: u8) -> bool {
        self.dirty = true;
        self.display.print_char(code)
    }

    fn print_newline(&mut self) -> bool {
        self.display.print_newline()
    }

    fn set_print_position(&mut self, row: usize, column: usize) -> bool {
        self.display.set_position(row, column)
    }

    fn print_column(&self) -> usize {
        self.display.column()
    }

    fn clear(&mut self) {
        self.dirty = true;
        self.notice.clear();
        self.display.clear();
    }

    fn show_edit_line(&mut self, codes: &[u8]) {
        self.dirty = true;
        self.edit = codes.to_vec();
    }

    fn show_report(&mut self, codes: &[u8]) {
        self.dirty = true;
        self.report = charset::decode(codes);
    }

    fn notice(&mut self, message: &str) {
        self.dirty = true;
        self.notice = message.to_string();
    }

    fn current_time(&self) -> u64 {
        now()
    }

    fn delay(&mut self, ms: u64) {
        self.draw();
        std::thread::sleep(Duration::from_millis(ms));
    }

    fn random(&mut self, max: Int) -> Int {
        rand::thread_rng().gen_range(1..=max)
    }

    fn tone(&mut self, pitch: Option<Int>) {
        if pitch.is_some() {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
        }
    }
}
