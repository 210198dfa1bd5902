use crate::lang::charset::{self, SPACE};

/// A fixed grid of display codes with a print position.
#[derive(Debug, Clone)]
pub struct Display {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    row: usize,
    column: usize,
}

impl Display {
    pub fn new(width: usize, height: usize) -> Display {
        Display {
            width,
            height,
            cells: vec![SPACE; width * height],
            row: 0,
            column: 0,
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = SPACE);
        self.row = 0;
        self.column = 0;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn print_char(&mut self, code: u8) -> bool {
        if self.row >= self.height {
            return true;
        }
        self.cells[self.row * self.width + self.column] = code;
        self.column += 1;
        if self.column == self.width {
            self.column = 0;
            self.row += 1;
        }
        false
    }

    pub fn print_newline(&mut self) -> bool {
        if self.row >= self.height {
            return true;
        }
        self.row += 1;
        self.column = 0;
        false
    }

    pub fn set_position(&mut self, row: usize, column: usize) -> bool {
        if row >= self.height || column >= self.width {
            return true;
        }
        self.row = row;
        self.column = column;
        false
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.cells.chunks(self.width)
    }

    /// The grid as text, trailing spaces and empty rows trimmed.
    pub fn text(&self) -> String {
        let rows: Vec<String> = self
            .rows()
            .map(|row| charset::decode(row).trim_end().to_string())
            .collect();
        rows.join("\n").trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_then_overflows() {
        let mut display = Display::new(2, 2);
        for _ in 0..4 {
            assert!(!display.print_char(charset::LETTER_A));
        }
        assert!(display.print_char(charset::LETTER_A));
        assert!(display.print_newline());
        assert_eq!(display.text(), "AA\nAA");
        display.clear();
        assert!(!display.set_position(1, 1));
        assert!(display.set_position(2, 0));
        assert_eq!(display.column(), 1);
    }
}
