use super::charset::*;
use super::token::{Keyword, Token, Word};
use super::{LineNumber, MAX_LINE_NUMBER};

/// A crunched line: spaces dropped outside strings and remarks, keywords
/// replaced by their token bytes, ending in [`NEWLINE`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Crunched {
    pub bytes: Vec<u8>,
    /// Text column each byte came from. The final `NEWLINE` maps to the
    /// length of the text.
    pub columns: Vec<usize>,
}

impl Crunched {
    pub fn column(&self, byte: usize) -> usize {
        match self.columns.get(byte) {
            Some(&column) => column,
            None => self.columns.last().copied().unwrap_or(0),
        }
    }

    /// First byte at or after a text column.
    pub fn byte_at_column(&self, column: usize) -> usize {
        self.columns
            .iter()
            .position(|&c| c >= column)
            .unwrap_or_else(|| self.bytes.len().saturating_sub(1))
    }

    fn push(&mut self, byte: u8, column: usize) {
        self.bytes.push(byte);
        self.columns.push(column);
    }
}

/// Crunches a line of display codes as typed into the edit buffer.
/// A leading line number is kept as digits.
pub fn crunch(text: &[u8]) -> Crunched {
    let mut crunched = Crunched::default();
    let mut i = 0;
    while i < text.len() && (text[i] == SPACE || is_digit(text[i])) {
        if text[i] != SPACE {
            crunched.push(text[i], i);
        }
        i += 1;
    }
    let body = i;
    let mut statement_start = true;
    let mut in_string = false;
    let mut remark = false;
    while i < text.len() {
        let c = text[i];
        if remark || in_string {
            if c == QUOTE {
                in_string = false;
            }
            crunched.push(c, i);
            i += 1;
            continue;
        }
        if c == SPACE {
            i += 1;
            continue;
        }
        if c == QUOTE {
            in_string = true;
        } else if statement_start && c == QUESTION {
            crunched.push(Token::Word(Word::Print).code(), i);
            statement_start = false;
            i += 1;
            continue;
        } else if let Some((token, len)) = token_at(text, i, body) {
            crunched.push(token.code(), i);
            i += len;
            statement_start = token == Token::Keyword(Keyword::Then);
            if token == Token::Word(Word::Rem) {
                remark = true;
                while i < text.len() && text[i] == SPACE {
                    i += 1;
                }
            }
            continue;
        }
        crunched.push(c, i);
        statement_start = false;
        i += 1;
    }
    crunched.push(NEWLINE, text.len());
    crunched
}

/// Recognizes a keyword at `i`. Symbol keywords always match. Spelled
/// keywords match a whole word only: not preceded by a name character
/// within the statement and not followed by a letter or a dot.
fn token_at(text: &[u8], i: usize, body: usize) -> Option<(Token, usize)> {
    if let Some(pair) = text.get(i..i + 2) {
        let symbol = match pair {
            [STAR, STAR] => Token::from_string("**"),
            [LESS, EQUALS] => Token::from_string("<="),
            [GREATER, EQUALS] => Token::from_string(">="),
            [LESS, GREATER] => Token::from_string("<>"),
            _ => None,
        };
        if let Some(token) = symbol {
            return Some((token, 2));
        }
    }
    if !is_letter(text[i]) || (i > body && is_name_char(text[i - 1])) {
        return None;
    }
    let len = text[i..].iter().take_while(|&&c| is_letter(c)).count();
    if text.get(i + len) == Some(&DOT) {
        return None;
    }
    let word = decode(&text[i..i + len]);
    Token::from_string(&word).map(|token| (token, len))
}

/// Crunches a line of text and splits off its line number. Lines without
/// a valid number are direct, numbered zero, and keep any digits.
pub fn lex(s: &str) -> (LineNumber, Vec<u8>) {
    let mut crunched = crunch(&encode(s));
    crunched.bytes.pop();
    let digits = crunched.bytes.iter().take_while(|&&c| is_digit(c)).count();
    if digits == 0 || digits > 4 {
        return (0, crunched.bytes);
    }
    let number = crunched.bytes[..digits]
        .iter()
        .fold(0, |n: LineNumber, &c| n * 10 + (c - DIGIT_0) as LineNumber);
    if number == 0 || number > MAX_LINE_NUMBER {
        return (0, crunched.bytes);
    }
    (number, crunched.bytes.split_off(digits))
}
