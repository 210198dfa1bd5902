//! ## Display character codes
//!
//! The machine has 64 printable characters, ASCII `' '` to `'_'` shifted
//! down by 0x20. Setting the top bit shows a character inverted. Tokens
//! live at the top of the byte range; see [`super::token`].

use super::Int;

const ASCII_OFFSET: u8 = 0x20;

/// Translates an ASCII byte in `' '..='_'` to its display code.
pub const fn code(ascii: u8) -> u8 {
    ascii - ASCII_OFFSET
}

pub const SPACE: u8 = code(b' ');
pub const QUOTE: u8 = code(b'"');
pub const DOLLAR: u8 = code(b'$');
pub const LPAREN: u8 = code(b'(');
pub const RPAREN: u8 = code(b')');
pub const STAR: u8 = code(b'*');
pub const PLUS: u8 = code(b'+');
pub const COMMA: u8 = code(b',');
pub const MINUS: u8 = code(b'-');
pub const DOT: u8 = code(b'.');
pub const SLASH: u8 = code(b'/');
pub const DIGIT_0: u8 = code(b'0');
pub const DIGIT_9: u8 = code(b'9');
pub const SEMICOLON: u8 = code(b';');
pub const LESS: u8 = code(b'<');
pub const EQUALS: u8 = code(b'=');
pub const GREATER: u8 = code(b'>');
pub const QUESTION: u8 = code(b'?');
pub const LETTER_A: u8 = code(b'A');
pub const LETTER_Z: u8 = code(b'Z');

/// End of every line, in the program store and the edit buffer alike.
pub const NEWLINE: u8 = 0x76;

pub const INVERSE: u8 = 0x80;

/// Display code for a typed character. Lower case folds to upper case.
pub fn from_char(ch: char) -> Option<u8> {
    let ch = ch.to_ascii_uppercase();
    if (' '..='_').contains(&ch) {
        Some(code(ch as u8))
    } else {
        None
    }
}

/// Character for a display code, ignoring inversion.
pub fn to_char(code: u8) -> char {
    ((code & 0x3F) + ASCII_OFFSET) as char
}

pub fn is_inverse(code: u8) -> bool {
    code & 0xC0 == INVERSE
}

/// Encodes a string, dropping characters the machine cannot show.
pub fn encode(s: &str) -> Vec<u8> {
    s.chars().filter_map(from_char).collect()
}

pub fn decode(codes: &[u8]) -> String {
    codes.iter().map(|&c| to_char(c)).collect()
}

pub fn is_letter(code: u8) -> bool {
    (LETTER_A..=LETTER_Z).contains(&code)
}

pub fn is_digit(code: u8) -> bool {
    (DIGIT_0..=DIGIT_9).contains(&code)
}

pub fn is_alphanumeric(code: u8) -> bool {
    is_letter(code) || is_digit(code)
}

/// Characters that may follow the first letter of a variable name.
pub fn is_name_char(code: u8) -> bool {
    is_alphanumeric(code) || code == DOT
}

/// Decimal rendering of a number as display codes.
pub fn format_number(n: Int) -> Vec<u8> {
    encode(&n.to_string())
}

/// Reads an optionally negative decimal number filling all of `codes`.
pub fn parse_number(codes: &[u8]) -> Option<Int> {
    let (negative, digits) = match codes.split_first() {
        Some((&MINUS, rest)) => (true, rest),
        _ => (false, codes),
    };
    if digits.is_empty() {
        return None;
    }
    let mut magnitude: i64 = 0;
    for &c in digits {
        if !is_digit(c) {
            return None;
        }
        magnitude = magnitude * 10 + (c - DIGIT_0) as i64;
        if magnitude > Int::max_value() as i64 + 1 {
            return None;
        }
    }
    let value = if negative { -magnitude } else { magnitude };
    if value < Int::min_value() as i64 || value > Int::max_value() as i64 {
        None
    } else {
        Some(value as Int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(SPACE, 0x00);
        assert_eq!(QUOTE, 0x02);
        assert_eq!(DIGIT_0, 0x10);
        assert_eq!(LETTER_A, 0x21);
        assert_eq!(from_char('a'), Some(LETTER_A));
        assert_eq!(from_char('\t'), None);
        assert_eq!(to_char(LETTER_Z | INVERSE), 'Z');
        assert!(is_inverse(LETTER_A | INVERSE));
        assert!(!is_inverse(NEWLINE));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(decode(&format_number(-120)), "-120");
        assert_eq!(parse_number(&encode("-0042")), Some(-42));
        assert_eq!(parse_number(&encode("1E3")), None);
        assert_eq!(parse_number(&encode("-")), None);
        assert_eq!(parse_number(&format_number(Int::min_value())), Some(Int::min_value()));
        assert_eq!(parse_number(&encode("99999999999")), None);
    }
}
