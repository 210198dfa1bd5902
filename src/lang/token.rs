//! ## Tokens
//!
//! Statement words and keywords are stored crunched, one byte each, at
//! the top of the byte range. Words occupy `0xE6..=0xFF`, keywords
//! `0xDB..=0xE5`. Codes from `0xD4` up to the keywords are reserved.

use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<String, Token> = WORDS
        .iter()
        .map(|&w| Token::Word(w))
        .chain(KEYWORDS.iter().map(|&k| Token::Keyword(k)))
        .map(|t| (t.to_string(), t))
        .collect();
);

/// Lowest byte that is never a display character.
pub const FIRST_TOKEN: u8 = 0xD4;
const FIRST_KEYWORD: u8 = 0xDB;
const FIRST_WORD: u8 = 0xE6;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    Word(Word),
    Keyword(Keyword),
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).copied())
    }

    pub fn from_code(code: u8) -> Option<Token> {
        if code >= FIRST_WORD {
            Some(Token::Word(WORDS[(code - FIRST_WORD) as usize]))
        } else if code >= FIRST_KEYWORD {
            Some(Token::Keyword(KEYWORDS[(code - FIRST_KEYWORD) as usize]))
        } else {
            None
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Token::Word(w) => FIRST_WORD + w as u8,
            Token::Keyword(k) => FIRST_KEYWORD + k as u8,
        }
    }

    /// Spelled with letters, so listed with a space on either side.
    pub fn is_spaced(self) -> bool {
        match self {
            Token::Word(_) => true,
            Token::Keyword(k) => !k.is_symbol(),
        }
    }
}

pub fn is_token(code: u8) -> bool {
    code >= FIRST_TOKEN
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Word(s) => write!(f, "{}", s),
            Token::Keyword(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Word {
    List,
    Run,
    New,
    Clear,
    Cont,
    Save,
    Load,
    Let,
    Print,
    Input,
    If,
    Goto,
    Gosub,
    Return,
    For,
    Next,
    Stop,
    Rem,
    Dim,
    Data,
    Read,
    Restore,
    Poke,
    Beep,
    Wait,
    Cls,
}

pub const WORDS: [Word; 26] = [
    Word::List,
    Word::Run,
    Word::New,
    Word::Clear,
    Word::Cont,
    Word::Save,
    Word::Load,
    Word::Let,
    Word::Print,
    Word::Input,
    Word::If,
    Word::Goto,
    Word::Gosub,
    Word::Return,
    Word::For,
    Word::Next,
    Word::Stop,
    Word::Rem,
    Word::Dim,
    Word::Data,
    Word::Read,
    Word::Restore,
    Word::Poke,
    Word::Beep,
    Word::Wait,
    Word::Cls,
];

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            List => "LIST",
            Run => "RUN",
            New => "NEW",
            Clear => "CLEAR",
            Cont => "CONT",
            Save => "SAVE",
            Load => "LOAD",
            Let => "LET",
            Print => "PRINT",
            Input => "INPUT",
            If => "IF",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Return => "RETURN",
            For => "FOR",
            Next => "NEXT",
            Stop => "STOP",
            Rem => "REM",
            Dim => "DIM",
            Data => "DATA",
            Read => "READ",
            Restore => "RESTORE",
            Poke => "POKE",
            Beep => "BEEP",
            Wait => "WAIT",
            Cls => "CLS",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    At,
    Tab,
    Then,
    To,
    Not,
    And,
    Or,
    Power,
    LessEqual,
    GreaterEqual,
    NotEqual,
}

pub const KEYWORDS: [Keyword; 11] = [
    Keyword::At,
    Keyword::Tab,
    Keyword::Then,
    Keyword::To,
    Keyword::Not,
    Keyword::And,
    Keyword::Or,
    Keyword::Power,
    Keyword::LessEqual,
    Keyword::GreaterEqual,
    Keyword::NotEqual,
];

impl Keyword {
    pub fn is_symbol(self) -> bool {
        use Keyword::*;
        matches!(self, Power | LessEqual | GreaterEqual | NotEqual)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Keyword::*;
        let s = match self {
            At => "AT",
            Tab => "TAB",
            Then => "THEN",
            To => "TO",
            Not => "NOT",
            And => "AND",
            Or => "OR",
            Power => "**",
            LessEqual => "<=",
            GreaterEqual => ">=",
            NotEqual => "<>",
        };
        write!(f, "{}", s)
    }
}

pub const THEN: u8 = Token::Keyword(Keyword::Then).code();
pub const TO: u8 = Token::Keyword(Keyword::To).code();
pub const AT: u8 = Token::Keyword(Keyword::At).code();
pub const TAB: u8 = Token::Keyword(Keyword::Tab).code();
pub const NOT: u8 = Token::Keyword(Keyword::Not).code();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_ranges() {
        assert_eq!(Token::Word(Word::List).code(), 0xE6);
        assert_eq!(Token::Word(Word::Cls).code(), 0xFF);
        assert_eq!(Token::Keyword(Keyword::At).code(), 0xDB);
        assert_eq!(Token::Keyword(Keyword::NotEqual).code(), 0xE5);
        assert_eq!(Token::from_code(0xD4), None);
        assert!(is_token(0xD4));
        for code in FIRST_KEYWORD..=0xFF {
            let token = Token::from_code(code).unwrap();
            assert_eq!(token.code(), code);
            assert_eq!(Token::from_string(&token.to_string()), Some(token));
        }
    }

    #[test]
    fn test_spacing() {
        assert!(Token::Word(Word::Print).is_spaced());
        assert!(Token::Keyword(Keyword::Then).is_spaced());
        assert!(!Token::Keyword(Keyword::Power).is_spaced());
    }
}
