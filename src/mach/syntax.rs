use crate::lang::charset::EQUALS;
use crate::lang::token::{Word, THEN};

/// One step in checking a statement's operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    NoOperands,
    /// A variable, array element or string variable to assign to.
    VariableRequired,
    /// An expression of the same type as the target before it.
    ExpressionEitherType,
    /// A number if anything is left on the line.
    OptionalNumericExpression,
    /// A plain numeric variable.
    IntegerVariableTarget,
    /// The handler reads the rest of the line itself.
    SelfParsed,
    NumericExpressionRequired,
    /// This exact byte.
    Literal(u8),
}

/// The operand classes of each statement, in order.
pub fn descriptor(word: Word) -> &'static [Class] {
    use Class::*;
    match word {
        Word::List | Word::Run | Word::Restore => &[OptionalNumericExpression],
        Word::New | Word::Clear | Word::Cont | Word::Return | Word::Stop | Word::Cls => {
            &[NoOperands]
        }
        Word::Save | Word::Load | Word::Goto | Word::Gosub | Word::Wait => {
            &[NumericExpressionRequired]
        }
        Word::Let => &[VariableRequired, Literal(EQUALS), ExpressionEitherType],
        Word::Input | Word::Read => &[VariableRequired],
        Word::If => &[NumericExpressionRequired, Literal(THEN), SelfParsed],
        Word::Next => &[IntegerVariableTarget],
        Word::Print
        | Word::For
        | Word::Rem
        | Word::Dim
        | Word::Data
        | Word::Poke
        | Word::Beep => &[SelfParsed],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::token::WORDS;

    #[test]
    fn test_every_word_has_a_descriptor() {
        for &word in WORDS.iter() {
            let classes = descriptor(word);
            assert!(!classes.is_empty());
            if let Some(i) = classes.iter().position(|&c| c == Class::SelfParsed) {
                assert_eq!(i, classes.len() - 1, "{}", word);
            }
        }
    }
}
