/*!
# Rust Language Module

This Rust module provides the character set, tokens, and line crunching
of the BASIC language.

*/

#[macro_use]
mod error;
pub mod charset;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::crunch;
pub use lex::lex;
pub use lex::Crunched;
pub use line::Line;

/// Line numbers run from 1 to [`MAX_LINE_NUMBER`]. Zero is a direct line.
pub type LineNumber = u16;

pub const MAX_LINE_NUMBER: LineNumber = 9999;

/// The machine integer. Every numeric value in BASIC is one of these.
#[cfg(not(feature = "int16"))]
pub type Int = i32;
#[cfg(not(feature = "int16"))]
pub type UInt = u32;

#[cfg(feature = "int16")]
pub type Int = i16;
#[cfg(feature = "int16")]
pub type UInt = u16;
