//! # Pocket BASIC
//!
//! BASIC the way it ran on small home computers: a 32 column display, an
//! edit line that checks every key as it is typed, and programs kept in
//! a few kilobytes of packed memory.
//!
//! Run the `basic` executable in a terminal. If you get an empty display
//! with an inverted `K` at the bottom, you have achieved success.
//! ```text
//!
//! K
//! ```
//!
//! Programs can be given on the command line too. `basic FILE.bas` types
//! each line of the file and runs it, printing what the display shows.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod slot;
