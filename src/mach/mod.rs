/*!
## Rust Machine Module

This Rust module is the interpreter for BASIC. Lines are kept crunched
in a packed program store and interpreted directly from there; the same
statement checker runs over a line as it is typed and as it is run.

*/

mod capture;
mod config;
mod display;
mod edit;
mod eval;
mod function;
mod host;
mod operation;
mod printer;
mod program;
mod runtime;
mod scan;
mod stack;
mod state;
mod statement;
mod syntax;
mod val;
mod var;

pub use capture::Capture;
pub use config::Config;
pub use display::Display;
pub use edit::Edit;
pub use function::Function;
pub use host::Host;
pub use host::Key;
pub use operation::Op;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Runtime;
pub use runtime::Status;
pub use scan::IdentKind;
pub use stack::Stack;
pub use state::{CursorMode, Mode};
pub use syntax::{descriptor, Class};
pub use val::Val;
pub use var::{Family, Var, Variable};
