//! Minimal compiler front end
//!
//! Turns source text into classified tokens, parses a single
//! `int <name> = <number>;` declaration into an AST and keeps declared
//! names in a symbol table.

pub mod lexer;
pub mod parser;
pub mod symbol;

pub use lexer::*;
pub use parser::*;
pub use symbol::*;
