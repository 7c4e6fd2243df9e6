use crate::lexer::{Position, Token};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// The five sequential steps of `int <name> = <number> ;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Start,
    AfterType,
    AfterName,
    AfterEquals,
    AfterValue,
}

impl Checkpoint {
    /// What the checkpoint required
    pub fn expectation(&self) -> &'static str {
        match self {
            Checkpoint::Start => "unexpected token",
            Checkpoint::AfterType => "expected identifier after 'int'",
            Checkpoint::AfterName => "expected '=' after identifier",
            Checkpoint::AfterEquals => "expected number after '='",
            Checkpoint::AfterValue => "expected ';' at end of declaration",
        }
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Checkpoint::Start => "Start",
            Checkpoint::AfterType => "AfterType",
            Checkpoint::AfterName => "AfterName",
            Checkpoint::AfterEquals => "AfterEquals",
            Checkpoint::AfterValue => "AfterValue",
        };
        write!(f, "{}", s)
    }
}

/// Parser error types
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("{}: found {found} at {} [{checkpoint}]", .checkpoint.expectation(), .found.pos)]
    GrammarViolation { checkpoint: Checkpoint, found: Token },

    #[error("Invalid integer literal '{0}' at {1}")]
    InvalidNumber(String, Position, #[source] ParseIntError),
}

impl ParserError {
    /// Checkpoint the parse stopped at
    pub fn checkpoint(&self) -> Checkpoint {
        match self {
            ParserError::GrammarViolation { checkpoint, .. } => *checkpoint,
            ParserError::InvalidNumber(..) => Checkpoint::AfterEquals,
        }
    }
}
