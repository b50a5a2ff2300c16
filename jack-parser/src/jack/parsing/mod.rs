//! Recursive-descent syntactic analysis
//!
//! One procedure per grammar nonterminal: each emits its opening tag,
//! consumes leaf tokens and invokes child procedures in grammar order, then
//! emits its closing tag. The grammar needs at most one token of lookahead
//! at every decision point, so the engine runs on a [`TokenCursor`] with
//! `peek`/`advance` only, with no backtracking or rewinding.
//!
//! Parsing is all-or-nothing. Any expected-token mismatch or premature end
//! of input aborts with a [`ParseError`]; there is no recovery and no
//! partial tree is ever returned as valid output.

pub mod cursor;
pub mod engine;

pub use cursor::TokenCursor;
pub use engine::parse_to_tag;

use crate::jack::formats::tag::TagError;
use crate::jack::position::Position;
use std::fmt;

/// Errors that can occur during syntactic analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The grammar required one thing and the stream held another
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },
    /// The stream ran out mid-production
    UnexpectedEndOfInput { expected: String },
    /// Tag emission went out of balance (unreachable from a correct engine,
    /// but enforced rather than assumed)
    Unbalanced(TagError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                position,
            } => {
                write!(
                    f,
                    "syntax error at {}: expected {}, found {}",
                    position, expected, found
                )
            }
            ParseError::UnexpectedEndOfInput { expected } => {
                write!(f, "syntax error: expected {}, found end of input", expected)
            }
            ParseError::Unbalanced(err) => write!(f, "unbalanced tag output: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<TagError> for ParseError {
    fn from(err: TagError) -> Self {
        ParseError::Unbalanced(err)
    }
}
