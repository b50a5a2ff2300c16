//! Lexical analysis for Jack source text
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams: the
//! parser operates on the `Vec<(Token, Span)>` produced here and never sees
//! the source text except to resolve error positions.

use crate::jack::position::Position;
use crate::jack::tokens::Token;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Byte range of a token within the source text
pub type Span = Range<usize>;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// An opening quote with no closing quote before end of line or input
    UnterminatedString { position: Position },
    /// A character outside the symbol/keyword/identifier/constant classes
    UnexpectedCharacter { character: char, position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedString { position } => {
                write!(f, "lexical error at {}: unterminated string literal", position)
            }
            LexError::UnexpectedCharacter { character, position } => {
                write!(
                    f,
                    "lexical error at {}: unexpected character '{}'",
                    position, character
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize source text with location information.
///
/// Returns the complete token sequence in source order, each token paired
/// with its byte span. Lexing is all-or-nothing: the first malformed input
/// aborts with a [`LexError`], no partial sequence is returned.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(classify_failure(source, lexer.span())),
        }
    }

    Ok(tokens)
}

/// Decide which lexical error a failed span represents.
///
/// A failure starting with a double quote means the quote never found its
/// closing partner on the same line; anything else is a stray character.
fn classify_failure(source: &str, span: Span) -> LexError {
    let position = Position::from_offset(source, span.start);
    match source[span.start..].chars().next() {
        Some('"') => LexError::UnterminatedString { position },
        Some(character) => LexError::UnexpectedCharacter { character, position },
        None => LexError::UnterminatedString { position },
    }
}
