//! Sequential read-only view over a token sequence
//!
//! Consumption is strictly left to right and the position never rewinds;
//! the single-token lookahead provided by `peek` is all the grammar needs.

use crate::jack::lexing::Span;
use crate::jack::tokens::Token;

/// Cursor over a lexed token sequence with one-token lookahead
#[derive(Debug)]
pub struct TokenCursor {
    tokens: Vec<(Token, Span)>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<(Token, Span)>) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// The current token, without consuming it
    pub fn peek(&self) -> Option<&(Token, Span)> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the current token
    pub fn advance(&mut self) -> Option<(Token, Span)> {
        let current = self.tokens.get(self.pos).cloned();
        if current.is_some() {
            self.pos += 1;
        }
        current
    }

    /// True when every token has been consumed
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
