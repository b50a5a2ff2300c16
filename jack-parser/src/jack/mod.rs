//! Main module for the Jack analyzer library

pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod position;
pub mod processor;
pub mod testing;
pub mod tokens;
