//! # jack-parser
//!
//! Lexer and recursive-descent parse-tree emitter for the Jack language.
//!
//! The pipeline has two stages: [lexing](jack::lexing) turns source text into
//! a flat token sequence, and [parsing](jack::parsing) consumes that sequence
//! while emitting a fully nested, tag-delimited parse tree. The tree is
//! serialized incrementally in pre-order and is never materialized in memory.
//!
//! The [processor](jack::processor) module ties both stages together behind a
//! format-selection API suitable for file-oriented tooling.

pub mod jack;
