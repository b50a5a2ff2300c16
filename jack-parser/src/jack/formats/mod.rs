//! Output formats for the analyzer
//!
//! `tag` emits the nested parse-tree format; `token_stream` emits flat
//! token listings (XML and JSON). All formatters are purely mechanical:
//! they know nothing about the grammar.

pub mod tag;
pub mod token_stream;

pub use tag::{escape_markup, TagError, TagWriter};
pub use token_stream::{tokens_to_json, tokens_to_xml};
