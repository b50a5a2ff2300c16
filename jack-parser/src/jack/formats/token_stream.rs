//! Flat token-stream formats
//!
//! Unlike the tag format, which reflects parse-tree structure, these
//! formatters list the token sequence as produced by the lexer: one leaf
//! per line in the XML form, or a JSON array of category/lexeme records.

use crate::jack::formats::tag::escape_markup;
use crate::jack::lexing::Span;
use crate::jack::tokens::Token;

/// Render a token sequence as a flat `<tokens>` listing, one token per line
pub fn tokens_to_xml(tokens: &[(Token, Span)]) -> String {
    let mut out = String::from("<tokens>\n");
    for (token, _) in tokens {
        let category = token.category();
        out.push_str(&format!(
            "<{0}> {1} </{0}>\n",
            category,
            escape_markup(&token.lexeme())
        ));
    }
    out.push_str("</tokens>\n");
    out
}

/// Render a token sequence as a pretty-printed JSON array
pub fn tokens_to_json(tokens: &[(Token, Span)]) -> serde_json::Result<String> {
    let bare: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
    serde_json::to_string_pretty(&bare)
}
