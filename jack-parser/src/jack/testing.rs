//! Test support: structural checks over tag output
//!
//! The parse tree's logical shape is the contract under test, so the
//! integration suites need to scan emitted output structurally: confirm
//! every closing tag matches the most recently opened tag, and recover the
//! leaf lexemes in output order for round-trip comparison against the token
//! sequence.

use crate::jack::lexing::Span;
use crate::jack::tokens::Token;

/// One classified line of tag output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLine {
    Open(String),
    Close(String),
    Leaf { category: String, lexeme: String },
}

/// Classify a single line of tag output. Blank lines yield `None`.
pub fn classify_line(line: &str) -> Option<TagLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(name) = line.strip_prefix("</").and_then(|rest| rest.strip_suffix('>')) {
        return Some(TagLine::Close(name.to_string()));
    }
    let rest = line.strip_prefix('<')?;
    let close = rest.find('>')?;
    let name = &rest[..close];
    let body = &rest[close + 1..];
    if body.is_empty() {
        return Some(TagLine::Open(name.to_string()));
    }
    // leaf lines look like "<category> lexeme </category>"
    let body = body
        .strip_suffix('>')?
        .strip_suffix(name)?
        .strip_suffix("</")?;
    let lexeme = body.strip_prefix(' ')?.strip_suffix(' ')?;
    Some(TagLine::Leaf {
        category: name.to_string(),
        lexeme: unescape_markup(lexeme),
    })
}

/// Reverse of the emitter's escaping
pub fn unescape_markup(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Stack-based scan confirming every closing tag matches the most recently
/// unmatched opening tag, with nothing left open at the end
pub fn check_tag_balance(output: &str) -> Result<(), String> {
    let mut stack: Vec<String> = Vec::new();
    for (number, line) in output.lines().enumerate() {
        match classify_line(line) {
            Some(TagLine::Open(name)) => stack.push(name),
            Some(TagLine::Close(name)) => match stack.pop() {
                Some(open) if open == name => {}
                Some(open) => {
                    return Err(format!(
                        "line {}: </{}> closes <{}>",
                        number + 1,
                        name,
                        open
                    ))
                }
                None => return Err(format!("line {}: </{}> with nothing open", number + 1, name)),
            },
            Some(TagLine::Leaf { .. }) | None => {}
        }
    }
    if let Some(open) = stack.pop() {
        return Err(format!("<{}> never closed", open));
    }
    Ok(())
}

/// Leaf lexemes in output order, unescaped
pub fn leaf_lexemes(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(classify_line)
        .filter_map(|line| match line {
            TagLine::Leaf { lexeme, .. } => Some(lexeme),
            _ => None,
        })
        .collect()
}

/// Lexemes of a token sequence, for round-trip comparison
pub fn token_lexemes(tokens: &[(Token, Span)]) -> Vec<String> {
    tokens.iter().map(|(token, _)| token.lexeme()).collect()
}
