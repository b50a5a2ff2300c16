//! Nested tag emission for parse trees
//!
//! The writer is grammar-agnostic: it emits opening tags, closing tags, and
//! leaves (a category tag wrapping a literal lexeme), each indented by the
//! current nesting depth. It tracks open tags on a stack so that a mismatched
//! close or an unclosed tag at the end is reported instead of producing
//! malformed output.
//!
//! ## Format
//!
//! ```text
//! <letStatement>
//!   <keyword> let </keyword>
//!   <identifier> x </identifier>
//!   ...
//! </letStatement>
//! ```

use std::fmt;

/// Errors raised when tag emission would produce unbalanced output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// A closing tag that does not match the innermost open tag
    Mismatch { open: Option<String>, close: String },
    /// An open tag left unclosed when the writer was finalized
    Unclosed { tag: String },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::Mismatch { open: Some(open), close } => {
                write!(f, "closing tag </{}> does not match open tag <{}>", close, open)
            }
            TagError::Mismatch { open: None, close } => {
                write!(f, "closing tag </{}> with no tag open", close)
            }
            TagError::Unclosed { tag } => write!(f, "tag <{}> left unclosed", tag),
        }
    }
}

impl std::error::Error for TagError {}

/// Escape characters that are structurally significant in the tag format
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Incremental writer for the nested tag format
#[derive(Debug, Default)]
pub struct TagWriter {
    out: String,
    stack: Vec<&'static str>,
}

impl TagWriter {
    pub fn new() -> Self {
        TagWriter::default()
    }

    /// Current nesting depth, i.e. the number of unclosed tags
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn indent(&mut self) {
        for _ in 0..self.stack.len() {
            self.out.push_str("  ");
        }
    }

    /// Emit an opening tag and descend one nesting level
    pub fn open(&mut self, tag: &'static str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(">\n");
        self.stack.push(tag);
    }

    /// Emit the matching closing tag and ascend one nesting level
    pub fn close(&mut self, tag: &'static str) -> Result<(), TagError> {
        match self.stack.last() {
            Some(open) if *open == tag => {
                self.stack.pop();
                self.indent();
                self.out.push_str("</");
                self.out.push_str(tag);
                self.out.push_str(">\n");
                Ok(())
            }
            Some(open) => Err(TagError::Mismatch {
                open: Some(open.to_string()),
                close: tag.to_string(),
            }),
            None => Err(TagError::Mismatch {
                open: None,
                close: tag.to_string(),
            }),
        }
    }

    /// Emit a leaf: a category tag wrapping the (escaped) literal lexeme
    pub fn leaf(&mut self, category: &'static str, lexeme: &str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(category);
        self.out.push_str("> ");
        self.out.push_str(&escape_markup(lexeme));
        self.out.push_str(" </");
        self.out.push_str(category);
        self.out.push_str(">\n");
    }

    /// Finalize the writer, failing if any tag is still open
    pub fn finish(self) -> Result<String, TagError> {
        match self.stack.last() {
            Some(tag) => Err(TagError::Unclosed { tag: tag.to_string() }),
            None => Ok(self.out),
        }
    }
}
