//! Token definitions for the Jack language
//!
//! All tokens are defined with the logos derive macro. Whitespace and both
//! comment forms (`// ...` and `/* ... */`, non-nested) are skipped at this
//! level, so comment text never reaches classification.
//!
//! String literals are scanned as a single token: once the opening quote is
//! seen, everything up to the matching closing quote (whitespace and symbol
//! characters included) belongs to the literal. The stored lexeme excludes
//! the surrounding quotes. A Jack string may not contain a newline, so a
//! quote with no closing quote on the same line fails to match and surfaces
//! as a lexical error.

use logos::Logos;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

/// Binary operators of the expression grammar
static BINARY_OPS: Lazy<HashSet<char>> = Lazy::new(|| "+-*/&|<>=".chars().collect());

/// Unary operators, valid only in term position
static UNARY_OPS: Lazy<HashSet<char>> = Lazy::new(|| "-~".chars().collect());

/// Keywords that may stand alone as a term
static KEYWORD_CONSTANTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["true", "false", "null", "this"].into_iter().collect());

fn keyword(lex: &mut logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

fn symbol(lex: &mut logos::Lexer<Token>) -> char {
    // the symbol pattern matches exactly one ASCII character
    lex.slice().as_bytes()[0] as char
}

fn string_body(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// All possible tokens in a Jack source file
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", content = "lexeme", rename_all = "camelCase")]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Token {
    #[token("class", keyword)]
    #[token("constructor", keyword)]
    #[token("function", keyword)]
    #[token("method", keyword)]
    #[token("field", keyword)]
    #[token("static", keyword)]
    #[token("var", keyword)]
    #[token("int", keyword)]
    #[token("char", keyword)]
    #[token("boolean", keyword)]
    #[token("void", keyword)]
    #[token("true", keyword)]
    #[token("false", keyword)]
    #[token("null", keyword)]
    #[token("this", keyword)]
    #[token("let", keyword)]
    #[token("do", keyword)]
    #[token("if", keyword)]
    #[token("else", keyword)]
    #[token("while", keyword)]
    #[token("return", keyword)]
    Keyword(String),

    #[regex(r"[{}()\[\].,;+\-*/&|<>=~]", symbol)]
    Symbol(char),

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    IntegerConstant(String),

    #[regex(r#""[^"\n]*""#, string_body)]
    StringConstant(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl Token {
    /// Category name as used in tag output
    pub fn category(&self) -> &'static str {
        match self {
            Token::Keyword(_) => "keyword",
            Token::Symbol(_) => "symbol",
            Token::IntegerConstant(_) => "integerConstant",
            Token::StringConstant(_) => "stringConstant",
            Token::Identifier(_) => "identifier",
        }
    }

    /// The literal text of this token
    pub fn lexeme(&self) -> String {
        match self {
            Token::Keyword(text)
            | Token::IntegerConstant(text)
            | Token::StringConstant(text)
            | Token::Identifier(text) => text.clone(),
            Token::Symbol(c) => c.to_string(),
        }
    }

    pub fn is_symbol(&self, expected: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == expected)
    }

    pub fn is_keyword(&self, expected: &str) -> bool {
        matches!(self, Token::Keyword(kw) if kw == expected)
    }

    /// Check if this token is a binary operator in expression position
    pub fn is_binary_op(&self) -> bool {
        matches!(self, Token::Symbol(c) if BINARY_OPS.contains(c))
    }

    /// Check if this token is a unary operator in term position
    pub fn is_unary_op(&self) -> bool {
        matches!(self, Token::Symbol(c) if UNARY_OPS.contains(c))
    }

    /// Check if this token is a keyword constant (`true`, `false`, `null`, `this`)
    pub fn is_keyword_constant(&self) -> bool {
        matches!(self, Token::Keyword(kw) if KEYWORD_CONSTANTS.contains(kw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_ok(source: &str) -> Vec<Token> {
        Token::lexer(source)
            .collect::<Result<Vec<_>, _>>()
            .expect("source should tokenize")
    }

    #[test]
    fn test_keywords() {
        let tokens = lex_ok("class let return");
        assert_eq!(
            tokens,
            vec![
                Token::Keyword("class".to_string()),
                Token::Keyword("let".to_string()),
                Token::Keyword("return".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        // maximal munch: "classy" is longer than the keyword "class"
        let tokens = lex_ok("classy doer");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("classy".to_string()),
                Token::Identifier("doer".to_string()),
            ]
        );
    }

    #[test]
    fn test_symbols_split_adjacent_text() {
        let tokens = lex_ok("x=y+1;");
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("x".to_string()),
                Token::Symbol('='),
                Token::Identifier("y".to_string()),
                Token::Symbol('+'),
                Token::IntegerConstant("1".to_string()),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_string_with_spaces_and_symbols() {
        let tokens = lex_ok(r#"let s = "a + b; (c)";"#);
        assert_eq!(tokens[3], Token::StringConstant("a + b; (c)".to_string()));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_empty_string_literal() {
        let tokens = lex_ok(r#""""#);
        assert_eq!(tokens, vec![Token::StringConstant(String::new())]);
    }

    #[test]
    fn test_line_comment_skipped() {
        let tokens = lex_ok("let x; // let y;\nreturn;");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3], Token::Keyword("return".to_string()));
    }

    #[test]
    fn test_block_comment_skipped() {
        let tokens = lex_ok("let /* anything; { } */ x;");
        assert_eq!(
            tokens,
            vec![
                Token::Keyword("let".to_string()),
                Token::Identifier("x".to_string()),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_doc_comment_skipped() {
        let tokens = lex_ok("/** API doc **/ class");
        assert_eq!(tokens, vec![Token::Keyword("class".to_string())]);
    }

    #[test]
    fn test_multiline_block_comment_skipped() {
        let tokens = lex_ok("/* line one\n * line two\n */ return");
        assert_eq!(tokens, vec![Token::Keyword("return".to_string())]);
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let results: Vec<_> = Token::lexer(r#"let s = "abc"#).collect();
        assert!(results.iter().any(|r| r.is_err()));
    }

    #[test]
    fn test_stray_character_is_error() {
        let results: Vec<_> = Token::lexer("let x = 1 # 2;").collect();
        assert!(results.iter().any(|r| r.is_err()));
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Symbol('+').is_binary_op());
        assert!(Token::Symbol('=').is_binary_op());
        assert!(!Token::Symbol('~').is_binary_op());
        assert!(Token::Symbol('~').is_unary_op());
        assert!(Token::Symbol('-').is_unary_op());
        assert!(Token::Keyword("this".to_string()).is_keyword_constant());
        assert!(!Token::Keyword("let".to_string()).is_keyword_constant());
        assert!(Token::Symbol('{').is_symbol('{'));
        assert!(Token::Keyword("var".to_string()).is_keyword("var"));
    }

    #[test]
    fn test_categories_and_lexemes() {
        assert_eq!(Token::Keyword("int".to_string()).category(), "keyword");
        assert_eq!(Token::Symbol('<').category(), "symbol");
        assert_eq!(Token::Symbol('<').lexeme(), "<");
        assert_eq!(
            Token::IntegerConstant("42".to_string()).category(),
            "integerConstant"
        );
        assert_eq!(
            Token::StringConstant("hi".to_string()).category(),
            "stringConstant"
        );
        assert_eq!(Token::Identifier("x".to_string()).lexeme(), "x");
    }

    #[test]
    fn test_serialize_category_and_lexeme() {
        let json = serde_json::to_string(&Token::Keyword("class".to_string()))
            .expect("token serializes");
        assert_eq!(json, r#"{"category":"keyword","lexeme":"class"}"#);

        let json =
            serde_json::to_string(&Token::Symbol('{')).expect("token serializes");
        assert_eq!(json, r#"{"category":"symbol","lexeme":"{"}"#);
    }
}
