//! Recursive-descent parse engine for the Jack grammar
//!
//! Grammar (one procedure per nonterminal):
//!
//! ```text
//! class         := 'class' identifier '{' classVarDec* subroutineDec* '}'
//! classVarDec   := ('static'|'field') type identifier (',' identifier)* ';'
//! subroutineDec := ('constructor'|'function'|'method') (type|'void') identifier
//!                  '(' parameterList ')' subroutineBody
//! parameterList := ( type identifier (',' type identifier)* )?
//! subroutineBody:= '{' varDec* statements '}'
//! varDec        := 'var' type identifier (',' identifier)* ';'
//! statements    := statement*
//! statement     := letStatement | ifStatement | whileStatement
//!                  | doStatement | returnStatement
//! letStatement  := 'let' identifier ('[' expression ']')? '=' expression ';'
//! ifStatement   := 'if' '(' expression ')' '{' statements '}'
//!                  ('else' '{' statements '}')?
//! whileStatement:= 'while' '(' expression ')' '{' statements '}'
//! doStatement   := 'do' subroutineCall ';'
//! returnStatement := 'return' expression? ';'
//! expression    := term (binaryOp term)*
//! term          := integerConstant | stringConstant | keywordConstant
//!                  | identifier | identifier '[' expression ']'
//!                  | subroutineCall | '(' expression ')' | unaryOp term
//! subroutineCall:= identifier '(' expressionList ')'
//!                  | identifier '.' identifier '(' expressionList ')'
//! expressionList:= ( expression (',' expression)* )?
//! ```
//!
//! `statement` and `subroutineCall` are dispatch/helper procedures: their
//! tokens are emitted directly under the enclosing node rather than in a
//! tag of their own. Every other nonterminal emits exactly one tag pair.
//!
//! Expressions are deliberately flat: one term, then operator/term pairs in
//! source order, with no precedence tree. Operator grouping belongs to a
//! later compilation stage, not to this one.

use crate::jack::formats::tag::TagWriter;
use crate::jack::lexing::Span;
use crate::jack::parsing::cursor::TokenCursor;
use crate::jack::parsing::ParseError;
use crate::jack::position::Position;
use crate::jack::tokens::Token;

/// Statement kinds, dispatched on the leading keyword
#[derive(Debug, Clone, Copy)]
enum StatementKind {
    Let,
    If,
    While,
    Do,
    Return,
}

/// Parse a token sequence into the nested tag format.
///
/// The whole sequence must form exactly one `class` production; trailing
/// tokens are an error. The tree is emitted in pre-order as the productions
/// recurse, so nothing is buffered beyond the output string itself.
pub fn parse_to_tag(source: &str, tokens: Vec<(Token, Span)>) -> Result<String, ParseError> {
    let mut parser = Parser {
        source,
        cursor: TokenCursor::new(tokens),
        writer: TagWriter::new(),
    };
    parser.parse_class()?;
    if !parser.cursor.at_end() {
        return Err(parser.unexpected("end of input"));
    }
    parser.writer.finish().map_err(ParseError::from)
}

/// Parsing context: the cursor, the emitter, and the source for diagnostics.
///
/// All mutable parse state lives here and is owned by one call chain, so
/// independent files can be analyzed without any shared state.
struct Parser<'s> {
    source: &'s str,
    cursor: TokenCursor,
    writer: TagWriter,
}

impl Parser<'_> {
    // ---- token-level helpers ------------------------------------------

    fn describe(token: &Token) -> String {
        format!("{} '{}'", token.category(), token.lexeme())
    }

    /// Build the error for the current lookahead token (or end of input)
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.cursor.peek() {
            Some((token, span)) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: Self::describe(token),
                position: Position::from_offset(self.source, span.start),
            },
            None => ParseError::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
        }
    }

    /// Consume the current token and emit it as a leaf
    fn emit_advance(&mut self) -> Result<(), ParseError> {
        match self.cursor.advance() {
            Some((token, _)) => {
                self.writer.leaf(token.category(), &token.lexeme());
                Ok(())
            }
            None => Err(ParseError::UnexpectedEndOfInput {
                expected: "a token".to_string(),
            }),
        }
    }

    fn next_is_symbol(&self, symbol: char) -> bool {
        matches!(self.cursor.peek(), Some((token, _)) if token.is_symbol(symbol))
    }

    fn next_is_keyword(&self, keyword: &str) -> bool {
        matches!(self.cursor.peek(), Some((token, _)) if token.is_keyword(keyword))
    }

    fn next_is_keyword_of(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.next_is_keyword(kw))
    }

    /// True when the lookahead can begin a type: a builtin type keyword or a
    /// class-name identifier
    fn next_starts_type(&self) -> bool {
        match self.cursor.peek() {
            Some((Token::Keyword(kw), _)) => matches!(kw.as_str(), "int" | "char" | "boolean"),
            Some((Token::Identifier(_), _)) => true,
            _ => false,
        }
    }

    fn expect_symbol(&mut self, symbol: char) -> Result<(), ParseError> {
        if self.next_is_symbol(symbol) {
            self.emit_advance()
        } else {
            Err(self.unexpected(&format!("symbol '{}'", symbol)))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        if self.next_is_keyword(keyword) {
            self.emit_advance()
        } else {
            Err(self.unexpected(&format!("keyword '{}'", keyword)))
        }
    }

    fn expect_identifier(&mut self) -> Result<(), ParseError> {
        if matches!(self.cursor.peek(), Some((Token::Identifier(_), _))) {
            self.emit_advance()
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    /// Consume a type name; `allow_void` admits the `void` return type
    fn expect_type(&mut self, allow_void: bool) -> Result<(), ParseError> {
        let matches_type = self.next_starts_type() || (allow_void && self.next_is_keyword("void"));
        if matches_type {
            self.emit_advance()
        } else if allow_void {
            Err(self.unexpected("a type or 'void'"))
        } else {
            Err(self.unexpected("a type"))
        }
    }

    // ---- declarations -------------------------------------------------

    fn parse_class(&mut self) -> Result<(), ParseError> {
        self.writer.open("class");
        self.expect_keyword("class")?;
        self.expect_identifier()?;
        self.expect_symbol('{')?;
        while self.next_is_keyword_of(&["static", "field"]) {
            self.parse_class_var_dec()?;
        }
        while self.next_is_keyword_of(&["constructor", "function", "method"]) {
            self.parse_subroutine_dec()?;
        }
        self.expect_symbol('}')?;
        self.writer.close("class")?;
        Ok(())
    }

    fn parse_class_var_dec(&mut self) -> Result<(), ParseError> {
        self.writer.open("classVarDec");
        self.emit_advance()?; // 'static' or 'field', checked by the caller
        self.expect_type(false)?;
        self.expect_identifier()?;
        while self.next_is_symbol(',') {
            self.emit_advance()?;
            self.expect_identifier()?;
        }
        self.expect_symbol(';')?;
        self.writer.close("classVarDec")?;
        Ok(())
    }

    fn parse_subroutine_dec(&mut self) -> Result<(), ParseError> {
        self.writer.open("subroutineDec");
        self.emit_advance()?; // 'constructor', 'function', or 'method'
        self.expect_type(true)?;
        self.expect_identifier()?;
        self.expect_symbol('(')?;
        self.parse_parameter_list()?;
        self.expect_symbol(')')?;
        self.parse_subroutine_body()?;
        self.writer.close("subroutineDec")?;
        Ok(())
    }

    fn parse_parameter_list(&mut self) -> Result<(), ParseError> {
        self.writer.open("parameterList");
        if self.next_starts_type() {
            self.expect_type(false)?;
            self.expect_identifier()?;
            while self.next_is_symbol(',') {
                self.emit_advance()?;
                self.expect_type(false)?;
                self.expect_identifier()?;
            }
        }
        self.writer.close("parameterList")?;
        Ok(())
    }

    fn parse_subroutine_body(&mut self) -> Result<(), ParseError> {
        self.writer.open("subroutineBody");
        self.expect_symbol('{')?;
        while self.next_is_keyword("var") {
            self.parse_var_dec()?;
        }
        self.parse_statements()?;
        self.expect_symbol('}')?;
        self.writer.close("subroutineBody")?;
        Ok(())
    }

    fn parse_var_dec(&mut self) -> Result<(), ParseError> {
        self.writer.open("varDec");
        self.expect_keyword("var")?;
        self.expect_type(false)?;
        self.expect_identifier()?;
        while self.next_is_symbol(',') {
            self.emit_advance()?;
            self.expect_identifier()?;
        }
        self.expect_symbol(';')?;
        self.writer.close("varDec")?;
        Ok(())
    }

    // ---- statements ---------------------------------------------------

    /// Statement dispatch on the leading keyword; exactly one handler fires
    fn peek_statement_kind(&self) -> Option<StatementKind> {
        match self.cursor.peek() {
            Some((Token::Keyword(kw), _)) => match kw.as_str() {
                "let" => Some(StatementKind::Let),
                "if" => Some(StatementKind::If),
                "while" => Some(StatementKind::While),
                "do" => Some(StatementKind::Do),
                "return" => Some(StatementKind::Return),
                _ => None,
            },
            _ => None,
        }
    }

    fn parse_statements(&mut self) -> Result<(), ParseError> {
        self.writer.open("statements");
        while let Some(kind) = self.peek_statement_kind() {
            match kind {
                StatementKind::Let => self.parse_let_statement()?,
                StatementKind::If => self.parse_if_statement()?,
                StatementKind::While => self.parse_while_statement()?,
                StatementKind::Do => self.parse_do_statement()?,
                StatementKind::Return => self.parse_return_statement()?,
            }
        }
        self.writer.close("statements")?;
        Ok(())
    }

    fn parse_let_statement(&mut self) -> Result<(), ParseError> {
        self.writer.open("letStatement");
        self.expect_keyword("let")?;
        self.expect_identifier()?;
        if self.next_is_symbol('[') {
            self.emit_advance()?;
            self.parse_expression()?;
            self.expect_symbol(']')?;
        }
        self.expect_symbol('=')?;
        self.parse_expression()?;
        self.expect_symbol(';')?;
        self.writer.close("letStatement")?;
        Ok(())
    }

    fn parse_if_statement(&mut self) -> Result<(), ParseError> {
        self.writer.open("ifStatement");
        self.expect_keyword("if")?;
        self.expect_symbol('(')?;
        self.parse_expression()?;
        self.expect_symbol(')')?;
        self.expect_symbol('{')?;
        self.parse_statements()?;
        self.expect_symbol('}')?;
        if self.next_is_keyword("else") {
            self.emit_advance()?;
            self.expect_symbol('{')?;
            self.parse_statements()?;
            self.expect_symbol('}')?;
        }
        self.writer.close("ifStatement")?;
        Ok(())
    }

    fn parse_while_statement(&mut self) -> Result<(), ParseError> {
        self.writer.open("whileStatement");
        self.expect_keyword("while")?;
        self.expect_symbol('(')?;
        self.parse_expression()?;
        self.expect_symbol(')')?;
        self.expect_symbol('{')?;
        self.parse_statements()?;
        self.expect_symbol('}')?;
        self.writer.close("whileStatement")?;
        Ok(())
    }

    fn parse_do_statement(&mut self) -> Result<(), ParseError> {
        self.writer.open("doStatement");
        self.expect_keyword("do")?;
        self.parse_subroutine_call()?;
        self.expect_symbol(';')?;
        self.writer.close("doStatement")?;
        Ok(())
    }

    fn parse_return_statement(&mut self) -> Result<(), ParseError> {
        self.writer.open("returnStatement");
        self.expect_keyword("return")?;
        if !self.next_is_symbol(';') {
            self.parse_expression()?;
        }
        self.expect_symbol(';')?;
        self.writer.close("returnStatement")?;
        Ok(())
    }

    // ---- expressions --------------------------------------------------

    /// Flat, precedence-free: one term, then operator/term pairs as long as
    /// the lookahead is a binary operator
    fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.writer.open("expression");
        self.parse_term()?;
        while matches!(self.cursor.peek(), Some((token, _)) if token.is_binary_op()) {
            self.emit_advance()?;
            self.parse_term()?;
        }
        self.writer.close("expression")?;
        Ok(())
    }

    fn parse_term(&mut self) -> Result<(), ParseError> {
        self.writer.open("term");
        match self.cursor.peek() {
            Some((Token::IntegerConstant(_), _)) | Some((Token::StringConstant(_), _)) => {
                self.emit_advance()?;
            }
            Some((token, _)) if token.is_keyword_constant() => {
                self.emit_advance()?;
            }
            Some((token, _)) if token.is_symbol('(') => {
                self.emit_advance()?;
                self.parse_expression()?;
                self.expect_symbol(')')?;
            }
            Some((token, _)) if token.is_unary_op() => {
                self.emit_advance()?;
                self.parse_term()?;
            }
            Some((Token::Identifier(_), _)) => {
                // one token of lookahead decides the term shape: '[' means
                // array access, '(' or '.' means subroutine call, anything
                // else is a plain variable reference
                self.emit_advance()?;
                if self.next_is_symbol('[') {
                    self.emit_advance()?;
                    self.parse_expression()?;
                    self.expect_symbol(']')?;
                } else if self.next_is_symbol('(') || self.next_is_symbol('.') {
                    self.parse_call_tail()?;
                }
            }
            _ => return Err(self.unexpected("a term")),
        }
        self.writer.close("term")?;
        Ok(())
    }

    /// subroutineCall with the leading identifier already consumed
    fn parse_call_tail(&mut self) -> Result<(), ParseError> {
        if self.next_is_symbol('.') {
            self.emit_advance()?;
            self.expect_identifier()?;
        }
        self.expect_symbol('(')?;
        self.parse_expression_list()?;
        self.expect_symbol(')')?;
        Ok(())
    }

    /// subroutineCall in statement position (`do` statements)
    fn parse_subroutine_call(&mut self) -> Result<(), ParseError> {
        self.expect_identifier()?;
        self.parse_call_tail()
    }

    fn parse_expression_list(&mut self) -> Result<(), ParseError> {
        self.writer.open("expressionList");
        if !self.next_is_symbol(')') && !self.cursor.at_end() {
            self.parse_expression()?;
            while self.next_is_symbol(',') {
                self.emit_advance()?;
                self.parse_expression()?;
            }
        }
        self.writer.close("expressionList")?;
        Ok(())
    }
}
