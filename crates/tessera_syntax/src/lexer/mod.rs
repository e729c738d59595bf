//! Lexer for Tessera source units.
//!
//! Handles tokenization including:
//! - Keywords (resolved against the active [`LanguageDefinition`], aliases included) and identifiers
//! - Number and string literals
//! - Punctuation and operators from the `tessera_core::lang` registries
//! - One-line and multiline comments, with the marks taken from the language definition
//! - Newlines (spaces, tabs and carriage returns are skipped)
//!
//! Lexing never fails. Unclosed comments/strings and stray characters are recorded as blames in the unit's
//! diagnostics and produce degraded tokens; the token list always ends with [`TokenKind::Eof`].
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Token, TokenKind, TokenId, CommentInfo)
//! - `comments` - One-line / multiline comment readers
//! - `literals` - Words, numbers, strings, symbols, newlines, invalid characters

mod comments;
mod literals;
pub mod tokens;

pub use tokens::{CommentInfo, Token, TokenId, TokenKind};

use tessera_core::LanguageDefinition;

use crate::ast::Span;
use crate::diagnostics::Diagnostics;
use crate::source::SourceUnit;
use crate::stream::CharStream;

/// Lexer over one source text.
pub struct Lexer<'a> {
    stream: CharStream<'a>,
    lang: &'a LanguageDefinition,
    diagnostics: &'a mut Diagnostics,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, lang: &'a LanguageDefinition, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            stream: CharStream::new(source),
            lang,
            diagnostics,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            self.skip_blanks();
            let id = TokenId(self.tokens.len());
            if self.stream.at_end_of_input() {
                let mut eof = Token::new(id, TokenKind::Eof);
                eof.span = Span::point(self.stream.location());
                self.tokens.push(eof);
                return self.tokens;
            }
            let token = self.scan_token(id);
            self.tokens.push(token);
        }
    }

    fn skip_blanks(&mut self) {
        while let Some(c) = self.stream.peek() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.stream.advance();
            } else {
                break;
            }
        }
    }

    /// Dispatch on the next characters. Multiline marks are tried before one-line marks so that a definition whose
    /// multiline mark extends its one-line mark (e.g. `###` and `#`) lexes correctly.
    fn scan_token(&mut self, id: TokenId) -> Token {
        let stream = &mut self.stream;
        let lang = self.lang;
        let diagnostics = &mut *self.diagnostics;

        if stream.peek_is(&lang.multiline_open) {
            return comments::read_multiline(stream, lang, diagnostics, id);
        }
        if stream.peek_is(&lang.oneline_comment) {
            return comments::read_oneline(stream, lang, diagnostics, id);
        }
        match stream.peek() {
            Some('\n') => literals::read_newline(stream, id),
            Some(c) if c == lang.string_quote => literals::read_string(stream, lang, diagnostics, id),
            Some(c) if c.is_ascii_digit() => literals::read_number(stream, id),
            Some(c) if literals::is_ident_start(c) => literals::read_word(stream, lang, id),
            _ => literals::read_symbol(stream, diagnostics, id),
        }
    }
}

/// Lex a source unit, recording lexical blames in its diagnostics.
#[tracing::instrument(skip_all, fields(unit = unit.name(), source_len = unit.text().len()))]
pub fn lex(unit: &mut SourceUnit, lang: &LanguageDefinition) -> Vec<Token> {
    let SourceUnit { text, diagnostics, .. } = unit;
    Lexer::new(text, lang, diagnostics).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
