//! Readers for words, numbers, strings, symbols, newlines and invalid characters.

use tessera_core::LanguageDefinition;
use tessera_core::lang::{operators, punctuation};

use super::tokens::{Token, TokenId, TokenKind};
use crate::diagnostics::{BlameKind, BlameSubject, Diagnostics};
use crate::stream::{CharStream, SpanScope};

/// Check if a character can start an identifier (ASCII-only).
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Consume one character into both raw text and content.
fn take(stream: &mut CharStream<'_>, token: &mut Token) {
    if let Some(c) = stream.advance() {
        token.text.push(c);
        token.content.push(c);
    }
}

pub(super) fn read_newline(stream: &mut CharStream<'_>, id: TokenId) -> Token {
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::Newline));
    let (stream, token) = scope.parts();
    take(stream, token);
    scope.finish()
}

/// Identifier or keyword (resolved against `lang`, aliases included).
pub(super) fn read_word(stream: &mut CharStream<'_>, lang: &LanguageDefinition, id: TokenId) -> Token {
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::Ident));
    let (stream, token) = scope.parts();
    while stream.peek().is_some_and(is_ident_continue) {
        take(stream, token);
    }
    if let Some(keyword) = lang.keyword(&token.text) {
        token.kind = TokenKind::Keyword(keyword);
    }
    scope.finish()
}

/// Digits with an optional fractional part (`1`, `3.25`). A trailing `.` is left for the parser.
pub(super) fn read_number(stream: &mut CharStream<'_>, id: TokenId) -> Token {
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::Number));
    let (stream, token) = scope.parts();
    while stream.peek().is_some_and(|c| c.is_ascii_digit() || c == '_') {
        take(stream, token);
    }
    if stream.peek() == Some('.') && stream.peek_second().is_some_and(|c| c.is_ascii_digit()) {
        take(stream, token);
        while stream.peek().is_some_and(|c| c.is_ascii_digit() || c == '_') {
            take(stream, token);
        }
    }
    scope.finish()
}

/// String literal delimited by `lang.string_quote`. Escapes are kept verbatim in the content.
///
/// A string still open at line end is recorded as [`BlameKind::UnclosedString`] and returned degraded.
pub(super) fn read_string(
    stream: &mut CharStream<'_>,
    lang: &LanguageDefinition,
    diagnostics: &mut Diagnostics,
    id: TokenId,
) -> Token {
    let quote = lang.string_quote;
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::String { unclosed: false }));
    let (stream, token) = scope.parts();

    if let Some(open) = stream.advance() {
        token.text.push(open);
    }
    loop {
        if stream.at_line_end() {
            token.kind = TokenKind::String { unclosed: true };
            let span = scope.current_span();
            diagnostics.blame(BlameKind::UnclosedString, span, BlameSubject::Token(id));
            return scope.finish();
        }
        match stream.peek() {
            Some(c) if c == quote => {
                stream.advance();
                token.text.push(c);
                return scope.finish();
            }
            Some('\\') => {
                take(stream, token);
                if !stream.at_line_end() {
                    take(stream, token);
                }
            }
            _ => take(stream, token),
        }
    }
}

/// Punctuation or operator by longest match; anything else is an invalid character.
pub(super) fn read_symbol(stream: &mut CharStream<'_>, diagnostics: &mut Diagnostics, id: TokenId) -> Token {
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::Invalid));
    let (stream, token) = scope.parts();

    // Byte offsets ending the first one and two characters, longest first.
    let rest = stream.remaining();
    let ends: Vec<usize> = rest.char_indices().take(2).map(|(i, c)| i + c.len_utf8()).collect();
    let candidates = ends.into_iter().rev().map(|end| &rest[..end]);

    for spelling in candidates {
        let kind = punctuation::from_str(spelling)
            .map(TokenKind::Punctuation)
            .or_else(|| operators::from_str(spelling).map(TokenKind::Operator));
        if let Some(kind) = kind {
            token.kind = kind;
            for _ in spelling.chars() {
                take(stream, token);
            }
            return scope.finish();
        }
    }

    take(stream, token);
    let span = scope.current_span();
    diagnostics.blame(BlameKind::InvalidCharacter, span, BlameSubject::Token(id));
    scope.finish()
}
