//! Token cursor used while parsing.

use std::fmt;

use tessera_core::lang::keywords::{self, KeywordId};
use tessera_core::lang::operators::{self, OperatorId};
use tessera_core::lang::punctuation::{self, PunctuationId};

use crate::ast::{Location, Span};
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};

use super::Cursor;

/// What a lookahead or `eat` expects.
///
/// ID-carrying patterns compare IDs; data-bearing patterns compare the variant only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPattern {
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    Operator(OperatorId),
    Ident,
    Number,
    String,
    Comment,
    Newline,
}

impl TokenPattern {
    pub fn matches(&self, token: &Token) -> bool {
        match (self, &token.kind) {
            (TokenPattern::Keyword(a), TokenKind::Keyword(b)) => a == b,
            (TokenPattern::Punctuation(a), TokenKind::Punctuation(b)) => a == b,
            (TokenPattern::Operator(a), TokenKind::Operator(b)) => a == b,
            (TokenPattern::Ident, TokenKind::Ident)
            | (TokenPattern::Number, TokenKind::Number)
            | (TokenPattern::String, TokenKind::String { .. })
            | (TokenPattern::Comment, TokenKind::Comment(_))
            | (TokenPattern::Newline, TokenKind::Newline) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TokenPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPattern::Keyword(id) => write!(f, "keyword '{}'", keywords::as_str(*id)),
            TokenPattern::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenPattern::Operator(id) => write!(f, "operator '{}'", operators::as_str(*id)),
            TokenPattern::Ident => write!(f, "identifier"),
            TokenPattern::Number => write!(f, "number"),
            TokenPattern::String => write!(f, "string literal"),
            TokenPattern::Comment => write!(f, "comment"),
            TokenPattern::Newline => write!(f, "end of line"),
        }
    }
}

/// Cursor over a lexed token list.
///
/// ## Notes
/// - The list is expected to end with [`TokenKind::Eof`] (as `lexer::lex` guarantees); a list without one is treated
///   as ending after its last token.
/// - Consumed tokens are cloned out: nodes own their tokens exclusively.
#[derive(Debug, Clone)]
pub struct TokenStream<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenStream<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The next token, or `None` at end of input.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos).filter(|t| t.kind != TokenKind::Eof)
    }

    /// Non-consuming lookahead.
    pub fn peek_is(&self, pattern: &TokenPattern) -> bool {
        self.peek().is_some_and(|t| pattern.matches(t))
    }

    pub fn at_end_of_input(&self) -> bool {
        self.peek().is_none()
    }

    /// `true` before a newline or at end of input.
    pub fn at_line_end(&self) -> bool {
        self.at_end_of_input() || self.peek_is(&TokenPattern::Newline)
    }

    /// Consume the next token if it matches `expected`.
    ///
    /// ## Errors
    /// [`SyntaxError::Expected`] naming both sides on mismatch, [`SyntaxError::UnexpectedEnd`] at end of input.
    pub fn eat(&mut self, expected: &TokenPattern) -> Result<Token, SyntaxError> {
        match self.peek() {
            Some(token) if expected.matches(token) => {
                self.pos += 1;
                Ok(token.clone())
            }
            Some(token) => Err(SyntaxError::Expected {
                expected: expected.to_string(),
                found: token.describe(),
                span: token.span,
            }),
            None => Err(SyntaxError::UnexpectedEnd {
                expected: expected.to_string(),
                span: Span::point(self.start_location()),
            }),
        }
    }

    /// Consume the next token whatever it is.
    ///
    /// ## Errors
    /// [`SyntaxError::UnexpectedEnd`] when input is exhausted.
    pub fn eat_any(&mut self) -> Result<Token, SyntaxError> {
        match self.peek() {
            Some(token) => {
                self.pos += 1;
                Ok(token.clone())
            }
            None => Err(SyntaxError::UnexpectedEnd {
                expected: "any token".to_string(),
                span: Span::point(self.start_location()),
            }),
        }
    }

    /// Skip consecutive newline tokens.
    pub fn skip_newlines(&mut self) {
        while self.peek_is(&TokenPattern::Newline) {
            self.pos += 1;
        }
    }
}

impl Cursor for TokenStream<'_> {
    fn start_location(&self) -> Location {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start,
            None => self.end_location(),
        }
    }

    fn end_location(&self) -> Location {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span.end,
            None => self.tokens.first().map_or(Location::START, |t| t.span.start),
        }
    }
}
