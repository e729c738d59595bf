//! Character cursor used while lexing.

use crate::ast::{Location, Span};
use crate::diagnostics::{BlameKind, BlameSubject, Diagnostics};
use crate::lexer::Token;

use super::Cursor;

/// What [`CharStream::append_next`] should consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next<'m> {
    /// A lexical mark: appended to the token's raw text only.
    Mark(&'m str),
    /// Any single character: appended to both raw text and content.
    Content,
}

/// Cursor over the characters of one source text, tracking (line, column).
#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    source: &'a str,
    offset: usize,
    location: Location,
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            location: Location::START,
        }
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Character after the next one.
    pub fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    /// Non-consuming lookahead. An empty pattern never matches.
    pub fn peek_is(&self, pattern: &str) -> bool {
        !pattern.is_empty() && self.remaining().starts_with(pattern)
    }

    pub fn at_end_of_input(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// `true` at `\n`, `\r\n`, or end of input.
    pub fn at_line_end(&self) -> bool {
        self.at_end_of_input() || self.peek_is("\n") || self.peek_is("\r\n")
    }

    /// Consume one character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.location = self.location.advance(c);
        Some(c)
    }

    /// Consume `pattern` if it comes next.
    pub fn eat(&mut self, pattern: &str) -> bool {
        if !self.peek_is(pattern) {
            return false;
        }
        for _ in pattern.chars() {
            self.advance();
        }
        true
    }

    /// Consume the next unit into `token`.
    ///
    /// `Next::Mark(m)` consumes `m` if it comes next; `Next::Content` consumes any one character. When the mark does
    /// not match (or input is exhausted) nothing is consumed, an [`BlameKind::ExpectedMark`] blame is recorded against
    /// the unit, and `false` is returned.
    pub fn append_next(&mut self, token: &mut Token, next: Next<'_>, diagnostics: &mut Diagnostics) -> bool {
        match next {
            Next::Mark(mark) => {
                if self.eat(mark) {
                    token.text.push_str(mark);
                    return true;
                }
                let end = self.peek().map_or(self.location, |c| self.location.advance(c));
                diagnostics.blame(BlameKind::ExpectedMark, Span::new(self.location, end), BlameSubject::Unit);
                false
            }
            Next::Content => match self.advance() {
                Some(c) => {
                    token.text.push(c);
                    token.content.push(c);
                    true
                }
                None => {
                    diagnostics.blame(BlameKind::ExpectedMark, Span::point(self.location), BlameSubject::Unit);
                    false
                }
            },
        }
    }
}

impl Cursor for CharStream<'_> {
    fn start_location(&self) -> Location {
        self.location
    }

    fn end_location(&self) -> Location {
        self.location
    }
}
