//! Syntax-tree definitions.
//!
//! Nodes are a closed set of tagged variants ([`Node`], [`Item`]); each parse and render routine matches on them
//! exhaustively, so adding a variant fails to compile until every backend handles it.

use std::fmt;

use crate::lexer::Token;

/// (line, column) position in source, both 0-based. Ordered lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const START: Location = Location { line: 0, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location after consuming `c`.
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 0,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Location {
    /// 1-based, for humans.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Source extent of a token or node.
///
/// `end >= start` for every span assigned by a parse routine (see [`crate::stream::SpanScope`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `at`.
    pub fn point(at: Location) -> Self {
        Self { start: at, end: at }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Anything that carries a [`Span`] assigned by its parse routine.
pub trait HasSpan {
    fn span(&self) -> Span;
    fn set_span(&mut self, span: Span);
}

/// A parsed source unit: items in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub items: Vec<Item>,
    pub span: Span,
}

/// One line-level entry of a [`Program`].
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Comments survive parsing so every backend can re-emit them.
    Comment(Token),
    Node(Node),
}

/// Syntax-tree element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Constant(ConstantExpr),
    Empty(EmptyStatement),
}

/// `const_expr: CONST_TOKEN`
///
/// Any token kind is accepted as the literal; validating it belongs to a later semantic pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstantExpr {
    pub literal: Token,
    pub span: Span,
}

/// `empty_stmt: NOOP_KEYWORD`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmptyStatement {
    /// The keyword as spelled in the input (canonical or alias).
    pub source_token: Token,
    pub span: Span,
}

impl HasSpan for Program {
    fn span(&self) -> Span {
        self.span
    }

    fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}

impl HasSpan for ConstantExpr {
    fn span(&self) -> Span {
        self.span
    }

    fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}

impl HasSpan for EmptyStatement {
    fn span(&self) -> Span {
        self.span
    }

    fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Constant(c) => c.span,
            Node::Empty(e) => e.span,
        }
    }
}

impl Item {
    pub fn span(&self) -> Span {
        match self {
            Item::Comment(token) => token.span,
            Item::Node(node) => node.span(),
        }
    }
}
