//! Diagnostics for the syntax frontend.
//!
//! Two channels, deliberately separate:
//! - [`Diagnostics`]: an append-only log of [`Blame`] records for *recoverable* lexical anomalies. Recording a blame
//!   never interrupts lexing; the offending token is marked degraded instead.
//! - [`SyntaxError`]: a *hard* failure returned from the token stream when the input does not match what the grammar
//!   expects. It unwinds the enclosing construct through `?`.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenId;

/// How seriously a caller should treat a blame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Category of a recoverable lexical anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlameKind {
    /// A multiline comment reached end of input before its closing mark.
    UnclosedMultilineComment,
    /// A string literal reached end of line before its closing quote.
    UnclosedString,
    /// A character that starts no token.
    InvalidCharacter,
    /// A lexical mark was expected at this position but something else was found.
    ExpectedMark,
}

impl BlameKind {
    pub fn severity(self) -> Severity {
        match self {
            BlameKind::UnclosedMultilineComment | BlameKind::UnclosedString => Severity::Warning,
            BlameKind::InvalidCharacter | BlameKind::ExpectedMark => Severity::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BlameKind::UnclosedMultilineComment => "multiline comment is never closed",
            BlameKind::UnclosedString => "string literal is never closed",
            BlameKind::InvalidCharacter => "invalid character",
            BlameKind::ExpectedMark => "expected lexical mark",
        }
    }
}

impl std::fmt::Display for BlameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// What a blame points at.
///
/// Tokens are referenced by identity ([`TokenId`]); the log never owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlameSubject {
    Token(TokenId),
    /// The source unit as a whole (no specific token yet exists).
    Unit,
}

/// One recorded anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blame {
    pub kind: BlameKind,
    pub span: Span,
    pub subject: BlameSubject,
}

impl Blame {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Append-only, ordered log of [`Blame`] records for one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    records: Vec<Blame>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blame. Never fails and never aborts the caller.
    pub fn blame(&mut self, kind: BlameKind, span: Span, subject: BlameSubject) {
        tracing::debug!(?kind, %span, ?subject, "recorded blame");
        self.records.push(Blame { kind, span, subject });
    }

    /// Records in the order they were made.
    pub fn records(&self) -> &[Blame] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Blame> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record has [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.records.iter().any(|b| b.severity() == Severity::Error)
    }

    pub fn of_kind(&self, kind: BlameKind) -> impl Iterator<Item = &Blame> {
        self.records.iter().filter(move |b| b.kind == kind)
    }

    /// Records referencing the token `id`.
    pub fn for_token(&self, id: TokenId) -> impl Iterator<Item = &Blame> {
        self.records
            .iter()
            .filter(move |b| b.subject == BlameSubject::Token(id))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Blame;
    type IntoIter = std::slice::Iter<'a, Blame>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Hard parse failure: the input does not match the grammar at `span`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found} at {span}")]
    #[diagnostic(code(tessera::syntax::expected))]
    Expected { expected: String, found: String, span: Span },

    #[error("expected {expected}, found end of input at {span}")]
    #[diagnostic(code(tessera::syntax::unexpected_end))]
    UnexpectedEnd { expected: String, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Expected { span, .. } | SyntaxError::UnexpectedEnd { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Location;

    fn span() -> Span {
        Span::new(Location::new(0, 0), Location::new(0, 1))
    }

    #[test]
    fn test_blame_log_is_ordered_and_append_only() {
        let mut diags = Diagnostics::new();
        diags.blame(BlameKind::InvalidCharacter, span(), BlameSubject::Token(TokenId(0)));
        diags.blame(BlameKind::UnclosedString, span(), BlameSubject::Token(TokenId(3)));
        let kinds: Vec<_> = diags.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlameKind::InvalidCharacter, BlameKind::UnclosedString]);
        assert_eq!(diags.for_token(TokenId(3)).count(), 1);
    }

    #[test]
    fn test_has_errors_only_counts_error_severity() {
        let mut diags = Diagnostics::new();
        diags.blame(BlameKind::UnclosedMultilineComment, span(), BlameSubject::Unit);
        assert!(!diags.has_errors());
        diags.blame(BlameKind::InvalidCharacter, span(), BlameSubject::Unit);
        assert!(diags.has_errors());
    }

    #[test]
    fn test_syntax_error_message_names_expected_and_found() {
        let err = SyntaxError::Expected {
            expected: "'pass'".to_string(),
            found: "identifier `x`".to_string(),
            span: span(),
        };
        assert_eq!(err.to_string(), "expected 'pass', found identifier `x` at 1:1-1:2");
        assert_eq!(err.span(), span());
    }
}
