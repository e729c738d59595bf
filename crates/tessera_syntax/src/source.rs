//! Source units: one input text plus the diagnostics log it owns.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::{Location, Span};
use crate::diagnostics::{Blame, BlameKind, BlameSubject, Diagnostics, SyntaxError};

/// One source input and its [`Diagnostics`] log.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub(crate) name: String,
    pub(crate) text: String,
    pub(crate) diagnostics: Diagnostics,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    pub fn blame(&mut self, kind: BlameKind, span: Span, subject: BlameSubject) {
        self.diagnostics.blame(kind, span, subject);
    }

    /// Byte offset of `location`, clamped to the end of the text.
    pub fn offset_of(&self, location: Location) -> usize {
        let mut line_start = 0;
        for _ in 0..location.line {
            match self.text[line_start..].find('\n') {
                Some(i) => line_start += i + 1,
                None => return self.text.len(),
            }
        }
        self.text[line_start..]
            .char_indices()
            .nth(location.column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(self.text.len())
    }

    /// Convert a span to a miette byte span.
    pub fn source_span(&self, span: Span) -> SourceSpan {
        let start = self.offset_of(span.start);
        let end = self.offset_of(span.end).max(start);
        SourceSpan::from(start..end)
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.text.clone())
    }

    /// Printable report for a recorded blame.
    pub fn report(&self, blame: &Blame) -> SourceReport {
        SourceReport {
            message: format!("{}: {}", blame.severity(), blame.kind),
            src: self.to_named_source(),
            at: self.source_span(blame.span),
        }
    }

    /// Printable report for a hard syntax failure.
    pub fn report_syntax(&self, error: &SyntaxError) -> SourceReport {
        SourceReport {
            message: error.to_string(),
            src: self.to_named_source(),
            at: self.source_span(error.span()),
        }
    }
}

/// A diagnostic with its source attached, ready for `miette`'s fancy printer.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SourceReport {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    at: SourceSpan,
}

impl SourceReport {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn at(&self) -> SourceSpan {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_counts_chars_not_bytes() {
        let unit = SourceUnit::new("t", "ab\nçd\n");
        assert_eq!(unit.offset_of(Location::new(0, 1)), 1);
        assert_eq!(unit.offset_of(Location::new(1, 0)), 3);
        assert_eq!(unit.offset_of(Location::new(1, 1)), 5);
        assert_eq!(unit.offset_of(Location::new(9, 0)), unit.text().len());
    }

    #[test]
    fn test_report_points_at_blamed_span() {
        let mut unit = SourceUnit::new("t", "x = $\n");
        let span = Span::new(Location::new(0, 4), Location::new(0, 5));
        unit.blame(BlameKind::InvalidCharacter, span, BlameSubject::Unit);
        let report = unit.report(&unit.diagnostics().records()[0]);
        assert_eq!(report.message(), "error: invalid character");
        assert_eq!(report.at(), SourceSpan::from(4..5));
    }
}
