//! One-shot translation facade: source text in, rendered text plus diagnostics out.
//!
//! A [`Translator`] parses once into a [`ParsedUnit`] and can render that unit for every [`Backend`] without
//! re-lexing.
//!
//! ## Examples
//! ```rust
//! use tessera::{Backend, Translator};
//!
//! let translator = Translator::default();
//! let parsed = translator.parse("main.tsr", "pass\n").unwrap();
//! assert_eq!(translator.render(&parsed, Backend::Canonical).unwrap(), "pass\n");
//! assert_eq!(translator.render(&parsed, Backend::CFamily).unwrap(), ";\n");
//! ```

use miette::Diagnostic;
use tessera_core::LanguageDefinition;
use tessera_syntax::ast::Program;
use tessera_syntax::diagnostics::{Diagnostics, SyntaxError};
use tessera_syntax::source::SourceUnit;
use tessera_syntax::{lexer, parser};
use thiserror::Error;

use crate::backend::{Backend, RenderConfig, RenderError, render_program};

/// Any failure of the translate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TranslateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

/// A source unit after lexing and parsing: the tree plus the unit that owns its diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    pub unit: SourceUnit,
    pub program: Program,
}

impl ParsedUnit {
    pub fn diagnostics(&self) -> &Diagnostics {
        self.unit.diagnostics()
    }
}

/// Output of a successful translation.
#[derive(Debug, Clone)]
pub struct Translation {
    pub output: String,
    /// Recoverable lexical problems found along the way.
    pub diagnostics: Diagnostics,
}

/// Lex, parse, and render with one language definition and one render configuration.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    lang: LanguageDefinition,
    config: RenderConfig,
}

impl Translator {
    pub fn new(lang: LanguageDefinition) -> Self {
        Self {
            lang,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lang(&self) -> &LanguageDefinition {
        &self.lang
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lex and parse `source`.
    ///
    /// ## Errors
    /// [`TranslateError::Syntax`] when the token sequence does not form a program. Lexical blames never fail here;
    /// they are kept on the returned unit.
    #[tracing::instrument(skip_all, fields(name = %name))]
    pub fn parse(&self, name: &str, source: &str) -> Result<ParsedUnit, TranslateError> {
        let mut unit = SourceUnit::new(name, source);
        let tokens = lexer::lex(&mut unit, &self.lang);
        let program = parser::parse(&tokens)?;
        Ok(ParsedUnit { unit, program })
    }

    /// Render an already-parsed unit.
    pub fn render(&self, parsed: &ParsedUnit, backend: Backend) -> Result<String, TranslateError> {
        Ok(render_program(&parsed.program, backend, &self.lang, &self.config)?)
    }

    /// Parse then render.
    #[tracing::instrument(skip_all, fields(name = %name, backend = %backend))]
    pub fn translate(&self, name: &str, source: &str, backend: Backend) -> Result<Translation, TranslateError> {
        let parsed = self.parse(name, source)?;
        let output = self.render(&parsed, backend)?;
        let diagnostics = parsed.unit.into_diagnostics();
        if !diagnostics.is_empty() {
            tracing::debug!(count = diagnostics.len(), "translation finished with diagnostics");
        }
        Ok(Translation { output, diagnostics })
    }
}

/// Translate `source` with the default language definition and render configuration.
///
/// ## Errors
/// See [`Translator::translate`].
pub fn translate(source: &str, backend: Backend) -> Result<Translation, TranslateError> {
    Translator::default().translate("<input>", source, backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::lang::keywords::KeywordId;
    use tessera_syntax::diagnostics::BlameKind;

    #[test]
    fn test_translate_comment_and_noop() {
        let out = translate("# hello\npass\n", Backend::Scripting).unwrap();
        assert_eq!(out.output, "# hello\npass\n");
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_once_render_many() {
        let translator = Translator::default();
        let parsed = translator.parse("t", "/* a\nb */\n1\n").unwrap();
        assert_eq!(translator.render(&parsed, Backend::Canonical).unwrap(), "/* a\nb */\n1\n");
        assert_eq!(translator.render(&parsed, Backend::CFamily).unwrap(), "/* a\nb */\n1\n");
        assert_eq!(translator.render(&parsed, Backend::Scripting).unwrap(), "# a\n#b \n1\n");
    }

    #[test]
    fn test_syntax_error_is_wrapped() {
        let err = translate("1 2\n", Backend::Canonical).unwrap_err();
        assert!(matches!(err, TranslateError::Syntax(SyntaxError::Expected { .. })));
    }

    #[test]
    fn test_render_error_is_wrapped() {
        let err = translate("/* one line */\n", Backend::Scripting).unwrap_err();
        assert!(matches!(err, TranslateError::Render(RenderError::Unsupported { .. })));
    }

    #[test]
    fn test_unclosed_comment_is_reported_not_fatal() {
        let out = translate("/* a \n b", Backend::Canonical).unwrap();
        assert_eq!(out.output, "/* a \n b\n");
        assert_eq!(out.diagnostics.of_kind(BlameKind::UnclosedMultilineComment).count(), 1);
    }

    #[test]
    fn test_custom_language_definition() {
        let lang = LanguageDefinition::new()
            .with_oneline_comment("--")
            .with_keyword_alias(KeywordId::Pass, "nop");
        let translator = Translator::new(lang).with_config(RenderConfig::new().with_trailing_newline(false));
        let out = translator.translate("t", "-- hi\nnop\n", Backend::Canonical).unwrap();
        assert_eq!(out.output, "-- hi\npass");
    }
}
