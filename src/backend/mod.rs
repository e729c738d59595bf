//! Backends: render one syntax tree into a target language.
//!
//! Each backend is a module of free functions that match exhaustively on the node/token variants, so a new variant
//! does not compile until every backend renders it. The [`Fragment`] impls here are the only place that dispatches
//! on [`Backend`].
//!
//! | Backend | Family | Comments | Empty statement |
//! |---|---|---|---|
//! | [`Backend::Canonical`] | the source language itself | marks from the [`LanguageDefinition`] | no-op keyword |
//! | [`Backend::CFamily`] | C, C#, Java, ... | `//` and `/* */` | `;` |
//! | [`Backend::Scripting`] | Python, shell, ... | `#` per line | no-op keyword |

#![deny(clippy::unwrap_used)]

mod builder;
mod c_family;
mod canonical;
mod config;
mod errors;
mod scripting;

pub use builder::{CodeBuilder, Fragment};
pub use config::RenderConfig;
pub use errors::RenderError;

use std::fmt;

use tessera_core::LanguageDefinition;
use tessera_syntax::ast::{ConstantExpr, EmptyStatement, Item, Node, Program};
use tessera_syntax::lexer::Token;

/// Target output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Re-emit in the source language.
    Canonical,
    CFamily,
    Scripting,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Canonical, Backend::CFamily, Backend::Scripting];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Canonical => "canonical",
            Backend::CFamily => "c-family",
            Backend::Scripting => "scripting",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render any fragment (token, node, program) into a fresh builder and return the text.
pub fn render<F: Fragment + ?Sized>(
    fragment: &F,
    backend: Backend,
    lang: &LanguageDefinition,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut c = CodeBuilder::new(backend, lang, config.clone());
    c.write(fragment)?;
    Ok(c.finish())
}

/// Render a whole program.
///
/// ## Errors
/// [`RenderError::Unsupported`] when the backend cannot represent a node; no partial output is returned.
#[tracing::instrument(skip_all, fields(backend = %backend, item_count = program.items.len()))]
pub fn render_program(
    program: &Program,
    backend: Backend,
    lang: &LanguageDefinition,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    render(program, backend, lang, config)
}

// ============================================================================
// Backend dispatch
// ============================================================================

impl Fragment for Token {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        let Some(info) = self.comment_info() else {
            return c.write(self.text.as_str());
        };
        match c.backend() {
            Backend::Canonical => canonical::comment(c, self, info),
            Backend::CFamily => c_family::comment(c, self, info),
            Backend::Scripting => scripting::comment(c, self, info),
        }
    }
}

impl Fragment for Node {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        match c.backend() {
            Backend::Canonical => canonical::node(c, self),
            Backend::CFamily => c_family::node(c, self),
            Backend::Scripting => scripting::node(c, self),
        }
    }
}

impl Fragment for ConstantExpr {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        // Pass-through in every backend: the literal's own source text.
        c.write(self.literal.text.as_str())
    }
}

impl Fragment for EmptyStatement {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        match c.backend() {
            Backend::Canonical => canonical::empty_statement(c, self),
            Backend::CFamily => c_family::empty_statement(c, self),
            Backend::Scripting => scripting::empty_statement(c, self),
        }
    }
}

impl Fragment for Item {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        match self {
            Item::Comment(token) => c.write(token),
            Item::Node(node) => c.write(node),
        }
    }
}

impl Fragment for Program {
    fn emit(&self, c: &mut CodeBuilder<'_>) -> Result<(), RenderError> {
        c.write_lines(&self.items)?;
        if c.config().trailing_newline && !self.items.is_empty() {
            c.newline();
        }
        Ok(())
    }
}
