//! Render-time errors.
//!
//! These represent *backend* limitations (as opposed to lexing or parsing problems): the tree is valid, but the
//! target language has no faithful way to express one of its nodes.
//!
//! ## Notes
//!
//! - Name the construct and the reason so the caller can pick another backend or rewrite the source.

use miette::Diagnostic;
use tessera_syntax::ast::Span;
use thiserror::Error;

use super::Backend;

/// Error during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RenderError {
    #[error("{backend} backend cannot render {construct} at {span}: {reason}")]
    #[diagnostic(code(tessera::render::unsupported))]
    Unsupported {
        backend: Backend,
        construct: &'static str,
        reason: &'static str,
        span: Span,
    },
}

impl RenderError {
    pub fn span(&self) -> Span {
        match self {
            RenderError::Unsupported { span, .. } => *span,
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            RenderError::Unsupported { backend, .. } => *backend,
        }
    }
}
