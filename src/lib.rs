#![forbid(unsafe_code)]
//! Tessera: parse once, render many ways.
//!
//! Source text is lexed and parsed into a single backend-independent tree (`tessera_syntax`), then rendered into one
//! of several target languages by exhaustive per-backend renderers ([`backend`]).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `backend` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use tessera::{Backend, translate};
//!
//! let out = translate("# hello\npass\n", Backend::CFamily).unwrap();
//! assert_eq!(out.output, "// hello\n;\n");
//! assert!(out.diagnostics.is_empty());
//! ```

pub mod backend;
pub mod logging;
pub mod translate;

pub use tessera_core::LanguageDefinition;
pub use tessera_syntax::{ast, diagnostics, lexer, parser, source};

pub use backend::{Backend, CodeBuilder, Fragment, RenderConfig, RenderError, render, render_program};
pub use translate::{ParsedUnit, TranslateError, Translation, Translator, translate};
