#![forbid(unsafe_code)]
//! Shared syntax frontend for the Tessera translator: locations, streams, lexer, nodes, parser, diagnostics.
//!
//! Every token and node produced here is backend-independent. Rendering lives in the `tessera` crate, which walks
//! these trees once per target language.
//!
//! ## Notes
//! - This crate is “syntax-only”: no name resolution, no type checking.
//! - Lexical anomalies (unclosed comments/strings, stray characters) are *recoverable* and land in the
//!   [`diagnostics::Diagnostics`] log of the [`source::SourceUnit`]. Syntactic mismatches are *hard* and come back as
//!   [`diagnostics::SyntaxError`].
//!
//! ## Examples
//! ```rust
//! use tessera_core::LanguageDefinition;
//! use tessera_syntax::{lexer, parser, source::SourceUnit};
//!
//! let mut unit = SourceUnit::new("main.tsr", "pass\n");
//! let tokens = lexer::lex(&mut unit, &LanguageDefinition::default());
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.items.len(), 1);
//! assert!(unit.diagnostics().is_empty());
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod stream;
