//! Tessera language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and punctuation,
//! plus the [`LanguageDefinition`] table that bundles them with the lexical marks of one concrete language.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings via registry tables
//! instead of comparing strings at call sites.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use tessera_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("pass"), Some(KeywordId::Pass));
//! assert_eq!(keywords::as_str(KeywordId::Pass), "pass");
//! ```

pub mod definition;
pub mod keywords;
pub mod operators;
pub mod punctuation;

pub use definition::LanguageDefinition;
