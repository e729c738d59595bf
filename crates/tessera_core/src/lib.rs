#![forbid(unsafe_code)]
//! Provide the canonical language vocabulary and language-definition table for the Tessera translator.
//!
//! This crate is intentionally small and dependency-free. Both the lexer (which needs the comment marks and keyword
//! spellings to tokenize) and the renderers (which need the canonical spellings to re-emit nodes) read from it.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - The mutable knobs (comment marks, keyword aliases) live on [`lang::LanguageDefinition`], which callers build once
//!   and thread by reference. Several definitions may coexist in one process.

pub mod lang;

pub use lang::LanguageDefinition;
