//! Parser for Tessera token streams.
//!
//! Recursive descent over a [`TokenStream`]. Each node kind has one free parse function; every function runs inside
//! a [`SpanScope`] so the node's span is assigned on the way out.
//!
//! ## Examples
//!
//! ```rust
//! use tessera_core::LanguageDefinition;
//! use tessera_syntax::{lexer, parser, source::SourceUnit};
//!
//! let mut unit = SourceUnit::new("main.tsr", "42\npass\n");
//! let tokens = lexer::lex(&mut unit, &LanguageDefinition::default());
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.items.len(), 2);
//! ```

use tessera_core::lang::keywords::KeywordId;

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lexer::Token;
use crate::stream::{SpanScope, TokenPattern, TokenStream};

// NOTE: This module is split across multiple files using `include!` to keep all parse functions in one Rust module
// while keeping each grammar area in its own file.

include!("parser/atoms.rs");
include!("parser/program.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
