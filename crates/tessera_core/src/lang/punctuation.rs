//! Punctuation vocabulary.
//!
//! Delimiters, separators and access markers used by the lexer/parser. The statement terminator
//! [`PunctuationId::Semicolon`] doubles as the C-family rendering of an empty statement.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use tessera_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("->"), Some(PunctuationId::Arrow));
//! assert_eq!(punctuation::as_str(PunctuationId::Semicolon), ";");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `:` and `;`.
    Separator,
    /// Access markers like `.` and `->`.
    Access,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Colon,
    Semicolon,

    // Access
    Dot,
    Arrow,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::Arrow, "->", PunctuationCategory::Access),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Full metadata.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match PUNCTUATION.iter().find(|p| p.id == id) {
        Some(info) => info,
        None => unreachable!("punctuation registry is missing {id:?}"),
    }
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
