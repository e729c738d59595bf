//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings, aliases and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - A [`crate::lang::LanguageDefinition`] may layer extra aliases on top of this table; use
//!   [`crate::lang::LanguageDefinition::keyword`] when lexing against a concrete definition.
//!
//! ## Examples
//! ```rust
//! use tessera_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("true"), Some(KeywordId::True));
//! assert_eq!(keywords::as_str(KeywordId::None), "none");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statements
    Pass,

    // Literals
    True,
    False,
    None,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Statement,
    Literal,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and emission.
/// - `aliases` are additional spellings accepted by every language definition.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Pass, "pass", &[], KeywordCategory::Statement),
    info(KeywordId::True, "true", &[], KeywordCategory::Literal),
    info(KeywordId::False, "false", &[], KeywordCategory::Literal),
    info(KeywordId::None, "none", &[], KeywordCategory::Literal),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Aliases accepted by every definition.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    // Every variant has exactly one row; the guardrail test in `tests/lang_registry_guardrails.rs` enforces it.
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(info) => info,
        None => unreachable!("keyword registry is missing {id:?}"),
    }
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS.iter().find(|k| k.aliases.contains(&s)).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
    }
}
