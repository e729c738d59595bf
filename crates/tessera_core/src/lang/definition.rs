//! The language-definition table consumed read-only by the lexer and every renderer.
//!
//! A [`LanguageDefinition`] bundles the lexical marks of one concrete source language (comment marks, string
//! quote) with its keyword spellings. It is an explicit, immutable value: build it once, then pass it by reference
//! to `tessera_syntax::lexer::lex` and to the renderers.
//!
//! ## Examples
//! ```rust
//! use tessera_core::lang::LanguageDefinition;
//! use tessera_core::lang::keywords::KeywordId;
//!
//! let lang = LanguageDefinition::default().with_keyword_alias(KeywordId::Pass, "nop");
//! assert_eq!(lang.keyword("nop"), Some(KeywordId::Pass));
//! assert_eq!(lang.keyword("pass"), Some(KeywordId::Pass));
//! assert_eq!(lang.canonical_keyword(KeywordId::Pass), "pass");
//! ```

use super::keywords::{self, KeywordId};

/// Lexical marks and keyword spellings of one source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDefinition {
    /// Mark opening a comment that runs to the end of the line
    pub oneline_comment: String,
    /// Mark opening a multiline comment
    pub multiline_open: String,
    /// Mark closing a multiline comment
    pub multiline_close: String,
    /// Quote character delimiting string literals
    pub string_quote: char,
    /// Extra keyword spellings on top of the registry
    keyword_aliases: Vec<(String, KeywordId)>,
}

impl Default for LanguageDefinition {
    fn default() -> Self {
        Self {
            oneline_comment: "#".to_string(),
            multiline_open: "/*".to_string(),
            multiline_close: "*/".to_string(),
            string_quote: '"',
            keyword_aliases: Vec::new(),
        }
    }
}

impl LanguageDefinition {
    /// Create a definition with default marks
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the one-line comment mark
    pub fn with_oneline_comment(mut self, mark: impl Into<String>) -> Self {
        self.oneline_comment = mark.into();
        self
    }

    /// Set the multiline comment marks
    pub fn with_multiline_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.multiline_open = open.into();
        self.multiline_close = close.into();
        self
    }

    /// Set the string quote character
    pub fn with_string_quote(mut self, quote: char) -> Self {
        self.string_quote = quote;
        self
    }

    /// Accept an additional spelling for a keyword.
    ///
    /// ## Notes
    /// - The canonical spelling is unaffected; renderers keep emitting [`Self::canonical_keyword`].
    pub fn with_keyword_alias(mut self, id: KeywordId, spelling: impl Into<String>) -> Self {
        self.keyword_aliases.push((spelling.into(), id));
        self
    }

    /// Resolve a word to a keyword, consulting the registry first and then this definition's aliases.
    pub fn keyword(&self, word: &str) -> Option<KeywordId> {
        keywords::from_str(word).or_else(|| {
            self.keyword_aliases
                .iter()
                .find(|(spelling, _)| spelling == word)
                .map(|(_, id)| *id)
        })
    }

    /// The spelling renderers emit for `id`.
    pub fn canonical_keyword(&self, id: KeywordId) -> &'static str {
        keywords::as_str(id)
    }

    /// Spellings accepted for `id` (canonical first).
    pub fn keyword_spellings(&self, id: KeywordId) -> Vec<&str> {
        let mut spellings = vec![keywords::as_str(id)];
        spellings.extend(keywords::aliases(id).iter().copied());
        spellings.extend(
            self.keyword_aliases
                .iter()
                .filter(|(_, alias_id)| *alias_id == id)
                .map(|(spelling, _)| spelling.as_str()),
        );
        spellings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marks() {
        let lang = LanguageDefinition::default();
        assert_eq!(lang.oneline_comment, "#");
        assert_eq!(lang.multiline_open, "/*");
        assert_eq!(lang.multiline_close, "*/");
        assert_eq!(lang.string_quote, '"');
    }

    #[test]
    fn test_builder_overrides_marks() {
        let lang = LanguageDefinition::new()
            .with_oneline_comment("--")
            .with_multiline_comment("{-", "-}")
            .with_string_quote('\'');
        assert_eq!(lang.oneline_comment, "--");
        assert_eq!(lang.multiline_open, "{-");
        assert_eq!(lang.multiline_close, "-}");
        assert_eq!(lang.string_quote, '\'');
    }

    #[test]
    fn test_aliases_are_per_definition() {
        let with_alias = LanguageDefinition::default().with_keyword_alias(KeywordId::Pass, "skip");
        let plain = LanguageDefinition::default();
        assert_eq!(with_alias.keyword("skip"), Some(KeywordId::Pass));
        assert_eq!(plain.keyword("skip"), None);
    }

    #[test]
    fn test_keyword_spellings_lists_canonical_first() {
        let lang = LanguageDefinition::default().with_keyword_alias(KeywordId::Pass, "nop");
        assert_eq!(lang.keyword_spellings(KeywordId::Pass), vec!["pass", "nop"]);
    }
}
