//! Token types produced by the lexer.
//!
//! Vocabulary tokens carry registry IDs from `tessera_core::lang` (`Keyword(KeywordId)`, `Punctuation(..)`,
//! `Operator(..)`) so the parser never compares spellings. Every token keeps its raw `text` for pass-through
//! rendering and its `content` (the payload without marks: comment body, string body, word).

use tessera_core::lang::keywords::{self, KeywordId};
use tessera_core::lang::operators::{self, OperatorId};
use tessera_core::lang::punctuation::{self, PunctuationId};

use crate::ast::{HasSpan, Span};

/// Identity of a token within its source unit (its index in the lexed token list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenId(pub usize);

/// Comment-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CommentInfo {
    pub multiline: bool,
    /// Input ended before the closing mark; the token is degraded but usable.
    pub unclosed: bool,
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    Operator(OperatorId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,
    String { unclosed: bool },

    // ========== Trivia ==========
    Comment(CommentInfo),
    Newline,

    // ========== Special ==========
    #[default]
    Invalid,
    Eof,
}

/// A token with its identity, kind, spelling and source span.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    pub id: TokenId,
    pub kind: TokenKind,
    /// Raw source text, marks included.
    pub text: String,
    /// Payload without marks.
    pub content: String,
    pub span: Span,
}

impl Token {
    /// An empty token, to be populated by its reader.
    pub fn new(id: TokenId, kind: TokenKind) -> Self {
        Self {
            id,
            kind,
            text: String::new(),
            content: String::new(),
            span: Span::default(),
        }
    }

    pub fn comment_info(&self) -> Option<CommentInfo> {
        match self.kind {
            TokenKind::Comment(info) => Some(info),
            _ => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        self.comment_info().is_some()
    }

    /// `true` for multiline comments.
    pub fn is_multiline(&self) -> bool {
        self.comment_info().is_some_and(|c| c.multiline)
    }

    /// `true` for comments and strings whose closing mark never appeared.
    pub fn is_unclosed(&self) -> bool {
        match self.kind {
            TokenKind::Comment(info) => info.unclosed,
            TokenKind::String { unclosed } => unclosed,
            _ => false,
        }
    }

    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::Keyword(id) => Some(id),
            _ => None,
        }
    }

    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(id)),
            TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(id)),
            TokenKind::Operator(id) => format!("operator '{}'", operators::as_str(id)),
            TokenKind::Ident => format!("identifier `{}`", self.text),
            TokenKind::Number => format!("number `{}`", self.text),
            TokenKind::String { .. } => "string literal".to_string(),
            TokenKind::Comment(_) => "comment".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Invalid => format!("invalid character `{}`", self.text),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl HasSpan for Token {
    fn span(&self) -> Span {
        self.span
    }

    fn set_span(&mut self, span: Span) {
        self.span = span;
    }
}
