//! Canonical backend: re-emit in the source language using the definition's marks and spellings.

use tessera_core::lang::keywords::KeywordId;
use tessera_syntax::ast::{EmptyStatement, Node};
use tessera_syntax::lexer::{CommentInfo, Token};

use super::{CodeBuilder, RenderError};

pub(super) fn comment(c: &mut CodeBuilder<'_>, token: &Token, info: CommentInfo) -> Result<(), RenderError> {
    let lang = c.lang();
    if !info.multiline {
        return c.write(&(lang.oneline_comment.as_str(), token.content.as_str()));
    }
    c.write(&(lang.multiline_open.as_str(), token.content.as_str()))?;
    if !info.unclosed {
        c.write(lang.multiline_close.as_str())?;
    }
    Ok(())
}

pub(super) fn node(c: &mut CodeBuilder<'_>, node: &Node) -> Result<(), RenderError> {
    match node {
        Node::Constant(constant) => c.write(constant),
        Node::Empty(statement) => c.write(statement),
    }
}

/// Always the canonical no-op keyword, whatever spelling the source used.
pub(super) fn empty_statement(c: &mut CodeBuilder<'_>, _statement: &EmptyStatement) -> Result<(), RenderError> {
    let keyword = c.lang().canonical_keyword(KeywordId::Pass);
    c.write(keyword)
}
