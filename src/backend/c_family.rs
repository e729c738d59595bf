//! C-family backend: `//` line comments, `/* */` block comments, `;` as the empty statement.

use tessera_core::lang::punctuation::{self, PunctuationId};
use tessera_syntax::ast::{EmptyStatement, Node};
use tessera_syntax::lexer::{CommentInfo, Token};

use super::{CodeBuilder, RenderError};

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

pub(super) fn comment(c: &mut CodeBuilder<'_>, token: &Token, info: CommentInfo) -> Result<(), RenderError> {
    if !info.multiline {
        return c.write(&(LINE_COMMENT, token.content.as_str()));
    }
    c.write(&(BLOCK_OPEN, token.content.as_str()))?;
    if !info.unclosed {
        c.write(BLOCK_CLOSE)?;
    }
    Ok(())
}

pub(super) fn node(c: &mut CodeBuilder<'_>, node: &Node) -> Result<(), RenderError> {
    match node {
        Node::Constant(constant) => c.write(constant),
        Node::Empty(statement) => c.write(statement),
    }
}

pub(super) fn empty_statement(c: &mut CodeBuilder<'_>, _statement: &EmptyStatement) -> Result<(), RenderError> {
    c.write(punctuation::as_str(PunctuationId::Semicolon))
}
