//! Scripting backend: `#` comments only, one per line.

use tessera_core::lang::keywords::KeywordId;
use tessera_syntax::ast::{EmptyStatement, Node};
use tessera_syntax::lexer::{CommentInfo, Token};

use super::{Backend, CodeBuilder, RenderError};

const COMMENT: &str = "#";

/// Render a comment as `#` lines.
///
/// ## Errors
/// A multiline comment whose content is exactly one line has no scripting form and yields
/// [`RenderError::Unsupported`]. Blank content renders nothing; two or more lines render one `#` line each.
pub(super) fn comment(c: &mut CodeBuilder<'_>, token: &Token, info: CommentInfo) -> Result<(), RenderError> {
    if !info.multiline {
        return c.write(&(COMMENT, token.content.as_str()));
    }

    if token.content.trim().is_empty() {
        return Ok(());
    }
    let lines: Vec<&str> = token.content.lines().collect();
    match lines.as_slice() {
        [] => Ok(()),
        [_] => {
            tracing::warn!(span = %token.span, "single-line block comment has no scripting form");
            Err(RenderError::Unsupported {
                backend: Backend::Scripting,
                construct: "block comment",
                reason: "a block comment spanning a single line cannot be rendered",
                span: token.span,
            })
        }
        lines => {
            let commented: Vec<(&str, &str)> = lines.iter().map(|line| (COMMENT, *line)).collect();
            c.write_lines(&commented)
        }
    }
}

pub(super) fn node(c: &mut CodeBuilder<'_>, node: &Node) -> Result<(), RenderError> {
    match node {
        Node::Constant(constant) => c.write(constant),
        Node::Empty(statement) => c.write(statement),
    }
}

pub(super) fn empty_statement(c: &mut CodeBuilder<'_>, _statement: &EmptyStatement) -> Result<(), RenderError> {
    let keyword = c.lang().canonical_keyword(KeywordId::Pass);
    c.write(keyword)
}
