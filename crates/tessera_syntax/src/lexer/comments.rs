//! Comment readers.
//!
//! State machine of a comment token: `reading-oneline` / `reading-multiline` end in either `closed` or, for a
//! multiline comment that runs out of input, `unclosed`. The unclosed case is recoverable: a blame is recorded and a
//! degraded token is returned so the surrounding parse continues.

use tessera_core::LanguageDefinition;

use super::tokens::{CommentInfo, Token, TokenId, TokenKind};
use crate::diagnostics::{BlameKind, BlameSubject, Diagnostics};
use crate::stream::{CharStream, Next, SpanScope};

/// Read a one-line comment: the mark, then content up to (not including) the line end.
pub(super) fn read_oneline(
    stream: &mut CharStream<'_>,
    lang: &LanguageDefinition,
    diagnostics: &mut Diagnostics,
    id: TokenId,
) -> Token {
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::Comment(CommentInfo::default())));
    let (stream, token) = scope.parts();

    stream.append_next(token, Next::Mark(&lang.oneline_comment), diagnostics);
    while !stream.at_line_end() {
        stream.append_next(token, Next::Content, diagnostics);
    }
    scope.finish()
}

/// Read a multiline comment: the opening mark, content, then the closing mark or end of input.
pub(super) fn read_multiline(
    stream: &mut CharStream<'_>,
    lang: &LanguageDefinition,
    diagnostics: &mut Diagnostics,
    id: TokenId,
) -> Token {
    let multiline = CommentInfo {
        multiline: true,
        unclosed: false,
    };
    let mut scope = SpanScope::enter(stream, Token::new(id, TokenKind::Comment(multiline)));
    let (stream, token) = scope.parts();

    stream.append_next(token, Next::Mark(&lang.multiline_open), diagnostics);
    loop {
        if stream.peek_is(&lang.multiline_close) {
            stream.append_next(token, Next::Mark(&lang.multiline_close), diagnostics);
            return scope.finish();
        }
        if stream.at_end_of_input() {
            token.kind = TokenKind::Comment(CommentInfo {
                multiline: true,
                unclosed: true,
            });
            let span = scope.current_span();
            diagnostics.blame(BlameKind::UnclosedMultilineComment, span, BlameSubject::Token(id));
            return scope.finish();
        }
        stream.append_next(token, Next::Content, diagnostics);
    }
}
