/// Parse a token list into a [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token list produced by [`crate::lexer::lex`].
///
/// ## Errors
/// Returns the first [`SyntaxError`]. Recoverable lexical problems are not errors here; inspect the source unit's
/// diagnostics for those.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    parse_program(&mut TokenStream::new(tokens))
}
