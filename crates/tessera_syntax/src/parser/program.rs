/// Program structure: line-oriented items.
///
/// ```text
/// program: NEWLINE* (COMMENT | node COMMENT* (NEWLINE+ | EOF))* EOF
/// ```
///
/// Comments never need a line end on either side: one may follow an item on the same line, and an item may follow a
/// block comment on the same line. Two nodes must be separated by a line end, with or without comments between.

/// Parse one item. Comments are kept as tokens so they can be re-emitted.
pub fn parse_item(stream: &mut TokenStream<'_>) -> Result<Item, SyntaxError> {
    if stream.peek_is(&TokenPattern::Comment) {
        let token: Token = stream.eat(&TokenPattern::Comment)?;
        return Ok(Item::Comment(token));
    }
    parse_node(stream).map(Item::Node)
}

/// Parse items until end of input.
///
/// ## Errors
/// The first [`SyntaxError`] aborts the whole program; there is no partial result.
pub fn parse_program(stream: &mut TokenStream<'_>) -> Result<Program, SyntaxError> {
    let mut scope = SpanScope::enter(stream, Program::default());
    let (stream, program) = scope.parts();

    stream.skip_newlines();
    while !stream.at_end_of_input() {
        let item = parse_item(stream)?;
        let ends_line = matches!(item, Item::Node(_));
        program.items.push(item);
        if ends_line {
            while stream.peek_is(&TokenPattern::Comment) {
                program.items.push(parse_item(stream)?);
            }
            if !stream.at_end_of_input() {
                stream.eat(&TokenPattern::Newline)?;
            }
        }
        stream.skip_newlines();
    }
    Ok(scope.finish())
}
