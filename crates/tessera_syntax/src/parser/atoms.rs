/// Atomic nodes.
///
/// These consume exactly one token each. The span of the node equals the span of that token.

/// The no-op keyword that an [`EmptyStatement`] consumes.
const NOOP_KEYWORD: TokenPattern = TokenPattern::Keyword(KeywordId::Pass);

/// `const_expr: CONST_TOKEN`
///
/// Consumes whatever token comes next. Literal-kind validation is left to later passes.
///
/// ## Errors
/// [`SyntaxError::UnexpectedEnd`] if input is exhausted.
pub fn parse_constant(stream: &mut TokenStream<'_>) -> Result<ConstantExpr, SyntaxError> {
    let mut scope = SpanScope::enter(stream, ConstantExpr::default());
    let (stream, node) = scope.parts();
    node.literal = stream.eat_any()?;
    Ok(scope.finish())
}

/// `empty_stmt: NOOP_KEYWORD`
///
/// ## Errors
/// [`SyntaxError::Expected`] if the next token is not the no-op keyword (in any accepted spelling).
pub fn parse_empty_statement(stream: &mut TokenStream<'_>) -> Result<EmptyStatement, SyntaxError> {
    let mut scope = SpanScope::enter(stream, EmptyStatement::default());
    let (stream, node) = scope.parts();
    node.source_token = stream.eat(&NOOP_KEYWORD)?;
    Ok(scope.finish())
}

/// Dispatch on lookahead: the no-op keyword starts an empty statement, anything else is a constant.
pub fn parse_node(stream: &mut TokenStream<'_>) -> Result<Node, SyntaxError> {
    if stream.peek_is(&NOOP_KEYWORD) {
        parse_empty_statement(stream).map(Node::Empty)
    } else {
        parse_constant(stream).map(Node::Constant)
    }
}
