#[cfg(test)]
/// Parser unit tests.
///
/// These focus on the per-kind parse functions, span assignment and the hard-failure contract.
mod tests {
    use super::*;
    use crate::lexer::{self, TokenKind};
    use crate::source::SourceUnit;
    use tessera_core::LanguageDefinition;

    fn lex_str(source: &str) -> Vec<Token> {
        let mut unit = SourceUnit::new("test", source);
        lexer::lex(&mut unit, &LanguageDefinition::default())
    }

    fn parse_str(source: &str) -> Result<Program, SyntaxError> {
        parse(&lex_str(source))
    }

    #[test]
    fn test_constant_accepts_any_token_kind() {
        for source in ["42", "\"s\"", "name", "true", ";", "+"] {
            let tokens = lex_str(source);
            let node = parse_constant(&mut TokenStream::new(&tokens)).unwrap();
            assert_eq!(node.literal.text, source);
            assert_eq!(node.span, tokens[0].span);
        }
    }

    #[test]
    fn test_constant_at_end_of_input_fails() {
        let tokens = lex_str("");
        let err = parse_constant(&mut TokenStream::new(&tokens)).unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_empty_statement_consumes_noop_keyword() {
        let tokens = lex_str("pass");
        let node = parse_empty_statement(&mut TokenStream::new(&tokens)).unwrap();
        assert_eq!(node.source_token.kind, TokenKind::Keyword(KeywordId::Pass));
        assert_eq!(node.span, tokens[0].span);
    }

    #[test]
    fn test_empty_statement_mismatch_is_hard_error() {
        let tokens = lex_str("skip");
        let mut stream = TokenStream::new(&tokens);
        let err = parse_empty_statement(&mut stream).unwrap_err();
        assert_eq!(err.to_string(), "expected keyword 'pass', found identifier `skip` at 1:1-1:5");
        // Nothing consumed.
        assert!(stream.peek_is(&TokenPattern::Ident));
    }

    #[test]
    fn test_empty_statement_accepts_alias_spelling() {
        let lang = LanguageDefinition::default().with_keyword_alias(KeywordId::Pass, "nop");
        let mut unit = SourceUnit::new("test", "nop");
        let tokens = lexer::lex(&mut unit, &lang);
        let node = parse_empty_statement(&mut TokenStream::new(&tokens)).unwrap();
        assert_eq!(node.source_token.text, "nop");
    }

    #[test]
    fn test_parse_program_items_in_source_order() {
        let program = parse_str("\n# first\n42\npass\n\n/* last */\n").unwrap();
        assert_eq!(program.items.len(), 4);
        assert!(matches!(&program.items[0], Item::Comment(t) if t.content == " first"));
        assert!(matches!(&program.items[1], Item::Node(Node::Constant(c)) if c.literal.text == "42"));
        assert!(matches!(&program.items[2], Item::Node(Node::Empty(_))));
        assert!(matches!(&program.items[3], Item::Comment(t) if t.is_multiline()));
    }

    #[test]
    fn test_trailing_comment_on_same_line() {
        let program = parse_str("1 # one\n2").unwrap();
        assert_eq!(program.items.len(), 3);
        assert!(matches!(&program.items[1], Item::Comment(_)));
    }

    #[test]
    fn test_block_comment_on_either_side_of_a_node() {
        for source in ["/* c */ pass\n", "pass /* c */\n", "/* a */ 1 /* b */\n2"] {
            let program = parse_str(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"));
            assert!(program.items.iter().any(|i| matches!(i, Item::Node(_))), "{source:?}");
        }

        let program = parse_str("/* c */ pass").unwrap();
        assert_eq!(program.items.len(), 2);
        assert!(matches!(&program.items[0], Item::Comment(t) if t.is_multiline()));
        assert!(matches!(&program.items[1], Item::Node(Node::Empty(_))));
    }

    #[test]
    fn test_nodes_around_a_block_comment_still_need_a_line_end() {
        let err = parse_str("1 /* c */ 2").unwrap_err();
        assert!(matches!(err, SyntaxError::Expected { ref found, .. } if found == "number `2`"));
    }

    #[test]
    fn test_two_items_on_one_line_is_error() {
        let err = parse_str("1 2").unwrap_err();
        match err {
            SyntaxError::Expected { expected, found, .. } => {
                assert_eq!(expected, "end of line");
                assert_eq!(found, "number `2`");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_program() {
        let program = parse_str("\n\n").unwrap();
        assert!(program.items.is_empty());
        assert!(program.span.end >= program.span.start);
    }

    #[test]
    fn test_program_span_covers_items() {
        let program = parse_str("1\n  22").unwrap();
        assert_eq!(program.span.start, Location::new(0, 0));
        assert_eq!(program.span.end, Location::new(1, 4));
        for item in &program.items {
            assert!(item.span().end >= item.span().start);
        }
    }

    #[test]
    fn test_unclosed_comment_does_not_abort_parse() {
        let mut unit = SourceUnit::new("test", "1\n/* open");
        let tokens = lexer::lex(&mut unit, &LanguageDefinition::default());
        let program = parse(&tokens).unwrap();
        assert_eq!(program.items.len(), 2);
        assert!(matches!(&program.items[1], Item::Comment(t) if t.is_unclosed()));
        assert_eq!(unit.diagnostics().len(), 1);
    }
}
