//! Property-based tests for lexing, parsing, and rendering
//!
//! These tests use proptest to verify invariants across many randomly generated inputs, catching edge cases that
//! hand-written tests might miss.

use proptest::prelude::*;
use tessera::ast::{Item, Node};
use tessera::diagnostics::{BlameKind, BlameSubject};
use tessera::source::SourceUnit;
use tessera::{Backend, LanguageDefinition, RenderConfig, lexer, parser, render};

fn lex(source: &str) -> (SourceUnit, Vec<tessera::lexer::Token>) {
    let mut unit = SourceUnit::new("prop.tsr", source);
    let tokens = lexer::lex(&mut unit, &LanguageDefinition::default());
    (unit, tokens)
}

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("Not a keyword", |s| LanguageDefinition::default().keyword(s).is_none())
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ident_strategy(),
        "[0-9]{1,6}(\\.[0-9]{1,3})?",
        "\"[a-z ]{0,10}\"",
        Just("true".to_string()),
        Just("none".to_string()),
    ]
}

/// Comment bodies that can never contain a closing mark.
fn comment_body_strategy() -> impl Strategy<Value = String> {
    "[a-z \n]{0,30}"
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        literal_strategy(),
        Just("pass".to_string()),
        "#[a-z ]{0,10}",
        (literal_strategy(), "[a-z ]{0,10}").prop_map(|(lit, note)| format!("{} #{}", lit, note)),
        comment_body_strategy().prop_map(|body| format!("/*{}*/", body)),
    ]
}

// =============================================================================
// Comment Properties
// =============================================================================

proptest! {
    /// Property: an unclosed block comment is one degraded token with exactly one blame referencing it
    #[test]
    fn unclosed_comment_yields_one_blame(body in comment_body_strategy()) {
        let source = format!("/*{}", body);
        let (unit, tokens) = lex(&source);

        let comment = &tokens[0];
        prop_assert!(comment.is_unclosed());
        prop_assert!(comment.is_multiline());
        prop_assert_eq!(&comment.content, &body);

        let blames: Vec<_> = unit.diagnostics().iter().collect();
        prop_assert_eq!(blames.len(), 1);
        prop_assert_eq!(blames[0].kind, BlameKind::UnclosedMultilineComment);
        prop_assert_eq!(blames[0].subject, BlameSubject::Token(comment.id));

        let program = parser::parse(&tokens);
        prop_assert!(program.is_ok());
    }

    /// Property: a closed block comment re-renders exactly in the canonical backend
    #[test]
    fn closed_comment_round_trips(body in comment_body_strategy()) {
        let source = format!("/*{}*/", body);
        let (unit, tokens) = lex(&source);
        prop_assert!(unit.diagnostics().is_empty());

        let rendered = render(&tokens[0], Backend::Canonical, &LanguageDefinition::default(), &RenderConfig::default())
            .unwrap();
        prop_assert_eq!(rendered, source);
    }
}

// =============================================================================
// Rendering Properties
// =============================================================================

proptest! {
    /// Property: a constant renders to its literal text in every backend
    #[test]
    fn constant_renders_identically_everywhere(literal in literal_strategy()) {
        let (_, tokens) = lex(&literal);
        let program = parser::parse(&tokens).unwrap();
        prop_assert_eq!(program.items.len(), 1);
        let Item::Node(node @ Node::Constant(constant)) = &program.items[0] else {
            return Err(TestCaseError::fail(format!("not a constant: {:?}", program.items[0])));
        };

        let lang = LanguageDefinition::default();
        for backend in Backend::ALL {
            let rendered = render(node, backend, &lang, &RenderConfig::default()).unwrap();
            prop_assert_eq!(&rendered, &constant.literal.text);
            prop_assert_eq!(&rendered, &literal);
        }
    }

    /// Property: every parsed item ends no earlier than it starts, and items appear in source order
    #[test]
    fn parsed_spans_are_ordered(lines in prop::collection::vec(line_strategy(), 0..8)) {
        let source = lines.join("\n");
        let (_, tokens) = lex(&source);
        let program = parser::parse(&tokens).unwrap();

        prop_assert!(program.span.end >= program.span.start);
        let mut previous_end = None;
        for item in &program.items {
            let span = item.span();
            prop_assert!(span.end >= span.start, "span {} is inverted", span);
            if let Some(end) = previous_end {
                prop_assert!(span.start >= end, "item at {} overlaps its predecessor", span);
            }
            previous_end = Some(span.end);
        }
    }
}
