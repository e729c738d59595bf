//! Golden snapshot tests for rendering
//!
//! These tests render `.tsr` input files through every backend and compare the output against inline snapshots, so
//! a backend change shows up as a reviewable diff.
//!
//! Run with: `cargo test --test render_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use tessera::{Backend, LanguageDefinition, RenderConfig, Translator};
use tessera_core::lang::keywords::KeywordId;

/// Load a test file from the render_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/render_snapshots/{}.tsr", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

fn render_with(translator: &Translator, name: &str, backend: Backend) -> String {
    let source = load_test_file(name);
    translator
        .translate(name, &source, backend)
        .expect("translation failed")
        .output
}

fn render(name: &str, backend: Backend) -> String {
    let translator = Translator::default().with_config(RenderConfig::new().with_trailing_newline(false));
    render_with(&translator, name, backend)
}

#[test]
fn test_mixed_canonical() {
    insta::assert_snapshot!(render("mixed", Backend::Canonical), @r#"
    # leading note
    /* block
       spans lines
    */
    pass
    42
    # trailing
    "text"
    "#);
}

#[test]
fn test_mixed_c_family() {
    insta::assert_snapshot!(render("mixed", Backend::CFamily), @r#"
    // leading note
    /* block
       spans lines
    */
    ;
    42
    // trailing
    "text"
    "#);
}

#[test]
fn test_mixed_scripting() {
    insta::assert_snapshot!(render("mixed", Backend::Scripting), @r#"
    # leading note
    # block
    #   spans lines
    pass
    42
    # trailing
    "text"
    "#);
}

fn custom_translator() -> Translator {
    let lang = LanguageDefinition::new()
        .with_oneline_comment("--")
        .with_multiline_comment("{-", "-}")
        .with_keyword_alias(KeywordId::Pass, "nop")
        .with_keyword_alias(KeywordId::Pass, "skip");
    Translator::new(lang).with_config(RenderConfig::new().with_trailing_newline(false))
}

#[test]
fn test_custom_marks_canonical() {
    insta::assert_snapshot!(render_with(&custom_translator(), "custom_marks", Backend::Canonical), @r"
    -- header
    pass
    {- two
    lines
    -}
    pass
    ");
}

#[test]
fn test_custom_marks_c_family() {
    insta::assert_snapshot!(render_with(&custom_translator(), "custom_marks", Backend::CFamily), @r"
    // header
    ;
    /* two
    lines
    */
    ;
    ");
}

#[test]
fn test_custom_marks_scripting() {
    insta::assert_snapshot!(render_with(&custom_translator(), "custom_marks", Backend::Scripting), @r"
    # header
    pass
    # two
    #lines
    pass
    ");
}

fn translator_for(path: &std::path::Path) -> Translator {
    match path.file_stem().and_then(|s| s.to_str()) {
        Some("custom_marks") => custom_translator(),
        _ => Translator::default(),
    }
}

// Glob-based test that auto-discovers all .tsr files
#[test]
fn test_all_fixtures_render_and_canonical_is_stable() {
    insta::glob!("render_snapshots/*.tsr", |path| {
        let source = fs::read_to_string(path).expect("failed to read file");
        let translator = translator_for(path);

        for backend in Backend::ALL {
            translator
                .translate("fixture", &source, backend)
                .unwrap_or_else(|e| panic!("{} failed for {}: {e}", backend, path.display()));
        }

        let once = translator.translate("fixture", &source, Backend::Canonical).unwrap();
        let twice = translator.translate("fixture", &once.output, Backend::Canonical).unwrap();
        assert_eq!(once.output, twice.output, "{}", path.display());
        assert!(twice.diagnostics.is_empty());
    });
}
