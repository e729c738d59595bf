#![no_main]

use libfuzzer_sys::fuzz_target;
use tessera::source::SourceUnit;
use tessera::{Backend, LanguageDefinition, RenderConfig, lexer, parser, render_program};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let lang = LanguageDefinition::default();
        let mut unit = SourceUnit::new("fuzz", s);
        let tokens = lexer::lex(&mut unit, &lang);
        // Lexing never fails; the parser and each backend must not panic either
        if let Ok(program) = parser::parse(&tokens) {
            for backend in Backend::ALL {
                let _ = render_program(&program, backend, &lang, &RenderConfig::default());
            }
        }
    }
});
