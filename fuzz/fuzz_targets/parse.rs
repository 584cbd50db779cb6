#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use modscope::{Config, DeclCompiler, ScopeRegistry, patch};
use modscope_syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(tokens) = lexer::lex(source) {
        let _ = parser::parse(&tokens);
    }

    // Whatever the source, patching must either register everything or leave the scope untouched.
    let registry = Arc::new(ScopeRegistry::new());
    let context = DeclCompiler::new(Arc::clone(&registry), Config::default()).into_context();
    let scope = registry.get_or_create("Fuzz");
    if patch(&scope, source, &context).is_err() {
        assert!(scope.constructor_names().is_empty());
        assert!(scope.imports().is_empty());
    }
});
