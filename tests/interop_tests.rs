//! Embedder-facing behaviour of the interop surface, driven through the reference compiler.

use std::sync::Arc;

use modscope::{Config, Context, DeclCompiler, InteropError, InteropObject, ScopeRegistry, Value};

fn session() -> (Arc<ScopeRegistry>, Context) {
    let registry = Arc::new(ScopeRegistry::new());
    let context = DeclCompiler::new(Arc::clone(&registry), Config::default()).into_context();
    (registry, context)
}

fn error_text(result: Result<Value, InteropError>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn patch_then_inspect() {
    let (registry, context) = session();
    let main = registry.get_or_create("Main");

    let patched = main
        .invoke_member("patch", &[Value::from("type Point\nPoint.x = 1\n")], &context)
        .unwrap();
    let scope = patched.as_scope().unwrap();
    assert!(Arc::ptr_eq(scope, &main));

    let point = main
        .invoke_member("get_constructor", &[Value::from("Point")], &context)
        .unwrap();
    let method = main
        .invoke_member("get_method", &[point, Value::from("x")], &context)
        .unwrap();
    assert_eq!(method.as_function().unwrap().call(&[]), Value::Int(1));
}

#[test]
fn associated_constructor_accepts_module_methods() {
    let (registry, context) = session();
    let main = registry.get_or_create("Main");
    main.invoke_member("patch", &[Value::from("answer = 42\n")], &context)
        .unwrap();

    let assoc = main
        .invoke_member("get_associated_constructor", &[], &context)
        .unwrap();
    assert_eq!(assoc.as_type().unwrap().name(), "Main");

    let answer = main
        .invoke_member("get_method", &[assoc, Value::from("answer")], &context)
        .unwrap();
    assert_eq!(answer.as_function().unwrap().call(&[]), Value::Int(42));
}

#[test]
fn get_constructor_does_not_follow_imports() {
    let (registry, context) = session();
    let lib = registry.get_or_create("Lib");
    let app = registry.get_or_create("App");
    lib.invoke_member("patch", &[Value::from("type Point\n")], &context).unwrap();
    app.invoke_member("patch", &[Value::from("import Lib\n")], &context).unwrap();

    let local = app
        .invoke_member("get_constructor", &[Value::from("Point")], &context)
        .unwrap();
    assert!(local.is_nothing());
    assert!(app.resolve_constructor("Point").is_some());
}

#[test]
fn error_messages() {
    let (registry, context) = session();
    let main = registry.get_or_create("Main");
    let assoc = Value::Type(main.associated_type().clone());

    insta::assert_snapshot!(
        error_text(main.invoke_member("get_method", &[assoc.clone()], &context)),
        @"`get_method` expects 2 argument(s), got 1"
    );
    insta::assert_snapshot!(
        error_text(main.invoke_member("get_method", &[Value::Int(1), Value::from("x")], &context)),
        @"argument 1 of `get_method` must be a type constructor, got an integer"
    );
    insta::assert_snapshot!(
        error_text(main.invoke_member("get_method", &[assoc, Value::Nothing], &context)),
        @"argument 2 of `get_method` must be text, got nothing"
    );
    insta::assert_snapshot!(
        error_text(main.invoke_member("patch", &[Value::Scope(Arc::clone(&main))], &context)),
        @"argument 1 of `patch` must be text, got a module scope"
    );
    insta::assert_snapshot!(
        error_text(main.invoke_member("get_methods", &[], &context)),
        @"unknown member `get_methods`"
    );
}

#[test]
fn compilation_failure_passes_through() {
    let (registry, context) = session();
    let main = registry.get_or_create("Main");

    let err = main
        .invoke_member("patch", &[Value::from("Ghost.boo = 1\n")], &context)
        .unwrap_err();

    let failure = match err {
        InteropError::Compilation(failure) => failure,
        other => panic!("expected a compilation failure, got {other:?}"),
    };
    assert_eq!(failure.messages(), vec!["unknown type `Ghost`"]);
}

#[test]
fn member_listing() {
    let (registry, _) = session();
    let main = registry.get_or_create("Main");
    assert!(main.has_members());
    for member in main.members() {
        assert!(main.is_member_invocable(member));
    }
    assert!(!main.is_member_invocable("resolve_method"));
}
