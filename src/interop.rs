//! The surface a module scope exposes to embedders.
//!
//! Four members, invoked by name with a positional argument list:
//!
//! - `get_method(constructor, name)`: the method *this* scope registered locally, or nothing
//! - `get_constructor(name)`: the constructor *this* scope declares locally, or nothing
//! - `patch(source)`: recompile into this scope, returning it
//! - `get_associated_constructor()`: the scope's associated type
//!
//! The member name is checked first, then arity, then argument kinds from left to right; all before any lookup or
//! mutation.

use modscope_core::lang::members::{self, MemberId};

use crate::error::InteropError;
use crate::patch::{Context, patch};
use crate::scope::{ScopeRef, TypeConstructor};
use crate::value::Value;

/// An object embedders can introspect and invoke members on.
pub trait InteropObject {
    fn has_members(&self) -> bool;

    fn is_member_invocable(&self, member: &str) -> bool;

    /// Names of all invocable members.
    fn members(&self) -> Vec<&'static str>;

    fn invoke_member(&self, member: &str, args: &[Value], context: &Context) -> Result<Value, InteropError>;
}

impl InteropObject for ScopeRef {
    fn has_members(&self) -> bool {
        true
    }

    fn is_member_invocable(&self, member: &str) -> bool {
        members::from_str(member).is_some()
    }

    fn members(&self) -> Vec<&'static str> {
        members::names().collect()
    }

    #[tracing::instrument(skip_all, fields(scope = self.name(), member = member, argc = args.len()))]
    fn invoke_member(&self, member: &str, args: &[Value], context: &Context) -> Result<Value, InteropError> {
        let id = members::from_str(member).ok_or_else(|| InteropError::UnknownMember(member.to_string()))?;
        check_arity(id, args)?;

        match id {
            MemberId::GetMethod => {
                let constructor = expect_type(id, args, 0)?;
                let name = expect_text(id, args, 1)?;
                Ok(self.local_method(constructor, name).into())
            }
            MemberId::GetConstructor => {
                let name = expect_text(id, args, 0)?;
                Ok(self.local_constructor(name).into())
            }
            MemberId::Patch => {
                let source = expect_text(id, args, 0)?;
                Ok(Value::Scope(patch(self, source, context)?))
            }
            MemberId::GetAssociatedConstructor => Ok(Value::Type(self.associated_type().clone())),
        }
    }
}

fn check_arity(id: MemberId, args: &[Value]) -> Result<(), InteropError> {
    let expected = members::arity(id);
    if args.len() == expected {
        Ok(())
    } else {
        Err(InteropError::ArityMismatch {
            member: members::as_str(id),
            expected,
            actual: args.len(),
        })
    }
}

fn expect_type(id: MemberId, args: &[Value], index: usize) -> Result<&TypeConstructor, InteropError> {
    let arg = &args[index];
    arg.as_type().ok_or_else(|| mismatch(id, index, "a type constructor", arg))
}

fn expect_text(id: MemberId, args: &[Value], index: usize) -> Result<&str, InteropError> {
    let arg = &args[index];
    arg.as_text().ok_or_else(|| mismatch(id, index, "text", arg))
}

fn mismatch(id: MemberId, index: usize, expected: &'static str, found: &Value) -> InteropError {
    InteropError::TypeMismatch {
        member: members::as_str(id),
        position: index + 1,
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::CompileFailure;
    use crate::patch::Source;
    use crate::scope::ModuleScope;
    use crate::value::Function;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A context whose compiler only counts invocations.
    fn counting_context() -> (Context, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let compiler = move |_source: &Source, _scope: &ScopeRef| -> Result<(), CompileFailure> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        };
        (Context::new(Arc::new(compiler), Config::default()), calls)
    }

    fn lib_with_point() -> (ScopeRef, TypeConstructor, Function) {
        let lib = ModuleScope::new("Lib");
        let point = TypeConstructor::new("Point", &lib);
        lib.register_constructor(point.clone());
        let to_string = Function::new("Point.to_string", |_| Value::from("a point"));
        lib.register_method(&point, "to_string", to_string.clone());
        (lib, point, to_string)
    }

    #[test]
    fn test_capabilities() {
        let scope = ModuleScope::new("Main");
        assert!(scope.has_members());
        for name in ["get_method", "get_constructor", "patch", "get_associated_constructor"] {
            assert!(scope.is_member_invocable(name), "{name} should be invocable");
        }
        assert!(!scope.is_member_invocable("get_methods"));
        assert!(!scope.is_member_invocable("register_method"));
        assert_eq!(
            scope.members(),
            vec!["get_method", "get_constructor", "patch", "get_associated_constructor"]
        );
    }

    #[test]
    fn test_get_method_returns_local_function() {
        let (lib, point, to_string) = lib_with_point();
        let (context, _) = counting_context();
        let result = lib
            .invoke_member("get_method", &[Value::Type(point), Value::from("to_string")], &context)
            .unwrap();
        assert_eq!(result, Value::Function(to_string));
    }

    #[test]
    fn test_get_method_without_table_is_nothing() {
        let (lib, _, _) = lib_with_point();
        let stranger = TypeConstructor::new("Stranger", &lib);
        let (context, _) = counting_context();
        let result = lib
            .invoke_member("get_method", &[Value::Type(stranger), Value::from("to_string")], &context)
            .unwrap();
        assert!(result.is_nothing());
    }

    #[test]
    fn test_get_method_is_local_only() {
        let (lib, point, _) = lib_with_point();
        let app = ModuleScope::new("App");
        app.add_import(lib);
        let (context, _) = counting_context();
        let result = app
            .invoke_member("get_method", &[Value::Type(point), Value::from("to_string")], &context)
            .unwrap();
        assert!(result.is_nothing());
    }

    #[test]
    fn test_get_method_arity() {
        let (lib, point, _) = lib_with_point();
        let (context, _) = counting_context();

        let err = lib
            .invoke_member("get_method", &[Value::Type(point.clone())], &context)
            .unwrap_err();
        assert!(matches!(
            err,
            InteropError::ArityMismatch { member: "get_method", expected: 2, actual: 1 }
        ));

        let err = lib
            .invoke_member(
                "get_method",
                &[Value::Type(point), Value::from("to_string"), Value::Nothing],
                &context,
            )
            .unwrap_err();
        assert!(matches!(err, InteropError::ArityMismatch { expected: 2, actual: 3, .. }));
    }

    #[test]
    fn test_get_method_argument_kinds() {
        let (lib, point, _) = lib_with_point();
        let (context, _) = counting_context();

        let err = lib
            .invoke_member("get_method", &[Value::from("Point"), Value::from("to_string")], &context)
            .unwrap_err();
        assert!(matches!(
            err,
            InteropError::TypeMismatch { position: 1, expected: "a type constructor", found: "text", .. }
        ));

        let err = lib
            .invoke_member("get_method", &[Value::Type(point), Value::Int(3)], &context)
            .unwrap_err();
        assert!(matches!(err, InteropError::TypeMismatch { position: 2, found: "an integer", .. }));
    }

    #[test]
    fn test_get_constructor() {
        let (lib, point, _) = lib_with_point();
        let (context, _) = counting_context();

        let found = lib.invoke_member("get_constructor", &[Value::from("Point")], &context).unwrap();
        assert_eq!(found, Value::Type(point));

        let missing = lib.invoke_member("get_constructor", &[Value::from("Nope")], &context).unwrap();
        assert!(missing.is_nothing());

        let err = lib.invoke_member("get_constructor", &[], &context).unwrap_err();
        assert!(matches!(err, InteropError::ArityMismatch { expected: 1, actual: 0, .. }));

        let err = lib
            .invoke_member("get_constructor", &[Value::Int(1)], &context)
            .unwrap_err();
        assert!(matches!(err, InteropError::TypeMismatch { member: "get_constructor", .. }));
    }

    #[test]
    fn test_get_associated_constructor() {
        let scope = ModuleScope::new("Main");
        let (context, _) = counting_context();

        let assoc = scope.invoke_member("get_associated_constructor", &[], &context).unwrap();
        assert_eq!(assoc, Value::Type(scope.associated_type().clone()));

        let err = scope
            .invoke_member("get_associated_constructor", &[Value::Nothing], &context)
            .unwrap_err();
        assert!(matches!(err, InteropError::ArityMismatch { expected: 0, actual: 1, .. }));
    }

    #[test]
    fn test_patch_returns_same_scope() {
        let scope = ModuleScope::new("Main");
        let (context, calls) = counting_context();

        let result = scope.invoke_member("patch", &[Value::from("type A")], &context).unwrap();

        assert_eq!(result, Value::Scope(scope.clone()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_patch_never_reaches_compiler() {
        let scope = ModuleScope::new("Main");
        let (context, calls) = counting_context();

        assert!(scope.invoke_member("patch", &[], &context).is_err());
        assert!(
            scope
                .invoke_member("patch", &[Value::from("a"), Value::from("b")], &context)
                .is_err()
        );
        assert!(scope.invoke_member("patch", &[Value::Int(1)], &context).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_member() {
        let scope = ModuleScope::new("Main");
        let (context, calls) = counting_context();
        let err = scope.invoke_member("patch_all", &[], &context).unwrap_err();
        assert!(matches!(err, InteropError::UnknownMember(ref name) if name == "patch_all"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
