//! Runtime values crossing the interop boundary, and the callables methods resolve to.

use std::fmt;
use std::sync::Arc;

use crate::scope::{ScopeRef, TypeConstructor};

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// An opaque callable.
///
/// Cloning is cheap and preserves identity; equality is identity ([`Function::ptr_eq`]), never structural.
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

struct FunctionInner {
    name: String,
    body: Box<NativeFn>,
}

impl Function {
    pub fn new(name: impl Into<String>, body: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(FunctionInner {
                name: name.into(),
                body: Box::new(body),
            }),
        }
    }

    /// Diagnostic name (e.g. `Point.to_string`); plays no part in identity.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner.body)(args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.inner.name)
    }
}

/// A value passed to or returned from interop members and callables.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence: what lookups return when nothing applies.
    #[default]
    Nothing,
    Int(i64),
    Text(String),
    Type(TypeConstructor),
    Function(Function),
    Scope(ScopeRef),
}

impl Value {
    /// Kind name used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nothing => "nothing",
            Value::Int(_) => "an integer",
            Value::Text(_) => "text",
            Value::Type(_) => "a type constructor",
            Value::Function(_) => "a function",
            Value::Scope(_) => "a module scope",
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeConstructor> {
        match self {
            Value::Type(constructor) => Some(constructor),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_scope(&self) -> Option<&ScopeRef> {
        match self {
            Value::Scope(scope) => Some(scope),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nothing, Value::Nothing) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Scope(a), Value::Scope(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<TypeConstructor> for Value {
    fn from(value: TypeConstructor) -> Self {
        Value::Type(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Option<Function>> for Value {
    fn from(value: Option<Function>) -> Self {
        value.map_or(Value::Nothing, Value::Function)
    }
}

impl From<Option<TypeConstructor>> for Value {
    fn from(value: Option<TypeConstructor>) -> Self {
        value.map_or(Value::Nothing, Value::Type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ModuleScope;

    #[test]
    fn test_function_identity_not_structure() {
        let a = Function::new("f", |_| Value::Int(1));
        let b = Function::new("f", |_| Value::Int(1));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_function_call_receives_arguments() {
        let second = Function::new("second", |args| args.get(1).cloned().unwrap_or_default());
        assert_eq!(second.call(&[Value::Int(1), Value::from("two")]), Value::from("two"));
        assert_eq!(second.call(&[]), Value::Nothing);
    }

    #[test]
    fn test_scope_values_compare_by_identity() {
        let a = ModuleScope::new("A");
        let other_a = ModuleScope::new("A");
        assert_eq!(Value::Scope(a.clone()), Value::Scope(a.clone()));
        assert_ne!(Value::Scope(a), Value::Scope(other_a));
    }

    #[test]
    fn test_absence_converts_to_nothing() {
        assert!(Value::from(None::<Function>).is_nothing());
        assert!(Value::from(None::<TypeConstructor>).is_nothing());
    }
}
