//! Constructor and method resolution.
//!
//! Both lookups are read-only and total: "not found" is `None`, never an error. They differ in how far they follow
//! imports:
//!
//! - [`resolve_constructor`] is **transitive**: it follows imports of imports without bound, breadth-first in import
//!   order, visiting each reachable scope at most once.
//! - [`resolve_method`] is **shallow**: after the receiver's home scope and the calling scope, it consults only the
//!   calling scope's direct imports, and only their own tables.
//!
//! Import order is insertion order, so both lookups are deterministic: the first hit in import order (at the
//! shallowest depth, for constructors) wins.

use std::collections::{HashSet, VecDeque};

use crate::scope::{ModuleScope, ScopeId, ScopeRef, TypeConstructor};
use crate::value::Function;

/// Find the type constructor visible as `name` from `scope`.
///
/// Each visited scope answers with its associated type if `name` is the scope's own name, otherwise with its
/// locally declared constructor. The associated-type check therefore shadows a constructor registered under the
/// same name.
pub fn resolve_constructor(scope: &ModuleScope, name: &str) -> Option<TypeConstructor> {
    if let Some(found) = constructor_here(scope, name) {
        return Some(found);
    }
    resolve_through_imports(scope, &[], name)
}

/// The import half of [`resolve_constructor`], as if `pending` were appended to `scope`'s imports.
///
/// A compiler uses this to resolve names against the import order a scope will have once its plan is applied.
pub(crate) fn resolve_through_imports(
    scope: &ModuleScope,
    pending: &[ScopeRef],
    name: &str,
) -> Option<TypeConstructor> {
    let mut visited: HashSet<ScopeId> = HashSet::from([scope.id()]);
    let mut queue: VecDeque<ScopeRef> = VecDeque::new();
    enqueue_imports(scope, &mut visited, &mut queue);
    for import in pending {
        if visited.insert(import.id()) {
            queue.push_back(ScopeRef::clone(import));
        }
    }

    while let Some(current) = queue.pop_front() {
        if let Some(found) = constructor_here(&current, name) {
            tracing::trace!(
                scope = scope.name(),
                constructor = name,
                found_in = current.name(),
                "resolved constructor through imports"
            );
            return Some(found);
        }
        enqueue_imports(&current, &mut visited, &mut queue);
    }

    tracing::trace!(scope = scope.name(), constructor = name, "constructor not found");
    None
}

fn constructor_here(scope: &ModuleScope, name: &str) -> Option<TypeConstructor> {
    if scope.associated_type().name() == name {
        return Some(scope.associated_type().clone());
    }
    scope.local_constructor(name)
}

fn enqueue_imports(scope: &ModuleScope, visited: &mut HashSet<ScopeId>, queue: &mut VecDeque<ScopeRef>) {
    for import in scope.imports() {
        if visited.insert(import.id()) {
            queue.push_back(import);
        }
    }
}

/// Find the method `name` for receivers of type `constructor`, as seen from `scope`.
///
/// In order:
/// 1. the table of the constructor's home scope (wherever the lookup starts, a method defined next to its type
///    cannot be overridden by an extension),
/// 2. `scope`'s own table,
/// 3. each direct import's own table, in import order.
///
/// A scope reached twice (e.g. the home scope is also imported) is consulted once.
pub fn resolve_method(scope: &ModuleScope, constructor: &TypeConstructor, name: &str) -> Option<Function> {
    let mut visited: HashSet<ScopeId> = HashSet::new();

    if let Some(home) = constructor.home_scope() {
        visited.insert(home.id());
        if let Some(found) = home.local_method(constructor, name) {
            tracing::trace!(constructor = %constructor, method = name, found_in = home.name(), "resolved method in home scope");
            return Some(found);
        }
    }

    if visited.insert(scope.id()) {
        if let Some(found) = scope.local_method(constructor, name) {
            tracing::trace!(constructor = %constructor, method = name, found_in = scope.name(), "resolved extension method");
            return Some(found);
        }
    }

    for import in scope.imports() {
        if !visited.insert(import.id()) {
            continue;
        }
        if let Some(found) = import.local_method(constructor, name) {
            tracing::trace!(constructor = %constructor, method = name, found_in = import.name(), "resolved method in import");
            return Some(found);
        }
    }

    tracing::trace!(scope = scope.name(), constructor = %constructor, method = name, "no applicable method");
    None
}
