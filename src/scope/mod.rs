//! Per-module top-level scopes.
//!
//! A [`ModuleScope`] is the registry a compiled module populates: the type constructors it declares, the methods
//! it attaches to types (its own or anyone else's), and the other scopes it imports. It also owns one synthesized
//! *associated type* that stands for the module itself.
//!
//! ## Concurrency
//!
//! Scopes are shared as [`ScopeRef`] (`Arc<ModuleScope>`). All mutable tables sit behind a single
//! `parking_lot::RwLock`: registrations take the write lock for the duration of one insert, lookups take the read
//! lock. A scope never holds its lock while acquiring another scope's lock, so lookups over cyclic import graphs
//! cannot deadlock. Patches of one scope are serialized by a separate reentrant lock (see [`crate::patch`]).

mod constructor;
mod methods;

pub use constructor::TypeConstructor;
pub use methods::MethodTable;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use parking_lot::{ReentrantMutex, RwLock};

use crate::value::Function;

/// Shared handle to a module scope.
pub type ScopeRef = Arc<ModuleScope>;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique scope identity, used for import sets and visited sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    fn next() -> Self {
        ScopeId(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A module's top-level scope.
pub struct ModuleScope {
    id: ScopeId,
    name: String,
    associated_type: TypeConstructor,
    state: RwLock<ScopeState>,
    pub(crate) patch_lock: ReentrantMutex<()>,
}

#[derive(Default)]
struct ScopeState {
    constructors: HashMap<String, TypeConstructor>,
    methods: HashMap<TypeConstructor, MethodTable>,
    /// Insertion-ordered; resolution visits imports in this order.
    imports: IndexMap<ScopeId, ScopeRef>,
}

impl ModuleScope {
    /// Create a new, empty scope named `name`.
    ///
    /// The scope's associated type is named `name` as well and has the new scope as its home.
    pub fn new(name: impl Into<String>) -> ScopeRef {
        let name = name.into();
        let id = ScopeId::next();
        Arc::new_cyclic(|this| ModuleScope {
            id,
            associated_type: TypeConstructor::with_home(name.clone(), this.clone(), id),
            name,
            state: RwLock::new(ScopeState::default()),
            patch_lock: ReentrantMutex::new(()),
        })
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type that represents this module. Fixed for the lifetime of the scope.
    pub fn associated_type(&self) -> &TypeConstructor {
        &self.associated_type
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Add (or overwrite) a constructor under its own name.
    pub fn register_constructor(&self, constructor: TypeConstructor) {
        tracing::debug!(scope = %self.name, constructor = %constructor, "register constructor");
        self.state
            .write()
            .constructors
            .insert(constructor.name().to_string(), constructor);
    }

    /// Add (or overwrite) a method for `constructor` in this scope's table for that type.
    ///
    /// `constructor` need not be declared in this scope; registering a method for a foreign type defines an
    /// extension method.
    pub fn register_method(&self, constructor: &TypeConstructor, name: impl Into<String>, function: Function) {
        let name = name.into();
        tracing::debug!(
            scope = %self.name,
            constructor = %constructor,
            method = %name,
            extension = !constructor.is_declared_in(self),
            "register method"
        );
        self.state
            .write()
            .methods
            .entry(constructor.clone())
            .or_default()
            .insert(name, function);
    }

    /// Add `scope` to the imports. Adding a scope that is already imported is a no-op and keeps its original
    /// position in the traversal order.
    pub fn add_import(&self, scope: ScopeRef) {
        let mut state = self.state.write();
        if !state.imports.contains_key(&scope.id()) {
            tracing::debug!(scope = %self.name, import = %scope.name, "add import");
            state.imports.insert(scope.id(), scope);
        }
    }

    // ========================================================================
    // Local reads
    // ========================================================================

    /// A constructor declared directly in this scope. Does not consult the associated type or imports.
    pub fn local_constructor(&self, name: &str) -> Option<TypeConstructor> {
        self.state.read().constructors.get(name).cloned()
    }

    /// The method this scope itself registered for `(constructor, name)`, if any.
    pub fn local_method(&self, constructor: &TypeConstructor, name: &str) -> Option<Function> {
        self.state
            .read()
            .methods
            .get(constructor)
            .and_then(|table| table.get(name))
            .cloned()
    }

    /// Return `true` if any method was ever registered for `constructor` in this scope.
    pub fn has_method_table(&self, constructor: &TypeConstructor) -> bool {
        self.state.read().methods.contains_key(constructor)
    }

    /// A copy of this scope's method table for `constructor`.
    pub fn method_table(&self, constructor: &TypeConstructor) -> Option<MethodTable> {
        self.state.read().methods.get(constructor).cloned()
    }

    /// Names of the constructors declared in this scope, sorted.
    pub fn constructor_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().constructors.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Snapshot of the imports, in traversal order.
    pub fn imports(&self) -> Vec<ScopeRef> {
        self.state.read().imports.values().cloned().collect()
    }

    pub fn imports_scope(&self, id: ScopeId) -> bool {
        self.state.read().imports.contains_key(&id)
    }

    /// Constructor lookup over this scope and its imports. See [`crate::resolve::resolve_constructor`].
    pub fn resolve_constructor(&self, name: &str) -> Option<TypeConstructor> {
        crate::resolve::resolve_constructor(self, name)
    }

    /// Method lookup for a receiver type. See [`crate::resolve::resolve_method`].
    pub fn resolve_method(&self, constructor: &TypeConstructor, name: &str) -> Option<Function> {
        crate::resolve::resolve_method(self, constructor, name)
    }
}

impl fmt::Debug for ModuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("ModuleScope")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("constructors", &state.constructors.len())
            .field("method_tables", &state.methods.len())
            .field(
                "imports",
                &state.imports.values().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
