//! Type identities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use super::{ModuleScope, ScopeId, ScopeRef};

static NEXT_CONSTRUCTOR_ID: AtomicU64 = AtomicU64::new(0);

/// A declared type: a name plus the scope that declared it (its *home scope*).
///
/// Equality and hashing are by identity. Two constructors with the same name are distinct unless one is a clone
/// of the other, even when they share a home scope.
///
/// The home scope is held weakly: a scope owns its associated type, and the associated type points back at the
/// scope.
#[derive(Clone)]
pub struct TypeConstructor {
    inner: Arc<ConstructorInner>,
}

struct ConstructorInner {
    id: u64,
    name: String,
    home: Weak<ModuleScope>,
    home_id: ScopeId,
}

impl TypeConstructor {
    /// Create a new type identity declared in `home`.
    ///
    /// This does not register the constructor; call [`ModuleScope::register_constructor`] for that.
    pub fn new(name: impl Into<String>, home: &ScopeRef) -> Self {
        Self::with_home(name.into(), Arc::downgrade(home), home.id())
    }

    pub(crate) fn with_home(name: String, home: Weak<ModuleScope>, home_id: ScopeId) -> Self {
        Self {
            inner: Arc::new(ConstructorInner {
                id: NEXT_CONSTRUCTOR_ID.fetch_add(1, Ordering::Relaxed),
                name,
                home,
                home_id,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The scope this type was declared in, if it is still alive.
    pub fn home_scope(&self) -> Option<ScopeRef> {
        self.inner.home.upgrade()
    }

    pub fn home_scope_id(&self) -> ScopeId {
        self.inner.home_id
    }

    /// Return `true` if `scope` is this type's home scope.
    pub fn is_declared_in(&self, scope: &ModuleScope) -> bool {
        self.inner.home_id == scope.id()
    }
}

impl PartialEq for TypeConstructor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for TypeConstructor {}

impl Hash for TypeConstructor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for TypeConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeConstructor")
            .field("name", &self.inner.name)
            .field("id", &self.inner.id)
            .field("home", &self.inner.home_id)
            .finish()
    }
}

impl fmt::Display for TypeConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}
