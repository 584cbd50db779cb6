//! Name-indexed collection of module scopes.
//!
//! The registry is how a compiler turns `import Lib` into a [`ScopeRef`]. Scopes are kept in creation order.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::scope::{ModuleScope, ScopeRef};

#[derive(Debug, Default)]
pub struct ScopeRegistry {
    scopes: RwLock<IndexMap<String, ScopeRef>>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scope registered under `name`, creating an empty one if there is none.
    pub fn get_or_create(&self, name: &str) -> ScopeRef {
        if let Some(scope) = self.get(name) {
            return scope;
        }
        let mut scopes = self.scopes.write();
        // Another writer may have won the race between the read and the write lock.
        scopes
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(module = name, "creating module scope");
                ModuleScope::new(name)
            })
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<ScopeRef> {
        self.scopes.read().get(name).cloned()
    }

    /// Registered module names, in creation order.
    pub fn names(&self) -> Vec<String> {
        self.scopes.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.scopes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.read().is_empty()
    }
}
