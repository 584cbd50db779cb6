//! Per-type method tables.

use std::collections::HashMap;

use crate::value::Function;

/// Method name → callable, for one type within one scope.
///
/// Tables only grow or have entries overwritten.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    methods: HashMap<String, Function>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a method, returning the definition it replaced.
    pub fn insert(&mut self, name: impl Into<String>, function: Function) -> Option<Function> {
        self.methods.insert(name.into(), function)
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.methods.get(name)
    }

    /// Method names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
