//! Runtime configuration.

/// Configuration shared by patching and the reference compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language id stamped on every [`crate::Source`] handed to a compiler
    pub language_id: String,
    /// When an `import` names a module the registry does not know, create an empty placeholder scope for it
    /// instead of failing. Lets mutually importing modules be compiled in any order.
    pub create_missing_imports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_id: "modscope".to_string(),
            create_missing_imports: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_id(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = language_id.into();
        self
    }

    pub fn with_create_missing_imports(mut self, create: bool) -> Self {
        self.create_missing_imports = create;
        self
    }
}
