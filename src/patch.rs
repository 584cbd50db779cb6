//! The compiler boundary and live patching.
//!
//! A [`Compiler`] turns source text into registrations on a target scope. [`patch()`] re-runs a compiler against an
//! existing scope, so everything holding that scope observes the new definitions.

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::CompileFailure;
use crate::scope::ScopeRef;

/// Source text together with the identity it is compiled under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub language_id: String,
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(language_id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Populates a scope from source text.
///
/// Implementations register constructors, methods and imports through the scope's registration operations.
/// Failures are reported as [`CompileFailure`]; whether a failed compile leaves partial registrations behind is
/// up to the implementation.
pub trait Compiler: Send + Sync {
    fn compile(&self, source: &Source, scope: &ScopeRef) -> Result<(), CompileFailure>;
}

impl<F> Compiler for F
where
    F: Fn(&Source, &ScopeRef) -> Result<(), CompileFailure> + Send + Sync,
{
    fn compile(&self, source: &Source, scope: &ScopeRef) -> Result<(), CompileFailure> {
        self(source, scope)
    }
}

/// What patching needs from the surrounding runtime: a compiler and configuration.
///
/// `patch` reads only `language_id` from this config. Compiler options such as `create_missing_imports` are read by
/// the compiler from its own copy; build the context with [`crate::DeclCompiler::into_context`] to keep the two the
/// same.
#[derive(Clone)]
pub struct Context {
    compiler: Arc<dyn Compiler>,
    config: Config,
}

impl Context {
    pub fn new(compiler: Arc<dyn Compiler>, config: Config) -> Self {
        Self { compiler, config }
    }

    pub fn compiler(&self) -> &dyn Compiler {
        self.compiler.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Compile `text` into `scope` itself and return the same scope.
///
/// The source is named after the scope's associated type. Patches of one scope are serialized; a compiler may
/// patch the scope it is compiling into from the same thread.
///
/// ## Errors
/// Returns the compiler's [`CompileFailure`] unchanged.
#[tracing::instrument(skip_all, fields(scope = scope.name(), source_len = text.len()))]
pub fn patch(scope: &ScopeRef, text: &str, context: &Context) -> Result<ScopeRef, CompileFailure> {
    let _serialized = scope.patch_lock.lock();

    let source = Source::new(
        context.config().language_id.as_str(),
        scope.associated_type().name(),
        text,
    );

    if let Err(failure) = context.compiler().compile(&source, scope) {
        tracing::warn!(errors = failure.errors.len(), "patch failed to compile");
        return Err(failure);
    }

    tracing::debug!("patch applied");
    Ok(Arc::clone(scope))
}
