//! Error types surfaced to embedders.
//!
//! Resolution misses are not errors (they are `None` / [`crate::Value::Nothing`]); only interop misuse and
//! compilation failures are.

use miette::{Diagnostic, Report};
use modscope_syntax::diagnostics::{CompileError, SourceDiagnostic};
use thiserror::Error;

/// Compilation of a source into a scope failed.
///
/// Produced by a [`crate::Compiler`] and propagated unchanged by [`crate::patch()`]. Carries every error found, each
/// rendered against the source as a related `miette` diagnostic.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("failed to compile module `{module}` ({} error(s))", .errors.len())]
#[diagnostic(code(modscope::compile))]
pub struct CompileFailure {
    pub module: String,
    pub errors: Vec<CompileError>,
    #[related]
    diagnostics: Vec<SourceDiagnostic>,
}

impl CompileFailure {
    pub fn new(module: &str, source: &str, errors: Vec<CompileError>) -> Self {
        let diagnostics = errors.iter().map(|err| err.with_source(module, source)).collect();
        Self {
            module: module.to_string(),
            errors,
            diagnostics,
        }
    }

    /// One renderable report per error, in source order.
    pub fn reports(&self) -> Vec<Report> {
        self.diagnostics.iter().cloned().map(Report::new).collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.message.as_str()).collect()
    }
}

/// Failure of an interop member invocation.
///
/// All variants except `Compilation` are detected before any lookup or mutation takes place.
#[derive(Debug, Error, Diagnostic)]
pub enum InteropError {
    #[error("`{member}` expects {expected} argument(s), got {actual}")]
    #[diagnostic(code(modscope::interop::arity))]
    ArityMismatch {
        member: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `position` is 1-based.
    #[error("argument {position} of `{member}` must be {expected}, got {found}")]
    #[diagnostic(code(modscope::interop::type_mismatch))]
    TypeMismatch {
        member: &'static str,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown member `{0}`")]
    #[diagnostic(
        code(modscope::interop::unknown_member),
        help("invocable members are: get_method, get_constructor, patch, get_associated_constructor")
    )]
    UnknownMember(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Compilation(#[from] CompileFailure),
}
