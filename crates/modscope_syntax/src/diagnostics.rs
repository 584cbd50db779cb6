//! Diagnostics for the declaration language.
//!
//! [`CompileError`] is the plain, cloneable error value produced by the lexer, the parser and the runtime's
//! compiler. [`SourceDiagnostic`] attaches source text to it so `miette` can render a labelled snippet.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            ..Self::new(message, span)
        }
    }

    /// An error found while registering declarations into a scope (unknown names, duplicates).
    pub fn name(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Name,
            ..Self::new(message, span)
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn to_source_span(&self) -> SourceSpan {
        (self.span.start, self.span.len()).into()
    }

    /// Attach the source text this error points into, producing a renderable diagnostic.
    pub fn with_source(&self, name: &str, source: &str) -> SourceDiagnostic {
        SourceDiagnostic {
            src: NamedSource::new(name, source.to_string()),
            span: self.to_source_span(),
            help: (!self.hints.is_empty()).then(|| self.hints.join("\n")),
            message: self.message.clone(),
            label: self.kind.label().to_string(),
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

impl std::error::Error for CompileError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
    Name,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Error => "error",
            ErrorKind::Syntax => "syntax error",
            ErrorKind::Name => "name error",
        }
    }
}

/// A [`CompileError`] bundled with its source, for rendering through `miette`.
#[derive(Debug, Error, Diagnostic, Clone)]
#[error("{message}")]
pub struct SourceDiagnostic {
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
    message: String,
    label: String,
}
