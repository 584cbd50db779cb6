//! Token types for the declaration-language lexer.
//!
//! Reserved words carry a `KeywordId` from `modscope_core::lang::keywords`, so the parser never compares
//! keyword strings.

use crate::ast::Span;
use modscope_core::lang::keywords::{self, KeywordId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Keyword(KeywordId),

    Ident(String),
    Int(i64),
    String(String),

    Dot,
    Eq,

    Newline,
    Eof,
}

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Short human-readable description used in "expected X, found Y" errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword `{}`", keywords::as_str(*id)),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Int(value) => format!("integer {value}"),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Dot => "`.`".to_string(),
            TokenKind::Eq => "`=`".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
