//! Parser for the declaration language
//!
//! Converts a token stream into a [`Program`]. Each non-blank line is one declaration.
//!
//! ## Examples
//!
//! ```rust
//! use modscope_syntax::{lexer, parser};
//!
//! let source = "type Point\nPoint.to_string self = \"a point\"\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.declarations.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use modscope_core::lang::keywords::KeywordId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module while keeping each file focused.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
