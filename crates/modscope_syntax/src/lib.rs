//! Syntax frontend for the modscope declaration language: lexer, parser, AST, diagnostics.
//!
//! The language is line-oriented and only declares things; it has no statements or control flow:
//!
//! ```text
//! import Lib
//! type Point
//! Point.to_string self = "a point"
//! answer = 42
//! ```
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names or touch module scopes. Registering
//!   declarations into a scope is the job of the runtime crate's compiler.
//! - Reserved words come from `modscope_core::lang::keywords`.
//!
//! ## Examples
//! ```rust
//! use modscope_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("type Point\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

/// Lex and parse a source string in one step.
///
/// ## Errors
/// Returns every lexer error if lexing fails, otherwise every parser error if parsing fails.
pub fn parse_source(source: &str) -> Result<ast::Program, Vec<diagnostics::CompileError>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
