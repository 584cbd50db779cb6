//! Vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `MemberId`) and look up spellings and metadata through the
//! registry tables instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax and the interop layer enforces arity; registries only provide spellings and
//!   metadata for shared use.
//!
//! ## Examples
//! ```rust
//! use modscope_core::lang::members::{self, MemberId};
//!
//! assert_eq!(members::from_str("patch"), Some(MemberId::Patch));
//! assert_eq!(members::arity(MemberId::GetMethod), 2);
//! ```

pub mod keywords;
pub mod members;
pub mod registry;
