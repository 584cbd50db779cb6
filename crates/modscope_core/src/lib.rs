//! Provide the canonical vocabulary shared by the modscope runtime core, its declaration-language frontend and
//! embedders.
//!
//! This crate is intentionally small and dependency-free. It holds `const` registries that both:
//! - the syntax frontend uses to recognize reserved words, and
//! - the interop surface uses to name, validate and enumerate the members it exposes to embedders.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no runtime types.

pub mod lang;
