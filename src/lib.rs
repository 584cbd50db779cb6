#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
//! modscope: module scopes and method dispatch for a dynamic language runtime.
//!
//! A [`ModuleScope`] records what one compiled module declares: its type constructors, the methods it attaches
//! to types (including *extension methods* on types declared elsewhere), and the scopes it imports. Call sites
//! dispatch through [`resolve_method`]; names in source resolve through [`resolve_constructor`]. A scope can be
//! recompiled in place with [`patch()`], and embedders reach it through the [`InteropObject`] surface.
//!
//! ```rust
//! use std::sync::Arc;
//! use modscope::{Config, DeclCompiler, ScopeRegistry, Value, patch};
//!
//! let registry = Arc::new(ScopeRegistry::new());
//! let context = DeclCompiler::new(Arc::clone(&registry), Config::default()).into_context();
//!
//! let lib = registry.get_or_create("Lib");
//! patch(&lib, "type Point\n", &context).unwrap();
//!
//! let app = registry.get_or_create("App");
//! patch(&app, "import Lib\nPoint.to_string self = \"a point\"\n", &context).unwrap();
//!
//! let point = app.resolve_constructor("Point").unwrap();
//! let to_string = app.resolve_method(&point, "to_string").unwrap();
//! assert_eq!(to_string.call(&[]), Value::from("a point"));
//! ```
//!
//! ## Panic Policy
//!
//! - **Library code**: `Result` or `Option` with `?` / `ok_or` / `map_err`; `clippy::unwrap_used` is denied
//!   outside tests. Lookups never fail, they return `None`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a runtime bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod compiler;
pub mod config;
pub mod error;
pub mod interop;
pub mod patch;
pub mod registry;
pub mod resolve;
pub mod scope;
pub mod value;

pub use compiler::DeclCompiler;
pub use config::Config;
pub use error::{CompileFailure, InteropError};
pub use interop::InteropObject;
pub use patch::{Compiler, Context, Source, patch};
pub use registry::ScopeRegistry;
pub use resolve::{resolve_constructor, resolve_method};
pub use scope::{MethodTable, ModuleScope, ScopeId, ScopeRef, TypeConstructor};
pub use value::{Function, Value};
