//! Define the members a module scope exposes to embedders through the interop surface.
//!
//! Every member has a stable identifier ([`MemberId`]), a canonical name and a fixed arity. Invocation is purely
//! name/arity based; there is no overloading.
//!
//! ## Notes
//! - The registry order is the enumeration order reported to embedders.
//! - Argument *kinds* are validated by the runtime crate, which owns the value types; this table only records a
//!   human-readable parameter list for diagnostics and docs.
//!
//! ## Examples
//! ```rust
//! use modscope_core::lang::members::{self, MemberId};
//!
//! assert_eq!(members::from_str("get_constructor"), Some(MemberId::GetConstructor));
//! assert_eq!(members::arity(MemberId::GetAssociatedConstructor), 0);
//! assert!(members::from_str("get_methods").is_none());
//! ```

use super::registry::{LangItemInfo, Since};

/// Stable identifier for every interop member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberId {
    GetMethod,
    GetConstructor,
    Patch,
    GetAssociatedConstructor,
}

/// Metadata for an interop member.
#[derive(Debug, Clone, Copy)]
pub struct MemberInfo {
    pub item: LangItemInfo<MemberId>,
    /// Exact number of arguments the member accepts.
    pub arity: usize,
    /// Parameter names, in positional order (`params.len() == arity`).
    pub params: &'static [&'static str],
}

/// Registry of all interop members, in enumeration order.
pub const MEMBERS: &[MemberInfo] = &[
    info(
        MemberId::GetMethod,
        "get_method",
        &["constructor", "name"],
        "Return the method this scope defines locally for a type, or nothing.",
    ),
    info(
        MemberId::GetConstructor,
        "get_constructor",
        &["name"],
        "Return the type constructor this scope declares under a name, or nothing.",
    ),
    info(
        MemberId::Patch,
        "patch",
        &["source"],
        "Recompile source text into this very scope and return it.",
    ),
    info(
        MemberId::GetAssociatedConstructor,
        "get_associated_constructor",
        &[],
        "Return the type that represents the module scope itself.",
    ),
];

/// Return the canonical member name.
pub fn as_str(id: MemberId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the exact number of arguments a member accepts.
pub fn arity(id: MemberId) -> usize {
    info_for(id).arity
}

/// Return the full metadata entry for a member.
pub fn info_for(id: MemberId) -> &'static MemberInfo {
    MEMBERS
        .iter()
        .find(|m| m.item.id == id)
        .expect("INVARIANT: every MemberId has a registry entry")
}

/// Lookup by name. Matching is exact and case-sensitive.
pub fn from_str(s: &str) -> Option<MemberId> {
    MEMBERS.iter().find(|m| m.item.canonical == s).map(|m| m.item.id)
}

/// Iterate over member names in enumeration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    MEMBERS.iter().map(|m| m.item.canonical)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: MemberId,
    canonical: &'static str,
    params: &'static [&'static str],
    description: &'static str,
) -> MemberInfo {
    MemberInfo {
        item: LangItemInfo {
            id,
            canonical,
            description,
            since: Since(0, 1),
        },
        arity: params.len(),
        params,
    }
}
