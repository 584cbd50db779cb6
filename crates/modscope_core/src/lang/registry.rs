//! Shareable metadata for `modscope_core::lang` registries.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.

/// Version a vocabulary item is available since, as `(major, minor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

/// Shared metadata shape for registry items.
///
/// Registries that need extra per-item data (e.g. member arity) wrap this struct in their own info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
    pub since: Since,
}
