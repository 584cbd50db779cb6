//! Define the reserved keyword vocabulary of the declaration language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Identifiers that are not reserved here (including `self`) are ordinary names.
//!
//! ## Examples
//! ```rust
//! use modscope_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("import"), Some(KeywordId::Import));
//! assert_eq!(keywords::as_str(KeywordId::Type), "type");
//! assert_eq!(keywords::from_str("Type"), None);
//! ```

use super::registry::{LangItemInfo, Since};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Import,
    Type,
}

/// Metadata for a keyword.
pub type KeywordInfo = LangItemInfo<KeywordId>;

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Import,
        "import",
        "Add another module scope to this module's imports.",
    ),
    info(
        KeywordId::Type,
        "type",
        "Declare a type constructor in this module scope.",
    ),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - Never in practice: every `KeywordId` has an entry, which `lang_registry_guardrails` checks.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, description: &'static str) -> KeywordInfo {
    LangItemInfo {
        id,
        canonical,
        description,
        since: Since(0, 1),
    }
}
