//! Item identity tokens
//!
//! Provides [`ItemId`], the unique, immutable identity of a collection item.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identity of a collection item
///
/// Generated once at item creation and never reused or recomputed.
/// The token is time-based (ULID) with an item-kind prefix, e.g.
/// `category-01jd7...`. Identity is always the full token, never content.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh id with the given item-kind prefix
    ///
    /// Two calls never produce the same token, even within one millisecond
    /// (ULIDs carry 80 bits of randomness past the timestamp).
    #[must_use]
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", Ulid::new().to_string().to_lowercase()))
    }

    /// Wrap an existing token (persisted data carries legacy ids like `"1"`)
    #[inline]
    #[must_use]
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(token: &str) -> Self {
        Self::from_raw(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_generate_carries_prefix() {
        let id = ItemId::generate("category");
        assert!(id.as_str().starts_with("category-"));
    }

    #[test]
    fn id_generate_is_unique() {
        let a = ItemId::generate("item");
        let b = ItemId::generate("item");
        assert_ne!(a, b);
    }

    #[test]
    fn id_from_raw_roundtrip() {
        let id = ItemId::from_raw("1");
        assert_eq!(id.as_str(), "1");
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn id_serde_transparent() {
        let id = ItemId::from_raw("footer-menu-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"footer-menu-42\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
