//! Document fingerprinting
//!
//! Provides [`DocumentFingerprint`], a 32-byte Blake3 hash over the
//! serialized document. Two documents fingerprint equal exactly when their
//! wire forms are identical, which gives the editor a cheap dirty check.

use std::fmt::{self, Display, Formatter};

use crate::document::PageConfig;

/// 32-byte fingerprint of a document's wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentFingerprint([u8; 32]);

impl DocumentFingerprint {
    /// Fingerprint a document
    ///
    /// # Errors
    /// Returns error if serialization fails (practically unreachable for
    /// document shapes)
    pub fn compute(document: &PageConfig) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(document)?;
        let hash = blake3::hash(&bytes);
        Ok(Self(*hash.as_bytes()))
    }

    /// Reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short hex form (first 8 bytes)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for DocumentFingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_schema;

    #[test]
    fn fingerprint_is_stable() {
        let a = DocumentFingerprint::compute(default_schema()).unwrap();
        let b = DocumentFingerprint::compute(default_schema()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let mut doc = default_schema().clone();
        let before = DocumentFingerprint::compute(&doc).unwrap();

        doc.hero.title = "Changed".to_string();
        let after = DocumentFingerprint::compute(&doc).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn fingerprint_short_is_sixteen_hex_chars() {
        let fp = DocumentFingerprint::compute(default_schema()).unwrap();
        assert_eq!(fp.short().len(), 16);
        assert_eq!(fp.to_string().len(), 64);
    }
}
