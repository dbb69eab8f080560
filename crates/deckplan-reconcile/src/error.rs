//! Reconciler error types

/// Errors from a reconcile pass
///
/// Shape disagreements inside the persisted fragment are *not* errors;
/// they surface as [`MergeIssue`](crate::MergeIssue)s while the default
/// wins. An error here means the merged tree as a whole could not become a
/// document, and the caller recovers by opening on the Default Schema.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// The Default Schema failed to serialize (practically unreachable)
    #[error("default schema did not serialize: {0}")]
    Encode(#[source] serde_json::Error),

    /// The merged tree failed to decode into a typed document
    ///
    /// Reached by values the shape walk cannot vet, e.g. a string outside
    /// an enum's variant set or `null` where a value is required.
    #[error("merged configuration did not decode: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let inner = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ReconcileError::Decode(inner);
        assert!(err.to_string().contains("did not decode"));
    }
}
