//! Store error types

/// Errors from a persistence round trip
///
/// These are transport-level failures only. A server that answers
/// `ok: false` is a *successful* round trip carrying a rejection; that
/// surfaces through the response types, not here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Request failed or the response body did not parse
    #[error("configuration endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The document failed to serialize for the wire
    #[error("document did not serialize: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_error_display() {
        let inner = serde_json::from_str::<u32>("{").unwrap_err();
        let err = StoreError::Encode(inner);
        assert!(err.to_string().contains("did not serialize"));
    }
}
