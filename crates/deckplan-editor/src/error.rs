//! Editor error types

use deckplan_document::FieldPath;
use deckplan_store::StoreError;

/// Errors from a path-addressed update
///
/// A failed update applies nothing: the document is exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// The update path carried no segments
    #[error("update path is empty")]
    EmptyPath,

    /// The path's head segment is not a document field
    #[error("unknown document field: {0}")]
    UnknownField(String),

    /// The targeted field failed to serialize (practically unreachable)
    #[error("field did not serialize: {0}")]
    Encode(#[source] serde_json::Error),

    /// The updated subtree no longer fits the field's shape
    #[error("update at '{path}' does not fit the document shape: {source}")]
    Shape {
        /// The full update path
        path: FieldPath,
        /// The decode failure
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from an explicit save
///
/// The in-memory document is never rolled back on failure; the edit is
/// kept locally and the user retries without re-entering data.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The store answered but refused the overwrite
    #[error("save rejected by store: {message}")]
    Rejected {
        /// Server-provided reason, or the generic fallback
        message: String,
    },

    /// The round trip itself failed
    #[error(transparent)]
    Transport(#[from] StoreError),
}
