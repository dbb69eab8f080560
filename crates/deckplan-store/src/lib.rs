//! Deckplan Persistence Contract
//!
//! The load/save round trip between the in-memory document model and the
//! external configuration store. Both calls are fire-and-forget relative to
//! the model: they never block local edits, and there is no queuing,
//! coalescing or cancellation. A save in flight is simply followed by
//! another full overwrite.
//!
//! # Core Concepts
//!
//! - [`ConfigStore`]: the async seam the editor talks through
//! - [`HttpConfigStore`]: reqwest client against the page-config endpoint
//! - [`InMemoryStore`]: process-local mirror for tests and demos
//!
//! # Example
//!
//! ```rust,ignore
//! use deckplan_store::{ConfigStore, HttpConfigStore};
//!
//! let store = HttpConfigStore::new("https://admin.example/api/page-config");
//! let response = store.load().await?;
//! ```

#![warn(unreachable_pub)]

use async_trait::async_trait;
use deckplan_document::PageConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

mod error;
mod http;
mod memory;

pub use error::StoreError;
pub use http::HttpConfigStore;
pub use memory::InMemoryStore;

/// Wire shape of a load call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResponse {
    /// Whether the store answered successfully
    pub ok: bool,

    /// The persisted fragment; absent when nothing was ever saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<JsonValue>,
}

/// Wire shape of a save call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Whether the store accepted the overwrite
    pub ok: bool,

    /// Server-provided rejection message when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The persistence round-trip seam
///
/// Save is **last-write-wins**: the entire document overwrites whatever was
/// last persisted, with no version token or conflict detection. Concurrent
/// editors silently clobber each other; that contract is inherited from the
/// store and deliberately not papered over here.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch the persisted fragment
    ///
    /// # Errors
    /// Returns [`StoreError`] on transport failure; an `ok: false` answer
    /// is a successful call
    async fn load(&self) -> Result<LoadResponse, StoreError>;

    /// Overwrite the persisted document wholesale
    ///
    /// # Errors
    /// Returns [`StoreError`] on transport failure; a rejection travels in
    /// the [`SaveResponse`]
    async fn save(&self, document: &PageConfig) -> Result<SaveResponse, StoreError>;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
