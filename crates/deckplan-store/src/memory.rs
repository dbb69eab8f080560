//! In-memory configuration store
//!
//! Mirrors the endpoint's behavior for tests and demos, including the
//! "no stored configuration yet" case (`ok: true` without a fragment).

use async_trait::async_trait;
use deckplan_document::PageConfig;
use parking_lot::Mutex;
use serde_json::Value as JsonValue;

use crate::error::StoreError;
use crate::{ConfigStore, LoadResponse, SaveResponse};

/// Process-local configuration store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slot: Mutex<Option<JsonValue>>,
}

impl InMemoryStore {
    /// Empty store: loads answer `ok` with no fragment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a persisted fragment
    #[must_use]
    pub fn with_config(config: JsonValue) -> Self {
        Self {
            slot: Mutex::new(Some(config)),
        }
    }

    /// Snapshot of what is currently persisted
    #[must_use]
    pub fn stored(&self) -> Option<JsonValue> {
        self.slot.lock().clone()
    }
}

#[async_trait]
impl ConfigStore for InMemoryStore {
    async fn load(&self) -> Result<LoadResponse, StoreError> {
        Ok(LoadResponse {
            ok: true,
            config: self.slot.lock().clone(),
        })
    }

    async fn save(&self, document: &PageConfig) -> Result<SaveResponse, StoreError> {
        let value = serde_json::to_value(document).map_err(StoreError::Encode)?;
        *self.slot.lock() = Some(value);
        Ok(SaveResponse { ok: true, error: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckplan_document::default_schema;
    use serde_json::json;

    #[tokio::test]
    async fn empty_store_loads_ok_without_fragment() {
        let store = InMemoryStore::new();
        let response = store.load().await.unwrap();
        assert!(response.ok);
        assert!(response.config.is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = InMemoryStore::new();
        let document = default_schema().clone();

        let saved = store.save(&document).await.unwrap();
        assert!(saved.ok);

        let loaded = store.load().await.unwrap();
        let fragment = loaded.config.unwrap();
        assert_eq!(fragment, serde_json::to_value(&document).unwrap());
    }

    #[tokio::test]
    async fn seeded_store_serves_fragment() {
        let store = InMemoryStore::with_config(json!({ "hero": { "title": "X" } }));
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.config.unwrap()["hero"]["title"], json!("X"));
    }

    #[tokio::test]
    async fn save_overwrites_previous_fragment() {
        let store = InMemoryStore::with_config(json!({ "hero": { "title": "old" } }));
        store.save(default_schema()).await.unwrap();

        let stored = store.stored().unwrap();
        assert_eq!(stored["hero"]["title"], json!(default_schema().hero.title));
    }
}
