//! Testing utilities for the Deckplan workspace
//!
//! Shared fixtures and store doubles.

#![allow(missing_docs)]

use async_trait::async_trait;
use deckplan_document::sections::FooterMenuItem;
use deckplan_document::{ItemId, PageConfig};
use deckplan_store::{ConfigStore, LoadResponse, SaveResponse, StoreError};
use serde_json::{json, Value as JsonValue};

/// A representative persisted fragment: partial, with overrides at several
/// depths and one replaced list.
pub fn sample_fragment() -> JsonValue {
    json!({
        "hero": {
            "title": "Harbor Nights",
            "buttons": [
                { "text": "Book now", "link": "/booking" }
            ]
        },
        "footer": {
            "companyName": "Harbor Lines",
            "contactInfo": { "phone": "02-555-0100" }
        },
        "sectionOrder": ["top-menu", "hero", "footer"]
    })
}

/// Footer link with explicit id and label, order left for the engine
pub fn footer_item(id: &str, text: &str) -> FooterMenuItem {
    FooterMenuItem {
        id: ItemId::from_raw(id),
        enabled: true,
        text: text.to_string(),
        url_slug: "/".to_string(),
        order: 0,
        is_highlight: false,
    }
}

fn transport_error() -> StoreError {
    // Any serde failure stands in for an unreachable endpoint.
    StoreError::Encode(serde_json::from_str::<u32>("{").unwrap_err())
}

/// Store whose round trips always fail at the transport level
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl ConfigStore for FailingStore {
    async fn load(&self) -> Result<LoadResponse, StoreError> {
        Err(transport_error())
    }

    async fn save(&self, _document: &PageConfig) -> Result<SaveResponse, StoreError> {
        Err(transport_error())
    }
}

/// Store that answers every call with `ok: false`
#[derive(Debug, Default)]
pub struct RejectingStore {
    pub message: Option<String>,
}

impl RejectingStore {
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl ConfigStore for RejectingStore {
    async fn load(&self) -> Result<LoadResponse, StoreError> {
        Ok(LoadResponse {
            ok: false,
            config: None,
        })
    }

    async fn save(&self, _document: &PageConfig) -> Result<SaveResponse, StoreError> {
        Ok(SaveResponse {
            ok: false,
            error: self.message.clone(),
        })
    }
}
