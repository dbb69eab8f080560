//! HTTP configuration store
//!
//! Talks to the single page-config endpoint: `GET` fetches the persisted
//! fragment, `POST` overwrites it with the full document.

use async_trait::async_trait;
use deckplan_document::PageConfig;
use tracing::debug;

use crate::error::StoreError;
use crate::{ConfigStore, LoadResponse, SaveResponse};

/// Configuration store backed by the page-config HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpConfigStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConfigStore {
    /// Store against the given endpoint with a fresh client
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Store against the given endpoint with a shared client
    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint URL
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ConfigStore for HttpConfigStore {
    async fn load(&self) -> Result<LoadResponse, StoreError> {
        debug!(endpoint = %self.endpoint, "loading page configuration");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn save(&self, document: &PageConfig) -> Result<SaveResponse, StoreError> {
        debug!(endpoint = %self.endpoint, "saving page configuration");
        let response = self
            .client
            .post(&self.endpoint)
            .json(document)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keeps_endpoint() {
        let store = HttpConfigStore::new("http://localhost:3000/api/admin/mall/page-config");
        assert_eq!(store.endpoint(), "http://localhost:3000/api/admin/mall/page-config");
    }
}
