//! HTTP entry source.
//!
//! Issues a single `GET` against the configured endpoint and parses the whole
//! body as a JSON array of entries. There is no timeout and no retry: the
//! request runs until it completes or fails.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::entry::Entry;
use crate::source::{EntrySource, FetchError};

/// Entry source backed by a local HTTP endpoint.
pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EntrySource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>, FetchError> {
        info!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("List endpoint status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("List endpoint error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("List endpoint body: {} bytes", body.len());

        let entries: Vec<Entry> =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!("Fetched {} entries from {}", entries.len(), self.endpoint);
        Ok(entries)
    }
}
