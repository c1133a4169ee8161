//! Explorer HTTP Client
//!
//! Handles communication with the VCP explorer API: system status, event
//! listing, and retrieval of events and their inclusion proofs. Requests
//! carry a bearer token when configured, time out per request, and retry
//! transient failures a bounded number of times. Verification verdicts are
//! never retried here; the engine is deterministic and re-running it on
//! the same proof is pointless.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::client::types::{EventPage, EventRecord, SystemStatus};
use crate::config::AppConfig;
use crate::error::RetrievalError;
use crate::proof::MerkleProof;

/// Client for the explorer's authenticated request/response exchange.
pub struct ExplorerClient {
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
    http_client: Client,
}

impl ExplorerClient {
    /// Create a new client against the given API base URL.
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout_secs: u64,
        max_retries: u32,
    ) -> Result<Self, RetrievalError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| RetrievalError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            max_retries,
            http_client,
        })
    }

    /// Create a client from the environment-derived configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, RetrievalError> {
        Self::new(
            config.api_base.clone(),
            config.api_key.clone(),
            config.http_timeout_secs,
            config.max_retries,
        )
    }

    /// Whether a bearer token is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch system status. No authentication required.
    pub async fn system_status(&self) -> Result<SystemStatus, RetrievalError> {
        self.get_json("/system/status").await
    }

    /// List the most recent events.
    pub async fn list_events(&self, limit: u32) -> Result<EventPage, RetrievalError> {
        self.get_json(&format!("/events?limit={}", limit)).await
    }

    /// Fetch one event record by id.
    pub async fn fetch_event(&self, event_id: &str) -> Result<EventRecord, RetrievalError> {
        self.get_json(&format!("/events/{}", event_id)).await
    }

    /// Fetch the inclusion proof for an event.
    ///
    /// A 404 means the event is not yet anchored into a published root.
    pub async fn fetch_proof(&self, event_id: &str) -> Result<MerkleProof, RetrievalError> {
        info!("Fetching inclusion proof for event {}", event_id);
        self.get_json(&format!("/events/{}/proof", event_id)).await
    }

    /// GET a JSON resource, retrying transient failures with backoff.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RetrievalError> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt: u32 = 0;

        loop {
            match self.get_once(&url).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_retries && err.is_transient() => {
                    attempt += 1;
                    warn!(
                        "Transient failure fetching {} (attempt {}/{}): {}",
                        url, attempt, self.max_retries, err
                    );
                    tokio::time::sleep(Duration::from_millis(250 * u64::from(attempt))).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, RetrievalError> {
        debug!("GET {}", url);

        let mut request = self.http_client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RetrievalError::HttpError(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Err(RetrievalError::Unauthorized),
            StatusCode::NOT_FOUND => Err(RetrievalError::NotFound(url.to_string())),
            _ if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| RetrievalError::InvalidResponse(e.to_string())),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(RetrievalError::ApiError {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
