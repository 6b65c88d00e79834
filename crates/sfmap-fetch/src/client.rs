//! HTTP client for the upstream map-data document.
//!
//! The data host only serves the file to requests that look like they come
//! from the calculator site, so every request carries the configured
//! `Referer` and browser `User-Agent`.

use std::time::Duration;

use reqwest::header::{ACCEPT, REFERER};
use reqwest::{Client, Url};
use sfmap_core::AppConfig;

use crate::error::FetchError;
use crate::retry::retry_with_backoff;

/// `Accept` header sent with every request, matching what the site's own
/// XHR sends.
pub const ACCEPT_HEADER: &str = "application/json, text/javascript, */*; q=0.01";

/// Connection and retry settings for [`MapDataClient`].
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub source_url: String,
    pub referer: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl From<&AppConfig> for FetchSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            source_url: config.source_url.clone(),
            referer: config.source_referer.clone(),
            user_agent: config.fetch_user_agent.clone(),
            timeout_secs: config.fetch_timeout_secs,
            max_retries: config.fetch_max_retries,
            backoff_base_ms: config.fetch_retry_backoff_base_ms,
        }
    }
}

/// Downloads the map-data JSON.
///
/// Use [`MapDataClient::new`] in the binaries or
/// [`MapDataClient::with_settings`] to point at a mock server in tests.
pub struct MapDataClient {
    client: Client,
    source_url: Url,
    referer: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl MapDataClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`MapDataClient::with_settings`].
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_settings(FetchSettings::from(config))
    }

    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidUrl`] if
    /// `source_url` does not parse.
    pub fn with_settings(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent)
            .build()?;

        let source_url = Url::parse(&settings.source_url).map_err(|e| FetchError::InvalidUrl {
            url: settings.source_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            source_url,
            referer: settings.referer,
            max_retries: settings.max_retries,
            backoff_base_ms: settings.backoff_base_ms,
        })
    }

    #[must_use]
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    /// Fetches and parses the map-data document.
    ///
    /// Transient failures are retried with back-off up to the configured
    /// number of retries.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure.
    /// - [`FetchError::UnexpectedStatus`] on a non-2xx response.
    /// - [`FetchError::Deserialize`] if the body is not valid JSON.
    /// - [`FetchError::EmptyDocument`] if the body is JSON `null`.
    pub async fn fetch_document(&self) -> Result<serde_json::Value, FetchError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_document()
        })
        .await
    }

    async fn request_document(&self) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(self.source_url.clone())
            .header(ACCEPT, ACCEPT_HEADER)
            .header(REFERER, &self.referer)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.source_url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), url = %self.source_url, "downloaded map data");

        let document: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
                context: self.source_url.to_string(),
                source: e,
            })?;

        if document.is_null() {
            return Err(FetchError::EmptyDocument);
        }
        Ok(document)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
