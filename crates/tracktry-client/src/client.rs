//! HTTP client for the Tracktry REST API.
//!
//! Wraps `reqwest` with the Tracktry API key header and typed decoding of
//! the realtime tracking envelope.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::TrackingError;
use crate::types::{RealtimeRequest, RealtimeResponse};

const DEFAULT_BASE_URL: &str = tracktry_core::config::DEFAULT_API_BASE_URL;
const REALTIME_PATH: &str = "v1/trackings/realtime";
const API_KEY_HEADER: &str = "Tracktry-Api-Key";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for the Tracktry REST API.
///
/// Use [`TracktryClient::new`] for production or
/// [`TracktryClient::with_base_url`] to point at a mock server in tests.
pub struct TracktryClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl TracktryClient {
    /// Creates a new client pointed at the production Tracktry API.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self, TrackingError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TrackingError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, TrackingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("tracktry-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replaces
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TrackingError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Queries the carrier in real time for one tracking number.
    ///
    /// The body is decoded whatever the HTTP status, since the API reports
    /// failures through `meta.code`; callers must inspect it.
    ///
    /// # Errors
    ///
    /// - [`TrackingError::Http`] on network failure or timeout.
    /// - [`TrackingError::Deserialize`] if the body is not a realtime envelope.
    pub async fn realtime(
        &self,
        request: &RealtimeRequest,
    ) -> Result<RealtimeResponse, TrackingError> {
        let url = self.realtime_url()?;
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice::<RealtimeResponse>(&body).map_err(|e| {
            tracing::debug!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "undecodable Tracktry realtime response"
            );
            TrackingError::Deserialize {
                context: format!("realtime(tracking_number={})", request.tracking_number),
                source: e,
            }
        })
    }

    fn realtime_url(&self) -> Result<Url, TrackingError> {
        self.base_url
            .join(REALTIME_PATH)
            .map_err(|e| TrackingError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
