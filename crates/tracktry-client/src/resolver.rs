//! Delivery-status resolution.
//!
//! [`DeliveryResolver::is_delivered`] takes a rate-limit permit, recognizes
//! the tracking code's carrier, asks the Tracktry realtime endpoint about it
//! and reads the matching item's status. Each call is independent; the only
//! state shared between calls is the limiter.

use std::sync::Arc;

use tracktry_core::{recognize, TrackerConfig};

use crate::client::TracktryClient;
use crate::error::TrackingError;
use crate::limiter::ApiLimiter;
use crate::types::{RealtimeData, RealtimeRequest, RealtimeResponse, META_SUCCESS};

/// Resolved delivery state of one shipment. Failures are reported as
/// [`TrackingError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    NotDelivered,
}

impl DeliveryStatus {
    #[must_use]
    pub fn is_delivered(self) -> bool {
        self == DeliveryStatus::Delivered
    }
}

impl From<bool> for DeliveryStatus {
    fn from(delivered: bool) -> Self {
        if delivered {
            DeliveryStatus::Delivered
        } else {
            DeliveryStatus::NotDelivered
        }
    }
}

/// Resolves whether shipments have been delivered.
///
/// Safe to share between tasks; all callers of one resolver draw from the
/// same permit budget.
pub struct DeliveryResolver {
    client: TracktryClient,
    limiter: Arc<ApiLimiter>,
}

impl DeliveryResolver {
    #[must_use]
    pub fn new(client: TracktryClient, limiter: Arc<ApiLimiter>) -> Self {
        Self { client, limiter }
    }

    /// Builds a resolver from environment-derived configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::Http`] or [`TrackingError::InvalidBaseUrl`]
    /// if the HTTP client cannot be constructed.
    pub fn from_config(config: &TrackerConfig) -> Result<Self, TrackingError> {
        let client = TracktryClient::with_base_url(&config.api_key, &config.api_base_url)?;
        let limiter = Arc::new(ApiLimiter::new(config.api_rate_limit));
        Ok(Self::new(client, limiter))
    }

    /// Checks whether the shipment behind `code` has been delivered.
    ///
    /// Waits for a rate-limit permit first, even for codes that turn out to
    /// be invalid. Only enabled carriers reach the network.
    ///
    /// # Errors
    ///
    /// - [`TrackingError::InvalidTrackingCode`] if no carrier grammar accepts `code`.
    /// - [`TrackingError::CarrierDisabled`] for carriers without remote tracking.
    /// - [`TrackingError::Http`] / [`TrackingError::Deserialize`] on transport failure.
    /// - [`TrackingError::ApiError`] if `meta.code` is not 200.
    /// - [`TrackingError::ApiUnknownError`] if no returned item matches `code`.
    #[tracing::instrument(level = "debug", skip(self), fields(carrier = tracing::field::Empty))]
    pub async fn is_delivered(&self, code: &str) -> Result<DeliveryStatus, TrackingError> {
        self.limiter.acquire().await;

        if !tracktry_core::is_valid(code) {
            return Err(TrackingError::InvalidTrackingCode {
                code: code.to_owned(),
            });
        }

        let carrier = recognize(code).ok_or_else(|| TrackingError::CarrierUnrecognized {
            code: code.to_owned(),
        })?;
        tracing::Span::current().record("carrier", carrier.as_str());

        if !carrier.remote_tracking_enabled() {
            return Err(TrackingError::CarrierDisabled { carrier });
        }

        let request = RealtimeRequest::new(code, carrier);
        let response = self.client.realtime(&request).await?;
        let status = Self::interpret(code, response)?;

        tracing::debug!(delivered = status.is_delivered(), "resolved delivery status");
        Ok(status)
    }

    /// Maps a decoded realtime envelope to a delivery status for `code`.
    fn interpret(code: &str, response: RealtimeResponse) -> Result<DeliveryStatus, TrackingError> {
        if response.meta.code != META_SUCCESS {
            return Err(TrackingError::ApiError {
                code: response.meta.code,
                message: response
                    .meta
                    .message
                    .unwrap_or_else(|| "unknown error".to_owned()),
            });
        }

        let data: RealtimeData = if response.data.is_null() {
            RealtimeData::default()
        } else {
            serde_json::from_value(response.data).map_err(|e| TrackingError::Deserialize {
                context: format!("realtime data(tracking_number={code})"),
                source: e,
            })?
        };

        data.items
            .iter()
            .find(|item| {
                item.tracking_number
                    .as_deref()
                    .is_some_and(|number| number.eq_ignore_ascii_case(code))
            })
            .map(|item| DeliveryStatus::from(item.is_delivered()))
            .ok_or_else(|| TrackingError::ApiUnknownError {
                tracking_number: code.to_owned(),
            })
    }
}
