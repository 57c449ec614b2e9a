//! Tracktry realtime API request and response types.
//!
//! Every response is wrapped in a `{"meta": {...}, "data": {...}}` envelope.
//! `meta.code == 200` signals success; on failure `data` is often an empty
//! array rather than an object, so [`RealtimeResponse`] decodes `meta` first
//! and `data` only once the call is known to have succeeded.

use serde::{Deserialize, Serialize};
use tracktry_core::Carrier;

/// `meta.code` value the API uses for success.
pub const META_SUCCESS: i64 = 200;

/// Body of `POST /v1/trackings/realtime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealtimeRequest {
    pub tracking_number: String,
    pub carrier_code: Carrier,
    pub lang: String,
}

impl RealtimeRequest {
    #[must_use]
    pub fn new(tracking_number: &str, carrier: Carrier) -> Self {
        Self {
            tracking_number: tracking_number.to_owned(),
            carrier_code: carrier,
            lang: "en".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// `0` when the envelope omits it, which never counts as success.
    #[serde(default)]
    pub code: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope with `data` left undecoded until `meta` has been checked.
#[derive(Debug, Deserialize)]
pub struct RealtimeResponse {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RealtimeData {
    #[serde(default)]
    pub items: Vec<TrackingItem>,
}

/// One tracked shipment in a realtime response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackingItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub carrier_code: Option<String>,
    /// Delivery state such as `"delivered"`, `"transit"` or `"pending"`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub original_country: Option<String>,
    #[serde(default)]
    pub destination_country: Option<String>,
    #[serde(rename = "lastEvent", default)]
    pub last_event: Option<String>,
    #[serde(rename = "lastUpdateTime", default)]
    pub last_update_time: Option<String>,
}

impl TrackingItem {
    /// Returns `true` if `status` is `"delivered"`, ignoring case. Any other
    /// value, including a missing one, counts as not delivered.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("delivered"))
    }
}
