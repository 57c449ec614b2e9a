use thiserror::Error;
use tracktry_core::Carrier;

/// Errors returned while resolving a tracking code's delivery status.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// No carrier grammar accepts the code; no remote call was made.
    #[error("tracking code is not valid: {code}")]
    InvalidTrackingCode { code: String },

    #[error("carrier not recognized for tracking code: {code}")]
    CarrierUnrecognized { code: String },

    /// The carrier is recognized but its remote tracking is switched off.
    #[error("remote tracking is disabled for carrier {carrier}")]
    CarrierDisabled { carrier: Carrier },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The Tracktry API answered with a non-200 `meta.code`.
    #[error("Tracktry API error ({code}): {message}")]
    ApiError { code: i64, message: String },

    /// The API succeeded but returned no item for the queried code.
    #[error("Tracktry API returned no record for tracking code: {tracking_number}")]
    ApiUnknownError { tracking_number: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Coarse classification of a [`TrackingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTrackingCode,
    CarrierUnrecognized,
    CarrierDisabled,
    TransportError,
    ApiError,
    ApiUnknownError,
    Configuration,
}

impl TrackingError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackingError::InvalidTrackingCode { .. } => ErrorKind::InvalidTrackingCode,
            TrackingError::CarrierUnrecognized { .. } => ErrorKind::CarrierUnrecognized,
            TrackingError::CarrierDisabled { .. } => ErrorKind::CarrierDisabled,
            TrackingError::Http(_) | TrackingError::Deserialize { .. } => {
                ErrorKind::TransportError
            }
            TrackingError::ApiError { .. } => ErrorKind::ApiError,
            TrackingError::ApiUnknownError { .. } => ErrorKind::ApiUnknownError,
            TrackingError::InvalidBaseUrl { .. } => ErrorKind::Configuration,
        }
    }

    /// Returns `true` for network and decoding failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::TransportError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_error_is_transport() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = TrackingError::Deserialize {
            context: "test".to_owned(),
            source,
        };
        assert!(err.is_transport());
        assert_eq!(err.kind(), ErrorKind::TransportError);
    }

    #[test]
    fn api_error_carries_remote_message() {
        let err = TrackingError::ApiError {
            code: 4031,
            message: "Invalid API key".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::ApiError);
        assert!(!err.is_transport());
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn carrier_disabled_names_the_carrier() {
        let err = TrackingError::CarrierDisabled {
            carrier: Carrier::Amazon,
        };
        assert_eq!(err.kind(), ErrorKind::CarrierDisabled);
        assert_eq!(err.to_string(), "remote tracking is disabled for carrier amazon");
    }
}
