//! Delivery-status resolution against the Tracktry realtime API.

pub mod client;
pub mod error;
pub mod limiter;
pub mod resolver;
pub mod types;

pub use client::TracktryClient;
pub use error::{ErrorKind, TrackingError};
pub use limiter::ApiLimiter;
pub use resolver::{DeliveryResolver, DeliveryStatus};
pub use tracktry_core::{Carrier, TrackerConfig, TrackingCode};
