//! The closed set of carriers this workspace can recognize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A shipping carrier identified from a tracking code's format.
///
/// Declaration order doubles as recognition priority: when a code could match
/// more than one carrier's grammar, the carrier listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    FedEx,
    Ups,
    Usps,
    OnTrac,
    LaserShip,
    Dhl,
    Shipt,
    Amazon,
}

/// Whether the remote realtime tracking call is wired up for each carrier.
///
/// Enabling a carrier is a change to this table only.
const REMOTE_TRACKING: [(Carrier, bool); 8] = [
    (Carrier::FedEx, true),
    (Carrier::Ups, true),
    (Carrier::Usps, true),
    (Carrier::OnTrac, true),
    (Carrier::LaserShip, true),
    (Carrier::Dhl, true),
    (Carrier::Shipt, false),
    (Carrier::Amazon, false),
];

impl Carrier {
    /// All carriers, in recognition priority order.
    pub const ALL: [Carrier; 8] = [
        Carrier::FedEx,
        Carrier::Ups,
        Carrier::Usps,
        Carrier::OnTrac,
        Carrier::LaserShip,
        Carrier::Dhl,
        Carrier::Shipt,
        Carrier::Amazon,
    ];

    /// Lowercase carrier token exchanged with the Tracktry API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Carrier::FedEx => "fedex",
            Carrier::Ups => "ups",
            Carrier::Usps => "usps",
            Carrier::OnTrac => "ontrac",
            Carrier::LaserShip => "lasership",
            Carrier::Dhl => "dhl",
            Carrier::Shipt => "shipt",
            Carrier::Amazon => "amazon",
        }
    }

    /// Returns `true` if delivery status for this carrier can be queried
    /// remotely. Recognized-but-disabled carriers still validate.
    #[must_use]
    pub fn remote_tracking_enabled(self) -> bool {
        REMOTE_TRACKING
            .iter()
            .find(|(carrier, _)| *carrier == self)
            .is_some_and(|(_, enabled)| *enabled)
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Carrier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Carrier::ALL
            .into_iter()
            .find(|carrier| carrier.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| CoreError::UnknownCarrier(s.to_string()))
    }
}
