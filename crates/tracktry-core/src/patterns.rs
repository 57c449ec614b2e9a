//! Tracking-code grammars, one ordered list per carrier.
//!
//! Every grammar is anchored to the whole input, is case-insensitive and
//! tolerates whitespace between any two symbols. Named groups document the
//! fields of each format; they are never extracted or validated separately.
//!
//! Sources: <https://github.com/jkeen/tracking_number_data/tree/main/couriers>
//! for FedEx, UPS, USPS and DHL; carrier tracking pages for the rest.

use std::sync::LazyLock;

use regex::Regex;

use crate::carrier::Carrier;

const FEDEX: &[&str] = &[
    // Express (12)
    r"(?i)^\s*(?P<SerialNumber>(?:[0-9]\s*){11})(?P<CheckDigit>[0-9]\s*)$",
    // Express (34)
    r"(?i)^\s*1\s*0\s*0\s*[0-9]\s*[0-9]\s*(?:[0-9]\s*){10}(?P<DestinationZip>(?:[0-9]\s*){5})(?P<SerialNumber>(?:[0-9]\s*){13})(?P<CheckDigit>[0-9]\s*)$",
    // Ground (15)
    r"(?i)^\s*(?P<SerialNumber>(?:[0-9]\s*){14})(?P<CheckDigit>[0-9]\s*)$",
    // Ground SSCC-18
    r"(?i)^\s*(?P<ShippingContainerType>(?:[0-9]\s*){2})(?P<SerialNumber>(?:[0-9]\s*){15})(?P<CheckDigit>[0-9]\s*)$",
    // Ground 96 (22)
    r"(?i)^\s*(?P<ApplicationIdentifier>9\s*6\s*)(?P<SCNC>(?:[0-9]\s*){2})(?P<ServiceType>(?:[0-9]\s*){3})(?P<SerialNumber>(?P<ShipperId>(?:[0-9]\s*){7})(?P<PackageId>(?:[0-9]\s*){7}))(?P<CheckDigit>[0-9]\s*)$",
    // Ground GSN (34)
    r"(?i)^\s*(?P<ApplicationIdentifier>9\s*6\s*)(?P<SCNC>(?:[0-9]\s*){2})(?:[0-9]\s*){5}(?P<GSN>(?:[0-9]\s*){10})[0-9]\s*(?P<SerialNumber>(?:[0-9]\s*){13})(?P<CheckDigit>[0-9]\s*)$",
];

const UPS: &[&str] = &[
    r"(?i)^\s*1\s*Z\s*(?P<SerialNumber>(?P<ShipperId>(?:[A-Z0-9]\s*){6})(?P<ServiceType>(?:[A-Z0-9]\s*){2})(?P<PackageId>(?:[A-Z0-9]\s*){7}))(?P<CheckDigit>[A-Z0-9]\s*)$",
];

const USPS: &[&str] = &[
    // 20 digit
    r"(?i)^\s*(?P<SerialNumber>(?P<ServiceType>(?:[0-9]\s*){2})(?P<ShipperId>(?:[0-9]\s*){9})(?P<PackageId>(?:[0-9]\s*){8}))(?P<CheckDigit>[0-9]\s*)$",
    // 34 digit IMpd with routing prefix
    r"(?i)^\s*(?P<RoutingApplicationId>4\s*2\s*0\s*)(?P<DestinationZip>(?:[0-9]\s*){5})(?P<RoutingNumber>(?:[0-9]\s*){4})(?P<SerialNumber>(?P<ApplicationIdentifier>9\s*[2345]\s*)?(?P<ShipperId>(?:[0-9]\s*){8})(?P<PackageId>(?:[0-9]\s*){11}))(?P<CheckDigit>[0-9]\s*)$",
    // IMpd, routing prefix optional
    r"(?i)^\s*(?:(?P<RoutingApplicationId>4\s*2\s*0\s*)(?P<DestinationZip>(?:[0-9]\s*){5}))?(?P<SerialNumber>(?P<ApplicationIdentifier>9\s*[12345]\s*)?(?P<SCNC>(?:[0-9]\s*){2})(?P<ServiceType>(?:[0-9]\s*){2})(?P<ShipperId>(?:[0-9]\s*){8})(?P<PackageId>(?:[0-9]\s*){11}|(?:[0-9]\s*){7}))(?P<CheckDigit>[0-9]\s*)$",
];

const ONTRAC: &[&str] = &[r"(?i)^\s*(?P<Prefix>[CD]\s*)(?P<SerialNumber>(?:[0-9]\s*){14})$"];

const LASERSHIP: &[&str] =
    &[r"(?i)^\s*(?:L\s*[WX]\s*(?:[0-9]\s*){8,}|1\s*L\s*S\s*(?:[0-9]\s*){12,})$"];

const DHL: &[&str] = &[
    // Express
    r"(?i)^\s*(?P<SerialNumber>(?:[0-9]\s*){9})(?P<CheckDigit>[0-9]\s*)$",
    // Express Air
    r"(?i)^\s*(?P<SerialNumber>(?:[0-9]\s*){10})(?P<CheckDigit>[0-9]\s*)$",
];

const SHIPT: &[&str] = &[r"(?i)^\s*S\s*H\s*I\s*P\s*T\s*(?:[0-9]\s*){11}$"];

const AMAZON: &[&str] = &[r"(?i)^\s*T\s*B\s*A\s*(?:[0-9]\s*){10,12}$"];

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| Regex::new(source).expect("valid tracking code regex"))
        .collect()
}

static FEDEX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(FEDEX));
static UPS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(UPS));
static USPS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(USPS));
static ONTRAC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(ONTRAC));
static LASERSHIP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(LASERSHIP));
static DHL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(DHL));
static SHIPT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SHIPT));
static AMAZON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(AMAZON));

/// Returns the ordered grammars accepted for `carrier`.
///
/// Patterns are compiled on first use and shared read-only afterwards.
#[must_use]
pub fn patterns(carrier: Carrier) -> &'static [Regex] {
    match carrier {
        Carrier::FedEx => FEDEX_PATTERNS.as_slice(),
        Carrier::Ups => UPS_PATTERNS.as_slice(),
        Carrier::Usps => USPS_PATTERNS.as_slice(),
        Carrier::OnTrac => ONTRAC_PATTERNS.as_slice(),
        Carrier::LaserShip => LASERSHIP_PATTERNS.as_slice(),
        Carrier::Dhl => DHL_PATTERNS.as_slice(),
        Carrier::Shipt => SHIPT_PATTERNS.as_slice(),
        Carrier::Amazon => AMAZON_PATTERNS.as_slice(),
    }
}

/// Returns `true` if any of `carrier`'s grammars accepts `code`.
#[must_use]
pub fn matches(carrier: Carrier, code: &str) -> bool {
    patterns(carrier).iter().any(|pattern| pattern.is_match(code))
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
