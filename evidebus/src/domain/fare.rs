//! Approximate fare estimation.
//!
//! Fares are a per-kilometre rate with a minimum charge, split into two
//! tiers. KSRTC, Swift and SuperFast services price at the premium tier;
//! private buses and any unrecognised class price at the ordinary tier.
//! Distances are supplied by the caller.

use std::fmt;

use serde::{Serialize, Serializer};

/// The operator/service class of a bus listing.
///
/// # Examples
///
/// ```
/// use evidebus::domain::{FareTier, ServiceClass};
///
/// assert_eq!(ServiceClass::from_tag("KSRTC"), ServiceClass::Ksrtc);
/// assert_eq!(ServiceClass::from_tag("Swift").tier(), FareTier::Premium);
/// assert_eq!(ServiceClass::from_tag("Limited Stop").tier(), FareTier::Ordinary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceClass {
    Private,
    Ksrtc,
    Swift,
    SuperFast,
    /// A tag that is not one of the known classes, kept verbatim.
    Other(String),
}

impl ServiceClass {
    /// Map a listing tag to a class. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Private" => Self::Private,
            "KSRTC" => Self::Ksrtc,
            "Swift" => Self::Swift,
            "SuperFast" => Self::SuperFast,
            other => Self::Other(other.to_string()),
        }
    }

    /// The tag as written in listings.
    pub fn tag(&self) -> &str {
        match self {
            Self::Private => "Private",
            Self::Ksrtc => "KSRTC",
            Self::Swift => "Swift",
            Self::SuperFast => "SuperFast",
            Self::Other(tag) => tag,
        }
    }

    /// The fare tier this class is charged at.
    pub fn tier(&self) -> FareTier {
        match self {
            Self::Ksrtc | Self::Swift | Self::SuperFast => FareTier::Premium,
            Self::Private | Self::Other(_) => FareTier::Ordinary,
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ServiceClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FareTier {
    Ordinary,
    Premium,
}

/// Both tiers quoted for one distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareQuote {
    pub ordinary: u32,
    pub premium: u32,
}

/// Fare rates and minimum charges.
///
/// Rates are percentages of one currency unit per kilometre, so the
/// default ordinary rate of 110 means 1.10 per km. Keeping them integral
/// makes whole-kilometre products exact before rounding up.
#[derive(Debug, Clone)]
pub struct FareTable {
    /// Ordinary tier rate, hundredths of a unit per km.
    pub ordinary_rate_percent: u32,

    /// Ordinary tier minimum charge.
    pub ordinary_minimum: u32,

    /// Premium tier rate, hundredths of a unit per km.
    pub premium_rate_percent: u32,

    /// Premium tier minimum charge.
    pub premium_minimum: u32,
}

impl FareTable {
    /// Estimate the fare for a distance and service class.
    ///
    /// Returns `None` when the distance is not a positive finite number;
    /// callers should treat that as "no estimate", not as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use evidebus::domain::{FareTable, ServiceClass};
    ///
    /// let table = FareTable::default();
    /// assert_eq!(table.estimate(1.0, &ServiceClass::Private), Some(10));
    /// assert_eq!(table.estimate(1.0, &ServiceClass::Ksrtc), Some(14));
    /// assert_eq!(table.estimate(100.0, &ServiceClass::Ksrtc), Some(145));
    /// assert_eq!(table.estimate(0.0, &ServiceClass::Private), None);
    /// ```
    pub fn estimate(&self, distance_km: f64, class: &ServiceClass) -> Option<u32> {
        self.quote(distance_km).map(|quote| match class.tier() {
            FareTier::Ordinary => quote.ordinary,
            FareTier::Premium => quote.premium,
        })
    }

    /// Quote both tiers for a distance.
    pub fn quote(&self, distance_km: f64) -> Option<FareQuote> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return None;
        }
        Some(FareQuote {
            ordinary: charge(distance_km, self.ordinary_rate_percent, self.ordinary_minimum),
            premium: charge(distance_km, self.premium_rate_percent, self.premium_minimum),
        })
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            ordinary_rate_percent: 110,
            ordinary_minimum: 10,
            premium_rate_percent: 145,
            premium_minimum: 14,
        }
    }
}

/// Estimate a fare with the default table.
pub fn estimate(distance_km: f64, class: &ServiceClass) -> Option<u32> {
    FareTable::default().estimate(distance_km, class)
}

/// Round `distance * rate` up to a whole unit, never below `minimum`.
fn charge(distance_km: f64, rate_percent: u32, minimum: u32) -> u32 {
    let raw = (distance_km * f64::from(rate_percent) / 100.0).ceil();
    // `as` saturates for values beyond u32.
    (raw as u32).max(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_fares() {
        assert_eq!(estimate(1.0, &ServiceClass::Private), Some(10));
        assert_eq!(estimate(1.0, &ServiceClass::Ksrtc), Some(14));
        assert_eq!(estimate(0.5, &ServiceClass::Swift), Some(14));
    }

    #[test]
    fn per_km_fares() {
        assert_eq!(estimate(10.0, &ServiceClass::Private), Some(11));
        assert_eq!(estimate(20.0, &ServiceClass::Private), Some(22));
        assert_eq!(estimate(10.0, &ServiceClass::Ksrtc), Some(15));
        assert_eq!(estimate(100.0, &ServiceClass::SuperFast), Some(145));
    }

    #[test]
    fn fractional_distance_rounds_up() {
        // 12.5 * 1.10 = 13.75
        assert_eq!(estimate(12.5, &ServiceClass::Private), Some(14));
        // 12.5 * 1.45 = 18.125
        assert_eq!(estimate(12.5, &ServiceClass::Swift), Some(19));
    }

    #[test]
    fn invalid_distance_has_no_estimate() {
        assert_eq!(estimate(0.0, &ServiceClass::Private), None);
        assert_eq!(estimate(-5.0, &ServiceClass::Ksrtc), None);
        assert_eq!(estimate(f64::NAN, &ServiceClass::Private), None);
        assert_eq!(estimate(f64::INFINITY, &ServiceClass::Private), None);
    }

    #[test]
    fn unknown_class_is_ordinary() {
        let class = ServiceClass::from_tag("Fast Passenger");
        assert_eq!(class, ServiceClass::Other("Fast Passenger".into()));
        assert_eq!(estimate(50.0, &class), estimate(50.0, &ServiceClass::Private));
    }

    #[test]
    fn tag_matching_is_case_sensitive() {
        assert_eq!(
            ServiceClass::from_tag("ksrtc"),
            ServiceClass::Other("ksrtc".into())
        );
        assert_eq!(ServiceClass::from_tag("ksrtc").tier(), FareTier::Ordinary);
    }

    #[test]
    fn tag_roundtrip() {
        for tag in ["Private", "KSRTC", "Swift", "SuperFast", "Town to Town"] {
            assert_eq!(ServiceClass::from_tag(tag).tag(), tag);
        }
    }

    #[test]
    fn quote_has_both_tiers() {
        let quote = FareTable::default().quote(40.0).unwrap();
        assert_eq!(quote, FareQuote { ordinary: 44, premium: 58 });
    }

    #[test]
    fn custom_table() {
        let table = FareTable {
            ordinary_rate_percent: 100,
            ordinary_minimum: 8,
            premium_rate_percent: 200,
            premium_minimum: 20,
        };
        assert_eq!(table.estimate(3.0, &ServiceClass::Private), Some(8));
        assert_eq!(table.estimate(30.0, &ServiceClass::Ksrtc), Some(60));
    }

    #[test]
    fn serializes_tags() {
        let json = serde_json::to_string(&ServiceClass::SuperFast).unwrap();
        assert_eq!(json, "\"SuperFast\"");
        let json = serde_json::to_string(&FareTier::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
    }
}
