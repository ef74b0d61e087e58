//! Stop name and route pair types.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Error returned when a stop name cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop name: {reason}")]
pub struct InvalidStopName {
    reason: &'static str,
}

/// A human-readable bus stop name.
///
/// Names are free text and uppercase by convention (`"KOZHIKODE"`,
/// `"THRISSUR KSRTC"`), but the casing is not enforced: two names are
/// the same stop only if they are byte-for-byte equal. The only
/// invariant is that a name is never empty or whitespace-only.
///
/// Cloning is cheap; the text is shared.
///
/// # Examples
///
/// ```
/// use evidebus::domain::StopName;
///
/// let stop = StopName::parse("KOZHIKODE").unwrap();
/// assert_eq!(stop.as_str(), "KOZHIKODE");
///
/// assert!(StopName::parse("").is_err());
/// assert!(StopName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopName(Arc<str>);

impl StopName {
    /// Parse a stop name, rejecting empty and whitespace-only input.
    ///
    /// The input is kept verbatim; surrounding whitespace is not trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidStopName> {
        if s.trim().is_empty() {
            return Err(InvalidStopName {
                reason: "must not be empty",
            });
        }
        Ok(Self(Arc::from(s)))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StopName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StopName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopName({})", &*self.0)
    }
}

impl fmt::Display for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StopName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// An ordered origin/destination pair.
///
/// Origin and destination may be the same stop; nothing here rejects
/// a round trip to the same place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoutePair {
    pub origin: StopName,
    pub destination: StopName,
}

impl RoutePair {
    /// Create a pair from two stop names.
    pub fn new(origin: StopName, destination: StopName) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Build a pair from raw strings, failing if either side is empty.
    pub fn parse(origin: &str, destination: &str) -> Result<Self, InvalidStopName> {
        Ok(Self::new(
            StopName::parse(origin)?,
            StopName::parse(destination)?,
        ))
    }

    /// Whether origin and destination are the same stop.
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl fmt::Display for RoutePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
