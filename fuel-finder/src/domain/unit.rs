//! Distance units and conversion to and from meters.
//!
//! Meters are the canonical unit: every distance comparison inside the
//! search engine happens in meters, and results are converted back into
//! the caller's unit only for display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Meters in one kilometer.
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Meters in one international mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// A unit a search radius or result distance may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "km")]
    Kilometers,
    #[default]
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    /// Parse a unit name. Surrounding whitespace is ignored; only `km` and
    /// `mi` are recognized.
    ///
    /// ```
    /// use fuel_finder::domain::DistanceUnit;
    ///
    /// assert_eq!(DistanceUnit::parse(" km "), Some(DistanceUnit::Kilometers));
    /// assert_eq!(DistanceUnit::parse("mi"), Some(DistanceUnit::Miles));
    /// assert_eq!(DistanceUnit::parse("miles"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "km" => Some(DistanceUnit::Kilometers),
            "mi" => Some(DistanceUnit::Miles),
            _ => None,
        }
    }

    /// Parse a unit name, falling back to `default` when absent or unrecognized.
    pub fn parse_or(s: Option<&str>, default: DistanceUnit) -> Self {
        s.and_then(Self::parse).unwrap_or(default)
    }

    /// The wire name of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Meters in one of this unit.
    pub fn meters(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => METERS_PER_KILOMETER,
            DistanceUnit::Miles => METERS_PER_MILE,
        }
    }

    /// Convert a value in this unit to meters.
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.meters()
    }

    /// Convert meters to a value in this unit.
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.meters()
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
