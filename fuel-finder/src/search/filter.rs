//! Radius membership test.

use crate::domain::{Coordinate, StationRecord, distance};

/// Whether `candidate` lies within `radius_meters` of `origin`.
///
/// Stations without a location are never within any radius.
pub fn is_within(origin: Coordinate, candidate: &StationRecord, radius_meters: f64) -> bool {
    distance_within(origin, candidate, radius_meters).is_some()
}

/// Distance in meters from `origin` to `candidate`, if it is within
/// `radius_meters`. The boundary is inclusive.
pub fn distance_within(
    origin: Coordinate,
    candidate: &StationRecord,
    radius_meters: f64,
) -> Option<f64> {
    let location = candidate.location?;
    let meters = distance(origin, location);
    (meters <= radius_meters).then_some(meters)
}
