//! In-process geospatial index.
//!
//! ## Two-Stage Filtering
//!
//! Radius queries use a two-stage approach:
//! 1. **R-tree filter**: a lat/lon bounding box that encloses the search
//!    circle selects candidates from the tree
//! 2. **Haversine filter**: exact great-circle distance decides membership
//!
//! The bounding box is computed on the sphere (following the "bounding
//! coordinates" method), so it never excludes a true member. Boxes that
//! would cross a pole or the antimeridian widen to the full longitude range.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI};

use rstar::{AABB, RTree, RTreeObject};
use tokio::sync::RwLock;

use crate::domain::{Coordinate, DistanceUnit, StationId, distance};

use super::error::IndexError;
use super::{GeoIndex, IndexHit};

/// Mean Earth radius, matching the haversine distance function.
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Padding added to every bounding box, in degrees.
const ENVELOPE_MARGIN_DEGREES: f64 = 1e-6;

/// R-tree node for a station position. Points are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq)]
struct IndexNode {
    key: StationId,
    coordinate: Coordinate,
}

impl IndexNode {
    fn point(&self) -> [f64; 2] {
        [self.coordinate.longitude(), self.coordinate.latitude()]
    }
}

impl RTreeObject for IndexNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point())
    }
}

#[derive(Default)]
struct Inner {
    tree: RTree<IndexNode>,
    positions: HashMap<StationId, Coordinate>,
}

/// Thread-safe in-memory geospatial index.
///
/// Queries may run while the index is being loaded; members become
/// visible as they are added.
#[derive(Default)]
pub struct MemoryGeoIndex {
    inner: RwLock<Inner>,
}

impl MemoryGeoIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    pub async fn len(&self) -> usize {
        self.inner.read().await.positions.len()
    }

    /// Check if the index is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.positions.is_empty()
    }
}

impl GeoIndex for MemoryGeoIndex {
    async fn add(&self, key: StationId, coordinate: Coordinate) -> Result<(), IndexError> {
        let mut inner = self.inner.write().await;

        if let Some(previous) = inner.positions.insert(key, coordinate) {
            inner.tree.remove(&IndexNode {
                key,
                coordinate: previous,
            });
        }
        inner.tree.insert(IndexNode { key, coordinate });

        Ok(())
    }

    async fn query_radius(
        &self,
        origin: Coordinate,
        radius: f64,
        unit: DistanceUnit,
        limit: usize,
    ) -> Result<Vec<IndexHit>, IndexError> {
        let radius_meters = unit.to_meters(radius);
        if radius_meters.is_nan() || radius_meters < 0.0 {
            return Err(IndexError::Rejected(format!(
                "radius must be non-negative, got {radius}"
            )));
        }

        let envelope = search_envelope(origin, radius_meters);
        let inner = self.inner.read().await;

        let mut hits: Vec<(f64, &IndexNode)> = inner
            .tree
            .locate_in_envelope(&envelope)
            .filter_map(|node| {
                let meters = distance(origin, node.coordinate);
                (meters <= radius_meters).then_some((meters, node))
            })
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.key.cmp(&b.1.key)));
        hits.truncate(limit);

        Ok(hits
            .into_iter()
            .map(|(meters, node)| IndexHit {
                key: node.key,
                distance: unit.from_meters(meters),
                coordinate: node.coordinate,
            })
            .collect())
    }
}

/// A `[lon, lat]` box in degrees enclosing every point within
/// `radius_meters` of `origin`.
fn search_envelope(origin: Coordinate, radius_meters: f64) -> AABB<[f64; 2]> {
    let angular = radius_meters / EARTH_RADIUS_METERS;
    let lat = origin.latitude().to_radians();
    let lon = origin.longitude().to_radians();

    let mut lat_min = lat - angular;
    let mut lat_max = lat + angular;
    let mut lon_min = -PI;
    let mut lon_max = PI;

    if lat_min > -FRAC_PI_2 && lat_max < FRAC_PI_2 {
        let delta = (angular.sin() / lat.cos()).min(1.0).asin();
        if lon - delta >= -PI && lon + delta <= PI {
            lon_min = lon - delta;
            lon_max = lon + delta;
        }
    } else {
        lat_min = lat_min.max(-FRAC_PI_2);
        lat_max = lat_max.min(FRAC_PI_2);
    }

    AABB::from_corners(
        [
            lon_min.to_degrees() - ENVELOPE_MARGIN_DEGREES,
            lat_min.to_degrees() - ENVELOPE_MARGIN_DEGREES,
        ],
        [
            lon_max.to_degrees() + ENVELOPE_MARGIN_DEGREES,
            lat_max.to_degrees() + ENVELOPE_MARGIN_DEGREES,
        ],
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rstar::Envelope;

    /// The point `meters` from `origin` along the initial `bearing` (degrees).
    fn destination(origin: Coordinate, bearing: f64, meters: f64) -> Coordinate {
        let angular = meters / EARTH_RADIUS_METERS;
        let bearing = bearing.to_radians();
        let lat1 = origin.latitude().to_radians();
        let lon1 = origin.longitude().to_radians();

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        let lat = lat2.to_degrees().clamp(-90.0, 90.0);
        let lon = (lon2.to_degrees() + 180.0).rem_euclid(360.0) - 180.0;
        Coordinate::new(lat, lon).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn envelope_never_excludes_members(
            lat in -89.0f64..89.0,
            lon in -179.0f64..179.0,
            bearing in 0.0f64..360.0,
            frac in 0.0f64..=1.0,
            radius in 0.0f64..3.0e6,
        ) {
            let origin = Coordinate::new(lat, lon).unwrap();
            let point = destination(origin, bearing, frac * radius);

            let envelope = search_envelope(origin, radius);
            prop_assert!(
                envelope.contains_point(&[point.longitude(), point.latitude()]),
                "{point:?} outside envelope of {origin:?} r={radius}"
            );
        }
    }
}
