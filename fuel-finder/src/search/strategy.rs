//! The ranked radius search capability and its request type.

use std::future::Future;

use crate::domain::{Coordinate, DistanceUnit};

use super::error::SearchError;
use super::rank::RankedResult;

/// A validated, normalized station search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Point to search around.
    pub origin: Coordinate,

    /// Search radius, in `radius_unit`. Always positive.
    pub radius: u32,

    /// Unit of `radius`, also used for result distances.
    pub radius_unit: DistanceUnit,

    /// Maximum number of results.
    pub max_results: usize,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        origin: Coordinate,
        radius: u32,
        radius_unit: DistanceUnit,
        max_results: usize,
    ) -> Self {
        Self {
            origin,
            radius,
            radius_unit,
            max_results,
        }
    }

    /// The radius in meters.
    pub fn radius_meters(&self) -> f64 {
        self.radius_unit.to_meters(f64::from(self.radius))
    }
}

/// Ranked radius search over fuel stations.
///
/// Implementations must return at most `max_results` stations within the
/// radius, ordered by ascending distance, with distances expressed in the
/// request's unit. Scan and index implementations are interchangeable.
pub trait RadiusSearch {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<RankedResult>, SearchError>> + Send;
}
