//! Index-backed search strategy.
//!
//! The geospatial index answers the radius query (already ordered and
//! capped), and display attributes come from the record store. A station
//! the store cannot produce is reported with placeholder attributes rather
//! than failing the whole query.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::StationRecord;
use crate::index::{GeoIndex, RecordStore};

use super::error::SearchError;
use super::rank::RankedResult;
use super::strategy::{RadiusSearch, SearchRequest};

/// Radius search through a geospatial index and record store.
pub struct IndexSearch<I, R> {
    index: I,
    store: R,
}

impl<I, R> IndexSearch<I, R> {
    /// Create an index strategy.
    pub fn new(index: I, store: R) -> Self {
        Self { index, store }
    }
}

impl<I, R> RadiusSearch for IndexSearch<I, R>
where
    I: GeoIndex + Sync,
    R: RecordStore + Sync,
{
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RankedResult>, SearchError> {
        let hits = self
            .index
            .query_radius(
                request.origin,
                f64::from(request.radius),
                request.radius_unit,
                request.max_results,
            )
            .await
            .map_err(|e| SearchError::upstream("geospatial index", e))?;

        let records = join_all(hits.iter().map(|hit| self.store.lookup(hit.key))).await;

        let results: Vec<RankedResult> = hits
            .into_iter()
            .zip(records)
            .map(|(hit, record)| {
                let station = match record {
                    Ok(Some(station)) => station,
                    Ok(None) => {
                        warn!(id = hit.key, "indexed station missing from record store");
                        StationRecord::placeholder(hit.key)
                    }
                    Err(e) => {
                        warn!(id = hit.key, error = %e, "record store lookup failed");
                        StationRecord::placeholder(hit.key)
                    }
                };

                RankedResult {
                    station,
                    location: hit.coordinate,
                    distance: hit.distance,
                    distance_unit: request.radius_unit,
                }
            })
            .collect();

        debug!(
            results = results.len(),
            radius = request.radius,
            unit = %request.radius_unit,
            "index search complete"
        );

        Ok(results)
    }
}
