//! Full-scan search strategy.
//!
//! Reads the whole dataset and tests every station against the radius.
//! Large datasets are split into contiguous chunks filtered on the blocking
//! pool; chunk outputs are joined in chunk order before ranking, so the
//! result is identical to a sequential pass.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::dataset::StationSource;
use crate::domain::{Coordinate, StationRecord};

use super::error::SearchError;
use super::rank::{RadiusMatch, RankedResult, collect_within, rank_matches};
use super::strategy::{RadiusSearch, SearchRequest};

/// Radius search by scanning every station in the dataset.
pub struct ScanSearch<S> {
    source: S,
    chunk_size: usize,
}

impl<S> ScanSearch<S> {
    /// Create a scan strategy over `source`, splitting datasets larger than
    /// `chunk_size` across workers.
    pub fn new(source: S, chunk_size: usize) -> Self {
        Self {
            source,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl<S: StationSource + Sync> RadiusSearch for ScanSearch<S> {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RankedResult>, SearchError> {
        let stations = self
            .source
            .stations()
            .await
            .map_err(|e| SearchError::upstream("station dataset", e))?;

        let radius_meters = request.radius_meters();
        let matches = if stations.len() <= self.chunk_size {
            collect_within(request.origin, &stations, radius_meters)
        } else {
            collect_chunked(stations.clone(), request.origin, radius_meters, self.chunk_size)
                .await?
        };

        debug!(
            candidates = stations.len(),
            within_radius = matches.len(),
            radius = request.radius,
            unit = %request.radius_unit,
            "scan search complete"
        );

        Ok(rank_matches(
            matches,
            request.radius_unit,
            request.max_results,
        ))
    }
}

/// Filter `stations` in chunks on the blocking pool, concatenating the
/// outputs in chunk order.
async fn collect_chunked(
    stations: Arc<Vec<StationRecord>>,
    origin: Coordinate,
    radius_meters: f64,
    chunk_size: usize,
) -> Result<Vec<RadiusMatch>, SearchError> {
    let len = stations.len();
    let tasks: Vec<_> = (0..len)
        .step_by(chunk_size)
        .map(|start| {
            let stations = Arc::clone(&stations);
            let end = (start + chunk_size).min(len);
            tokio::task::spawn_blocking(move || {
                collect_within(origin, &stations[start..end], radius_meters)
            })
        })
        .collect();

    let mut matches = Vec::new();
    for chunk in join_all(tasks).await {
        matches.extend(chunk.map_err(|e| SearchError::Internal(e.to_string()))?);
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetError;
    use crate::domain::DistanceUnit;
    use crate::search::rank::rank;
    use crate::search::test_support::{north_of, station};

    struct FixedSource(Result<Arc<Vec<StationRecord>>, u16>);

    impl StationSource for FixedSource {
        async fn stations(&self) -> Result<Arc<Vec<StationRecord>>, DatasetError> {
            self.0
                .clone()
                .map_err(|status| DatasetError::Status { status })
        }
    }

    fn origin() -> Coordinate {
        Coordinate::new(41.3, -72.9).unwrap()
    }

    fn fixture() -> Vec<StationRecord> {
        let o = origin();
        (1..=25)
            .map(|id| {
                let miles = (id * 7 % 60) as f64;
                let location = (id % 6 != 0).then(|| north_of(o, miles, DistanceUnit::Miles));
                station(id, &format!("Station {id}"), location)
            })
            .collect()
    }

    #[tokio::test]
    async fn finds_nearest_within_radius() {
        let o = origin();
        let stations = vec![
            station(1, "Ten", Some(north_of(o, 10.0, DistanceUnit::Miles))),
            station(2, "Sixty", Some(north_of(o, 60.0, DistanceUnit::Miles))),
            station(3, "Five", Some(north_of(o, 5.0, DistanceUnit::Miles))),
        ];
        let strategy = ScanSearch::new(FixedSource(Ok(Arc::new(stations))), 4096);

        let request = SearchRequest::new(o, 50, DistanceUnit::Miles, 10);
        let results = strategy.search(&request).await.unwrap();

        let ids: Vec<u64> = results.iter().map(|r| r.station.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!((results[0].distance - 5.0).abs() < 1e-6);
        assert_eq!(results[0].distance_unit, DistanceUnit::Miles);
    }

    #[tokio::test]
    async fn chunked_scan_matches_sequential() {
        let stations = fixture();
        let expected = rank(
            origin(),
            &stations,
            DistanceUnit::Miles.to_meters(40.0),
            DistanceUnit::Miles,
            10,
        );

        let strategy = ScanSearch::new(FixedSource(Ok(Arc::new(stations))), 3);
        let request = SearchRequest::new(origin(), 40, DistanceUnit::Miles, 10);
        let results = strategy.search(&request).await.unwrap();

        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn dataset_failure_is_upstream_error() {
        let strategy = ScanSearch::new(FixedSource(Err(503)), 4096);
        let request = SearchRequest::new(origin(), 50, DistanceUnit::Miles, 10);

        let err = strategy.search(&request).await.unwrap_err();
        assert!(matches!(
            err,
            SearchError::UpstreamUnavailable {
                service: "station dataset",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn empty_dataset_gives_empty_result() {
        let strategy = ScanSearch::new(FixedSource(Ok(Arc::new(Vec::new()))), 4096);
        let request = SearchRequest::new(origin(), 50, DistanceUnit::Miles, 10);

        assert!(strategy.search(&request).await.unwrap().is_empty());
    }
}
