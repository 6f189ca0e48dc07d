//! Bulk load of the stations dataset into an index and record store.

use tracing::{info, warn};

use crate::domain::StationRecord;

use super::{GeoIndex, RecordStore};

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Stations added to both the index and the record store.
    pub indexed: usize,

    /// Stations stored without a position, so not indexed.
    pub skipped: usize,

    /// Stations that could not be stored or indexed.
    pub failed: usize,
}

/// Store every station and index those with a location.
///
/// Failures for individual stations are logged and counted; the load
/// carries on with the rest.
pub async fn load_stations<I, R>(stations: &[StationRecord], index: &I, store: &R) -> LoadSummary
where
    I: GeoIndex + Sync,
    R: RecordStore + Sync,
{
    let mut summary = LoadSummary::default();

    for station in stations {
        if let Err(e) = store.insert(station.clone()).await {
            warn!(id = station.id, error = %e, "failed to store station");
            summary.failed += 1;
            continue;
        }

        let Some(location) = station.location else {
            summary.skipped += 1;
            continue;
        };

        match index.add(station.id, location).await {
            Ok(()) => summary.indexed += 1,
            Err(e) => {
                warn!(id = station.id, error = %e, "failed to index station");
                summary.failed += 1;
            }
        }
    }

    info!(
        indexed = summary.indexed,
        skipped = summary.skipped,
        failed = summary.failed,
        "loaded stations into index"
    );

    summary
}
