//! Geospatial index and station record store.
//!
//! The index strategy answers radius queries from a geospatial index that
//! only knows station ids and positions, then fetches display attributes
//! from a separate record store. Both are reached through traits so the
//! in-process implementations here can be swapped for external services.

mod error;
mod loader;
mod memory;
mod store;

use std::future::Future;
use std::sync::Arc;

pub use error::{IndexError, RecordStoreError};
pub use loader::{LoadSummary, load_stations};
pub use memory::MemoryGeoIndex;
pub use store::MemoryRecordStore;

use crate::domain::{Coordinate, DistanceUnit, StationId, StationRecord};

/// A member returned by a radius query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexHit {
    /// Station id.
    pub key: StationId,

    /// Distance from the query origin, in the query unit.
    pub distance: f64,

    /// Position stored in the index.
    pub coordinate: Coordinate,
}

/// A geospatial index of station positions.
pub trait GeoIndex {
    /// Add or move a member.
    fn add(
        &self,
        key: StationId,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<(), IndexError>> + Send;

    /// Members within `radius` (in `unit`) of `origin`, nearest first,
    /// at most `limit` of them. Distances are reported in `unit`.
    fn query_radius(
        &self,
        origin: Coordinate,
        radius: f64,
        unit: DistanceUnit,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<IndexHit>, IndexError>> + Send;
}

/// A keyed store of station display attributes.
pub trait RecordStore {
    /// Look up a station by id. `Ok(None)` if there is no such record.
    fn lookup(
        &self,
        id: StationId,
    ) -> impl Future<Output = Result<Option<StationRecord>, RecordStoreError>> + Send;

    /// Insert or replace a record.
    fn insert(
        &self,
        record: StationRecord,
    ) -> impl Future<Output = Result<(), RecordStoreError>> + Send;
}

impl<T: GeoIndex + Send + Sync> GeoIndex for Arc<T> {
    fn add(
        &self,
        key: StationId,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<(), IndexError>> + Send {
        (**self).add(key, coordinate)
    }

    fn query_radius(
        &self,
        origin: Coordinate,
        radius: f64,
        unit: DistanceUnit,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<IndexHit>, IndexError>> + Send {
        (**self).query_radius(origin, radius, unit, limit)
    }
}

impl<T: RecordStore + Send + Sync> RecordStore for Arc<T> {
    fn lookup(
        &self,
        id: StationId,
    ) -> impl Future<Output = Result<Option<StationRecord>, RecordStoreError>> + Send {
        (**self).lookup(id)
    }

    fn insert(
        &self,
        record: StationRecord,
    ) -> impl Future<Output = Result<(), RecordStoreError>> + Send {
        (**self).insert(record)
    }
}
