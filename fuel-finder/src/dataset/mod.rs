//! Stations dataset supplier.
//!
//! The dataset is a JSON document listing every station, published at a
//! URL (or available as a local file). The scan search strategy reads the
//! whole of it for every query, so it is normally fronted by
//! [`CachedDataset`](crate::cache::CachedDataset).

mod client;
mod error;

use std::future::Future;
use std::sync::Arc;

pub use client::{DatasetClient, DatasetConfig, DatasetLocation, parse_dataset};
pub use error::DatasetError;

use crate::domain::StationRecord;

/// Supplier of the complete stations dataset.
pub trait StationSource {
    /// Every station in the dataset, including ones without a location.
    fn stations(
        &self,
    ) -> impl Future<Output = Result<Arc<Vec<StationRecord>>, DatasetError>> + Send;
}

impl StationSource for DatasetClient {
    async fn stations(&self) -> Result<Arc<Vec<StationRecord>>, DatasetError> {
        self.fetch_all().await.map(Arc::new)
    }
}

impl<T: StationSource + Send + Sync> StationSource for Arc<T> {
    fn stations(
        &self,
    ) -> impl Future<Output = Result<Arc<Vec<StationRecord>>, DatasetError>> + Send {
        (**self).stations()
    }
}
