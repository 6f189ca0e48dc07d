//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDataset;
use crate::dataset::DatasetClient;
use crate::geocoder::GeocoderClient;
use crate::index::{MemoryGeoIndex, MemoryRecordStore};
use crate::search::{SearchBackend, SearchCoordinator};

/// The coordinator the service runs.
pub type Coordinator = SearchCoordinator<GeocoderClient, SearchBackend>;

/// Shared application state.
///
/// The dataset, index and store are shared with the search backend, so a
/// setup run is visible to index searches immediately.
#[derive(Clone)]
pub struct AppState {
    /// Station search
    pub coordinator: Arc<Coordinator>,

    /// Cached stations dataset
    pub dataset: Arc<CachedDataset<DatasetClient>>,

    /// Station positions
    pub index: Arc<MemoryGeoIndex>,

    /// Station display attributes
    pub store: Arc<MemoryRecordStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        coordinator: Coordinator,
        dataset: Arc<CachedDataset<DatasetClient>>,
        index: Arc<MemoryGeoIndex>,
        store: Arc<MemoryRecordStore>,
    ) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
            dataset,
            index,
            store,
        }
    }
}
