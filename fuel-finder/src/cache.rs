//! Caching layer for the stations dataset.
//!
//! The dataset is a single multi-megabyte document that changes rarely.
//! Fetching it for every query would dominate latency, so the parsed
//! dataset is kept for a configurable TTL and shared between requests.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, info};

use crate::dataset::{DatasetError, StationSource};
use crate::domain::StationRecord;

/// Cached dataset entry.
type DatasetEntry = Arc<Vec<StationRecord>>;

/// Configuration for the dataset cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the cached dataset.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
        }
    }
}

/// Dataset supplier with caching.
///
/// Wraps any [`StationSource`] and serves the parsed dataset from memory
/// until the TTL expires.
pub struct CachedDataset<S> {
    source: S,
    cache: MokaCache<(), DatasetEntry>,
}

impl<S: StationSource + Sync> CachedDataset<S> {
    /// Create a new cached supplier.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder().time_to_live(config.ttl).build();

        Self { source, cache }
    }

    /// Fetch the dataset from the source, bypassing and then replacing
    /// the cached copy.
    pub async fn refresh(&self) -> Result<DatasetEntry, DatasetError> {
        let stations = self.source.stations().await?;
        info!(stations = stations.len(), "loaded stations dataset");
        self.cache.insert((), stations.clone()).await;
        Ok(stations)
    }

    /// Whether a copy of the dataset is currently cached.
    pub async fn is_cached(&self) -> bool {
        self.cache.get(&()).await.is_some()
    }

    /// Drop the cached copy.
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: StationSource + Send + Sync> StationSource for CachedDataset<S> {
    async fn stations(&self) -> Result<DatasetEntry, DatasetError> {
        if let Some(cached) = self.cache.get(&()).await {
            debug!("dataset cache hit");
            return Ok(cached);
        }

        debug!("dataset cache miss");
        self.refresh().await
    }
}
