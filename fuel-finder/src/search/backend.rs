//! Runtime choice of search strategy.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::cache::CachedDataset;
use crate::dataset::DatasetClient;
use crate::index::{MemoryGeoIndex, MemoryRecordStore};

use super::error::SearchError;
use super::index::IndexSearch;
use super::rank::RankedResult;
use super::scan::ScanSearch;
use super::strategy::{RadiusSearch, SearchRequest};

/// Which strategy answers radius queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    Scan,
    Index,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Scan => "scan",
            StrategyKind::Index => "index",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy {0:?}, expected \"scan\" or \"index\"")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(StrategyKind::Scan),
            "index" => Ok(StrategyKind::Index),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Scan strategy over the cached dataset.
pub type DatasetScan = ScanSearch<Arc<CachedDataset<DatasetClient>>>;

/// Index strategy over the in-process index and record store.
pub type MemoryIndexSearch = IndexSearch<Arc<MemoryGeoIndex>, Arc<MemoryRecordStore>>;

/// The strategy the service was configured with.
pub enum SearchBackend {
    Scan(DatasetScan),
    Index(MemoryIndexSearch),
}

impl SearchBackend {
    pub fn kind(&self) -> StrategyKind {
        match self {
            SearchBackend::Scan(_) => StrategyKind::Scan,
            SearchBackend::Index(_) => StrategyKind::Index,
        }
    }
}

impl RadiusSearch for SearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RankedResult>, SearchError> {
        match self {
            SearchBackend::Scan(scan) => scan.search(request).await,
            SearchBackend::Index(index) => index.search(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strategy_kind() {
        assert_eq!("scan".parse(), Ok(StrategyKind::Scan));
        assert_eq!(" Index ".parse(), Ok(StrategyKind::Index));
        assert_eq!(
            "redis".parse::<StrategyKind>(),
            Err(UnknownStrategy("redis".to_string()))
        );
        assert_eq!(StrategyKind::Index.to_string(), "index");
    }
}
