//! Ranked radius search over fuel stations.
//!
//! Given an origin, a radius and a unit, find the nearest stations within
//! the radius. Two interchangeable strategies implement [`RadiusSearch`]:
//! a full scan of the dataset and a geospatial index lookup. The
//! [`SearchCoordinator`] turns raw request parameters into a search and
//! shapes the outcome.

mod backend;
mod config;
mod coordinator;
mod error;
mod filter;
mod index;
mod rank;
mod scan;
mod strategy;

pub use backend::{DatasetScan, MemoryIndexSearch, SearchBackend, StrategyKind, UnknownStrategy};
pub use config::SearchConfig;
pub use coordinator::{Origin, SearchCoordinator, SearchResponse, normalize_radius};
pub use error::SearchError;
pub use filter::{distance_within, is_within};
pub use index::IndexSearch;
pub use rank::{RadiusMatch, RankedResult, collect_within, rank, rank_matches};
pub use scan::ScanSearch;
pub use strategy::{RadiusSearch, SearchRequest};

#[cfg(test)]
pub(crate) use rank::test_support;
