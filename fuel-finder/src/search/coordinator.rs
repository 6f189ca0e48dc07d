//! Request orchestration: validate, resolve the origin, search, shape.

use tracing::{debug, warn};

use crate::domain::{Coordinate, DistanceUnit};
use crate::geocoder::Geocoder;

use super::config::SearchConfig;
use super::error::SearchError;
use super::rank::RankedResult;
use super::strategy::{RadiusSearch, SearchRequest};

/// The resolved search origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    /// Postal code as requested.
    pub zip: String,

    /// Where the geocoder placed it.
    pub coordinate: Coordinate,
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub origin: Origin,

    /// Nearest stations first.
    pub stations: Vec<RankedResult>,
}

/// Runs station searches from raw request parameters.
pub struct SearchCoordinator<G, S> {
    geocoder: G,
    search: S,
    config: SearchConfig,
}

impl<G, S> SearchCoordinator<G, S>
where
    G: Geocoder + Sync,
    S: RadiusSearch + Sync,
{
    /// Create a new coordinator.
    pub fn new(geocoder: G, search: S, config: SearchConfig) -> Self {
        Self {
            geocoder,
            search,
            config,
        }
    }

    /// Handle a station search.
    ///
    /// `zip` is required. A missing or malformed `radius` or `radius_units`
    /// falls back to the configured default. Resolving the origin and
    /// running the search share the configured time budget.
    pub async fn handle(
        &self,
        zip: Option<&str>,
        radius: Option<&str>,
        radius_units: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        let zip = zip
            .map(str::trim)
            .filter(|z| !z.is_empty())
            .ok_or(SearchError::MissingParameter("ZIP"))?;

        let radius = normalize_radius(radius, self.config.default_radius);
        let unit = DistanceUnit::parse_or(radius_units, self.config.default_unit);

        match tokio::time::timeout(
            self.config.request_timeout,
            self.resolve_and_search(zip, radius, unit),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    zip,
                    timeout_ms = self.config.request_timeout.as_millis() as u64,
                    "search timed out"
                );
                Err(SearchError::Timeout)
            }
        }
    }

    async fn resolve_and_search(
        &self,
        zip: &str,
        radius: u32,
        unit: DistanceUnit,
    ) -> Result<SearchResponse, SearchError> {
        let origin = self
            .geocoder
            .locate(zip)
            .await
            .map_err(|e| SearchError::upstream("geocoder", e))?
            .ok_or_else(|| SearchError::UnresolvableLocation(zip.to_string()))?;

        debug!(zip, %origin, radius, %unit, "resolved search origin");

        let request = SearchRequest::new(origin, radius, unit, self.config.max_results);
        let mut stations = self.search.search(&request).await?;
        stations.truncate(self.config.max_results);

        Ok(SearchResponse {
            origin: Origin {
                zip: zip.to_string(),
                coordinate: origin,
            },
            stations,
        })
    }
}

/// Parse a requested radius, falling back to `default` unless it is a
/// positive whole number made only of ASCII digits.
pub fn normalize_radius(raw: Option<&str>, default: u32) -> u32 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&radius| radius > 0)
        .unwrap_or(default)
}
