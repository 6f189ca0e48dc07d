//! Search configuration.

use std::time::Duration;

use crate::domain::DistanceUnit;

/// Configuration parameters for station search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius used when the request has none, or an invalid one.
    pub default_radius: u32,

    /// Unit used when the request has none, or an unrecognized one.
    pub default_unit: DistanceUnit,

    /// Maximum number of stations to return.
    pub max_results: usize,

    /// Datasets larger than this are filtered in parallel chunks of this size.
    pub scan_chunk_size: usize,

    /// Time budget for resolving the origin and running the search.
    pub request_timeout: Duration,
}

impl SearchConfig {
    /// Create a new configuration with the given defaults.
    pub fn new(default_radius: u32, default_unit: DistanceUnit, max_results: usize) -> Self {
        Self {
            default_radius,
            default_unit,
            max_results,
            ..Self::default()
        }
    }

    /// Set the parallel scan chunk size.
    pub fn with_scan_chunk_size(mut self, size: usize) -> Self {
        self.scan_chunk_size = size.max(1);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius: 50,
            default_unit: DistanceUnit::Miles,
            max_results: 10,
            scan_chunk_size: 4096,
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.default_radius, 50);
        assert_eq!(config.default_unit, DistanceUnit::Miles);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.scan_chunk_size, 4096);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn builder() {
        let config = SearchConfig::new(15, DistanceUnit::Kilometers, 3)
            .with_scan_chunk_size(0)
            .with_timeout(Duration::from_millis(250));

        assert_eq!(config.default_radius, 15);
        assert_eq!(config.default_unit, DistanceUnit::Kilometers);
        assert_eq!(config.max_results, 3);
        assert_eq!(config.scan_chunk_size, 1);
        assert_eq!(config.request_timeout, Duration::from_millis(250));
    }
}
