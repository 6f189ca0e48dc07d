//! Service configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::dataset::DatasetConfig;
use crate::domain::DistanceUnit;
use crate::geocoder::{self, GeocoderConfig};
use crate::search::{SearchConfig, StrategyKind};

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to something unusable
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dataset URL, `file://` URL or path
    pub data_url: String,
    pub geocoder_url: String,
    pub geocoder_app_id: String,
    pub geocoder_app_code: String,
    /// Radius used when a request has no valid one
    pub search_radius: u32,
    /// Unit used when a request has no valid one
    pub search_radius_units: DistanceUnit,
    /// Maximum stations per response
    pub result_count: usize,
    pub strategy: StrategyKind,
    pub request_timeout: Duration,
    pub dataset_cache_ttl: Duration,
    /// Load the index at startup (index strategy only)
    pub preload_index: bool,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`. Unset and empty variables
    /// take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let data_url = get("DATA_URL").ok_or(ConfigError::Missing("DATA_URL"))?;

        let search_radius: u32 = parse(&get, "SEARCH_RADIUS", 50)?;
        if search_radius == 0 {
            return Err(ConfigError::Invalid {
                var: "SEARCH_RADIUS",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let result_count: usize = parse(&get, "RESULT_COUNT", 10)?;
        if result_count == 0 {
            return Err(ConfigError::Invalid {
                var: "RESULT_COUNT",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let search_radius_units = match get("SEARCH_RADIUS_UNITS") {
            None => DistanceUnit::Miles,
            Some(raw) => DistanceUnit::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "SEARCH_RADIUS_UNITS",
                value: raw.clone(),
                reason: "expected \"km\" or \"mi\"".to_string(),
            })?,
        };

        let preload_index = match get("PRELOAD_INDEX") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "PRELOAD_INDEX",
                value: raw.clone(),
                reason: "expected true or false".to_string(),
            })?,
        };

        Ok(Self {
            data_url,
            geocoder_url: get("GEOCODER_URL").unwrap_or_else(|| geocoder::DEFAULT_BASE_URL.to_string()),
            geocoder_app_id: get("GEOCODER_APP_ID").unwrap_or_default(),
            geocoder_app_code: get("GEOCODER_APP_CODE").unwrap_or_default(),
            search_radius,
            search_radius_units,
            result_count,
            strategy: parse(&get, "SEARCH_STRATEGY", StrategyKind::Scan)?,
            request_timeout: Duration::from_secs(parse(&get, "REQUEST_TIMEOUT_SECS", 10)?),
            dataset_cache_ttl: Duration::from_secs(parse(&get, "DATASET_CACHE_TTL_SECS", 3600)?),
            preload_index,
            bind_addr: parse(&get, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
        })
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.search_radius,
            self.search_radius_units,
            self.result_count,
        )
        .with_timeout(self.request_timeout)
    }

    pub fn geocoder_config(&self) -> GeocoderConfig {
        GeocoderConfig::new(&self.geocoder_app_id, &self.geocoder_app_code)
            .with_base_url(&self.geocoder_url)
            .with_timeout(self.request_timeout.as_secs().max(1))
    }

    pub fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig::new(&self.data_url)
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: self.dataset_cache_ttl,
        }
    }
}

/// Parse an optional variable, using `default` when unset.
fn parse<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).map(|v| (*v).to_string())
    }

    fn minimal_env<'a>() -> HashMap<&'a str, &'a str> {
        HashMap::from([("DATA_URL", "https://example.com/stations.json")])
    }

    #[test]
    fn defaults() {
        let map = minimal_env();
        let config = AppConfig::from_lookup(lookup_from_map(&map)).unwrap();

        assert_eq!(config.data_url, "https://example.com/stations.json");
        assert_eq!(config.geocoder_url, geocoder::DEFAULT_BASE_URL);
        assert_eq!(config.geocoder_app_id, "");
        assert_eq!(config.search_radius, 50);
        assert_eq!(config.search_radius_units, DistanceUnit::Miles);
        assert_eq!(config.result_count, 10);
        assert_eq!(config.strategy, StrategyKind::Scan);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.dataset_cache_ttl, Duration::from_secs(3600));
        assert!(config.preload_index);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[test]
    fn missing_data_url() {
        let map = HashMap::new();
        let result = AppConfig::from_lookup(lookup_from_map(&map));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATA_URL"));
    }

    #[test]
    fn overrides() {
        let mut map = minimal_env();
        map.insert("SEARCH_RADIUS", "25");
        map.insert("SEARCH_RADIUS_UNITS", "km");
        map.insert("RESULT_COUNT", "5");
        map.insert("SEARCH_STRATEGY", "index");
        map.insert("REQUEST_TIMEOUT_SECS", "3");
        map.insert("PRELOAD_INDEX", "false");
        map.insert("BIND_ADDR", "0.0.0.0:8080");
        map.insert("GEOCODER_APP_ID", "id");

        let config = AppConfig::from_lookup(lookup_from_map(&map)).unwrap();

        assert_eq!(config.search_radius, 25);
        assert_eq!(config.search_radius_units, DistanceUnit::Kilometers);
        assert_eq!(config.result_count, 5);
        assert_eq!(config.strategy, StrategyKind::Index);
        assert!(!config.preload_index);
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());

        let search = config.search_config();
        assert_eq!(search.default_radius, 25);
        assert_eq!(search.max_results, 5);
        assert_eq!(search.request_timeout, Duration::from_secs(3));

        assert_eq!(config.geocoder_config().app_id, "id");
        assert_eq!(config.geocoder_config().timeout_secs, 3);
    }

    #[test]
    fn empty_values_take_defaults() {
        let mut map = minimal_env();
        map.insert("SEARCH_RADIUS", "");
        map.insert("SEARCH_STRATEGY", "  ");

        let config = AppConfig::from_lookup(lookup_from_map(&map)).unwrap();
        assert_eq!(config.search_radius, 50);
        assert_eq!(config.strategy, StrategyKind::Scan);
    }

    #[test]
    fn malformed_values_are_errors() {
        for (var, value) in [
            ("SEARCH_RADIUS", "fifty"),
            ("SEARCH_RADIUS", "0"),
            ("SEARCH_RADIUS_UNITS", "furlongs"),
            ("RESULT_COUNT", "-1"),
            ("RESULT_COUNT", "0"),
            ("SEARCH_STRATEGY", "redis"),
            ("PRELOAD_INDEX", "maybe"),
            ("BIND_ADDR", "localhost"),
        ] {
            let mut map = minimal_env();
            map.insert(var, value);
            let result = AppConfig::from_lookup(lookup_from_map(&map));
            assert!(
                matches!(result, Err(ConfigError::Invalid { var: v, .. }) if v == var),
                "expected Invalid({var}) for {value:?}, got: {result:?}"
            );
        }
    }
}
