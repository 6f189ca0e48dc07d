//! Postal code geocoder client.

use tracing::debug;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Default geocode endpoint.
pub const DEFAULT_BASE_URL: &str = "https://geocoder.api.here.com/6.2/geocode.json";

/// Country every postal code is resolved in.
const COUNTRY: &str = "United States";

/// Response generation requested from the geocoder.
const RESPONSE_GENERATION: &str = "9";

/// Configuration for the geocoder client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Application id credential
    pub app_id: String,
    /// Application code credential
    pub app_code: String,
    /// Geocode endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a new config with the given credentials.
    pub fn new(app_id: impl Into<String>, app_code: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_code: app_code.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client that resolves postal codes to coordinates.
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    http: reqwest::Client,
    config: GeocoderConfig,
}

impl GeocoderClient {
    /// Create a new geocoder client.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Resolve a postal code. `Ok(None)` if the geocoder has no position
    /// for it.
    pub async fn geocode(&self, postal_code: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("postalCode", postal_code),
                ("country", COUNTRY),
                ("app_id", self.config.app_id.as_str()),
                ("app_code", self.config.app_code.as_str()),
                ("gen", RESPONSE_GENERATION),
            ])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: Option<GeocodeResponse> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let coordinate = parsed.and_then(|r| r.first_position());
        debug!(postal_code, found = coordinate.is_some(), "geocoded postal code");

        Ok(coordinate)
    }
}
