//! Stations dataset fetcher.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::StationRecord;

use super::error::DatasetError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    /// An `http://` or `https://` URL
    Http(String),
    /// A local file (`file://` prefix or bare path)
    File(PathBuf),
}

impl DatasetLocation {
    /// Classify a configured dataset URL.
    pub fn parse(url: &str) -> Self {
        if url.starts_with("http://") || url.starts_with("https://") {
            DatasetLocation::Http(url.to_string())
        } else {
            let path = url.strip_prefix("file://").unwrap_or(url);
            DatasetLocation::File(PathBuf::from(path))
        }
    }
}

/// Configuration for the dataset client.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Dataset URL or path
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DatasetConfig {
    /// Create a new config for the given dataset URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// The dataset document: either `{"fuel_stations": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { fuel_stations: Vec<Value> },
    Bare(Vec<Value>),
}

/// Client that fetches the full stations dataset.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    location: DatasetLocation,
}

impl DatasetClient {
    /// Create a new dataset client.
    pub fn new(config: DatasetConfig) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            location: DatasetLocation::parse(&config.url),
        })
    }

    /// Fetch and parse every station in the dataset.
    pub async fn fetch_all(&self) -> Result<Vec<StationRecord>, DatasetError> {
        let body = match &self.location {
            DatasetLocation::Http(url) => {
                let response = self.http.get(url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(DatasetError::Status {
                        status: status.as_u16(),
                    });
                }

                response.text().await?
            }
            DatasetLocation::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| DatasetError::Io {
                        path: path.display().to_string(),
                        source,
                    })?
            }
        };

        parse_dataset(&body)
    }
}

/// Parse a dataset document.
///
/// Entries that are not station-shaped (for example, lacking an `id`) are
/// skipped with a warning rather than failing the whole dataset.
pub fn parse_dataset(body: &str) -> Result<Vec<StationRecord>, DatasetError> {
    let document: Document = serde_json::from_str(body).map_err(|e| DatasetError::Json {
        message: e.to_string(),
    })?;

    let entries = match document {
        Document::Wrapped { fuel_stations } => fuel_stations,
        Document::Bare(entries) => entries,
    };

    let total = entries.len();
    let stations: Vec<StationRecord> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(station) => Some(station),
            Err(e) => {
                debug!(error = %e, "skipping malformed dataset entry");
                None
            }
        })
        .collect();

    if stations.len() < total {
        warn!(
            skipped = total - stations.len(),
            total, "dataset contained malformed entries"
        );
    }

    Ok(stations)
}
