//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::DistanceUnit;
use crate::index::LoadSummary;
use crate::search::{Origin, RankedResult, SearchResponse};

/// Query string of a station search.
///
/// Everything is optional text: a missing `zip` is reported by the
/// coordinator, and malformed radius values fall back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct StationsQuery {
    pub zip: Option<String>,
    pub radius: Option<String>,
    pub radius_units: Option<String>,
}

/// Response for a station search.
#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub origin: OriginDto,
    pub fuel_stations: Vec<StationResultDto>,
}

/// Where the search was centred.
#[derive(Debug, Serialize)]
pub struct OriginDto {
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResultDto {
    pub id: u64,
    pub fuel_type_code: String,
    pub station_name: String,
    pub station_phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Distance from the origin, in `distance_units`
    pub distance: f64,
    pub distance_units: DistanceUnit,
}

/// Response for an index load.
#[derive(Debug, Serialize)]
pub struct SetupResponse {
    pub message: String,
    pub indexed: usize,
    pub skipped: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl SearchResponseDto {
    pub fn from_response(response: SearchResponse) -> Self {
        Self {
            origin: OriginDto::from_origin(&response.origin),
            fuel_stations: response
                .stations
                .into_iter()
                .map(StationResultDto::from_result)
                .collect(),
        }
    }
}

impl OriginDto {
    fn from_origin(origin: &Origin) -> Self {
        Self {
            zip: origin.zip.clone(),
            latitude: origin.coordinate.latitude(),
            longitude: origin.coordinate.longitude(),
        }
    }
}

impl StationResultDto {
    pub fn from_result(result: RankedResult) -> Self {
        let station = result.station;
        Self {
            id: station.id,
            fuel_type_code: station.fuel_type_code,
            station_name: station.station_name,
            station_phone: station.station_phone,
            street_address: station.street_address,
            city: station.city,
            state: station.state,
            zip: station.zip,
            latitude: result.location.latitude(),
            longitude: result.location.longitude(),
            distance: result.distance,
            distance_units: result.distance_unit,
        }
    }
}

impl SetupResponse {
    pub fn from_summary(summary: LoadSummary) -> Self {
        Self {
            message: "Setup complete".to_string(),
            indexed: summary.indexed,
            skipped: summary.skipped,
        }
    }
}
