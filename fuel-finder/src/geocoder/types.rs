//! Geocoder response DTOs.
//!
//! The geocoder nests the position several levels deep and omits whole
//! branches when nothing matched, so every level is optional here.

use serde::Deserialize;

use crate::domain::Coordinate;

/// Top-level geocode response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeocodeResponse {
    pub response: Option<ResponseBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseBody {
    #[serde(default)]
    pub view: Vec<View>,
}

/// A view groups the results for one query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct View {
    #[serde(default)]
    pub result: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeocodeResult {
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    /// Routable positions for the match. The first is used.
    #[serde(default)]
    pub navigation_position: Vec<Position>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeocodeResponse {
    /// The first navigation position of the first result, if there is a
    /// complete, in-range one.
    pub fn first_position(&self) -> Option<Coordinate> {
        let position = self
            .response
            .as_ref()?
            .view
            .first()?
            .result
            .first()?
            .location
            .as_ref()?
            .navigation_position
            .first()?;

        Coordinate::from_parts(position.latitude, position.longitude)
    }
}
