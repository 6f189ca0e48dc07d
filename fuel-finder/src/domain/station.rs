//! Fuel station records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Coordinate;

/// Station identifier, unique within the dataset.
pub type StationId = u64;

/// A fuel station as published in the stations dataset.
///
/// Records are read-only to the search engine. A record whose location is
/// missing (or out of range) is kept, but never matches a radius search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawStation")]
pub struct StationRecord {
    pub id: StationId,
    pub fuel_type_code: String,
    pub station_name: String,
    pub station_phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub location: Option<Coordinate>,
}

impl StationRecord {
    /// The sentinel record used when display attributes for an indexed
    /// station cannot be found.
    pub fn placeholder(id: StationId) -> Self {
        Self {
            id,
            fuel_type_code: "UNK".to_string(),
            station_name: "Unknown".to_string(),
            station_phone: "000-000-0000".to_string(),
            street_address: "123 Fake St.".to_string(),
            city: "Anywhere".to_string(),
            state: "NY".to_string(),
            zip: "12345".to_string(),
            location: None,
        }
    }

    /// Whether this record is the lookup-miss sentinel.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder(self.id)
    }
}

/// Wire shape of a dataset entry: flat, loosely typed, nullable.
#[derive(Deserialize)]
struct RawStation {
    id: StationId,
    #[serde(default, deserialize_with = "text")]
    fuel_type_code: String,
    #[serde(default, deserialize_with = "text")]
    station_name: String,
    #[serde(default, deserialize_with = "text")]
    station_phone: String,
    #[serde(default, deserialize_with = "text")]
    street_address: String,
    #[serde(default, deserialize_with = "text")]
    city: String,
    #[serde(default, deserialize_with = "text")]
    state: String,
    #[serde(default, deserialize_with = "text")]
    zip: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl From<RawStation> for StationRecord {
    fn from(raw: RawStation) -> Self {
        Self {
            id: raw.id,
            fuel_type_code: raw.fuel_type_code,
            station_name: raw.station_name,
            station_phone: raw.station_phone,
            street_address: raw.street_address,
            city: raw.city,
            state: raw.state,
            zip: raw.zip,
            location: Coordinate::from_parts(raw.latitude, raw.longitude),
        }
    }
}

/// Accept strings, numbers, or null for a display field.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
