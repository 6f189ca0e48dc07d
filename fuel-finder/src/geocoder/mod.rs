//! Postal code geocoding.
//!
//! The search coordinator only needs "postal code in, coordinate out";
//! [`Geocoder`] is that seam, and [`GeocoderClient`] is the HTTP
//! implementation used by the service.

mod client;
mod error;
mod types;

use std::future::Future;
use std::sync::Arc;

pub use client::{DEFAULT_BASE_URL, GeocoderClient, GeocoderConfig};
pub use error::GeocodeError;
pub use types::GeocodeResponse;

use crate::domain::Coordinate;

/// Resolves postal codes to coordinates.
pub trait Geocoder {
    /// Locate a postal code. `Ok(None)` means the geocoder answered but
    /// has no position for it.
    fn locate(
        &self,
        postal_code: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send;
}

impl Geocoder for GeocoderClient {
    fn locate(
        &self,
        postal_code: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send {
        self.geocode(postal_code)
    }
}

impl<T: Geocoder + Send + Sync> Geocoder for Arc<T> {
    fn locate(
        &self,
        postal_code: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send {
        (**self).locate(postal_code)
    }
}
