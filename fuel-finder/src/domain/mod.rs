//! Domain types for the fuel station finder.
//!
//! This module contains the value types the search engine works with.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod coordinate;
mod distance;
mod station;
mod unit;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use distance::distance;
pub use station::{StationId, StationRecord};
pub use unit::{DistanceUnit, METERS_PER_KILOMETER, METERS_PER_MILE};
