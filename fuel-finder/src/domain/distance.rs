//! Great-circle distance.
//!
//! Uses the haversine formula on a spherical Earth of mean radius
//! 6 371 008.8 m. Accurate to roughly 0.5%, which is well inside the
//! tolerance of a "stations near me" search.

use geo::HaversineDistance;

use super::Coordinate;

/// Distance in meters between two coordinates.
///
/// Symmetric, and exactly zero when `a == b`.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    a.to_point().haversine_distance(&b.to_point())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn new_york_to_los_angeles() {
        let nyc = coord(40.7128, -74.0060);
        let la = coord(34.0522, -118.2437);

        // About 3,936 km
        let d = distance(nyc, la);
        assert!((d - 3_936_000.0).abs() < 10_000.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn same_point_is_zero() {
        let c = coord(41.3, -72.9);
        assert_eq!(distance(c, c), 0.0);
    }

    #[test]
    fn antipodal_points() {
        let d = distance(coord(0.0, 0.0), coord(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * 6_371_008.8;
        assert!((d - half_circumference).abs() < 1.0, "got {d}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        #[test]
        fn distance_to_self_is_zero(a in coordinate_strategy()) {
            prop_assert_eq!(distance(a, a), 0.0);
        }

        #[test]
        fn distance_is_non_negative(a in coordinate_strategy(), b in coordinate_strategy()) {
            prop_assert!(distance(a, b) >= 0.0);
        }
    }
}
