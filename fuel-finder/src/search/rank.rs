//! Ranking of stations by distance.
//!
//! Ranking happens in two phases so the filtering phase can be split
//! across workers:
//! 1. [`collect_within`] keeps the candidates inside the radius, in
//!    candidate order, with their distance in meters.
//! 2. [`rank_matches`] converts distances to the display unit, sorts
//!    (stably) by ascending distance, and truncates.
//!
//! Concatenating phase-1 outputs of consecutive chunks gives exactly the
//! phase-1 output of the whole slice, so the final order never depends on
//! how the work was split.

use crate::domain::{Coordinate, DistanceUnit, StationRecord};

use super::filter::distance_within;

/// A station within the search radius, with its distance from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    /// Display attributes of the station.
    pub station: StationRecord,

    /// Where the station is.
    pub location: Coordinate,

    /// Distance from the origin, in `distance_unit`.
    pub distance: f64,

    /// Unit of `distance`.
    pub distance_unit: DistanceUnit,
}

/// A candidate that passed the radius filter.
#[derive(Debug, Clone)]
pub struct RadiusMatch {
    station: StationRecord,
    location: Coordinate,
    meters: f64,
}

/// Keep the candidates within `radius_meters` of `origin`, preserving
/// candidate order.
pub fn collect_within(
    origin: Coordinate,
    candidates: &[StationRecord],
    radius_meters: f64,
) -> Vec<RadiusMatch> {
    candidates
        .iter()
        .filter_map(|station| {
            let meters = distance_within(origin, station, radius_meters)?;
            Some(RadiusMatch {
                station: station.clone(),
                location: station.location?,
                meters,
            })
        })
        .collect()
}

/// Convert, sort and truncate radius matches.
///
/// The sort is stable: stations at equal distance keep their candidate
/// order. Truncation happens only after sorting, so the output is always
/// the true nearest `max_results`.
pub fn rank_matches(
    matches: Vec<RadiusMatch>,
    unit: DistanceUnit,
    max_results: usize,
) -> Vec<RankedResult> {
    let mut results: Vec<RankedResult> = matches
        .into_iter()
        .map(|m| RankedResult {
            station: m.station,
            location: m.location,
            distance: unit.from_meters(m.meters),
            distance_unit: unit,
        })
        .collect();

    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results.truncate(max_results);
    results
}

/// Rank the candidates within `radius_meters` of `origin`, nearest first,
/// keeping at most `max_results`.
pub fn rank(
    origin: Coordinate,
    candidates: &[StationRecord],
    radius_meters: f64,
    unit: DistanceUnit,
    max_results: usize,
) -> Vec<RankedResult> {
    rank_matches(
        collect_within(origin, candidates, radius_meters),
        unit,
        max_results,
    )
}



#[cfg(test)]
mod proptests {
    use super::test_support::station;
    use super::*;
    use crate::domain::distance;
    use proptest::prelude::*;

    /// Candidates scattered within a few degrees of the origin, some
    /// without a location.
    fn candidates_strategy() -> impl Strategy<Value = Vec<StationRecord>> {
        prop::collection::vec(
            prop::option::weighted(0.9, (-2.0f64..2.0, -2.0f64..2.0)),
            0..40,
        )
        .prop_map(|offsets| {
            offsets
                .into_iter()
                .enumerate()
                .map(|(i, offset)| {
                    let location = offset
                        .map(|(dlat, dlon)| Coordinate::new(41.3 + dlat, -72.9 + dlon).unwrap());
                    station(i as u64, "s", location)
                })
                .collect()
        })
    }

    fn unit_strategy() -> impl Strategy<Value = DistanceUnit> {
        prop_oneof![Just(DistanceUnit::Kilometers), Just(DistanceUnit::Miles)]
    }

    fn origin() -> Coordinate {
        Coordinate::new(41.3, -72.9).unwrap()
    }

    proptest! {
        #[test]
        fn ranked_is_sorted(
            candidates in candidates_strategy(),
            radius in 0.0f64..200.0,
            unit in unit_strategy(),
            max in 1usize..20,
        ) {
            let ranked = rank(origin(), &candidates, unit.to_meters(radius), unit, max);
            for window in ranked.windows(2) {
                prop_assert!(window[0].distance <= window[1].distance);
            }
        }

        #[test]
        fn count_never_exceeds_max(
            candidates in candidates_strategy(),
            max in 0usize..20,
        ) {
            let unit = DistanceUnit::Miles;
            let ranked = rank(origin(), &candidates, unit.to_meters(1.0e4), unit, max);
            prop_assert!(ranked.len() <= max);
            let locatable = candidates.iter().filter(|c| c.location.is_some()).count();
            prop_assert_eq!(ranked.len(), locatable.min(max));
        }

        #[test]
        fn excluded_are_outside_or_unlocated(
            candidates in candidates_strategy(),
            radius in 0.0f64..200.0,
            unit in unit_strategy(),
        ) {
            let radius_meters = unit.to_meters(radius);
            let ranked = rank(origin(), &candidates, radius_meters, unit, usize::MAX);
            let kept: Vec<u64> = ranked.iter().map(|r| r.station.id).collect();

            for candidate in &candidates {
                if kept.contains(&candidate.id) {
                    continue;
                }
                match candidate.location {
                    None => {}
                    Some(location) => prop_assert!(distance(origin(), location) > radius_meters),
                }
            }
        }

        #[test]
        fn ranked_is_prefix_of_unbounded(
            candidates in candidates_strategy(),
            radius in 0.0f64..200.0,
            max in 0usize..20,
        ) {
            let unit = DistanceUnit::Kilometers;
            let radius_meters = unit.to_meters(radius);
            let all = rank(origin(), &candidates, radius_meters, unit, usize::MAX);
            let capped = rank(origin(), &candidates, radius_meters, unit, max);
            prop_assert_eq!(&all[..capped.len()], &capped[..]);
        }
    }
}
