// crates/qthloc-core/src/query.rs

//! # Station query
//!
//! Composes the locator codec, the distance formula and the city search
//! into the one report a receiving station wants: where the other station
//! is, how far away, and which sizeable city it is near.

use crate::distance::{initial_bearing_deg, GeoCoordinate};
use crate::error::Result;
use crate::locator::GridLocator;
use crate::model::CityRecord;
use crate::search::{nearest, NearestCity};
use crate::traits::GeoBackend;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Population thresholds used when the caller names none.
pub const DEFAULT_THRESHOLDS: [u64; 2] = [100_000, 1_000_000];

/// Everything learned about one received station.
#[derive(Debug, Serialize)]
pub struct QueryResult<'a, B: GeoBackend> {
    pub my_locator: GridLocator,
    pub rx_locator: GridLocator,
    pub my_position: GeoCoordinate,
    pub rx_position: GeoCoordinate,
    /// Great-circle distance between the two stations.
    pub distance_km: f64,
    /// Initial heading from my station towards the received one.
    pub bearing_deg: f64,
    /// Nearest city to the received station, per population threshold.
    pub nearest: BTreeMap<u64, Option<NearestCity<'a, B>>>,
}

impl<'a, B: GeoBackend> QueryResult<'a, B> {
    /// `None` both when the threshold was not asked for and when no city met it.
    pub fn nearest_for(&self, threshold: u64) -> Option<&NearestCity<'a, B>> {
        self.nearest.get(&threshold).and_then(|hit| hit.as_ref())
    }
}

#[cfg(feature = "json")]
impl<B: GeoBackend + Serialize> QueryResult<'_, B> {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Locate the received station `rx` as heard from `my`.
///
/// Both locators are validated first; an invalid one fails the whole query.
/// Each threshold is searched independently around the received station,
/// so an unmet threshold shows up as `None` without affecting the others.
/// Duplicate thresholds collapse into one entry.
pub fn run<'a, B: GeoBackend>(
    my: &str,
    rx: &str,
    thresholds: impl IntoIterator<Item = u64>,
    cities: &'a [CityRecord<B>],
) -> Result<QueryResult<'a, B>> {
    let my_locator = GridLocator::parse(my)?;
    let rx_locator = GridLocator::parse(rx)?;
    let my_position = my_locator.decode();
    let rx_position = rx_locator.decode();

    let by_threshold: BTreeMap<_, _> = thresholds
        .into_iter()
        .map(|t| (t, nearest(rx_position, cities, t)))
        .collect();

    let result = QueryResult {
        my_locator,
        rx_locator,
        my_position,
        rx_position,
        distance_km: my_position.distance_km(&rx_position),
        bearing_deg: initial_bearing_deg(my_position, rx_position),
        nearest: by_threshold,
    };
    debug!(
        my = %result.my_locator,
        rx = %result.rx_locator,
        distance_km = result.distance_km,
        thresholds = result.nearest.len(),
        "station query"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;
    use crate::error::GeoError;
    use crate::model::CityDataset;

    #[test]
    fn berlin_hears_vienna() {
        let db = CityDataset::reference();
        let r = run("JO62", "JN88", DEFAULT_THRESHOLDS, db.records()).unwrap();
        assert!((r.distance_km - 527.0).abs() < 1.0);
        assert!(r.bearing_deg > 90.0 && r.bearing_deg < 180.0);
        assert_eq!(r.nearest_for(100_000).unwrap().city.name(), "Vienna");
        assert_eq!(r.nearest_for(1_000_000).unwrap().city.name(), "Vienna");
    }

    #[test]
    fn searches_around_the_received_station() {
        let db = CityDataset::reference();
        let r = run("JN88", "JO62", [100_000], db.records()).unwrap();
        assert_eq!(r.nearest_for(100_000).unwrap().city.name(), "Berlin");
    }

    #[test]
    fn unmet_threshold_does_not_abort_the_others() {
        let db = CityDataset::reference();
        let r = run("JO62", "JN88", [100_000, 50_000_000, 100_000], db.records()).unwrap();
        assert_eq!(r.nearest.len(), 2);
        assert!(r.nearest_for(100_000).is_some());
        assert!(r.nearest.get(&50_000_000).unwrap().is_none());
    }

    #[test]
    fn empty_dataset_gives_none_per_threshold() {
        let none: &[CityRecord<DefaultBackend>] = &[];
        let r = run("JO62", "JN88", DEFAULT_THRESHOLDS, none).unwrap();
        assert!(r.nearest.values().all(Option::is_none));
        assert_eq!(r.nearest.len(), 2);
    }

    #[test]
    fn invalid_locator_propagates() {
        let db = CityDataset::reference();
        let err = run("JO62", "ZZ99", DEFAULT_THRESHOLDS, db.records()).unwrap_err();
        assert!(matches!(err, GeoError::InvalidLocator { ref locator, .. } if locator == "ZZ99"));
        assert!(run("", "JN88", DEFAULT_THRESHOLDS, db.records()).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn serializes_to_json() {
        let db = CityDataset::reference();
        let r = run("jo62", "jn88", [100_000], db.records()).unwrap();
        let json = r.to_json_pretty().unwrap();
        assert!(json.contains("\"rx_locator\": \"JN88\""));
        assert!(json.contains("\"Vienna\""));
    }
}
