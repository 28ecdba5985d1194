// crates/qthloc-core/src/search.rs

//! # Nearest-city search
//!
//! A plain linear scan: every call visits each record once, in dataset
//! order. No spatial index is built.

use crate::common::DbStats;
use crate::distance::GeoCoordinate;
use crate::model::{CityDataset, CityRecord};
use crate::text::fold_key;
use crate::traits::{CitySearch, GeoBackend};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// A city together with its distance from the search target.
#[derive(Debug, Serialize)]
pub struct NearestCity<'a, B: GeoBackend> {
    pub city: &'a CityRecord<B>,
    /// Position of `city` in the searched slice.
    pub index: usize,
    pub distance_km: f64,
}

impl<B: GeoBackend> Clone for NearestCity<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: GeoBackend> Copy for NearestCity<'_, B> {}

impl<'a, B: GeoBackend> NearestCity<'a, B> {
    /// Strictly closer, or equally close and earlier in the dataset.
    ///
    /// This is the only ordering used to pick a winner, so a scan split over
    /// several chunks and merged with [`NearestCity::closest`] picks the same
    /// city as one sequential pass.
    pub fn is_closer_than(&self, other: &Self) -> bool {
        self.cmp_rank(other) == Ordering::Less
    }

    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.distance_km
            .total_cmp(&other.distance_km)
            .then(self.index.cmp(&other.index))
    }

    /// Merge two partial results.
    pub fn closest(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.is_closer_than(&a) { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Candidates of `cities` with at least `min_population` inhabitants.
fn candidates<'a, B: GeoBackend>(
    target: GeoCoordinate,
    cities: &'a [CityRecord<B>],
    min_population: u64,
) -> impl Iterator<Item = NearestCity<'a, B>> + 'a {
    cities
        .iter()
        .enumerate()
        .filter(move |(_, city)| city.population >= min_population)
        .map(move |(index, city)| NearestCity {
            city,
            index,
            distance_km: target.distance_km(&city.coordinate()),
        })
}

/// The qualifying city closest to `target`.
///
/// A city qualifies when its population is at least `min_population`.
/// On an exact distance tie the earlier record wins. Returns `None` when no
/// record qualifies or `cities` is empty.
pub fn nearest<B: GeoBackend>(
    target: GeoCoordinate,
    cities: &[CityRecord<B>],
    min_population: u64,
) -> Option<NearestCity<'_, B>> {
    candidates(target, cities, min_population)
        .fold(None, |best, candidate| NearestCity::closest(best, Some(candidate)))
}

impl<B: GeoBackend> CitySearch<B> for CityDataset<B> {
    fn stats(&self) -> DbStats {
        let countries: HashSet<String> = self.iter().map(|c| fold_key(c.country())).collect();
        DbStats {
            cities: self.len(),
            countries: countries.len(),
            largest_population: self.iter().map(|c| c.population).max().unwrap_or(0),
        }
    }

    fn nearest(&self, target: GeoCoordinate, min_population: u64) -> Option<NearestCity<'_, B>> {
        nearest(target, self.records(), min_population)
    }

    fn within_radius(
        &self,
        target: GeoCoordinate,
        radius_km: f64,
        min_population: u64,
    ) -> Vec<NearestCity<'_, B>> {
        let mut out: Vec<_> = candidates(target, self.records(), min_population)
            .filter(|hit| hit.distance_km <= radius_km)
            .collect();
        out.sort_by(|a, b| a.cmp_rank(b));
        out
    }

    fn find_cities_by_substring(&self, substr: &str) -> Vec<&CityRecord<B>> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|c| fold_key(c.name()).contains(&q))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;
    use crate::locator::decode;

    fn city(name: &str, lat: f64, lng: f64, pop: u64) -> CityRecord<DefaultBackend> {
        CityRecord::new(name, "Testland", lat, lng, pop)
    }

    #[test]
    fn vienna_is_nearest_to_jn88() {
        let db = CityDataset::reference();
        let hit = nearest(decode("JN88").unwrap(), db.records(), 100_000).unwrap();
        assert_eq!(hit.city.name(), "Vienna");
        assert_eq!(hit.index, 4);
        assert!((hit.distance_km - 56.5).abs() < 1.0);
    }

    #[test]
    fn empty_dataset_finds_nothing() {
        let none: [CityRecord<DefaultBackend>; 0] = [];
        assert!(nearest(GeoCoordinate::new(0.0, 0.0), &none, 100_000).is_none());
    }

    #[test]
    fn threshold_above_everything_finds_nothing() {
        let db = CityDataset::reference();
        assert!(db.nearest(GeoCoordinate::new(0.0, 0.0), 10_000_000).is_none());
    }

    #[test]
    fn population_equal_to_threshold_qualifies() {
        let cities = [city("Exact", 10.0, 10.0, 100_000), city("Small", 0.0, 0.0, 99_999)];
        let hit = nearest(GeoCoordinate::new(0.0, 0.0), &cities, 100_000).unwrap();
        assert_eq!(hit.city.name(), "Exact");
    }

    #[test]
    fn ties_go_to_the_first_record() {
        // Mirror images across the target's meridian: identical distances.
        let cities = [
            city("West", 0.0, -1.0, 500_000),
            city("East", 0.0, 1.0, 500_000),
            city("WestAgain", 0.0, -1.0, 500_000),
        ];
        let hit = nearest(GeoCoordinate::new(0.0, 0.0), &cities, 1).unwrap();
        assert_eq!(hit.city.name(), "West");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn merging_chunks_matches_a_single_pass() {
        let cities = [
            city("A", 0.0, 2.0, 1),
            city("B", 0.0, 1.0, 1),
            city("C", 0.0, -1.0, 1),
            city("D", 0.0, 1.0, 1),
        ];
        let target = GeoCoordinate::new(0.0, 0.0);
        let whole = nearest(target, &cities, 1).unwrap();

        // Scan the halves in reverse order, re-basing the second half's indices.
        let (left, right) = cities.split_at(2);
        let right_hit = nearest(target, right, 1).map(|mut h| {
            h.index += left.len();
            h
        });
        let left_hit = nearest(target, left, 1);
        let merged = NearestCity::closest(right_hit, left_hit).unwrap();

        assert_eq!(merged.index, whole.index);
        assert_eq!(merged.city.name(), "B");
    }

    #[test]
    fn raising_the_threshold_never_brings_cities_closer() {
        let db = CityDataset::reference();
        let thresholds = [0, 900_000, 1_500_000, 2_000_000, 3_000_000, 5_000_000];
        for loc in ["JN88", "JO62", "IO91", "JN18", "KP20"] {
            let target = decode(loc).unwrap();
            let distances: Vec<f64> = thresholds
                .iter()
                .filter_map(|&t| db.nearest(target, t).map(|h| h.distance_km))
                .collect();
            assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{loc}: {distances:?}");
        }
    }

    #[test]
    fn within_radius_is_sorted() {
        let db = CityDataset::reference();
        let hits = db.within_radius(decode("JO62").unwrap(), 600.0, 0);
        let names: Vec<_> = hits.iter().map(|h| h.city.name()).collect();
        assert_eq!(names, ["Berlin", "Hamburg", "Cologne", "Munich", "Vienna", "Amsterdam"]);
    }

    #[test]
    fn stats_and_name_search() {
        let db = CityDataset::reference();
        let stats = db.stats();
        assert_eq!(stats.cities, 8);
        assert_eq!(stats.countries, 5);
        assert_eq!(stats.largest_population, 8_908_081);

        let found = db.find_cities_by_substring("ÁMSTER");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Amsterdam");
        assert!(db.find_cities_by_substring("  ").is_empty());
    }
}
