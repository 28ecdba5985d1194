// crates/qthloc-core/src/model/dataset.rs
use super::CityRecord;
use crate::common::DefaultBackend;
use crate::error::{GeoError, Result};
use crate::traits::GeoBackend;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A validated, read-only set of cities.
///
/// The caller owns the dataset and lends it out by reference; nothing in the
/// crate mutates it after construction, so one instance can back any number
/// of concurrent queries. Record order is preserved because it decides
/// distance ties in [`nearest`](crate::search::nearest).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityDataset<B: GeoBackend = DefaultBackend> {
    cities: Vec<CityRecord<B>>,
}

impl<B: GeoBackend> CityDataset<B> {
    /// Build a dataset, rejecting the first unusable record.
    ///
    /// `line` in the error is the 1-based position of the record.
    pub fn from_records(cities: Vec<CityRecord<B>>) -> Result<Self> {
        for (i, city) in cities.iter().enumerate() {
            city.validate().map_err(|reason| GeoError::InvalidRecord {
                line: i as u64 + 1,
                reason,
            })?;
        }
        Ok(Self { cities })
    }

    /// Records that went through [`CityRecord::validate`] already.
    pub(crate) fn from_validated(cities: Vec<CityRecord<B>>) -> Self {
        Self { cities }
    }

    pub(crate) fn into_records(self) -> Vec<CityRecord<B>> {
        self.cities
    }

    pub fn records(&self) -> &[CityRecord<B>] {
        &self.cities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CityRecord<B>> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Keep only cities of the given countries (ISO2 code or name, any case).
    ///
    /// An empty filter keeps everything.
    pub fn filter_countries(self, filter: &[&str]) -> Self {
        if filter.is_empty() {
            return self;
        }
        let cities = self
            .cities
            .into_iter()
            .filter(|c| filter.iter().any(|f| c.in_country(f)))
            .collect();
        Self { cities }
    }
}

impl<'a, B: GeoBackend> IntoIterator for &'a CityDataset<B> {
    type Item = &'a CityRecord<B>;
    type IntoIter = std::slice::Iter<'a, CityRecord<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

static REFERENCE: Lazy<CityDataset<DefaultBackend>> = Lazy::new(|| {
    let city = |name: &str, iso2: &str, country: &str, admin: &str, lat: f64, lng: f64, pop: u64| {
        CityRecord::<DefaultBackend>::new(name, country, lat, lng, pop)
            .with_iso2(iso2)
            .with_admin(admin)
    };
    CityDataset::from_validated(vec![
        city("Hamburg", "DE", "Germany", "Hamburg", 53.5511, 9.9937, 1_841_179),
        city("Berlin", "DE", "Germany", "Berlin", 52.5200, 13.4050, 3_644_826),
        city("Munich", "DE", "Germany", "Bavaria", 48.1351, 11.5820, 1_471_508),
        city("Cologne", "DE", "Germany", "North Rhine-Westphalia", 50.9375, 6.9603, 1_085_664),
        city("Vienna", "AT", "Austria", "Vienna", 48.2082, 16.3738, 1_897_491),
        city("Amsterdam", "NL", "Netherlands", "North Holland", 52.3676, 4.9041, 872_757),
        city("London", "GB", "United Kingdom", "England", 51.5074, -0.1278, 8_908_081),
        city("Paris", "FR", "France", "Île-de-France", 48.8566, 2.3522, 2_148_327),
    ])
});

impl CityDataset<DefaultBackend> {
    /// Eight large western European cities, built once per process.
    ///
    /// Handy for demos and tests when no city file is at hand.
    pub fn reference() -> &'static Self {
        &REFERENCE
    }
}
