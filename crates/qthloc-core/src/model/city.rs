// crates/qthloc-core/src/model/city.rs
use crate::common::DefaultBackend;
use crate::distance::GeoCoordinate;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// One populated place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityRecord<B: GeoBackend = DefaultBackend> {
    pub name: B::Str,
    pub country: B::Str,
    /// ISO 3166-1 alpha-2 code, when the source has one.
    pub iso2: Option<B::Str>,
    /// State, province or other first-level region.
    pub admin: Option<B::Str>,
    pub lat: B::Float,
    pub lng: B::Float,
    pub population: u64,
}

impl<B: GeoBackend> CityRecord<B> {
    pub fn new(name: &str, country: &str, lat: f64, lng: f64, population: u64) -> Self {
        Self {
            name: B::str_from(name),
            country: B::str_from(country),
            iso2: None,
            admin: None,
            lat: B::float_from(lat),
            lng: B::float_from(lng),
            population,
        }
    }

    pub fn with_iso2(mut self, iso2: &str) -> Self {
        self.iso2 = Some(B::str_from(iso2));
        self
    }

    pub fn with_admin(mut self, admin: &str) -> Self {
        self.admin = Some(B::str_from(admin));
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn country(&self) -> &str {
        self.country.as_ref()
    }

    pub fn iso2(&self) -> Option<&str> {
        self.iso2.as_ref().map(|s| s.as_ref())
    }

    pub fn admin(&self) -> Option<&str> {
        self.admin.as_ref().map(|s| s.as_ref())
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(B::float_to_f64(self.lat), B::float_to_f64(self.lng))
    }

    /// Matches an ISO2 code or the country name, case-insensitively.
    pub fn in_country(&self, code_or_name: &str) -> bool {
        self.iso2().is_some_and(|c| c.eq_ignore_ascii_case(code_or_name))
            || crate::text::equals_folded(self.country(), code_or_name)
    }

    /// Reason this record cannot be used, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.name().trim().is_empty() {
            return Err("city name is empty".into());
        }
        let at = self.coordinate();
        if !at.is_valid() {
            return Err(format!(
                "coordinate ({}, {}) is outside [-90, 90] x [-180, 180]",
                at.lat, at.lon
            ));
        }
        Ok(())
    }
}

impl<B: GeoBackend> NameMatch for CityRecord<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}
