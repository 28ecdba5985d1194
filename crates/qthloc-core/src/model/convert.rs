// crates/qthloc-core/src/model/convert.rs
use super::CityRecord;
use crate::traits::GeoBackend;
use serde::Deserialize;

/// One row of a world-cities style table, as it comes from the file.
///
/// Only the columns named here are read; any others are ignored.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub admin_name: Option<String>,
    pub lat: f64,
    pub lng: f64,
    /// Often fractional or missing in published datasets.
    #[serde(default)]
    pub population: Option<f64>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl CityRaw {
    /// **Raw -> Record.** Missing population counts as 0; fractions are dropped.
    pub fn into_record<B: GeoBackend>(self) -> Result<CityRecord<B>, String> {
        let population = match self.population {
            None => 0,
            Some(p) if p.is_finite() && p >= 0.0 => p as u64,
            Some(p) => return Err(format!("population {p} is not a non-negative count")),
        };

        let mut record = CityRecord::<B>::new(&self.city, &self.country, self.lat, self.lng, population);
        if let Some(iso2) = non_empty(self.iso2) {
            record = record.with_iso2(&iso2);
        }
        if let Some(admin) = non_empty(self.admin_name) {
            record = record.with_admin(&admin);
        }
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;

    fn raw(population: Option<f64>) -> CityRaw {
        CityRaw {
            city: "Graz".into(),
            country: "Austria".into(),
            iso2: Some("AT".into()),
            admin_name: Some("".into()),
            lat: 47.0707,
            lng: 15.4395,
            population,
        }
    }

    #[test]
    fn converts_and_truncates_population() {
        let c = raw(Some(291_072.9)).into_record::<DefaultBackend>().unwrap();
        assert_eq!(c.population(), 291_072);
        assert_eq!(c.iso2(), Some("AT"));
        assert_eq!(c.admin(), None);
    }

    #[test]
    fn missing_population_is_zero() {
        let c = raw(None).into_record::<DefaultBackend>().unwrap();
        assert_eq!(c.population(), 0);
    }

    #[test]
    fn negative_population_is_rejected() {
        assert!(raw(Some(-1.0)).into_record::<DefaultBackend>().is_err());
    }
}
