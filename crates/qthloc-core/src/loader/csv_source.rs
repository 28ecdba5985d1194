// crates/qthloc-core/src/loader/csv_source.rs
use crate::error::{GeoError, Result};
use crate::model::convert::CityRaw;
use crate::model::CityRecord;
use crate::traits::GeoBackend;
use std::io::Read;

/// Parse a header-led, comma-separated city table.
///
/// Stops at the first malformed or invalid row; `line` in the error is the
/// physical line of the file (the header is line 1).
pub fn read_cities<B: GeoBackend, R: Read>(reader: R) -> Result<Vec<CityRecord<B>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut record = csv::StringRecord::new();
    let mut cities = Vec::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let raw: CityRaw = record.deserialize(Some(&headers))?;
        let city = raw
            .into_record::<B>()
            .map_err(|reason| GeoError::InvalidRecord { line, reason })?;
        cities.push(city);
    }
    Ok(cities)
}
