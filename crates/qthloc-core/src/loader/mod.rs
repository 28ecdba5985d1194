// crates/qthloc-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression, binary cache) and
//! delegates row parsing to the CSV reader. Everything that comes out of
//! here has been validated; the rest of the crate never sees a raw row.

use crate::common::DefaultBackend;
use crate::error::Result;
use crate::model::CityDataset;
use crate::traits::GeoBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

mod cache;
pub mod common_io;
mod csv_source;

/// Appended to the source file name to form the cache file name.
pub const CACHE_SUFFIX: &str = ".qth.bin";

impl CityDataset<DefaultBackend> {
    /// `data/` inside this crate, where the sample city file ships.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "europe_sample.csv"
    }
}

impl<B: GeoBackend> CityDataset<B> {
    /// Parse a city table from any reader (see [`load_from_path`](Self::load_from_path)
    /// for the expected columns).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let cities = csv_source::read_cities::<B, R>(reader)?;
        Ok(Self::from_validated(cities))
    }

    /// Parse the file at `path`, ignoring any binary cache.
    pub fn load_from_path_uncached(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let db = Self::from_csv_reader(common_io::open_stream(path)?)?;
        debug!(path = %path.display(), cities = db.len(), "parsed city file");
        Ok(db.filter_countries(filter.unwrap_or_default()))
    }
}

impl<B: GeoBackend> CityDataset<B>
where
    Self: Serialize + DeserializeOwned,
{
    /// **Smart Load:** binary cache if fresh, otherwise parse and re-cache.
    ///
    /// The file is a comma-separated table with a header row. Columns
    /// `city`, `country`, `lat` and `lng` are required; `iso2`,
    /// `admin_name` and `population` are optional (missing population
    /// counts as 0). Other columns are ignored. `*.gz` files are
    /// decompressed on the fly.
    ///
    /// `filter` restricts the result to the given ISO2 codes or country
    /// names; the cache always holds the full file.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1. Check Cache
        if common_io::is_cache_fresh(path, &cache_path) {
            match Self::load_cache(&cache_path) {
                Ok(db) => {
                    debug!(cache = %cache_path.display(), cities = db.len(), "using city cache");
                    return Ok(db.filter_countries(filter.unwrap_or_default()));
                }
                Err(e) => debug!(cache = %cache_path.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        // 2. Build
        let db = Self::load_from_path_uncached(path, None)?;

        // 3. Cache (best effort)
        if let Err(e) = db.save_cache(&cache_path) {
            warn!(cache = %cache_path.display(), error = %e, "could not write city cache");
        }

        // 4. Filter
        Ok(db.filter_countries(filter.unwrap_or_default()))
    }

    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        cache::write_cache(path.as_ref(), self)
    }

    /// Read a cache written by [`save_cache`](Self::save_cache), re-validating every record.
    pub fn load_cache(path: impl AsRef<Path>) -> Result<Self> {
        let db: Self = cache::read_cache(path.as_ref())?;
        Self::from_records(db.into_records())
    }
}
