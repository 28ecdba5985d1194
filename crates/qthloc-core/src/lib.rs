// crates/qthloc-core/src/lib.rs

//! # qthloc-core
//!
//! Locate amateur-radio stations from their Maidenhead (QTH) locator:
//!
//! - [`locator`] decodes `JO62`, `JN88pl`, ... into the centre of the cell
//!   they name (and encodes coordinates back into locators),
//! - [`distance`] measures great-circle distance on a spherical Earth,
//! - [`search`] finds the nearest city above a population threshold,
//! - [`query`] puts the three together for one received station.
//!
//! City data lives in a caller-owned [`CityDataset`], loaded once with
//! [`CityDataset::load_from_path`] and shared read-only afterwards.
//!
//! ```
//! use qthloc_core::{query, CityDataset};
//!
//! let db = CityDataset::reference();
//! let report = query::run("JO62", "JN88", [100_000], db.records()).unwrap();
//! assert_eq!(report.nearest_for(100_000).unwrap().city.name(), "Vienna");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod distance;
pub mod error;
pub mod loader;
pub mod locator;
pub mod model;
pub mod query;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CompactBackend, DbStats, DefaultBackend};
pub use crate::distance::{distance_km, GeoCoordinate};
pub use crate::error::{GeoError, LocatorFault, Result};
pub use crate::locator::{decode, encode, GridLocator, Precision};
pub use crate::model::{CityDataset, CityRecord};
pub use crate::query::{QueryResult, DEFAULT_THRESHOLDS};
pub use crate::search::{nearest, NearestCity};
// Search trait (needed for `db.nearest(..)`)
pub use crate::traits::{CitySearch, GeoBackend, NameMatch};

/// Common imports for applications.
pub mod prelude {
    pub use crate::{
        decode, distance_km, nearest, query, CityDataset, CityRecord, CitySearch, DefaultBackend,
        GeoCoordinate, GeoError, GridLocator, Precision, Result,
    };
}
