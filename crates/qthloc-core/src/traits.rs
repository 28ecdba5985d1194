// crates/qthloc-core/src/traits.rs
use crate::common::DbStats;
use crate::distance::GeoCoordinate;
use crate::model::CityRecord;
use crate::search::NearestCity;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the city records.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so datasets can be cached
/// via bincode.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons are accent- and case-insensitive, based on [`fold_key`].
///
/// # Examples
/// ```rust
/// use qthloc_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Kraków").is_named("krakow"));
/// assert!(Place("Köln").name_contains("KOL"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Queries answered by a city dataset.
pub trait CitySearch<B: GeoBackend> {
    fn stats(&self) -> DbStats;

    /// The nearest city with at least `min_population` inhabitants.
    ///
    /// `None` when nothing qualifies (including an empty dataset).
    fn nearest(&self, target: GeoCoordinate, min_population: u64) -> Option<NearestCity<'_, B>>;

    /// Every qualifying city within `radius_km`, closest first.
    fn within_radius(
        &self,
        target: GeoCoordinate,
        radius_km: f64,
        min_population: u64,
    ) -> Vec<NearestCity<'_, B>>;

    fn find_cities_by_substring(&self, substr: &str) -> Vec<&CityRecord<B>>;
}
