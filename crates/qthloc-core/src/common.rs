// crates/qthloc-core/src/common.rs
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a city dataset.
///
/// Returned by [`CitySearch::stats`](crate::traits::CitySearch::stats); the
/// counts reflect the dataset after any country filter applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub countries: usize,
    pub largest_population: u64,
}

/// Default backend: plain `String` + `f64`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// Smaller records: boxed strings and `f32` coordinates (~1 m resolution).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompactBackend;

impl GeoBackend for CompactBackend {
    type Str = Box<str>;
    type Float = f32;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.into()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f as f32
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        f64::from(v)
    }
}
