// crates/qthloc-core/src/error.rs
use thiserror::Error;

/// Why a locator string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorFault {
    #[error("locator is empty")]
    Empty,
    #[error("length {0} is not one of 2, 4, 6 or 8")]
    BadLength(usize),
    #[error("character {found:?} at position {position} is not {expected}")]
    BadChar {
        /// 1-based position in the locator.
        position: usize,
        found: char,
        expected: &'static str,
    },
}

/// All errors produced by `qthloc-core`.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Invalid locator {locator:?}: {fault}")]
    InvalidLocator { locator: String, fault: LocatorFault },

    #[error("Invalid city record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeoError {
    pub(crate) fn invalid_locator(locator: &str, fault: LocatorFault) -> Self {
        GeoError::InvalidLocator {
            locator: locator.to_owned(),
            fault,
        }
    }

    /// `true` for the one error a caller usually recovers from by re-prompting.
    pub fn is_invalid_locator(&self) -> bool {
        matches!(self, GeoError::InvalidLocator { .. })
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
