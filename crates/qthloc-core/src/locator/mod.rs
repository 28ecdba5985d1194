// crates/qthloc-core/src/locator/mod.rs

//! # Maidenhead locators
//!
//! Parsing, decoding and encoding of QTH locators such as `JO62` or
//! `JN88pl`. A [`GridLocator`] is validated once on construction; decoding
//! it cannot fail afterwards.
//!
//! ```
//! use qthloc_core::locator::decode;
//!
//! let berlin = decode("JO62").unwrap();
//! assert_eq!((berlin.lat, berlin.lon), (52.5, 13.0));
//! ```

mod stage;

pub use stage::Precision;

use crate::distance::GeoCoordinate;
use crate::error::{GeoError, LocatorFault, Result};
use serde::{Serialize, Serializer};
use stage::{ORIGIN, STAGES};
use std::fmt;
use std::str::FromStr;

/// A validated locator of 2, 4, 6 or 8 characters.
///
/// Internally stores the symbol value of each character (`A` = 0, `0` = 0),
/// so it is `Copy` and displays in canonical upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLocator {
    symbols: [u8; 8],
    precision: Precision,
}

/// A rectangular cell of the grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    pub south_west: GeoCoordinate,
    /// Width in degrees of longitude.
    pub width: f64,
    /// Height in degrees of latitude.
    pub height: f64,
}

impl GridCell {
    pub fn contains(&self, p: &GeoCoordinate) -> bool {
        p.lon >= self.south_west.lon
            && p.lon <= self.south_west.lon + self.width
            && p.lat >= self.south_west.lat
            && p.lat <= self.south_west.lat + self.height
    }
}

impl GridLocator {
    /// Validate `input` (surrounding whitespace ignored, any case).
    pub fn parse(input: &str) -> Result<Self> {
        let chars: Vec<char> = input.trim().chars().collect();
        let fail = |fault| GeoError::invalid_locator(input, fault);

        if chars.is_empty() {
            return Err(fail(LocatorFault::Empty));
        }
        let precision =
            Precision::from_len(chars.len()).ok_or_else(|| fail(LocatorFault::BadLength(chars.len())))?;

        let mut symbols = [0u8; 8];
        for (i, &ch) in chars.iter().enumerate() {
            let symbol = STAGES[i / 2].symbol;
            symbols[i] = symbol.index(ch).ok_or_else(|| {
                fail(LocatorFault::BadChar {
                    position: i + 1,
                    found: ch,
                    expected: symbol.describe(),
                })
            })?;
        }

        Ok(Self { symbols, precision })
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Character pairs as symbol values, one per resolved stage.
    fn pairs(&self) -> impl Iterator<Item = [u8; 2]> + '_ {
        self.symbols
            .chunks_exact(2)
            .take(self.precision.pairs())
            .map(|p| [p[0], p[1]])
    }

    /// The south-west corner of the most precise cell.
    fn corner(&self) -> GeoCoordinate {
        STAGES
            .iter()
            .zip(self.pairs())
            .fold(ORIGIN, |at, (stage, pair)| stage.refine(at, pair))
    }

    /// The most precise cell this locator names.
    pub fn cell(&self) -> GridCell {
        let (width, height) = self.precision.cell_size();
        GridCell {
            south_west: self.corner(),
            width,
            height,
        }
    }

    /// Centre of the most precise cell.
    pub fn decode(&self) -> GeoCoordinate {
        self.precision.stage().centre(self.corner())
    }

    /// The same locator cut down to `precision` (no-op if already coarser).
    pub fn truncate(&self, precision: Precision) -> Self {
        let precision = precision.min(self.precision);
        let mut symbols = [0u8; 8];
        symbols[..precision.len()].copy_from_slice(&self.symbols[..precision.len()]);
        Self { symbols, precision }
    }
}

impl fmt::Display for GridLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (stage, pair) in STAGES.iter().zip(self.pairs()) {
            write!(f, "{}{}", stage.symbol.symbol(pair[0]), stage.symbol.symbol(pair[1]))?;
        }
        Ok(())
    }
}

impl FromStr for GridLocator {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for GridLocator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse and decode in one step.
pub fn decode(locator: &str) -> Result<GeoCoordinate> {
    GridLocator::parse(locator).map(|l| l.decode())
}

/// The locator of the cell at `precision` that contains `at`.
///
/// Latitude 90° and longitude 180° fall into the last row/column.
pub fn encode(at: GeoCoordinate, precision: Precision) -> GridLocator {
    let mut lon = (at.lon - ORIGIN.lon).clamp(0.0, 360.0);
    let mut lat = (at.lat - ORIGIN.lat).clamp(0.0, 180.0);
    let mut symbols = [0u8; 8];

    for (i, stage) in STAGES.iter().take(precision.pairs()).enumerate() {
        let max = f64::from(stage.symbol.radix() - 1);
        let x = (lon / stage.step.0).floor().clamp(0.0, max);
        let y = (lat / stage.step.1).floor().clamp(0.0, max);
        lon -= x * stage.step.0;
        lat -= y * stage.step.1;
        symbols[2 * i] = x as u8;
        symbols[2 * i + 1] = y as u8;
    }

    GridLocator { symbols, precision }
}
