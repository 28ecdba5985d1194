// crates/qthloc-core/src/locator/stage.rs

//! The four precision stages of a Maidenhead locator.
//!
//! Each stage consumes one character pair and refines the south-west
//! corner of the cell resolved so far. Decoding is a fold over
//! [`STAGES`]; the centre offset of the last stage applied turns the
//! corner into the cell centre.

use crate::distance::GeoCoordinate;
use serde::{Deserialize, Serialize};

/// The character class allowed in one position pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
    /// `A` up to (but excluding) `A + n`, case-insensitive.
    Letters(u8),
    Digits,
}

impl Symbol {
    /// Number of distinct values in this position.
    pub(crate) const fn radix(self) -> u8 {
        match self {
            Symbol::Letters(n) => n,
            Symbol::Digits => 10,
        }
    }

    pub(crate) fn index(self, ch: char) -> Option<u8> {
        match self {
            Symbol::Letters(n) => {
                let up = ch.to_ascii_uppercase();
                if up.is_ascii_uppercase() && (up as u8 - b'A') < n {
                    Some(up as u8 - b'A')
                } else {
                    None
                }
            }
            Symbol::Digits => ch.to_digit(10).map(|d| d as u8),
        }
    }

    pub(crate) fn symbol(self, index: u8) -> char {
        match self {
            Symbol::Letters(_) => (b'A' + index) as char,
            Symbol::Digits => (b'0' + index) as char,
        }
    }

    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Symbol::Letters(18) => "a letter A-R",
            Symbol::Letters(24) => "a letter A-X",
            Symbol::Letters(_) => "a letter",
            Symbol::Digits => "a digit 0-9",
        }
    }
}

/// How many character pairs of a locator were resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precision {
    /// 2 characters, 20° × 10°.
    Field,
    /// 4 characters, 2° × 1°.
    Square,
    /// 6 characters, 5′ × 2.5′.
    Subsquare,
    /// 8 characters, 30″ × 15″.
    Extended,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Field,
        Precision::Square,
        Precision::Subsquare,
        Precision::Extended,
    ];

    /// Number of character pairs.
    pub const fn pairs(self) -> usize {
        match self {
            Precision::Field => 1,
            Precision::Square => 2,
            Precision::Subsquare => 3,
            Precision::Extended => 4,
        }
    }

    /// Locator length in characters.
    pub const fn len(self) -> usize {
        self.pairs() * 2
    }

    pub fn from_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.len() == len)
    }

    /// Cell width and height in degrees, `(lon, lat)`.
    pub fn cell_size(self) -> (f64, f64) {
        self.stage().step
    }

    pub(crate) fn stage(self) -> &'static Stage {
        let stage = &STAGES[self.pairs() - 1];
        debug_assert_eq!(stage.precision, self);
        stage
    }
}

/// One refinement step.
#[derive(Debug)]
pub(crate) struct Stage {
    pub precision: Precision,
    pub symbol: Symbol,
    /// Degrees per symbol value, `(lon, lat)`.
    pub step: (f64, f64),
    /// Offset from the cell corner to its centre, `(lon, lat)`.
    pub centre: (f64, f64),
}

impl Stage {
    /// Move `at` by the symbol values of this stage's character pair.
    #[inline]
    pub fn refine(&self, at: GeoCoordinate, pair: [u8; 2]) -> GeoCoordinate {
        GeoCoordinate {
            lon: at.lon + f64::from(pair[0]) * self.step.0,
            lat: at.lat + f64::from(pair[1]) * self.step.1,
        }
    }

    #[inline]
    pub fn centre(&self, corner: GeoCoordinate) -> GeoCoordinate {
        GeoCoordinate {
            lon: corner.lon + self.centre.0,
            lat: corner.lat + self.centre.1,
        }
    }
}

/// South-west corner of field `AA`.
pub(crate) const ORIGIN: GeoCoordinate = GeoCoordinate::new(-90.0, -180.0);

// Centre offsets are literal per-stage constants.
pub(crate) static STAGES: [Stage; 4] = [
    Stage {
        precision: Precision::Field,
        symbol: Symbol::Letters(18),
        step: (20.0, 10.0),
        centre: (10.0, 5.0),
    },
    Stage {
        precision: Precision::Square,
        symbol: Symbol::Digits,
        step: (2.0, 1.0),
        centre: (1.0, 0.5),
    },
    Stage {
        precision: Precision::Subsquare,
        symbol: Symbol::Letters(24),
        step: (5.0 / 60.0, 2.5 / 60.0),
        centre: (2.5 / 60.0, 1.25 / 60.0),
    },
    Stage {
        precision: Precision::Extended,
        symbol: Symbol::Digits,
        step: (5.0 / 600.0, 2.5 / 600.0),
        centre: ((2.5 / 60.0) / 10.0, (1.25 / 60.0) / 10.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn field_stage_from_origin() {
        // J = 9, O = 14
        let at = STAGES[0].refine(ORIGIN, [9, 14]);
        assert_eq!(at, GeoCoordinate::new(50.0, 0.0));
    }

    #[test]
    fn square_stage_adds_whole_degrees() {
        let at = STAGES[1].refine(GeoCoordinate::new(50.0, 0.0), [6, 2]);
        assert_eq!(at, GeoCoordinate::new(52.0, 12.0));
    }

    #[test]
    fn subsquare_stage_adds_minutes() {
        // P = 15, L = 11
        let at = STAGES[2].refine(GeoCoordinate::new(52.0, 12.0), [15, 11]);
        assert_abs_diff_eq!(at.lon, 12.0 + 15.0 * 5.0 / 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(at.lat, 52.0 + 11.0 * 2.5 / 60.0, epsilon = 1e-12);
    }

    #[test]
    fn extended_stage_adds_tenths_of_subsquare() {
        let at = STAGES[3].refine(GeoCoordinate::new(0.0, 0.0), [9, 9]);
        assert_abs_diff_eq!(at.lon, 9.0 * 5.0 / 600.0, epsilon = 1e-12);
        assert_abs_diff_eq!(at.lat, 9.0 * 2.5 / 600.0, epsilon = 1e-12);
    }

    #[test]
    fn centre_is_half_a_cell() {
        for stage in &STAGES {
            assert_abs_diff_eq!(stage.centre.0 * 2.0, stage.step.0, epsilon = 1e-12);
            assert_abs_diff_eq!(stage.centre.1 * 2.0, stage.step.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn symbol_classes() {
        let field = Symbol::Letters(18);
        assert_eq!(field.index('a'), Some(0));
        assert_eq!(field.index('R'), Some(17));
        assert_eq!(field.index('S'), None);
        assert_eq!(field.index('5'), None);
        assert_eq!(Symbol::Letters(24).index('x'), Some(23));
        assert_eq!(Symbol::Digits.index('7'), Some(7));
        assert_eq!(Symbol::Digits.index('A'), None);
        assert_eq!(Symbol::Digits.index('Ⅶ'), None);
    }

    #[test]
    fn precision_lengths() {
        assert_eq!(Precision::from_len(6), Some(Precision::Subsquare));
        assert_eq!(Precision::from_len(5), None);
        assert_eq!(Precision::Extended.stage().precision, Precision::Extended);
        assert_eq!(Precision::Square.cell_size(), (2.0, 1.0));
    }
}
