//! Area units recorded by the land registry.
//!
//! Every unit has a fixed size in square meters; conversion always goes
//! through m². `gunta` is 1/40 acre. `bigha` varies by region; we use the
//! 27 000 sq ft convention.

use std::fmt;
use std::str::FromStr;

const SQ_FOOT_M2: f64 = 0.092_903_04;
const ACRE_M2: f64 = 4_046.856_422_4;

/// Registry area unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
    Acre,
    Hectare,
    Gunta,
    Bigha,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareFoot,
        AreaUnit::Acre,
        AreaUnit::Hectare,
        AreaUnit::Gunta,
        AreaUnit::Bigha,
    ];

    /// Size of one unit in m².
    #[inline]
    pub fn square_meters(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareFoot => SQ_FOOT_M2,
            AreaUnit::Acre => ACRE_M2,
            AreaUnit::Hectare => 10_000.0,
            AreaUnit::Gunta => ACRE_M2 / 40.0,
            AreaUnit::Bigha => 27_000.0 * SQ_FOOT_M2,
        }
    }

    /// Express an area given in m² in this unit.
    #[inline]
    pub fn from_square_meters(self, m2: f64) -> f64 {
        m2 / self.square_meters()
    }

    /// Express `value` (in this unit) in m².
    #[inline]
    pub fn to_square_meters(self, value: f64) -> f64 {
        value * self.square_meters()
    }

    /// Convert `value` from one unit to another.
    #[inline]
    pub fn convert(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
        if from == to {
            return value;
        }
        to.from_square_meters(from.to_square_meters(value))
    }

    /// Canonical short name (`sqm`, `sqft`, ...).
    pub fn short_name(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "sqm",
            AreaUnit::SquareFoot => "sqft",
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "hectare",
            AreaUnit::Gunta => "gunta",
            AreaUnit::Bigha => "bigha",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Unknown area unit name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAreaUnitError {
    pub input: String,
}

impl fmt::Display for ParseAreaUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown area unit {:?} (expected one of sqm, sqft, acre, hectare, gunta, bigha)",
            self.input
        )
    }
}

impl std::error::Error for ParseAreaUnitError {}

impl FromStr for AreaUnit {
    type Err = ParseAreaUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "sqm" | "m2" | "sq_m" => AreaUnit::SquareMeter,
            "sqft" | "ft2" | "sq_ft" => AreaUnit::SquareFoot,
            "acre" | "acres" | "ac" => AreaUnit::Acre,
            "hectare" | "hectares" | "ha" => AreaUnit::Hectare,
            "gunta" | "guntha" => AreaUnit::Gunta,
            "bigha" => AreaUnit::Bigha,
            _ => {
                return Err(ParseAreaUnitError {
                    input: s.to_string(),
                })
            }
        };
        Ok(unit)
    }
}
