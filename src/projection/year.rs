//! Program years of the three-year projection horizon

use serde::{Deserialize, Serialize};

/// Number of program years projected
pub const HORIZON_YEARS: usize = 3;

/// Months in each program year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Months across the full horizon
pub const HORIZON_MONTHS: u32 = HORIZON_YEARS as u32 * MONTHS_PER_YEAR;

/// A per-year parameter table, indexed by `ProgramYear::index`
pub type YearTable = [f64; HORIZON_YEARS];

/// One of the three projected program years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgramYear {
    First,
    Second,
    Third,
}

impl ProgramYear {
    /// All program years in projection order
    pub const ALL: [ProgramYear; HORIZON_YEARS] =
        [ProgramYear::First, ProgramYear::Second, ProgramYear::Third];

    /// Zero-based year index (0, 1, 2)
    pub fn index(&self) -> usize {
        match self {
            ProgramYear::First => 0,
            ProgramYear::Second => 1,
            ProgramYear::Third => 2,
        }
    }

    /// One-based year number (1, 2, 3)
    pub fn number(&self) -> u32 {
        self.index() as u32 + 1
    }

    /// Projection month (1-based, continuous across years) of a month within this year
    pub fn projection_month(&self, month_in_year: u32) -> u32 {
        self.index() as u32 * MONTHS_PER_YEAR + month_in_year
    }
}
