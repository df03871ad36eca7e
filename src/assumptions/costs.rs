//! Program cost assumptions: capex tranches, operational share, and cost inflation

use crate::projection::ProgramYear;

/// Fixed yearly infrastructure cost charged regardless of revenue
pub const DEFAULT_CAPEX_BASE: f64 = 20_000.0;

/// Revenue step at which another capex tranche is added
pub const DEFAULT_CAPEX_TRANCHE_SIZE: f64 = 10_000_000.0;

/// Cost of each additional tranche
pub const DEFAULT_CAPEX_PER_TRANCHE: f64 = 10_000.0;

/// Operational spend as a fraction of the program budget, on top of rewards + marketing
pub const DEFAULT_OPERATIONAL_SHARE: f64 = 0.10;

/// Annual inflation applied to program spend (not to capex)
pub const DEFAULT_ANNUAL_INFLATION: f64 = 0.03;

/// Revenue-tiered capex step function
#[derive(Debug, Clone, PartialEq)]
pub struct CapexSchedule {
    pub base: f64,
    pub tranche_size: f64,
    pub per_tranche: f64,
}

impl Default for CapexSchedule {
    fn default() -> Self {
        Self {
            base: DEFAULT_CAPEX_BASE,
            tranche_size: DEFAULT_CAPEX_TRANCHE_SIZE,
            per_tranche: DEFAULT_CAPEX_PER_TRANCHE,
        }
    }
}

impl CapexSchedule {
    /// Annual capex for the given revenue: base + one tranche per full revenue step
    pub fn annual_capex(&self, annual_revenue: f64) -> f64 {
        let tranches = (annual_revenue / self.tranche_size).floor();
        self.base + tranches * self.per_tranche
    }

    pub(crate) fn apply(&mut self, term: &str, value: f64) -> bool {
        match term {
            "capex_base" => self.base = value,
            "capex_tranche_size" => self.tranche_size = value,
            "capex_per_tranche" => self.per_tranche = value,
            _ => return false,
        }
        true
    }
}

/// Spend split and inflation for the program budget
#[derive(Debug, Clone, PartialEq)]
pub struct CostAssumptions {
    /// Operational share of the program budget (additive, not drawn from the 100%)
    pub operational_share: f64,

    /// Annual inflation on rewards, marketing and operational spend
    pub annual_inflation: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            operational_share: DEFAULT_OPERATIONAL_SHARE,
            annual_inflation: DEFAULT_ANNUAL_INFLATION,
        }
    }
}

impl CostAssumptions {
    /// Compounded inflation factor for a program year (1.0 in year 1)
    pub fn inflation_factor(&self, year: ProgramYear) -> f64 {
        (1.0 + self.annual_inflation).powi(year.index() as i32)
    }

    pub(crate) fn apply(&mut self, term: &str, value: f64) -> bool {
        match term {
            "operational_share" => self.operational_share = value,
            "annual_inflation" => self.annual_inflation = value,
            _ => return false,
        }
        true
    }
}
