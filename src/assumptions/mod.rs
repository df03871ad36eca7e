//! Program assumptions: every tunable parameter of the projection

mod costs;
mod impact;
mod scoring;
pub mod loader;

pub use costs::{
    CapexSchedule, CostAssumptions, DEFAULT_ANNUAL_INFLATION, DEFAULT_CAPEX_BASE,
    DEFAULT_CAPEX_PER_TRANCHE, DEFAULT_CAPEX_TRANCHE_SIZE, DEFAULT_OPERATIONAL_SHARE,
};
pub use impact::{
    ImpactModel, RetentionCurve, YearImpacts, DEFAULT_ADOPTION_CAP, DEFAULT_ADOPTION_RAMP,
    DEFAULT_RETENTION_ANNUAL_STEP, DEFAULT_RETENTION_BASE, DEFAULT_UPLIFT_RAMP,
};
pub use scoring::{
    RiskLevel, RiskThresholds, SuccessScoring, DEFAULT_RISK_LOW_MAX, DEFAULT_RISK_MEDIUM_MAX,
    DEFAULT_SUCCESS_BASE, DEFAULT_SUCCESS_CEILING, DEFAULT_SUCCESS_FLOOR, MAX_SCORE_POINTS,
    SCORE_POINT_TERMS,
};
pub use loader::LoadedAssumptions;

use crate::error::{Result, SimulatorError};
use std::path::Path;

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgramAssumptions {
    pub capex: CapexSchedule,
    pub costs: CostAssumptions,
    pub scoring: SuccessScoring,
    pub risk: RiskThresholds,
    pub impact: ImpactModel,
    pub retention: RetentionCurve,
}

impl ProgramAssumptions {
    /// Standard pricing parameters
    pub fn default_pricing() -> Self {
        Self::default()
    }

    /// Load assumptions from CSV in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_loaded(&LoadedAssumptions::load_default()?)
    }

    /// Load assumptions from CSV in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    /// Apply loaded overrides on top of the standard pricing parameters
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self> {
        let mut assumptions = Self::default_pricing();
        for (term, value) in &loaded.parameters {
            assumptions.set_parameter(term, *value)?;
        }
        log::info!("Applied {} program parameter overrides", loaded.parameters.len());
        Ok(assumptions)
    }

    /// Override a single named parameter
    pub fn set_parameter(&mut self, term: &str, value: f64) -> Result<()> {
        if let Some(&field) = SCORE_POINT_TERMS.iter().find(|t| **t == term) {
            // Also rejects NaN
            if !(value.abs() <= MAX_SCORE_POINTS) {
                return Err(SimulatorError::OutOfRange {
                    field,
                    value,
                    min: -MAX_SCORE_POINTS,
                    max: MAX_SCORE_POINTS,
                });
            }
        }

        let known = self.capex.apply(term, value)
            || self.costs.apply(term, value)
            || self.scoring.apply(term, value)
            || self.risk.apply(term, value)
            || self.impact.apply(term, value)
            || self.retention.apply(term, value);

        if known {
            Ok(())
        } else {
            Err(SimulatorError::UnknownParameter { term: term.to_string() })
        }
    }
}
