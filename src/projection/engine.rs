//! Core projection engine for the three-year loyalty program projection

use super::results::{SimulationResults, YearlyProjection};
use super::state::ProjectionState;
use super::year::{ProgramYear, HORIZON_YEARS};
use crate::assumptions::ProgramAssumptions;
use crate::error::Result;
use crate::inputs::SimulatorInputs;

/// Year-1 split of the program budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramBudget {
    pub total: f64,
    pub rewards: f64,
    pub marketing: f64,
    /// Layered on top of rewards + marketing, not drawn from them
    pub operational: f64,
}

impl ProgramBudget {
    /// Split the program budget between rewards, marketing and operations
    pub fn split(inputs: &SimulatorInputs, operational_share: f64) -> Self {
        let total = inputs.program_budget();
        Self {
            total,
            rewards: total * inputs.rewards_weight(),
            marketing: total * inputs.marketing_weight(),
            operational: total * operational_share,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: ProgramAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions
    pub fn new(assumptions: ProgramAssumptions) -> Self {
        Self { assumptions }
    }

    /// Validate inputs, then project
    pub fn project_checked(&self, inputs: &SimulatorInputs) -> Result<SimulationResults> {
        inputs.validate()?;
        Ok(self.project(inputs))
    }

    /// Run the three-year projection
    ///
    /// No validation is performed: malformed inputs (negative, NaN) flow through
    /// the formulas and surface as non-finite or meaningless results.
    pub fn project(&self, inputs: &SimulatorInputs) -> SimulationResults {
        let annual_capex = self.assumptions.capex.annual_capex(inputs.annual_revenue);
        let budget = ProgramBudget::split(inputs, self.assumptions.costs.operational_share);
        log::debug!(
            "Program budget {:.2} (rewards {:.2}, marketing {:.2}, operational {:.2}), capex {:.2}",
            budget.total,
            budget.rewards,
            budget.marketing,
            budget.operational,
            annual_capex,
        );

        let success_probability = self
            .assumptions
            .scoring
            .success_probability(inputs.budget_pct, inputs.rewards_allocation);
        let risk_level = self.assumptions.risk.classify(inputs.budget_pct);

        let mut state = ProjectionState::new();
        let mut projections = Vec::with_capacity(HORIZON_YEARS);
        let mut total_incremental_revenue = 0.0;

        for year in ProgramYear::ALL {
            let projection = self.calculate_year(inputs, &budget, annual_capex, year);

            log::debug!(
                "Year {}: members={} revenue={:.2} cost={:.2} profit={:.2} roi={:.2}%",
                projection.year,
                projection.active_members,
                projection.incremental_revenue,
                projection.total_cost(),
                projection.net_profit,
                projection.roi,
            );

            total_incremental_revenue += projection.incremental_revenue;
            state.record_year(year, projection.net_profit);
            projections.push(projection);
        }

        let payback_months = state.payback_months();
        log::debug!(
            "Payback month {} (crossed: {}), cumulative profit {:.2}",
            payback_months,
            state.payback_month.is_some(),
            state.cumulative_profit,
        );

        let average_roi = projections.iter().map(|p| p.roi).sum::<f64>() / HORIZON_YEARS as f64;

        SimulationResults {
            projections,
            total_incremental_revenue,
            average_roi,
            payback_months,
            success_probability,
            risk_level,
            annual_capex,
        }
    }

    /// Calculate program economics for a single year
    fn calculate_year(
        &self,
        inputs: &SimulatorInputs,
        budget: &ProgramBudget,
        annual_capex: f64,
        year: ProgramYear,
    ) -> YearlyProjection {
        let impacts = self
            .assumptions
            .impact
            .year_impacts(inputs.budget_pct, inputs.rewards_allocation, year);

        let active_members = (inputs.customer_count * impacts.adoption / 100.0).round();

        let program_basket = inputs.average_basket * (1.0 + impacts.basket / 100.0);
        let program_frequency = inputs.purchase_frequency * (1.0 + impacts.frequency / 100.0);
        let program_customer_revenue = program_basket * program_frequency;
        let incremental_revenue =
            active_members * (program_customer_revenue - inputs.baseline_customer_revenue());

        // Capex is a flat yearly charge and is not inflated
        let inflation = self.assumptions.costs.inflation_factor(year);
        let rewards_cost = budget.rewards * inflation;
        let marketing_cost = budget.marketing * inflation;
        let operational_cost = budget.operational * inflation;

        let total_cost = rewards_cost + marketing_cost + operational_cost + annual_capex;
        let net_profit = incremental_revenue - total_cost;
        let roi = net_profit / total_cost * 100.0;

        YearlyProjection {
            year: year.number(),
            active_members,
            adoption_rate: impacts.adoption,
            program_basket,
            program_frequency,
            program_customer_revenue,
            incremental_revenue,
            rewards_cost,
            marketing_cost,
            operational_cost,
            capex: annual_capex,
            net_profit,
            roi,
            basket_impact: impacts.basket,
            frequency_impact: impacts.frequency,
            retention_rate: self.assumptions.retention.rate(year),
        }
    }
}
