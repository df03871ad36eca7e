//! Projection output structures

use crate::assumptions::RiskLevel;
use serde::{Deserialize, Serialize};

/// Projected program economics for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Program year (1-3)
    pub year: u32,

    // Membership
    pub active_members: f64,
    pub adoption_rate: f64,

    // Program-state customer economics
    pub program_basket: f64,
    pub program_frequency: f64,
    pub program_customer_revenue: f64,
    pub incremental_revenue: f64,

    // Costs
    pub rewards_cost: f64,
    pub marketing_cost: f64,
    pub operational_cost: f64,
    pub capex: f64,

    // Returns
    pub net_profit: f64,
    pub roi: f64,

    // Impacts (%)
    pub basket_impact: f64,
    pub frequency_impact: f64,
    pub retention_rate: f64,
}

impl YearlyProjection {
    /// Inflated program spend plus capex
    pub fn total_cost(&self) -> f64 {
        self.rewards_cost + self.marketing_cost + self.operational_cost + self.capex
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Year 1 to year 3, in order
    pub projections: Vec<YearlyProjection>,

    /// Incremental revenue summed over the horizon
    pub total_incremental_revenue: f64,

    /// Mean of the yearly ROI percentages
    pub average_roi: f64,

    /// First month (1-36) with non-negative cumulative profit, 36 if never
    pub payback_months: u32,

    /// Heuristic success score (40-95)
    pub success_probability: u32,

    pub risk_level: RiskLevel,

    /// Fixed yearly capex, identical in every year
    pub annual_capex: f64,
}

impl SimulationResults {
    /// Get summary statistics
    pub fn summary(&self) -> SimulationSummary {
        let total_cost: f64 = self.projections.iter().map(|p| p.total_cost()).sum();
        let total_net_profit: f64 = self.projections.iter().map(|p| p.net_profit).sum();
        let final_active_members = self.projections.last().map(|p| p.active_members).unwrap_or(0.0);

        SimulationSummary {
            total_incremental_revenue: self.total_incremental_revenue,
            total_cost,
            total_net_profit,
            final_active_members,
        }
    }
}

/// Horizon totals derived from the yearly projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_incremental_revenue: f64,
    pub total_cost: f64,
    pub total_net_profit: f64,
    pub final_active_members: f64,
}
