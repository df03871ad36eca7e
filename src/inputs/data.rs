//! Simulator input structure supplied by the caller

use serde::{Deserialize, Serialize};

/// The six business inputs driving a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorInputs {
    /// Annual revenue of the retailer (currency units)
    pub annual_revenue: f64,

    /// Number of customers in the base
    pub customer_count: f64,

    /// Average basket value per transaction (currency units)
    pub average_basket: f64,

    /// Purchases per customer per year
    pub purchase_frequency: f64,

    /// Program budget as a percentage of annual revenue
    pub budget_pct: f64,

    /// Share of the program budget spent on rewards (0-100), remainder goes to marketing
    pub rewards_allocation: f64,
}

impl SimulatorInputs {
    pub fn new(
        annual_revenue: f64,
        customer_count: f64,
        average_basket: f64,
        purchase_frequency: f64,
        budget_pct: f64,
        rewards_allocation: f64,
    ) -> Self {
        Self {
            annual_revenue,
            customer_count,
            average_basket,
            purchase_frequency,
            budget_pct,
            rewards_allocation,
        }
    }

    /// Rewards share of the program budget as a fraction
    pub fn rewards_weight(&self) -> f64 {
        self.rewards_allocation / 100.0
    }

    /// Marketing share of the program budget as a fraction
    pub fn marketing_weight(&self) -> f64 {
        1.0 - self.rewards_weight()
    }

    /// Total program budget in currency units
    pub fn program_budget(&self) -> f64 {
        self.annual_revenue * (self.budget_pct / 100.0)
    }

    /// Revenue per customer per year before the program
    pub fn baseline_customer_revenue(&self) -> f64 {
        self.average_basket * self.purchase_frequency
    }
}
