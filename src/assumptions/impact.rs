//! Program impact model: basket and frequency uplift, adoption, and retention
//!
//! Impacts ramp up over the three-year horizon. Reward-heavy allocations favour
//! basket and frequency uplift, marketing-heavy allocations favour adoption.

use crate::projection::{ProgramYear, YearTable};

/// Uplift ramp applied to basket and frequency impacts, by program year
pub const DEFAULT_UPLIFT_RAMP: YearTable = [0.5, 0.75, 1.0];

/// Ramp applied to the adoption rate, by program year
pub const DEFAULT_ADOPTION_RAMP: YearTable = [0.8, 1.0, 1.1];

/// Adoption rate ceiling (percent of customers)
pub const DEFAULT_ADOPTION_CAP: f64 = 35.0;

pub const DEFAULT_RETENTION_BASE: f64 = 35.0;
pub const DEFAULT_RETENTION_ANNUAL_STEP: f64 = 7.5;

/// Percentage impacts for a single program year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearImpacts {
    /// Basket value uplift (%)
    pub basket: f64,
    /// Purchase frequency uplift (%)
    pub frequency: f64,
    /// Share of customers active in the program (%)
    pub adoption: f64,
}

/// Coefficients of the yearly impact calculation
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactModel {
    pub basket_base_uplift: f64,
    pub basket_rewards_slope: f64,
    pub frequency_base_uplift: f64,
    pub frequency_rewards_slope: f64,

    /// Budget percentage at which the budget multiplier reaches 1.0
    pub budget_pivot: f64,
    pub budget_multiplier_cap: f64,
    pub uplift_ramp: YearTable,

    pub adoption_base: f64,
    pub adoption_marketing_slope: f64,
    pub adoption_budget_slope: f64,
    pub adoption_ramp: YearTable,
    pub adoption_cap: f64,
}

impl Default for ImpactModel {
    fn default() -> Self {
        Self {
            basket_base_uplift: 10.0,
            basket_rewards_slope: 13.0,
            frequency_base_uplift: 8.0,
            frequency_rewards_slope: 16.0,
            budget_pivot: 4.0,
            budget_multiplier_cap: 1.5,
            uplift_ramp: DEFAULT_UPLIFT_RAMP,
            adoption_base: 15.0,
            adoption_marketing_slope: 10.0,
            adoption_budget_slope: 1.5,
            adoption_ramp: DEFAULT_ADOPTION_RAMP,
            adoption_cap: DEFAULT_ADOPTION_CAP,
        }
    }
}

impl ImpactModel {
    /// Budget scaling of the uplift, capped
    pub fn budget_multiplier(&self, budget_pct: f64) -> f64 {
        capped(budget_pct / self.budget_pivot, self.budget_multiplier_cap)
    }

    /// Basket, frequency and adoption impacts for one program year
    pub fn year_impacts(
        &self,
        budget_pct: f64,
        rewards_allocation: f64,
        year: ProgramYear,
    ) -> YearImpacts {
        let rewards_weight = rewards_allocation / 100.0;
        let marketing_weight = 1.0 - rewards_weight;
        let scale = self.budget_multiplier(budget_pct) * self.uplift_ramp[year.index()];

        let basket = (self.basket_base_uplift + rewards_weight * self.basket_rewards_slope) * scale;
        let frequency =
            (self.frequency_base_uplift + rewards_weight * self.frequency_rewards_slope) * scale;

        let adoption = self.adoption_base
            + marketing_weight * self.adoption_marketing_slope
            + budget_pct * self.adoption_budget_slope;

        YearImpacts {
            basket,
            frequency,
            adoption: capped(adoption * self.adoption_ramp[year.index()], self.adoption_cap),
        }
    }

    pub(crate) fn apply(&mut self, term: &str, value: f64) -> bool {
        match term {
            "basket_base_uplift" => self.basket_base_uplift = value,
            "basket_rewards_slope" => self.basket_rewards_slope = value,
            "frequency_base_uplift" => self.frequency_base_uplift = value,
            "frequency_rewards_slope" => self.frequency_rewards_slope = value,
            "budget_pivot" => self.budget_pivot = value,
            "budget_multiplier_cap" => self.budget_multiplier_cap = value,
            "uplift_ramp_year_1" => self.uplift_ramp[0] = value,
            "uplift_ramp_year_2" => self.uplift_ramp[1] = value,
            "uplift_ramp_year_3" => self.uplift_ramp[2] = value,
            "adoption_base" => self.adoption_base = value,
            "adoption_marketing_slope" => self.adoption_marketing_slope = value,
            "adoption_budget_slope" => self.adoption_budget_slope = value,
            "adoption_ramp_year_1" => self.adoption_ramp[0] = value,
            "adoption_ramp_year_2" => self.adoption_ramp[1] = value,
            "adoption_ramp_year_3" => self.adoption_ramp[2] = value,
            "adoption_cap" => self.adoption_cap = value,
            _ => return false,
        }
        true
    }
}

/// Linear retention heuristic, independent of the other projected fields
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionCurve {
    pub base: f64,
    pub annual_step: f64,
}

impl Default for RetentionCurve {
    fn default() -> Self {
        Self {
            base: DEFAULT_RETENTION_BASE,
            annual_step: DEFAULT_RETENTION_ANNUAL_STEP,
        }
    }
}

impl RetentionCurve {
    /// Retention rate (%) for a program year
    pub fn rate(&self, year: ProgramYear) -> f64 {
        self.base + year.index() as f64 * self.annual_step
    }

    pub(crate) fn apply(&mut self, term: &str, value: f64) -> bool {
        match term {
            "retention_base" => self.base = value,
            "retention_annual_step" => self.annual_step = value,
            _ => return false,
        }
        true
    }
}

/// `min(value, cap)` that lets NaN through instead of returning the cap
fn capped(value: f64, cap: f64) -> f64 {
    if value > cap {
        cap
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_impacts_ramp() {
        let model = ImpactModel::default();

        // rewards 60%, budget 4% -> multiplier 1.0
        let y1 = model.year_impacts(4.0, 60.0, ProgramYear::First);
        assert_relative_eq!(y1.basket, 8.9, epsilon = 1e-9);
        assert_relative_eq!(y1.frequency, 8.8, epsilon = 1e-9);
        assert_relative_eq!(y1.adoption, 20.0, epsilon = 1e-9);

        let y2 = model.year_impacts(4.0, 60.0, ProgramYear::Second);
        assert_relative_eq!(y2.basket, 13.35, epsilon = 1e-9);
        assert_relative_eq!(y2.frequency, 13.2, epsilon = 1e-9);
        assert_relative_eq!(y2.adoption, 25.0, epsilon = 1e-9);

        let y3 = model.year_impacts(4.0, 60.0, ProgramYear::Third);
        assert_relative_eq!(y3.basket, 17.8, epsilon = 1e-9);
        assert_relative_eq!(y3.frequency, 17.6, epsilon = 1e-9);
        assert_relative_eq!(y3.adoption, 27.5, epsilon = 1e-9);
    }

    #[test]
    fn test_budget_multiplier_capped() {
        let model = ImpactModel::default();

        assert_relative_eq!(model.budget_multiplier(2.0), 0.5);
        assert_relative_eq!(model.budget_multiplier(6.0), 1.5);
        assert_relative_eq!(model.budget_multiplier(20.0), 1.5);
        assert!(model.budget_multiplier(f64::NAN).is_nan());
    }

    #[test]
    fn test_adoption_capped_at_35() {
        let model = ImpactModel::default();

        // All-marketing, 10% budget: (15 + 10 + 15) * 1.1 = 44 -> 35
        let impacts = model.year_impacts(10.0, 0.0, ProgramYear::Third);
        assert_eq!(impacts.adoption, 35.0);
    }

    #[test]
    fn test_rewards_favour_uplift_marketing_favours_adoption() {
        let model = ImpactModel::default();

        let rewards_heavy = model.year_impacts(4.0, 90.0, ProgramYear::Second);
        let marketing_heavy = model.year_impacts(4.0, 10.0, ProgramYear::Second);

        assert!(rewards_heavy.basket > marketing_heavy.basket);
        assert!(rewards_heavy.frequency > marketing_heavy.frequency);
        assert!(marketing_heavy.adoption > rewards_heavy.adoption);
    }

    #[test]
    fn test_retention_linear() {
        let curve = RetentionCurve::default();

        assert_eq!(curve.rate(ProgramYear::First), 35.0);
        assert_eq!(curve.rate(ProgramYear::Second), 42.5);
        assert_eq!(curve.rate(ProgramYear::Third), 50.0);
    }
}
