//! Strict input checks applied before a checked projection
//!
//! The unchecked engine path accepts anything and lets malformed values
//! propagate as non-finite results. This layer rejects them up front.

use super::SimulatorInputs;
use crate::error::{Result, SimulatorError};

/// Allowed range for the rewards allocation percentage
pub const REWARDS_ALLOCATION_RANGE: (f64, f64) = (0.0, 100.0);

impl SimulatorInputs {
    /// Reject non-finite, negative, or out-of-range inputs
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("annual_revenue", self.annual_revenue),
            ("customer_count", self.customer_count),
            ("average_basket", self.average_basket),
            ("purchase_frequency", self.purchase_frequency),
            ("budget_pct", self.budget_pct),
            ("rewards_allocation", self.rewards_allocation),
        ];

        for (field, value) in fields {
            check_finite(field, value)?;
            check_non_negative(field, value)?;
        }

        check_positive("annual_revenue", self.annual_revenue)?;
        check_positive("average_basket", self.average_basket)?;

        let (min, max) = REWARDS_ALLOCATION_RANGE;
        if self.rewards_allocation > max {
            return Err(reject(SimulatorError::OutOfRange {
                field: "rewards_allocation",
                value: self.rewards_allocation,
                min,
                max,
            }));
        }

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(SimulatorError::NonFinite { field }))
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        Err(reject(SimulatorError::Negative { field, value }))
    } else {
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(reject(SimulatorError::NotPositive { field, value }))
    }
}

fn reject(err: SimulatorError) -> SimulatorError {
    log::warn!("Rejected simulator inputs: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> SimulatorInputs {
        SimulatorInputs::new(10_000_000.0, 100_000.0, 50.0, 12.0, 4.0, 60.0)
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(valid_inputs().validate().is_ok());

        // Zero customers and zero budget are legal, just unprofitable
        let inputs = SimulatorInputs {
            customer_count: 0.0,
            budget_pct: 0.0,
            rewards_allocation: 100.0,
            ..valid_inputs()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_rejects_nan() {
        let inputs = SimulatorInputs { purchase_frequency: f64::NAN, ..valid_inputs() };
        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, SimulatorError::NonFinite { field: "purchase_frequency" }));
    }

    #[test]
    fn test_rejects_infinite_budget() {
        let inputs = SimulatorInputs { budget_pct: f64::INFINITY, ..valid_inputs() };
        assert!(matches!(
            inputs.validate(),
            Err(SimulatorError::NonFinite { field: "budget_pct" })
        ));
    }

    #[test]
    fn test_rejects_negative_customers() {
        let inputs = SimulatorInputs { customer_count: -5.0, ..valid_inputs() };
        match inputs.validate() {
            Err(SimulatorError::Negative { field, value }) => {
                assert_eq!(field, "customer_count");
                assert_eq!(value, -5.0);
            }
            other => panic!("Expected Negative error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_revenue() {
        let inputs = SimulatorInputs { annual_revenue: 0.0, ..valid_inputs() };
        assert!(matches!(
            inputs.validate(),
            Err(SimulatorError::NotPositive { field: "annual_revenue", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_basket() {
        let inputs = SimulatorInputs { average_basket: 0.0, ..valid_inputs() };
        match inputs.validate() {
            Err(SimulatorError::NotPositive { field, value }) => {
                assert_eq!(field, "average_basket");
                assert_eq!(value, 0.0);
            }
            other => panic!("Expected NotPositive error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_rewards_allocation_above_100() {
        let inputs = SimulatorInputs { rewards_allocation: 120.0, ..valid_inputs() };
        let err = inputs.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "rewards_allocation must be between 0 and 100, got 120"
        );
    }
}
