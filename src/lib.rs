//! Loyalty Simulator - Three-year financial projection engine for retail loyalty programs
//!
//! This library provides:
//! - Program adoption, basket and frequency uplift by year
//! - Cost build-up (rewards, marketing, operations, capex) with inflation
//! - Net profit, ROI and payback period
//! - Heuristic risk tier and success probability
//! - Tunable program assumptions loaded from CSV
//! - Currency and number display helpers

pub mod error;
pub mod inputs;
pub mod assumptions;
pub mod projection;
pub mod format;

// Re-export commonly used types
pub use error::{Result, SimulatorError};
pub use inputs::SimulatorInputs;
pub use assumptions::{ProgramAssumptions, RiskLevel};
pub use projection::{ProjectionEngine, SimulationResults, YearlyProjection};
pub use format::{format_currency, format_number, NumberFormat};

/// Project `inputs` with the standard pricing assumptions, without validation
pub fn run_simulation(inputs: &SimulatorInputs) -> SimulationResults {
    ProjectionEngine::default().project(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_simulation_uses_standard_pricing() {
        let inputs = SimulatorInputs::new(10_000_000.0, 100_000.0, 50.0, 12.0, 4.0, 60.0);
        let results = run_simulation(&inputs);

        assert_eq!(results.success_probability, 85);
        assert_eq!(results.risk_level.label(), "Medium");
        assert_eq!(format_currency(results.annual_capex, &NumberFormat::en_us()), "$30,000");
    }

    #[test]
    fn test_results_serialize_risk_label() {
        let inputs = SimulatorInputs::new(5_000_000.0, 10_000.0, 20.0, 4.0, 1.0, 80.0);
        let json = serde_json::to_value(run_simulation(&inputs)).unwrap();

        assert_eq!(json["risk_level"], "Low");
        assert_eq!(json["success_probability"], 56);
        assert_eq!(json["projections"].as_array().unwrap().len(), 3);
    }
}
