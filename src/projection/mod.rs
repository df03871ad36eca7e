//! Projection engine for the three-year loyalty program horizon

mod year;
mod state;
mod engine;
mod results;

pub use year::{ProgramYear, YearTable, HORIZON_MONTHS, HORIZON_YEARS, MONTHS_PER_YEAR};
pub use state::ProjectionState;
pub use engine::{ProgramBudget, ProjectionEngine};
pub use results::{SimulationResults, SimulationSummary, YearlyProjection};
