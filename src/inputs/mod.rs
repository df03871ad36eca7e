//! Business inputs for a loyalty program projection

mod data;
mod validation;

pub use data::SimulatorInputs;
