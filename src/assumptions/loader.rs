//! CSV-based parameter loader
//!
//! Loads program parameter overrides from `program_parameters.csv`
//! (`term,value` rows) in data/assumptions/

use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File name of the parameter table inside the assumptions directory
pub const PARAMETERS_FILE: &str = "program_parameters.csv";

#[derive(Debug, Deserialize)]
struct ParameterRow {
    term: String,
    value: f64,
}

/// Load `(term, value)` pairs from the parameter table in `path`
pub fn load_program_parameters(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path.join(PARAMETERS_FILE))?;
    load_parameters_from_reader(file)
}

/// Load `(term, value)` pairs from any CSV reader, in file order
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut parameters = Vec::new();
    for result in reader.deserialize() {
        let row: ParameterRow = result?;
        parameters.push((row.term, row.value));
    }

    Ok(parameters)
}

/// Raw parameter overrides loaded from disk
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub parameters: Vec<(String, f64)>,
}

impl LoadedAssumptions {
    /// Load from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load from a specific directory
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            parameters: load_program_parameters(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_parameters() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load parameters: {:?}", result.err());

        let loaded = result.unwrap();
        assert!(loaded.parameters.len() >= 30);
        assert!(loaded
            .parameters
            .iter()
            .any(|(term, value)| term == "success_base" && *value == 63.0));
    }

    #[test]
    fn test_reader_skips_comments_and_trims() {
        let csv = "term,value\n# tuning\n capex_base , 25000\nadoption_cap,30\n";
        let parameters = load_parameters_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(
            parameters,
            vec![("capex_base".to_string(), 25_000.0), ("adoption_cap".to_string(), 30.0)]
        );
    }

    #[test]
    fn test_reader_rejects_bad_value() {
        let csv = "term,value\ncapex_base,lots\n";
        assert!(load_parameters_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let err = LoadedAssumptions::load_from(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(err, crate::error::SimulatorError::Io(_)));
    }
}
