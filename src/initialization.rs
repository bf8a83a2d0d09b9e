use std::path::Path;

use tracing::{debug, warn};

use crate::{
    characteristics::InitialCondition,
    io::{errors::IoError, param_parser::SolverParamParser},
};

pub const DEFAULT_PARAM_FILE: &str = "inputs/params.json";

/// Reads the parameter file. Without an explicit path the default file is
/// used when present, otherwise built-in defaults apply.
pub fn initialize_params(file_path: Option<&str>) -> Result<SolverParamParser, IoError> {
    match file_path {
        Some(file_path) => SolverParamParser::parse(file_path),
        None if Path::new(DEFAULT_PARAM_FILE).exists() => {
            debug!(file = DEFAULT_PARAM_FILE, "reading default parameter file");
            SolverParamParser::parse(DEFAULT_PARAM_FILE)
        }
        None => {
            warn!(file = DEFAULT_PARAM_FILE, "parameter file not found, using built-in defaults");
            Ok(SolverParamParser::default())
        }
    }
}
pub fn apply_overrides(
    mut param: SolverParamParser,
    initial_condition: Option<InitialCondition>,
    output_dir: Option<String>,
) -> SolverParamParser {
    if let Some(initial_condition) = initial_condition {
        param.initial_condition = initial_condition;
    }
    if let Some(output_dir) = output_dir {
        param.output_dir = output_dir;
    }
    param
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let param = SolverParamParser::default();
        let param = apply_overrides(param, Some(InitialCondition::Tanh), None);
        assert_eq!(param.initial_condition, InitialCondition::Tanh);
        assert_eq!(param.output_dir, "outputs");
        let param = apply_overrides(param, None, Some("runs/tanh".to_string()));
        assert_eq!(param.initial_condition, InitialCondition::Tanh);
        assert_eq!(param.output_dir, "runs/tanh");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        assert!(initialize_params(Some("missing/params.json")).is_err());
    }
}
