use std::fs;

use serde::Deserialize;

use super::errors::IoError;
use crate::characteristics::InitialCondition;
use crate::solver::SolverParameters;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverParamParser {
    pub left: f64,
    pub right: f64,
    pub t_max: f64,
    pub line_num: usize,
    pub profile_point_num: usize,
    pub front_point_num: usize,
    pub initial_condition: InitialCondition,
    pub propagate_to_shock: bool,
    pub parallel: bool,
    pub output_dir: String,
}
impl Default for SolverParamParser {
    fn default() -> Self {
        let defaults = SolverParameters::default();
        Self {
            left: defaults.left,
            right: defaults.right,
            t_max: defaults.t_max,
            line_num: defaults.line_num,
            profile_point_num: defaults.profile_point_num,
            front_point_num: defaults.front_point_num,
            initial_condition: InitialCondition::default(),
            propagate_to_shock: defaults.propagate_to_shock,
            parallel: defaults.parallel,
            output_dir: "outputs".to_string(),
        }
    }
}
impl SolverParamParser {
    pub fn parse(file_path: &str) -> Result<Self, IoError> {
        let file_content = fs::read_to_string(file_path).map_err(|source| IoError::Read {
            path: file_path.to_string(),
            source,
        })?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(content)?)
    }
    pub fn solver_parameters(&self) -> SolverParameters {
        SolverParameters {
            left: self.left,
            right: self.right,
            t_max: self.t_max,
            line_num: self.line_num,
            profile_point_num: self.profile_point_num,
            front_point_num: self.front_point_num,
            propagate_to_shock: self.propagate_to_shock,
            parallel: self.parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_fields_take_defaults() {
        let param = SolverParamParser::parse_str(
            r#"{ "line_num": 21, "initial_condition": "shock_rarefaction", "parallel": true }"#,
        )
        .unwrap();
        assert_eq!(param.line_num, 21);
        assert_eq!(param.initial_condition, InitialCondition::ShockRarefaction);
        assert!(param.parallel);
        assert_eq!(param.left, -2.0);
        assert_eq!(param.output_dir, "outputs");
        let solver_params = param.solver_parameters();
        assert_eq!(solver_params.t_max, 4.0);
        assert_eq!(solver_params.line_num, 21);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "left": -1.0, "right": 3.0, "t_max": 2.5 }}"#).unwrap();
        let param = SolverParamParser::parse(file.path().to_str().unwrap()).unwrap();
        assert_eq!(param.left, -1.0);
        assert_eq!(param.right, 3.0);
        assert_eq!(param.t_max, 2.5);
        assert_eq!(param.initial_condition, InitialCondition::Gaussian);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SolverParamParser::parse("does/not/exist.json"),
            Err(IoError::Read { .. })
        ));
        assert!(matches!(
            SolverParamParser::parse_str(r#"{ "initial_condition": "sawtooth" }"#),
            Err(IoError::Parse(_))
        ));
        assert!(matches!(
            SolverParamParser::parse_str(r#"{ "line_count": 3 }"#),
            Err(IoError::Parse(_))
        ));
    }
}
