use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use super::errors::IoError;
use crate::characteristics::{PropagatedProfile, ShockFront, ShockFrontCurve};
use crate::solver::CharacteristicsSolution;

const PROFILE_HEADER: [&str; 2] = ["x", "u"];
const SEGMENT_HEADER: [&str; 7] = ["origin", "value", "x_start", "t_start", "x_end", "t_end", "terminated"];
const SHOCK_HEADER: [&str; 6] = ["ileft", "iright", "left_origin", "right_origin", "shock_x", "shock_t"];
const FRONT_HEADER: [&str; 2] = ["x", "t"];

// header is written up front so an empty table still carries it
fn write_rows<T, I>(rows: I, header: &[&str], file_path: &Path) -> Result<(), IoError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_path(file_path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
fn remove_stale(file_path: &Path) -> Result<(), IoError> {
    match fs::remove_file(file_path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(IoError::RemoveFile {
            path: file_path.display().to_string(),
            source,
        }),
    }
}
pub fn write_profile_to_csv(profile: &PropagatedProfile, file_path: &Path) -> Result<(), IoError> {
    write_rows(profile.iter(), &PROFILE_HEADER, file_path)
}
pub fn write_shocks_to_csv(shock_front: &ShockFront, file_path: &Path) -> Result<(), IoError> {
    write_rows(shock_front.events().iter(), &SHOCK_HEADER, file_path)
}
pub fn write_front_to_csv(curve: &ShockFrontCurve, file_path: &Path) -> Result<(), IoError> {
    write_rows(curve.iter(), &FRONT_HEADER, file_path)
}
/// Writes everything the plotting side needs into `output_dir`.
pub fn write_solution_to_csv(solution: &CharacteristicsSolution, output_dir: &Path) -> Result<(), IoError> {
    fs::create_dir_all(output_dir).map_err(|source| IoError::CreateDir {
        path: output_dir.display().to_string(),
        source,
    })?;
    write_profile_to_csv(&solution.initial_profile, &output_dir.join("initial_profile.csv"))?;
    write_rows(solution.segments.iter(), &SEGMENT_HEADER, &output_dir.join("characteristics.csv"))?;
    write_shocks_to_csv(&solution.shock_front, &output_dir.join("shocks.csv"))?;
    // optional outputs of an earlier run in the same directory must not survive
    let front_path = output_dir.join("shock_front.csv");
    match &solution.front_curve {
        Some(curve) => write_front_to_csv(curve, &front_path)?,
        None => remove_stale(&front_path)?,
    }
    let profile_path = output_dir.join("shock_profile.csv");
    match &solution.shock_profile {
        Some(profile) => write_profile_to_csv(profile, &profile_path)?,
        None => remove_stale(&profile_path)?,
    }
    Ok(())
}
