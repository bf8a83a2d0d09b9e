use ndarray::{Array1, Zip};
use serde::Serialize;

use super::{errors::CharacteristicsError, line::build_lines};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub x: f64,
    pub u: f64,
}
/// Solution snapshot obtained by moving every sampled value along its
/// characteristic. Past the first shock the x coordinates may fold over.
#[derive(Clone, Debug, PartialEq)]
pub struct PropagatedProfile {
    pub time: f64,
    pub x: Array1<f64>,
    pub u: Array1<f64>,
}
impl PropagatedProfile {
    pub fn len(&self) -> usize {
        self.x.len()
    }
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = ProfilePoint> + '_ {
        self.x
            .iter()
            .zip(self.u.iter())
            .map(|(&x, &u)| ProfilePoint { x, u })
    }
    /// true while advected positions keep the ordering of their origins
    pub fn is_single_valued(&self) -> bool {
        self.x.windows(2).into_iter().all(|w| w[0] <= w[1])
    }
}
pub fn propagate<F>(init_func: &F, origins: &[f64], t: f64) -> Result<PropagatedProfile, CharacteristicsError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    if !t.is_finite() || t < 0.0 {
        return Err(CharacteristicsError::InvalidTime(t));
    }
    let lines = build_lines(init_func, origins)?;
    let u: Array1<f64> = lines.iter().map(|line| line.value()).collect();
    let x0 = Array1::from_vec(origins.to_vec());
    let x = Zip::from(&x0).and(&u).map_collect(|&x0, &u| x0 + u * t);
    Ok(PropagatedProfile { time: t, x, u })
}
/// Initial profile u(x, 0) on the given points.
pub fn sample_initial_profile<F>(init_func: &F, points: &[f64]) -> Result<PropagatedProfile, CharacteristicsError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    propagate(init_func, points, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_time_is_identity() {
        let origins = [-2.0, -0.7, 0.0, 0.3, 1.9];
        let f = |x: f64| (3.0 * x).sin() - 0.5;
        let profile = propagate(&f, &origins, 0.0).unwrap();
        assert_eq!(profile.len(), origins.len());
        for (point, &x0) in profile.iter().zip(origins.iter()) {
            assert_eq!(point.x, x0);
            assert_eq!(point.u, f(x0));
        }
        assert_eq!(sample_initial_profile(&f, &origins).unwrap(), profile);
    }

    #[test]
    fn test_advection_along_characteristics() {
        let step = |x: f64| if x < 0.0 { 1.0 } else { 0.0 };
        let profile = propagate(&step, &[-1.0, -0.5, 0.5, 1.0], 0.5).unwrap();
        assert_eq!(profile.x.to_vec(), vec![-0.5, 0.0, 0.5, 1.0]);
        assert_eq!(profile.u.to_vec(), vec![1.0, 1.0, 0.0, 0.0]);
        assert!(profile.is_single_valued());
        assert_eq!(profile.time, 0.5);
    }

    #[test]
    fn test_past_first_shock_profile_folds() {
        let step = |x: f64| if x < 0.0 { 1.0 } else { 0.0 };
        // lines from -1 and 1 meet at t = 2
        let profile = propagate(&step, &[-1.0, 1.0], 3.0).unwrap();
        assert_eq!(profile.x.to_vec(), vec![2.0, 1.0]);
        assert!(!profile.is_single_valued());
    }

    #[test]
    fn test_invalid_time() {
        let f = |x: f64| x;
        assert_eq!(propagate(&f, &[0.0], -1.0), Err(CharacteristicsError::InvalidTime(-1.0)));
        assert!(propagate(&f, &[0.0], f64::INFINITY).is_err());
    }
}
