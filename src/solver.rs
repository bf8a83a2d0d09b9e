use tracing::info;

use crate::characteristics::{
    CharacteristicLine, CharacteristicSegment, CharacteristicsError, Domain1d, PropagatedProfile, ShockFront,
    ShockFrontCurve, ShockResolver, build_front, build_lines, propagate, sample_initial_profile,
};

#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    pub left: f64,
    pub right: f64,
    pub t_max: f64,
    pub line_num: usize,
    pub profile_point_num: usize,
    pub front_point_num: usize,
    pub propagate_to_shock: bool,
    pub parallel: bool,
}
impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            left: -2.0,
            right: 2.0,
            t_max: 4.0,
            line_num: 40,
            profile_point_num: 1000,
            front_point_num: 50,
            propagate_to_shock: true,
            parallel: false,
        }
    }
}
pub struct CharacteristicsSolution {
    pub initial_profile: PropagatedProfile,
    /// One segment per sampled line, in origin order.
    pub segments: Vec<CharacteristicSegment>,
    pub shock_front: ShockFront,
    pub front_curve: Option<ShockFrontCurve>,
    pub shock_time: Option<f64>,
    pub shock_profile: Option<PropagatedProfile>,
}
pub struct CharacteristicsSolver<'a, F> {
    init_func: F,
    solver_params: &'a SolverParameters,
}
impl<'a, F> CharacteristicsSolver<'a, F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(init_func: F, solver_params: &'a SolverParameters) -> Self {
        Self {
            init_func,
            solver_params,
        }
    }
    pub fn solve(&self) -> Result<CharacteristicsSolution, CharacteristicsError> {
        let params = self.solver_params;
        if !params.t_max.is_finite() || params.t_max <= 0.0 {
            return Err(CharacteristicsError::InvalidTime(params.t_max));
        }
        if params.front_point_num < 2 {
            return Err(CharacteristicsError::InsufficientSamples {
                requested: params.front_point_num,
                minimum: 2,
            });
        }
        let domain = Domain1d::new(params.left, params.right)?;
        let profile_points = domain.sample(params.profile_point_num)?;
        let origins = domain.sample(params.line_num)?;
        let (profile_points, origins) = (profile_points.to_vec(), origins.to_vec());

        let initial_profile = sample_initial_profile(&self.init_func, &profile_points)?;
        let lines = build_lines(&self.init_func, &origins)?;
        let shock_front = ShockResolver::with_parallel(params.parallel).resolve(&lines);
        let segments = self.segments(&lines, &shock_front);
        let front_curve = build_front(&shock_front, params.front_point_num);
        let shock_time = shock_front.first_shock_time();
        match shock_time {
            Some(t_shock) => info!(t_shock, shocks = shock_front.len(), "first shock"),
            None => info!("no shock forms from the sampled characteristics"),
        }
        let shock_profile = match shock_time {
            Some(t_shock) if params.propagate_to_shock => {
                Some(propagate(&self.init_func, &profile_points, t_shock)?)
            }
            _ => None,
        };
        Ok(CharacteristicsSolution {
            initial_profile,
            segments,
            shock_front,
            front_curve,
            shock_time,
            shock_profile,
        })
    }
    // merged lines stop at their shock point, the others run to t_max
    fn segments(
        &self,
        lines: &[CharacteristicLine],
        shock_front: &ShockFront,
    ) -> Vec<CharacteristicSegment> {
        let t_max = self.solver_params.t_max;
        let mut shock_times = vec![None; lines.len()];
        for event in shock_front.events() {
            shock_times[event.ileft] = Some(event.shock_t);
            shock_times[event.iright] = Some(event.shock_t);
        }
        lines
            .iter()
            .zip(shock_times)
            .map(|(line, shock_t)| match shock_t {
                Some(t) if t <= t_max => line.segment(t, true),
                _ => line.segment(t_max, false),
            })
            .collect()
    }
}
