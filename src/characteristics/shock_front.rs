use serde::Serialize;

use super::shock_resolver::ShockFront;

pub const DEFAULT_FRONT_SAMPLES: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrontPoint {
    pub x: f64,
    pub t: f64,
}
/// Piecewise-linear shock front through the accepted shock points, defined
/// only over the x-range the points span.
#[derive(Clone, Debug, PartialEq)]
pub struct ShockFrontCurve {
    nodes: Vec<FrontPoint>,
    sample_num: usize,
}
impl ShockFrontCurve {
    /// Shock points sorted by x.
    pub fn nodes(&self) -> &[FrontPoint] {
        &self.nodes
    }
    pub fn x_range(&self) -> (f64, f64) {
        (self.nodes[0].x, self.nodes[self.nodes.len() - 1].x)
    }
    pub fn sample_num(&self) -> usize {
        self.sample_num
    }
    pub fn first_shock_time(&self) -> f64 {
        self.nodes.iter().map(|p| p.t).fold(f64::INFINITY, f64::min)
    }
    /// Front time at `x`; `None` outside the spanned x-range.
    pub fn interpolate(&self, x: f64) -> Option<f64> {
        let (lo, hi) = self.x_range();
        if !(lo..=hi).contains(&x) {
            return None;
        }
        Some(self.evaluate(x))
    }
    pub fn iter(&self) -> FrontSamples<'_> {
        FrontSamples {
            curve: self,
            next: 0,
        }
    }
    // x must lie inside the node span
    fn evaluate(&self, x: f64) -> f64 {
        let nodes = &self.nodes;
        let i = nodes.partition_point(|p| p.x <= x);
        if i == 0 {
            return nodes[0].t;
        }
        if i == nodes.len() {
            return nodes[nodes.len() - 1].t;
        }
        let (p0, p1) = (nodes[i - 1], nodes[i]);
        p0.t + (p1.t - p0.t) * (x - p0.x) / (p1.x - p0.x)
    }
    fn sample_x(&self, k: usize) -> f64 {
        let (lo, hi) = self.x_range();
        if k + 1 == self.sample_num {
            return hi;
        }
        lo + (hi - lo) * k as f64 / (self.sample_num - 1) as f64
    }
}
/// Evenly spaced samples along a [`ShockFrontCurve`], computed on demand.
#[derive(Clone, Debug)]
pub struct FrontSamples<'a> {
    curve: &'a ShockFrontCurve,
    next: usize,
}
impl Iterator for FrontSamples<'_> {
    type Item = FrontPoint;
    fn next(&mut self) -> Option<FrontPoint> {
        if self.next >= self.curve.sample_num {
            return None;
        }
        let x = self.curve.sample_x(self.next);
        self.next += 1;
        Some(FrontPoint {
            x,
            t: self.curve.evaluate(x),
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.curve.sample_num.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for FrontSamples<'_> {}
impl<'a> IntoIterator for &'a ShockFrontCurve {
    type Item = FrontPoint;
    type IntoIter = FrontSamples<'a>;
    fn into_iter(self) -> FrontSamples<'a> {
        self.iter()
    }
}
/// Builds the shock front curve, or `None` when fewer than two shocks were
/// accepted since a single point does not define a front.
pub fn build_front(front: &ShockFront, sample_num: usize) -> Option<ShockFrontCurve> {
    if front.len() < 2 {
        return None;
    }
    let mut nodes: Vec<FrontPoint> = front
        .events()
        .iter()
        .map(|event| FrontPoint {
            x: event.shock_x,
            t: event.shock_t,
        })
        .collect();
    // stable, so equal x keeps time order
    nodes.sort_by(|a, b| a.x.total_cmp(&b.x));
    Some(ShockFrontCurve { nodes, sample_num })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::shock_resolver::resolve_shocks;
    use approx::assert_relative_eq;

    fn two_shock_front() -> ShockFront {
        let f = |x: f64| match x {
            x if x < -2.0 => 1.0,
            x if x < 0.0 => 0.0,
            x if x < 2.0 => 1.0,
            _ => 0.0,
        };
        resolve_shocks(&f, &[-3.0, -1.0, 1.0, 3.0]).unwrap()
    }

    #[test]
    fn test_single_shock_has_no_curve() {
        let step = |x: f64| if x < 0.0 { 1.0 } else { 0.0 };
        let front = resolve_shocks(&step, &[-1.0, 1.0]).unwrap();
        assert_eq!(front.len(), 1);
        assert!(build_front(&front, DEFAULT_FRONT_SAMPLES).is_none());
        assert!(build_front(&ShockFront::default(), DEFAULT_FRONT_SAMPLES).is_none());
    }

    #[test]
    fn test_samples_span_shock_points() {
        let curve = build_front(&two_shock_front(), 5).unwrap();
        assert_eq!(curve.x_range(), (-1.0, 3.0));
        let samples: Vec<FrontPoint> = curve.iter().collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].x, -1.0);
        assert_eq!(samples[4].x, 3.0);
        for p in &samples {
            assert_relative_eq!(p.t, 2.0, epsilon = 1e-14);
        }
        assert_eq!(curve.first_shock_time(), 2.0);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let curve = build_front(&two_shock_front(), 7).unwrap();
        let first: Vec<FrontPoint> = curve.iter().collect();
        let second: Vec<FrontPoint> = (&curve).into_iter().collect();
        assert_eq!(first, second);
        let mut samples = curve.iter();
        samples.next();
        assert_eq!(samples.len(), 6);
        let resumed = samples.clone();
        assert_eq!(samples.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
    }

    #[test]
    fn test_piecewise_linear_without_extrapolation() {
        let gaussian = |x: f64| (-x * x).exp();
        let origins: Vec<f64> = (0..40).map(|i| -2.0 + 4.0 * i as f64 / 39.0).collect();
        let front = resolve_shocks(&gaussian, &origins).unwrap();
        let curve = build_front(&front, DEFAULT_FRONT_SAMPLES).unwrap();
        assert_eq!(curve.iter().count(), DEFAULT_FRONT_SAMPLES);
        assert!(curve.nodes().windows(2).all(|w| w[0].x <= w[1].x));
        assert_relative_eq!(curve.first_shock_time(), front.first_shock_time().unwrap());

        let (lo, hi) = curve.x_range();
        assert_eq!(curve.interpolate(lo - 1e-9), None);
        assert_eq!(curve.interpolate(hi + 1e-9), None);
        for node in curve.nodes().windows(2) {
            let (p0, p1) = (node[0], node[1]);
            if p1.x > p0.x {
                let mid = curve.interpolate(0.5 * (p0.x + p1.x)).unwrap();
                assert_relative_eq!(mid, 0.5 * (p0.t + p1.t), epsilon = 1e-12);
            }
        }
        for p in curve.iter() {
            let t_min = curve.nodes().iter().map(|n| n.t).fold(f64::INFINITY, f64::min);
            let t_max = curve.nodes().iter().map(|n| n.t).fold(f64::NEG_INFINITY, f64::max);
            assert!(p.t >= t_min - 1e-12 && p.t <= t_max + 1e-12);
        }
    }
}
