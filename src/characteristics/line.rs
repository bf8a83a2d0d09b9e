use serde::Serialize;

use super::errors::CharacteristicsError;

/// Propagation speed of a characteristic. A zero speed is kept as its own
/// variant so the line equation never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Sloped(f64),
    Vertical,
}
impl Slope {
    pub fn from_value(value: f64) -> Self {
        if value == 0.0 {
            Slope::Vertical
        } else {
            Slope::Sloped(value)
        }
    }
}
/// Characteristic x(t) = x0 + u0(x0) t starting at the sampled origin x0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacteristicLine {
    pub index: usize,
    pub origin: f64,
    pub slope: Slope,
}
impl CharacteristicLine {
    pub fn new(index: usize, origin: f64, value: f64) -> Self {
        Self {
            index,
            origin,
            slope: Slope::from_value(value),
        }
    }
    pub fn from_initial_condition<F>(
        index: usize,
        origin: f64,
        init_func: &F,
    ) -> Result<Self, CharacteristicsError>
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        if !origin.is_finite() {
            return Err(CharacteristicsError::NonFiniteOrigin { index, origin });
        }
        let value = init_func(origin);
        if !value.is_finite() {
            return Err(CharacteristicsError::IllDefinedInitialCondition { x: origin, value });
        }
        Ok(Self::new(index, origin, value))
    }
    /// u0(x0), the value carried along the line.
    pub fn value(&self) -> f64 {
        match self.slope {
            Slope::Sloped(value) => value,
            Slope::Vertical => 0.0,
        }
    }
    pub fn is_vertical(&self) -> bool {
        matches!(self.slope, Slope::Vertical)
    }
    /// t = (x - x0) / u0(x0); undefined for a vertical line.
    pub fn time_at(&self, x: f64) -> Option<f64> {
        match self.slope {
            Slope::Sloped(value) => Some((x - self.origin) / value),
            Slope::Vertical => None,
        }
    }
    pub fn position_at(&self, t: f64) -> f64 {
        self.origin + self.value() * t
    }
    pub fn segment(&self, t_end: f64, terminated: bool) -> CharacteristicSegment {
        CharacteristicSegment {
            origin: self.origin,
            value: self.value(),
            x_start: self.origin,
            t_start: 0.0,
            x_end: self.position_at(t_end),
            t_end,
            terminated,
        }
    }
}
/// Straight piece of a characteristic in (x, t) space, ready to be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CharacteristicSegment {
    pub origin: f64,
    pub value: f64,
    pub x_start: f64,
    pub t_start: f64,
    pub x_end: f64,
    pub t_end: f64,
    /// true when the line ends in a shock instead of the display horizon
    pub terminated: bool,
}
pub fn build_lines<F>(init_func: &F, origins: &[f64]) -> Result<Vec<CharacteristicLine>, CharacteristicsError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    origins
        .iter()
        .enumerate()
        .map(|(index, &origin)| CharacteristicLine::from_initial_condition(index, origin, init_func))
        .collect()
}
