use ndarray::Array1;

use super::errors::CharacteristicsError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain1d {
    pub left: f64,
    pub right: f64,
}
impl Domain1d {
    pub fn new(left: f64, right: f64) -> Result<Self, CharacteristicsError> {
        if !left.is_finite() || !right.is_finite() || left >= right {
            return Err(CharacteristicsError::InvalidDomain { left, right });
        }
        Ok(Self { left, right })
    }
    pub fn length(&self) -> f64 {
        self.right - self.left
    }
    /// Evenly spaced points from `left` to `right`, both ends included.
    pub fn sample(&self, point_num: usize) -> Result<Array1<f64>, CharacteristicsError> {
        if point_num < 2 {
            return Err(CharacteristicsError::InsufficientSamples {
                requested: point_num,
                minimum: 2,
            });
        }
        Ok(Array1::linspace(self.left, self.right, point_num))
    }
}
