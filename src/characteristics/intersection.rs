use serde::Serialize;

use super::line::CharacteristicLine;

/// Crossing of two converging characteristics in the t >= 0 half-plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CollisionEvent {
    pub ileft: usize,
    pub iright: usize,
    pub left_origin: f64,
    pub right_origin: f64,
    pub shock_x: f64,
    pub shock_t: f64,
}
impl CollisionEvent {
    pub fn involves(&self, iline: usize) -> bool {
        self.ileft == iline || self.iright == iline
    }
}
/// Returns the crossing point of `a` and `b`, or `None` when the two lines do
/// not converge forward in time.
///
/// Lines only meet for t >= 0 when the left one is faster: u0(left) > u0(right).
/// Equal origins and equal values (parallel lines) never produce an event.
pub fn intersect(a: &CharacteristicLine, b: &CharacteristicLine) -> Option<CollisionEvent> {
    let (left, right) = if a.origin <= b.origin { (a, b) } else { (b, a) };
    if left.origin == right.origin {
        return None;
    }
    let v_left = left.value();
    let v_right = right.value();
    if v_left <= v_right {
        return None;
    }
    let shock_x = (right.origin * v_left - left.origin * v_right) / (v_left - v_right);
    // same as (shock_x - x_left) / v_left, but without dividing the rounding
    // error of shock_x by a near-zero speed; positive for distinct origins
    let shock_t = (right.origin - left.origin) / (v_left - v_right);
    Some(CollisionEvent {
        ileft: left.index,
        iright: right.index,
        left_origin: left.origin,
        right_origin: right.origin,
        shock_x,
        shock_t,
    })
}
