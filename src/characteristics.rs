//! Method of characteristics for the inviscid Burgers equation u_t + u u_x = 0.
//!
//! Lines are built from sampled initial data, their pairwise crossings are
//! resolved into the earliest shock events, and the initial profile can be
//! advected up to the first shock.
pub mod domain;
pub mod errors;
pub mod initial_condition;
pub mod intersection;
pub mod line;
pub mod propagate;
pub mod shock_front;
pub mod shock_resolver;

pub use domain::Domain1d;
pub use errors::CharacteristicsError;
pub use initial_condition::InitialCondition;
pub use intersection::{CollisionEvent, intersect};
pub use line::{CharacteristicLine, CharacteristicSegment, Slope, build_lines};
pub use propagate::{PropagatedProfile, ProfilePoint, propagate, sample_initial_profile};
pub use shock_front::{DEFAULT_FRONT_SAMPLES, FrontPoint, FrontSamples, ShockFrontCurve, build_front};
pub use shock_resolver::{ShockFront, ShockResolver, resolve_shocks};
