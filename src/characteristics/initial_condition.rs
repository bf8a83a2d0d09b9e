use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named initial conditions u(x, 0) available from the parameter file and the CLI.
///
/// Any `Fn(f64) -> f64` can be used as an initial condition by the library;
/// this catalog only covers the profiles that can be selected by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum InitialCondition {
    /// 1 for x < 0, 0 for x >= 0
    Step,
    /// exp(-x^2)
    #[default]
    Gaussian,
    /// tanh(-x)
    Tanh,
    /// 1 for x <= 0, 1 - x on (0, 1], 0 for x > 1
    ShockWave,
    /// 0 for x <= 0, 1 for x > 0
    Rarefaction,
    /// 0 for x < 0, 1 on [0, 1], 0 for x > 1
    ShockRarefaction,
}
impl InitialCondition {
    pub const ALL: [InitialCondition; 6] = [
        InitialCondition::Step,
        InitialCondition::Gaussian,
        InitialCondition::Tanh,
        InitialCondition::ShockWave,
        InitialCondition::Rarefaction,
        InitialCondition::ShockRarefaction,
    ];
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            InitialCondition::Step => {
                if x < 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            InitialCondition::Gaussian => (-x * x).exp(),
            InitialCondition::Tanh => (-x).tanh(),
            InitialCondition::ShockWave => {
                if x <= 0.0 {
                    1.0
                } else if x <= 1.0 {
                    1.0 - x
                } else {
                    0.0
                }
            }
            InitialCondition::Rarefaction => {
                if x <= 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            InitialCondition::ShockRarefaction => {
                if (0.0..=1.0).contains(&x) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
    pub fn as_fn(self) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
        move |x| self.evaluate(x)
    }
    pub fn name(&self) -> &'static str {
        match self {
            InitialCondition::Step => "step",
            InitialCondition::Gaussian => "gaussian",
            InitialCondition::Tanh => "tanh",
            InitialCondition::ShockWave => "shock_wave",
            InitialCondition::Rarefaction => "rarefaction",
            InitialCondition::ShockRarefaction => "shock_rarefaction",
        }
    }
}
