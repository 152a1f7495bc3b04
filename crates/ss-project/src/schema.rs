//! Scenario schema definitions.

use serde::{Deserialize, Serialize};
use ss_controls::RiccatiConfig;
use ss_core::Real;
use ss_linalg::{ColumnVector2, Matrix2x2, RowVector2};
use ss_sim::{SimOptions, StateSpace};

pub const LATEST_VERSION: u32 = 1;

/// One plant, one run, and optionally an LQR design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub plant: PlantDef,
    pub run: RunDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lqr: Option<LqrDef>,
}

/// Plant matrices; `a` is row-major.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantDef {
    pub a: [Real; 4],
    pub b: [Real; 2],
    pub c: [Real; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    #[serde(default)]
    pub x0: [Real; 2],
    #[serde(default = "default_input")]
    pub u: Real,
    #[serde(default = "default_dt")]
    pub dt: Real,
    pub t_end: Real,
    #[serde(default)]
    pub initial_time: Real,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LqrDef {
    /// State weighting, row-major.
    pub q: [Real; 4],
    pub r: Real,
    /// Solver settings, written inline next to the weights.
    #[serde(flatten)]
    pub solver: RiccatiConfig,
}

fn default_input() -> Real {
    1.0
}

fn default_dt() -> Real {
    SimOptions::default().dt
}

impl Scenario {
    /// The unit-step demo: a damped oscillator driven by `u = 1` for 160 s,
    /// with `Q = diag(1, 2)` and `R = 1` for the regulator.
    pub fn reference() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "Reference step response".to_string(),
            plant: PlantDef {
                a: [0.0, 1.0, -3.0, -2.0],
                b: [0.0, 1.0],
                c: [1.0, 0.0],
            },
            run: RunDef {
                x0: [0.0, 0.0],
                u: 1.0,
                dt: 0.01,
                t_end: 160.0,
                initial_time: 0.0,
            },
            lqr: Some(LqrDef::new([1.0, 0.0, 0.0, 2.0], 1.0)),
        }
    }
}

impl PlantDef {
    pub fn state_space(&self) -> StateSpace {
        StateSpace::new(
            Matrix2x2::from(self.a),
            ColumnVector2::from(self.b),
            RowVector2::from(self.c),
        )
    }
}

impl RunDef {
    pub fn initial_state(&self) -> ColumnVector2 {
        ColumnVector2::from(self.x0)
    }

    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            dt: self.dt,
            t_end: self.t_end,
            initial_time: self.initial_time,
            ..Default::default()
        }
    }
}

impl LqrDef {
    /// Weights with default solver settings.
    pub fn new(q: [Real; 4], r: Real) -> Self {
        Self {
            q,
            r,
            solver: RiccatiConfig::default(),
        }
    }

    pub fn q_matrix(&self) -> Matrix2x2 {
        Matrix2x2::from(self.q)
    }

    pub fn riccati_config(&self) -> RiccatiConfig {
        self.solver
    }
}
