//! Time-domain simulation of continuous LTI state-space models.
//!
//! Provides:
//! - `StateSpace` plant description `x' = A x + B u`, `y = C x`
//! - `TransientModel` trait and a constant-input model over a plant
//! - Fixed-step explicit Euler integrator
//! - Trajectory recording with open- and closed-loop entry points
//! - Step-response characteristics (peak, overshoot, steady state)

pub mod error;
pub mod integrator;
pub mod model;
pub mod response;
pub mod sim;
pub mod system;

pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator};
pub use model::{ConstantInput, TransientModel};
pub use response::ResponseCharacteristics;
pub use sim::{
    Sample, SimOptions, SimRecord, Trajectory, run_sim, simulate, simulate_closed_loop,
};
pub use system::StateSpace;
