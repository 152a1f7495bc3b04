//! Linear-quadratic regulator design for two-state, single-input plants.
//!
//! The crate approximates the solution `P` of the continuous algebraic
//! Riccati equation
//!
//! ```text
//! Aᵗ P + P A − P M P + Q = 0,    M = (1/R) B Bᵗ
//! ```
//!
//! by pseudo-time and Newton steps under a hard iteration cap, and derives
//! the state feedback gain `K = (1/R) (Bᵗ P)ᵗ` so that `u = −Kᵗ x`.
//!
//! # Design Principles
//!
//! - **Best effort, reported honestly**: running out of iterations is not an
//!   error, but the returned solution carries a [`ConvergenceStatus`]
//! - **No silent NaN**: a zero or non-finite `R` and a diverging iterate are
//!   reported as errors instead of leaking Inf/NaN into the gain
//! - **Independent runs**: every solve owns its iterate, so parameter sweeps
//!   fan out across threads without locking

pub mod error;
pub mod lqr;
pub mod riccati;
pub mod sweep;

pub use error::{ControlError, ControlResult};
pub use lqr::{LqrGain, gain_from_riccati, lqr, lqr_with_config};
pub use riccati::{
    ConvergenceStatus, RESIDUAL_GROWTH_LIMIT, RiccatiConfig, RiccatiSolution, input_weight,
    riccati_residual, solve_lyapunov, solve_riccati,
};
pub use sweep::{LqrWeights, sweep_lqr};
