//! Iterative solver for the continuous algebraic Riccati equation.
//!
//! The iterate starts at `P₀ = Q` and is driven towards a zero of the
//! Riccati right-hand side
//!
//! ```text
//! F(P) = Aᵗ P + P A − P M P + Q
//! ```
//!
//! until `‖F(P)‖_F < tolerance` or the iteration budget runs out. Every
//! update solves a 2x2 Lyapunov equation in closed form, using the closed
//! loop `A_cl = A − M P` of the current iterate:
//!
//! - while `A_cl` is not Hurwitz, a linearly implicit pseudo-time step of
//!   length `h` (the relaxation factor)
//!   `(A_cl − I/2h)ᵗ ΔP + ΔP (A_cl − I/2h) + F(P) = 0`, `P ← P + ΔP`
//! - once `A_cl` is Hurwitz, a Newton (Kleinman) step
//!   `A_clᵗ P' + P' A_cl + Q + P M P = 0`, `P ← P'`
//!
//! A pseudo-time step that overflows, hits a singular shift or grows the
//! residual more than [`RESIDUAL_GROWTH_LIMIT`] times is rejected and `h`
//! is multiplied by the cutback factor. Rejected steps count against the
//! iteration budget.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};
use ss_core::{Real, ensure_finite, ensure_nonzero};
use ss_linalg::{ColumnVector2, Matrix2x2};
use tracing::{debug, warn};

/// A pseudo-time step may grow `‖F‖` by at most this factor.
pub const RESIDUAL_GROWTH_LIMIT: Real = 100.0;

/// Riccati iteration configuration. Missing fields deserialize to their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiccatiConfig {
    /// Maximum number of updates, rejected steps included.
    pub max_iterations: usize,
    /// Frobenius-norm threshold on the Riccati residual `‖F(P)‖`.
    pub tolerance: Real,
    /// Initial pseudo-time step `h`.
    pub relaxation: Real,
    /// Consecutive rejected steps allowed before giving up.
    pub max_cutbacks: usize,
    /// Factor applied to `h` on each rejected step, in (0, 1).
    pub cutback_factor: Real,
}

impl Default for RiccatiConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
            relaxation: 0.1,
            max_cutbacks: 8,
            cutback_factor: 0.5,
        }
    }
}

impl RiccatiConfig {
    pub fn validate(&self) -> ControlResult<()> {
        if self.max_iterations == 0 {
            return Err(ControlError::InvalidArg {
                what: "max_iterations must be positive",
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ControlError::InvalidArg {
                what: "tolerance must be positive",
            });
        }
        if !(self.relaxation.is_finite() && self.relaxation > 0.0) {
            return Err(ControlError::InvalidArg {
                what: "relaxation must be positive",
            });
        }
        if !(self.cutback_factor > 0.0 && self.cutback_factor < 1.0) {
            return Err(ControlError::InvalidArg {
                what: "cutback_factor must be in (0, 1)",
            });
        }
        Ok(())
    }
}

/// How the iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    /// The residual fell below tolerance.
    Converged,
    /// The budget ran out; `p` is the last iterate.
    IterationsExhausted,
}

/// Outcome of a Riccati solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiccatiSolution {
    /// Final iterate.
    pub p: Matrix2x2,
    /// Updates performed, rejected steps included.
    pub iterations: usize,
    /// How many of the accepted updates were Newton steps.
    pub newton_steps: usize,
    /// `‖F(p)‖_F` of the final iterate.
    pub residual: Real,
    /// Pseudo-time step in effect at the end.
    pub relaxation: Real,
    pub status: ConvergenceStatus,
}

impl RiccatiSolution {
    pub fn converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

/// Input weighting `M = (1/R) · B · Bᵗ`.
pub fn input_weight(b: &ColumnVector2, r: Real) -> ControlResult<Matrix2x2> {
    let r = ensure_nonzero(r, "R must be finite and non-zero")?;
    Ok(b.outer(&b.transpose()) * (1.0 / r))
}

fn riccati_rhs(
    a: &Matrix2x2,
    at: &Matrix2x2,
    m: &Matrix2x2,
    q: &Matrix2x2,
    p: &Matrix2x2,
) -> Matrix2x2 {
    *at * *p + *p * *a - *p * *m * *p + *q
}

/// Frobenius norm of `Aᵗ P + P A − P M P + Q` for a candidate `P`.
pub fn riccati_residual(
    a: &Matrix2x2,
    b: &ColumnVector2,
    q: &Matrix2x2,
    r: Real,
    p: &Matrix2x2,
) -> ControlResult<Real> {
    let m = input_weight(b, r)?;
    Ok(riccati_rhs(a, &a.transpose(), &m, q, p).norm())
}

/// Solve `Aᵗ X + X A + W = 0` in closed form.
///
/// With `t = tr A`, `d = det A` and `N = A − t·I`,
/// `X = −(d·W + Nᵗ W N) / (2 t d)`. Returns `None` when `A` has a zero
/// eigenvalue or two eigenvalues summing to zero, where the equation has
/// no unique solution.
pub fn solve_lyapunov(a: &Matrix2x2, w: &Matrix2x2) -> Option<Matrix2x2> {
    let t = a.trace();
    let d = a.determinant();
    let denom = 2.0 * t * d;
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let n = *a - Matrix2x2::identity() * t;
    let x = (*w * d + n.transpose() * *w * n) * (-1.0 / denom);
    x.is_finite().then_some(x)
}

fn check_inputs(a: &Matrix2x2, b: &ColumnVector2, q: &Matrix2x2) -> ControlResult<()> {
    if !a.is_finite() {
        return Err(ControlError::InvalidArg {
            what: "A must be finite",
        });
    }
    if !b.is_finite() {
        return Err(ControlError::InvalidArg {
            what: "B must be finite",
        });
    }
    if !q.is_finite() {
        return Err(ControlError::InvalidArg {
            what: "Q must be finite",
        });
    }
    Ok(())
}

/// Residual state carried between updates.
struct Iterate {
    p: Matrix2x2,
    f: Matrix2x2,
    residual: Real,
}

impl Iterate {
    fn new(p: Matrix2x2, a: &Matrix2x2, at: &Matrix2x2, m: &Matrix2x2, q: &Matrix2x2) -> Self {
        let f = riccati_rhs(a, at, m, q, &p);
        Self {
            p,
            residual: f.norm(),
            f,
        }
    }

    fn finish(
        self,
        iterations: usize,
        newton_steps: usize,
        relaxation: Real,
        status: ConvergenceStatus,
    ) -> RiccatiSolution {
        RiccatiSolution {
            p: self.p,
            iterations,
            newton_steps,
            residual: self.residual,
            relaxation,
            status,
        }
    }
}

/// Approximate the Riccati solution `P` for the plant `(A, B)` and weights `(Q, R)`.
///
/// # Arguments
///
/// * `a` - State matrix
/// * `b` - Input vector
/// * `q` - State weighting
/// * `r` - Input weighting, must be non-zero
/// * `config` - Iteration limits and pseudo-time step
///
/// # Returns
///
/// The final iterate with its [`ConvergenceStatus`]. Exhausting the budget
/// is reported through the status, not as an error.
///
/// # Errors
///
/// [`ControlError::InvalidArg`] for a bad config or non-finite inputs,
/// [`ControlError::Core`] for a zero `R`, and [`ControlError::Diverged`]
/// when a Newton step overflows or more than `max_cutbacks` consecutive
/// pseudo-time steps are rejected.
pub fn solve_riccati(
    a: &Matrix2x2,
    b: &ColumnVector2,
    q: &Matrix2x2,
    r: Real,
    config: &RiccatiConfig,
) -> ControlResult<RiccatiSolution> {
    config.validate()?;
    check_inputs(a, b, q)?;

    let at = a.transpose();
    let m = input_weight(b, r)?;

    let mut it = Iterate::new(*q, a, &at, &m, q);
    let mut h = config.relaxation;
    let mut cutbacks = 0;
    let mut newton_steps = 0;

    if it.residual < config.tolerance {
        return Ok(it.finish(0, 0, h, ConvergenceStatus::Converged));
    }

    for iteration in 1..=config.max_iterations {
        let a_cl = *a - m * it.p;

        if a_cl.is_hurwitz() {
            let w = *q + it.p * m * it.p;
            let next = solve_lyapunov(&a_cl, &w)
                .map(|p| Iterate::new(p.symmetrized(), a, &at, &m, q))
                .filter(|next| next.residual.is_finite())
                .ok_or(ControlError::Diverged { iteration })?;
            it = next;
            newton_steps += 1;
        } else {
            let shift = Matrix2x2::identity() * (0.5 / h);
            let candidate = solve_lyapunov(&(a_cl - shift), &it.f)
                .map(|dp| Iterate::new((it.p + dp).symmetrized(), a, &at, &m, q))
                .filter(|next| {
                    next.residual.is_finite()
                        && next.residual < RESIDUAL_GROWTH_LIMIT * it.residual
                });

            match candidate {
                Some(next) => {
                    it = next;
                    cutbacks = 0;
                }
                None => {
                    if cutbacks >= config.max_cutbacks {
                        return Err(ControlError::Diverged { iteration });
                    }
                    cutbacks += 1;
                    h *= config.cutback_factor;
                    debug!(iteration, relaxation = h, "riccati step rejected");
                    continue;
                }
            }
        }

        if it.residual < config.tolerance {
            debug!(
                iterations = iteration,
                newton_steps,
                residual = it.residual,
                "riccati iteration converged"
            );
            return Ok(it.finish(
                iteration,
                newton_steps,
                h,
                ConvergenceStatus::Converged,
            ));
        }
    }

    warn!(
        max_iterations = config.max_iterations,
        residual = it.residual,
        "riccati iteration budget exhausted, using last iterate"
    );
    ensure_finite(it.residual, "riccati residual").map_err(|_| ControlError::Diverged {
        iteration: config.max_iterations,
    })?;

    Ok(it.finish(
        config.max_iterations,
        newton_steps,
        h,
        ConvergenceStatus::IterationsExhausted,
    ))
}
