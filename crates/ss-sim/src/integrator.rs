//! Fixed-step time integrators.

use crate::error::SimResult;
use crate::model::TransientModel;
use ss_core::Real;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: Real,
        x: &M::State,
        dt: Real,
    ) -> SimResult<M::State>;
}

/// Forward Euler (explicit, 1st order).
///
/// `x_new = x + rhs(t, x) * dt`: local truncation error is O(dt²) per step,
/// global error O(dt) over a fixed horizon.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: Real,
        x: &M::State,
        dt: Real,
    ) -> SimResult<M::State> {
        let xdot = model.rhs(t, x)?;
        Ok(model.add(x, &model.scale(&xdot, dt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decay;

    impl TransientModel for Decay {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&mut self, _t: f64, x: &f64) -> SimResult<f64> {
            Ok(-x)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    #[test]
    fn euler_single_step() {
        let x = ForwardEuler.step(&mut Decay, 0.0, &1.0, 0.1).unwrap();
        assert!((x - 0.9).abs() < 1e-15);
    }

    #[test]
    fn euler_is_first_order() {
        // Halving dt roughly halves the global error at t = 1.
        let exact = (-1.0_f64).exp();
        let error = |n: usize| {
            let dt = 1.0 / n as f64;
            let mut x = 1.0;
            for k in 0..n {
                x = ForwardEuler.step(&mut Decay, k as f64 * dt, &x, dt).unwrap();
            }
            (x - exact).abs()
        };
        let ratio = error(100) / error(200);
        assert!((ratio - 2.0).abs() < 0.05, "ratio {ratio}");
    }
}
