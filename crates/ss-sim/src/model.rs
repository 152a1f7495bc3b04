//! TransientModel trait for pluggable dynamic systems.

use crate::error::SimResult;
use crate::system::StateSpace;
use ss_core::Real;
use ss_linalg::ColumnVector2;

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the initial state at t=0.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative dxdt = f(t, x).
    fn rhs(&mut self, t: Real, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: Real) -> Self::State;
}

/// A plant driven by an input held constant over the whole horizon.
#[derive(Clone, Debug)]
pub struct ConstantInput<'a> {
    pub system: &'a StateSpace,
    pub x0: ColumnVector2,
    pub u: Real,
}

impl<'a> ConstantInput<'a> {
    pub fn new(system: &'a StateSpace, x0: ColumnVector2, u: Real) -> Self {
        Self { system, x0, u }
    }
}

impl TransientModel for ConstantInput<'_> {
    type State = ColumnVector2;

    fn initial_state(&self) -> ColumnVector2 {
        self.x0
    }

    fn rhs(&mut self, _t: Real, x: &ColumnVector2) -> SimResult<ColumnVector2> {
        Ok(self.system.derivative(x, self.u))
    }

    fn add(&self, a: &ColumnVector2, b: &ColumnVector2) -> ColumnVector2 {
        *a + *b
    }

    fn scale(&self, a: &ColumnVector2, scale: Real) -> ColumnVector2 {
        *a * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_linalg::{Matrix2x2, RowVector2};

    #[test]
    fn rhs_is_ax_plus_bu() {
        let sys = StateSpace::new(
            Matrix2x2::new(0.0, 1.0, -3.0, -2.0),
            ColumnVector2::new(0.0, 1.0),
            RowVector2::new(1.0, 0.0),
        );
        let mut model = ConstantInput::new(&sys, ColumnVector2::new(1.0, 1.0), 2.0);
        assert_eq!(model.initial_state(), ColumnVector2::new(1.0, 1.0));

        let xdot = model.rhs(0.0, &ColumnVector2::new(1.0, 1.0)).unwrap();
        assert_eq!(xdot, ColumnVector2::new(1.0, -3.0));
    }
}
