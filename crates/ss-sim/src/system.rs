//! Plant description.

use crate::error::{SimError, SimResult};
use ss_core::Real;
use ss_linalg::{ColumnVector2, Matrix2x2, RowVector2};

/// Single-input, single-output plant `x' = A x + B u`, `y = C x`.
///
/// There is no direct feedthrough term: `D` is always zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateSpace {
    pub a: Matrix2x2,
    pub b: ColumnVector2,
    pub c: RowVector2,
}

impl StateSpace {
    pub fn new(a: Matrix2x2, b: ColumnVector2, c: RowVector2) -> Self {
        Self { a, b, c }
    }

    /// `A x + B u`.
    pub fn derivative(&self, x: &ColumnVector2, u: Real) -> ColumnVector2 {
        self.a * *x + self.b * u
    }

    /// `C x`.
    pub fn output(&self, x: &ColumnVector2) -> Real {
        self.c * *x
    }

    /// The same plant under state feedback `u = −Kᵗ x`: `(A − B Kᵗ, B, C)`.
    pub fn closed_loop(&self, k: &ColumnVector2) -> StateSpace {
        StateSpace {
            a: self.a - self.b.outer(&k.transpose()),
            b: self.b,
            c: self.c,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.a.is_finite() {
            return Err(SimError::InvalidArg {
                what: "A must be finite",
            });
        }
        if !self.b.is_finite() {
            return Err(SimError::InvalidArg {
                what: "B must be finite",
            });
        }
        if !self.c.is_finite() {
            return Err(SimError::InvalidArg {
                what: "C must be finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> StateSpace {
        StateSpace::new(
            Matrix2x2::new(0.0, 1.0, -3.0, -2.0),
            ColumnVector2::new(0.0, 1.0),
            RowVector2::new(1.0, 0.0),
        )
    }

    #[test]
    fn output_reads_first_state() {
        assert_eq!(reference().output(&ColumnVector2::new(0.25, 4.0)), 0.25);
    }

    #[test]
    fn closed_loop_subtracts_outer_product() {
        let cl = reference().closed_loop(&ColumnVector2::new(1.0, 0.5));
        assert_eq!(cl.a, Matrix2x2::new(0.0, 1.0, -4.0, -2.5));
        assert_eq!(cl.b, reference().b);
        assert_eq!(cl.c, reference().c);
    }

    #[test]
    fn zero_gain_leaves_plant_unchanged() {
        assert_eq!(reference().closed_loop(&ColumnVector2::zeros()), reference());
    }

    #[test]
    fn validate_rejects_nan() {
        let mut sys = reference();
        assert!(sys.validate().is_ok());
        sys.b = ColumnVector2::new(Real::NAN, 1.0);
        assert!(sys.validate().is_err());
    }
}
