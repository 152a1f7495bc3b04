//! Parallel LQR design over a grid of weightings.

use crate::error::ControlResult;
use crate::lqr::{LqrGain, lqr_with_config};
use crate::riccati::RiccatiConfig;
use rayon::prelude::*;
use ss_core::Real;
use ss_linalg::{ColumnVector2, Matrix2x2};

/// One `(Q, R)` grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LqrWeights {
    /// State weighting, row-major.
    pub q: [Real; 4],
    pub r: Real,
}

impl LqrWeights {
    pub fn new(q: Matrix2x2, r: Real) -> Self {
        Self {
            q: q.to_array(),
            r,
        }
    }

    pub fn q_matrix(&self) -> Matrix2x2 {
        Matrix2x2::from(self.q)
    }
}

/// Solve every grid point independently on the rayon pool.
///
/// Results come back in the order of `weights`; a failing point does not
/// stop the others.
pub fn sweep_lqr(
    a: &Matrix2x2,
    b: &ColumnVector2,
    weights: &[LqrWeights],
    config: &RiccatiConfig,
) -> Vec<ControlResult<LqrGain>> {
    weights
        .par_iter()
        .map(|w| lqr_with_config(a, b, &w.q_matrix(), w.r, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_matches_sequential_solves() {
        let a = Matrix2x2::new(0.0, 1.0, -3.0, -2.0);
        let b = ColumnVector2::new(0.0, 1.0);
        let config = RiccatiConfig::default();

        let weights: Vec<LqrWeights> = [0.5, 1.0, 2.0, 5.0]
            .iter()
            .flat_map(|&q| {
                [0.5, 1.0, 2.0].map(|r| LqrWeights::new(Matrix2x2::diagonal(q, 2.0 * q), r))
            })
            .collect();

        let swept = sweep_lqr(&a, &b, &weights, &config);
        assert_eq!(swept.len(), weights.len());

        for (w, result) in weights.iter().zip(&swept) {
            let expected = lqr_with_config(&a, &b, &w.q_matrix(), w.r, &config).unwrap();
            assert_eq!(result.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn failing_point_is_isolated() {
        let a = Matrix2x2::new(0.0, 1.0, -3.0, -2.0);
        let b = ColumnVector2::new(0.0, 1.0);
        let weights = [
            LqrWeights::new(Matrix2x2::identity(), 1.0),
            LqrWeights::new(Matrix2x2::identity(), 0.0),
            LqrWeights::new(Matrix2x2::identity(), 2.0),
        ];

        let swept = sweep_lqr(&a, &b, &weights, &RiccatiConfig::default());
        assert!(swept[0].is_ok());
        assert!(swept[1].is_err());
        assert!(swept[2].is_ok());
    }
}
