//! LQR gain derivation from a Riccati solution.

use crate::error::ControlResult;
use crate::riccati::{RiccatiConfig, RiccatiSolution, solve_riccati};
use ss_core::{Real, ensure_nonzero};
use ss_linalg::{ColumnVector2, Matrix2x2};

/// State feedback gain together with the Riccati solve that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LqrGain {
    /// Gain such that `u = −Kᵗ x`.
    pub k: ColumnVector2,
    pub riccati: RiccatiSolution,
}

impl LqrGain {
    pub fn converged(&self) -> bool {
        self.riccati.converged()
    }
}

/// `K = ((1/R) · (Bᵗ · P))ᵗ`.
pub fn gain_from_riccati(
    b: &ColumnVector2,
    p: &Matrix2x2,
    r: Real,
) -> ControlResult<ColumnVector2> {
    let r = ensure_nonzero(r, "R must be finite and non-zero")?;
    let row = b.transpose() * *p;
    Ok((row * (1.0 / r)).transpose())
}

/// Solve for the LQR gain with default iteration settings.
///
/// The gain is returned even when the iteration budget runs out. Use
/// [`lqr_with_config`] to inspect the convergence status.
pub fn lqr(
    a: &Matrix2x2,
    b: &ColumnVector2,
    q: &Matrix2x2,
    r: Real,
) -> ControlResult<ColumnVector2> {
    Ok(lqr_with_config(a, b, q, r, &RiccatiConfig::default())?.k)
}

/// Solve for the LQR gain, keeping the Riccati outcome.
pub fn lqr_with_config(
    a: &Matrix2x2,
    b: &ColumnVector2,
    q: &Matrix2x2,
    r: Real,
    config: &RiccatiConfig,
) -> ControlResult<LqrGain> {
    let riccati = solve_riccati(a, b, q, r, config)?;
    let k = gain_from_riccati(b, &riccati.p, r)?;
    Ok(LqrGain { k, riccati })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ControlError;

    #[test]
    fn gain_is_scaled_bt_p() {
        let b = ColumnVector2::new(0.0, 1.0);
        let p = Matrix2x2::new(4.0, 2.0, 2.0, 6.0);
        let k = gain_from_riccati(&b, &p, 2.0).unwrap();
        assert_eq!(k, ColumnVector2::new(1.0, 3.0));
    }

    #[test]
    fn gain_rejects_zero_r() {
        let b = ColumnVector2::new(0.0, 1.0);
        assert!(matches!(
            gain_from_riccati(&b, &Matrix2x2::identity(), 0.0),
            Err(ControlError::Core(_))
        ));
    }

    #[test]
    fn reference_gain() {
        let a = Matrix2x2::new(0.0, 1.0, -3.0, -2.0);
        let b = ColumnVector2::new(0.0, 1.0);
        let q = Matrix2x2::diagonal(1.0, 2.0);

        let k = lqr(&a, &b, &q, 1.0).unwrap();
        assert!(k.is_finite());
        // With B = [0, 1] and R = 1, K is the second row of P.
        assert!((k[0] - 0.162278).abs() < 1e-4);
        assert!((k[1] - 0.514867).abs() < 1e-4);

        let full = lqr_with_config(&a, &b, &q, 1.0, &RiccatiConfig::default()).unwrap();
        assert!(full.converged());
        assert_eq!(full.k, k);
    }
}
