use crate::CoreError;

/// Floating point type used throughout the workspace
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Reject zero (and non-finite) divisors before they turn into Inf/NaN.
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v == 0.0 {
        return Err(CoreError::InvalidArg { what });
    }
    Ok(v)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ensure_nonzero_passes_nonzero_finite(v in -1.0e9_f64..1.0e9) {
            prop_assume!(v != 0.0);
            prop_assert_eq!(ensure_nonzero(v, "v"), Ok(v));
        }
    }
}
