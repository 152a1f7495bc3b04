//! Two-component row and column vectors.

use crate::matrix::Matrix2x2;
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use ss_core::{CoreError, CoreResult, Real};

const LEN: usize = 2;

/// Row vector `[x y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowVector2 {
    values: [Real; LEN],
}

/// Column vector `[x; y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnVector2 {
    values: [Real; LEN],
}

impl RowVector2 {
    pub const LEN: usize = LEN;

    pub const fn zeros() -> Self {
        Self { values: [0.0; LEN] }
    }

    /// Every component set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self {
            values: [value; LEN],
        }
    }

    pub const fn new(a1: Real, a2: Real) -> Self {
        Self { values: [a1, a2] }
    }

    pub fn get(&self, index: usize) -> CoreResult<Real> {
        self.values
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOob {
                what: "RowVector2",
                index,
                len: LEN,
            })
    }

    pub fn set(&mut self, index: usize, value: Real) -> CoreResult<()> {
        let slot = self.values.get_mut(index).ok_or(CoreError::IndexOob {
            what: "RowVector2",
            index,
            len: LEN,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn to_array(self) -> [Real; LEN] {
        self.values
    }

    /// Dot product with a column vector: `r0*c0 + r1*c1`.
    pub fn dot(&self, other: &ColumnVector2) -> Real {
        self.values[0] * other.values[0] + self.values[1] * other.values[1]
    }

    pub fn transpose(&self) -> ColumnVector2 {
        ColumnVector2::new(self.values[0], self.values[1])
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl ColumnVector2 {
    pub const LEN: usize = LEN;

    pub const fn zeros() -> Self {
        Self { values: [0.0; LEN] }
    }

    /// Every component set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self {
            values: [value; LEN],
        }
    }

    pub const fn new(a1: Real, a2: Real) -> Self {
        Self { values: [a1, a2] }
    }

    pub fn get(&self, index: usize) -> CoreResult<Real> {
        self.values
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOob {
                what: "ColumnVector2",
                index,
                len: LEN,
            })
    }

    pub fn set(&mut self, index: usize, value: Real) -> CoreResult<()> {
        let slot = self.values.get_mut(index).ok_or(CoreError::IndexOob {
            what: "ColumnVector2",
            index,
            len: LEN,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn to_array(self) -> [Real; LEN] {
        self.values
    }

    /// Dot product with another column vector: `v0*w0 + v1*w1`.
    pub fn dot(&self, other: &ColumnVector2) -> Real {
        self.values[0] * other.values[0] + self.values[1] * other.values[1]
    }

    /// Outer product `c * r`:
    ///
    /// ```text
    /// | c0*r0  c0*r1 |
    /// | c1*r0  c1*r1 |
    /// ```
    pub fn outer(&self, row: &RowVector2) -> Matrix2x2 {
        Matrix2x2::new(
            self.values[0] * row.values[0],
            self.values[0] * row.values[1],
            self.values[1] * row.values[0],
            self.values[1] * row.values[1],
        )
    }

    pub fn transpose(&self) -> RowVector2 {
        RowVector2::new(self.values[0], self.values[1])
    }

    /// Euclidean length.
    pub fn norm(&self) -> Real {
        self.dot(self).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

macro_rules! impl_vector_common {
    ($ty:ident) => {
        impl Index<usize> for $ty {
            type Output = Real;

            fn index(&self, index: usize) -> &Real {
                match self.values.get(index) {
                    Some(v) => v,
                    None => panic!(
                        "Index out of bounds for {}: index={}, len={}",
                        stringify!($ty),
                        index,
                        LEN
                    ),
                }
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut Real {
                match self.values.get_mut(index) {
                    Some(v) => v,
                    None => panic!(
                        "Index out of bounds for {}: index={}, len={}",
                        stringify!($ty),
                        index,
                        LEN
                    ),
                }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                self.values[0] += rhs.values[0];
                self.values[1] += rhs.values[1];
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                self.values[0] -= rhs.values[0];
                self.values[1] -= rhs.values[1];
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl MulAssign<Real> for $ty {
            fn mul_assign(&mut self, scalar: Real) {
                self.values[0] *= scalar;
                self.values[1] *= scalar;
            }
        }

        impl Mul<Real> for $ty {
            type Output = Self;

            fn mul(mut self, scalar: Real) -> Self {
                self *= scalar;
                self
            }
        }

        impl Mul<$ty> for Real {
            type Output = $ty;

            fn mul(self, vec: $ty) -> $ty {
                vec * self
            }
        }

        impl From<[Real; LEN]> for $ty {
            fn from(values: [Real; LEN]) -> Self {
                Self { values }
            }
        }
    };
}

impl_vector_common!(RowVector2);
impl_vector_common!(ColumnVector2);

/// Dot product `r * c`.
impl Mul<ColumnVector2> for RowVector2 {
    type Output = Real;

    fn mul(self, rhs: ColumnVector2) -> Real {
        self.dot(&rhs)
    }
}

/// Dot product `v * w` of two column vectors.
impl Mul<ColumnVector2> for ColumnVector2 {
    type Output = Real;

    fn mul(self, rhs: ColumnVector2) -> Real {
        self.dot(&rhs)
    }
}

/// Outer product `c * r`.
impl Mul<RowVector2> for ColumnVector2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: RowVector2) -> Matrix2x2 {
        self.outer(&rhs)
    }
}

/// Row vector times matrix, producing a row vector.
impl Mul<Matrix2x2> for RowVector2 {
    type Output = RowVector2;

    fn mul(self, m: Matrix2x2) -> RowVector2 {
        RowVector2::new(
            self.values[0] * m[0] + self.values[1] * m[2],
            self.values[0] * m[1] + self.values[1] * m[3],
        )
    }
}

impl fmt::Display for RowVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.values[0], self.values[1])
    }
}

impl fmt::Display for ColumnVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {}]", self.values[0], self.values[1])
    }
}
