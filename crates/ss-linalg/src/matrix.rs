//! 2x2 matrix stored row-major as `[a11, a12, a21, a22]`.

use crate::vector::ColumnVector2;
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use ss_core::{CoreError, CoreResult, Real};

const LEN: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix2x2 {
    values: [Real; LEN],
}

impl Matrix2x2 {
    pub const LEN: usize = LEN;

    pub const fn zeros() -> Self {
        Self { values: [0.0; LEN] }
    }

    /// Every entry set to `value`.
    pub const fn splat(value: Real) -> Self {
        Self {
            values: [value; LEN],
        }
    }

    pub const fn new(a11: Real, a12: Real, a21: Real, a22: Real) -> Self {
        Self {
            values: [a11, a12, a21, a22],
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    pub const fn diagonal(d1: Real, d2: Real) -> Self {
        Self::new(d1, 0.0, 0.0, d2)
    }

    pub fn get(&self, index: usize) -> CoreResult<Real> {
        self.values
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOob {
                what: "Matrix2x2",
                index,
                len: LEN,
            })
    }

    pub fn set(&mut self, index: usize, value: Real) -> CoreResult<()> {
        let slot = self.values.get_mut(index).ok_or(CoreError::IndexOob {
            what: "Matrix2x2",
            index,
            len: LEN,
        })?;
        *slot = value;
        Ok(())
    }

    /// Row-major entries.
    pub fn to_array(self) -> [Real; LEN] {
        self.values
    }

    /// Swap the off-diagonal entries.
    pub fn transpose(&self) -> Self {
        let [a11, a12, a21, a22] = self.values;
        Self::new(a11, a21, a12, a22)
    }

    /// Frobenius norm `sqrt(a11² + a12² + a21² + a22²)`.
    pub fn norm(&self) -> Real {
        self.values.iter().map(|v| v * v).sum::<Real>().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    pub fn trace(&self) -> Real {
        self.values[0] + self.values[3]
    }

    pub fn determinant(&self) -> Real {
        let [a11, a12, a21, a22] = self.values;
        a11 * a22 - a12 * a21
    }

    /// Both eigenvalues have negative real part.
    pub fn is_hurwitz(&self) -> bool {
        self.trace() < 0.0 && self.determinant() > 0.0
    }

    /// Average the off-diagonal entries.
    pub fn symmetrized(&self) -> Self {
        let [a11, a12, a21, a22] = self.values;
        let off = 0.5 * (a12 + a21);
        Self::new(a11, off, off, a22)
    }
}

impl Index<usize> for Matrix2x2 {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        match self.values.get(index) {
            Some(v) => v,
            None => panic!("Index out of bounds for Matrix2x2: index={index}, len={LEN}"),
        }
    }
}

impl IndexMut<usize> for Matrix2x2 {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        match self.values.get_mut(index) {
            Some(v) => v,
            None => panic!("Index out of bounds for Matrix2x2: index={index}, len={LEN}"),
        }
    }
}

impl AddAssign for Matrix2x2 {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.values.iter_mut().zip(rhs.values) {
            *a += b;
        }
    }
}

impl Add for Matrix2x2 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl SubAssign for Matrix2x2 {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.values.iter_mut().zip(rhs.values) {
            *a -= b;
        }
    }
}

impl Sub for Matrix2x2 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl MulAssign<Real> for Matrix2x2 {
    fn mul_assign(&mut self, scalar: Real) {
        for a in self.values.iter_mut() {
            *a *= scalar;
        }
    }
}

impl Mul<Real> for Matrix2x2 {
    type Output = Self;

    fn mul(mut self, scalar: Real) -> Self {
        self *= scalar;
        self
    }
}

impl Mul<Matrix2x2> for Real {
    type Output = Matrix2x2;

    fn mul(self, m: Matrix2x2) -> Matrix2x2 {
        m * self
    }
}

impl Mul<ColumnVector2> for Matrix2x2 {
    type Output = ColumnVector2;

    fn mul(self, v: ColumnVector2) -> ColumnVector2 {
        let [a11, a12, a21, a22] = self.values;
        ColumnVector2::new(a11 * v[0] + a12 * v[1], a21 * v[0] + a22 * v[1])
    }
}

impl MulAssign for Matrix2x2 {
    fn mul_assign(&mut self, rhs: Self) {
        let [a11, a12, a21, a22] = self.values;
        let [b11, b12, b21, b22] = rhs.values;
        self.values = [
            a11 * b11 + a12 * b21,
            a11 * b12 + a12 * b22,
            a21 * b11 + a22 * b21,
            a21 * b12 + a22 * b22,
        ];
    }
}

impl Mul for Matrix2x2 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl From<[Real; LEN]> for Matrix2x2 {
    fn from(values: [Real; LEN]) -> Self {
        Self { values }
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a11, a12, a21, a22] = self.values;
        write!(f, "[{a11}, {a12}; {a21}, {a22}]")
    }
}
