//! `matrices::algebra` submodule implements matrix algebra on [`Matrix4`]:
//! transposition, scalar and matrix products, addition, determinant, adjugate and inversion.
//!

use super::{Matrix4, MatrixError};
use crate::mathcore::floats::EPSILON;
use seq_macro::seq;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Computes `lhs * rhs` into new array, so that neither operand is read after it was written.
///
fn product(lhs: &[[f32; 4]; 4], rhs: &[[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let mut scratch: [[f32; 4]; 4] = [[0.0; 4]; 4];
    seq!(R in 0..4 {
        seq!(C in 0..4 {
            scratch[R][C] = lhs[R][0] * rhs[0][C]
                + lhs[R][1] * rhs[1][C]
                + lhs[R][2] * rhs[2][C]
                + lhs[R][3] * rhs[3][C];
        });
    });
    scratch
}
/// Returns indices that are left after removing given one from [0, 3].
///
const fn remaining(skipped: usize) -> [usize; 3] {
    match skipped {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl Matrix4 {
    /// Returns transposed matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from([[1.0, 2.0, 3.0, 4.0]; 4]);
    /// assert_eq!(matrix.transpose().as_array()[0], [1.0; 4]);
    /// ```
    ///
    pub fn transpose(&self) -> Matrix4 {
        let mut matrix: Matrix4 = *self;
        let _ = matrix.transpose_local();
        matrix
    }
    /// Transposes matrix in place and returns it for chaining.
    ///
    pub fn transpose_local(&mut self) -> &mut Self {
        for r in 0..4 {
            for c in (r + 1)..4 {
                let tmp: f32 = self.m[r][c];
                self.m[r][c] = self.m[c][r];
                self.m[c][r] = tmp;
            }
        }
        self
    }

    /// Returns matrix with every component multiplied by scalar.
    ///
    pub fn mult_scalar(&self, scalar: f32) -> Matrix4 {
        self.map(|elem| elem * scalar)
    }
    /// Writes matrix with every component multiplied by scalar into store and returns the store.
    ///
    pub fn mult_scalar_into<'s>(&self, scalar: f32, store: &'s mut Matrix4) -> &'s mut Matrix4 {
        *store = self.mult_scalar(scalar);
        store
    }
    /// Multiplies every component by scalar in place.
    ///
    pub fn mult_scalar_local(&mut self, scalar: f32) -> &mut Self {
        *self = self.mult_scalar(scalar);
        self
    }

    /// Returns product `self * other` (other is applied first when transforming vectors).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from([[2.0; 4]; 4]);
    /// assert_eq!(matrix.mult(&Matrix4::IDENTITY), matrix);
    /// assert_eq!(matrix.mult(&matrix), Matrix4::from([[16.0; 4]; 4]));
    /// ```
    ///
    pub fn mult(&self, other: &Matrix4) -> Matrix4 {
        Matrix4::from(product(&self.m, &other.m))
    }
    /// Writes product `self * other` into store and returns the store.
    ///
    /// Store is a distinct matrix; write into either operand with
    /// [`Matrix4::mult_local`] or [`Matrix4::pre_mult_local`].
    ///
    pub fn mult_into<'s>(&self, other: &Matrix4, store: &'s mut Matrix4) -> &'s mut Matrix4 {
        store.m = product(&self.m, &other.m);
        store
    }
    /// Replaces matrix with `self * other` and returns it for chaining.
    ///
    /// Squaring in place is `matrix.mult_local(&matrix.clone())`.
    ///
    pub fn mult_local(&mut self, other: &Matrix4) -> &mut Self {
        self.m = product(&self.m, &other.m);
        self
    }
    /// Replaces matrix with `lhs * self` and returns it for chaining.
    ///
    pub fn pre_mult_local(&mut self, lhs: &Matrix4) -> &mut Self {
        self.m = product(&lhs.m, &self.m);
        self
    }

    /// Returns component-wise sum of matrices.
    ///
    pub fn add(&self, other: &Matrix4) -> Matrix4 {
        self.combine(*other, |a, b| a + b)
    }
    /// Adds other matrix to this one component-wise.
    ///
    pub fn add_local(&mut self, other: &Matrix4) -> &mut Self {
        *self = Matrix4::add(self, other);
        self
    }

    /// Returns determinant of 3x3 matrix that is left after removing given row and column.
    ///
    fn minor(&self, row: usize, col: usize) -> f32 {
        let (r, c): ([usize; 3], [usize; 3]) = (remaining(row), remaining(col));
        let m: &[[f32; 4]; 4] = &self.m;
        m[r[0]][c[0]] * (m[r[1]][c[1]] * m[r[2]][c[2]] - m[r[1]][c[2]] * m[r[2]][c[1]])
            - m[r[0]][c[1]] * (m[r[1]][c[0]] * m[r[2]][c[2]] - m[r[1]][c[2]] * m[r[2]][c[0]])
            + m[r[0]][c[2]] * (m[r[1]][c[0]] * m[r[2]][c[1]] - m[r[1]][c[1]] * m[r[2]][c[0]])
    }
    /// Returns signed minor.
    ///
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let minor: f32 = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }
    /// Returns transposed cofactor matrix as an array of rows.
    ///
    fn adjugate(&self) -> [[f32; 4]; 4] {
        let mut scratch: [[f32; 4]; 4] = [[0.0; 4]; 4];
        for (r, row) in scratch.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = self.cofactor(c, r);
            }
        }
        scratch
    }

    /// Returns determinant of matrix (cofactor expansion along first row).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::Matrix4;
    /// assert_eq!(Matrix4::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Matrix4::ZERO.determinant(), 0.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        (0..4).map(|c| self.m[0][c] * self.cofactor(0, c)).sum()
    }
    /// Returns adjugate (classical adjoint) matrix.
    ///
    /// For invertible matrix `m`, `m.adjoint() == m.invert()? * m.determinant()`.
    ///
    pub fn adjoint(&self) -> Matrix4 {
        Matrix4::from(self.adjugate())
    }
    /// Writes adjugate matrix into store and returns the store.
    ///
    pub fn adjoint_into<'s>(&self, store: &'s mut Matrix4) -> &'s mut Matrix4 {
        store.m = self.adjugate();
        store
    }
    /// Replaces matrix with its adjugate.
    ///
    pub fn adjoint_local(&mut self) -> &mut Self {
        self.m = self.adjugate();
        self
    }

    /// Computes inverse into scratch buffer.
    ///
    /// Matrix whose determinant is within [`EPSILON`] of zero is singular.
    ///
    fn inverse(&self) -> Result<[[f32; 4]; 4], MatrixError> {
        let adjugate: [[f32; 4]; 4] = self.adjugate();
        let determinant: f32 = (0..4).map(|c| self.m[0][c] * adjugate[c][0]).sum();
        if determinant.abs() <= EPSILON {
            log::debug!("refusing to invert singular matrix (determinant is {determinant})");
            return Err(MatrixError::Singular { determinant });
        }
        let inv_det: f32 = 1.0 / determinant;
        Ok(adjugate.map(|row| row.map(|elem| elem * inv_det)))
    }
    /// Returns inverse matrix.
    ///
    /// Singular matrix is reported as [`MatrixError::Singular`].
    /// Singularity is an absolute test, `|det| <= EPSILON`, so invertible matrices
    /// with very small scale are rejected as well: uniform scale of `1e-3` has determinant
    /// `1e-9`. Such matrices have to be rescaled before inversion.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let matrix: Matrix4 = Matrix4::from([
    ///     [2.0, 0.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0, 0.0],
    ///     [0.0, 0.0, 8.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(matrix.invert()?.mult(&matrix), Matrix4::IDENTITY);
    /// assert!(matches!(Matrix4::ZERO.invert(), Err(MatrixError::Singular { .. })));
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn invert(&self) -> Result<Matrix4, MatrixError> {
        Ok(Matrix4::from(self.inverse()?))
    }
    /// Writes inverse matrix into store and returns the store.
    ///
    /// Store is left untouched if matrix is singular (in the sense of [`Matrix4::invert`]).
    ///
    pub fn invert_into<'s>(&self, store: &'s mut Matrix4) -> Result<&'s mut Matrix4, MatrixError> {
        store.m = self.inverse()?;
        Ok(store)
    }
    /// Inverts matrix in place.
    ///
    /// Matrix is left untouched if it is singular (in the sense of [`Matrix4::invert`]).
    ///
    pub fn invert_local(&mut self) -> Result<&mut Self, MatrixError> {
        self.m = self.inverse()?;
        Ok(self)
    }
}
impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        self.mult(&rhs)
    }
}
impl MulAssign<Matrix4> for Matrix4 {
    fn mul_assign(&mut self, rhs: Matrix4) {
        let _ = self.mult_local(&rhs);
    }
}
impl Mul<f32> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: f32) -> Self::Output {
        self.mult_scalar(rhs)
    }
}
impl MulAssign<f32> for Matrix4 {
    fn mul_assign(&mut self, rhs: f32) {
        let _ = self.mult_scalar_local(rhs);
    }
}
impl Add<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn add(self, rhs: Matrix4) -> Self::Output {
        Matrix4::add(&self, &rhs)
    }
}
impl AddAssign<Matrix4> for Matrix4 {
    fn add_assign(&mut self, rhs: Matrix4) {
        let _ = self.add_local(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use crate::mathcore::matrices::{Matrix4, MatrixError};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    /// Row-major `1..=16`.
    ///
    fn m1_16() -> Matrix4 {
        Matrix4::from([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ])
    }
    /// Invertible matrix with integer adjugate.
    ///
    fn invertible() -> Matrix4 {
        Matrix4::from([
            [3.0, 0.0, 2.0, -1.0],
            [1.0, 2.0, 0.0, -2.0],
            [1.0, 0.0, 2.0, -3.0],
            [3.0, 0.0, 2.0, 0.0],
        ])
    }

    #[test]
    fn transposition() {
        let mut matrix: Matrix4 = m1_16();
        let transposed: Matrix4 = matrix.transpose();
        assert_eq!(
            transposed.as_array(),
            [
                [1.0, 5.0, 9.0, 13.0],
                [2.0, 6.0, 10.0, 14.0],
                [3.0, 7.0, 11.0, 15.0],
                [4.0, 8.0, 12.0, 16.0],
            ]
        );
        assert_eq!(matrix, m1_16());

        let chained: Matrix4 = *matrix.transpose_local();
        assert_eq!(chained, transposed);
        assert_eq!(matrix, transposed);
        assert_eq!(*matrix.transpose_local(), m1_16());
    }

    #[test]
    fn scalar_product() {
        let matrix: Matrix4 = m1_16();
        let doubled: Matrix4 = matrix.mult_scalar(2.0);
        assert_eq!(doubled.get(3, 3), Ok(32.0));
        assert_eq!(matrix * 2.0, doubled);

        let mut store: Matrix4 = Matrix4::new();
        let _ = matrix.mult_scalar_into(0.5, &mut store);
        assert_eq!(store.get(1, 0), Ok(2.5));

        let mut local: Matrix4 = matrix;
        let _ = local.mult_scalar_local(-1.0);
        assert_eq!(local.get(2, 2), Ok(-11.0));
        local *= 0.0;
        assert_eq!(local, Matrix4::ZERO);
    }

    #[test]
    fn matrix_product() {
        let matrix: Matrix4 = m1_16();
        let expected: Matrix4 = Matrix4::from([
            [90.0, 100.0, 110.0, 120.0],
            [202.0, 228.0, 254.0, 280.0],
            [314.0, 356.0, 398.0, 440.0],
            [426.0, 484.0, 542.0, 600.0],
        ]);
        assert_eq!(matrix.mult(&matrix), expected);
        assert_eq!(matrix * matrix, expected);
        assert_eq!(matrix.mult(&Matrix4::IDENTITY), matrix);
        assert_eq!(Matrix4::IDENTITY.mult(&matrix), matrix);

        let mut store: Matrix4 = Matrix4::ZERO;
        let stored: Matrix4 = *matrix.mult_into(&matrix, &mut store);
        assert_eq!(stored, expected);
        assert_eq!(store, expected);

        let mut squared: Matrix4 = matrix;
        let _ = squared.mult_local(&squared.clone());
        assert_eq!(squared, expected);

        let mut assigned: Matrix4 = matrix;
        assigned *= matrix;
        assert_eq!(assigned, expected);
    }

    #[test]
    fn product_order() {
        let mut a: Matrix4 = Matrix4::new();
        a.set_translation([1.0, 2.0, 3.0].into());
        let mut b: Matrix4 = Matrix4::new();
        b.set_scale([2.0, 2.0, 2.0].into());

        let mut post: Matrix4 = a;
        let _ = post.mult_local(&b);
        assert_eq!(post, a.mult(&b));

        let mut pre: Matrix4 = a;
        let _ = pre.pre_mult_local(&b);
        assert_eq!(pre, b.mult(&a));
        assert_ne!(pre, post);
    }

    #[test]
    fn addition() {
        let sum: Matrix4 = m1_16().add(&Matrix4::IDENTITY);
        assert_eq!(
            sum,
            Matrix4::from([
                2.0, 2.0, 3.0, 4.0, 5.0, 7.0, 7.0, 8.0, 9.0, 10.0, 12.0, 12.0, 13.0, 14.0, 15.0,
                17.0,
            ])
        );
        assert_eq!(m1_16() + Matrix4::IDENTITY, sum);

        let mut local: Matrix4 = m1_16();
        let _ = local.add_local(&Matrix4::IDENTITY);
        assert_eq!(local, sum);
        local += Matrix4::ZERO;
        assert_eq!(local, sum);
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix4::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix4::ZERO.determinant(), 0.0);
        assert_eq!(m1_16().determinant(), 0.0);
        assert_eq!(invertible().determinant(), 8.0);

        let mut scale: Matrix4 = Matrix4::new();
        scale.set_scale([2.0, 3.0, 4.0].into());
        assert_eq!(scale.determinant(), 24.0);
    }

    #[test]
    fn adjugate() {
        let matrix: Matrix4 = invertible();
        let expected: Matrix4 = Matrix4::from([
            [12.0, 0.0, -4.0, -8.0],
            [-14.0, 4.0, 2.0, 12.0],
            [-18.0, 0.0, 6.0, 16.0],
            [-8.0, 0.0, 0.0, 8.0],
        ]);
        assert_eq!(matrix.adjoint(), expected);

        let mut store: Matrix4 = Matrix4::new();
        let _ = matrix.adjoint_into(&mut store);
        assert_eq!(store, expected);

        let mut local: Matrix4 = matrix;
        let _ = local.adjoint_local();
        assert_eq!(local, expected);

        assert_eq!(Matrix4::IDENTITY.adjoint(), Matrix4::IDENTITY);
    }

    #[test]
    fn inversion() {
        let matrix: Matrix4 = invertible();
        let expected: Matrix4 = Matrix4::from([
            [1.5, 0.0, -0.5, -1.0],
            [-1.75, 0.5, 0.25, 1.5],
            [-2.25, 0.0, 0.75, 2.0],
            [-1.0, 0.0, 0.0, 1.0],
        ]);
        let inverse: Matrix4 = matrix.invert().unwrap();
        assert_eq!(inverse, expected);
        assert_eq!(matrix.mult(&inverse), Matrix4::IDENTITY);
        assert_eq!(inverse.mult(&matrix), Matrix4::IDENTITY);
        assert_eq!(matrix.adjoint().mult_scalar(1.0 / matrix.determinant()), inverse);

        let mut store: Matrix4 = Matrix4::ZERO;
        let _ = matrix.invert_into(&mut store).unwrap();
        assert_eq!(store, expected);

        let mut local: Matrix4 = matrix;
        let _ = local.invert_local().unwrap();
        assert_eq!(local, expected);
        let _ = local.invert_local().unwrap();
        assert_eq!(local, matrix);

        assert_eq!(Matrix4::IDENTITY.invert(), Ok(Matrix4::IDENTITY));
    }

    #[test]
    fn singular_inversion() {
        assert_eq!(
            m1_16().invert(),
            Err(MatrixError::Singular { determinant: 0.0 })
        );

        let mut store: Matrix4 = invertible();
        assert!(m1_16().invert_into(&mut store).is_err());
        assert_eq!(store, invertible());

        let mut local: Matrix4 = Matrix4::ZERO;
        local[0][0] = 1.0;
        let before: Matrix4 = local;
        assert!(matches!(
            local.invert_local(),
            Err(MatrixError::Singular { .. })
        ));
        assert_eq!(local, before);

        let mut tiny: Matrix4 = Matrix4::new();
        tiny.set_scale([1e-3, 1e-3, 1e-3].into());
        assert!(matches!(
            tiny.invert(),
            Err(MatrixError::Singular { determinant }) if determinant > 0.0
        ));
        tiny.set_scale([1e-2, 1e-2, 1e-2].into());
        assert!(tiny.invert().is_ok());
    }

    #[test]
    fn rotation_inverse_is_transpose() {
        let mut rotation: Matrix4 = Matrix4::new();
        rotation
            .set_angle_axis(0.7, [1.0, 2.0, 3.0].into())
            .unwrap();
        assert_abs_diff_eq!(rotation.determinant(), 1.0, epsilon = 1e-5);
        assert!(rotation
            .invert()
            .unwrap()
            .is_similar(&rotation.transpose(), 1e-5));
    }

    /// Matrix with small integer components, so that every product is exact in `f32`.
    ///
    fn integer_matrix() -> impl Strategy<Value = Matrix4> {
        prop::array::uniform16(-8_i8..=8).prop_map(|values| Matrix4::from(values.map(f32::from)))
    }

    /// Matrix with integer diagonal of magnitude 32..=64 over integer off-diagonal elements
    /// of magnitude at most 8, so every row is strictly diagonally dominant and
    /// condition number stays below 12.
    ///
    fn diagonally_dominant_matrix() -> impl Strategy<Value = Matrix4> {
        (
            integer_matrix(),
            prop::array::uniform4(32_i8..=64),
            prop::array::uniform4(any::<bool>()),
        )
            .prop_map(|(mut matrix, diagonal, negative)| {
                for i in 0..4 {
                    let value: f32 = f32::from(diagonal[i]);
                    matrix[i][i] = if negative[i] { -value } else { value };
                }
                matrix
            })
    }
    /// Returns largest absolute element.
    ///
    fn max_abs(matrix: &Matrix4) -> f32 {
        matrix
            .as_array()
            .iter()
            .flatten()
            .fold(0.0, |acc: f32, elem| acc.max(elem.abs()))
    }
    /// Returns matrix of absolute elements.
    ///
    fn abs(matrix: &Matrix4) -> Matrix4 {
        matrix.map(f32::abs)
    }

    proptest! {
        /// Adjugate of integer matrix is exact, so every element of inverse carries at most
        /// two roundings (reciprocal of determinant and the product). Element `(i, j)` of
        /// `m * m.invert()` then deviates from identity by a few ulps of
        /// `sum_k |m[i][k]| * |inverse[k][j]|`; `1e-6` of the largest such sum
        /// (about 16 ulps) bounds it.
        #[test]
        fn inverse_product_is_identity(matrix in integer_matrix()) {
            prop_assume!(matrix.determinant().abs() >= 1.0);
            let inverse: Matrix4 = matrix.invert().unwrap();
            let scale: f32 = max_abs(&abs(&matrix).mult(&abs(&inverse)));
            prop_assert!(matrix.mult(&inverse).is_similar(&Matrix4::IDENTITY, 1e-6 * scale));
            prop_assert!(inverse.mult(&matrix).is_similar(&Matrix4::IDENTITY, 1e-6 * scale));

            let mut store: Matrix4 = Matrix4::ZERO;
            prop_assert_eq!(*matrix.invert_into(&mut store).unwrap(), inverse);
            let mut local: Matrix4 = matrix;
            prop_assert_eq!(*local.invert_local().unwrap(), inverse);
        }

        /// Diagonally dominant matrices are well conditioned and their minors do not cancel,
        /// so after two inversions every element keeps relative error of a few dozen ulps;
        /// `1e-4` of the largest element bounds it with margin.
        #[test]
        fn double_inversion_restores_matrix(matrix in diagonally_dominant_matrix()) {
            let restored: Matrix4 = matrix.invert().unwrap().invert().unwrap();
            prop_assert!(restored.is_similar(&matrix, 1e-4 * max_abs(&matrix)));

            let mut local: Matrix4 = matrix;
            let _ = local.invert_local().unwrap().invert_local().unwrap();
            prop_assert_eq!(local, restored);
        }

        #[test]
        fn identity_is_neutral(matrix in integer_matrix()) {
            prop_assert_eq!(matrix.mult(&Matrix4::IDENTITY), matrix);
            prop_assert_eq!(Matrix4::IDENTITY.mult(&matrix), matrix);
        }

        #[test]
        fn double_transpose(matrix in integer_matrix()) {
            prop_assert_eq!(matrix.transpose().transpose(), matrix);
            prop_assert_eq!(matrix.transpose().determinant(), matrix.determinant());
        }

        #[test]
        fn adjugate_product(matrix in integer_matrix()) {
            let scaled_identity: Matrix4 = Matrix4::IDENTITY.mult_scalar(matrix.determinant());
            prop_assert_eq!(matrix.mult(&matrix.adjoint()), scaled_identity);
            prop_assert_eq!(matrix.adjoint().mult(&matrix), scaled_identity);
        }

        #[test]
        fn duplicated_row_is_singular(matrix in integer_matrix(), from in 0_usize..4, to in 0_usize..4) {
            prop_assume!(from != to);
            let mut duplicated: Matrix4 = matrix;
            duplicated[to] = matrix[from];
            prop_assert_eq!(duplicated.determinant(), 0.0);
            prop_assert_eq!(duplicated.transpose().determinant(), 0.0);
            prop_assert!(duplicated.invert().is_err());
        }
    }
}
