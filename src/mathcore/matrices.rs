//! `mathcore::matrices` submodule implements [`Matrix4`], the dense 4x4 matrix which is used to
//! apply affine and projective transformations (translation, rotation, scaling, perspective,
//! view frames) to [`Vector3`](crate::mathcore::vectors::Vector3) and
//! [`Vector4`](crate::mathcore::vectors::Vector4).
//!
//! # Storage
//! Matrix is stored row-major (`[row][col]`) and is marshaled row-major by default.
//! Column-major output is produced by a transposing copy at the boundary
//! ([`Matrix4::get_into_ordered`], [`Matrix4::fill_float_array`]), never stored.
//!
//! # Local, into and plain operations
//! Every operation that produces a matrix comes in up to three flavours:
//! * plain (`mult`, `invert`, ...) returns new matrix and leaves receiver untouched;
//! * `_into` writes result into caller-supplied store (no per-frame allocation) and returns it;
//! * `_local` overwrites receiver.
//!
//! Results are always computed into a stack scratch buffer before anything is written,
//! so `_local` operations never read partially overwritten operands.
//!
//! # Errors
//! Fallible operations return [`MatrixError`]. Size mismatches come in two tiers:
//! [`MatrixError::InvalidArgument`] for validated contracts and [`MatrixError::IndexOutOfRange`]
//! for buffers that are only accessed by index. Validation always happens before any write,
//! so failed call leaves everything untouched.
//!

mod algebra;
mod rotations;
mod transforms;

use crate::mathcore::floats::{almost_equal, almost_equal_with, EPSILON};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// [`MatrixError`] enum lists all errors that could occur during [`Matrix4`] operations.
///
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Required argument was absent.
    ///
    #[error("`{argument}` argument is missing")]
    MissingInput {
        /// Name of the missing argument.
        ///
        argument: &'static str,
    },
    /// Argument violates stated range or size contract.
    ///
    #[error("`{argument}` argument is invalid: {reason}")]
    InvalidArgument {
        /// Name of the invalid argument.
        ///
        argument: &'static str,
        /// Violated contract.
        ///
        reason: &'static str,
    },
    /// Buffer is shorter than the index that was accessed.
    ///
    #[error("index {index} is out of range for buffer of length {len}")]
    IndexOutOfRange {
        /// First index that is out of range.
        ///
        index: usize,
        /// Length of the buffer.
        ///
        len: usize,
    },
    /// Matrix can't be inverted because its determinant is zero.
    ///
    #[error("matrix is singular (determinant is {determinant})")]
    Singular {
        /// Determinant of the matrix.
        ///
        determinant: f32,
    },
}

/// Validates row, column or column index.
///
fn check_index(argument: &'static str, index: usize) -> Result<usize, MatrixError> {
    if index < 4 {
        Ok(index)
    } else {
        Err(MatrixError::InvalidArgument {
            argument,
            reason: "index must be in [0, 3]",
        })
    }
}
/// Validates buffer that is going to be accessed by index up to `required - 1`.
///
fn check_indexable(len: usize, required: usize) -> Result<(), MatrixError> {
    if len < required {
        Err(MatrixError::IndexOutOfRange { index: len, len })
    } else {
        Ok(())
    }
}

/// [`Matrix4`] struct is a dense 4x4 `f32` matrix that represents linear, affine or projective
/// transform.
///
/// Rows 0-2 x columns 0-2 are linear (rotation and scale) block, column 3 of rows 0-2 is the
/// translation and row 3 is the projective row.
///
/// Default value is the identity matrix.
///
/// # Example
/// ```rust
/// # use ggmath3d::mathcore::matrices::Matrix4;
/// let matrix: Matrix4 = Matrix4::new();
/// assert!(matrix.is_identity());
/// assert_eq!(matrix, Matrix4::IDENTITY);
/// assert_ne!(matrix, Matrix4::ZERO);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Matrix4 {
    /// Underlying row-major array.
    ///
    m: [[f32; 4]; 4],
}
impl Matrix4 {
    /// Identity matrix.
    ///
    pub const IDENTITY: Matrix4 = Matrix4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
    /// Matrix with all components equal to zero.
    ///
    pub const ZERO: Matrix4 = Matrix4 { m: [[0.0; 4]; 4] };

    /// Initializes identity matrix.
    ///
    pub const fn new() -> Self {
        Self::IDENTITY
    }
    /// Initializes matrix from 16 values that are given in row-major order.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from_values(
    ///     1.0, 2.0, 3.0, 4.0,
    ///     5.0, 6.0, 7.0, 8.0,
    ///     9.0, 10.0, 11.0, 12.0,
    ///     13.0, 14.0, 15.0, 16.0,
    /// );
    /// assert_eq!(matrix.get(1, 2), Ok(7.0));
    /// ```
    ///
    #[allow(clippy::too_many_arguments)]
    pub const fn from_values(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Matrix4 {
            m: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }
    /// Initializes matrix from slice of exactly 16 values in row-major order.
    ///
    /// Empty slice or slice of any other length is rejected with
    /// [`MatrixError::InvalidArgument`].
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let values: Vec<f32> = (1..=16).map(|x| x as f32).collect();
    /// let matrix: Matrix4 = Matrix4::from_slice(&values)?;
    /// assert_eq!(matrix.get(3, 0)?, 13.0);
    ///
    /// assert!(Matrix4::from_slice(&[]).is_err());
    /// assert!(Matrix4::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn from_slice(values: &[f32]) -> Result<Self, MatrixError> {
        let mut matrix: Matrix4 = Matrix4::new();
        matrix.set_slice(values, true)?;
        Ok(matrix)
    }

    /// Returns matrix as an array of rows.
    ///
    pub fn as_array(&self) -> [[f32; 4]; 4] {
        self.m
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Matrix4 {
        Matrix4 {
            m: self.m.map(|row| row.map(&f)),
        }
    }
    /// Combines matrices by applying function on their elements.
    ///
    pub fn combine(self, other: Matrix4, f: impl Fn(f32, f32) -> f32) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix4::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                matrix.m[r][c] = f(self.m[r][c], other.m[r][c]);
            }
        }
        matrix
    }

    /// Overwrites every component with 16 values in row-major order.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn set_values(
        &mut self,
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) {
        *self = Matrix4::from_values(
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        );
    }
    /// Overwrites every component from slice of exactly 16 values that are either
    /// row-major (`row_major == true`) or column-major.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// let values: Vec<f32> = (1..=16).map(|x| x as f32).collect();
    /// matrix.set_slice(&values, false)?;
    /// assert_eq!(matrix.column(0)?, [1.0, 2.0, 3.0, 4.0]);
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn set_slice(&mut self, values: &[f32], row_major: bool) -> Result<(), MatrixError> {
        if values.len() != 16 {
            return Err(MatrixError::InvalidArgument {
                argument: "values",
                reason: "exactly 16 values are required",
            });
        }
        for (i, &value) in values.iter().enumerate() {
            let (r, c): (usize, usize) = if row_major { (i / 4, i % 4) } else { (i % 4, i / 4) };
            self.m[r][c] = value;
        }
        Ok(())
    }
    /// Overwrites every component from four rows.
    ///
    /// Outer slice must contain exactly 4 rows and first row must contain at least 4 values
    /// ([`MatrixError::InvalidArgument`] otherwise). Following rows are only accessed by index,
    /// so shorter row is reported as [`MatrixError::IndexOutOfRange`].
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// let row: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    /// matrix.set_rows(&[&row, &row, &row, &row])?;
    /// assert_eq!(matrix.column(3)?, [4.0; 4]);
    ///
    /// let err = matrix.set_rows(&[&row, &row, &row[..1], &row]);
    /// assert_eq!(err, Err(MatrixError::IndexOutOfRange { index: 1, len: 1 }));
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn set_rows(&mut self, rows: &[&[f32]]) -> Result<(), MatrixError> {
        if rows.len() != 4 {
            return Err(MatrixError::InvalidArgument {
                argument: "rows",
                reason: "exactly 4 rows are required",
            });
        }
        if rows[0].len() < 4 {
            return Err(MatrixError::InvalidArgument {
                argument: "rows",
                reason: "rows must contain at least 4 values",
            });
        }
        for row in &rows[1..] {
            check_indexable(row.len(), 4)?;
        }
        for (r, row) in rows.iter().enumerate() {
            self.m[r].copy_from_slice(&row[..4]);
        }
        Ok(())
    }
    /// Copies all components of given matrix into this one.
    ///
    /// Absent matrix resets this one to identity.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::Matrix4;
    /// let mut matrix: Matrix4 = Matrix4::ZERO;
    /// matrix.copy_from(None);
    /// assert!(matrix.is_identity());
    /// ```
    ///
    pub fn copy_from(&mut self, other: Option<&Matrix4>) {
        match other {
            Some(other) => self.m = other.m,
            None => self.load_identity(),
        }
    }
    /// Resets matrix to identity.
    ///
    pub fn load_identity(&mut self) {
        self.m = Matrix4::IDENTITY.m;
    }
    /// Resets every component to zero and returns the matrix for chaining.
    ///
    pub fn zero(&mut self) -> &mut Self {
        self.m = Matrix4::ZERO.m;
        self
    }

    /// Returns component at given row and column.
    ///
    /// Both indices must be in [0, 3] ([`MatrixError::InvalidArgument`] otherwise).
    ///
    pub fn get(&self, row: usize, col: usize) -> Result<f32, MatrixError> {
        Ok(self.m[check_index("row", row)?][check_index("col", col)?])
    }
    /// Sets component at given row and column.
    ///
    /// Both indices must be in [0, 3] ([`MatrixError::InvalidArgument`] otherwise).
    ///
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MatrixError> {
        self.m[check_index("row", row)?][check_index("col", col)?] = value;
        Ok(())
    }

    /// Fills buffer of exactly 16 elements in row-major order.
    ///
    pub fn get_into(&self, buffer: &mut [f32]) -> Result<(), MatrixError> {
        self.get_into_ordered(buffer, true)
    }
    /// Fills buffer of exactly 16 elements in row-major (`row_major == true`) or
    /// column-major order.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let matrix: Matrix4 = Matrix4::from([[1.0, 2.0, 3.0, 4.0]; 4]);
    /// let mut buffer: [f32; 16] = [0.0; 16];
    /// matrix.get_into_ordered(&mut buffer, false)?;
    /// assert_eq!(buffer[..4], [1.0; 4]);
    ///
    /// assert!(matrix.get_into(&mut [0.0; 15]).is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn get_into_ordered(&self, buffer: &mut [f32], row_major: bool) -> Result<(), MatrixError> {
        if buffer.len() != 16 {
            return Err(MatrixError::InvalidArgument {
                argument: "buffer",
                reason: "buffer must hold exactly 16 values",
            });
        }
        self.write_flat(buffer, !row_major);
        Ok(())
    }
    /// Fills first 16 elements of buffer in row-major or column-major (`column_major == true`)
    /// order.
    ///
    /// Longer buffers are allowed; shorter buffer is reported as
    /// [`MatrixError::IndexOutOfRange`].
    ///
    pub fn fill_float_array(&self, buffer: &mut [f32], column_major: bool) -> Result<(), MatrixError> {
        check_indexable(buffer.len(), 16)?;
        self.write_flat(buffer, column_major);
        Ok(())
    }
    /// Writes all components into buffer that is known to be big enough.
    ///
    fn write_flat(&self, buffer: &mut [f32], column_major: bool) {
        for r in 0..4 {
            for c in 0..4 {
                let i: usize = if column_major { c * 4 + r } else { r * 4 + c };
                buffer[i] = self.m[r][c];
            }
        }
    }

    /// Returns column with given index.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// assert_eq!(Matrix4::IDENTITY.column(1)?, [0.0, 1.0, 0.0, 0.0]);
    /// assert!(Matrix4::IDENTITY.column(4).is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn column(&self, index: usize) -> Result<[f32; 4], MatrixError> {
        let c: usize = check_index("index", index)?;
        Ok([self.m[0][c], self.m[1][c], self.m[2][c], self.m[3][c]])
    }
    /// Writes column with given index into first 4 elements of store and returns the store.
    ///
    /// Store shorter than 4 elements is reported as [`MatrixError::IndexOutOfRange`].
    ///
    pub fn column_into<'s>(
        &self,
        index: usize,
        store: &'s mut [f32],
    ) -> Result<&'s mut [f32], MatrixError> {
        let column: [f32; 4] = self.column(index)?;
        check_indexable(store.len(), 4)?;
        store[..4].copy_from_slice(&column);
        Ok(store)
    }
    /// Overwrites column with given index with first 4 values.
    ///
    /// Slice shorter than 4 values is reported as [`MatrixError::IndexOutOfRange`].
    ///
    pub fn set_column(&mut self, index: usize, values: &[f32]) -> Result<(), MatrixError> {
        let c: usize = check_index("index", index)?;
        check_indexable(values.len(), 4)?;
        for (r, &value) in values[..4].iter().enumerate() {
            self.m[r][c] = value;
        }
        Ok(())
    }

    /// Checks whether matrix is identity: every diagonal component is within
    /// [`EPSILON`](crate::mathcore::floats::EPSILON) of 1 and every other component is within
    /// it of 0.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// matrix.set(3, 3, 1.0 + 1e-9)?;
    /// assert!(matrix.is_identity());
    /// matrix.set(3, 3, 1.0 + 1e-6)?;
    /// assert!(!matrix.is_identity());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn is_identity(&self) -> bool {
        self.m.iter().enumerate().all(|(r, row)| {
            row.iter()
                .enumerate()
                .all(|(c, &value)| almost_equal(value, if r == c { 1.0 } else { 0.0 }))
        })
    }
    /// Same check as [`Matrix4::is_identity`] as a free function.
    ///
    /// Absent matrix is reported as [`MatrixError::MissingInput`].
    ///
    pub fn equal_identity(matrix: Option<&Matrix4>) -> Result<bool, MatrixError> {
        matrix
            .map(Matrix4::is_identity)
            .ok_or(MatrixError::MissingInput { argument: "matrix" })
    }
    /// Checks whether every component differs from the other matrix by no more than tolerance.
    ///
    pub fn is_similar(&self, other: &Matrix4, tolerance: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(&a, &b)| almost_equal_with(a, b, tolerance))
    }
}
impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::IDENTITY
    }
}
impl Index<usize> for Matrix4 {
    type Output = [f32; 4];

    /// Returns row with given index.
    ///
    /// Panics if index is out of [0, 3], as slices do;
    /// [`Matrix4::get`] is the checked alternative.
    ///
    fn index(&self, index: usize) -> &Self::Output {
        &self.m[index]
    }
}
impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.m[index]
    }
}
impl PartialEq for Matrix4 {
    /// Checks if matrices are equal (every component within
    /// [`EPSILON`](crate::mathcore::floats::EPSILON)).
    ///
    fn eq(&self, other: &Self) -> bool {
        self.is_similar(other, EPSILON)
    }
}
impl From<[[f32; 4]; 4]> for Matrix4 {
    /// Shorthand for writing `Matrix4 { m: ... }` (array of rows).
    ///
    fn from(m: [[f32; 4]; 4]) -> Self {
        Matrix4 { m }
    }
}
impl From<[f32; 16]> for Matrix4 {
    /// Row-major flat array.
    ///
    fn from(values: [f32; 16]) -> Self {
        let mut m: [[f32; 4]; 4] = [[0.0; 4]; 4];
        for (i, value) in values.into_iter().enumerate() {
            m[i / 4][i % 4] = value;
        }
        Matrix4 { m }
    }
}
impl From<Matrix4> for [[f32; 4]; 4] {
    fn from(matrix: Matrix4) -> Self {
        matrix.m
    }
}
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix4")?;
        for row in &self.m {
            write!(f, "\n[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
