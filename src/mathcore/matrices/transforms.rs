//! `matrices::transforms` submodule implements application of [`Matrix4`] to vectors
//! and helpers that build or inspect translation, scale and projection.
//!
//! "mult" family treats vector as column and computes `M * v` (row `i` dot vector),
//! "mult_across" family computes `transpose(M) * v` (column `i` dot vector)
//! without materializing the transpose.
//!
//! [`Vector3`] is augmented with `w = 1` when it is transformed as a point and with `w = 0`
//! when it is transformed as a normal (direction).
//!

use super::{Matrix4, MatrixError};
use crate::mathcore::vectors::{Vector3, Vector4};
use std::ops::Mul;

/// Homogeneous coordinate of points.
///
const POINT: f32 = 1.0;
/// Homogeneous coordinate of directions.
///
const DIRECTION: f32 = 0.0;

/// Validates slice that is transformed as homogeneous vector.
///
fn check_vector4(vec: &[f32]) -> Result<(), MatrixError> {
    if vec.len() < 4 {
        Err(MatrixError::InvalidArgument {
            argument: "vec",
            reason: "vector must contain at least 4 values",
        })
    } else {
        Ok(())
    }
}

impl Matrix4 {
    /// Returns `M * v`.
    ///
    fn transform_rows(&self, v: [f32; 4]) -> [f32; 4] {
        self.m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3])
    }
    /// Returns `transpose(M) * v`.
    ///
    fn transform_columns(&self, v: [f32; 4]) -> [f32; 4] {
        let m: &[[f32; 4]; 4] = &self.m;
        let mut result: [f32; 4] = [0.0; 4];
        for (c, elem) in result.iter_mut().enumerate() {
            *elem = m[0][c] * v[0] + m[1][c] * v[1] + m[2][c] * v[2] + m[3][c] * v[3];
        }
        result
    }
    /// Takes `xyz` of homogeneous result.
    ///
    fn truncate(v: [f32; 4]) -> Vector3 {
        Vector3::new(v[0], v[1], v[2])
    }

    /// Transforms point (`w = 1`) and returns `xyz` of the result without perspective division.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// matrix.set_translation(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(matrix.mult_vector3(&Vector3::zero()), Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(matrix * Vector3::one(), Vector3::new(2.0, 3.0, 4.0));
    /// ```
    ///
    pub fn mult_vector3(&self, vec: &Vector3) -> Vector3 {
        Matrix4::truncate(self.transform_rows([vec.x, vec.y, vec.z, POINT]))
    }
    /// Transforms point into store and returns the store.
    ///
    pub fn mult_vector3_into<'s>(&self, vec: &Vector3, store: &'s mut Vector3) -> &'s mut Vector3 {
        *store = self.mult_vector3(vec);
        store
    }
    /// Transforms point in place.
    ///
    pub fn mult_vector3_local(&self, vec: &mut Vector3) {
        *vec = self.mult_vector3(vec);
    }
    /// Transforms homogeneous vector using its own `w`.
    ///
    pub fn mult_vector4(&self, vec: &Vector4) -> Vector4 {
        Vector4::from(self.transform_rows(vec.elements()))
    }
    /// Transforms homogeneous vector into store and returns the store.
    ///
    pub fn mult_vector4_into<'s>(&self, vec: &Vector4, store: &'s mut Vector4) -> &'s mut Vector4 {
        *store = self.mult_vector4(vec);
        store
    }
    /// Transforms homogeneous vector in place.
    ///
    pub fn mult_vector4_local(&self, vec: &mut Vector4) {
        *vec = self.mult_vector4(vec);
    }
    /// Transforms first 4 elements of slice in place.
    ///
    /// Slice shorter than 4 elements is rejected with [`MatrixError::InvalidArgument`].
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::matrices::{Matrix4, MatrixError};
    /// let matrix: Matrix4 = Matrix4::from([[1.0, 2.0, 3.0, 4.0]; 4]);
    /// let mut vec: [f32; 4] = [1.0; 4];
    /// matrix.mult_array(&mut vec)?;
    /// assert_eq!(vec, [10.0; 4]);
    /// assert!(matrix.mult_array(&mut [1.0; 3]).is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn mult_array(&self, vec: &mut [f32]) -> Result<(), MatrixError> {
        check_vector4(vec)?;
        let result: [f32; 4] = self.transform_rows([vec[0], vec[1], vec[2], vec[3]]);
        vec[..4].copy_from_slice(&result);
        Ok(())
    }

    /// Transforms point (`w = 1`) by transposed matrix.
    ///
    pub fn mult_across_vector3(&self, vec: &Vector3) -> Vector3 {
        Matrix4::truncate(self.transform_columns([vec.x, vec.y, vec.z, POINT]))
    }
    /// Transforms point by transposed matrix into store and returns the store.
    ///
    pub fn mult_across_vector3_into<'s>(
        &self,
        vec: &Vector3,
        store: &'s mut Vector3,
    ) -> &'s mut Vector3 {
        *store = self.mult_across_vector3(vec);
        store
    }
    /// Transforms point by transposed matrix in place.
    ///
    pub fn mult_across_vector3_local(&self, vec: &mut Vector3) {
        *vec = self.mult_across_vector3(vec);
    }
    /// Transforms homogeneous vector by transposed matrix.
    ///
    pub fn mult_across_vector4(&self, vec: &Vector4) -> Vector4 {
        Vector4::from(self.transform_columns(vec.elements()))
    }
    /// Transforms homogeneous vector by transposed matrix into store and returns the store.
    ///
    pub fn mult_across_vector4_into<'s>(
        &self,
        vec: &Vector4,
        store: &'s mut Vector4,
    ) -> &'s mut Vector4 {
        *store = self.mult_across_vector4(vec);
        store
    }
    /// Transforms homogeneous vector by transposed matrix in place.
    ///
    pub fn mult_across_vector4_local(&self, vec: &mut Vector4) {
        *vec = self.mult_across_vector4(vec);
    }
    /// Transforms first 4 elements of slice by transposed matrix in place.
    ///
    /// Slice shorter than 4 elements is rejected with [`MatrixError::InvalidArgument`].
    ///
    pub fn mult_across_array(&self, vec: &mut [f32]) -> Result<(), MatrixError> {
        check_vector4(vec)?;
        let result: [f32; 4] = self.transform_columns([vec[0], vec[1], vec[2], vec[3]]);
        vec[..4].copy_from_slice(&result);
        Ok(())
    }

    /// Transforms direction (`w = 0`), so translation does not affect it.
    ///
    /// Result is written into store when it is present and is returned in both cases.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// matrix.set_translation(Vector3::new(5.0, 5.0, 5.0));
    /// assert_eq!(matrix.mult_normal(&Vector3::UNIT_X, None), Vector3::UNIT_X);
    ///
    /// let mut store: Vector3 = Vector3::zero();
    /// let _ = matrix.mult_normal(&Vector3::UNIT_Y, Some(&mut store));
    /// assert_eq!(store, Vector3::UNIT_Y);
    /// ```
    ///
    pub fn mult_normal(&self, vec: &Vector3, store: Option<&mut Vector3>) -> Vector3 {
        let result: Vector3 =
            Matrix4::truncate(self.transform_rows([vec.x, vec.y, vec.z, DIRECTION]));
        if let Some(store) = store {
            *store = result;
        }
        result
    }
    /// Transforms direction (`w = 0`) by transposed matrix.
    ///
    /// Result is written into store when it is present and is returned in both cases.
    ///
    pub fn mult_normal_across(&self, vec: &Vector3, store: Option<&mut Vector3>) -> Vector3 {
        let result: Vector3 =
            Matrix4::truncate(self.transform_columns([vec.x, vec.y, vec.z, DIRECTION]));
        if let Some(store) = store {
            *store = result;
        }
        result
    }
    /// Transforms point (`w = 1`), writes `xyz` of the result into store
    /// and returns its homogeneous `w` (divide by it to finish projection).
    ///
    pub fn mult_proj(&self, vec: &Vector3, store: &mut Vector3) -> f32 {
        let result: [f32; 4] = self.transform_rows([vec.x, vec.y, vec.z, POINT]);
        *store = Matrix4::truncate(result);
        result[3]
    }

    /// Returns translation column.
    ///
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }
    /// Overwrites translation column.
    ///
    pub fn set_translation(&mut self, translation: Vector3) {
        self.m[0][3] = translation.x;
        self.m[1][3] = translation.y;
        self.m[2][3] = translation.z;
    }
    /// Overwrites translation column with negated translation.
    ///
    pub fn set_inverse_translation(&mut self, translation: Vector3) {
        self.set_translation(-translation);
    }
    /// Adds translation of this matrix to vector.
    ///
    pub fn translate_vector(&self, vec: &mut Vector3) {
        *vec += self.translation();
    }
    /// Subtracts translation of this matrix from vector.
    ///
    pub fn inverse_translate_vector(&self, vec: &mut Vector3) {
        *vec -= self.translation();
    }
    /// Applies 3x3 block (rotation and scale) to vector.
    ///
    pub fn rotate_vector(&self, vec: &mut Vector3) {
        *vec = self.mult_normal(vec, None);
    }
    /// Applies transposed 3x3 block to vector (inverse of pure rotation).
    ///
    pub fn inverse_rotate_vector(&self, vec: &mut Vector3) {
        *vec = self.mult_normal_across(vec, None);
    }

    /// Overwrites diagonal of 3x3 block with scale.
    ///
    pub fn set_scale(&mut self, scale: Vector3) {
        self.m[0][0] = scale.x;
        self.m[1][1] = scale.y;
        self.m[2][2] = scale.z;
    }
    /// Returns lengths of columns of 3x3 block (scale of rotation-scale matrix).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// matrix.set_scale(Vector3::new(2.0, 3.0, 4.0));
    /// assert_eq!(matrix.scale_vector(), Vector3::new(2.0, 3.0, 4.0));
    /// ```
    ///
    pub fn scale_vector(&self) -> Vector3 {
        let column_length = |c: usize| {
            Vector3::new(self.m[0][c], self.m[1][c], self.m[2][c]).magnitude()
        };
        Vector3::new(column_length(0), column_length(1), column_length(2))
    }
    /// Multiplies columns 0-2 by corresponding scale components (scale is applied before
    /// the rest of the transform).
    ///
    pub fn scale_local(&mut self, scale: Vector3) -> &mut Self {
        for row in self.m.iter_mut() {
            row[0] *= scale.x;
            row[1] *= scale.y;
            row[2] *= scale.z;
        }
        self
    }

    /// Builds projection matrix from view frustum.
    ///
    /// `parallel` frustum gives orthographic projection, otherwise it is perspective.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let projection: Matrix4 = Matrix4::from_frustum(1.0, 3.0, -1.0, 1.0, 1.0, -1.0, false);
    /// let mut projected: Vector3 = Vector3::zero();
    /// let w: f32 = projection.mult_proj(&Vector3::new(0.0, 0.0, -1.0), &mut projected);
    /// assert_eq!(w, 1.0);
    /// assert_eq!(projected.z / w, -1.0);
    /// ```
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn from_frustum(
        near: f32,
        far: f32,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        parallel: bool,
    ) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix4::new();
        matrix.set_frustum(near, far, left, right, top, bottom, parallel);
        matrix
    }
    /// Overwrites matrix with projection matrix from view frustum.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn set_frustum(
        &mut self,
        near: f32,
        far: f32,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        parallel: bool,
    ) {
        self.load_identity();
        let (width, height, depth): (f32, f32, f32) = (right - left, top - bottom, far - near);
        if parallel {
            self.m[0][0] = 2.0 / width;
            self.m[1][1] = 2.0 / height;
            self.m[2][2] = -2.0 / depth;
            self.m[3][3] = 1.0;

            self.m[0][3] = -(right + left) / width;
            self.m[1][3] = -(top + bottom) / height;
            self.m[2][3] = -(far + near) / depth;
        } else {
            self.m[0][0] = (2.0 * near) / width;
            self.m[1][1] = (2.0 * near) / height;
            self.m[3][2] = -1.0;
            self.m[3][3] = 0.0;

            self.m[0][2] = (right + left) / width;
            self.m[1][2] = (top + bottom) / height;
            self.m[2][2] = -(far + near) / depth;
            self.m[2][3] = -(2.0 * far * near) / depth;
        }
    }
}
impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;

    /// Transforms point (see [`Matrix4::mult_vector3`]).
    ///
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.mult_vector3(&rhs)
    }
}
impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Self::Output {
        self.mult_vector4(&rhs)
    }
}
