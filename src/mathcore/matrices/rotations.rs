//! `matrices::rotations` submodule implements builders of rotation and view frame matrices.
//!
//! Rotations follow right-hand rule: positive angle rotates counterclockwise
//! when looking from the tip of the axis towards the origin.
//!

use super::{Matrix4, MatrixError};
use crate::mathcore::vectors::Vector3;

impl Matrix4 {
    /// Initializes rotation matrix by angle (in radians) around arbitrary axis.
    ///
    /// Axis is normalized, zero-length axis is rejected with [`MatrixError::InvalidArgument`].
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::{Matrix4, MatrixError}, vectors::Vector3};
    /// # use std::f32::consts::FRAC_PI_2;
    /// let rotation: Matrix4 = Matrix4::from_angle_axis(FRAC_PI_2, Vector3::new(0.0, 0.0, 5.0))?;
    /// let rotated: Vector3 = rotation.mult_vector3(&Vector3::UNIT_X);
    /// assert!((rotated - Vector3::UNIT_Y).magnitude() < 1e-6);
    ///
    /// assert!(Matrix4::from_angle_axis(FRAC_PI_2, Vector3::zero()).is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn from_angle_axis(angle: f32, axis: Vector3) -> Result<Matrix4, MatrixError> {
        let mut matrix: Matrix4 = Matrix4::new();
        matrix.set_angle_axis(angle, axis)?;
        Ok(matrix)
    }
    /// Overwrites matrix with rotation by angle (in radians) around arbitrary axis.
    ///
    /// Matrix is left untouched if axis has zero length.
    ///
    pub fn set_angle_axis(&mut self, angle: f32, axis: Vector3) -> Result<(), MatrixError> {
        let length: f32 = axis.magnitude();
        if length == 0.0 || !length.is_finite() {
            log::debug!("rejecting rotation axis {axis:?} (length is {length})");
            return Err(MatrixError::InvalidArgument {
                argument: "axis",
                reason: "axis must have finite non-zero length",
            });
        }
        self.set_rotation(angle, axis / length);
        Ok(())
    }
    /// Initializes rotation matrix by angle (in radians) around unit axis.
    ///
    /// Axis that is not of unit length is rejected with [`MatrixError::InvalidArgument`].
    ///
    pub fn from_angle_normal_axis(angle: f32, axis: Vector3) -> Result<Matrix4, MatrixError> {
        let mut matrix: Matrix4 = Matrix4::new();
        matrix.set_angle_normal_axis(angle, axis)?;
        Ok(matrix)
    }
    /// Overwrites matrix with rotation by angle (in radians) around unit axis.
    ///
    /// Matrix is left untouched if axis is not of unit length (up to
    /// [`UNIT_LENGTH_TOLERANCE`](crate::mathcore::floats::UNIT_LENGTH_TOLERANCE)).
    ///
    pub fn set_angle_normal_axis(&mut self, angle: f32, axis: Vector3) -> Result<(), MatrixError> {
        if !axis.is_unit() {
            log::debug!("rejecting rotation axis {axis:?} (it is not normalized)");
            return Err(MatrixError::InvalidArgument {
                argument: "axis",
                reason: "axis must have unit length",
            });
        }
        self.set_rotation(angle, axis);
        Ok(())
    }
    /// Writes rotation around unit axis (Rodrigues' formula) with identity projective row
    /// and zero translation.
    ///
    /// Angle is not wrapped into [0, TAU) before taking sine and cosine,
    /// so `-angle` gives exactly transposed rotation.
    ///
    fn set_rotation(&mut self, angle: f32, axis: Vector3) {
        let (sin, cos): (f32, f32) = angle.sin_cos();
        let one_minus_cos: f32 = 1.0 - cos;
        let (x, y, z): (f32, f32, f32) = (axis.x, axis.y, axis.z);
        let (xy, xz, yz): (f32, f32, f32) = (
            x * y * one_minus_cos,
            x * z * one_minus_cos,
            y * z * one_minus_cos,
        );
        let (x_sin, y_sin, z_sin): (f32, f32, f32) = (x * sin, y * sin, z * sin);

        self.m = [
            [x * x * one_minus_cos + cos, xy - z_sin, xz + y_sin, 0.0],
            [xy + z_sin, y * y * one_minus_cos + cos, yz - x_sin, 0.0],
            [xz - y_sin, yz + x_sin, z * z * one_minus_cos + cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
    }

    /// Overwrites upper 3x4 block with rotation by Euler angles (in degrees).
    ///
    /// Rotation around x axis is applied first, then around y and then around z
    /// (`Rz * Ry * Rx`). Translation is zeroed, projective row is left untouched.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let mut matrix: Matrix4 = Matrix4::new();
    /// matrix.angle_rotation(Vector3::new(0.0, 0.0, 90.0));
    /// let rotated: Vector3 = matrix.mult_vector3(&Vector3::UNIT_X);
    /// assert!((rotated - Vector3::UNIT_Y).magnitude() < 1e-6);
    /// ```
    ///
    pub fn angle_rotation(&mut self, degrees: Vector3) {
        let (sr, cr): (f32, f32) = degrees.x.to_radians().sin_cos();
        let (sp, cp): (f32, f32) = degrees.y.to_radians().sin_cos();
        let (sy, cy): (f32, f32) = degrees.z.to_radians().sin_cos();

        self.m[0] = [cp * cy, sr * sp * cy - cr * sy, cr * sp * cy + sr * sy, 0.0];
        self.m[1] = [cp * sy, sr * sp * sy + cr * cy, cr * sp * sy - sr * cy, 0.0];
        self.m[2] = [-sp, sr * cp, cr * cp, 0.0];
    }

    /// Initializes view matrix from camera frame.
    ///
    /// See [`Matrix4::set_frame`].
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::{matrices::Matrix4, vectors::Vector3};
    /// let view: Matrix4 = Matrix4::from_frame(
    ///     Vector3::new(1.0, 2.0, 3.0),
    ///     Vector3::new(0.0, 0.0, -1.0),
    ///     Vector3::UNIT_Y,
    ///     -Vector3::UNIT_X,
    /// );
    /// assert_eq!(view.mult_vector3(&Vector3::new(1.0, 2.0, 3.0)), Vector3::zero());
    /// ```
    ///
    pub fn from_frame(location: Vector3, direction: Vector3, up: Vector3, left: Vector3) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix4::new();
        matrix.set_frame(location, direction, up, left);
        matrix
    }
    /// Overwrites matrix with view matrix that moves `location` to the origin and looks along
    /// `direction` (which becomes -z).
    ///
    /// Side axis is recomputed as `direction x up` and up axis as `side x direction`,
    /// so given `left` is not read.
    ///
    pub fn set_frame(&mut self, location: Vector3, direction: Vector3, up: Vector3, _left: Vector3) {
        let side: Vector3 = direction ^ up;
        let up: Vector3 = side ^ direction;

        self.m = [
            [side.x, side.y, side.z, -side.dot_product(location)],
            [up.x, up.y, up.z, -up.dot_product(location)],
            [-direction.x, -direction.y, -direction.z, direction.dot_product(location)],
            [0.0, 0.0, 0.0, 1.0],
        ];
    }
}
