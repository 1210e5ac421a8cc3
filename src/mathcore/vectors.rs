//! `mathcore::vectors` submodule implements three- and four-dimensional vectors which are
//! used as operands and results of [`Matrix4`](crate::mathcore::matrices::Matrix4) transforms.
//!
//! [`Vector3`] represents both points and directions; which one it is depends on the transform
//! that is applied to it (points are augmented with `w = 1`, directions with `w = 0`).
//! [`Vector4`] carries its homogeneous coordinate explicitly.
//!

use crate::mathcore::floats::almost_equal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Macros that implement all common associated functions and methods on vectors could be replaced
// by traits and their default implementations, but with generic consts it would be possible to
// implement those traits multiple times, and associated constants can't size arrays until
// `generic_const_exprs` hits stable. So currently all of this is handled by macros.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` and `set` functions and
/// `From<[f32; $size]>` trait implementation.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([0.0; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([1.0; $size])
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from(self.elements().map(f))
            }
            /// Combines vectors by applying function on their elements.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size], [f32; $size]) = (self.elements(), other.elements());
                let mut elements: [f32; $size] = [0.0; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }

            /// Returns squared magnitude of a vector (vector length).
            ///
            pub fn sqr_magnitude(&self) -> f32 {
                self.elements().iter().fold(0.0, |acc, n| acc + *n * *n)
            }
            /// Returns magnitude of vector.
            ///
            pub fn magnitude(&self) -> f32 {
                self.sqr_magnitude().sqrt()
            }
            /// Returns new vector that is normalized.
            ///
            /// Zero vector has no direction, so it is returned unchanged.
            ///
            pub fn normalized(self) -> Self {
                let magnitude: f32 = self.magnitude();
                if magnitude == 0.0 {
                    return self;
                }
                self / magnitude
            }
            /// Checks whether vector has unit length
            /// (up to [`UNIT_LENGTH_TOLERANCE`](crate::mathcore::floats::UNIT_LENGTH_TOLERANCE)).
            ///
            pub fn is_unit(&self) -> bool {
                (self.sqr_magnitude() - 1.0).abs()
                    <= crate::mathcore::floats::UNIT_LENGTH_TOLERANCE
            }

            /// Multiplies two vectors component-wise.
            ///
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot_product(self, other: Self) -> f32 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + *a * *b)
            }
        }
        impl PartialEq for $struct {
            fn eq(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| almost_equal(a, b))
            }
        }
        impl From<$struct> for [f32; $size] {
            fn from(vector: $struct) -> Self {
                vector.elements()
            }
        }
    };
}

// All the following macros depend on [`impl_vector`] macro.
/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` trait for vector.
///
// This could've been integrated in `impl_vector_vector_operations` and
// `impl_vector_rhs_operations` macros but until `concat_idents` macro is in stable it is not possible.
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Mul for $struct_name {
            type Output = f32;

            /// Performs dot product operation on two vectors.
            ///
            fn mul(self, other: Self) -> Self::Output {
                self.dot_product(other)
            }
        }
        impl_vector_vector_operations!($struct_name, Self, ((Add, add, +),
                                                            (Sub, sub, -),));
        impl_vector_assignoperations!($struct_name, Self, ((AddAssign, add_assign, +),
                                                           (SubAssign, sub_assign, -),));
        impl_vector_rhs_operations!($struct_name, f32, ((Mul, mul, *),
                                                        (Div, div, /),));
        impl_vector_assignoperations!($struct_name, f32, ((MulAssign, mul_assign, *),
                                                          (DivAssign, div_assign, /),));
    }
}

/// [`Vector3`] struct represents three-dimensional vector and three-dimensional point with `f32` coordinates.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vector3 {
    /// Unit vector along X axis.
    ///
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// Unit vector along Y axis.
    ///
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// Unit vector along Z axis.
    ///
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Initializes vector from its components.
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
    }

    /// Returns vector that is perpendicular to both vectors (right-handed cross product).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath3d::mathcore::vectors::Vector3;
    /// assert_eq!(Vector3::UNIT_X.cross_product(Vector3::UNIT_Y), Vector3::UNIT_Z);
    /// ```
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}
impl_vector!(Vector3, 3);
impl_vector_operations!(Vector3);
impl BitXor for Vector3 {
    type Output = Self;

    /// Returns cross product of three-dimensional vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross_product(rhs)
    }
}
impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

/// [`Vector4`] struct represents four-dimensional vector: three-dimensional vector or point
/// in homogeneous coordinates.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector4 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,

    /// W (homogeneous) component of vector.
    ///
    pub w: f32,
}
impl Vector4 {
    /// Initializes vector from its components.
    ///
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }
    /// Initializes homogeneous point (`w = 1`).
    ///
    pub fn from_point(point: Vector3) -> Self {
        Vector4::new(point.x, point.y, point.z, 1.0)
    }
    /// Initializes homogeneous direction (`w = 0`).
    ///
    pub fn from_direction(direction: Vector3) -> Self {
        Vector4::new(direction.x, direction.y, direction.z, 0.0)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 4]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
        self.w = elements[3];
    }

    /// Drops homogeneous component.
    ///
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}
impl_vector!(Vector4, 4);
impl_vector_operations!(Vector4);
impl From<[f32; 4]> for Vector4 {
    fn from(arr: [f32; 4]) -> Self {
        Vector4 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
            w: arr[3],
        }
    }
}
