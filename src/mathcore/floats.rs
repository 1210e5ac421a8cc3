//! `mathcore::floats` submodule implements consts and functions that help in
//! work with `f32` type.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality
//! that every matrix and vector comparison in this crate goes through.
//!

/// Constant that is used in floating point equality.
///
/// It represents absolute amount of difference that is allowed for two `f32` values to still be
/// considered equal. Matrices and vectors compare every component against it.
///
pub const EPSILON: f32 = 1e-8;
/// Constant that is used to decide whether a vector has unit length.
///
/// Squared length of a normalized `f32` vector is only accurate to a few ULPs,
/// so this is looser than [`EPSILON`].
///
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-5;

/// This function implements floating point equality for `ggmath3d` crate.
///
/// Two values are equal if their absolute difference does not exceed [`EPSILON`].
/// It is used for implementing `PartialEq` on types that are based on float.
///
/// # Example
/// ```rust
/// # use ggmath3d::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(1.0, 1.0 + 1e-9));
/// assert!(!almost_equal(1.0, 1.0 + 1e-6));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    almost_equal_with(a, b, EPSILON)
}
/// Same as [`almost_equal`], but with caller-chosen absolute tolerance.
///
/// `NaN` is never equal to anything.
///
/// # Example
/// ```rust
/// # use ggmath3d::mathcore::floats::almost_equal_with;
/// assert!(almost_equal_with(1.0, 1.05, 0.1));
/// assert!(!almost_equal_with(f32::NAN, f32::NAN, 1.0));
/// ```
///
pub fn almost_equal_with(a: f32, b: f32, tolerance: f32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::{almost_equal, almost_equal_with, EPSILON};

    #[test]
    fn tolerance_boundary() {
        assert!(almost_equal(0.0, EPSILON));
        assert!(almost_equal(0.0, -EPSILON));
        assert!(!almost_equal(0.0, 2.0 * EPSILON));

        // `1.0 + 1e-9` is not representable and collapses to `1.0`.
        assert!(almost_equal(1.0, 1.0 + 1e-9));
        assert!(!almost_equal(1.0, 1.0 + 1e-6));

        assert!(!almost_equal_with(f32::NAN, 0.0, f32::MAX));
        assert!(almost_equal_with(f32::INFINITY, f32::INFINITY, 0.0));
    }
}
