//! Prelude module: `mathcore::prelude` re-exports all `ggmath3d::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggmath3d::mathcore::prelude::*;
//!
//! let matrix: Matrix4 = Matrix4::from_angle_axis(0.5, Vector3::UNIT_Z)?;
//! assert!((matrix.determinant() - 1.0).abs() < 1e-6);
//! assert!(almost_equal(matrix.get(2, 2)?, 1.0));
//! # Ok::<(), MatrixError>(())
//! ```
//!

// re-exports
pub use crate::mathcore::floats::*;
pub use crate::mathcore::matrices::*;
pub use crate::mathcore::vectors::*;
pub use crate::mathcore::*;
