//! # GGMath3D
//!
//! **GGMath3D** - dense 4x4 transform matrices for real-time 3d rendering, written in pure Rust.
//!
//! [`Matrix4`](mathcore::matrices::Matrix4) is the workhorse: it is built from rotations,
//! view frames and frustums, combined by multiplication, inverted
//! and applied to [`Vector3`](mathcore::vectors::Vector3) and
//! [`Vector4`](mathcore::vectors::Vector4).
//!
//! # Example
//! ```rust
//! use ggmath3d::mathcore::prelude::*;
//!
//! let mut model: Matrix4 = Matrix4::new();
//! model.set_translation(Vector3::new(0.0, 0.0, -5.0));
//! let _ = model.scale_local(Vector3::new(2.0, 2.0, 2.0));
//!
//! let world: Vector3 = model.mult_vector3(&Vector3::UNIT_X);
//! assert_eq!(world, Vector3::new(2.0, 0.0, -5.0));
//! assert_eq!(model.invert()?.mult_vector3(&world), Vector3::UNIT_X);
//! # Ok::<(), MatrixError>(())
//! ```
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;

extern crate seq_macro;

extern crate serde;
extern crate thiserror;

// cores
pub mod mathcore;
