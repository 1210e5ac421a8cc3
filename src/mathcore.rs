//! `ggmath3d::mathcore` module is a core that implements all math functionality of the crate.
//!
//! # Prelude
//! `ggmath3d::mathcore` prelude can be imported with `use ggmath3d::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent points and directions in 3d space.
//! Transformations (translation, rotation, scale, view frames and projections) are represented by
//! dense 4x4 matrices that act on vectors in homogeneous coordinates,
//! so a whole chain of transformations collapses into a single matrix product.
//!
//! All floating point comparisons go through [`floats::almost_equal`].
//!

// submodules
pub mod floats;
pub mod matrices;
pub mod vectors;

// prelude
pub mod prelude;
