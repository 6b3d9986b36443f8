//! # transform3d
//!
//! A minimal 3D linear-algebra core: a 3-component vector and fixed 3x3 / 4x4
//! matrices with the standard affine transform factories.
//!
//! Matrices are row-major and act on column vectors (`M * v`), so a composed
//! `translation * rotation * scale` applies the scale first. Rotation angles
//! are in degrees.
//!
//! ```rust
//! use transform3d::prelude::*;
//!
//! let model = Matrix4::translation(5.0, 1.0, -2.0)
//!     * Matrix4::rotation_z(45.0)
//!     * Matrix4::scale(2.0, 3.0, 4.0);
//!
//! let p = model.transform_point(Vector3::new(1.0, 0.0, 0.0));
//! let d = model.transform_direction(Vector3::new(1.0, 0.0, 0.0));
//! assert!((p - d - Vector3::new(5.0, 1.0, -2.0)).magnitude() < 1e-5);
//!
//! // Row-major buffer for a shader uniform
//! let uniform: [f32; 16] = model.to_row_major_array();
//! assert_eq!(uniform[3], 5.0);
//! ```

pub mod numerics;

pub use numerics::error::ShapeError;
pub use numerics::types::matrix::{Matrix3, Matrix4, SquareMatrix, HOMOGENEOUS_W_EPSILON};
pub use numerics::types::point::Point3;
pub use numerics::types::traits::{ApplyToVector, FloatingPoint};
pub use numerics::types::vector::Vector3;

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{ApplyToVector, FloatingPoint, Matrix3, Matrix4, Point3, ShapeError, Vector3};
}
