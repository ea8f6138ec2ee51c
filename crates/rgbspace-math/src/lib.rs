//! # rgbspace-math
//!
//! Matrix math for RGB <-> CIE XYZ conversions.
//!
//! - [`Mat3`] - 3x3 double precision matrix, row-major
//! - [`Vec3`] - RGB / XYZ triplet (re-export of [`glam::DVec3`])
//!
//! Everything is `f64`: the ACES log encoding spans 32 stops and round trips
//! are expected to hold to about 1e-9 relative, which single precision cannot
//! deliver.
//!
//! # Convention
//!
//! Row-major storage, column vectors:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rgbspace_math::{Mat3, Vec3};
//!
//! let aces_to_xyz = Mat3::from_rows([
//!     [0.9525523959, 0.0000000000, 0.0000936786],
//!     [0.3439664498, 0.7281660966, -0.0721325464],
//!     [0.0000000000, 0.0000000000, 1.0088251844],
//! ]);
//!
//! let xyz = aces_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;

pub use mat3::*;

/// RGB or XYZ triplet.
pub use glam::DVec3 as Vec3;
