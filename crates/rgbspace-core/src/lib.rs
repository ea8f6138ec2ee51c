//! # rgbspace-core
//!
//! Foundation crate of the rgbspace workspace.
//!
//! The numeric crates report failures through the [`Error`] enum defined here.
//! `rgbspace-color` wraps it in its own `ColorError` next to the lookup and
//! configuration failures:
//!
//! ```text
//! rgbspace-core (this crate)
//!    ^
//!    |
//!    +-- rgbspace-math (matrices)
//!    +-- rgbspace-transfer (transfer functions)
//!    +-- rgbspace-primaries (primaries, illuminants)
//!    +-- rgbspace-color (colorspaces, registry)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;
