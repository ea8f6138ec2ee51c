//! # rgbspace-color
//!
//! Colorspaces built from the lower rgbspace crates: primaries, white point,
//! RGB/XYZ matrices and a transfer function bundled into one value, plus a
//! registry of the standard spaces that YAML configuration can extend.
//!
//! # Architecture
//!
//! ```text
//!                 rgbspace-color
//!                       |
//!         +-------------+-------------+
//!         |                           |
//! rgbspace-transfer          rgbspace-primaries
//!         |                           |
//!         |                    rgbspace-math
//!         |                           |
//!         +-------------+-------------+
//!                       |
//!                 rgbspace-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use rgbspace_color::ColorspaceRegistry;
//!
//! let registry = ColorspaceRegistry::standard()?;
//!
//! let log = registry.get("ACES RGB Log")?;
//! assert_eq!(log.encode(1.0), 32768.0);
//!
//! let apple = registry.get("Apple RGB")?;
//! let xyz = apple.rgb_to_xyz([1.0, 1.0, 1.0]);
//! assert!((xyz[1] - 1.0).abs() < 1e-12);
//!
//! let cie = registry.get("CIE RGB")?;
//! let rgb = apple.convert([0.5, 0.5, 0.5], cie);
//! # let _ = rgb;
//! # Ok::<(), rgbspace_color::ColorError>(())
//! ```
//!
//! # Standard Colorspaces
//!
//! | Space | Primaries | Transfer | White Point |
//! |-------|-----------|----------|-------------|
//! | ACES RGB | AP0 | linear | D60 |
//! | ACES RGB Log | AP0 | ACESlog | D60 |
//! | ACES RGB Proxy 10 | AP0 | ACESproxy 10 bit | D60 |
//! | ACES RGB Proxy 12 | AP0 | ACESproxy 12 bit | D60 |
//! | Apple RGB | Apple | gamma 1.8 | D65 |
//! | CIE RGB | CIE | gamma 2.2 | E |
//!
//! # Features
//!
//! - `parallel` (default) - buffer helpers run on rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colorspace;
mod error;
pub mod config;
pub mod registry;

pub use colorspace::Colorspace;
pub use error::{ColorError, ColorResult};
pub use registry::ColorspaceRegistry;

// Re-export sub-crates for convenience
pub use rgbspace_math as math;
pub use rgbspace_primaries as primaries;
pub use rgbspace_transfer as transfer;
