//! Error types shared by the rgbspace crates.
//!
//! Transfer functions are pure and almost never fail. The failures that do
//! exist are configuration lookups against closed tables (bit depths,
//! illuminants) and degenerate chromaticity data handed to the matrix
//! derivation.
//!
//! # Usage
//!
//! ```rust
//! use rgbspace_core::{Error, Result};
//!
//! fn bit_depth(label: &str) -> Result<u32> {
//!     match label {
//!         "10 bit" => Ok(10),
//!         "12 bit" => Ok(12),
//!         other => Err(Error::unknown_configuration("bit depth", other)),
//!     }
//! }
//!
//! assert!(bit_depth("8 bit").is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by lookups and derivations in the rgbspace crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A key was looked up in a closed configuration table and is not part of it.
    ///
    /// Raised for bit-depth labels other than `"10 bit"` and `"12 bit"`.
    /// Never silently replaced by a default.
    #[error("unknown {kind} configuration: {key:?}")]
    UnknownConfiguration {
        /// What kind of table was searched (e.g. "bit depth")
        kind: &'static str,
        /// The key that was not found
        key: String,
    },

    /// The (observer, illuminant) pair is not in the illuminant table.
    #[error("unknown illuminant {illuminant:?} for observer {observer:?}")]
    UnknownIlluminant {
        /// Observer name as requested
        observer: String,
        /// Illuminant name as requested
        illuminant: String,
    },

    /// A matrix that must be inverted is singular.
    ///
    /// Usually means the primaries are collinear in the xy plane.
    #[error("singular matrix: {0}")]
    SingularMatrix(String),

    /// A numeric parameter is outside its valid range.
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A chromaticity coordinate cannot be lifted to XYZ (`y == 0`).
    #[error("invalid chromaticity ({x}, {y})")]
    InvalidChromaticity {
        /// x coordinate
        x: f64,
        /// y coordinate
        y: f64,
    },
}

impl Error {
    /// Creates an [`Error::UnknownConfiguration`] error.
    #[inline]
    pub fn unknown_configuration(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownConfiguration {
            kind,
            key: key.into(),
        }
    }

    /// Creates an [`Error::UnknownIlluminant`] error.
    #[inline]
    pub fn unknown_illuminant(observer: impl Into<String>, illuminant: impl Into<String>) -> Self {
        Self::UnknownIlluminant {
            observer: observer.into(),
            illuminant: illuminant.into(),
        }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(context: impl Into<String>) -> Self {
        Self::SingularMatrix(context.into())
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Returns `true` if this error comes from a closed-table lookup.
    #[inline]
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownConfiguration { .. } | Self::UnknownIlluminant { .. }
        )
    }
}
