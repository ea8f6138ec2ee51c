//! Error types for colorspace lookup and configuration.
//!
//! Numeric failures (singular matrices, bad chromaticities, unknown bit
//! depths) come from the lower crates as [`rgbspace_core::Error`] and are
//! wrapped in [`ColorError::Core`]. Everything that involves names or
//! configuration files is raised here.

use thiserror::Error;

/// Colorspace operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Error from the transfer, primaries or math crates.
    #[error(transparent)]
    Core(#[from] rgbspace_core::Error),

    /// No colorspace with this name is registered.
    #[error("unknown colorspace: {name:?}")]
    UnknownColorspace {
        /// Name as requested.
        name: String,
    },

    /// A colorspace with this name is already registered.
    #[error("colorspace already registered: {name:?}")]
    DuplicateColorspace {
        /// Conflicting name.
        name: String,
    },

    /// A flat RGB buffer whose length is not a multiple of 3.
    #[error("RGB buffer length {len} is not a multiple of 3")]
    BufferLength {
        /// Buffer length in samples.
        len: usize,
    },

    /// Configuration is well-formed YAML but semantically invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColorError {
    /// Creates a [`ColorError::UnknownColorspace`] error.
    #[inline]
    pub fn unknown_colorspace(name: impl Into<String>) -> Self {
        Self::UnknownColorspace { name: name.into() }
    }
}

/// Result type for colorspace operations.
pub type ColorResult<T> = Result<T, ColorError>;
