//! # rgbspace-transfer
//!
//! Transfer functions for the ACES RGB family and the power-law RGB spaces.
//!
//! A transfer function maps scene-linear light to an encoded code value
//! (**encode**, the forward direction) and back (**decode**, the inverse).
//!
//! # Supported Transfer Functions
//!
//! | Module | Encoding | Code value range |
//! |--------|----------|------------------|
//! | [`linear`] | ACES RGB (identity) | unbounded |
//! | [`aces_log`] | ACES RGB Log, 16 bit | [0, 65535] |
//! | [`aces_proxy`] | ACES RGB Proxy, 10 / 12 bit | [0, 1023.5] / [0, 4095.5] |
//! | [`gamma`] | Apple RGB (1.8), CIE RGB (2.2) | [0, 1] |
//!
//! Every function is pure. Constant sets ([`LogConstants`], [`ProxyConstants`])
//! are `const` values, so they can be shared freely between threads.
//!
//! # Usage
//!
//! ```rust
//! use rgbspace_transfer::{aces_log, aces_proxy, TransferFunction, BitDepth};
//!
//! assert_eq!(aces_log::encode(1.0), 32768.0);
//! assert_eq!(aces_proxy::encode(1.0, "10 bit").unwrap(), 550.5);
//! assert!(aces_proxy::encode(1.0, "8 bit").is_err());
//!
//! let tf = TransferFunction::AcesProxy { bit_depth: BitDepth::Twelve };
//! let code = tf.encode(0.18);
//! assert!(code > 0.0 && code < 4095.5);
//! ```
//!
//! # Dependencies
//!
//! - `rgbspace-core` - [`rgbspace_core::Error`] for unknown bit-depth labels
//! - `serde` - [`TransferFunction`] is part of the colorspace YAML config
//!
//! # Used By
//!
//! - `rgbspace-color` - colorspace aggregates and registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aces_log;
pub mod aces_proxy;
pub mod gamma;
pub mod linear;
mod function;

pub use aces_log::{LogConstants, ACES_LOG};
pub use aces_proxy::{BitDepth, ProxyConstants, ACES_PROXY_10, ACES_PROXY_12};
pub use function::TransferFunction;

pub use aces_log::{decode as aces_log_decode, encode as aces_log_encode};
pub use aces_proxy::{decode_10 as aces_proxy_10_decode, encode_10 as aces_proxy_10_encode};
pub use aces_proxy::{decode_12 as aces_proxy_12_decode, encode_12 as aces_proxy_12_encode};
pub use linear::{decode as linear_decode, encode as linear_encode};
