//! Runtime selection of a transfer function.
//!
//! A colorspace carries one [`TransferFunction`], which bundles the forward
//! (encode) and inverse (decode) directions of one encoding. The enum is
//! serializable so colorspaces can be declared in YAML:
//!
//! ```yaml
//! transfer: { type: aces_proxy, bit_depth: "12 bit" }
//! ```

use crate::{aces_log, aces_proxy, gamma, linear, BitDepth};
use rgbspace_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A forward/inverse transfer function pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransferFunction {
    /// Identity (ACES RGB).
    #[default]
    Linear,
    /// ACES RGB Log, float code values.
    AcesLog,
    /// ACES RGB Proxy at the given bit depth.
    AcesProxy {
        /// 10 or 12 bit
        bit_depth: BitDepth,
    },
    /// Pure power law, `encode = x^(1/exponent)`.
    Gamma {
        /// Decoding exponent (1.8 for Apple RGB)
        exponent: f64,
    },
}

impl TransferFunction {
    /// Forward direction: scene-linear to code value.
    #[inline]
    pub fn encode(&self, value: f64) -> f64 {
        match *self {
            TransferFunction::Linear => linear::encode(value),
            TransferFunction::AcesLog => aces_log::encode(value),
            TransferFunction::AcesProxy { bit_depth } => aces_proxy::encode_depth(value, bit_depth),
            TransferFunction::Gamma { exponent } => gamma::encode(value, exponent),
        }
    }

    /// Inverse direction: code value to scene-linear.
    #[inline]
    pub fn decode(&self, value: f64) -> f64 {
        match *self {
            TransferFunction::Linear => linear::decode(value),
            TransferFunction::AcesLog => aces_log::decode(value),
            TransferFunction::AcesProxy { bit_depth } => aces_proxy::decode_depth(value, bit_depth),
            TransferFunction::Gamma { exponent } => gamma::decode(value, exponent),
        }
    }

    /// Encodes an RGB triplet.
    #[inline]
    pub fn encode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.encode(v))
    }

    /// Decodes an RGB triplet.
    #[inline]
    pub fn decode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.decode(v))
    }

    /// Returns true for the identity transfer.
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, TransferFunction::Linear)
    }

    /// Checks parameters that serde cannot (gamma exponent must be finite and positive).
    pub fn validate(&self) -> Result<()> {
        match *self {
            TransferFunction::Gamma { exponent } if !(exponent.is_finite() && exponent > 0.0) => {
                Err(Error::invalid_parameter("gamma exponent", exponent))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferFunction::Linear => write!(f, "linear"),
            TransferFunction::AcesLog => write!(f, "ACES log"),
            TransferFunction::AcesProxy { bit_depth } => write!(f, "ACES proxy ({bit_depth})"),
            TransferFunction::Gamma { exponent } => write!(f, "gamma {exponent}"),
        }
    }
}
