//! ACES RGB Proxy transfer function (10 and 12 bit).
//!
//! ACESproxy is a log encoding meant for on-set monitoring over integer video
//! links. Code values are clamped to the legal range of the bit depth and
//! offset by half a code value to land on the centre of an integer bin.
//!
//! The bit depth is a closed set ([`BitDepth`]). The string based entry points
//! [`encode`] and [`decode`] reject any label other than `"10 bit"` and
//! `"12 bit"` with [`Error::UnknownConfiguration`].
//!
//! # Range
//!
//! | Bit depth | Encoded output |
//! |-----------|----------------|
//! | 10 bit | 0 or [0.5, 1023.5] |
//! | 12 bit | 0 or [0.5, 4095.5] |
//!
//! # Reference
//!
//! AMPAS ACESproxy v1.1

use rgbspace_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameter set of a proxy encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyConstants {
    /// Lowest legal code value.
    pub cv_min: f64,
    /// Highest legal code value.
    pub cv_max: f64,
    /// Code values per stop.
    pub steps_per_stop: f64,
    /// Code value of the mid point.
    pub mid_cv_offset: f64,
    /// log2 exposure of the mid point.
    pub mid_log_offset: f64,
}

/// ACES RGB Proxy 10 bit constants.
pub const ACES_PROXY_10: ProxyConstants = ProxyConstants {
    cv_min: 0.0,
    cv_max: 1023.0,
    steps_per_stop: 50.0,
    mid_cv_offset: 425.0,
    mid_log_offset: -2.5,
};

/// ACES RGB Proxy 12 bit constants.
pub const ACES_PROXY_12: ProxyConstants = ProxyConstants {
    cv_min: 0.0,
    cv_max: 4095.0,
    steps_per_stop: 200.0,
    mid_cv_offset: 1700.0,
    mid_log_offset: -2.5,
};

/// Supported proxy bit depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitDepth {
    /// 10 bit integer code values.
    #[serde(rename = "10 bit")]
    Ten,
    /// 12 bit integer code values.
    #[serde(rename = "12 bit")]
    Twelve,
}

impl BitDepth {
    /// Every supported bit depth.
    pub const ALL: [BitDepth; 2] = [BitDepth::Ten, BitDepth::Twelve];

    /// Label used in configuration and lookups.
    pub const fn label(self) -> &'static str {
        match self {
            BitDepth::Ten => "10 bit",
            BitDepth::Twelve => "12 bit",
        }
    }

    /// Constant set of this bit depth.
    pub const fn constants(self) -> &'static ProxyConstants {
        match self {
            BitDepth::Ten => &ACES_PROXY_10,
            BitDepth::Twelve => &ACES_PROXY_12,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BitDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BitDepth::ALL
            .into_iter()
            .find(|depth| depth.label() == s)
            .ok_or_else(|| Error::unknown_configuration("ACES proxy bit depth", s))
    }
}

/// Proxy encode with an explicit constant set.
///
/// # Formula
///
/// ```text
/// if linear > 0:
///     code = clamp((log2(linear) - mid_log_offset) * steps_per_stop + mid_cv_offset,
///                  cv_min, cv_max) + 0.5
/// else:
///     code = cv_min
/// ```
///
/// The `+ 0.5` is only applied on the positive branch, so zero and negative
/// input return `cv_min` exactly while tiny positive input returns
/// `cv_min + 0.5`.
pub fn encode_with(linear: f64, constants: &ProxyConstants) -> f64 {
    if linear > 0.0 {
        let code = (linear.log2() - constants.mid_log_offset) * constants.steps_per_stop
            + constants.mid_cv_offset;
        code.clamp(constants.cv_min, constants.cv_max) + 0.5
    } else {
        constants.cv_min
    }
}

/// Proxy decode with an explicit constant set.
///
/// # Formula
///
/// ```text
/// linear = 2^((code - mid_cv_offset) / steps_per_stop + mid_log_offset)
/// ```
///
/// No clamping: out-of-range code values extrapolate. Pass `code - 0.5` to
/// undo the bin-centre offset added by [`encode_with`].
pub fn decode_with(code: f64, constants: &ProxyConstants) -> f64 {
    ((code - constants.mid_cv_offset) / constants.steps_per_stop + constants.mid_log_offset).exp2()
}

/// Proxy encode for a typed bit depth.
#[inline]
pub fn encode_depth(linear: f64, bit_depth: BitDepth) -> f64 {
    encode_with(linear, bit_depth.constants())
}

/// Proxy decode for a typed bit depth.
#[inline]
pub fn decode_depth(code: f64, bit_depth: BitDepth) -> f64 {
    decode_with(code, bit_depth.constants())
}

/// Proxy encode for a bit-depth label (`"10 bit"` or `"12 bit"`).
///
/// # Example
///
/// ```rust
/// use rgbspace_transfer::aces_proxy::encode;
///
/// assert_eq!(encode(1.0, "10 bit").unwrap(), 550.5);
/// assert!(encode(1.0, "8 bit").is_err());
/// ```
pub fn encode(linear: f64, bit_depth: &str) -> Result<f64> {
    Ok(encode_depth(linear, bit_depth.parse()?))
}

/// Proxy decode for a bit-depth label (`"10 bit"` or `"12 bit"`).
pub fn decode(code: f64, bit_depth: &str) -> Result<f64> {
    Ok(decode_depth(code, bit_depth.parse()?))
}

/// ACES RGB Proxy 10 encode.
#[inline]
pub fn encode_10(linear: f64) -> f64 {
    encode_with(linear, &ACES_PROXY_10)
}

/// ACES RGB Proxy 10 decode.
#[inline]
pub fn decode_10(code: f64) -> f64 {
    decode_with(code, &ACES_PROXY_10)
}

/// ACES RGB Proxy 12 encode.
#[inline]
pub fn encode_12(linear: f64) -> f64 {
    encode_with(linear, &ACES_PROXY_12)
}

/// ACES RGB Proxy 12 decode.
#[inline]
pub fn decode_12(code: f64) -> f64 {
    decode_with(code, &ACES_PROXY_12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants_valid() {
        for depth in BitDepth::ALL {
            let c = depth.constants();
            assert!(c.cv_min < c.cv_max);
            assert_eq!(c.mid_log_offset, -2.5);
        }
    }

    #[test]
    fn test_unity() {
        // (0 - (-2.5)) * 50 + 425 = 550
        assert_eq!(encode_10(1.0), 550.5);
        // (0 - (-2.5)) * 200 + 1700 = 2200
        assert_eq!(encode_12(1.0), 2200.5);
        assert_eq!(decode_10(550.0), 1.0);
        assert_eq!(decode_12(2200.0), 1.0);
    }

    #[test]
    fn test_floor_is_exact() {
        for &v in &[0.0, -0.0, -1e-12, -1.0, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(encode_10(v), ACES_PROXY_10.cv_min);
            assert_eq!(encode_12(v), ACES_PROXY_12.cv_min);
        }
    }

    #[test]
    fn test_positive_branch_keeps_half_offset() {
        // tiny positive input clamps to cv_min but still gets + 0.5
        assert_eq!(encode_10(1e-30), 0.5);
        assert_eq!(encode_12(1e-30), 0.5);
    }

    #[test]
    fn test_ceiling() {
        for &v in &[1e6, 1e30, f64::MAX, f64::INFINITY] {
            let c10 = encode_10(v);
            assert_eq!(c10, 1023.5);
            assert!(c10 >= ACES_PROXY_10.cv_min);
            assert_eq!(encode_12(v), 4095.5);
        }
    }

    #[test]
    fn test_roundtrip_interior() {
        for &v in &[0.01, 0.18, 0.5, 1.0, 4.0, 16.0] {
            for depth in BitDepth::ALL {
                let code = encode_depth(v, depth);
                let back = decode_depth(code - 0.5, depth);
                assert_relative_eq!(back, v, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_decode_extrapolates() {
        assert!(decode_10(2000.0) > decode_10(1023.0));
        assert!(decode_10(-100.0) > 0.0);
        assert!(decode_10(-100.0) < decode_10(0.0));
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!("10 bit".parse::<BitDepth>().unwrap(), BitDepth::Ten);
        assert_eq!("12 bit".parse::<BitDepth>().unwrap(), BitDepth::Twelve);
        assert_eq!(encode(1.0, "10 bit").unwrap(), 550.5);
        assert_eq!(decode(550.0, "10 bit").unwrap(), 1.0);
        assert_eq!(encode(1.0, "12 bit").unwrap(), 2200.5);
    }

    #[test]
    fn test_unknown_bit_depth() {
        for label in ["8 bit", "10bit", "10 Bit", "16 bit", ""] {
            let err = encode(1.0, label).unwrap_err();
            assert!(
                matches!(err, Error::UnknownConfiguration { ref key, .. } if key == label),
                "{label}: {err}"
            );
            assert!(decode(550.0, label).is_err());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BitDepth::Twelve.to_string(), "12 bit");
    }
}
