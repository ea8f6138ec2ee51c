//! ACES RGB Log transfer function.
//!
//! A pure log2 encoding of ACES RGB into a 16 bit code value range: one stop
//! of exposure is `log_xperstop` (2048) code values and scene-linear 1.0 sits
//! at `log_unity` (32768).
//!
//! Values below `denorm_trans` (2^-15) are remapped to
//! `denorm_fake0 + value / 2` before taking the logarithm, so zero encodes to a
//! finite code value (0) instead of negative infinity. Shadow precision in that
//! region is traded for a well-defined curve.
//!
//! # Range
//!
//! - Linear input: scene-referred, any real (negative input clamps to code 0)
//! - Encoded output: [0, 65536) for float output, [0, 65535] with integer codes
//!
//! # Reference
//!
//! AMPAS ACESlog v1.0

/// Parameter set of a log encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogConstants {
    /// Code value of scene-linear 1.0.
    pub log_unity: f64,
    /// Code values per stop.
    pub log_xperstop: f64,
    /// Linear values below this are remapped before the log.
    pub denorm_trans: f64,
    /// Offset of the remapped region.
    pub denorm_fake0: f64,
}

/// ACES RGB Log constants.
pub const ACES_LOG: LogConstants = LogConstants {
    log_unity: 32768.0,
    log_xperstop: 2048.0,
    denorm_trans: 1.0 / 32768.0, // 2^-15
    denorm_fake0: 1.0 / 65536.0, // 2^-16
};

/// Largest 16 bit integer code value.
pub const MAX_INTEGER_CODE: f64 = 65535.0;

/// Log encode with an explicit constant set.
///
/// # Formula
///
/// ```text
/// if linear < 0:
///     code = 0
/// else:
///     if linear < denorm_trans:
///         linear = denorm_fake0 + linear / 2
///     code = log2(linear) * log_xperstop + log_unity
///     if as_integer_code:
///         code = min(floor(code) + 0.5, 65535)
/// ```
///
/// With `as_integer_code` the result is still a float, placed at the centre
/// of its integer bin. The low end is not clamped: the denormal remap already
/// keeps non-negative input at or above code 0.
pub fn encode_with(linear: f64, constants: &LogConstants, as_integer_code: bool) -> f64 {
    if linear < 0.0 {
        return 0.0;
    }

    let linear = if linear < constants.denorm_trans {
        constants.denorm_fake0 + linear / 2.0
    } else {
        linear
    };

    let code = linear.log2() * constants.log_xperstop + constants.log_unity;

    if as_integer_code {
        (code.floor() + 0.5).min(MAX_INTEGER_CODE)
    } else {
        code
    }
}

/// Log decode with an explicit constant set.
///
/// # Formula
///
/// ```text
/// linear = 2^((code - log_unity) / log_xperstop)
/// if linear < denorm_trans:
///     linear = (linear - denorm_fake0) * 2
/// ```
///
/// Exact inverse of [`encode_with`] for non-negative input without integer
/// quantization. The negative clamp and the quantization are lossy.
pub fn decode_with(code: f64, constants: &LogConstants) -> f64 {
    let linear = ((code - constants.log_unity) / constants.log_xperstop).exp2();
    if linear < constants.denorm_trans {
        (linear - constants.denorm_fake0) * 2.0
    } else {
        linear
    }
}

/// ACES RGB Log encode: scene-linear to float code value.
///
/// # Example
///
/// ```rust
/// use rgbspace_transfer::aces_log::encode;
///
/// assert_eq!(encode(1.0), 32768.0);
/// assert_eq!(encode(2.0), 32768.0 + 2048.0);
/// assert_eq!(encode(-0.5), 0.0);
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    encode_with(linear, &ACES_LOG, false)
}

/// ACES RGB Log encode quantized to a 16 bit integer code (bin centre).
///
/// # Example
///
/// ```rust
/// use rgbspace_transfer::aces_log::encode_integer;
///
/// assert_eq!(encode_integer(1.0), 32768.5);
/// assert_eq!(encode_integer(1.0e30), 65535.0);
/// ```
#[inline]
pub fn encode_integer(linear: f64) -> f64 {
    encode_with(linear, &ACES_LOG, true)
}

/// ACES RGB Log decode: code value to scene-linear.
///
/// # Example
///
/// ```rust
/// use rgbspace_transfer::aces_log::decode;
///
/// assert_eq!(decode(32768.0), 1.0);
/// ```
#[inline]
pub fn decode(code: f64) -> f64 {
    decode_with(code, &ACES_LOG)
}

/// Applies ACES RGB Log encode to an RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(encode)
}

/// Applies ACES RGB Log decode to an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(decode)
}
