//! Pure power-law transfer functions.
//!
//! Used by the display-referred spaces of the registry:
//! - 1.8: Apple RGB
//! - 2.2: CIE RGB
//!
//! # Range
//!
//! - Input/Output: [0, 1]; non-positive input maps to 0 in both directions

/// Apple RGB gamma.
pub const APPLE_RGB_GAMMA: f64 = 1.8;

/// CIE RGB gamma.
pub const CIE_RGB_GAMMA: f64 = 2.2;

/// Encode for arbitrary gamma: `linear^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use rgbspace_transfer::gamma::encode;
///
/// let code = encode(0.25, 2.0);
/// assert!((code - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn encode(linear: f64, gamma: f64) -> f64 {
    if linear <= 0.0 {
        0.0
    } else {
        linear.powf(1.0 / gamma)
    }
}

/// Decode for arbitrary gamma: `code^gamma`.
#[inline]
pub fn decode(code: f64, gamma: f64) -> f64 {
    if code <= 0.0 {
        0.0
    } else {
        code.powf(gamma)
    }
}

/// Apple RGB encode (gamma 1.8).
#[inline]
pub fn apple_rgb_encode(linear: f64) -> f64 {
    encode(linear, APPLE_RGB_GAMMA)
}

/// Apple RGB decode (gamma 1.8).
#[inline]
pub fn apple_rgb_decode(code: f64) -> f64 {
    decode(code, APPLE_RGB_GAMMA)
}

/// CIE RGB encode (gamma 2.2).
#[inline]
pub fn cie_rgb_encode(linear: f64) -> f64 {
    encode(linear, CIE_RGB_GAMMA)
}

/// CIE RGB decode (gamma 2.2).
#[inline]
pub fn cie_rgb_decode(code: f64) -> f64 {
    decode(code, CIE_RGB_GAMMA)
}
