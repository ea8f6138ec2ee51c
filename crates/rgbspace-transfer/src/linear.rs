//! Linear (identity) transfer function of ACES RGB.
//!
//! ACES RGB stores scene-linear values directly. Both directions return their
//! input unchanged, including negative, infinite and NaN values; validating
//! scene-linear input is the caller's job.

/// Linear encode: returns `linear` unchanged.
#[inline]
pub fn encode(linear: f64) -> f64 {
    linear
}

/// Linear decode: returns `code` unchanged.
#[inline]
pub fn decode(code: f64) -> f64 {
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_roundtrip() {
        let values = [-1e6, -1.0, -0.0, 0.0, 1e-300, 0.18, 1.0, 65504.0, f64::MAX];
        for &v in &values {
            assert_eq!(decode(encode(v)), v);
        }
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(encode(f64::INFINITY), f64::INFINITY);
        assert_eq!(decode(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(encode(f64::NAN).is_nan());
    }
}
