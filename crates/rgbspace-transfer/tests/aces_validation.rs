//! ACES RGB transfer function validation tests.
//!
//! Checks the ACES RGB Log and ACES RGB Proxy encodings against values worked
//! out by hand from the published formulas.
//!
//! # Reference Documents
//!
//! - AMPAS ACESlog v1.0
//! - AMPAS ACESproxy v1.1

use approx::assert_relative_eq;
use rgbspace_core::Error;
use rgbspace_transfer::{aces_log, aces_proxy, linear, BitDepth, ACES_LOG, ACES_PROXY_10, ACES_PROXY_12};

// ============================================================================
// ACES RGB Log Reference Values
// ============================================================================
//
// code = log2(linear) * 2048 + 32768, with linear < 2^-15 remapped to
// 2^-16 + linear / 2 first.

const ACES_LOG_REFERENCE: &[(f64, f64)] = &[
    // (linear, code)
    (0.0, 0.0),            // 2^-16 after remap: -16 stops
    (1.0 / 32768.0, 2048.0), // 2^-15, remap boundary
    (0.0009765625, 12288.0), // 2^-10
    (0.18, 27701.389),     // log2(0.18) = -2.473931
    (0.5, 30720.0),
    (1.0, 32768.0),
    (2.0, 34816.0),
    (16.0, 40960.0),
    (1024.0, 53248.0),     // 2^10
];

// ============================================================================
// ACES RGB Proxy Reference Values
// ============================================================================
//
// code = clamp((log2(linear) + 2.5) * steps_per_stop + mid_cv_offset) + 0.5

const ACES_PROXY_10_REFERENCE: &[(f64, f64)] = &[
    // (linear, code)
    (0.0, 0.0),
    (0.0001, 0.5),      // clamped low: (-13.29 + 2.5) * 50 + 425 < 0
    (0.001, 52.2108),   // (-9.965784 + 2.5) * 50 + 425 + 0.5
    (0.18, 426.8034),   // (-2.473931 + 2.5) * 50 + 425 + 0.5
    (1.0, 550.5),
    (2.0, 600.5),
    (1e6, 1023.5),      // clamped high
];

const ACES_PROXY_12_REFERENCE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.18, 1705.7138),  // (-2.473931 + 2.5) * 200 + 1700 + 0.5
    (1.0, 2200.5),
    (2.0, 2400.5),
    (1e6, 4095.5),
];

// ============================================================================
// Linear
// ============================================================================

#[test]
fn test_linear_identity_roundtrip() {
    let mut v = -1e6;
    while v < 1e6 {
        assert_eq!(linear::decode(linear::encode(v)), v);
        v += 1234.567;
    }
}

// ============================================================================
// ACES RGB Log
// ============================================================================

#[test]
fn test_aces_log_reference_values() {
    for &(linear, expected) in ACES_LOG_REFERENCE {
        let encoded = aces_log::encode(linear);
        assert!(
            (encoded - expected).abs() < 0.01,
            "ACESlog({}) = {} (expected {})",
            linear,
            encoded,
            expected
        );
    }
}

#[test]
fn test_aces_log_unity() {
    assert_eq!(aces_log::encode(1.0), ACES_LOG.log_unity);
    assert_eq!(aces_log::decode(32768.0), 1.0);
}

#[test]
fn test_aces_log_roundtrip_interior() {
    let lo = 2.0_f64.powi(-10);
    let hi = 2.0_f64.powi(10);
    let steps = 500;
    for i in 0..=steps {
        // log-spaced samples over [2^-10, 2^10]
        let t = i as f64 / steps as f64;
        let linear = lo * (hi / lo).powf(t);
        let back = aces_log::decode(aces_log::encode(linear));
        assert_relative_eq!(back, linear, max_relative = 1e-9);
    }
}

#[test]
fn test_aces_log_denorm_continuity() {
    let t = ACES_LOG.denorm_trans;
    let at = aces_log::encode(t);
    for eps in [1e-13, 1e-14, 1e-15] {
        let below = aces_log::encode(t - eps);
        let above = aces_log::encode(t + eps);
        assert!((at - below).abs() < 1e-2, "jump below boundary: {below} vs {at}");
        assert!((above - at).abs() < 1e-2, "jump above boundary: {above} vs {at}");
    }
}

#[test]
fn test_aces_log_negative_clamp() {
    let mut v = -1e-20;
    while v > -1e20 {
        assert_eq!(aces_log::encode(v), 0.0);
        v *= 10.0;
    }
}

#[test]
fn test_aces_log_integer_ceiling() {
    for &v in &[1e5, 1e10, 1e100, f64::MAX, f64::INFINITY] {
        let code = aces_log::encode_integer(v);
        assert!(code <= 65535.0, "ACESlog integer({v}) = {code}");
    }
    // half-integer bin centres below the ceiling
    let code = aces_log::encode_integer(0.18);
    assert_eq!(code.fract(), 0.5);
}

// ============================================================================
// ACES RGB Proxy
// ============================================================================

#[test]
fn test_aces_proxy_10_reference_values() {
    for &(linear, expected) in ACES_PROXY_10_REFERENCE {
        let encoded = aces_proxy::encode_10(linear);
        assert!(
            (encoded - expected).abs() < 1e-3,
            "ACESproxy10({}) = {} (expected {})",
            linear,
            encoded,
            expected
        );
    }
}

#[test]
fn test_aces_proxy_12_reference_values() {
    for &(linear, expected) in ACES_PROXY_12_REFERENCE {
        let encoded = aces_proxy::encode_12(linear);
        assert!(
            (encoded - expected).abs() < 1e-3,
            "ACESproxy12({}) = {} (expected {})",
            linear,
            encoded,
            expected
        );
    }
}

#[test]
fn test_aces_proxy_floor() {
    for &v in &[0.0, -1e-300, -0.5, -1e300] {
        assert_eq!(aces_proxy::encode(v, "10 bit").unwrap(), ACES_PROXY_10.cv_min);
        assert_eq!(aces_proxy::encode(v, "12 bit").unwrap(), ACES_PROXY_12.cv_min);
    }
}

#[test]
fn test_aces_proxy_clamp() {
    let code = aces_proxy::encode(1e300, "10 bit").unwrap();
    assert!(code <= ACES_PROXY_10.cv_max + 0.5);
    assert!(code >= ACES_PROXY_10.cv_min);
}

#[test]
fn test_aces_proxy_roundtrip() {
    let code = aces_proxy::encode(1.0, "10 bit").unwrap();
    let back = aces_proxy::decode(code - 0.5, "10 bit").unwrap();
    assert_relative_eq!(back, 1.0, max_relative = 1e-12);
}

#[test]
fn test_aces_proxy_scenario() {
    let expected = (0.0_f64 - (-2.5)) * 50.0 + 425.0;
    let expected = expected.min(1023.0).max(0.0) + 0.5;
    assert_eq!(expected, 550.5);
    assert_eq!(aces_proxy::encode(1.0, "10 bit").unwrap(), expected);
}

#[test]
fn test_aces_proxy_unknown_bit_depth() {
    match aces_proxy::encode(1.0, "8 bit") {
        Err(Error::UnknownConfiguration { key, .. }) => assert_eq!(key, "8 bit"),
        other => panic!("expected UnknownConfiguration, got {other:?}"),
    }
    assert!("8 bit".parse::<BitDepth>().is_err());
}

#[test]
fn test_aces_proxy_monotonic() {
    for depth in BitDepth::ALL {
        let mut prev = aces_proxy::encode_depth(0.0, depth);
        for i in 1..=1000 {
            let v = i as f64 * 0.01;
            let code = aces_proxy::encode_depth(v, depth);
            assert!(code >= prev, "{depth}: not monotonic at {v}");
            prev = code;
        }
    }
}
