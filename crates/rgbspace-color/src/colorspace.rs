//! The [`Colorspace`] aggregate.
//!
//! A colorspace ties together everything needed to move values between an
//! encoded RGB signal and CIE XYZ: primaries, white point, the RGB to XYZ
//! matrix with its inverse, and a transfer function.
//!
//! ```text
//!   encoded RGB --decode--> linear RGB --to_xyz--> XYZ
//!   encoded RGB <--encode-- linear RGB <-from_xyz- XYZ
//! ```

use crate::error::{ColorError, ColorResult};
use rgbspace_math::Mat3;
use rgbspace_primaries::illuminants::Chromaticity;
use rgbspace_primaries::{normalized_primary_matrix, Primaries};
use rgbspace_transfer::TransferFunction;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An RGB colorspace. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorspace {
    name: String,
    primaries: Primaries,
    white_point: Chromaticity,
    illuminant: Option<String>,
    to_xyz: Mat3,
    from_xyz: Mat3,
    transfer: TransferFunction,
}

impl Colorspace {
    /// Creates a colorspace whose RGB to XYZ matrix is derived from the
    /// primaries and white point.
    ///
    /// # Errors
    ///
    /// Fails if the primaries are degenerate or the transfer parameters are
    /// out of range.
    pub fn from_primaries(
        name: impl Into<String>,
        primaries: Primaries,
        white_point: Chromaticity,
        transfer: TransferFunction,
    ) -> ColorResult<Self> {
        let to_xyz = normalized_primary_matrix(&primaries, white_point)?;
        Self::with_matrix(name, primaries, white_point, to_xyz, transfer)
    }

    /// Creates a colorspace with an explicit RGB to XYZ matrix.
    ///
    /// Used where a published matrix is normative (ACES RGB, CIE RGB). The
    /// XYZ to RGB matrix is always the inverse of `to_xyz`.
    pub fn with_matrix(
        name: impl Into<String>,
        primaries: Primaries,
        white_point: Chromaticity,
        to_xyz: Mat3,
        transfer: TransferFunction,
    ) -> ColorResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ColorError::Config("colorspace name must not be empty".into()));
        }
        transfer.validate()?;
        let from_xyz = to_xyz.try_inverse(&format!("{name} RGB to XYZ matrix"))?;

        Ok(Self {
            name,
            primaries,
            white_point,
            illuminant: None,
            to_xyz,
            from_xyz,
            transfer,
        })
    }

    /// Records the name of the illuminant the white point was taken from.
    pub fn with_illuminant(mut self, illuminant: impl Into<String>) -> Self {
        self.illuminant = Some(illuminant.into());
        self
    }

    /// Returns a copy with another transfer function and name.
    ///
    /// Primaries, white point and matrices are shared, as with the ACES RGB
    /// family.
    pub fn with_transfer(&self, name: impl Into<String>, transfer: TransferFunction) -> ColorResult<Self> {
        transfer.validate()?;
        Ok(Self {
            name: name.into(),
            transfer,
            ..self.clone()
        })
    }

    /// Colorspace name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primaries chromaticities.
    #[inline]
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// White point chromaticity.
    #[inline]
    pub fn white_point(&self) -> Chromaticity {
        self.white_point
    }

    /// Illuminant name, if the white point came from the illuminant table.
    #[inline]
    pub fn illuminant(&self) -> Option<&str> {
        self.illuminant.as_deref()
    }

    /// RGB to XYZ matrix.
    #[inline]
    pub fn to_xyz_matrix(&self) -> &Mat3 {
        &self.to_xyz
    }

    /// XYZ to RGB matrix.
    #[inline]
    pub fn from_xyz_matrix(&self) -> &Mat3 {
        &self.from_xyz
    }

    /// Transfer function.
    #[inline]
    pub fn transfer(&self) -> TransferFunction {
        self.transfer
    }

    /// Linear value to code value.
    #[inline]
    pub fn encode(&self, value: f64) -> f64 {
        self.transfer.encode(value)
    }

    /// Code value to linear value.
    #[inline]
    pub fn decode(&self, value: f64) -> f64 {
        self.transfer.decode(value)
    }

    /// Encodes each channel of a linear RGB triplet.
    #[inline]
    pub fn encode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.transfer.encode_rgb(rgb)
    }

    /// Decodes each channel of an encoded RGB triplet.
    #[inline]
    pub fn decode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.transfer.decode_rgb(rgb)
    }

    /// Encoded RGB to XYZ: decode, then apply the forward matrix.
    pub fn rgb_to_xyz(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.to_xyz.transform_array(self.decode_rgb(rgb))
    }

    /// XYZ to encoded RGB: apply the inverse matrix, then encode.
    pub fn xyz_to_rgb(&self, xyz: [f64; 3]) -> [f64; 3] {
        self.encode_rgb(self.from_xyz.transform_array(xyz))
    }

    /// Converts an encoded RGB value of this space to `target` through XYZ.
    ///
    /// No chromatic adaptation is applied between differing white points.
    pub fn convert(&self, rgb: [f64; 3], target: &Colorspace) -> [f64; 3] {
        target.xyz_to_rgb(self.rgb_to_xyz(rgb))
    }

    /// Encodes a buffer of linear samples in place.
    pub fn encode_buffer(&self, data: &mut [f64]) {
        let tf = self.transfer;
        #[cfg(feature = "parallel")]
        data.par_iter_mut().for_each(|v| *v = tf.encode(*v));
        #[cfg(not(feature = "parallel"))]
        data.iter_mut().for_each(|v| *v = tf.encode(*v));
    }

    /// Decodes a buffer of code values in place.
    pub fn decode_buffer(&self, data: &mut [f64]) {
        let tf = self.transfer;
        #[cfg(feature = "parallel")]
        data.par_iter_mut().for_each(|v| *v = tf.decode(*v));
        #[cfg(not(feature = "parallel"))]
        data.iter_mut().for_each(|v| *v = tf.decode(*v));
    }

    /// Converts a packed RGB buffer (`r, g, b, r, g, b, ...`) to `target` in place.
    pub fn convert_buffer(&self, target: &Colorspace, data: &mut [f64]) -> ColorResult<()> {
        if data.len() % 3 != 0 {
            return Err(ColorError::BufferLength { len: data.len() });
        }

        let convert = |px: &mut [f64]| {
            let out = self.convert([px[0], px[1], px[2]], target);
            px.copy_from_slice(&out);
        };

        #[cfg(feature = "parallel")]
        data.par_chunks_mut(3).for_each(convert);
        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(3).for_each(convert);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rgbspace_primaries::{ACES_RGB, ACES_RGB_TO_XYZ, APPLE_RGB};
    use rgbspace_transfer::BitDepth;

    const D60: Chromaticity = (0.32168, 0.33767);
    const D65: Chromaticity = (0.31270, 0.32900);

    fn aces() -> Colorspace {
        Colorspace::with_matrix("ACES RGB", ACES_RGB, D60, ACES_RGB_TO_XYZ, TransferFunction::Linear)
            .unwrap()
            .with_illuminant("D60")
    }

    #[test]
    fn test_inverse_matrix() {
        let cs = aces();
        let id = *cs.to_xyz_matrix() * *cs.from_xyz_matrix();
        assert!(id.abs_diff_eq(&Mat3::IDENTITY, 1e-9));
        assert_eq!(cs.illuminant(), Some("D60"));
    }

    #[test]
    fn test_xyz_roundtrip() {
        let cs = Colorspace::from_primaries(
            "Apple RGB",
            APPLE_RGB,
            D65,
            TransferFunction::Gamma { exponent: 1.8 },
        )
        .unwrap();
        let rgb = [0.2, 0.5, 0.8];
        let back = cs.xyz_to_rgb(cs.rgb_to_xyz(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_with_transfer_shares_matrices() {
        let lin = aces();
        let log = lin.with_transfer("ACES RGB Log", TransferFunction::AcesLog).unwrap();
        assert_eq!(log.to_xyz_matrix(), lin.to_xyz_matrix());
        assert_eq!(log.white_point(), lin.white_point());
        assert_eq!(log.encode(1.0), 32768.0);

        // same XYZ from the linear and the log encoding of one value
        let a = lin.rgb_to_xyz([0.18, 0.18, 0.18]);
        let b = log.rgb_to_xyz(log.encode_rgb([0.18, 0.18, 0.18]));
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_convert_identity() {
        let cs = aces();
        let rgb = [0.1, 0.4, 0.9];
        let out = cs.convert(rgb, &cs);
        for i in 0..3 {
            assert_abs_diff_eq!(out[i], rgb[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_buffers() {
        let proxy = aces()
            .with_transfer("ACES RGB Proxy 10", TransferFunction::AcesProxy { bit_depth: BitDepth::Ten })
            .unwrap();
        let mut data = vec![1.0, 0.0, -1.0, 2.0];
        proxy.encode_buffer(&mut data);
        assert_eq!(data, vec![550.5, 0.0, 0.0, 600.5]);

        let mut codes = vec![550.0, 600.0];
        proxy.decode_buffer(&mut codes);
        assert_abs_diff_eq!(codes[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(codes[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_buffer() {
        let cs = aces();
        let mut data = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        cs.convert_buffer(&cs, &mut data).unwrap();
        assert_abs_diff_eq!(data[4], 0.5, epsilon = 1e-12);

        let mut bad = vec![0.0; 4];
        assert!(matches!(
            cs.convert_buffer(&cs, &mut bad),
            Err(ColorError::BufferLength { len: 4 })
        ));
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            Colorspace::with_matrix("", ACES_RGB, D60, ACES_RGB_TO_XYZ, TransferFunction::Linear),
            Err(ColorError::Config(_))
        ));
        assert!(matches!(
            Colorspace::with_matrix("Zero", ACES_RGB, D60, Mat3::ZERO, TransferFunction::Linear),
            Err(ColorError::Core(rgbspace_core::Error::SingularMatrix(_)))
        ));
        assert!(Colorspace::from_primaries(
            "Bad gamma",
            APPLE_RGB,
            D65,
            TransferFunction::Gamma { exponent: -1.0 }
        )
        .is_err());
    }
}
