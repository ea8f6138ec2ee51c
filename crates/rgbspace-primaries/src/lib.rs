//! # rgbspace-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix derivation.
//!
//! An RGB space is pinned to CIE XYZ by the chromaticities of its three
//! primaries and of its white point. From those five xy pairs the normalized
//! primary matrix (NPM) follows: the RGB to XYZ matrix that maps RGB
//! `(1, 1, 1)` to the white point with luminance `Y = 1`.
//!
//! # Usage
//!
//! ```rust
//! use rgbspace_primaries::{normalized_primary_matrix, APPLE_RGB, illuminants::illuminant};
//! use rgbspace_math::Vec3;
//!
//! let d65 = illuminant("CIE 1931 2 Degree Standard Observer", "D65").unwrap();
//! let npm = normalized_primary_matrix(&APPLE_RGB, d65).unwrap();
//!
//! let white = npm * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Included Primaries
//!
//! | Primaries | White | Notes |
//! |-----------|-------|-------|
//! | [`ACES_RGB`] | D60 | ACES AP0, encloses the spectral locus |
//! | [`APPLE_RGB`] | D65 | Apple 13" RGB monitor |
//! | [`CIE_RGB`] | E | derived from the Wright-Guild experiments |
//!
//! # Dependencies
//!
//! - `rgbspace-core` - error type
//! - `rgbspace-math` - [`Mat3`], [`Vec3`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod illuminants;

use illuminants::Chromaticity;
use rgbspace_core::{Error, Result};
use rgbspace_math::{Mat3, Vec3};

/// Chromaticities of the three primaries of an RGB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y)
    pub r: Chromaticity,
    /// Green primary (x, y)
    pub g: Chromaticity,
    /// Blue primary (x, y)
    pub b: Chromaticity,
}

impl Primaries {
    /// Creates primaries from a 3x2 array `[[rx, ry], [gx, gy], [bx, by]]`.
    #[inline]
    pub const fn from_array(a: [[f64; 2]; 3]) -> Self {
        Self {
            r: (a[0][0], a[0][1]),
            g: (a[1][0], a[1][1]),
            b: (a[2][0], a[2][1]),
        }
    }

    /// Returns the 3x2 array form.
    #[inline]
    pub const fn to_array(&self) -> [[f64; 2]; 3] {
        [[self.r.0, self.r.1], [self.g.0, self.g.1], [self.b.0, self.b.1]]
    }
}

// ============================================================================
// Standard Primaries
// ============================================================================

/// ACES RGB (AP0) primaries.
pub const ACES_RGB: Primaries = Primaries {
    r: (0.73470, 0.26530),
    g: (0.00000, 1.00000),
    b: (0.00010, -0.07700),
};

/// Apple RGB primaries.
pub const APPLE_RGB: Primaries = Primaries {
    r: (0.6250, 0.3400),
    g: (0.2800, 0.5950),
    b: (0.1550, 0.0700),
};

/// CIE RGB primaries.
///
/// Recovered from [`CIE_RGB_TO_XYZ`]; the matrix is the normative definition.
pub const CIE_RGB: Primaries = Primaries {
    r: (0.734742840005998, 0.265257159994002),
    g: (0.273779033824958, 0.717477700256116),
    b: (0.166555629580280, 0.008910726182545),
};

// ============================================================================
// Published Matrices
// ============================================================================

/// ACES RGB to XYZ matrix as published by AMPAS.
pub const ACES_RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [9.52552396e-01, 0.00000000e+00, 9.36786317e-05],
    [3.43966450e-01, 7.28166097e-01, -7.21325464e-02],
    [0.00000000e+00, 0.00000000e+00, 1.00882518e+00],
]);

/// CIE RGB to XYZ matrix (Fairman, Brill & Hemmendinger 1997).
pub const CIE_RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4900, 0.3100, 0.2000],
    [0.1769, 0.8124, 0.0107],
    [0.0000, 0.0099, 0.9901],
]);

// ============================================================================
// Matrix Derivation
// ============================================================================

/// Lifts an xy chromaticity to XYZ with `Y = 1`.
///
/// Fails with [`Error::InvalidChromaticity`] when `y` is zero or not finite.
pub fn xy_to_xyz(xy: Chromaticity) -> Result<Vec3> {
    let (x, y) = xy;
    if !(x.is_finite() && y.is_finite()) || y.abs() < 1e-12 {
        return Err(Error::InvalidChromaticity { x, y });
    }
    Ok(Vec3::new(x / y, 1.0, (1.0 - x - y) / y))
}

/// Projects XYZ back to xy chromaticity. Returns `None` for black.
pub fn xyz_to_xy(xyz: Vec3) -> Option<Chromaticity> {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum.abs() < 1e-12 {
        None
    } else {
        Some((xyz.x / sum, xyz.y / sum))
    }
}

/// Derives the normalized primary matrix (RGB to XYZ).
///
/// # Algorithm
///
/// 1. Lift primaries and white point from xy to XYZ with `Y = 1`
/// 2. Put the primaries into the columns of `P`
/// 3. Solve `P * S = W` for the per-channel scale `S`
/// 4. `NPM = P * diag(S)`
///
/// # Errors
///
/// - [`Error::InvalidChromaticity`] if a chromaticity has `y == 0`
/// - [`Error::SingularMatrix`] if the primaries are collinear
pub fn normalized_primary_matrix(primaries: &Primaries, white: Chromaticity) -> Result<Mat3> {
    let p = Mat3::from_col_vecs(
        xy_to_xyz(primaries.r)?,
        xy_to_xyz(primaries.g)?,
        xy_to_xyz(primaries.b)?,
    );
    let w = xy_to_xyz(white)?;

    let s = p.try_inverse("primaries matrix")? * w;
    Ok(p * Mat3::diagonal(s.to_array()))
}

/// RGB to XYZ and XYZ to RGB matrices in one call.
pub fn matrix_pair(primaries: &Primaries, white: Chromaticity) -> Result<(Mat3, Mat3)> {
    let to_xyz = normalized_primary_matrix(primaries, white)?;
    let from_xyz = to_xyz.try_inverse("RGB to XYZ matrix")?;
    Ok((to_xyz, from_xyz))
}

/// Recovers primaries and white point from an RGB to XYZ matrix.
///
/// Inverse of [`normalized_primary_matrix`]: the primaries are the columns,
/// the white point is the image of RGB `(1, 1, 1)`.
pub fn primaries_whitepoint(to_xyz: &Mat3) -> Result<(Primaries, Chromaticity)> {
    let xy = |v: Vec3| {
        xyz_to_xy(v).ok_or_else(|| Error::singular_matrix("RGB to XYZ matrix has a black column"))
    };
    let primaries = Primaries {
        r: xy(to_xyz.col(0))?,
        g: xy(to_xyz.col(1))?,
        b: xy(to_xyz.col(2))?,
    };
    let white = xy(*to_xyz * Vec3::ONE)?;
    Ok((primaries, white))
}
