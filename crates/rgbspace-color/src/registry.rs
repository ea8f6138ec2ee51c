//! Named collection of colorspaces.
//!
//! [`ColorspaceRegistry::standard`] builds the six standard spaces once;
//! callers keep the registry and pass it by reference. YAML configuration
//! (see [`crate::config`]) extends a registry with more spaces.

use crate::colorspace::Colorspace;
use crate::error::{ColorError, ColorResult};
use rgbspace_primaries::illuminants::Observer;
use rgbspace_primaries::{ACES_RGB, ACES_RGB_TO_XYZ, APPLE_RGB, CIE_RGB, CIE_RGB_TO_XYZ};
use rgbspace_transfer::gamma::{APPLE_RGB_GAMMA, CIE_RGB_GAMMA};
use rgbspace_transfer::{BitDepth, TransferFunction};
use tracing::debug;

/// ACES RGB, linear.
pub const ACES_RGB_NAME: &str = "ACES RGB";
/// ACES RGB, ACESlog encoded.
pub const ACES_RGB_LOG_NAME: &str = "ACES RGB Log";
/// ACES RGB, ACESproxy 10 bit encoded.
pub const ACES_RGB_PROXY_10_NAME: &str = "ACES RGB Proxy 10";
/// ACES RGB, ACESproxy 12 bit encoded.
pub const ACES_RGB_PROXY_12_NAME: &str = "ACES RGB Proxy 12";
/// Apple RGB.
pub const APPLE_RGB_NAME: &str = "Apple RGB";
/// CIE RGB.
pub const CIE_RGB_NAME: &str = "CIE RGB";

/// Ordered set of colorspaces with unique names.
#[derive(Debug, Clone, Default)]
pub struct ColorspaceRegistry {
    spaces: Vec<Colorspace>,
}

impl ColorspaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard colorspaces.
    ///
    /// | Name | White | Matrix | Transfer |
    /// |------|-------|--------|----------|
    /// | ACES RGB | D60 | published | linear |
    /// | ACES RGB Log | D60 | published | ACESlog |
    /// | ACES RGB Proxy 10 | D60 | published | ACESproxy 10 bit |
    /// | ACES RGB Proxy 12 | D60 | published | ACESproxy 12 bit |
    /// | Apple RGB | D65 | derived | gamma 1.8 |
    /// | CIE RGB | E | published | gamma 2.2 |
    pub fn standard() -> ColorResult<Self> {
        let observer = Observer::Cie1931TwoDegree;

        let aces = Colorspace::with_matrix(
            ACES_RGB_NAME,
            ACES_RGB,
            observer.illuminant("D60")?,
            ACES_RGB_TO_XYZ,
            TransferFunction::Linear,
        )?
        .with_illuminant("D60");
        let aces_log = aces.with_transfer(ACES_RGB_LOG_NAME, TransferFunction::AcesLog)?;
        let aces_proxy_10 = aces.with_transfer(
            ACES_RGB_PROXY_10_NAME,
            TransferFunction::AcesProxy { bit_depth: BitDepth::Ten },
        )?;
        let aces_proxy_12 = aces.with_transfer(
            ACES_RGB_PROXY_12_NAME,
            TransferFunction::AcesProxy { bit_depth: BitDepth::Twelve },
        )?;

        let apple = Colorspace::from_primaries(
            APPLE_RGB_NAME,
            APPLE_RGB,
            observer.illuminant("D65")?,
            TransferFunction::Gamma { exponent: APPLE_RGB_GAMMA },
        )?
        .with_illuminant("D65");

        let cie = Colorspace::with_matrix(
            CIE_RGB_NAME,
            CIE_RGB,
            observer.illuminant("E")?,
            CIE_RGB_TO_XYZ,
            TransferFunction::Gamma { exponent: CIE_RGB_GAMMA },
        )?
        .with_illuminant("E");

        let mut registry = Self::new();
        for cs in [aces, aces_log, aces_proxy_10, aces_proxy_12, apple, cie] {
            registry.insert(cs)?;
        }
        debug!(count = registry.len(), "built standard colorspace registry");
        Ok(registry)
    }

    /// Adds a colorspace. Names are unique, compared ASCII case-insensitively.
    pub fn insert(&mut self, colorspace: Colorspace) -> ColorResult<()> {
        if self.contains(colorspace.name()) {
            return Err(ColorError::DuplicateColorspace {
                name: colorspace.name().to_string(),
            });
        }
        debug!(name = colorspace.name(), transfer = %colorspace.transfer(), "registered colorspace");
        self.spaces.push(colorspace);
        Ok(())
    }

    /// Looks up a colorspace by name.
    ///
    /// An exact match wins; otherwise the name is compared ASCII
    /// case-insensitively.
    pub fn get(&self, name: &str) -> ColorResult<&Colorspace> {
        self.spaces
            .iter()
            .find(|cs| cs.name() == name)
            .or_else(|| self.spaces.iter().find(|cs| cs.name().eq_ignore_ascii_case(name)))
            .ok_or_else(|| ColorError::unknown_colorspace(name))
    }

    /// Returns true if a colorspace with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.spaces.iter().any(|cs| cs.name().eq_ignore_ascii_case(name))
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spaces.iter().map(|cs| cs.name())
    }

    /// Registered colorspaces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Colorspace> {
        self.spaces.iter()
    }

    /// Number of registered colorspaces.
    #[inline]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Returns true if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColorspaceRegistry {
    type Item = &'a Colorspace;
    type IntoIter = std::slice::Iter<'a, Colorspace>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.iter()
    }
}
