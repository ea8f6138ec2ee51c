//! YAML colorspace configuration.
//!
//! A config file lists extra colorspaces to add to a registry:
//!
//! ```yaml
//! colorspaces:
//!   - name: Wide Gamut
//!     primaries: [[0.7347, 0.2653], [0.1152, 0.8264], [0.1566, 0.0177]]
//!     white_point: { illuminant: D50 }
//!     transfer: { type: gamma, exponent: 2.2 }
//!   - name: ACES Proxy Custom
//!     primaries: [[0.7347, 0.2653], [0.0, 1.0], [0.0001, -0.077]]
//!     white_point: { xy: [0.32168, 0.33767] }
//!     transfer: { type: aces_proxy, bit_depth: "12 bit" }
//!     to_xyz:
//!       - [0.952552396, 0.0, 0.0000936786317]
//!       - [0.343966450, 0.728166097, -0.0721325464]
//!       - [0.0, 0.0, 1.00882518]
//! ```
//!
//! `white_point` is either an illuminant name (with an optional `observer`,
//! CIE 1931 2° by default) or explicit `xy` coordinates. `transfer` defaults to
//! linear. Without `to_xyz` the matrix is derived from the primaries.
//!
//! Loading is all-or-nothing: if any entry is invalid or clashes with an
//! existing name, the registry is left unchanged.

use std::path::Path;

use rgbspace_math::Mat3;
use rgbspace_primaries::illuminants::Observer;
use rgbspace_primaries::Primaries;
use rgbspace_transfer::TransferFunction;
use serde::Deserialize;
use tracing::{debug, info};

use crate::colorspace::Colorspace;
use crate::error::{ColorError, ColorResult};
use crate::registry::ColorspaceRegistry;

impl ColorspaceRegistry {
    /// Adds the colorspaces declared in a YAML string. Returns how many were added.
    pub fn load_yaml_str(&mut self, yaml: &str) -> ColorResult<usize> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;

        let mut parsed = Vec::with_capacity(raw.colorspaces.len());
        for raw_cs in raw.colorspaces {
            let cs = parse_colorspace(raw_cs)?;
            let clash = self.contains(cs.name())
                || parsed.iter().any(|p: &Colorspace| p.name().eq_ignore_ascii_case(cs.name()));
            if clash {
                return Err(ColorError::DuplicateColorspace {
                    name: cs.name().to_string(),
                });
            }
            parsed.push(cs);
        }

        let count = parsed.len();
        for cs in parsed {
            self.insert(cs)?;
        }
        debug!(count, "loaded colorspaces from YAML");
        Ok(count)
    }

    /// Adds the colorspaces declared in a YAML file. Returns how many were added.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ColorResult<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let count = self.load_yaml_str(&content)?;
        info!(path = %path.display(), count, "loaded colorspace config");
        Ok(count)
    }

    /// Standard registry extended with the colorspaces of a YAML file.
    pub fn standard_with_config(path: impl AsRef<Path>) -> ColorResult<Self> {
        let mut registry = Self::standard()?;
        registry.load_file(path)?;
        Ok(registry)
    }
}

fn parse_colorspace(raw: RawColorspace) -> ColorResult<Colorspace> {
    let primaries = Primaries::from_array(raw.primaries);

    let (white_point, illuminant) = match raw.white_point {
        RawWhitePoint::Illuminant { illuminant, observer } => {
            let observer = match observer {
                Some(name) => name.parse::<Observer>()?,
                None => Observer::default(),
            };
            (observer.illuminant(&illuminant)?, Some(illuminant))
        }
        RawWhitePoint::Xy { xy: [x, y] } => ((x, y), None),
    };

    let cs = match raw.to_xyz {
        Some(rows) => {
            let m = Mat3::from_rows(rows);
            if !m.is_finite() {
                return Err(ColorError::Config(format!(
                    "{}: to_xyz contains non-finite values",
                    raw.name
                )));
            }
            Colorspace::with_matrix(raw.name, primaries, white_point, m, raw.transfer)?
        }
        None => Colorspace::from_primaries(raw.name, primaries, white_point, raw.transfer)?,
    };

    Ok(match illuminant {
        Some(name) => cs.with_illuminant(name),
        None => cs,
    })
}

// ============================================================================
// Raw YAML structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    colorspaces: Vec<RawColorspace>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColorspace {
    name: String,
    primaries: [[f64; 2]; 3],
    white_point: RawWhitePoint,
    #[serde(default)]
    transfer: TransferFunction,
    to_xyz: Option<[[f64; 3]; 3]>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWhitePoint {
    Illuminant {
        illuminant: String,
        observer: Option<String>,
    },
    Xy {
        xy: [f64; 2],
    },
}
