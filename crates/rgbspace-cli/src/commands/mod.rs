//! CLI command implementations

pub mod convert;
pub mod info;
pub mod list;
pub mod transfer;
pub mod xyz;

use anyhow::{Context, Result};
use rgbspace_color::{Colorspace, ColorspaceRegistry};
use std::path::Path;
use tracing::debug;

/// Standard registry, extended with the spaces of `config` if given.
pub fn load_registry(config: Option<&Path>) -> Result<ColorspaceRegistry> {
    let mut registry = ColorspaceRegistry::standard().context("Failed to build standard colorspaces")?;
    if let Some(path) = config {
        let count = registry
            .load_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        debug!(count, path = %path.display(), "config colorspaces added");
    }
    Ok(registry)
}

/// Looks up a colorspace, listing the known names on failure.
pub fn lookup<'a>(registry: &'a ColorspaceRegistry, name: &str) -> Result<&'a Colorspace> {
    registry.get(name).with_context(|| {
        let known: Vec<_> = registry.names().collect();
        format!("Known colorspaces: {}", known.join(", "))
    })
}

/// Formats values space-separated, shortest round-trip representation.
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
