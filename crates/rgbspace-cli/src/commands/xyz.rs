//! RGB <-> XYZ commands.

use crate::TripletArgs;
use anyhow::{Context, Result};
use rgbspace_color::ColorspaceRegistry;

pub fn run_to_xyz(args: TripletArgs, registry: &ColorspaceRegistry) -> Result<()> {
    let cs = super::lookup(registry, &args.colorspace)?;
    let xyz = cs.rgb_to_xyz(triplet(&args.values)?);
    println!("{}", super::format_values(&xyz));
    Ok(())
}

pub fn run_from_xyz(args: TripletArgs, registry: &ColorspaceRegistry) -> Result<()> {
    let cs = super::lookup(registry, &args.colorspace)?;
    let rgb = cs.xyz_to_rgb(triplet(&args.values)?);
    println!("{}", super::format_values(&rgb));
    Ok(())
}

/// Converts a parsed value list into a fixed triplet.
pub fn triplet(values: &[f64]) -> Result<[f64; 3]> {
    values
        .try_into()
        .ok()
        .with_context(|| format!("Expected 3 values, got {}", values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triplet_length() {
        assert_eq!(triplet(&[1.0, 2.0, 3.0]).unwrap(), [1.0, 2.0, 3.0]);
        assert!(triplet(&[1.0, 2.0]).is_err());
    }
}
