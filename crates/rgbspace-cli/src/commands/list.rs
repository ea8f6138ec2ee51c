//! List registered colorspaces.

use crate::ListArgs;
use anyhow::Result;
use rgbspace_color::ColorspaceRegistry;

pub fn run(args: ListArgs, registry: &ColorspaceRegistry) -> Result<()> {
    for cs in registry {
        if args.long {
            let (x, y) = cs.white_point();
            println!(
                "{:<24} {:<22} white {} ({x:.5}, {y:.5})",
                cs.name(),
                cs.transfer().to_string(),
                cs.illuminant().unwrap_or("-"),
            );
        } else {
            println!("{}", cs.name());
        }
    }
    Ok(())
}
