//! Convert encoded RGB between colorspaces.

use crate::ConvertArgs;
use anyhow::Result;
use rgbspace_color::ColorspaceRegistry;
use tracing::info;

pub fn run(args: ConvertArgs, registry: &ColorspaceRegistry) -> Result<()> {
    let src = super::lookup(registry, &args.from)?;
    let dst = super::lookup(registry, &args.to)?;

    if src.white_point() != dst.white_point() {
        info!(from = src.name(), to = dst.name(), "white points differ, no chromatic adaptation applied");
    }

    let rgb = src.convert(super::xyz::triplet(&args.rgb)?, dst);
    println!("{}", super::format_values(&rgb));
    Ok(())
}
