//! Encode and decode commands.

use crate::{DecodeArgs, EncodeArgs};
use anyhow::{bail, Result};
use rgbspace_color::{Colorspace, ColorspaceRegistry};
use rgbspace_transfer::{aces_log, TransferFunction};
use tracing::trace;

pub fn run_encode(args: EncodeArgs, registry: &ColorspaceRegistry) -> Result<()> {
    let cs = super::lookup(registry, &args.colorspace)?;
    let codes = encode_values(cs, &args.values, args.integer)?;
    println!("{}", super::format_values(&codes));
    Ok(())
}

pub fn run_decode(args: DecodeArgs, registry: &ColorspaceRegistry) -> Result<()> {
    let cs = super::lookup(registry, &args.colorspace)?;
    let linear = decode_values(cs, &args.values);
    println!("{}", super::format_values(&linear));
    Ok(())
}

/// Encodes linear values; `integer` quantizes to 16 bit bin centres.
pub fn encode_values(cs: &Colorspace, values: &[f64], integer: bool) -> Result<Vec<f64>> {
    trace!(colorspace = cs.name(), count = values.len(), integer, "encode");
    if !integer {
        return Ok(values.iter().map(|&v| cs.encode(v)).collect());
    }
    match cs.transfer() {
        TransferFunction::AcesLog => Ok(values.iter().map(|&v| aces_log::encode_integer(v)).collect()),
        other => bail!(
            "--integer is only defined for the ACES log encoding, {} uses {}",
            cs.name(),
            other
        ),
    }
}

/// Decodes code values.
pub fn decode_values(cs: &Colorspace, values: &[f64]) -> Vec<f64> {
    trace!(colorspace = cs.name(), count = values.len(), "decode");
    let mut out = values.to_vec();
    cs.decode_buffer(&mut out);
    out
}
