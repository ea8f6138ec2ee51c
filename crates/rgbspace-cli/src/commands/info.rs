//! Colorspace info command.
//!
//! Prints primaries, white point, both matrices and the transfer function.

use crate::InfoArgs;
use anyhow::Result;
use rgbspace_color::math::Mat3;
use rgbspace_color::ColorspaceRegistry;

pub fn run(args: InfoArgs, registry: &ColorspaceRegistry) -> Result<()> {
    let cs = super::lookup(registry, &args.colorspace)?;
    let p = cs.primaries();
    let (wx, wy) = cs.white_point();

    println!("{}", cs.name());
    println!("  Transfer:    {}", cs.transfer());
    println!("  Primaries:   R ({:.6}, {:.6})", p.r.0, p.r.1);
    println!("               G ({:.6}, {:.6})", p.g.0, p.g.1);
    println!("               B ({:.6}, {:.6})", p.b.0, p.b.1);
    match cs.illuminant() {
        Some(name) => println!("  White point: {name} ({wx:.6}, {wy:.6})"),
        None => println!("  White point: ({wx:.6}, {wy:.6})"),
    }
    print_matrix("RGB to XYZ:", cs.to_xyz_matrix());
    print_matrix("XYZ to RGB:", cs.from_xyz_matrix());
    Ok(())
}

fn print_matrix(label: &str, m: &Mat3) {
    for (i, row) in m.to_rows().iter().enumerate() {
        let head = if i == 0 { label } else { "" };
        println!("  {head:<12} [{:>12.9} {:>12.9} {:>12.9}]", row[0], row[1], row[2]);
    }
}
