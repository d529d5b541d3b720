//! Encode command.

use crate::EncodeArgs;
use anyhow::Result;
use tint_core::Rgba;

/// Runs the encode command, printing the packed value in hex.
pub fn run(args: EncodeArgs, verbose: bool) -> Result<()> {
    let color = Rgba::new(args.r, args.g, args.b, args.a.unwrap_or(0xFF));
    let packed = args.format.encode(&color);
    let width = args.format.bits().div_ceil(4) as usize;
    println!("{:#0w$X}", packed, w = width + 2);
    if verbose {
        println!("  {} ({})", color, args.format);
    }
    Ok(())
}
