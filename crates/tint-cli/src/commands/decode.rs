//! Decode command.
//!
//! Prints the components of a packed value in the chosen format.

use crate::DecodeArgs;
use anyhow::{Context, Result};
use serde_json::json;
use tint_codec::{expand_rgb555, expand_rgb565, to_rgba32, PackedFormat};
use tint_core::Rgba;
use tracing::debug;

/// Runs the decode command.
pub fn run(args: DecodeArgs, verbose: bool) -> Result<()> {
    let value = super::parse_packed(&args.value)?;
    let color = decode(value, args.format, args.expand)?;
    debug!(value, format = %args.format, expand = args.expand, "decoded");

    let with_alpha = args.format.has_alpha();
    if args.json {
        let out = json!({
            "value": value,
            "format": args.format.name(),
            "components": super::components_json(&color, with_alpha),
            "rgba32": to_rgba32(&color),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:#X} ({})", value, args.format);
        super::print_components(&color, with_alpha);
        if verbose {
            println!("  rgba32: {:#010X}", to_rgba32(&color));
        }
    }
    Ok(())
}

/// Decodes `value`, optionally rescaling 5/6-bit formats to 8 bits.
pub fn decode(value: i64, format: PackedFormat, expand: bool) -> Result<Rgba> {
    let color = format
        .decode(value)
        .with_context(|| format!("Cannot decode {:#X} as {}", value, format))?;
    if !expand {
        return Ok(color);
    }
    // validated by decode, so the narrowing is lossless
    Ok(match format {
        PackedFormat::Rgb565 => Rgba::from(expand_rgb565(value as u16)),
        PackedFormat::Rgb555 => Rgba::from(expand_rgb555(value as u16)),
        PackedFormat::Rgb24 | PackedFormat::Rgba32 => color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_native() {
        let c = decode(0xFFFF, PackedFormat::Rgb565, false).unwrap();
        assert_eq!(c.to_array(), [31, 63, 31, 255]);
    }

    #[test]
    fn test_decode_expanded() {
        let c = decode(0xFFFF, PackedFormat::Rgb565, true).unwrap();
        assert_eq!(c.to_array(), [255, 255, 255, 255]);
        let c = decode(0x7FFF, PackedFormat::Rgb555, true).unwrap();
        assert_eq!(c.rgb().to_int(), 0xFFFFFF);
    }

    #[test]
    fn test_decode_out_of_range() {
        let err = decode(0x8000, PackedFormat::Rgb555, false).unwrap_err();
        assert!(err.to_string().contains("rgb555"));
    }
}
