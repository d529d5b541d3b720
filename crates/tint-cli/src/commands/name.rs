//! Name lookup command.

use crate::NameArgs;
use anyhow::Result;
use serde_json::json;
use tint_codec::{from_name, lookup};
use tint_core::Rgba;
use tracing::warn;

/// Runs the name command. Unknown names print black, like the library.
pub fn run(args: NameArgs, verbose: bool) -> Result<()> {
    let packed = lookup(&args.name);
    if packed == 0 && !args.name.eq_ignore_ascii_case("black") {
        warn!(name = %args.name, "unknown color name");
    }
    let color = Rgba::from(from_name(&args.name));

    if args.json {
        let out = json!({
            "name": args.name,
            "rgb24": packed,
            "components": super::components_json(&color, false),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} = #{:06X}", args.name, packed);
        if verbose {
            super::print_components(&color, false);
        }
    }
    Ok(())
}
