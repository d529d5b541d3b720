//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod name;

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use tint_core::Rgba;

/// Parses a packed value given as decimal, `0x` hex or `#` hex.
pub fn parse_packed(text: &str) -> Result<i64> {
    let text = text.trim();
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(hex) = text.strip_prefix('#') {
        (hex, 16)
    } else {
        (text, 10)
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() {
        bail!("empty packed value: '{}'", text);
    }
    i64::from_str_radix(&digits, radix).with_context(|| format!("Invalid packed value: {}", text))
}

/// Prints components as indented text lines.
pub fn print_components(color: &Rgba, with_alpha: bool) {
    println!("  r: {}", color.r());
    println!("  g: {}", color.g());
    println!("  b: {}", color.b());
    if with_alpha {
        println!("  a: {}", color.a());
    }
}

/// Components as a JSON object.
pub fn components_json(color: &Rgba, with_alpha: bool) -> Value {
    let mut obj = json!({
        "r": color.r().value(),
        "g": color.g().value(),
        "b": color.b().value(),
    });
    if with_alpha {
        obj["a"] = json!(color.a().value());
    }
    obj
}
