//! tint - inspect packed color values from the command line
//!
//! Decodes packed integers and color names into their components and packs
//! components back into wire formats.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tint_codec::PackedFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Inspect packed color values")]
#[command(long_about = "
Decode packed color integers and color names into components, or pack
components into a wire format.

Examples:
  tint decode 0xFFF00F                  # RGB24
  tint decode 0xFFFF -f rgb565          # native 5/6/5-bit fields
  tint decode 0xFFFF -f rgb565 --expand # rescaled to 8 bits
  tint decode '#11223380' -f rgba32 --json
  tint name rebeccapurple
  tint encode 31 63 31 -f rgb565
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a packed integer
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Look up a color name
    #[command(visible_alias = "n")]
    Name(NameArgs),

    /// Pack components into a format
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),
}

#[derive(Args)]
struct DecodeArgs {
    /// Packed value: decimal, 0x-prefixed or #-prefixed hex
    value: String,

    /// Packed format: rgb24, rgba32, rgb565, rgb555
    #[arg(short, long, default_value = "rgb24")]
    format: PackedFormat,

    /// Rescale 5/6-bit fields to 8 bits (rgb565, rgb555)
    #[arg(long)]
    expand: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NameArgs {
    /// Color name (CSS names, case-insensitive)
    name: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct EncodeArgs {
    /// Red
    r: i64,

    /// Green
    g: i64,

    /// Blue
    b: i64,

    /// Alpha (defaults to opaque)
    a: Option<i64>,

    /// Packed format: rgb24, rgba32, rgb565, rgb555
    #[arg(short, long, default_value = "rgb24")]
    format: PackedFormat,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // a second init (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().without_time().with_target(false))
        .with(filter)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode(args) => commands::decode::run(args, cli.verbose),
        Commands::Name(args) => commands::name::run(args, cli.verbose),
        Commands::Encode(args) => commands::encode::run(args, cli.verbose),
    }
}
