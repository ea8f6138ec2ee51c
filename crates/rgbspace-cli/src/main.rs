//! rgbspace - ACES, Apple and CIE RGB encodings from the command line
//!
//! Encodes and decodes values with a colorspace's transfer function and
//! converts RGB values through CIE XYZ.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "rgbspace")]
#[command(author, version, about = "ACES, Apple and CIE RGB transfer functions and conversions")]
#[command(long_about = "
Transfer functions and RGB <-> XYZ conversions for ACES RGB (linear, log,
proxy 10/12 bit), Apple RGB and CIE RGB.

Examples:
  rgbspace list                                  # Registered colorspaces
  rgbspace info \"ACES RGB Log\"                   # Primaries, white, matrices
  rgbspace encode \"ACES RGB Log\" 0.18 1 2        # Linear -> code values
  rgbspace encode \"ACES RGB Log\" 0.18 --integer  # 16 bit integer bin centres
  rgbspace decode \"ACES RGB Proxy 10\" 550        # Code values -> linear
  rgbspace to-xyz \"Apple RGB\" 1 1 1
  rgbspace convert --from \"Apple RGB\" --to \"ACES RGB\" 0.5 0.5 0.5
  rgbspace --config spaces.yaml list             # Extra colorspaces from YAML
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// YAML file with additional colorspaces
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered colorspaces
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show primaries, white point, matrices and transfer of a colorspace
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Encode linear values with a colorspace's transfer function
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Decode code values with a colorspace's transfer function
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Encoded RGB to CIE XYZ
    #[command(name = "to-xyz")]
    ToXyz(TripletArgs),

    /// CIE XYZ to encoded RGB
    #[command(name = "from-xyz")]
    FromXyz(TripletArgs),

    /// Convert encoded RGB between two colorspaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

/// Arguments for the `list` command.
#[derive(Args)]
struct ListArgs {
    /// Also show transfer function and white point
    #[arg(short, long)]
    long: bool,
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Colorspace name
    colorspace: String,
}

/// Arguments for the `encode` command.
#[derive(Args)]
struct EncodeArgs {
    /// Colorspace name
    colorspace: String,

    /// Linear values
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Quantize to 16 bit integer code values (ACES RGB Log only)
    #[arg(short, long)]
    integer: bool,
}

/// Arguments for the `decode` command.
#[derive(Args)]
struct DecodeArgs {
    /// Colorspace name
    colorspace: String,

    /// Code values
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

/// Arguments for `to-xyz` and `from-xyz`.
#[derive(Args)]
struct TripletArgs {
    /// Colorspace name
    colorspace: String,

    /// Three components (RGB or XYZ)
    #[arg(num_args = 3, required = true, allow_negative_numbers = true, value_names = ["A", "B", "C"])]
    values: Vec<f64>,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Source colorspace
    #[arg(short, long)]
    from: String,

    /// Target colorspace
    #[arg(short, long)]
    to: String,

    /// Encoded RGB in the source colorspace
    #[arg(num_args = 3, required = true, allow_negative_numbers = true, value_names = ["R", "G", "B"])]
    rgb: Vec<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so the file writer flushes on exit.
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let registry = commands::load_registry(cli.config.as_deref())?;

    match cli.command {
        Commands::List(args) => commands::list::run(args, &registry),
        Commands::Info(args) => commands::info::run(args, &registry),
        Commands::Encode(args) => commands::transfer::run_encode(args, &registry),
        Commands::Decode(args) => commands::transfer::run_decode(args, &registry),
        Commands::ToXyz(args) => commands::xyz::run_to_xyz(args, &registry),
        Commands::FromXyz(args) => commands::xyz::run_from_xyz(args, &registry),
        Commands::Convert(args) => commands::convert::run(args, &registry),
    }
}
