//! lux - exposure calculator and GLSL color matrix generator
//!
//! Prints ACES color matrices as `mat3` literals, converts between camera
//! settings and scene luminance, and writes solid-color test images.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lux_primaries::MatrixId;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lux")]
#[command(author, version, about = "Exposure calculator and GLSL color matrix generator")]
#[command(long_about = "
Generates the sRGB <-> ACEScg matrices used by a tone-mapping shader and
computes photographic exposure from camera settings.

Examples:
  lux matrices                          # sRGB/ACEScg matrices as GLSL mat3
  lux matrices --row-major --labelled   # Mathematical row order
  lux compose srgb-to-xyz d65-to-d60 xyz-to-ap1 --name srgb_to_ap1
  lux exposure --aperture 16 --shutter 0.01 --iso 100
  lux exposure --luminance 40
  lux image -o red.exr --color 1,0,0
  lux generate                          # Matrices, then test.exr
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sRGB/ACEScg conversion matrices as GLSL
    #[command(visible_alias = "m")]
    Matrices(MatricesArgs),

    /// Compose registry matrices in application order and print the result
    #[command(visible_alias = "c")]
    Compose(ComposeArgs),

    /// Compute EV100, luminance and exposure from camera settings
    #[command(visible_alias = "ev")]
    Exposure(ExposureArgs),

    /// Write a solid-color test image
    #[command(visible_alias = "i")]
    Image(ImageArgs),

    /// Print the matrices, then write the test image
    Generate(GenerateArgs),
}

#[derive(Args)]
struct MatricesArgs {
    /// Print mathematical rows instead of GLSL columns
    #[arg(long)]
    row_major: bool,

    /// Precede each matrix with a comment naming the layout
    #[arg(long)]
    labelled: bool,
}

#[derive(Args)]
struct ComposeArgs {
    /// Matrices in the order they apply to a color
    /// (srgb-to-xyz, xyz-to-srgb, ap1-to-xyz, xyz-to-ap1, d65-to-d60,
    /// d60-to-d65, rrt-sat, odt-sat)
    #[arg(required = true, num_args = 1..)]
    matrices: Vec<MatrixId>,

    /// GLSL constant name
    #[arg(short, long, default_value = "m")]
    name: String,

    /// Print mathematical rows instead of GLSL columns
    #[arg(long)]
    row_major: bool,

    /// Precede the matrix with a comment naming the layout
    #[arg(long)]
    labelled: bool,
}

#[derive(Args)]
struct ExposureArgs {
    /// Relative aperture (f-number)
    #[arg(
        short = 'N',
        long,
        requires_all = ["shutter", "iso"],
        conflicts_with = "luminance",
        allow_negative_numbers = true
    )]
    aperture: Option<f64>,

    /// Shutter time in seconds
    #[arg(short = 't', long, requires = "aperture", allow_negative_numbers = true)]
    shutter: Option<f64>,

    /// Sensor sensitivity (ISO arithmetic speed)
    #[arg(short = 'S', long, requires = "aperture", allow_negative_numbers = true)]
    iso: Option<f64>,

    /// Average scene luminance in cd/m^2 (instead of camera settings)
    #[arg(
        short = 'L',
        long,
        required_unless_present = "aperture",
        allow_negative_numbers = true
    )]
    luminance: Option<f64>,
}

#[derive(Args)]
struct ImageArgs {
    /// Output file
    #[arg(short, long, default_value = "test.exr")]
    output: PathBuf,

    /// Channel count (1-4)
    #[arg(short, long, default_value_t = 3)]
    channels: u32,

    /// Width in pixels (1-7680)
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Height in pixels (1-4320)
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Fill color as r,g,b,a (missing components are zero)
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..=4,
        default_value = "1,0,0,0",
        allow_negative_numbers = true
    )]
    color: Vec<f32>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    matrices: MatricesArgs,

    #[command(flatten)]
    image: ImageArgs,
}

/// Installs the stderr log subscriber.
///
/// `-v` flags pick the level; without them `RUST_LOG` applies, falling
/// back to `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Matrices(args) => commands::matrices::run(args),
        Commands::Compose(args) => commands::compose::run(args, cli.verbose),
        Commands::Exposure(args) => commands::exposure::run(args),
        Commands::Image(args) => commands::image::run(args, cli.verbose),
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
    }
}
