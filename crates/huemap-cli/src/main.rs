//! huemap - remap image hues through a GIMP gradient
//!
//! Every hue of the input is looked up in a table sampled from a cyclic
//! gradient and replaced, keeping saturation, value and alpha.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod io;
mod settings;

#[derive(Parser)]
#[command(name = "huemap")]
#[command(author, version, about = "Remap image hues through a gradient")]
#[command(long_about = "
Replaces the hue of every pixel with the hue found at the same position of a
cyclic gradient. Saturation, value and alpha are kept, so grays stay gray.

Examples:
  huemap map photo.png -o posterized.png          # Six-band rainbow
  huemap map photo.png -o out.png -g sunset.ggr   # Custom GIMP gradient
  huemap map photo.png -o out.png --flatten --background 0,0,0
  huemap map photo.png -o out.png --save-config look.yaml
  huemap map other.png -o out2.png --config look.yaml
  huemap gradient -o rainbow.ggr                  # Write the default gradient
  huemap table -g sunset.ggr                      # Inspect the lookup table
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Remap the hues of a PNG image
    #[command(visible_alias = "m")]
    Map(MapArgs),

    /// Write the default rainbow gradient as a .ggr file
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),

    /// Print the distinct hues of a lookup table
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

#[derive(Args)]
struct MapArgs {
    /// Input image (PNG, 8-bit)
    input: PathBuf,

    /// Output image (PNG)
    #[arg(short, long)]
    output: PathBuf,

    /// Gradient file (.ggr); defaults to the six-band rainbow
    #[arg(short, long)]
    gradient: Option<PathBuf>,

    /// Lookup table size
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Read the gradient from right to left
    #[arg(short, long)]
    reverse: bool,

    /// Composite onto an opaque background and write RGB
    #[arg(short, long)]
    flatten: bool,

    /// Background for --flatten as R,G,B
    #[arg(short, long, value_parser = settings::parse_rgb)]
    background: Option<[u8; 3]>,

    /// Load settings from a YAML file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the effective settings to a YAML file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Process rows in parallel
    #[arg(short, long)]
    parallel: bool,
}

#[derive(Args)]
struct GradientArgs {
    /// Output gradient file (.ggr)
    #[arg(short, long)]
    output: PathBuf,

    /// Gradient name stored in the file
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
struct TableArgs {
    /// Gradient file (.ggr); defaults to the six-band rainbow
    #[arg(short, long)]
    gradient: Option<PathBuf>,

    /// Lookup table size
    #[arg(short = 'n', long, default_value_t = huemap_gradient::DEFAULT_NUM_SAMPLES)]
    samples: usize,

    /// Read the gradient from right to left
    #[arg(short, long)]
    reverse: bool,
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Map(args) => commands::map::run(args, cli.verbose),
        Commands::Gradient(args) => commands::gradient::run(args, cli.verbose),
        Commands::Table(args) => commands::table::run(args, cli.verbose),
    }
}
