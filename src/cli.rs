use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ozone air-quality map view core.
#[derive(Parser)]
#[command(
    name = "ozone",
    version,
    about = "Month slider, zone filter and site inspector for the ozone map"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the calendar month for a slider position.
    Month(MonthArgs),
    /// Print the layer filter for a zone and month.
    Filter(FilterArgs),
    /// Print the page manifest: map, geocoder, layer and chart options.
    Manifest(ManifestArgs),
    /// Replay scripted UI events against a local dataset.
    Replay(ReplayArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Slider position (1 = 2023-09, 28 = 2025-12).
    #[arg(allow_negative_numbers = true)]
    pub position: i64,
}

/// Arguments for the `filter` subcommand.
#[derive(clap::Args)]
pub struct FilterArgs {
    /// Zone name, or "all" for every zone.
    #[arg(short, long, default_value = "all")]
    pub zone: String,

    /// Month label in YYYY-MM form.
    #[arg(short, long)]
    pub month: String,
}

/// Arguments for the `manifest` subcommand.
#[derive(clap::Args)]
pub struct ManifestArgs {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the manifest here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `replay` subcommand.
#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Local GeoJSON feature collection.
    #[arg(short, long)]
    pub data: PathBuf,

    /// TOML event script.
    #[arg(short, long)]
    pub script: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
