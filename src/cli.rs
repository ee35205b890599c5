use clap::{ArgAction, Parser};
use std::path::PathBuf;

const DEFAULT_SOURCE: &str = "health.sqlite";
const DEFAULT_DESTINATION: &str = "daily_health.sqlite";

#[derive(Parser, Debug)]
#[command(
    name = "devezh",
    about = "Aggregate a Pebble Health export (health.sqlite) into one summary row per day"
)]
pub struct Cli {
    /// Path to the health database exported from the Pebble app.
    ///
    /// Default: health.sqlite
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Path of the derived per-day database to create.
    ///
    /// Default: daily_health.sqlite
    #[arg(value_name = "DESTINATION", default_value = DEFAULT_DESTINATION)]
    pub destination: PathBuf,

    /// Drop and rebuild days_summary if the destination already has one.
    #[arg(long)]
    pub overwrite: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
