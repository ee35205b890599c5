#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use devezh::{cli, summary, utils};

#[macro_use]
extern crate devezh;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    dlog!(
        "mode=build source={} destination={} overwrite={}",
        cli.source.display(),
        cli.destination.display(),
        cli.overwrite
    );

    let report = summary::build_daily_summary(&cli.source, &cli.destination, cli.overwrite)?;

    match (report.date_min, report.date_max) {
        (Some(date_min), Some(date_max)) => {
            println!("{date_min} {date_max}");
            tracing::info!(days = report.days_written, "done");
        }
        _ => {
            tracing::warn!("source contained no samples or sessions; wrote an empty table");
        }
    }

    Ok(())
}
