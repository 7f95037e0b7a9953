//! Alert Sync Planner - Main Entry Point

use anyhow::Result;
use clap::Parser;
use cli::{init_logging, run, Cli};
use tracing::debug;

fn main() -> Result<()> {
    let args = Cli::parse();
    let settings = args.settings()?;
    init_logging(&settings)?;

    debug!("alertsync v{}", env!("CARGO_PKG_VERSION"));

    let report = run(&args, &settings)?;
    println!("{}", report);

    Ok(())
}
