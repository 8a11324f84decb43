//! # osmodash CLI
//!
//! Generates dashboard sample series and inspects exported snapshots.
//!
//! ## Usage
//!
//! ```bash
//! # One day of samples as JSON on stdout
//! osmodash generate --seed 42
//!
//! # Parquet snapshot
//! osmodash generate --seed 42 --format parquet --output day.osmodash.parquet
//!
//! # Dashboard report with summary statistics
//! osmodash summary --period 2025-04
//!
//! # Inspect a snapshot
//! osmodash info day.osmodash.parquet
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
