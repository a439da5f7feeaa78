//! Knight-move path finder.
//!
//! Run: cargo run --bin knight -- --input input.txt --size 8 --board

use clap::Parser;
use knight_cli::{Args, RunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::try_from(Args::parse())?;
    knight_cli::run(&config)
}
