//! Binary crate for the `forecast` terminal app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive configuration
//! - The forecast screen's state machine
//! - Rendering: search box, suggestion list, day cards, hourly chart

use clap::Parser;

mod app;
mod cli;
mod logging;
mod runtime;
mod ui;

#[cfg(test)]
mod fixtures;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
