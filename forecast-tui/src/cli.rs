use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};

use forecast_core::{Config, WeatherApiClient, WeatherService};

use crate::{logging, runtime};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Weather forecast TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key used for forecasts.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            // No subcommand launches the forecast screen.
            None => launch().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read the API key")?;

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("The API key cannot be empty.");
    }

    config.set_api_key(key.to_string());
    config.save()?;

    println!("Key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn launch() -> anyhow::Result<()> {
    logging::init()?;

    let config = Config::load()?;
    let api_key = config.resolved_api_key()?;

    let service: Arc<dyn WeatherService> = Arc::new(WeatherApiClient::new(api_key));
    runtime::run(service).await
}
